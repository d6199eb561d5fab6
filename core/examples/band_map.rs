use std::env;

use terrain_core::{
    AltitudeBand, CameraOffset, GenerationMode, HeightField, OpenSimplex2D, Viewport,
};

// Each character covers this many world cells per side
const STRIDE: i64 = 4;

fn glyph(band: AltitudeBand) -> char {
    match band {
        AltitudeBand::DeepWater => '~',
        AltitudeBand::ShallowWater => '-',
        AltitudeBand::Sand => '.',
        AltitudeBand::Grass => '"',
        AltitudeBand::Forest => '*',
        AltitudeBand::Rock => '^',
        AltitudeBand::Snow => 'A',
    }
}

// Print an 80×40 band map around the origin; pass "continuous" to switch modes
fn main() {
    let mode = match env::args().nth(1).as_deref() {
        Some("continuous") => GenerationMode::Continuous,
        _ => GenerationMode::Continent,
    };
    let field = HeightField::new(OpenSimplex2D::new(2025));
    let viewport = Viewport::from_pixels(80.0, 40.0, 1);
    let camera = CameraOffset::new(-40.0, -20.0);

    println!("{} mode", mode.label());
    for row in 0..viewport.rows {
        let line: String = (0..viewport.columns)
            .map(|column| {
                let (wx, wy) = viewport.world_at(camera, column, row);
                let altitude = field.altitude_at_cell(wx * STRIDE, wy * STRIDE, mode);
                glyph(AltitudeBand::of(altitude))
            })
            .collect();
        println!("{}", line);
    }
}
