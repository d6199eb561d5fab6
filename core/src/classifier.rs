use palette::Srgb;

use crate::utils::{clamp, remap};

// 8-bit sRGB triple produced for every classified altitude
pub type Color = Srgb<u8>;

// Lower edges of each band; a band runs up to (not including) the next edge
const SHALLOW_WATER_FLOOR: f64 = -0.3;
const SAND_FLOOR: f64 = 0.0;
const GRASS_FLOOR: f64 = 0.1;
const FOREST_FLOOR: f64 = 0.3;
const ROCK_FLOOR: f64 = 0.6;
const SNOW_FLOOR: f64 = 0.7;

const DEEP_WATER: (i32, i32, i32) = (0, 50, 150);
const SAND: (i32, i32, i32) = (200, 180, 100);

// Altitude sub-ranges, ordered from the sea floor to the peaks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AltitudeBand {
    DeepWater,
    ShallowWater,
    Sand,
    Grass,
    Forest,
    Rock,
    Snow,
}

impl AltitudeBand {
    pub const ALL: [AltitudeBand; 7] = [
        AltitudeBand::DeepWater,
        AltitudeBand::ShallowWater,
        AltitudeBand::Sand,
        AltitudeBand::Grass,
        AltitudeBand::Forest,
        AltitudeBand::Rock,
        AltitudeBand::Snow,
    ];

    // First matching band wins; the input is clamped into [-1, 1] first
    pub fn of(altitude: f64) -> Self {
        match clamp(altitude, -1.0, 1.0) {
            a if a < SHALLOW_WATER_FLOOR => AltitudeBand::DeepWater,
            a if a < SAND_FLOOR => AltitudeBand::ShallowWater,
            a if a < GRASS_FLOOR => AltitudeBand::Sand,
            a if a < FOREST_FLOOR => AltitudeBand::Grass,
            a if a < ROCK_FLOOR => AltitudeBand::Forest,
            a if a < SNOW_FLOOR => AltitudeBand::Rock,
            _ => AltitudeBand::Snow,
        }
    }

    // Altitude interval covered by the band, [lower, upper)
    pub fn range(self) -> (f64, f64) {
        match self {
            AltitudeBand::DeepWater => (-1.0, SHALLOW_WATER_FLOOR),
            AltitudeBand::ShallowWater => (SHALLOW_WATER_FLOOR, SAND_FLOOR),
            AltitudeBand::Sand => (SAND_FLOOR, GRASS_FLOOR),
            AltitudeBand::Grass => (GRASS_FLOOR, FOREST_FLOOR),
            AltitudeBand::Forest => (FOREST_FLOOR, ROCK_FLOOR),
            AltitudeBand::Rock => (ROCK_FLOOR, SNOW_FLOOR),
            AltitudeBand::Snow => (SNOW_FLOOR, 1.0),
        }
    }

    pub fn is_water(self) -> bool {
        matches!(self, AltitudeBand::DeepWater | AltitudeBand::ShallowWater)
    }

    pub fn is_land(self) -> bool {
        !self.is_water()
    }

    pub fn label(self) -> &'static str {
        match self {
            AltitudeBand::DeepWater => "deep water",
            AltitudeBand::ShallowWater => "shallow water",
            AltitudeBand::Sand => "sand",
            AltitudeBand::Grass => "grass",
            AltitudeBand::Forest => "forest",
            AltitudeBand::Rock => "rock",
            AltitudeBand::Snow => "snow",
        }
    }

    // Unclamped channels for an altitude already known to lie in this band
    fn channels(self, altitude: f64) -> (i32, i32, i32) {
        // Interpolated values truncate toward zero
        let lerp = |to: (f64, f64)| remap(altitude, self.range(), to) as i32;
        match self {
            AltitudeBand::DeepWater => DEEP_WATER,
            AltitudeBand::ShallowWater => (0, 100, lerp((150.0, 200.0))),
            AltitudeBand::Sand => SAND,
            AltitudeBand::Grass => (50, lerp((120.0, 180.0)), 50),
            AltitudeBand::Forest => (30, lerp((100.0, 150.0)), 30),
            AltitudeBand::Rock => {
                let brown = lerp((80.0, 120.0));
                (brown, brown - 20, brown - 40)
            }
            AltitudeBand::Snow => {
                let v = lerp((200.0, 255.0));
                (v, v, v)
            }
        }
    }
}

#[inline]
fn channel(v: i32) -> u8 {
    v.clamp(0, 255) as u8
}

// Map an altitude to its terrain color
pub fn classify(altitude: f64) -> Color {
    let altitude = clamp(altitude, -1.0, 1.0);
    let (r, g, b) = AltitudeBand::of(altitude).channels(altitude);
    Srgb::new(channel(r), channel(g), channel(b))
}

// Color as a plain [r, g, b] array, the layout image buffers expect
#[inline]
pub fn rgb(color: Color) -> [u8; 3] {
    let (r, g, b) = color.into_components();
    [r, g, b]
}
