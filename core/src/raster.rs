use image::{Rgb, RgbImage};

use crate::NoiseSource;
use crate::classifier::{classify, rgb};
use crate::heightfield::{GenerationMode, HeightField};
use crate::viewport::{CameraOffset, Viewport};

// Render one pixel per visible cell. Every cell is sampled afresh; nothing is
// cached between calls.
pub fn render_viewport<N: NoiseSource>(
    field: &HeightField<N>,
    viewport: &Viewport,
    camera: CameraOffset,
    mode: GenerationMode,
) -> RgbImage {
    RgbImage::from_fn(viewport.columns, viewport.rows, |column, row| {
        let (wx, wy) = viewport.world_at(camera, column, row);
        Rgb(rgb(classify(field.altitude_at_cell(wx, wy, mode))))
    })
}

#[cfg(test)]
mod tests {
    use crate::{
        CameraOffset, GenerationMode, HeightField, NoiseSource, OpenSimplex2D, Viewport, classify,
        rgb,
    };

    use super::render_viewport;

    struct Constant(f64);

    impl NoiseSource for Constant {
        fn noise2(&self, _x: f64, _y: f64) -> f64 {
            self.0
        }
    }

    #[test]
    fn raster_dimensions() {
        let field = HeightField::new(OpenSimplex2D::new(3));
        let vp = Viewport::from_pixels(64.0, 30.0, 4);
        let img = render_viewport(&field, &vp, CameraOffset::default(), GenerationMode::Continent);
        assert_eq!((img.width(), img.height()), (16, 8));
    }

    #[test]
    fn raster_pixels_match_classifier() {
        let field = HeightField::new(OpenSimplex2D::new(11));
        let vp = Viewport::from_pixels(20.0, 20.0, 2);
        let cam = CameraOffset::new(-37.5, 120.25);
        let img = render_viewport(&field, &vp, cam, GenerationMode::Continuous);
        for (column, row, px) in img.enumerate_pixels() {
            let (wx, wy) = vp.world_at(cam, column, row);
            let expected = rgb(classify(field.altitude_at_cell(wx, wy, GenerationMode::Continuous)));
            assert_eq!(px.0, expected);
        }
    }

    #[test]
    fn panning_by_whole_cells_shifts_the_image() {
        let field = HeightField::new(OpenSimplex2D::new(99));
        let vp = Viewport::from_pixels(12.0, 12.0, 1);
        let a = render_viewport(&field, &vp, CameraOffset::new(0.0, 0.0), GenerationMode::Continent);
        let b = render_viewport(&field, &vp, CameraOffset::new(3.0, 2.0), GenerationMode::Continent);
        for row in 0..10 {
            for column in 0..9 {
                assert_eq!(a.get_pixel(column + 3, row + 2), b.get_pixel(column, row));
            }
        }
    }

    #[test]
    fn flat_noise_renders_a_single_color() {
        // Constant 0.0 gives 0.2 in continent mode: grass
        let field = HeightField::new(Constant(0.0));
        let vp = Viewport::from_pixels(5.0, 5.0, 1);
        let img = render_viewport(&field, &vp, CameraOffset::default(), GenerationMode::Continent);
        let expected = rgb(classify(0.2));
        assert!(img.pixels().all(|p| p.0 == expected));
    }
}
