// core holds the height field, the color classifier and the noise sources they sample
pub mod classifier;
pub mod heightfield;
pub mod noise_backend;
pub mod open_simplex;
pub mod raster;
pub mod simplex2;
pub mod utils;
pub mod viewport;

pub use classifier::{AltitudeBand, Color, classify, rgb};
pub use heightfield::{GenerationMode, HeightField, generate_height};
pub use noise_backend::NoiseBackend;
pub use open_simplex::OpenSimplex2D;
pub use raster::render_viewport;
pub use simplex2::Simplex2D;
pub use viewport::{CameraOffset, Viewport};

// 2D coherent noise primitive sampled by the height field.
// Implementations must be deterministic for a fixed seed and return values in [-1, 1].
pub trait NoiseSource: Send + Sync {
    // Sample noise at (x, y).
    fn noise2(&self, x: f64, y: f64) -> f64;
}

impl<T: NoiseSource + ?Sized> NoiseSource for &T {
    fn noise2(&self, x: f64, y: f64) -> f64 {
        (**self).noise2(x, y)
    }
}

impl<T: NoiseSource + ?Sized> NoiseSource for Box<T> {
    fn noise2(&self, x: f64, y: f64) -> f64 {
        (**self).noise2(x, y)
    }
}
