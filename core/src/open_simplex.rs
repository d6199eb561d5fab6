use noise::{NoiseFn, OpenSimplex};

use crate::NoiseSource;

// OpenSimplex noise from the `noise` crate, seeded once at construction
pub struct OpenSimplex2D {
    seed: u32,
    inner: OpenSimplex,
}

impl OpenSimplex2D {
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            inner: OpenSimplex::new(seed),
        }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl NoiseSource for OpenSimplex2D {
    fn noise2(&self, x: f64, y: f64) -> f64 {
        self.inner.get([x, y])
    }
}
