use serde::{Deserialize, Serialize};

use crate::NoiseSource;
use crate::utils::clamp;

// Altitude returned for coordinates the noise primitive cannot sample (NaN or infinite)
pub const REJECTED_ALTITUDE: f64 = -1.0;

const CONTINENT_FREQUENCY: f64 = 0.005;
const CONTINUOUS_BASE_FREQUENCY: f64 = 0.02;
const BASE_WEIGHT: f64 = 0.8;

const HILLS_FREQUENCY: f64 = 0.02;
const HILLS_WEIGHT: f64 = 0.3;

const DETAIL_FREQUENCY: f64 = 0.08;
const DETAIL_WEIGHT: f64 = 0.1;

const RIDGE_FREQUENCY: f64 = 0.01;
const RIDGE_WEIGHT: f64 = 0.4;

const OUTPUT_SCALE: f64 = 0.7;
const CONTINENT_BIAS: f64 = 0.2;

// How the base octave is chosen and whether the sum is biased towards land
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationMode {
    // Large landmasses: slow base octave plus an upward bias
    #[default]
    Continent,
    // No continents: fast base octave, land and water symmetric
    Continuous,
}

impl GenerationMode {
    pub fn toggled(self) -> Self {
        match self {
            GenerationMode::Continent => GenerationMode::Continuous,
            GenerationMode::Continuous => GenerationMode::Continent,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GenerationMode::Continent => "Continent",
            GenerationMode::Continuous => "Continuous",
        }
    }

    fn base_frequency(self) -> f64 {
        match self {
            GenerationMode::Continent => CONTINENT_FREQUENCY,
            GenerationMode::Continuous => CONTINUOUS_BASE_FREQUENCY,
        }
    }

    fn bias(self) -> f64 {
        match self {
            GenerationMode::Continent => CONTINENT_BIAS,
            GenerationMode::Continuous => 0.0,
        }
    }
}

// Sample the altitude at a world coordinate.
//
// Four octaves are summed: base (mode dependent frequency), hills, detail and a
// rectified ridge term. The sum is scaled, biased in continent mode and hard
// clamped into [-1, 1]. Non-finite coordinates return REJECTED_ALTITUDE.
pub fn generate_height<N: NoiseSource + ?Sized>(
    noise: &N,
    x: f64,
    y: f64,
    mode: GenerationMode,
) -> f64 {
    if !x.is_finite() || !y.is_finite() {
        return REJECTED_ALTITUDE;
    }

    let sample = |frequency: f64| noise.noise2(x * frequency, y * frequency);

    let base = sample(mode.base_frequency()) * BASE_WEIGHT;
    let hills = sample(HILLS_FREQUENCY) * HILLS_WEIGHT;
    let detail = sample(DETAIL_FREQUENCY) * DETAIL_WEIGHT;
    // |noise| has a cusp at every zero crossing, which reads as a crease
    let ridge = sample(RIDGE_FREQUENCY).abs() * RIDGE_WEIGHT;

    let sum = base + hills + detail + ridge;
    clamp(sum * OUTPUT_SCALE + mode.bias(), -1.0, 1.0)
}

// Height field over an owned noise source
pub struct HeightField<N> {
    noise: N,
}

impl<N: NoiseSource> HeightField<N> {
    pub fn new(noise: N) -> Self {
        Self { noise }
    }

    pub fn noise(&self) -> &N {
        &self.noise
    }

    pub fn altitude(&self, x: f64, y: f64, mode: GenerationMode) -> f64 {
        generate_height(&self.noise, x, y, mode)
    }

    // Integer world cells are the common case for the viewer
    pub fn altitude_at_cell(&self, x: i64, y: i64, mode: GenerationMode) -> f64 {
        self.altitude(x as f64, y as f64, mode)
    }
}
