use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use terrain_core::{GenerationMode, NoiseBackend};

// Environment variable consulted when no config path is given on the command line
pub const CONFIG_ENV: &str = "TERRAIN_VIEWER_CONFIG";

const MAX_CELL_SIZE: u32 = 32;

// Viewer settings; every field falls back to its default when absent
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewerConfig {
    pub seed: u32,
    // pixels per world cell
    pub cell_size: u32,
    pub window_width: f32,
    pub window_height: f32,
    pub start_mode: GenerationMode,
    pub noise: NoiseBackend,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            seed: 2025,
            cell_size: 2,
            window_width: 800.0,
            window_height: 800.0,
            start_mode: GenerationMode::Continent,
            noise: NoiseBackend::OpenSimplex,
        }
    }
}

impl ViewerConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text).context("malformed viewer config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("invalid config {}", path.display()))
    }

    // First CLI argument, then the environment, then defaults
    pub fn load() -> Result<Self> {
        match config_path(env::args().nth(1), env::var_os(CONFIG_ENV).map(PathBuf::from)) {
            Some(path) => {
                log::info!("loading config from {}", path.display());
                Self::from_file(&path)
            }
            None => {
                log::info!("no config given, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_CELL_SIZE).contains(&self.cell_size) {
            bail!(
                "cell_size must be between 1 and {}, got {}",
                MAX_CELL_SIZE,
                self.cell_size
            );
        }
        if !(self.window_width > 0.0 && self.window_height > 0.0) {
            bail!(
                "window size must be positive, got {}x{}",
                self.window_width,
                self.window_height
            );
        }
        Ok(())
    }
}

fn config_path(arg: Option<String>, from_env: Option<PathBuf>) -> Option<PathBuf> {
    arg.map(PathBuf::from).or(from_env)
}
