mod config;
mod viewer;

use anyhow::{Context, Result, anyhow};
use eframe::{NativeOptions, egui, run_native};

use crate::config::ViewerConfig;
use crate::viewer::TerrainViewer;

fn main() -> Result<()> {
    env_logger::init();

    let config = ViewerConfig::load().context("could not load viewer config")?;
    log::info!(
        "starting viewer: seed {}, {} noise, {} mode, {}px cells",
        config.seed,
        config.noise.label(),
        config.start_mode.label(),
        config.cell_size
    );

    let opts = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };
    let app = TerrainViewer::new(&config);
    run_native(
        "Infinite Terrain Viewer",
        opts,
        Box::new(|_cc| Ok(Box::new(app))),
    )
    .map_err(|e| anyhow!("viewer exited with an error: {e}"))
}
