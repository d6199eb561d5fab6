use std::time::Instant;

use eframe::{App, Frame};
use egui::{
    Align2, Color32, ColorImage, FontId, PointerButton, Rect, Sense, TextureHandle,
    TextureOptions, pos2, vec2,
};
use terrain_core::{
    AltitudeBand, CameraOffset, GenerationMode, HeightField, NoiseBackend, NoiseSource, Viewport,
    render_viewport,
};

use crate::config::ViewerConfig;

const OVERLAY_FONT_SIZE: f32 = 20.0;
const OVERLAY_LINE: f32 = 28.0;

// Hover readout for the cell under the pointer
struct HoverReadout {
    cell: (i64, i64),
    altitude: f64,
    band: AltitudeBand,
}

pub struct TerrainViewer {
    seed: u32,
    backend: NoiseBackend,
    cell_size: u32,
    mode: GenerationMode,
    camera: CameraOffset,
    field: HeightField<Box<dyn NoiseSource>>,

    // last rendered frame and what it was rendered for
    texture: Option<TextureHandle>,
    rendered: Option<(CameraOffset, GenerationMode, Viewport)>,
    stale: bool,

    last_render_ms: Option<f32>,
    hover: Option<HoverReadout>,
}

impl TerrainViewer {
    pub fn new(config: &ViewerConfig) -> Self {
        Self {
            seed: config.seed,
            backend: config.noise,
            cell_size: config.cell_size,
            mode: config.start_mode,
            camera: CameraOffset::default(),
            field: HeightField::new(config.noise.build(config.seed)),
            texture: None,
            rendered: None,
            stale: true,
            last_render_ms: None,
            hover: None,
        }
    }

    fn rebuild_field(&mut self) {
        log::info!(
            "switching to {} noise, seed {}",
            self.backend.label(),
            self.seed
        );
        self.field = HeightField::new(self.backend.build(self.seed));
        self.stale = true;
    }

    fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        log::info!("mode: {}", self.mode.label());
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        let (tab, escape) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::Tab),
                i.key_pressed(egui::Key::Escape),
            )
        });
        if tab {
            self.toggle_mode();
        }
        if escape {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }

    // Re-render only when something that affects the picture changed
    fn refresh(&mut self, ctx: &egui::Context, viewport: Viewport) {
        let key = (self.camera, self.mode, viewport);
        if !self.stale && self.rendered == Some(key) {
            return;
        }
        if viewport.is_empty() {
            return;
        }

        let start = Instant::now();
        let img = render_viewport(&self.field, &viewport, self.camera, self.mode);
        let image = ColorImage::from_rgb(
            [img.width() as usize, img.height() as usize],
            img.as_raw(),
        );
        match &mut self.texture {
            Some(tex) => tex.set(image, TextureOptions::NEAREST),
            None => {
                self.texture = Some(ctx.load_texture("terrain", image, TextureOptions::NEAREST))
            }
        }

        let elapsed = start.elapsed().as_secs_f32() * 1000.0;
        log::debug!(
            "rendered {}x{} cells in {:.2}ms",
            viewport.columns,
            viewport.rows,
            elapsed
        );
        self.last_render_ms = Some(elapsed);
        self.rendered = Some(key);
        self.stale = false;
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.heading("Terrain Viewer");
        ui.separator();

        ui.label("Mode");
        let before = self.mode;
        ui.horizontal(|ui| {
            for mode in [GenerationMode::Continent, GenerationMode::Continuous] {
                ui.selectable_value(&mut self.mode, mode, mode.label());
            }
        });
        if self.mode != before {
            log::info!("mode: {}", self.mode.label());
        }

        ui.label("Seed");
        let seed_changed = ui
            .add(egui::DragValue::new(&mut self.seed).speed(1.0))
            .changed();

        let before = self.backend;
        egui::ComboBox::from_label("Noise")
            .selected_text(self.backend.label())
            .show_ui(ui, |ui| {
                for backend in NoiseBackend::ALL {
                    ui.selectable_value(&mut self.backend, backend, backend.label());
                }
            });
        if seed_changed || self.backend != before {
            self.rebuild_field();
        }

        ui.label("Cell size");
        ui.add(egui::Slider::new(&mut self.cell_size, 1..=32).suffix(" px"));

        if ui.button("Back to origin").clicked() {
            self.camera = CameraOffset::default();
        }

        ui.separator();
        let (cx, cy) = self.camera.display_position();
        ui.label(format!("Camera: ({}, {})", cx, cy));
        if let Some(ms) = self.last_render_ms {
            ui.label(format!("Last render: {:.2} ms", ms));
        }
        match &self.hover {
            Some(hover) => {
                ui.label(format!("Cell: ({}, {})", hover.cell.0, hover.cell.1));
                ui.label(format!("Altitude: {:.3}", hover.altitude));
                ui.label(format!("Terrain: {}", hover.band.label()));
            }
            None => {
                ui.label("Hover the map to inspect a cell");
            }
        }
    }

    fn overlay(&self, painter: &egui::Painter, origin: egui::Pos2) {
        let font = FontId::proportional(OVERLAY_FONT_SIZE);
        let (cx, cy) = self.camera.display_position();
        let lines = [
            (
                "Click and drag to explore the world!".to_owned(),
                Color32::WHITE,
            ),
            (
                format!("Mode: {} (TAB to switch)", self.mode.label()),
                Color32::YELLOW,
            ),
            (format!("Position: ({}, {})", cx, cy), Color32::WHITE),
        ];
        for (i, (text, color)) in lines.into_iter().enumerate() {
            let pos = origin + vec2(10.0, 10.0 + OVERLAY_LINE * i as f32);
            painter.text(pos, Align2::LEFT_TOP, text, font.clone(), color);
        }
    }
}

impl App for TerrainViewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.handle_keys(ctx);

        egui::SidePanel::left("controls").show(ctx, |ui| {
            self.controls(ui);
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(Color32::from_rgb(20, 20, 40)))
            .show(ctx, |ui| {
                let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::drag());

                if response.dragged_by(PointerButton::Primary) {
                    let delta = response.drag_delta();
                    self.camera
                        .drag(delta.x as f64, delta.y as f64, self.cell_size);
                }

                let viewport = Viewport::from_pixels(rect.width(), rect.height(), self.cell_size);
                self.refresh(ctx, viewport);

                self.hover = response.hover_pos().map(|pos| {
                    let rel = pos - rect.min;
                    let cell = viewport.screen_to_cell(self.camera, rel.x, rel.y);
                    let altitude = self.field.altitude_at_cell(cell.0, cell.1, self.mode);
                    HoverReadout {
                        cell,
                        altitude,
                        band: AltitudeBand::of(altitude),
                    }
                });

                let painter = ui.painter_at(rect);
                if let Some(tex) = &self.texture {
                    // Partial edge cells spill past the rect and are clipped
                    let size = vec2(
                        (viewport.columns * viewport.cell_size) as f32,
                        (viewport.rows * viewport.cell_size) as f32,
                    );
                    let uv = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
                    painter.image(
                        tex.id(),
                        Rect::from_min_size(rect.min, size),
                        uv,
                        Color32::WHITE,
                    );
                }
                self.overlay(&painter, rect.min);
            });
    }
}
