// Camera and screen-to-world mapping for the scrolling viewer.
// The core never stores a camera; callers own it and pass it in by value.

// World coordinate shown at the viewport's top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CameraOffset {
    pub x: f64,
    pub y: f64,
}

impl CameraOffset {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    // Pan by a pointer movement in pixels. The camera moves against the
    // pointer so the map follows the cursor.
    pub fn drag(&mut self, dx_px: f64, dy_px: f64, cell_size: u32) {
        let cell = f64::from(cell_size.max(1));
        self.x -= dx_px / cell;
        self.y -= dy_px / cell;
    }

    // Integer position for display, truncated toward zero
    pub fn display_position(&self) -> (i64, i64) {
        (self.x.trunc() as i64, self.y.trunc() as i64)
    }
}

// Grid of visible cells, each `cell_size` pixels square
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub columns: u32,
    pub rows: u32,
    pub cell_size: u32,
}

impl Viewport {
    // Cover a pixel area completely; a partial cell at the right/bottom edge counts
    pub fn from_pixels(width_px: f32, height_px: f32, cell_size: u32) -> Self {
        let cell_size = cell_size.max(1);
        let cells = |px: f32| (px.max(0.0) / cell_size as f32).ceil() as u32;
        Self {
            columns: cells(width_px),
            rows: cells(height_px),
            cell_size,
        }
    }

    pub fn cell_count(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    pub fn is_empty(&self) -> bool {
        self.columns == 0 || self.rows == 0
    }

    // World cell drawn at (column, row). Flooring keeps every cell one unit wide,
    // including the ones straddling the world origin. Deliberately not truncation
    // toward zero: a truncating renderer shows different cells for negative offsets.
    pub fn world_at(&self, camera: CameraOffset, column: u32, row: u32) -> (i64, i64) {
        (
            (camera.x + f64::from(column)).floor() as i64,
            (camera.y + f64::from(row)).floor() as i64,
        )
    }

    // World cell under a pixel position relative to the viewport's top-left
    pub fn screen_to_cell(&self, camera: CameraOffset, px: f32, py: f32) -> (i64, i64) {
        let cell = self.cell_size as f64;
        (
            (camera.x + (px as f64 / cell).floor()).floor() as i64,
            (camera.y + (py as f64 / cell).floor()).floor() as i64,
        )
    }
}
