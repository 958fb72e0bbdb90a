use crate::domain::Cell;

/// Camera maps the unbounded cell plane onto the screen.
/// `offset` is the screen position of cell (0, 0)'s top-left corner.
pub struct Camera {
    pub offset_x: f32,
    pub offset_y: f32,
    pub zoom: f32, // 1.0 = normal, 2.0 = 2x zoomed in
    drag_anchor: Option<(f32, f32)>,
}

impl Camera {
    pub fn new() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            zoom: 1.0,
            drag_anchor: None,
        }
    }

    /// Zoom in by factor
    pub fn zoom_in(&mut self, factor: f32) {
        self.zoom = (self.zoom * factor).clamp(0.2, 10.0);
    }

    /// Zoom out by factor
    pub fn zoom_out(&mut self, factor: f32) {
        self.zoom = (self.zoom / factor).clamp(0.2, 10.0);
    }

    /// Pan camera
    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    /// Follow a drag gesture. Pass `None` once the button is released.
    pub fn drag(&mut self, mouse_pos: Option<(f32, f32)>) {
        if let (Some(last), Some(now)) = (self.drag_anchor, mouse_pos) {
            self.pan(now.0 - last.0, now.1 - last.1);
        }
        self.drag_anchor = mouse_pos;
    }

    /// Put the origin in the middle of a viewport
    pub fn center_on(&mut self, viewport_width: f32, viewport_height: f32) {
        self.offset_x = viewport_width / 2.0;
        self.offset_y = viewport_height / 2.0;
    }

    /// Convert screen coordinates to the cell under them.
    /// Floors so that cells left of or above the origin map correctly.
    pub fn screen_to_cell(&self, screen_x: f32, screen_y: f32, cell_size: f32) -> Cell {
        let size = cell_size * self.zoom;
        Cell::new(
            ((screen_x - self.offset_x) / size).floor() as i32,
            ((screen_y - self.offset_y) / size).floor() as i32,
        )
    }

    /// Screen position of a cell's top-left corner
    pub fn cell_to_screen(&self, cell: Cell, cell_size: f32) -> (f32, f32) {
        let size = cell_size * self.zoom;
        (
            cell.x as f32 * size + self.offset_x,
            cell.y as f32 * size + self.offset_y,
        )
    }

    /// Min and max cells visible in a viewport, for culling
    pub fn visible_bounds(&self, viewport_width: f32, viewport_height: f32, cell_size: f32) -> (Cell, Cell) {
        (
            self.screen_to_cell(0.0, 0.0, cell_size),
            self.screen_to_cell(viewport_width, viewport_height, cell_size),
        )
    }

    /// Reset zoom and put the origin back in the middle of the viewport
    pub fn reset(&mut self, viewport_width: f32, viewport_height: f32) {
        self.zoom = 1.0;
        self.drag_anchor = None;
        self.center_on(viewport_width, viewport_height);
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
