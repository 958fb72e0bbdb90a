use std::collections::HashSet;

use macroquad::prelude::*;

use crate::application::{BoardEvent, Camera, SimulationController, SimulationState, TickScheduler};
use crate::domain::{Cell, CellSet};
use crate::ui::{Button, grid_area_height, grid_area_width, panel_x, CELL_SIZE, PANEL_WIDTH};

const ALIVE_COLOR: Color = Color::new(0.0, 1.0, 0.59, 1.0);
const BORN_COLOR: Color = Color::new(0.75, 1.0, 0.85, 1.0);
const GRID_LINE_COLOR: Color = Color::new(0.16, 0.16, 0.16, 1.0);
const ORIGIN_COLOR: Color = Color::new(0.35, 0.35, 0.1, 1.0);

/// Format large numbers with K/M suffixes
fn format_number(n: usize) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format!("{}", n)
    }
}

fn status_text(state: SimulationState) -> &'static str {
    match state {
        SimulationState::Running => "Running",
        SimulationState::Paused => "Paused",
    }
}

/// Render-side view of board notifications. Tracks the cells born in the
/// most recent change so they can be drawn highlighted.
#[derive(Default)]
pub struct TileLayer {
    fresh: HashSet<Cell>,
}

impl TileLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a batch of controller events into the layer.
    /// A generation replaces the highlight, hand edits add to it.
    pub fn apply(&mut self, events: &[BoardEvent]) {
        for event in events {
            match event {
                BoardEvent::Replaced => self.fresh.clear(),
                BoardEvent::CellsChanged(changes) => {
                    self.fresh.clear();
                    self.fresh.extend(changes.added.iter().copied());
                }
                BoardEvent::Edited(changes) => {
                    self.fresh.extend(changes.added.iter().copied());
                    for cell in &changes.removed {
                        self.fresh.remove(cell);
                    }
                }
            }
        }
    }

    pub fn is_fresh(&self, cell: Cell) -> bool {
        self.fresh.contains(&cell)
    }
}

/// Draw the live cells that fall inside the viewport
pub fn draw_board(board: &CellSet, layer: &TileLayer, camera: &Camera) {
    let cell_size = CELL_SIZE * camera.zoom;
    let area_width = grid_area_width();
    let area_height = grid_area_height();
    let (min, max) = camera.visible_bounds(area_width, area_height, CELL_SIZE);

    if cell_size >= 6.0 {
        draw_grid_lines(camera, min, max, area_width, area_height);
    }

    let (ox, oy) = camera.cell_to_screen(Cell::new(0, 0), CELL_SIZE);
    draw_rectangle_lines(ox, oy, cell_size, cell_size, 1.0, ORIGIN_COLOR);

    for &cell in board {
        if cell.x < min.x || cell.x > max.x || cell.y < min.y || cell.y > max.y {
            continue;
        }
        let (sx, sy) = camera.cell_to_screen(cell, CELL_SIZE);
        let color = if layer.is_fresh(cell) { BORN_COLOR } else { ALIVE_COLOR };
        draw_rectangle(sx, sy, cell_size, cell_size, color);
    }
}

fn draw_grid_lines(camera: &Camera, min: Cell, max: Cell, area_width: f32, area_height: f32) {
    for x in min.x..=max.x.saturating_add(1) {
        let (sx, _) = camera.cell_to_screen(Cell::new(x, 0), CELL_SIZE);
        draw_line(sx, 0.0, sx, area_height, 1.0, GRID_LINE_COLOR);
    }
    for y in min.y..=max.y.saturating_add(1) {
        let (_, sy) = camera.cell_to_screen(Cell::new(0, y), CELL_SIZE);
        draw_line(0.0, sy, area_width, sy, 1.0, GRID_LINE_COLOR);
    }
}

/// Draw the control panel with buttons and simulation info
pub fn draw_controls(
    controller: &SimulationController,
    scheduler: &TickScheduler,
    camera: &Camera,
    pattern_name: &str,
    buttons: &[Button],
    mouse_pos: (f32, f32),
) {
    let px = panel_x();
    draw_rectangle(px, 0.0, PANEL_WIDTH, screen_height(), Color::from_rgba(30, 30, 30, 255));

    let status_color = if controller.is_running() {
        Color::from_rgba(0, 255, 0, 255)
    } else {
        Color::from_rgba(255, 165, 0, 255)
    };
    let advance_ms = controller.last_advance().as_secs_f32() * 1000.0;
    let bounds = controller
        .board()
        .bounding_box()
        .map(|(min, max)| format!("{}x{}", max.x.abs_diff(min.x) + 1, max.y.abs_diff(min.y) + 1))
        .unwrap_or_else(|| "-".to_string());

    let labels = [
        ("Status:".to_string(), 20.0, 16.0, WHITE),
        (status_text(controller.state()).to_string(), 40.0, 18.0, status_color),
        ("Pattern:".to_string(), 70.0, 16.0, WHITE),
        (pattern_name.to_string(), 88.0, 14.0, GRAY),
        ("Generation:".to_string(), 118.0, 16.0, WHITE),
        (controller.generation().to_string(), 138.0, 20.0, ALIVE_COLOR),
        ("Population:".to_string(), 168.0, 16.0, WHITE),
        (format_number(controller.population()), 188.0, 20.0, ALIVE_COLOR),
        (format!("Extent: {bounds}"), 210.0, 13.0, GRAY),
        (format!("Speed: {:.0} gen/s", scheduler.ticks_per_second()), 235.0, 14.0, LIGHTGRAY),
        (format!("{} | {:.2}ms", controller.algorithm().name(), advance_ms), 255.0, 13.0, GRAY),
        (format!("Zoom: {:.1}x | FPS: {}", camera.zoom, get_fps()), 275.0, 13.0, GRAY),
        ("Controls:".to_string(), 305.0, 14.0, WHITE),
        ("Space: Run/Pause  S: Step".to_string(), 320.0, 12.0, GRAY),
        ("LMB: Paint  RMB: Erase".to_string(), 333.0, 12.0, GRAY),
        ("N: Pattern  R: Restart".to_string(), 346.0, 12.0, GRAY),
        ("Up/Down: Speed  A: Algo".to_string(), 359.0, 12.0, GRAY),
        ("Wheel: Zoom  Mid: Pan".to_string(), 372.0, 12.0, GRAY),
    ];
    for (text, y, size, color) in &labels {
        draw_text(text, px + 8.0, *y, *size, *color);
    }

    buttons.iter().for_each(|btn| btn.draw(mouse_pos));
}
