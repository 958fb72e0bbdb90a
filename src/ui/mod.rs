mod button;

pub use button::Button;

// UI constants - functions for responsive layout
use macroquad::prelude::{Color, screen_height, screen_width};

use crate::application::SimulationState;
use crate::input::Command;

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 36.0;
pub const BUTTON_SPACING: f32 = 44.0;
pub const BUTTONS_TOP: f32 = 420.0;
pub const CELL_SIZE: f32 = 10.0;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the grid area
pub fn grid_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the height of the grid area
pub fn grid_area_height() -> f32 {
    screen_height()
}

/// Label of the pause button for the current state
pub fn pause_label(state: SimulationState) -> &'static str {
    match state {
        SimulationState::Running => "Pause",
        SimulationState::Paused => "Unpause",
    }
}

/// Create the control buttons, stacked down the panel
pub fn create_buttons(state: SimulationState) -> Vec<Button> {
    let px = panel_x();
    let entries = [
        (pause_label(state), Command::TogglePause),
        ("Step", Command::Step),
        ("Clear", Command::Clear),
        ("Restart", Command::Restart),
        ("Pattern", Command::NextPattern),
        ("Random", Command::Randomize),
        ("Quit", Command::Quit),
    ];

    entries
        .into_iter()
        .enumerate()
        .map(|(idx, (label, command))| {
            let y = BUTTONS_TOP + idx as f32 * BUTTON_SPACING;
            let button = Button::new(px, y, PANEL_WIDTH, BUTTON_HEIGHT, label, command);
            if command == Command::Quit {
                button.with_colors(Color::from_rgba(150, 50, 50, 255), Color::from_rgba(190, 70, 70, 255))
            } else {
                button
            }
        })
        .collect()
}
