use macroquad::prelude::*;

use crate::application::{Camera, SimulationController};
use crate::ui::{Button, grid_area_width, CELL_SIZE};

/// Discrete control events produced by keyboard and panel buttons
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    TogglePause,
    Step,
    Clear,
    Restart,
    NextPattern,
    Randomize,
    SpeedUp,
    SlowDown,
    CycleAlgorithm,
    Quit,
}

/// Keyboard shortcuts
pub const KEY_BINDINGS: [(KeyCode, Command); 11] = [
    (KeyCode::Space, Command::TogglePause),
    (KeyCode::S, Command::Step),
    (KeyCode::Right, Command::Step),
    (KeyCode::C, Command::Clear),
    (KeyCode::R, Command::Restart),
    (KeyCode::N, Command::NextPattern),
    (KeyCode::X, Command::Randomize),
    (KeyCode::Up, Command::SpeedUp),
    (KeyCode::Down, Command::SlowDown),
    (KeyCode::A, Command::CycleAlgorithm),
    (KeyCode::Escape, Command::Quit),
];

/// Commands triggered this frame, keyboard first, then buttons
pub fn poll_commands(buttons: &[Button], mouse_pos: (f32, f32)) -> Vec<Command> {
    KEY_BINDINGS
        .iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .map(|(_, command)| *command)
        .chain(buttons.iter().filter_map(|btn| btn.clicked(mouse_pos)))
        .collect()
}

/// Handle zoom with mouse wheel
pub fn handle_zoom(camera: &mut Camera) {
    let wheel = mouse_wheel().1;
    if wheel > 0.0 {
        camera.zoom_in(1.1);
    } else if wheel < 0.0 {
        camera.zoom_out(1.1);
    }
}

/// Handle pan with middle mouse button drag
pub fn handle_pan(camera: &mut Camera, mouse_pos: (f32, f32)) {
    camera.drag(is_mouse_button_down(MouseButton::Middle).then_some(mouse_pos));
}

/// Paint with the left button, erase with the right. The controller
/// ignores both while the simulation is running.
pub fn handle_mouse_paint(controller: &mut SimulationController, camera: &Camera, mouse_pos: (f32, f32)) {
    if mouse_pos.0 >= grid_area_width() {
        return;
    }

    let cell = camera.screen_to_cell(mouse_pos.0, mouse_pos.1, CELL_SIZE);
    if is_mouse_button_down(MouseButton::Left) {
        controller.set_alive(cell);
    } else if is_mouse_button_down(MouseButton::Right) {
        controller.set_dead_if_alive(cell);
    }
}
