use std::time::Duration;

use macroquad::prelude::*;
use sparse_life::{
    Camera, Command, Pattern, SimulationConfig, SimulationController, TickScheduler, presets,
    input, rendering::{self, TileLayer}, ui,
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Game of Life - Sparse".to_owned(),
        window_width: 1000,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

/// Built-in presets, preceded by the pattern file named on the command line
fn load_patterns() -> Vec<Pattern> {
    let mut patterns = presets::all_patterns();
    if let Some(path) = std::env::args().nth(1) {
        match Pattern::from_file(&path) {
            Ok(pattern) => {
                log::info!("loaded {:?} ({} cells) from {path}", pattern.name, pattern.cells.len());
                patterns.insert(0, pattern);
            }
            Err(err) => log::warn!("ignoring pattern file {path}: {err}"),
        }
    }
    patterns
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let config = SimulationConfig::default();
    let patterns = load_patterns();
    let mut pattern_idx = 0;

    let mut controller = SimulationController::new(config);
    let mut scheduler = TickScheduler::new(config.tick_interval);
    let mut layer = TileLayer::new();
    let mut camera = Camera::new();
    camera.reset(ui::grid_area_width(), ui::grid_area_height());

    let mut pattern_name = patterns[pattern_idx].name.clone();
    controller.reset(&patterns[pattern_idx]);

    loop {
        let mouse_pos = mouse_position();
        let buttons = ui::create_buttons(controller.state());

        for command in input::poll_commands(&buttons, mouse_pos) {
            match command {
                Command::TogglePause => controller.toggle_pause(),
                Command::Step => {
                    controller.step();
                }
                Command::Clear => controller.clear(),
                Command::Restart => controller.restart(),
                Command::NextPattern => {
                    pattern_idx = (pattern_idx + 1) % patterns.len();
                    pattern_name = patterns[pattern_idx].name.clone();
                    controller.reset(&patterns[pattern_idx]);
                }
                Command::Randomize => {
                    let soup = presets::soup(48, 48, 0.3, &mut ::rand::rng());
                    pattern_name = soup.name.clone();
                    controller.reset(&soup);
                }
                Command::SpeedUp => scheduler.adjust_speed(1.0),
                Command::SlowDown => scheduler.adjust_speed(-1.0),
                Command::CycleAlgorithm => controller.set_algorithm(controller.algorithm().next()),
                Command::Quit => {
                    log::info!("quitting at generation {}", controller.generation());
                    return;
                }
            }
        }

        input::handle_zoom(&mut camera);
        input::handle_pan(&mut camera, mouse_pos);
        input::handle_mouse_paint(&mut controller, &camera, mouse_pos);
        if is_key_pressed(KeyCode::H) {
            camera.reset(ui::grid_area_width(), ui::grid_area_height());
        }

        scheduler.update(Duration::from_secs_f32(get_frame_time()), &mut controller);
        layer.apply(&controller.take_events());

        clear_background(BLACK);
        rendering::draw_board(controller.board(), &layer, &camera);
        rendering::draw_controls(&controller, &scheduler, &camera, &pattern_name, &buttons, mouse_pos);

        next_frame().await;
    }
}
