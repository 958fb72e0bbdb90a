use std::time::Duration;

use super::SimulationController;

const MIN_TICKS_PER_SECOND: f32 = 1.0;
const MAX_TICKS_PER_SECOND: f32 = 60.0;

/// Frame-driven tick source. Feeds elapsed frame time in and calls
/// `SimulationController::tick` once the configured interval has passed.
pub struct TickScheduler {
    interval: Duration,
    accumulated: Duration,
}

impl TickScheduler {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_secs_f32(1.0 / MAX_TICKS_PER_SECOND)),
            accumulated: Duration::ZERO,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn ticks_per_second(&self) -> f32 {
        1.0 / self.interval.as_secs_f32()
    }

    /// Change the cadence by `delta` generations per second
    pub fn adjust_speed(&mut self, delta: f32) {
        let rate = (self.ticks_per_second() + delta).clamp(MIN_TICKS_PER_SECOND, MAX_TICKS_PER_SECOND);
        self.interval = Duration::from_secs_f32(1.0 / rate);
        log::info!("tick rate set to {rate:.0}/s");
    }

    /// Account for one frame. Ticks at most once per call; backlog from a
    /// slow frame is dropped rather than replayed.
    pub fn update(&mut self, elapsed: Duration, controller: &mut SimulationController) -> bool {
        if !controller.is_running() {
            self.accumulated = Duration::ZERO;
            return false;
        }

        self.accumulated += elapsed;
        if self.accumulated < self.interval {
            return false;
        }
        self.accumulated = Duration::ZERO;
        controller.tick()
    }
}
