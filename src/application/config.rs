use std::time::Duration;

use crate::domain::Algorithm;

/// Default time between generations while running
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Tunables for a simulation run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationConfig {
    /// Time between scheduler ticks while running
    pub tick_interval: Duration,
    /// Refuse to run an empty board, and clear a single-cell board
    /// instead of running it. Turn off for plain Life semantics.
    pub degenerate_start_guard: bool,
    pub algorithm: Algorithm,
}

impl SimulationConfig {
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }

    pub fn with_degenerate_start_guard(mut self, enabled: bool) -> Self {
        self.degenerate_start_guard = enabled;
        self
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tick_interval: DEFAULT_TICK_INTERVAL,
            degenerate_start_guard: true,
            algorithm: Algorithm::default(),
        }
    }
}
