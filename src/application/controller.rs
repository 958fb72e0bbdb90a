use std::time::{Duration, Instant};

use crate::domain::{Algorithm, Cell, CellSet, Changes, LifeEngine, Pattern, PatternLoader};
use super::{EditSession, SimulationConfig};

/// Run state of the simulation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SimulationState {
    #[default]
    Paused,
    Running,
}

/// What a renderer needs to know after a board mutation
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardEvent {
    /// A generation advanced; cells were born or died
    CellsChanged(Changes),
    /// Cells were painted or erased by hand while paused
    Edited(Changes),
    /// The whole board was swapped out (reset or clear)
    Replaced,
}

/// SimulationController owns the live board and drives it.
/// This is the application layer that coordinates domain logic.
pub struct SimulationController {
    board: CellSet,
    engine: LifeEngine,
    state: SimulationState,
    config: SimulationConfig,
    generation: u64,
    /// Pattern the board was last seeded from
    seed: Pattern,
    events: Vec<BoardEvent>,
    last_advance: Duration,
}

impl SimulationController {
    /// Create a paused controller with an empty board
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            board: CellSet::new(),
            engine: LifeEngine::new(config.algorithm),
            state: SimulationState::Paused,
            config,
            generation: 0,
            seed: Pattern::new("Empty", Vec::new()),
            events: Vec::new(),
            last_advance: Duration::ZERO,
        }
    }

    pub fn board(&self) -> &CellSet {
        &self.board
    }

    pub fn state(&self) -> SimulationState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SimulationState::Running
    }

    pub fn is_paused(&self) -> bool {
        self.state == SimulationState::Paused
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.board.len()
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn seed(&self) -> &Pattern {
        &self.seed
    }

    /// Wall-clock time spent computing the most recent generation
    pub fn last_advance(&self) -> Duration {
        self.last_advance
    }

    pub fn algorithm(&self) -> Algorithm {
        self.engine.algorithm()
    }

    /// Switch the evaluation strategy
    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        log::info!("switching to {} evaluation", algorithm.name());
        self.engine.set_algorithm(algorithm);
        self.config.algorithm = algorithm;
    }

    /// Discard the board and seed a new one from `pattern`. Always pauses.
    pub fn reset(&mut self, pattern: &Pattern) {
        self.state = SimulationState::Paused;
        self.board = PatternLoader::load(pattern);
        self.generation = 0;
        self.seed = pattern.clone();
        self.events.push(BoardEvent::Replaced);
        log::info!(
            "reset to pattern {:?} with {} live cells",
            pattern.name,
            self.board.len()
        );
    }

    /// Re-seed from the last pattern passed to `reset`
    pub fn restart(&mut self) {
        let seed = self.seed.clone();
        self.reset(&seed);
    }

    /// Flip between paused and running.
    ///
    /// With the degenerate start guard on, an empty board stays paused and
    /// a board holding a single cell is cleared instead of started.
    pub fn toggle_pause(&mut self) {
        match self.state {
            SimulationState::Running => {
                self.state = SimulationState::Paused;
                log::info!("paused at generation {}", self.generation);
            }
            SimulationState::Paused => {
                if self.config.degenerate_start_guard {
                    match self.board.len() {
                        0 => {
                            log::info!("board is empty, staying paused");
                            return;
                        }
                        1 => {
                            log::info!("single live cell, clearing instead of running");
                            self.clear();
                            return;
                        }
                        _ => {}
                    }
                }
                self.state = SimulationState::Running;
                log::info!("running from generation {}", self.generation);
            }
        }
    }

    /// Advance exactly one generation. Ignored while running.
    pub fn step(&mut self) -> bool {
        if self.is_running() {
            log::debug!("step ignored while running");
            return false;
        }
        self.advance();
        true
    }

    /// Scheduler callback. Advances one generation while running and
    /// clears the board once everything has died.
    pub fn tick(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.advance();
        if self.board.is_empty() {
            log::info!("population extinct at generation {}", self.generation);
            self.clear();
        }
        true
    }

    /// Pause and empty the board
    pub fn clear(&mut self) {
        self.state = SimulationState::Paused;
        self.board.clear();
        self.generation = 0;
        self.events.push(BoardEvent::Replaced);
        log::info!("board cleared");
    }

    /// Open an edit session. Only available while paused.
    pub fn edit(&mut self) -> Option<EditSession<'_>> {
        if self.is_running() {
            return None;
        }
        Some(EditSession::new(&mut self.board, &mut self.events))
    }

    /// Paint gesture. No-op while running.
    pub fn set_alive(&mut self, cell: Cell) -> bool {
        self.edit().is_some_and(|mut session| session.set_alive(cell))
    }

    /// Erase gesture. No-op while running or on a dead cell.
    pub fn set_dead_if_alive(&mut self, cell: Cell) -> bool {
        self.edit()
            .is_some_and(|mut session| session.set_dead_if_alive(cell))
    }

    pub fn toggle_at(&mut self, cell: Cell) -> bool {
        self.edit().is_some_and(|mut session| session.toggle_at(cell))
    }

    /// Drain pending render notifications, oldest first
    pub fn take_events(&mut self) -> Vec<BoardEvent> {
        std::mem::take(&mut self.events)
    }

    /// Swap in the next generation and record what changed
    fn advance(&mut self) {
        let start = Instant::now();
        let next = self.engine.advance(&self.board);
        let changes = self.board.diff(&next);
        self.board = next;
        self.generation += 1;
        self.last_advance = start.elapsed();

        log::debug!(
            "generation {}: {} live (+{} -{}) in {:?}",
            self.generation,
            self.board.len(),
            changes.added.len(),
            changes.removed.len(),
            self.last_advance
        );
        if !changes.is_empty() {
            self.events.push(BoardEvent::CellsChanged(changes));
        }
    }
}

impl Default for SimulationController {
    fn default() -> Self {
        Self::new(SimulationConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::presets;

    fn controller_with(cells: Vec<(i32, i32)>) -> SimulationController {
        let mut controller = SimulationController::default();
        controller.reset(&Pattern::new("Test", cells));
        controller.take_events();
        controller
    }

    #[test]
    fn test_starts_paused_and_empty() {
        let controller = SimulationController::default();
        assert_eq!(controller.state(), SimulationState::Paused);
        assert_eq!(controller.population(), 0);
        assert_eq!(controller.generation(), 0);
    }

    #[test]
    fn test_reset_seeds_centered_board() {
        let mut controller = SimulationController::default();
        controller.reset(&Pattern::new("Square", vec![(2, 0), (4, 0), (2, 2), (4, 2)]));

        assert!(controller.is_paused());
        let expected: CellSet = [(0, -1), (2, -1), (0, 1), (2, 1)]
            .into_iter()
            .map(Cell::from)
            .collect();
        assert_eq!(controller.board(), &expected);
        assert_eq!(controller.take_events(), vec![BoardEvent::Replaced]);
    }

    #[test]
    fn test_reset_while_running_pauses() {
        let mut controller = controller_with(presets::blinker().cells);
        controller.toggle_pause();
        controller.tick();
        controller.reset(&presets::block());
        assert!(controller.is_paused());
        assert_eq!(controller.generation(), 0);
        assert_eq!(controller.population(), 4);
    }

    #[test]
    fn test_toggle_pause_on_empty_board_stays_paused() {
        let mut controller = SimulationController::default();
        controller.toggle_pause();
        assert!(controller.is_paused());
        assert!(controller.take_events().is_empty());
    }

    #[test]
    fn test_toggle_pause_on_single_cell_clears() {
        let mut controller = controller_with(vec![(3, 3)]);
        controller.toggle_pause();
        assert!(controller.is_paused());
        assert_eq!(controller.population(), 0);
        assert_eq!(controller.take_events(), vec![BoardEvent::Replaced]);
    }

    #[test]
    fn test_toggle_pause_without_guard_runs_anything() {
        let config = SimulationConfig::default().with_degenerate_start_guard(false);
        let mut controller = SimulationController::new(config);
        controller.reset(&Pattern::new("Lonely", vec![(0, 0)]));
        controller.toggle_pause();
        assert!(controller.is_running());
        assert_eq!(controller.population(), 1);

        // The lone cell dies on the first tick and the board auto-clears
        assert!(controller.tick());
        assert!(controller.is_paused());
        assert_eq!(controller.population(), 0);
    }

    #[test]
    fn test_toggle_pause_flips_and_keeps_board() {
        let mut controller = controller_with(presets::blinker().cells);
        controller.toggle_pause();
        assert!(controller.is_running());
        controller.toggle_pause();
        assert!(controller.is_paused());
        assert_eq!(controller.population(), 3);
    }

    #[test]
    fn test_step_advances_once_while_paused() {
        let mut controller = controller_with(presets::blinker().cells);
        let before = controller.board().clone();

        assert!(controller.step());
        assert!(controller.is_paused());
        assert_eq!(controller.generation(), 1);
        assert_ne!(controller.board(), &before);

        let events = controller.take_events();
        assert_eq!(events.len(), 1);
        match &events[0] {
            BoardEvent::CellsChanged(changes) => {
                assert_eq!(changes.added.len(), 2);
                assert_eq!(changes.removed.len(), 2);
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn test_step_while_running_is_ignored() {
        let mut controller = controller_with(presets::blinker().cells);
        controller.toggle_pause();
        let before = controller.board().clone();

        assert!(!controller.step());
        assert_eq!(controller.board(), &before);
        assert_eq!(controller.generation(), 0);
    }

    #[test]
    fn test_tick_only_advances_while_running() {
        let mut controller = controller_with(presets::blinker().cells);
        assert!(!controller.tick());
        assert_eq!(controller.generation(), 0);

        controller.toggle_pause();
        assert!(controller.tick());
        assert!(controller.tick());
        assert_eq!(controller.generation(), 2);
        assert!(controller.is_running());
    }

    #[test]
    fn test_tick_auto_clears_on_extinction() {
        let mut controller = controller_with(vec![(0, 0), (1, 0)]);
        controller.toggle_pause();
        assert!(controller.is_running());

        controller.tick();
        assert!(controller.is_paused());
        assert_eq!(controller.population(), 0);
        assert_eq!(controller.generation(), 0);
        assert_eq!(controller.take_events().last(), Some(&BoardEvent::Replaced));
    }

    #[test]
    fn test_still_life_emits_no_change_events() {
        let mut controller = controller_with(presets::block().cells);
        controller.step();
        assert!(controller.take_events().is_empty());
        assert_eq!(controller.generation(), 1);
    }

    #[test]
    fn test_clear_pauses_and_empties() {
        let mut controller = controller_with(presets::glider().cells);
        controller.toggle_pause();
        controller.clear();
        assert!(controller.is_paused());
        assert_eq!(controller.population(), 0);
        assert_eq!(controller.take_events(), vec![BoardEvent::Replaced]);
    }

    #[test]
    fn test_restart_reseeds_last_pattern() {
        let mut controller = controller_with(presets::glider().cells);
        let initial = controller.board().clone();
        controller.step();
        controller.step();
        controller.restart();
        assert_eq!(controller.board(), &initial);
        assert_eq!(controller.generation(), 0);
    }

    #[test]
    fn test_edit_unavailable_while_running() {
        let mut controller = controller_with(presets::blinker().cells);
        controller.toggle_pause();
        assert!(controller.edit().is_none());

        controller.toggle_pause();
        assert!(controller.edit().is_some());
    }

    #[test]
    fn test_set_algorithm_keeps_results() {
        let mut serial = controller_with(presets::r_pentomino().cells);
        let mut parallel = controller_with(presets::r_pentomino().cells);
        parallel.set_algorithm(Algorithm::SparseParallel);
        assert_eq!(parallel.algorithm(), Algorithm::SparseParallel);
        assert_eq!(parallel.config().algorithm, Algorithm::SparseParallel);
        for _ in 0..30 {
            serial.step();
            parallel.step();
        }
        assert_eq!(serial.board(), parallel.board());
    }
}
