// Domain layer - sparse Life core
pub mod domain;

// Application layer - controller, scheduling, editing
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Algorithm, Cell, CellSet, LifeEngine, Pattern, PatternLoader, presets};
pub use application::{Camera, SimulationConfig, SimulationController, SimulationState, TickScheduler};
pub use input::Command;
