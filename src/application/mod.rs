mod camera;
mod config;
mod controller;
mod edit;
mod scheduler;

pub use camera::Camera;
pub use config::{DEFAULT_TICK_INTERVAL, SimulationConfig};
pub use controller::{BoardEvent, SimulationController, SimulationState};
pub use edit::EditSession;
pub use scheduler::TickScheduler;
