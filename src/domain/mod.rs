mod algorithm;
mod cell;
mod cell_set;
mod engine;
mod pattern;

pub use algorithm::Algorithm;
pub use cell::{Cell, CellState};
pub use cell_set::{CellSet, Changes};
pub use engine::LifeEngine;
pub use pattern::{Pattern, PatternError, PatternLoader, presets};
