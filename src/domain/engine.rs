//! Next-generation computation over a sparse live set.
//!
//! Only the 3x3 neighborhood of every live cell is evaluated, so the work
//! per generation is bounded by nine times the population and never by
//! the extent of the plane.

use std::collections::HashSet;

use rayon::prelude::*;

use super::{Algorithm, Cell, CellSet, CellState};

/// Stateless Life stepper. Holds only the evaluation strategy.
#[derive(Clone, Copy, Debug, Default)]
pub struct LifeEngine {
    algorithm: Algorithm,
}

impl LifeEngine {
    pub fn new(algorithm: Algorithm) -> Self {
        Self { algorithm }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
    }

    /// Every live cell and its 8 neighbors, deduplicated.
    /// These are the only cells whose state can change.
    pub fn candidates(current: &CellSet) -> CellSet {
        let mut candidates = CellSet::with_capacity(current.len() * 9);
        for cell in current {
            candidates.extend(cell.neighborhood());
        }
        candidates
    }

    /// Compute the next generation. `current` is never modified.
    pub fn advance(&self, current: &CellSet) -> CellSet {
        if current.is_empty() {
            return CellSet::new();
        }

        let candidates = Self::candidates(current);
        match self.algorithm {
            Algorithm::Sparse => candidates
                .into_iter()
                .filter(|&cell| Self::survives(current, cell))
                .collect(),
            Algorithm::SparseParallel => {
                let cells: Vec<Cell> = candidates.into_iter().collect();
                let next: HashSet<Cell> = cells
                    .into_par_iter()
                    .filter(|&cell| Self::survives(current, cell))
                    .collect();
                CellSet::from(next)
            }
        }
    }

    /// Run `generations` advances in a row
    pub fn advance_n(&self, current: &CellSet, generations: usize) -> CellSet {
        let mut board = current.clone();
        for _ in 0..generations {
            if board.is_empty() {
                break;
            }
            board = self.advance(&board);
        }
        board
    }

    /// Whether `cell` is alive in the next generation
    #[inline]
    fn survives(current: &CellSet, cell: Cell) -> bool {
        let state = CellState::from_alive(current.contains(cell));
        state.evolve(current.live_neighbors(cell)).is_alive()
    }
}
