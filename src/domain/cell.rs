/// Cell identifies a unit square on the unbounded integer plane.
/// Equality and hashing are by coordinate pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

/// Offsets of the 8 surrounding cells
#[rustfmt::skip]
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate by (dx, dy). Wraps at the i32 limits instead of panicking.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.wrapping_add(dx),
            y: self.y.wrapping_add(dy),
        }
    }

    /// The 8 cells surrounding this one
    pub fn neighbors(self) -> impl Iterator<Item = Cell> {
        NEIGHBOR_OFFSETS
            .iter()
            .map(move |&(dx, dy)| self.offset(dx, dy))
    }

    /// The 3x3 block centered on this cell, including the cell itself
    pub fn neighborhood(self) -> impl Iterator<Item = Cell> {
        (-1..=1).flat_map(move |dy| (-1..=1).map(move |dx| self.offset(dx, dy)))
    }

    /// Chebyshev distance, the number of king moves between two cells
    pub fn distance(self, other: Cell) -> u32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Liveness of a single cell under evaluation.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CellState {
    Dead,
    Alive,
}

impl CellState {
    pub const fn from_alive(alive: bool) -> Self {
        if alive { CellState::Alive } else { CellState::Dead }
    }

    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, CellState::Alive)
    }

    /// Pure function computing the next state under B3/S23:
    /// 1. Live cell with 2-3 neighbors survives
    /// 2. Dead cell with exactly 3 neighbors becomes alive
    /// 3. All other cases result in death
    pub const fn evolve(self, neighbors: u8) -> Self {
        match (self, neighbors) {
            (CellState::Alive, 2 | 3) => CellState::Alive,
            (CellState::Dead, 3) => CellState::Alive,
            _ => CellState::Dead,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_underpopulation() {
        assert_eq!(CellState::Alive.evolve(0), CellState::Dead);
        assert_eq!(CellState::Alive.evolve(1), CellState::Dead);
    }

    #[test]
    fn test_survival() {
        assert_eq!(CellState::Alive.evolve(2), CellState::Alive);
        assert_eq!(CellState::Alive.evolve(3), CellState::Alive);
    }

    #[test]
    fn test_overpopulation() {
        assert_eq!(CellState::Alive.evolve(4), CellState::Dead);
        assert_eq!(CellState::Alive.evolve(8), CellState::Dead);
    }

    #[test]
    fn test_reproduction() {
        assert_eq!(CellState::Dead.evolve(3), CellState::Alive);
        assert_eq!(CellState::Dead.evolve(2), CellState::Dead);
        assert_eq!(CellState::Dead.evolve(6), CellState::Dead);
    }

    #[test]
    fn test_neighbors_excludes_self() {
        let cell = Cell::new(4, -7);
        let neighbors: HashSet<Cell> = cell.neighbors().collect();
        assert_eq!(neighbors.len(), 8);
        assert!(!neighbors.contains(&cell));
        assert!(neighbors.iter().all(|n| n.distance(cell) == 1));
    }

    #[test]
    fn test_neighborhood_is_three_by_three() {
        let cell = Cell::new(0, 0);
        let block: HashSet<Cell> = cell.neighborhood().collect();
        assert_eq!(block.len(), 9);
        assert!(block.contains(&cell));
        assert!(block.contains(&Cell::new(-1, -1)));
        assert!(block.contains(&Cell::new(1, 1)));
    }

    #[test]
    fn test_offset_wraps_at_limits() {
        let edge = Cell::new(i32::MAX, i32::MIN);
        assert_eq!(edge.offset(1, -1), Cell::new(i32::MIN, i32::MAX));
    }
}
