//! Sparse set of live cells on the unbounded plane.
//!
//! Absence from the set means dead, so memory is proportional to the
//! population rather than to any board size.

use std::collections::HashSet;
use std::collections::hash_set;

use super::Cell;

/// The live cells of one generation
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CellSet {
    cells: HashSet<Cell>,
}

/// Difference between two generations, as seen by a renderer
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Changes {
    pub added: Vec<Cell>,
    pub removed: Vec<Cell>,
}

impl Changes {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

impl CellSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cells: HashSet::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Mark a cell alive. Returns false if it already was.
    #[inline]
    pub fn add(&mut self, cell: Cell) -> bool {
        self.cells.insert(cell)
    }

    /// Mark a cell dead. Returns false if it already was.
    #[inline]
    pub fn remove(&mut self, cell: Cell) -> bool {
        self.cells.remove(&cell)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate live cells. Order is unspecified.
    pub fn iter(&self) -> hash_set::Iter<'_, Cell> {
        self.cells.iter()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Count live cells among the 8 neighbors of `cell`
    pub fn live_neighbors(&self, cell: Cell) -> u8 {
        cell.neighbors().filter(|n| self.contains(*n)).count() as u8
    }

    /// Cells born and cells that died going from `self` to `next`
    pub fn diff(&self, next: &CellSet) -> Changes {
        Changes {
            added: next.cells.difference(&self.cells).copied().collect(),
            removed: self.cells.difference(&next.cells).copied().collect(),
        }
    }

    /// Min and max corners of the live region, None when empty
    pub fn bounding_box(&self) -> Option<(Cell, Cell)> {
        let mut iter = self.cells.iter();
        let first = *iter.next()?;
        Some(iter.fold((first, first), |(min, max), c| {
            (
                Cell::new(min.x.min(c.x), min.y.min(c.y)),
                Cell::new(max.x.max(c.x), max.y.max(c.y)),
            )
        }))
    }

    /// Live cells in row-major order, for display and comparisons
    pub fn sorted(&self) -> Vec<Cell> {
        let mut cells: Vec<Cell> = self.cells.iter().copied().collect();
        cells.sort_by_key(|c| (c.y, c.x));
        cells
    }
}

impl From<HashSet<Cell>> for CellSet {
    fn from(cells: HashSet<Cell>) -> Self {
        Self { cells }
    }
}

impl FromIterator<Cell> for CellSet {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl Extend<Cell> for CellSet {
    fn extend<I: IntoIterator<Item = Cell>>(&mut self, iter: I) {
        self.cells.extend(iter);
    }
}

impl<'a> IntoIterator for &'a CellSet {
    type Item = &'a Cell;
    type IntoIter = hash_set::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl IntoIterator for CellSet {
    type Item = Cell;
    type IntoIter = hash_set::IntoIter<Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(cells: &[(i32, i32)]) -> CellSet {
        cells.iter().map(|&c| Cell::from(c)).collect()
    }

    #[test]
    fn test_add_and_remove_are_idempotent() {
        let mut cells = CellSet::new();
        assert!(cells.add(Cell::new(1, 2)));
        assert!(!cells.add(Cell::new(1, 2)));
        assert_eq!(cells.len(), 1);

        assert!(cells.remove(Cell::new(1, 2)));
        assert!(!cells.remove(Cell::new(1, 2)));
        assert!(cells.is_empty());
    }

    #[test]
    fn test_contains_any_coordinate() {
        let cells = set(&[(i32::MIN, i32::MAX), (-40_000, 12)]);
        assert!(cells.contains(Cell::new(i32::MIN, i32::MAX)));
        assert!(cells.contains(Cell::new(-40_000, 12)));
        assert!(!cells.contains(Cell::new(0, 0)));
    }

    #[test]
    fn test_iteration_is_restartable() {
        let cells = set(&[(0, 0), (1, 0), (2, 0)]);
        assert_eq!(cells.iter().count(), 3);
        assert_eq!(cells.iter().count(), 3);
    }

    #[test]
    fn test_clear() {
        let mut cells = set(&[(0, 0), (5, 5)]);
        cells.clear();
        assert_eq!(cells.len(), 0);
        assert!(!cells.contains(Cell::new(0, 0)));
    }

    #[test]
    fn test_live_neighbors() {
        let cells = set(&[(0, 0), (1, 0), (2, 0)]);
        assert_eq!(cells.live_neighbors(Cell::new(1, 0)), 2);
        assert_eq!(cells.live_neighbors(Cell::new(1, 1)), 3);
        assert_eq!(cells.live_neighbors(Cell::new(5, 5)), 0);
    }

    #[test]
    fn test_diff_reports_births_and_deaths() {
        let before = set(&[(0, 0), (1, 0)]);
        let after = set(&[(1, 0), (1, 1)]);
        let changes = before.diff(&after);
        assert_eq!(changes.added, vec![Cell::new(1, 1)]);
        assert_eq!(changes.removed, vec![Cell::new(0, 0)]);
        assert!(before.diff(&before).is_empty());
    }

    #[test]
    fn test_bounding_box() {
        assert_eq!(CellSet::new().bounding_box(), None);
        let cells = set(&[(3, -1), (-2, 4), (0, 0)]);
        assert_eq!(
            cells.bounding_box(),
            Some((Cell::new(-2, -1), Cell::new(3, 4)))
        );
    }

    #[test]
    fn test_sorted_is_row_major() {
        let cells = set(&[(1, 1), (0, 1), (5, 0)]);
        assert_eq!(
            cells.sorted(),
            vec![Cell::new(5, 0), Cell::new(0, 1), Cell::new(1, 1)]
        );
    }
}
