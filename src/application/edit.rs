use crate::domain::{Cell, CellSet, Changes};
use super::BoardEvent;

/// Mutable access to a paused board for manual painting.
/// Obtained from `SimulationController::edit`.
pub struct EditSession<'a> {
    board: &'a mut CellSet,
    events: &'a mut Vec<BoardEvent>,
}

impl<'a> EditSession<'a> {
    pub(crate) fn new(board: &'a mut CellSet, events: &'a mut Vec<BoardEvent>) -> Self {
        Self { board, events }
    }

    /// Bring a cell to life. Returns whether the board changed.
    pub fn set_alive(&mut self, cell: Cell) -> bool {
        let changed = self.board.add(cell);
        if changed {
            self.notify(vec![cell], Vec::new());
        }
        changed
    }

    /// Kill a cell if it is alive. Dead cells are left alone.
    pub fn set_dead_if_alive(&mut self, cell: Cell) -> bool {
        let changed = self.board.remove(cell);
        if changed {
            self.notify(Vec::new(), vec![cell]);
        }
        changed
    }

    /// Flip a single cell
    pub fn toggle_at(&mut self, cell: Cell) -> bool {
        if self.board.contains(cell) {
            self.set_dead_if_alive(cell)
        } else {
            self.set_alive(cell)
        }
    }

    fn notify(&mut self, added: Vec<Cell>, removed: Vec<Cell>) {
        self.events
            .push(BoardEvent::Edited(Changes { added, removed }));
    }
}
