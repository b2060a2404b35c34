//! History module - undo/redo over whole-grid snapshots
//!
//! Two stacks of owned [`Grid`] copies: `past` (top = most recent state before
//! an edit) and `future` (states undone and available for redo). Snapshots carry
//! their dimensions, so undoing across a resize restores a consistent grid.
//!
//! Depth is unbounded; memory grows with edits x grid area.

use crate::grid::Grid;
use crate::types::LifeError;

#[derive(Debug, Clone, Default)]
pub struct History {
    past: Vec<Grid>,
    future: Vec<Grid>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot `grid` ahead of a user edit. Forks the timeline: redo is lost.
    pub fn record(&mut self, grid: &Grid) {
        self.past.push(grid.clone());
        self.future.clear();
    }

    /// Drop the redo branch without recording anything.
    ///
    /// Used by mutations that are not themselves undoable.
    pub fn invalidate_redo(&mut self) {
        self.future.clear();
    }

    /// Step back one edit. `current` becomes the redo candidate.
    pub fn undo(&mut self, current: Grid) -> Result<Grid, LifeError> {
        let previous = self.past.pop().ok_or(LifeError::NothingToUndo)?;
        self.future.push(current);
        Ok(previous)
    }

    /// Step forward one undone edit. `current` goes back onto `past`.
    pub fn redo(&mut self, current: Grid) -> Result<Grid, LifeError> {
        let next = self.future.pop().ok_or(LifeError::NothingToRedo)?;
        // Push directly rather than via `record`, which would wipe the rest
        // of the redo branch.
        self.past.push(current);
        Ok(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.past.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.future.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;

    fn grid_with(x: i32) -> Grid {
        let mut g = Grid::new(4, 1).unwrap();
        g.set(x, 0, Cell::Alive).unwrap();
        g
    }

    #[test]
    fn new_history_is_empty() {
        let history = History::new();
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn undo_on_empty_reports_nothing_to_undo() {
        let mut history = History::new();
        assert_eq!(history.undo(grid_with(0)), Err(LifeError::NothingToUndo));
        assert_eq!(history.redo_depth(), 0);
    }

    #[test]
    fn redo_on_empty_reports_nothing_to_redo() {
        let mut history = History::new();
        history.record(&grid_with(0));
        assert_eq!(history.redo(grid_with(1)), Err(LifeError::NothingToRedo));
        assert_eq!(history.undo_depth(), 1);
    }

    #[test]
    fn undo_then_redo_moves_between_stacks() {
        let mut history = History::new();
        history.record(&grid_with(0));
        history.record(&grid_with(1));

        // Live state is grid_with(2).
        let undone = history.undo(grid_with(2)).unwrap();
        assert_eq!(undone, grid_with(1));
        assert_eq!((history.undo_depth(), history.redo_depth()), (1, 1));

        let redone = history.redo(undone).unwrap();
        assert_eq!(redone, grid_with(2));
        assert_eq!((history.undo_depth(), history.redo_depth()), (2, 0));
    }

    #[test]
    fn redo_keeps_remaining_future_entries() {
        let mut history = History::new();
        history.record(&grid_with(0));
        history.record(&grid_with(1));

        let a = history.undo(grid_with(2)).unwrap();
        let b = history.undo(a).unwrap();
        assert_eq!(history.redo_depth(), 2);

        let c = history.redo(b).unwrap();
        assert_eq!(c, grid_with(1));
        // The second redo candidate must survive the first redo.
        assert!(history.can_redo());
        assert_eq!(history.redo(c).unwrap(), grid_with(2));
    }

    #[test]
    fn record_clears_redo_stack() {
        let mut history = History::new();
        history.record(&grid_with(0));
        let _ = history.undo(grid_with(1)).unwrap();
        assert!(history.can_redo());

        history.record(&grid_with(3));
        assert!(!history.can_redo());
    }

    #[test]
    fn snapshot_is_independent_of_live_grid() {
        let mut history = History::new();
        let mut live = grid_with(0);
        history.record(&live);
        live.set(3, 0, Cell::Alive).unwrap();

        let restored = history.undo(live).unwrap();
        assert_eq!(restored, grid_with(0));
    }

    #[test]
    fn snapshots_keep_their_dimensions() {
        let mut history = History::new();
        history.record(&Grid::new(3, 3).unwrap());
        let restored = history.undo(Grid::new(8, 2).unwrap()).unwrap();
        assert_eq!((restored.width(), restored.height()), (3, 3));
    }
}
