use crate::grid::Grid;

/// Read-only view of the simulation for status lines and redraw decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusSnapshot {
    pub width: usize,
    pub height: usize,
    pub population: usize,
    pub generation: u64,
    pub running: bool,
    pub interval_ms: u64,
    pub undo_depth: usize,
    pub redo_depth: usize,
}

impl StatusSnapshot {
    /// Snapshot of a paused grid with no history.
    pub fn for_grid(grid: &Grid, interval_ms: u64) -> Self {
        Self {
            width: grid.width(),
            height: grid.height(),
            population: grid.population(),
            generation: 0,
            running: false,
            interval_ms,
            undo_depth: 0,
            redo_depth: 0,
        }
    }

    pub fn state_label(&self) -> &'static str {
        if self.running {
            "RUNNING"
        } else {
            "PAUSED"
        }
    }
}
