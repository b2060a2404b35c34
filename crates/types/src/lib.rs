//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! Everything here is plain data, usable from the simulation core, the terminal
//! renderer and the input layer alike.
//!
//! # Grid Dimensions
//!
//! - **Default**: 50 x 50 cells
//! - **Maximum**: 1024 cells per side (the grid is finite and held in memory)
//! - **Resize step**: 5 cells per side for the grow/shrink keys
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_INTERVAL_MS` | 100 | Delay between automatic generations |
//! | `MIN_INTERVAL_MS` | 10 | Floor applied by speed-up gestures |
//! | `MAX_INTERVAL_MS` | 5000 | Ceiling applied by slow-down gestures |
//! | `INTERVAL_STEP_MS` | 10 | Change per speed gesture |
//!
//! # Examples
//!
//! ```
//! use tui_life_types::{Cell, LifeAction, LifeError};
//!
//! assert_eq!(Cell::Dead.toggled(), Cell::Alive);
//! assert_eq!(Cell::from_u8(1), Some(Cell::Alive));
//! assert_eq!(LifeAction::from_str("undo"), Some(LifeAction::Undo));
//!
//! let err = LifeError::InvalidInterval(0);
//! assert_eq!(err.to_string(), "tick interval must be positive, got 0ms");
//! ```

use thiserror::Error;

/// Default grid width in cells.
pub const DEFAULT_GRID_WIDTH: usize = 50;

/// Default grid height in cells.
pub const DEFAULT_GRID_HEIGHT: usize = 50;

/// Largest accepted extent on either axis.
pub const MAX_GRID_DIM: usize = 1024;

/// Cells added or removed per side by the grow/shrink keys.
pub const RESIZE_STEP: usize = 5;

/// Default delay between automatic generations.
pub const DEFAULT_INTERVAL_MS: u64 = 100;

/// Lowest interval reachable through speed gestures.
pub const MIN_INTERVAL_MS: u64 = 10;

/// Highest interval reachable through speed gestures.
pub const MAX_INTERVAL_MS: u64 = 5000;

/// Interval change per speed gesture.
pub const INTERVAL_STEP_MS: u64 = 10;

/// State of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Dead = 0,
    Alive = 1,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    /// Flip Dead <-> Alive.
    pub fn toggled(self) -> Self {
        match self {
            Cell::Dead => Cell::Alive,
            Cell::Alive => Cell::Dead,
        }
    }

    /// Numeric encoding used by persisted grids (0 or 1).
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Parse the 0/1 encoding. Any other value is rejected.
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Cell::Dead),
            1 => Some(Cell::Alive),
            _ => None,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }
}

/// User-level commands produced by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifeAction {
    ToggleRunning,
    Step,
    Clear,
    Randomize,
    Undo,
    Redo,
    SpeedUp,
    SlowDown,
    GrowGrid,
    ShrinkGrid,
    Save,
    Load,
    CycleTheme,
}

impl LifeAction {
    /// Parse action from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "togglerunning" => Some(LifeAction::ToggleRunning),
            "step" => Some(LifeAction::Step),
            "clear" => Some(LifeAction::Clear),
            "randomize" => Some(LifeAction::Randomize),
            "undo" => Some(LifeAction::Undo),
            "redo" => Some(LifeAction::Redo),
            "speedup" => Some(LifeAction::SpeedUp),
            "slowdown" => Some(LifeAction::SlowDown),
            "growgrid" => Some(LifeAction::GrowGrid),
            "shrinkgrid" => Some(LifeAction::ShrinkGrid),
            "save" => Some(LifeAction::Save),
            "load" => Some(LifeAction::Load),
            "cycletheme" => Some(LifeAction::CycleTheme),
            _ => None,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            LifeAction::ToggleRunning => "toggleRunning",
            LifeAction::Step => "step",
            LifeAction::Clear => "clear",
            LifeAction::Randomize => "randomize",
            LifeAction::Undo => "undo",
            LifeAction::Redo => "redo",
            LifeAction::SpeedUp => "speedUp",
            LifeAction::SlowDown => "slowDown",
            LifeAction::GrowGrid => "growGrid",
            LifeAction::ShrinkGrid => "shrinkGrid",
            LifeAction::Save => "save",
            LifeAction::Load => "load",
            LifeAction::CycleTheme => "cycleTheme",
        }
    }
}

/// Where the grid sits on screen, in terminal columns/rows.
///
/// Produced by the renderer and consumed by the pointer mapper so that both
/// agree on the cell under the mouse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    /// Column of the first grid cell (inside the border).
    pub origin_x: u16,
    /// Row of the first grid cell (inside the border).
    pub origin_y: u16,
    /// Terminal columns per grid cell.
    pub cell_w: u16,
    /// Terminal rows per grid cell.
    pub cell_h: u16,
    /// Grid columns actually drawn; fewer than the grid width when clipped.
    pub cols: u16,
    /// Grid rows actually drawn.
    pub rows: u16,
}

impl BoardLayout {
    /// Translate a terminal position into grid coordinates.
    ///
    /// Positions left of / above the origin map to negative coordinates; the
    /// caller decides whether that is an error or a no-op.
    pub fn cell_at(&self, column: u16, row: u16) -> (i32, i32) {
        let cw = self.cell_w.max(1) as i32;
        let ch = self.cell_h.max(1) as i32;
        let dx = column as i32 - self.origin_x as i32;
        let dy = row as i32 - self.origin_y as i32;
        (dx.div_euclid(cw), dy.div_euclid(ch))
    }

    /// Like [`BoardLayout::cell_at`], but `None` unless the position falls on
    /// a drawn cell.
    pub fn visible_cell_at(&self, column: u16, row: u16) -> Option<(i32, i32)> {
        let (x, y) = self.cell_at(column, row);
        let drawn = (0..self.cols as i32).contains(&x) && (0..self.rows as i32).contains(&y);
        drawn.then_some((x, y))
    }
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self {
            origin_x: 1,
            origin_y: 1,
            cell_w: 2,
            cell_h: 1,
            cols: DEFAULT_GRID_WIDTH as u16,
            rows: DEFAULT_GRID_HEIGHT as u16,
        }
    }
}

/// Errors raised by grid, history and controller operations.
///
/// None of these are fatal: the operation is refused and prior state is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LifeError {
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },

    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("tick interval must be positive, got {0}ms")]
    InvalidInterval(i64),

    #[error("nothing to undo")]
    NothingToUndo,

    #[error("nothing to redo")]
    NothingToRedo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_u8_encoding() {
        assert_eq!(Cell::Dead.as_u8(), 0);
        assert_eq!(Cell::Alive.as_u8(), 1);
        assert_eq!(Cell::from_u8(0), Some(Cell::Dead));
        assert_eq!(Cell::from_u8(2), None);
    }

    #[test]
    fn action_string_roundtrip() {
        for action in [
            LifeAction::ToggleRunning,
            LifeAction::Step,
            LifeAction::Undo,
            LifeAction::Redo,
            LifeAction::GrowGrid,
            LifeAction::CycleTheme,
        ] {
            assert_eq!(LifeAction::from_str(action.as_str()), Some(action));
        }
        assert_eq!(LifeAction::from_str("jump"), None);
    }

    #[test]
    fn layout_maps_columns_by_cell_width() {
        let layout = BoardLayout::default();
        assert_eq!(layout.cell_at(1, 1), (0, 0));
        assert_eq!(layout.cell_at(2, 1), (0, 0));
        assert_eq!(layout.cell_at(3, 1), (1, 0));
        assert_eq!(layout.cell_at(0, 0), (-1, -1));
    }

    #[test]
    fn visible_cell_at_stops_at_drawn_extent() {
        let layout = BoardLayout {
            cols: 3,
            rows: 2,
            ..BoardLayout::default()
        };
        assert_eq!(layout.visible_cell_at(1, 1), Some((0, 0)));
        assert_eq!(layout.visible_cell_at(6, 2), Some((2, 1)));
        assert_eq!(layout.visible_cell_at(7, 2), None);
        assert_eq!(layout.visible_cell_at(1, 3), None);
        assert_eq!(layout.visible_cell_at(0, 1), None);
        assert_eq!(layout.visible_cell_at(1, 0), None);
    }
}
