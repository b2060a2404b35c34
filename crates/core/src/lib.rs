//! Core simulation module - pure, deterministic, and testable
//!
//! This crate holds the Game of Life data model and rules. It has **no
//! dependencies** on terminals, files or clocks, which keeps it:
//!
//! - **Deterministic**: a seeded [`SimpleRng`] reproduces the same random fill
//! - **Testable**: grid, rule and history behaviour are unit tested in isolation
//! - **Portable**: the same core drives the terminal UI and the benches
//!
//! # Module Structure
//!
//! - [`grid`]: bounded `width x height` cell field with checked access
//! - [`rules`]: B3/S23 stepping with non-wrapping neighbourhoods
//! - [`history`]: undo/redo stacks of whole-grid snapshots
//! - [`rng`]: randomness source used by `Grid::randomize`
//! - [`snapshot`]: read-only status summary for the UI
//!
//! # Example
//!
//! ```
//! use tui_life_core::{rules, Grid, History};
//!
//! // A vertical blinker.
//! let mut grid = Grid::from_rows(&[".....", "..#..", "..#..", "..#..", "....."]).unwrap();
//! let mut history = History::new();
//!
//! history.record(&grid);
//! grid = rules::step(&grid);
//! assert_eq!(grid.to_rows()[2], ".###.");
//!
//! let restored = history.undo(grid).unwrap();
//! assert_eq!(restored.to_rows()[1], "..#..");
//! ```

pub mod grid;
pub mod history;
pub mod rng;
pub mod rules;
pub mod snapshot;

pub use tui_life_types as types;

pub use grid::Grid;
pub use history::History;
pub use rng::{RandomSource, SimpleRng};
pub use rules::{live_neighbors, next_cell, step};
pub use snapshot::StatusSnapshot;
