//! Simulation engine built on top of the pure core.
//!
//! [`Simulation`] is the controller the UI talks to: it routes edits through
//! the undo history, drives playback through a [`TickScheduler`], and exposes
//! read-only accessors for redraws.

pub mod scheduler;
pub mod simulation;

pub use tui_life_core as core;
pub use tui_life_types as types;

pub use scheduler::{DeadlineScheduler, TickHandle, TickScheduler};
pub use simulation::{RunState, Simulation};
