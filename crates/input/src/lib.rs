//! Terminal input module.
//!
//! Maps `crossterm` key and mouse events into [`crate::types::LifeAction`]s and
//! grid-cell pointer actions, and turns speed gestures into clamped interval
//! values for `Simulation::set_interval`.

pub mod map;
pub mod pointer;
pub mod speed;

pub use tui_life_types as types;

pub use map::{handle_key_event, should_quit};
pub use pointer::{handle_mouse_event, PointerAction};
pub use speed::{faster, slower};
