//! Terminal rendering module.
//!
//! A small rendering layer for the Game of Life terminal UI. It avoids widget
//! libraries and instead renders into a framebuffer that is diffed and flushed
//! to the terminal.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep layout pure so pointer mapping and drawing agree on cell positions
//! - Allow precise control over aspect ratio (2 chars wide per cell)

pub mod fb;
pub mod grid_view;
pub mod renderer;
pub mod theme;

pub use tui_life_core as core;
pub use tui_life_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use grid_view::{GridView, Viewport, HELP_TEXT};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use theme::{Palette, Theme};
