//! TUI Life (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_life::{core,engine,input,store,term,types}`
//! and hosts the application layer shared by the binary and the integration tests.

pub mod app;
pub mod config;
pub mod logging;

pub use tui_life_core as core;
pub use tui_life_engine as engine;
pub use tui_life_input as input;
pub use tui_life_store as store;
pub use tui_life_term as term;
pub use tui_life_types as types;

pub use app::App;
pub use config::LifeConfig;
