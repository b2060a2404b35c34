//! Persistence for grid state.
//!
//! A saved state is one JSON record:
//!
//! ```text
//! {"grid_width":3,"grid_height":2,"cells":[0,1,0,1,1,1]}
//! ```
//!
//! Cells are row-major, `0` dead and `1` alive. Saving goes through a sibling
//! temp file that is renamed over the target, so readers never observe a
//! half-written file. Loading decodes and validates into a fresh [`Grid`]
//! before anything is handed back; the caller's state is only replaced on
//! success.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use tui_life_core::Grid;
use tui_life_types::{Cell, LifeError};

pub use tui_life_core as core;
pub use tui_life_types as types;

/// Default file name used when no path is configured.
pub const DEFAULT_STATE_FILE: &str = "life_state.json";

#[derive(Debug, Error)]
pub enum StoreError {
    /// Nothing saved at this path yet.
    #[error("no saved state at {}", .0.display())]
    NotFound(PathBuf),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed saved state: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("saved state rejected: {0}")]
    Invalid(String),

    #[error(transparent)]
    Grid(#[from] LifeError),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}

/// On-disk record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedState {
    pub grid_width: usize,
    pub grid_height: usize,
    pub cells: Vec<u8>,
}

impl From<&Grid> for SavedState {
    fn from(grid: &Grid) -> Self {
        Self {
            grid_width: grid.width(),
            grid_height: grid.height(),
            cells: grid.cells().iter().map(|c| c.as_u8()).collect(),
        }
    }
}

impl TryFrom<SavedState> for Grid {
    type Error = StoreError;

    fn try_from(saved: SavedState) -> Result<Self, Self::Error> {
        let expected = saved.grid_width.saturating_mul(saved.grid_height);
        if saved.cells.len() != expected {
            return Err(StoreError::Invalid(format!(
                "{}x{} grid needs {} cells, found {}",
                saved.grid_width,
                saved.grid_height,
                expected,
                saved.cells.len()
            )));
        }

        let cells = saved
            .cells
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                Cell::from_u8(v)
                    .ok_or_else(|| StoreError::Invalid(format!("cell {} has value {}", i, v)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Grid::from_cells(saved.grid_width, saved.grid_height, cells)?)
    }
}

/// Serialize a grid to JSON text.
pub fn encode(grid: &Grid) -> Result<String, StoreError> {
    Ok(serde_json::to_string(&SavedState::from(grid))?)
}

/// Parse and validate JSON text into a grid.
pub fn decode(text: &str) -> Result<Grid, StoreError> {
    let saved: SavedState = serde_json::from_str(text)?;
    Grid::try_from(saved)
}

/// Write `grid` to `path`, replacing any previous save atomically.
pub fn save(path: &Path, grid: &Grid) -> Result<(), StoreError> {
    let text = encode(grid)?;
    let tmp = temp_path(path);

    fs::write(&tmp, text).map_err(|source| StoreError::Io {
        path: tmp.clone(),
        source,
    })?;
    if let Err(source) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(StoreError::Io {
            path: path.to_path_buf(),
            source,
        });
    }

    info!(
        path = %path.display(),
        width = grid.width(),
        height = grid.height(),
        "state saved"
    );
    Ok(())
}

/// Read a grid back from `path`.
///
/// A missing file is reported as [`StoreError::NotFound`] so callers can
/// treat it as "nothing to load".
pub fn load(path: &Path) -> Result<Grid, StoreError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(StoreError::NotFound(path.to_path_buf()));
        }
        Err(source) => {
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let grid = decode(&text)?;
    info!(
        path = %path.display(),
        width = grid.width(),
        height = grid.height(),
        "state loaded"
    );
    Ok(grid)
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| DEFAULT_STATE_FILE.into());
    name.push(".tmp");
    path.with_file_name(name)
}
