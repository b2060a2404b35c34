//! Simulation controller - the single entry point for the UI layer
//!
//! Owns the live grid, the undo/redo history, playback state and the pending
//! tick handle. Every user edit goes through here so that it is recorded in
//! history before it is applied; automatic steps are not recorded.
//!
//! Playback is a one-shot tick that re-arms itself: `start` steps once and arms
//! a tick, each accepted tick steps once and arms the next, `stop` cancels the
//! pending tick. A tick whose handle is not the pending one is ignored, so
//! nothing can step after `stop` returns.

use tracing::{debug, warn};

use crate::core::{rules, Grid, History, RandomSource, StatusSnapshot};
use crate::scheduler::{DeadlineScheduler, TickHandle, TickScheduler};
use crate::types::{Cell, LifeError};

/// Playback state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Paused,
    Running,
}

#[derive(Debug)]
pub struct Simulation<S: TickScheduler> {
    grid: Grid,
    history: History,
    state: RunState,
    interval_ms: u64,
    /// Generations stepped since the last clear/randomize/resize/load.
    generation: u64,
    pending_tick: Option<TickHandle>,
    scheduler: S,
}

impl<S: TickScheduler> Simulation<S> {
    pub fn new(grid: Grid, interval_ms: u64, scheduler: S) -> Result<Self, LifeError> {
        if interval_ms == 0 {
            return Err(LifeError::InvalidInterval(0));
        }
        Ok(Self {
            grid,
            history: History::new(),
            state: RunState::Paused,
            interval_ms,
            generation: 0,
            pending_tick: None,
            scheduler,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn pending_tick(&self) -> Option<TickHandle> {
        self.pending_tick
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn status(&self) -> StatusSnapshot {
        StatusSnapshot {
            width: self.grid.width(),
            height: self.grid.height(),
            population: self.grid.population(),
            generation: self.generation,
            running: self.is_running(),
            interval_ms: self.interval_ms,
            undo_depth: self.history.undo_depth(),
            redo_depth: self.history.redo_depth(),
        }
    }

    // ---------------------------------------------------------------------
    // Editing
    // ---------------------------------------------------------------------

    /// Flip one cell. Out-of-range coordinates are rejected before anything
    /// is recorded.
    pub fn toggle_cell(&mut self, x: i32, y: i32) -> Result<Cell, LifeError> {
        self.grid.get(x, y)?;
        self.history.record(&self.grid);
        self.grid.toggle(x, y)
    }

    /// Bring a cell to life during a drag gesture.
    ///
    /// Positions off the grid are ignored, as is painting a cell that is
    /// already alive (no history entry for a no-op). Returns whether the grid
    /// changed.
    pub fn paint_cell(&mut self, x: i32, y: i32) -> bool {
        match self.grid.get(x, y) {
            Ok(Cell::Dead) => {
                self.history.record(&self.grid);
                self.grid.set(x, y, Cell::Alive).is_ok()
            }
            Ok(Cell::Alive) | Err(_) => false,
        }
    }

    /// Kill every cell.
    pub fn clear(&mut self) {
        self.history.record(&self.grid);
        self.grid.clear();
        self.generation = 0;
        debug!("grid cleared");
    }

    /// Alias of [`Simulation::clear`].
    pub fn reset(&mut self) {
        self.clear();
    }

    pub fn randomize<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        self.history.record(&self.grid);
        self.grid.randomize(rng);
        self.generation = 0;
        debug!(population = self.grid.population(), "grid randomized");
    }

    /// Replace the grid with a blank one of new extents.
    ///
    /// Not undoable in itself; it does fork the timeline, so the redo branch
    /// is dropped. Older snapshots keep their own dimensions.
    pub fn resize_grid(&mut self, width: usize, height: usize) -> Result<(), LifeError> {
        let grid = Grid::new(width, height)?;
        self.history.invalidate_redo();
        self.grid = grid;
        self.generation = 0;
        debug!(width, height, "grid resized");
        Ok(())
    }

    /// Replace the grid wholesale with a loaded one. Recorded, so it can be
    /// undone.
    pub fn load_grid(&mut self, grid: Grid) {
        self.history.record(&self.grid);
        self.grid = grid;
        self.generation = 0;
        debug!(
            width = self.grid.width(),
            height = self.grid.height(),
            "grid replaced"
        );
    }

    pub fn undo(&mut self) -> Result<(), LifeError> {
        let current = self.grid.clone();
        self.grid = self.history.undo(current)?;
        debug!(undo_depth = self.history.undo_depth(), "undo");
        Ok(())
    }

    pub fn redo(&mut self) -> Result<(), LifeError> {
        let current = self.grid.clone();
        self.grid = self.history.redo(current)?;
        debug!(redo_depth = self.history.redo_depth(), "redo");
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Playback
    // ---------------------------------------------------------------------

    /// Advance one generation now, whatever the playback state.
    ///
    /// Not recorded, but the grid no longer matches the redo branch, so it is
    /// dropped.
    pub fn step_once(&mut self) {
        self.history.invalidate_redo();
        self.grid = rules::step(&self.grid);
        self.generation = self.generation.wrapping_add(1);
    }

    /// Paused -> Running: step immediately, then tick every `interval_ms`.
    /// No-op when already running.
    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }
        self.state = RunState::Running;
        self.step_once();
        self.pending_tick = Some(self.scheduler.arm(self.interval_ms));
        debug!(interval_ms = self.interval_ms, "simulation started");
    }

    /// Running -> Paused. Cancels the pending tick; no-op when paused.
    pub fn stop(&mut self) {
        if let Some(handle) = self.pending_tick.take() {
            self.scheduler.cancel(handle);
        }
        if self.is_running() {
            self.state = RunState::Paused;
            debug!(generation = self.generation, "simulation stopped");
        }
    }

    pub fn toggle_running(&mut self) {
        if self.is_running() {
            self.stop();
        } else {
            self.start();
        }
    }

    /// Change the tick interval. A running simulation is restarted so the new
    /// cadence applies immediately.
    pub fn set_interval(&mut self, ms: i64) -> Result<(), LifeError> {
        if ms <= 0 {
            warn!(ms, "rejected tick interval");
            return Err(LifeError::InvalidInterval(ms));
        }
        self.interval_ms = ms as u64;
        if self.is_running() {
            self.stop();
            self.start();
        }
        Ok(())
    }

    /// Handle a fired tick. Returns whether a generation was stepped.
    ///
    /// Stale handles (cancelled by `stop` or superseded by a restart) are
    /// dropped without stepping.
    pub fn on_tick(&mut self, handle: TickHandle) -> bool {
        if !self.is_running() || self.pending_tick != Some(handle) {
            debug!(tick = handle.id(), "ignoring stale tick");
            return false;
        }
        self.step_once();
        self.pending_tick = Some(self.scheduler.arm(self.interval_ms));
        true
    }
}

impl Simulation<DeadlineScheduler> {
    /// Advance the scheduler clock and dispatch a due tick, if any.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.scheduler.advance_to(now_ms) {
            Some(handle) => self.on_tick(handle),
            None => false,
        }
    }

    /// Milliseconds the host may wait before the next tick is due.
    pub fn time_until_tick(&self, now_ms: u64) -> Option<u64> {
        self.scheduler.time_until_next(now_ms)
    }
}
