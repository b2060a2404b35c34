//! Application layer: turns input actions into simulation calls and status
//! messages.
//!
//! Everything here is synchronous and free of terminal I/O so the binary's
//! event loop stays thin and the behaviour can be tested directly.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::LifeConfig;
use crate::core::{Grid, SimpleRng};
use crate::engine::{DeadlineScheduler, Simulation};
use crate::input::{faster, slower, PointerAction};
use crate::store::{self, StoreError};
use crate::term::Theme;
use crate::types::{LifeAction, LifeError, MAX_GRID_DIM, RESIZE_STEP};

pub struct App {
    sim: Simulation<DeadlineScheduler>,
    rng: SimpleRng,
    state_path: PathBuf,
    theme: Theme,
    /// Feedback for the last action, shown until the next one.
    message: Option<String>,
}

impl App {
    pub fn new(config: &LifeConfig) -> Result<Self, LifeError> {
        let grid = Grid::new(config.grid_width, config.grid_height)?;
        let sim = Simulation::new(grid, config.interval_ms, DeadlineScheduler::new())?;
        Ok(Self {
            sim,
            rng: SimpleRng::new(config.seed),
            state_path: config.state_path.clone(),
            theme: Theme::default(),
            message: None,
        })
    }

    pub fn simulation(&self) -> &Simulation<DeadlineScheduler> {
        &self.sim
    }

    pub fn simulation_mut(&mut self) -> &mut Simulation<DeadlineScheduler> {
        &mut self.sim
    }

    pub fn state_path(&self) -> &Path {
        &self.state_path
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Run a keyboard-level action.
    pub fn apply_action(&mut self, action: LifeAction) {
        self.message = None;
        debug!(action = action.as_str(), "action");

        match action {
            LifeAction::ToggleRunning => self.sim.toggle_running(),
            LifeAction::Step => {
                if self.sim.is_running() {
                    self.say("pause to single-step");
                } else {
                    self.sim.step_once();
                }
            }
            LifeAction::Clear => self.sim.reset(),
            LifeAction::Randomize => self.sim.randomize(&mut self.rng),
            LifeAction::Undo => {
                if let Err(e) = self.sim.undo() {
                    self.say(e.to_string());
                }
            }
            LifeAction::Redo => {
                if let Err(e) = self.sim.redo() {
                    self.say(e.to_string());
                }
            }
            LifeAction::SpeedUp => self.set_interval(faster(self.sim.interval_ms())),
            LifeAction::SlowDown => self.set_interval(slower(self.sim.interval_ms())),
            LifeAction::GrowGrid => self.resize_by(RESIZE_STEP as isize),
            LifeAction::ShrinkGrid => self.resize_by(-(RESIZE_STEP as isize)),
            LifeAction::Save => self.save(),
            LifeAction::Load => self.load(),
            LifeAction::CycleTheme => {
                self.theme = self.theme.next();
                self.say(format!("theme: {}", self.theme.name()));
            }
        }
    }

    /// Run a mouse action already translated to grid coordinates.
    ///
    /// Clicks outside the grid are ignored.
    pub fn apply_pointer(&mut self, action: PointerAction) {
        match action {
            PointerAction::Toggle { x, y } => {
                if let Err(e) = self.sim.toggle_cell(x, y) {
                    debug!(error = %e, "click outside grid");
                }
            }
            PointerAction::Paint { x, y } => {
                self.sim.paint_cell(x, y);
            }
        }
    }

    /// Dispatch a due tick. Returns whether a generation was stepped.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        self.sim.poll(now_ms)
    }

    /// How long the event loop may block before the next tick is due.
    pub fn time_until_tick(&self, now_ms: u64) -> Option<u64> {
        self.sim.time_until_tick(now_ms)
    }

    fn say(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    fn set_interval(&mut self, ms: i64) {
        match self.sim.set_interval(ms) {
            Ok(()) => self.say(format!("interval {}ms", self.sim.interval_ms())),
            Err(e) => self.say(e.to_string()),
        }
    }

    fn resize_by(&mut self, delta: isize) {
        let grid = self.sim.grid();
        let w = grid.width().saturating_add_signed(delta).clamp(1, MAX_GRID_DIM);
        let h = grid.height().saturating_add_signed(delta).clamp(1, MAX_GRID_DIM);
        if (w, h) == (grid.width(), grid.height()) {
            return;
        }
        match self.sim.resize_grid(w, h) {
            Ok(()) => self.say(format!("grid {}x{}", w, h)),
            Err(e) => self.say(e.to_string()),
        }
    }

    fn save(&mut self) {
        match store::save(&self.state_path, self.sim.grid()) {
            Ok(()) => self.say(format!("saved to {}", self.state_path.display())),
            Err(e) => {
                warn!(error = %e, "save failed");
                self.say(format!("save failed: {}", e));
            }
        }
    }

    fn load(&mut self) {
        match store::load(&self.state_path) {
            Ok(grid) => {
                let (w, h) = (grid.width(), grid.height());
                self.sim.load_grid(grid);
                self.say(format!("loaded {}x{} grid", w, h));
            }
            Err(e @ StoreError::NotFound(_)) => self.say(e.to_string()),
            Err(e) => {
                warn!(error = %e, "load failed");
                self.say(format!("load failed: {}", e));
            }
        }
    }
}
