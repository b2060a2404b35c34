//! Terminal Game of Life runner (default binary).
//!
//! Uses crossterm for keyboard/mouse input and the framebuffer renderer from
//! `tui_life::term`. Configuration comes from `LIFE_*` environment variables
//! (see `tui_life::config`).

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use tui_life::input::{handle_key_event, handle_mouse_event, should_quit};
use tui_life::term::{FrameBuffer, GridView, TerminalRenderer, Viewport};
use tui_life::{logging, App, LifeConfig};

/// Upper bound on how long the loop blocks for input while paused.
const IDLE_POLL_MS: u64 = 250;

fn main() -> Result<()> {
    let config = LifeConfig::from_env();
    logging::init(&config)?;
    info!(?config, "starting");

    let mut app = App::new(&config).context("invalid initial configuration")?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut app);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!("exiting");
    result
}

fn run(term: &mut TerminalRenderer, app: &mut App) -> Result<()> {
    let clock = Instant::now();
    let now_ms = || clock.elapsed().as_millis() as u64;

    let mut view = GridView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut dirty = true;
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut viewport = Viewport::new(w, h);
    let grid = app.simulation().grid();
    let mut layout = view.layout(grid.width(), grid.height(), viewport);

    loop {
        // Render.
        if dirty {
            view.set_theme(app.theme());
            let sim = app.simulation();
            layout = view.render_into(sim.grid(), &sim.status(), app.message(), viewport, &mut fb);
            term.draw_swap(&mut fb)?;
            dirty = false;
        }

        // Input with timeout until next tick.
        let timeout = app
            .time_until_tick(now_ms())
            .unwrap_or(IDLE_POLL_MS)
            .min(IDLE_POLL_MS);

        if event::poll(Duration::from_millis(timeout))? {
            // Bring the scheduler clock up to date so ticks armed by this
            // event are timed from now.
            if app.poll(now_ms()) {
                dirty = true;
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        app.apply_action(action);
                        dirty = true;
                    }
                }
                Event::Mouse(mouse) => {
                    if let Some(action) = handle_mouse_event(mouse, &layout) {
                        app.apply_pointer(action);
                        dirty = true;
                    }
                }
                Event::Resize(w, h) => {
                    viewport = Viewport::new(w, h);
                    term.invalidate();
                    dirty = true;
                }
                _ => {}
            }
        }

        // Tick.
        if app.poll(now_ms()) {
            dirty = true;
        }
    }
}
