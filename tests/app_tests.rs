//! Application layer tests - actions, pointer edits and status messages

use tempfile::{tempdir, TempDir};
use tui_life::core::Grid;
use tui_life::input::PointerAction;
use tui_life::store;
use tui_life::term::Theme;
use tui_life::types::{Cell, LifeAction, MAX_INTERVAL_MS, MIN_INTERVAL_MS, RESIZE_STEP};
use tui_life::{App, LifeConfig};

fn app() -> (App, TempDir) {
    let dir = tempdir().unwrap();
    let config = LifeConfig {
        grid_width: 10,
        grid_height: 8,
        interval_ms: 100,
        seed: 7,
        state_path: dir.path().join("life.json"),
        ..LifeConfig::default()
    };
    (App::new(&config).unwrap(), dir)
}

#[test]
fn test_new_uses_config() {
    let (app, _dir) = app();
    let sim = app.simulation();
    assert_eq!((sim.grid().width(), sim.grid().height()), (10, 8));
    assert_eq!(sim.interval_ms(), 100);
    assert!(!sim.is_running());
    assert_eq!(app.message(), None);
}

#[test]
fn test_new_rejects_bad_config() {
    let config = LifeConfig {
        grid_width: 0,
        ..LifeConfig::default()
    };
    assert!(App::new(&config).is_err());

    let config = LifeConfig {
        interval_ms: 0,
        ..LifeConfig::default()
    };
    assert!(App::new(&config).is_err());
}

#[test]
fn test_pointer_toggle_and_paint() {
    let (mut app, _dir) = app();
    app.apply_pointer(PointerAction::Toggle { x: 2, y: 3 });
    assert_eq!(app.simulation().grid().get(2, 3), Ok(Cell::Alive));

    app.apply_pointer(PointerAction::Paint { x: 3, y: 3 });
    app.apply_pointer(PointerAction::Paint { x: 3, y: 3 });
    assert_eq!(app.simulation().grid().get(3, 3), Ok(Cell::Alive));
    assert_eq!(app.simulation().history().undo_depth(), 2);

    // Off the grid: ignored.
    app.apply_pointer(PointerAction::Toggle { x: 50, y: 0 });
    assert_eq!(app.simulation().history().undo_depth(), 2);
}

#[test]
fn test_undo_with_empty_history_sets_message() {
    let (mut app, _dir) = app();
    app.apply_action(LifeAction::Undo);
    assert_eq!(app.message(), Some("nothing to undo"));
    app.apply_action(LifeAction::Redo);
    assert_eq!(app.message(), Some("nothing to redo"));
}

#[test]
fn test_message_cleared_by_next_action() {
    let (mut app, _dir) = app();
    app.apply_action(LifeAction::Undo);
    assert!(app.message().is_some());
    app.apply_action(LifeAction::Clear);
    assert_eq!(app.message(), None);
}

#[test]
fn test_toggle_running_and_step() {
    let (mut app, _dir) = app();
    app.apply_action(LifeAction::Step);
    assert_eq!(app.simulation().generation(), 1);

    app.apply_action(LifeAction::ToggleRunning);
    assert!(app.simulation().is_running());
    let gen = app.simulation().generation();

    app.apply_action(LifeAction::Step);
    assert_eq!(app.simulation().generation(), gen);
    assert_eq!(app.message(), Some("pause to single-step"));

    app.apply_action(LifeAction::ToggleRunning);
    assert!(!app.simulation().is_running());
}

#[test]
fn test_speed_is_clamped() {
    let (mut app, _dir) = app();
    for _ in 0..50 {
        app.apply_action(LifeAction::SpeedUp);
    }
    assert_eq!(app.simulation().interval_ms(), MIN_INTERVAL_MS);

    for _ in 0..1000 {
        app.apply_action(LifeAction::SlowDown);
    }
    assert_eq!(app.simulation().interval_ms(), MAX_INTERVAL_MS);
}

#[test]
fn test_grow_and_shrink_grid() {
    let (mut app, _dir) = app();
    app.apply_action(LifeAction::GrowGrid);
    let grid = app.simulation().grid();
    assert_eq!(
        (grid.width(), grid.height()),
        (10 + RESIZE_STEP, 8 + RESIZE_STEP)
    );

    for _ in 0..10 {
        app.apply_action(LifeAction::ShrinkGrid);
    }
    let grid = app.simulation().grid();
    assert_eq!((grid.width(), grid.height()), (1, 1));
}

#[test]
fn test_randomize_is_seeded() {
    let (mut a, _da) = app();
    let (mut b, _db) = app();
    a.apply_action(LifeAction::Randomize);
    b.apply_action(LifeAction::Randomize);
    assert_eq!(a.simulation().grid(), b.simulation().grid());
    assert!(a.simulation().grid().population() > 0);
}

#[test]
fn test_save_clear_load_restores_grid() {
    let (mut app, _dir) = app();
    app.apply_pointer(PointerAction::Toggle { x: 1, y: 1 });
    app.apply_pointer(PointerAction::Toggle { x: 8, y: 6 });
    let saved = app.simulation().grid().clone();

    app.apply_action(LifeAction::Save);
    assert!(app.state_path().exists());
    app.apply_action(LifeAction::Clear);
    assert!(app.simulation().grid().is_empty());

    app.apply_action(LifeAction::Load);
    assert_eq!(app.simulation().grid(), &saved);
    assert_eq!(app.message(), Some("loaded 10x8 grid"));

    // Loading is an edit like any other.
    app.apply_action(LifeAction::Undo);
    assert!(app.simulation().grid().is_empty());
}

#[test]
fn test_load_missing_file_keeps_state() {
    let (mut app, _dir) = app();
    app.apply_pointer(PointerAction::Toggle { x: 4, y: 4 });
    let before = app.simulation().grid().clone();
    let depth = app.simulation().history().undo_depth();

    app.apply_action(LifeAction::Load);
    assert_eq!(app.simulation().grid(), &before);
    assert_eq!(app.simulation().history().undo_depth(), depth);
    assert!(app.message().unwrap().starts_with("no saved state"));
}

#[test]
fn test_load_of_different_size_replaces_dimensions() {
    let (mut app, _dir) = app();
    let other = Grid::from_rows(&["#.#", ".#."]).unwrap();
    store::save(app.state_path(), &other).unwrap();

    app.apply_action(LifeAction::Load);
    assert_eq!(app.simulation().grid(), &other);
}

#[test]
fn test_cycle_theme() {
    let (mut app, _dir) = app();
    assert_eq!(app.theme(), Theme::Dark);
    app.apply_action(LifeAction::CycleTheme);
    assert_eq!(app.theme(), Theme::Light);
    assert_eq!(app.message(), Some("theme: light"));
    app.apply_action(LifeAction::CycleTheme);
    assert_eq!(app.theme(), Theme::Dark);
}

#[test]
fn test_poll_drives_ticks() {
    let (mut app, _dir) = app();
    app.apply_pointer(PointerAction::Toggle { x: 0, y: 0 });
    app.apply_action(LifeAction::ToggleRunning);
    assert_eq!(app.time_until_tick(0), Some(100));
    assert!(!app.poll(50));
    assert!(app.poll(100));
    assert_eq!(app.simulation().generation(), 2);
}
