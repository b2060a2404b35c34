//! Persistence tests - save/load through the filesystem

use std::fs;

use tempfile::tempdir;
use tui_life::core::Grid;
use tui_life::store::{self, StoreError};

#[test]
fn test_save_then_load_round_trips() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("state.json");
    let grid = Grid::from_rows(&["#..#.", ".##..", "....#"]).unwrap();

    store::save(&path, &grid).unwrap();
    let loaded = store::load(&path).unwrap();
    assert_eq!(loaded, grid);
}

#[test]
fn test_saved_file_uses_documented_fields() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("state.json");
    let grid = Grid::from_rows(&[".#.", "###"]).unwrap();
    store::save(&path, &grid).unwrap();

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["grid_width"], 3);
    assert_eq!(value["grid_height"], 2);
    assert_eq!(value["cells"], serde_json::json!([0, 1, 0, 1, 1, 1]));
}

#[test]
fn test_save_overwrites_and_leaves_no_temp_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("state.json");

    store::save(&path, &Grid::new(4, 4).unwrap()).unwrap();
    let second = Grid::from_rows(&["##", "##"]).unwrap();
    store::save(&path, &second).unwrap();

    assert_eq!(store::load(&path).unwrap(), second);
    let names: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(names, vec![std::ffi::OsString::from("state.json")]);
}

#[test]
fn test_load_missing_file_is_not_found() {
    let dir = tempdir().unwrap();
    let err = store::load(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));
    assert!(err.is_not_found());
}

#[test]
fn test_load_rejects_garbage() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("state.json");
    fs::write(&path, "not json").unwrap();
    assert!(matches!(store::load(&path), Err(StoreError::Decode(_))));
}

#[test]
fn test_load_rejects_wrong_cell_count() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("state.json");
    fs::write(&path, r#"{"grid_width":2,"grid_height":2,"cells":[0,1,0]}"#).unwrap();
    assert!(matches!(store::load(&path), Err(StoreError::Invalid(_))));
}

#[test]
fn test_load_rejects_zero_dimensions() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("state.json");
    fs::write(&path, r#"{"grid_width":0,"grid_height":0,"cells":[]}"#).unwrap();
    assert!(matches!(store::load(&path), Err(StoreError::Grid(_))));
}
