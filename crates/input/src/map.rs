//! Key mapping from terminal events to simulation actions.

use crate::types::LifeAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to simulation actions.
pub fn handle_key_event(key: KeyEvent) -> Option<LifeAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('z') | KeyCode::Char('Z') => Some(LifeAction::Undo),
            KeyCode::Char('y') | KeyCode::Char('Y') => Some(LifeAction::Redo),
            KeyCode::Char('s') | KeyCode::Char('S') => Some(LifeAction::Save),
            KeyCode::Char('o') | KeyCode::Char('O') => Some(LifeAction::Load),
            _ => None,
        };
    }

    match key.code {
        // Playback
        KeyCode::Char(' ') | KeyCode::Enter => Some(LifeAction::ToggleRunning),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Right => Some(LifeAction::Step),

        // Editing
        KeyCode::Char('c') | KeyCode::Char('C') => Some(LifeAction::Clear),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(LifeAction::Randomize),
        KeyCode::Char('u') | KeyCode::Char('U') => Some(LifeAction::Undo),
        KeyCode::Char('y') | KeyCode::Char('Y') => Some(LifeAction::Redo),

        // Speed
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up => Some(LifeAction::SpeedUp),
        KeyCode::Char('-') | KeyCode::Char('_') | KeyCode::Down => Some(LifeAction::SlowDown),

        // Grid size
        KeyCode::Char(']') => Some(LifeAction::GrowGrid),
        KeyCode::Char('[') => Some(LifeAction::ShrinkGrid),

        // Persistence
        KeyCode::Char('s') | KeyCode::Char('S') => Some(LifeAction::Save),
        KeyCode::Char('o') | KeyCode::Char('O') => Some(LifeAction::Load),

        KeyCode::Char('t') | KeyCode::Char('T') => Some(LifeAction::CycleTheme),

        _ => None,
    }
}

/// Check if key should quit the program.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
