//! Key mapping from terminal events to game actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::GameAction;

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Movement
        KeyCode::Left => Some(GameAction::MoveLeft),
        KeyCode::Right => Some(GameAction::MoveRight),
        KeyCode::Down => Some(GameAction::SoftDrop),

        // Rotation
        KeyCode::Up => Some(GameAction::Rotate),

        // Actions
        KeyCode::Enter => Some(GameAction::HardDrop),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(GameAction::Pause),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(GameAction::ToggleTurbo),

        // Restart (after game over)
        KeyCode::Char(' ') => Some(GameAction::Restart),

        _ => None,
    }
}

/// Whether an action may be driven by the terminal's key auto-repeat.
/// Toggles and restart must fire once per physical press.
pub fn is_repeatable(action: GameAction) -> bool {
    matches!(
        action,
        GameAction::MoveLeft | GameAction::MoveRight | GameAction::SoftDrop
    )
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
