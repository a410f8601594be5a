//! Key mapping from terminal events to shell actions.

use crate::types::ShellAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Map keyboard input to shell actions.
pub fn handle_key_event(key: KeyEvent) -> Option<ShellAction> {
    match key.code {
        // Cursor
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(ShellAction::CursorLeft)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(ShellAction::CursorRight)
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(ShellAction::CursorUp)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(ShellAction::CursorDown)
        }

        // Flip / start
        KeyCode::Char(' ') => Some(ShellAction::Flip),
        KeyCode::Enter => Some(ShellAction::Start),

        // Session
        KeyCode::Char('r') | KeyCode::Char('R') => Some(ShellAction::Restart),
        KeyCode::Esc | KeyCode::Char('m') | KeyCode::Char('M') => Some(ShellAction::Menu),

        _ => None,
    }
}

/// Terminal cell of a left-button press, if this event is one.
pub fn pointer_press(mouse: MouseEvent) -> Option<(u16, u16)> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some((mouse.column, mouse.row)),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
