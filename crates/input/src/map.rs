//! Keyboard bindings for the terminal runner.
//!
//! Arrow keys plus two letter clusters (vim `hjkl`, gamer `wasd`), matched
//! case-insensitively. Chords with Ctrl never map to a game action.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key press to a game action, if it is bound.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        KeyCode::Left => Some(GameAction::MoveLeft),
        KeyCode::Right => Some(GameAction::MoveRight),
        KeyCode::Down => Some(GameAction::SoftDrop),
        KeyCode::Up => Some(GameAction::Rotate),
        KeyCode::Char(c) => letter_action(c.to_ascii_lowercase()),
        _ => None,
    }
}

fn letter_action(c: char) -> Option<GameAction> {
    let action = match c {
        'h' | 'a' => GameAction::MoveLeft,
        'l' | 'd' => GameAction::MoveRight,
        'j' | 's' => GameAction::SoftDrop,
        'k' | 'w' => GameAction::Rotate,
        'r' => GameAction::Restart,
        _ => return None,
    };
    Some(action)
}

/// Whether the key ends the runner: `q`, Esc, or Ctrl-C.
pub fn should_quit(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => true,
        KeyCode::Char(c) if c.eq_ignore_ascii_case(&'q') => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> Option<GameAction> {
        handle_key_event(KeyEvent::from(code))
    }

    #[test]
    fn arrows_and_letter_clusters_agree() {
        let clusters = [
            (KeyCode::Left, 'h', 'a', GameAction::MoveLeft),
            (KeyCode::Right, 'l', 'd', GameAction::MoveRight),
            (KeyCode::Down, 'j', 's', GameAction::SoftDrop),
            (KeyCode::Up, 'k', 'w', GameAction::Rotate),
        ];
        for (arrow, vim, wasd, action) in clusters {
            assert_eq!(press(arrow), Some(action));
            assert_eq!(press(KeyCode::Char(vim)), Some(action));
            assert_eq!(press(KeyCode::Char(wasd.to_ascii_uppercase())), Some(action));
        }
    }

    #[test]
    fn restart_and_unbound_keys() {
        assert_eq!(press(KeyCode::Char('R')), Some(GameAction::Restart));
        // Single clockwise rotation; no hard drop, hold or pause keys.
        for c in ['z', ' ', 'c', 'p'] {
            assert_eq!(press(KeyCode::Char(c)), None, "{:?}", c);
        }
        assert_eq!(press(KeyCode::Enter), None);
    }

    #[test]
    fn ctrl_chords_are_ignored() {
        let chord = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL);
        assert_eq!(handle_key_event(chord), None);
    }

    #[test]
    fn quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Char('Q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
