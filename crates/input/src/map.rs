//! Key mapping from terminal events to UI commands.

use crate::types::{Direction, UiCommand};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to UI commands.
pub fn map_key(key: KeyEvent) -> Option<UiCommand> {
    match key.code {
        // Cursor
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(UiCommand::Move(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(UiCommand::Move(Direction::Right))
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(UiCommand::Move(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(UiCommand::Move(Direction::Down))
        }

        // Flip the card under the cursor
        KeyCode::Char(' ') | KeyCode::Enter => Some(UiCommand::Activate),

        KeyCode::Tab | KeyCode::Char('p') | KeyCode::Char('P') => Some(UiCommand::TogglePanel),

        KeyCode::Char('r') | KeyCode::Char('R') => Some(UiCommand::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Left)),
            Some(UiCommand::Move(Direction::Left))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('l'))),
            Some(UiCommand::Move(Direction::Right))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('K'))),
            Some(UiCommand::Move(Direction::Up))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('s'))),
            Some(UiCommand::Move(Direction::Down))
        );
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char(' '))),
            Some(UiCommand::Activate)
        );
        assert_eq!(map_key(KeyEvent::from(KeyCode::Enter)), Some(UiCommand::Activate));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Tab)), Some(UiCommand::TogglePanel));
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('p'))),
            Some(UiCommand::TogglePanel)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('R'))),
            Some(UiCommand::Restart)
        );
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
    }
}
