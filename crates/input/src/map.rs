//! Key mapping from terminal events to game actions.

use crate::types::{Direction, GameAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Movement
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(GameAction::Turn(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(GameAction::Turn(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(GameAction::Turn(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(GameAction::Turn(Direction::Right))
        }

        // Actions
        KeyCode::Char('p') | KeyCode::Char('P') => Some(GameAction::Pause),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn turn(code: KeyCode) -> Option<GameAction> {
        handle_key_event(KeyEvent::from(code))
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(turn(KeyCode::Up), Some(GameAction::Turn(Direction::Up)));
        assert_eq!(turn(KeyCode::Down), Some(GameAction::Turn(Direction::Down)));
        assert_eq!(turn(KeyCode::Left), Some(GameAction::Turn(Direction::Left)));
        assert_eq!(turn(KeyCode::Right), Some(GameAction::Turn(Direction::Right)));
    }

    #[test]
    fn test_wasd_keys() {
        assert_eq!(turn(KeyCode::Char('w')), Some(GameAction::Turn(Direction::Up)));
        assert_eq!(turn(KeyCode::Char('S')), Some(GameAction::Turn(Direction::Down)));
        assert_eq!(turn(KeyCode::Char('a')), Some(GameAction::Turn(Direction::Left)));
        assert_eq!(turn(KeyCode::Char('D')), Some(GameAction::Turn(Direction::Right)));
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(turn(KeyCode::Char('p')), Some(GameAction::Pause));
        assert_eq!(turn(KeyCode::Char('R')), Some(GameAction::Restart));
        assert_eq!(turn(KeyCode::Char('x')), None);
        assert_eq!(turn(KeyCode::Enter), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
