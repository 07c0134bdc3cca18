use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use maze_snake::core::GameState;
use maze_snake::input::InputHandler;
use maze_snake::types::{Direction, GameAction, GameConfig};

fn key(code: KeyCode, kind: KeyEventKind) -> Event {
    Event::Key(KeyEvent::new_with_kind(code, KeyModifiers::NONE, kind))
}

#[test]
fn frame_batch_feeds_the_game_in_order() {
    let mut input = InputHandler::new();
    input.handle_event(&key(KeyCode::Up, KeyEventKind::Press));
    input.handle_event(&key(KeyCode::Up, KeyEventKind::Release));
    input.handle_event(&key(KeyCode::Char('a'), KeyEventKind::Repeat));
    input.handle_event(&Event::FocusLost);

    let actions = input.take_actions();
    assert_eq!(
        actions.as_slice(),
        &[
            GameAction::Turn(Direction::Up),
            GameAction::Turn(Direction::Left)
        ]
    );
    assert!(input.pending().is_empty());

    let mut state = GameState::new(GameConfig::default(), 1);
    for action in actions {
        state.apply_action(action);
    }
    assert!(state.pending_turns().len() <= 2);
}

#[test]
fn quit_keys_do_not_produce_actions() {
    for code in [KeyCode::Esc, KeyCode::Char('q'), KeyCode::Char('Q')] {
        let mut input = InputHandler::new();
        input.handle_event(&key(code, KeyEventKind::Press));
        assert!(input.quit_requested());
        assert!(input.pending().is_empty());
    }

    let mut input = InputHandler::new();
    input.handle_event(&Event::Key(KeyEvent::new(
        KeyCode::Char('c'),
        KeyModifiers::CONTROL,
    )));
    assert!(input.quit_requested());
}

#[test]
fn pause_and_restart_keys() {
    let mut input = InputHandler::new();
    input.handle_event(&key(KeyCode::Char('p'), KeyEventKind::Press));
    input.handle_event(&key(KeyCode::Char('r'), KeyEventKind::Press));
    assert_eq!(
        input.pending(),
        &[GameAction::Pause, GameAction::Restart]
    );
}
