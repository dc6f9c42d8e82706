use crossterm::event::{KeyCode, KeyEvent};

use blockfall::core::GameState;
use blockfall::input::{ActionBuffer, KeyOutcome};
use blockfall::types::GameAction;

#[test]
fn key_sequence_drives_player() {
    let mut state = GameState::default();
    let mut buf = ActionBuffer::new();

    for code in [KeyCode::Left, KeyCode::Left, KeyCode::Down, KeyCode::Up, KeyCode::Right] {
        assert!(matches!(buf.feed(KeyEvent::from(code)), KeyOutcome::Queued(_)));
    }
    for action in buf.drain() {
        state.apply_action(action);
    }

    assert_eq!((state.player().x, state.player().y), (4, 1));
    assert_eq!(
        state.player().shape.to_rows(),
        vec![vec![0, 1, 0], vec![1, 1, 0], vec![0, 1, 0]]
    );
}

#[test]
fn only_four_actions_are_exposed() {
    let mut buf = ActionBuffer::new();
    for ch in "abcdefghijklmnoprstuvwxyz0123456789 ".chars() {
        buf.feed(KeyEvent::from(KeyCode::Char(ch)));
    }
    for action in buf.drain() {
        assert!(GameAction::ALL.contains(&action));
    }
}
