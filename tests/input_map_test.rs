//! Input mapping tests - terminal key events to engine intents

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use falling_blocks::core::Engine;
use falling_blocks::input::{action_for_event, should_quit};
use falling_blocks::types::{EngineState, GameAction};

fn key(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind,
        state: KeyEventState::NONE,
    }
}

fn press(code: KeyCode) -> KeyEvent {
    key(code, KeyEventKind::Press)
}

#[test]
fn test_every_binding_family() {
    let cases = [
        (KeyCode::Left, GameAction::MoveLeft),
        (KeyCode::Char('a'), GameAction::MoveLeft),
        (KeyCode::Char('h'), GameAction::MoveLeft),
        (KeyCode::Right, GameAction::MoveRight),
        (KeyCode::Char('d'), GameAction::MoveRight),
        (KeyCode::Char('l'), GameAction::MoveRight),
        (KeyCode::Down, GameAction::SoftDrop),
        (KeyCode::Char('s'), GameAction::SoftDrop),
        (KeyCode::Char('j'), GameAction::SoftDrop),
        (KeyCode::Up, GameAction::Rotate),
        (KeyCode::Char('w'), GameAction::Rotate),
        (KeyCode::Char('k'), GameAction::Rotate),
        (KeyCode::Enter, GameAction::Start),
        (KeyCode::Char('n'), GameAction::Start),
    ];

    for (code, expected) in cases {
        assert_eq!(action_for_event(press(code)), Some(expected), "{code:?}");
    }
}

#[test]
fn test_repeat_counts_release_does_not() {
    assert_eq!(
        action_for_event(key(KeyCode::Left, KeyEventKind::Repeat)),
        Some(GameAction::MoveLeft)
    );
    assert_eq!(action_for_event(key(KeyCode::Left, KeyEventKind::Release)), None);
}

#[test]
fn test_quit_keys_are_not_actions() {
    let ctrl_c = KeyEvent {
        modifiers: KeyModifiers::CONTROL,
        ..press(KeyCode::Char('c'))
    };
    for event in [press(KeyCode::Char('q')), press(KeyCode::Esc), ctrl_c] {
        assert!(should_quit(event));
        assert_eq!(action_for_event(event), None);
    }
    assert!(!should_quit(press(KeyCode::Char('c'))));
}

#[test]
fn test_key_stream_drives_engine() {
    let mut engine = Engine::new(31);
    for code in [KeyCode::Enter, KeyCode::Left, KeyCode::Left, KeyCode::Down] {
        if let Some(action) = action_for_event(press(code)) {
            engine.apply_action(action);
        }
    }

    assert_eq!(engine.state(), EngineState::Running);
    let piece = engine.active_piece().unwrap();
    assert_eq!(piece.y, 1);
    let spawn = falling_blocks::core::Piece::new(piece.kind, piece.color, 10);
    assert_eq!(piece.x, spawn.x - 2);
}
