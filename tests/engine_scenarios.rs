//! Engine scenarios - whole games driven through the public API

use falling_blocks::core::{ConfigError, Engine, EngineConfig};
use falling_blocks::types::{EngineState, GameAction, BOARD_HEIGHT, INITIAL_DROP_INTERVAL_MS};
use proptest::prelude::*;

const STEP_MS: u64 = INITIAL_DROP_INTERVAL_MS as u64 + 1;

/// Drive gravity until the active piece locks. Returns the clock afterwards.
fn drop_until_lock(engine: &mut Engine, mut now: u64) -> u64 {
    let id = engine.game_id();
    let start_locks = engine.board().cells().iter().filter(|c| c.is_some()).count();
    loop {
        now += STEP_MS;
        engine.tick(now);
        let filled = engine.board().cells().iter().filter(|c| c.is_some()).count();
        if filled != start_locks || !engine.is_running() || engine.game_id() != id {
            return now;
        }
    }
}

#[test]
fn test_new_engine_is_idle() {
    let mut engine = Engine::new(7);
    assert_eq!(engine.state(), EngineState::Idle);
    assert!(engine.active_piece().is_none());
    assert!(engine.next_piece().is_none());
    assert!(!engine.tick(0));
    assert!(!engine.tick(10_000));
    assert!(!engine.apply_action(GameAction::MoveLeft));
    assert!(engine.board().is_empty());
}

#[test]
fn test_start_spawns_active_and_next() {
    let mut engine = Engine::new(7);
    assert!(engine.apply_action(GameAction::Start));

    assert_eq!(engine.state(), EngineState::Running);
    assert_eq!(engine.game_id(), 1);
    assert_eq!(engine.score(), 0);
    assert_eq!(engine.lines(), 0);
    assert_eq!(engine.drop_interval_ms(), INITIAL_DROP_INTERVAL_MS);

    let active = engine.active_piece().unwrap();
    assert_eq!(active.y, 0);
    assert!(engine.next_piece().is_some());
    assert!(engine.take_redraw());
    assert!(!engine.take_redraw());
}

#[test]
fn test_commands_apply_in_arrival_order() {
    let mut engine = Engine::new(99);
    engine.start();
    let spawn_x = engine.active_piece().unwrap().x;

    for _ in 0..20 {
        engine.apply_action(GameAction::MoveLeft);
    }
    assert_eq!(engine.active_piece().unwrap().x, 0);

    assert!(engine.apply_action(GameAction::MoveRight));
    assert_eq!(engine.active_piece().unwrap().x, 1);

    assert!(engine.apply_action(GameAction::SoftDrop));
    assert!(engine.apply_action(GameAction::SoftDrop));
    let piece = engine.active_piece().unwrap();
    assert_eq!((piece.x, piece.y), (1, 2));
    assert_ne!(spawn_x, 0);
}

#[test]
fn test_failed_move_does_not_request_redraw() {
    let mut engine = Engine::new(5);
    engine.start();
    engine.take_redraw();

    while engine.move_left() {}
    engine.take_redraw();

    assert!(!engine.move_left());
    assert!(!engine.take_redraw());
}

#[test]
fn test_soft_drop_never_locks() {
    let mut engine = Engine::new(11);
    engine.start();

    let mut drops = 0;
    while engine.soft_drop() {
        drops += 1;
    }
    let piece = engine.active_piece().unwrap();
    assert_eq!(piece.y, drops);
    assert_eq!(piece.y + i32::from(piece.shape.height()), i32::from(BOARD_HEIGHT));

    for _ in 0..5 {
        assert!(!engine.soft_drop());
    }
    assert!(engine.board().is_empty());
    assert!(engine.take_last_event().is_none());
}

#[test]
fn test_centered_stack_reaches_game_over() {
    let mut engine = Engine::new(2024);
    engine.start();

    let mut now = 0;
    engine.tick(now);
    let mut pieces = 0;
    while engine.is_running() {
        now = drop_until_lock(&mut engine, now);
        pieces += 1;
        assert!(pieces < 500, "game never ended");
    }

    assert_eq!(engine.state(), EngineState::GameOver);
    assert!(engine.active_piece().is_none());
    assert!(engine.next_piece().is_some());
    // Nothing moves sideways, so no row can fill.
    assert_eq!(engine.lines(), 0);
    assert_eq!(engine.score(), 0);

    let event = engine.take_last_event().unwrap();
    assert!(event.game_over);

    // Frozen until restarted.
    let board = engine.board().clone();
    assert!(!engine.tick(now + 100_000));
    assert!(!engine.apply_action(GameAction::Rotate));
    assert_eq!(engine.board(), &board);

    engine.apply_action(GameAction::Start);
    assert_eq!(engine.state(), EngineState::Running);
    assert_eq!(engine.game_id(), 2);
    assert!(engine.board().is_empty());
}

#[test]
fn test_snapshot_tracks_locked_cells() {
    let mut engine = Engine::new(3);
    engine.start();
    while engine.soft_drop() {}
    let piece = engine.active_piece().unwrap();

    engine.tick(0);
    engine.tick(STEP_MS);

    let snap = engine.snapshot();
    for (x, y) in piece.cells() {
        assert_eq!(snap.cell(x, y), Some(piece.color));
    }
    assert_eq!(snap.active, engine.active_piece());
    assert_eq!(snap.next, engine.next_piece());
    assert!(snap.playable());
}

#[test]
fn test_custom_board_size() {
    let config = EngineConfig {
        width: 6,
        height: 8,
        ..EngineConfig::with_seed(17)
    };
    let mut engine = Engine::with_config(config).unwrap();
    engine.start();

    assert_eq!(engine.board().width(), 6);
    assert_eq!(engine.board().height(), 8);
    while engine.soft_drop() {}
    let piece = engine.active_piece().unwrap();
    assert_eq!(piece.y + i32::from(piece.shape.height()), 8);
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = EngineConfig {
        width: 2,
        ..EngineConfig::default()
    };
    assert_eq!(Engine::with_config(config).unwrap_err(), ConfigError::Width(2));
}

proptest! {
    #[test]
    fn locked_piece_keeps_its_color(seed in any::<u32>(), shift in -5i32..6, turns in 0usize..4) {
        let mut engine = Engine::new(seed);
        engine.start();

        for _ in 0..turns {
            engine.rotate();
        }
        let step = if shift < 0 { GameAction::MoveLeft } else { GameAction::MoveRight };
        for _ in 0..shift.abs() {
            engine.apply_action(step);
        }
        while engine.soft_drop() {}
        let piece = engine.active_piece().unwrap();

        engine.tick(0);
        prop_assert!(!engine.tick(INITIAL_DROP_INTERVAL_MS as u64));
        prop_assert!(engine.tick(STEP_MS));

        // A single piece on an empty board cannot complete a row.
        let event = engine.take_last_event().unwrap();
        prop_assert_eq!(event.lines_cleared, 0);
        prop_assert!(!event.game_over);
        for (x, y) in piece.cells() {
            prop_assert_eq!(engine.board().get(x, y), Some(Some(piece.color)));
        }
        prop_assert_eq!(engine.board().cells().iter().filter(|c| c.is_some()).count(), 4);
    }
}
