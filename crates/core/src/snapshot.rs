//! Owned, renderer-facing copy of the engine state.
//!
//! The view layer only ever sees snapshots, never the live engine. Use
//! [`Engine::snapshot_into`](crate::Engine::snapshot_into) to refill one
//! snapshot every frame without reallocating the board.

use crate::piece::Piece;
use crate::types::{Cell, EngineState, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub width: u8,
    pub height: u8,
    /// Row-major locked cells (`y * width + x`); the active piece is not included.
    pub board: Vec<Cell>,
    pub active: Option<Piece>,
    pub next: Option<Piece>,
    pub score: u32,
    pub lines: u32,
    pub drop_interval_ms: u32,
    pub state: EngineState,
    pub game_id: u32,
}

impl GameSnapshot {
    /// Locked cell at (x, y); `None` when empty or out of bounds.
    pub fn cell(&self, x: i32, y: i32) -> Cell {
        if x < 0 || x >= self.width as i32 || y < 0 || y >= self.height as i32 {
            return None;
        }
        self.board
            .get(y as usize * self.width as usize + x as usize)
            .copied()
            .flatten()
    }

    pub fn clear(&mut self) {
        self.board.clear();
        self.board
            .resize(self.width as usize * self.height as usize, None);
        self.active = None;
        self.next = None;
        self.score = 0;
        self.lines = 0;
        self.drop_interval_ms = 0;
        self.state = EngineState::Idle;
        self.game_id = 0;
    }

    pub fn playable(&self) -> bool {
        self.state == EngineState::Running
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            board: Vec::new(),
            active: None,
            next: None,
            score: 0,
            lines: 0,
            drop_interval_ms: 0,
            state: EngineState::Idle,
            game_id: 0,
        };
        s.clear();
        s
    }
}
