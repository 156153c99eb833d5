//! Engine module - the falling-block game state machine
//!
//! Ties together the board, the piece factory and scoring. The engine never
//! reads a clock or draws anything: the caller pushes intents
//! ([`GameAction`]) and timestamps ([`Engine::tick`]) and pulls state back out
//! through accessors or [`GameSnapshot`].
//!
//! Lifecycle: `Idle` → `Running` on [`Engine::start`]; `Running` → `GameOver`
//! when a freshly promoted piece does not fit. Starting again from any state
//! resets the board.

use log::{debug, info, trace};

use crate::board::Board;
use crate::config::{ConfigError, EngineConfig};
use crate::piece::{Piece, PieceFactory};
use crate::snapshot::GameSnapshot;
use crate::types::{EngineState, GameAction};

/// What happened when the last piece locked (consumed by observers).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub lines_cleared: u32,
    pub score_gained: u32,
    /// The next piece could not spawn.
    pub game_over: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Engine {
    config: EngineConfig,
    board: Board,
    factory: PieceFactory,
    active: Option<Piece>,
    next: Option<Piece>,
    state: EngineState,
    score: u32,
    lines: u32,
    drop_interval_ms: u32,
    /// Timestamp of the last gravity step; `None` until the first tick after start.
    last_drop_ms: Option<u64>,
    /// Monotonic game id (increments on every start).
    game_id: u32,
    last_event: Option<LockEvent>,
    redraw: bool,
}

impl Engine {
    /// Create an idle engine on the default 10x20 board
    pub fn new(seed: u32) -> Self {
        Self::build(EngineConfig::with_seed(seed))
    }

    /// Create an idle engine from a custom configuration
    pub fn with_config(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: EngineConfig) -> Self {
        Self {
            config,
            board: Board::new(config.width, config.height),
            factory: PieceFactory::new(config.seed, config.width),
            active: None,
            next: None,
            state: EngineState::Idle,
            score: 0,
            lines: 0,
            drop_interval_ms: config.initial_drop_interval_ms,
            last_drop_ms: None,
            game_id: 0,
            last_event: None,
            redraw: true,
        }
    }

    /// Reset everything and start a new game.
    ///
    /// Accepted in every state; from `GameOver` this is the restart.
    pub fn start(&mut self) {
        self.board.clear();
        self.score = 0;
        self.lines = 0;
        self.drop_interval_ms = self.config.initial_drop_interval_ms;
        self.last_drop_ms = None;
        self.last_event = None;
        self.active = None;
        self.game_id = self.game_id.wrapping_add(1);

        self.next = Some(self.factory.create_piece());
        self.state = EngineState::Running;
        self.spawn_piece();
        self.redraw = true;

        info!(
            "game {} started on {}x{} board",
            self.game_id,
            self.board.width(),
            self.board.height()
        );
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == EngineState::Running
    }

    pub fn game_over(&self) -> bool {
        self.state == EngineState::GameOver
    }

    pub fn game_id(&self) -> u32 {
        self.game_id
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active_piece(&self) -> Option<Piece> {
        self.active
    }

    pub fn next_piece(&self) -> Option<Piece> {
        self.next
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.board.width();
        out.height = self.board.height();
        out.board.clear();
        out.board.extend_from_slice(self.board.cells());
        out.active = self.active;
        out.next = self.next;
        out.score = self.score;
        out.lines = self.lines;
        out.drop_interval_ms = self.drop_interval_ms;
        out.state = self.state;
        out.game_id = self.game_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Take and clear the redraw request.
    ///
    /// Set by start, by every running tick, and by successful moves and rotations.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw)
    }

    /// Apply a front-end intent. Returns true if it changed anything.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Start => {
                self.start();
                true
            }
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::Rotate => self.rotate(),
        }
    }

    pub fn move_left(&mut self) -> bool {
        self.move_by(-1, 0)
    }

    pub fn move_right(&mut self) -> bool {
        self.move_by(1, 0)
    }

    /// Move down one row. Never locks; only gravity does.
    pub fn soft_drop(&mut self) -> bool {
        self.move_by(0, 1)
    }

    /// Try to move the active piece; nothing changes if the target is blocked
    pub fn move_by(&mut self, dx: i32, dy: i32) -> bool {
        if !self.is_running() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let (x, y) = (active.x + dx, active.y + dy);
        if !self.board.is_valid_placement(&active.shape, x, y) {
            return false;
        }

        self.active = Some(Piece { x, y, ..active });
        self.redraw = true;
        true
    }

    /// Rotate the active piece 90° clockwise in place.
    ///
    /// There are no wall kicks: if the rotated shape does not fit at the
    /// current origin the rotation is rejected and nothing changes.
    pub fn rotate(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let rotated = active.shape.rotate_cw();
        if !self.board.is_valid_placement(&rotated, active.x, active.y) {
            return false;
        }

        self.active = Some(Piece {
            shape: rotated,
            ..active
        });
        self.redraw = true;
        true
    }

    /// Advance gravity to `now_ms` (any monotonic millisecond clock).
    ///
    /// The first tick after start only anchors the clock. After that, once more
    /// than the drop interval has passed since the last step, the piece moves
    /// down one row or, if it cannot, locks. Returns true if a step happened.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if !self.is_running() {
            return false;
        }

        // The view reflects the current state once per tick, step or not.
        self.redraw = true;

        let Some(last_drop_ms) = self.last_drop_ms else {
            self.last_drop_ms = Some(now_ms);
            return false;
        };

        if now_ms.saturating_sub(last_drop_ms) <= u64::from(self.drop_interval_ms) {
            return false;
        }

        if !self.move_by(0, 1) {
            self.lock_piece();
        }
        self.last_drop_ms = Some(now_ms);
        true
    }

    /// Merge the active piece into the board, clear lines and spawn the next one
    pub(crate) fn lock_piece(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        self.board
            .merge(&active.shape, active.x, active.y, active.color);
        debug!(
            "locked {} at ({}, {})",
            active.kind.as_str(),
            active.x,
            active.y
        );

        let lines_cleared = self.board.clear_full_rows() as u32;
        let score_gained = self.apply_line_clears(lines_cleared);

        let spawned = self.spawn_piece();
        self.last_event = Some(LockEvent {
            lines_cleared,
            score_gained,
            game_over: !spawned,
        });
    }

    /// Update score, line count and speed for `cleared` lines. Returns the points awarded.
    fn apply_line_clears(&mut self, cleared: u32) -> u32 {
        if cleared == 0 {
            return 0;
        }

        let gained = cleared.saturating_mul(self.config.line_clear_points);
        self.score = self.score.saturating_add(gained);
        self.lines = self.lines.saturating_add(cleared);

        let speedup = cleared.saturating_mul(self.config.drop_acceleration_ms);
        self.drop_interval_ms = self
            .drop_interval_ms
            .saturating_sub(speedup)
            .max(self.config.min_drop_interval_ms);

        debug!(
            "cleared {} line(s), +{} (score {}), drop interval now {}ms",
            cleared, gained, self.score, self.drop_interval_ms
        );
        gained
    }

    /// Promote the queued piece to active and queue a new one.
    ///
    /// If the promoted piece does not fit, the game is over: there is no active
    /// piece and the blocked piece stays queued for display.
    fn spawn_piece(&mut self) -> bool {
        let piece = match self.next.take() {
            Some(piece) => piece,
            None => self.factory.create_piece(),
        };

        if !piece.is_valid(&self.board) {
            self.next = Some(piece);
            self.active = None;
            self.state = EngineState::GameOver;
            info!(
                "game {} over: score {}, lines {}",
                self.game_id, self.score, self.lines
            );
            return false;
        }

        trace!("spawned {} at ({}, {})", piece.kind.as_str(), piece.x, piece.y);
        self.active = Some(piece);
        self.next = Some(self.factory.create_piece());
        true
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(1)
    }
}
