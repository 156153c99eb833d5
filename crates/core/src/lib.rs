//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the falling-block engine: the board, tetromino shapes,
//! the piece factory, and the game state machine. It has **no dependencies**
//! on UI, terminal, or clocks, which makes it:
//!
//! - **Deterministic**: the same seed produces the same sequence of pieces
//! - **Testable**: gravity is driven by synthetic timestamps passed to `tick`
//! - **Portable**: any front end can render snapshots and push intents
//!
//! # Module Structure
//!
//! - [`board`]: fixed-size grid with placement checks, merge and line clearing
//! - [`shape`]: immutable occupancy matrices and clockwise rotation
//! - [`piece`]: pieces and the random piece factory
//! - [`engine`]: lifecycle, movement, gravity, locking and scoring
//! - [`snapshot`]: owned copies of state for renderers
//! - [`config`]: board size and speed curve
//!
//! # Game Rules
//!
//! - **Uniform randomizer**: each piece is one of the 7 tetrominoes with equal odds
//! - **Simple rotation**: 90° clockwise matrix rotation, rejected on collision (no wall kicks)
//! - **Gravity**: one row per drop interval; a piece that cannot fall locks immediately
//! - **Scoring**: 100 points per cleared line, no multi-line bonus
//! - **Speed-up**: the drop interval shrinks by 50ms per cleared line, floored at 50ms
//!
//! # Example
//!
//! ```
//! use falling_blocks_core::Engine;
//! use falling_blocks_types::{EngineState, GameAction};
//!
//! let mut engine = Engine::new(12345);
//! engine.start();
//!
//! engine.apply_action(GameAction::MoveRight);
//! engine.apply_action(GameAction::Rotate);
//!
//! // Feed timestamps from any monotonic clock.
//! engine.tick(0);
//! engine.tick(1_001);
//!
//! assert_eq!(engine.state(), EngineState::Running);
//! assert_eq!(engine.active_piece().unwrap().y, 1);
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod piece;
pub mod rng;
pub mod shape;
pub mod snapshot;

pub use falling_blocks_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::{ConfigError, EngineConfig};
pub use engine::{Engine, LockEvent};
pub use piece::{Piece, PieceFactory};
pub use rng::SimpleRng;
pub use shape::Shape;
pub use snapshot::GameSnapshot;
