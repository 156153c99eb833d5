//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Terminal
//! auto-repeat is treated like repeated key presses, so holding an arrow key
//! keeps the piece moving.

pub mod map;

pub use falling_blocks_types as types;

pub use map::{action_for_event, handle_key_event, should_quit};
