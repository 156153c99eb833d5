//! Terminal "game renderer" crate.
//!
//! A small, game-oriented rendering layer for terminal gameplay. It renders
//! engine snapshots into a framebuffer that is then flushed to the terminal.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Read only snapshots, never the live engine
//! - Allow precise control over aspect ratio (e.g. 2 chars wide per cell)

pub mod fb;
pub mod game_view;
pub mod render_throttle;
pub mod renderer;

pub use falling_blocks_core as core;
pub use falling_blocks_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use render_throttle::{snapshot_fingerprint, RenderThrottle};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
