//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no external dependencies, so they can be used
//! by the engine, the terminal view, and the input mapper alike.
//!
//! # Board Dimensions
//!
//! Default playfield dimensions:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn position**: horizontally centered for the shape, row 0
//!
//! # Timing and Scoring Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `INITIAL_DROP_INTERVAL_MS` | 1000 | Gravity interval on a fresh game |
//! | `DROP_ACCELERATION_MS` | 50 | Interval reduction per cleared line |
//! | `MIN_DROP_INTERVAL_MS` | 50 | Interval floor |
//! | `LINE_CLEAR_POINTS` | 100 | Points per cleared line (linear, no bonuses) |
//! | `FRAME_MS` | 16 | Front-end frame cadence (~60 FPS) |
//!
//! # Examples
//!
//! ```
//! use falling_blocks_types::{Color, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(ShapeKind::ALL.len(), 7);
//! assert_eq!(Color::from_hue(120), Color::new(82, 224, 82));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Gravity interval when a game starts (1000ms = 1 row per second)
pub const INITIAL_DROP_INTERVAL_MS: u32 = 1000;

/// Reduction of the gravity interval for every cleared line
pub const DROP_ACCELERATION_MS: u32 = 50;

/// Gravity interval never drops below this
pub const MIN_DROP_INTERVAL_MS: u32 = 50;

/// Points per cleared line
pub const LINE_CLEAR_POINTS: u32 = 100;

/// Frame interval used by the terminal front end (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;


/// The seven tetromino shape kinds
///
/// Unlike guideline Tetris the kind does not determine the color; every
/// spawned piece gets its own random color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl ShapeKind {
    /// All kinds, in the order the piece factory indexes them.
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::T,
        ShapeKind::L,
        ShapeKind::J,
        ShapeKind::S,
        ShapeKind::Z,
    ];

    /// Uppercase letter used in log lines
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::I => "I",
            ShapeKind::O => "O",
            ShapeKind::T => "T",
            ShapeKind::L => "L",
            ShapeKind::J => "J",
            ShapeKind::S => "S",
            ShapeKind::Z => "Z",
        }
    }
}

/// 24-bit cell color.
///
/// The engine treats colors as opaque; only the renderer looks inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Color for `hsl(hue, 70%, 60%)`.
    ///
    /// `hue` is in degrees and wraps at 360.
    pub fn from_hue(hue: u16) -> Self {
        const SATURATION: f32 = 0.7;
        const LIGHTNESS: f32 = 0.6;

        let h = f32::from(hue % 360) / 60.0;
        let c = (1.0 - (2.0 * LIGHTNESS - 1.0).abs()) * SATURATION;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let m = LIGHTNESS - c / 2.0;

        let (r, g, b) = match h as u8 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        let to_u8 = |v: f32| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        Self::new(to_u8(r), to_u8(g), to_u8(b))
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(Color)`: Cell filled by a locked piece of that color
pub type Cell = Option<Color>;

/// Lifecycle of the engine.
///
/// `Idle` → `Running` on start, `Running` → `GameOver` when a spawn is blocked.
/// Starting again from `GameOver` resets the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EngineState {
    #[default]
    Idle,
    Running,
    GameOver,
}

/// Intents the front end can push into the engine
///
/// Gravity is not an action; it is driven by `Engine::tick`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down (never locks)
    SoftDrop,
    /// Rotate piece 90° clockwise, rejected on collision
    Rotate,
    /// Reset the board and start a new game
    Start,
}
