//! Pieces and the piece factory
//!
//! A [`Piece`] is a shape, a color and a board-relative origin. The factory
//! picks shapes uniformly at random (no bag), gives every piece its own random
//! hue and spawns it horizontally centered on row 0.

use crate::board::Board;
use crate::rng::SimpleRng;
use crate::shape::{CellOffset, Shape};
use crate::types::{Color, ShapeKind};

/// A falling (or queued) piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: ShapeKind,
    pub shape: Shape,
    pub color: Color,
    pub x: i32,
    pub y: i32,
}

impl Piece {
    /// Create a piece in spawn position for a board `board_width` columns wide
    pub fn new(kind: ShapeKind, color: Color, board_width: u8) -> Self {
        let shape = Shape::of(kind);
        Self {
            kind,
            shape,
            color,
            x: spawn_x(board_width, &shape),
            y: 0,
        }
    }

    /// Absolute board coordinates of every occupied sub-cell
    pub fn cells(&self) -> impl Iterator<Item = CellOffset> + '_ {
        self.shape
            .cells()
            .into_iter()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// Check if the piece fits on the board where it stands
    pub fn is_valid(&self, board: &Board) -> bool {
        board.is_valid_placement(&self.shape, self.x, self.y)
    }
}

/// Leftmost column that centers `shape` on the board (floored)
pub fn spawn_x(board_width: u8, shape: &Shape) -> i32 {
    (i32::from(board_width) - i32::from(shape.width())).div_euclid(2)
}

/// Random piece generator
#[derive(Debug, Clone)]
pub struct PieceFactory {
    rng: SimpleRng,
    board_width: u8,
}

impl PieceFactory {
    pub fn new(seed: u32, board_width: u8) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            board_width,
        }
    }

    /// Create a new piece: uniform shape, random hue, centered at row 0
    pub fn create_piece(&mut self) -> Piece {
        let kind = ShapeKind::ALL[self.rng.next_range(ShapeKind::ALL.len() as u32) as usize];
        let color = Color::from_hue(self.rng.next_range(360) as u16);
        Piece::new(kind, color, self.board_width)
    }

    pub fn board_width(&self) -> u8 {
        self.board_width
    }
}
