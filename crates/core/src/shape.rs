//! Shape module - tetromino occupancy matrices
//!
//! A [`Shape`] is an immutable boolean matrix of at most 4x4 sub-cells. Each row
//! is stored as a bitmask (bit `x` set = column `x` occupied), which keeps the
//! type `Copy` and makes equality a plain comparison of occupancy.
//!
//! Rotation is the simple matrix rotation (transpose, then reverse rows). There
//! is no rotation state and no kick table; a rotated shape is just a new value.

use arrayvec::ArrayVec;

use crate::types::ShapeKind;

/// Largest side of a shape's bounding box
pub const MAX_SIDE: usize = 4;

/// Offset of a single sub-cell relative to the piece origin
pub type CellOffset = (i32, i32);

/// Immutable occupancy matrix
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    width: u8,
    height: u8,
    rows: [u8; MAX_SIDE],
}

impl Shape {
    /// Build a shape from per-row bitmasks.
    ///
    /// Bits beyond `width` and rows beyond `height` are ignored.
    const fn from_bits(width: u8, height: u8, rows: [u8; MAX_SIDE]) -> Self {
        let mask = (1u8 << width) - 1;
        let mut clean = [0u8; MAX_SIDE];
        let mut y = 0;
        while y < height as usize {
            clean[y] = rows[y] & mask;
            y += 1;
        }
        Self {
            width,
            height,
            rows: clean,
        }
    }

    /// Build a shape from a row-major 0/1 matrix.
    ///
    /// Returns `None` if the matrix is empty, ragged, or larger than 4x4.
    ///
    /// ```
    /// use falling_blocks_core::Shape;
    /// use falling_blocks_types::ShapeKind;
    ///
    /// let t = Shape::from_matrix(&[&[1, 1, 1], &[0, 1, 0]]).unwrap();
    /// assert_eq!(t, Shape::of(ShapeKind::T));
    /// ```
    pub fn from_matrix(matrix: &[&[u8]]) -> Option<Self> {
        let height = matrix.len();
        let width = matrix.first()?.len();
        if height > MAX_SIDE || width == 0 || width > MAX_SIDE {
            return None;
        }

        let mut rows = [0u8; MAX_SIDE];
        for (y, row) in matrix.iter().enumerate() {
            if row.len() != width {
                return None;
            }
            for (x, &v) in row.iter().enumerate() {
                if v != 0 {
                    rows[y] |= 1 << x;
                }
            }
        }

        Some(Self::from_bits(width as u8, height as u8, rows))
    }

    /// Canonical spawn orientation of each tetromino
    pub fn of(kind: ShapeKind) -> Self {
        match kind {
            // [1111]
            ShapeKind::I => Self::from_bits(4, 1, [0b1111, 0, 0, 0]),
            // [11 / 11]
            ShapeKind::O => Self::from_bits(2, 2, [0b11, 0b11, 0, 0]),
            // [111 / 010]
            ShapeKind::T => Self::from_bits(3, 2, [0b111, 0b010, 0, 0]),
            // [111 / 100]
            ShapeKind::L => Self::from_bits(3, 2, [0b111, 0b001, 0, 0]),
            // [111 / 001]
            ShapeKind::J => Self::from_bits(3, 2, [0b111, 0b100, 0, 0]),
            // [110 / 011]
            ShapeKind::S => Self::from_bits(3, 2, [0b011, 0b110, 0, 0]),
            // [011 / 110]
            ShapeKind::Z => Self::from_bits(3, 2, [0b110, 0b011, 0, 0]),
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Whether sub-cell (x, y) of the bounding box is occupied
    pub fn is_occupied(&self, x: usize, y: usize) -> bool {
        x < self.width as usize && y < self.height as usize && self.rows[y] & (1 << x) != 0
    }

    /// Occupied sub-cell offsets in row-major order.
    ///
    /// Stack-only; never allocates.
    pub fn cells(&self) -> ArrayVec<CellOffset, { MAX_SIDE * MAX_SIDE }> {
        let mut out = ArrayVec::new();
        for y in 0..self.height as usize {
            for x in 0..self.width as usize {
                if self.is_occupied(x, y) {
                    out.push((x as i32, y as i32));
                }
            }
        }
        out
    }

    /// Number of occupied sub-cells
    pub fn cell_count(&self) -> u32 {
        self.rows.iter().map(|row| row.count_ones()).sum()
    }

    /// Rotate 90° clockwise, returning a new shape.
    ///
    /// `rotated[r][c] = self[height - 1 - c][r]`, so the new shape is
    /// `height` wide and `width` tall.
    pub fn rotate_cw(&self) -> Self {
        let old_h = self.height as usize;
        let mut rows = [0u8; MAX_SIDE];
        for (r, row) in rows.iter_mut().enumerate().take(self.width as usize) {
            for c in 0..old_h {
                if self.is_occupied(r, old_h - 1 - c) {
                    *row |= 1 << c;
                }
            }
        }
        Self::from_bits(self.height, self.width, rows)
    }
}

impl std::fmt::Debug for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Compact "111/010" form reads better in assertion failures.
        let mut s = String::with_capacity(MAX_SIDE * (MAX_SIDE + 1));
        for y in 0..self.height as usize {
            if y > 0 {
                s.push('/');
            }
            for x in 0..self.width as usize {
                s.push(if self.is_occupied(x, y) { '1' } else { '0' });
            }
        }
        write!(f, "Shape({s})")
    }
}
