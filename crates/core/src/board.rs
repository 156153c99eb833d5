//! Board module - manages the game grid
//!
//! The board is a `width x height` grid where each cell is empty or holds the
//! color of a locked piece. Uses flat row-major storage for cache locality.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom.
//!
//! Dimensions are fixed when the board is created. A cell only becomes filled
//! through [`Board::merge`] and only becomes empty again through the row shift
//! in [`Board::clear_full_rows`].

use crate::shape::Shape;
use crate::types::{Cell, Color, BOARD_HEIGHT, BOARD_WIDTH};

/// The game board using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(width: u8, height: u8) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.width as i32 || y < 0 || y >= self.height as i32 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is valid (within bounds and empty)
    pub fn is_valid(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check whether `shape` fits with its origin at (x, y).
    ///
    /// Every occupied sub-cell must land inside the board on an empty cell.
    /// Empty sub-cells of the shape's bounding box are not checked, so a
    /// rotated shape's blank margin may hang over a wall.
    pub fn is_valid_placement(&self, shape: &Shape, x: i32, y: i32) -> bool {
        shape
            .cells()
            .iter()
            .all(|&(dx, dy)| self.is_valid(x + dx, y + dy))
    }

    /// Write `color` into every cell covered by `shape` at (x, y).
    ///
    /// No collision check is made; the caller locks only at a placement that
    /// was already validated. Sub-cells outside the board are dropped.
    pub fn merge(&mut self, shape: &Shape, x: i32, y: i32, color: Color) {
        for &(dx, dy) in shape.cells().iter() {
            self.set(x + dx, y + dy, Some(color));
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .map(|row| row.iter().all(|cell| cell.is_some()))
            .unwrap_or(false)
    }

    /// Borrow one row of cells
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.height as usize {
            return None;
        }
        let width = self.width as usize;
        let start = y * width;
        Some(&self.cells[start..start + width])
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width as usize)
    }

    /// Remove row `y`, shift all rows above down by one and empty the top row.
    /// Returns the number of lines cleared (1 or 0)
    pub fn clear_row(&mut self, y: usize) -> usize {
        if y >= self.height as usize {
            return 0;
        }

        let width = self.width as usize;

        // copy_within handles overlapping ranges safely
        for row in (1..=y).rev() {
            let src_start = (row - 1) * width;
            let dst_start = row * width;
            self.cells
                .copy_within(src_start..src_start + width, dst_start);
        }

        for cell in &mut self.cells[..width] {
            *cell = None;
        }

        1
    }

    /// Clear all full rows and return how many were removed.
    ///
    /// Scans bottom to top. After a row is removed the row that slid into its
    /// place is examined again before moving up.
    pub fn clear_full_rows(&mut self) -> usize {
        let mut cleared = 0;
        let mut y = self.height as usize;

        while y > 0 {
            if self.is_row_full(y - 1) {
                cleared += self.clear_row(y - 1);
            } else {
                y -= 1;
            }
        }

        cleared
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// True when no cell is filled
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_none())
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Create from a 2D vector for testing (converts to flat array)
    #[cfg(test)]
    pub fn from_cells(cells_2d: Vec<Vec<Cell>>) -> Self {
        let height = cells_2d.len();
        let width = cells_2d.first().map(|row| row.len()).unwrap_or(0);
        assert!(cells_2d.iter().all(|row| row.len() == width));

        Self {
            width: width as u8,
            height: height as u8,
            cells: cells_2d.into_iter().flatten().collect(),
        }
    }

    /// Convert to 2D vector for testing/display
    #[cfg(test)]
    pub fn to_cells(&self) -> Vec<Vec<Cell>> {
        self.rows().map(|row| row.to_vec()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ShapeKind;

    const RED: Color = Color::new(255, 0, 0);
    const BLUE: Color = Color::new(0, 0, 255);

    #[test]
    fn test_board_index_calculation() {
        let board = Board::default();
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(9, 0), Some(9));
        assert_eq!(board.index(0, 1), Some(10));
        assert_eq!(board.index(9, 19), Some(199));
        assert_eq!(board.index(-1, 0), None);
        assert_eq!(board.index(10, 0), None);
        assert_eq!(board.index(0, 20), None);
    }

    #[test]
    fn test_board_flat_array() {
        let mut board = Board::default();

        board.set(0, 0, Some(RED));
        board.set(5, 10, Some(BLUE));

        assert_eq!(board.get(0, 0), Some(Some(RED)));
        assert_eq!(board.get(5, 10), Some(Some(BLUE)));

        assert_eq!(board.cells[0], Some(RED));
        assert_eq!(board.cells[10 * 10 + 5], Some(BLUE));
    }

    #[test]
    fn test_board_from_cells_roundtrip() {
        let mut cells_2d = vec![vec![None; 10]; 20];
        cells_2d[5][3] = Some(RED);
        cells_2d[10][7] = Some(BLUE);

        let board = Board::from_cells(cells_2d.clone());
        assert_eq!(board.width(), 10);
        assert_eq!(board.height(), 20);
        assert_eq!(cells_2d, board.to_cells());
    }

    #[test]
    fn test_non_default_dimensions() {
        let mut board = Board::new(6, 8);
        assert_eq!(board.cells().len(), 48);
        assert!(board.set(5, 7, Some(RED)));
        assert!(!board.set(6, 0, Some(RED)));
        assert!(!board.set(0, 8, Some(RED)));
    }

    #[test]
    fn test_clear_rows_rechecks_shifted_row() {
        // Two adjacent full rows at the bottom: the second one slides into the
        // first one's slot and must be cleared too.
        let mut board = Board::new(4, 5);
        for y in 3..5 {
            for x in 0..4 {
                board.set(x, y, Some(RED));
            }
        }
        board.set(1, 2, Some(BLUE));

        assert_eq!(board.clear_full_rows(), 2);
        assert_eq!(board.get(1, 4), Some(Some(BLUE)));
        let filled = board.cells().iter().filter(|c| c.is_some()).count();
        assert_eq!(filled, 1);
    }

    #[test]
    fn test_merge_skips_out_of_bounds_cells() {
        let mut board = Board::new(4, 4);
        let shape = Shape::of(ShapeKind::I);

        // I is 4 wide; origin x=2 pushes two sub-cells past the right wall.
        board.merge(&shape, 2, 0, RED);

        assert_eq!(board.get(2, 0), Some(Some(RED)));
        assert_eq!(board.get(3, 0), Some(Some(RED)));
        assert_eq!(board.cells().iter().filter(|c| c.is_some()).count(), 2);
    }
}
