//! Board module - manages the game grid
//!
//! The board is a 10x15 grid where each cell is either empty or tagged with the
//! shape kind that settled there. Uses a flat array for cache locality and
//! zero-allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..14 (top to bottom)

use arrayvec::ArrayVec;

use crate::pieces::Shape;
use crate::types::{Cell, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Row indices removed by one clear pass, in removal order
pub type ClearedRows = ArrayVec<usize, { BOARD_HEIGHT as usize }>;

/// The game board - 10 columns x 15 rows using flat array storage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .map(|row| row.iter().all(|cell| cell.is_some()))
            .unwrap_or(false)
    }

    /// Cells of row `y`, left to right
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= BOARD_HEIGHT as usize {
            return None;
        }
        let start = y * BOARD_WIDTH as usize;
        Some(&self.cells[start..start + BOARD_WIDTH as usize])
    }

    /// Whether `shape` anchored at (x, y) is an illegal placement.
    ///
    /// A cell collides when its column is outside `[0, WIDTH)`, its row is at or
    /// below the floor, or its row is on the board and already tagged. Cells above
    /// row 0 only get the column and floor checks, so a freshly spawned piece can
    /// move and rotate while partly off the top.
    pub fn collides(&self, shape: &Shape, x: i8, y: i8) -> bool {
        shape.filled().any(|(r, c)| {
            let bx = x + c as i8;
            let by = y + r as i8;
            if bx < 0 || bx >= BOARD_WIDTH as i8 || by >= BOARD_HEIGHT as i8 {
                return true;
            }
            by >= 0 && self.is_occupied(bx, by)
        })
    }

    /// Write `kind` into every cell covered by `shape` anchored at (x, y).
    ///
    /// Cells outside the board (rows above the top) are dropped.
    /// Returns the number of dropped cells.
    pub fn merge(&mut self, shape: &Shape, x: i8, y: i8, kind: ShapeKind) -> usize {
        let mut dropped = 0;
        for (r, c) in shape.filled() {
            if !self.set(x + c as i8, y + r as i8, Some(kind)) {
                dropped += 1;
            }
        }
        dropped
    }

    /// Remove row `y` and shift all rows above it down by one.
    /// The top row becomes empty.
    fn remove_row(&mut self, y: usize) {
        let width = BOARD_WIDTH as usize;
        // copy_within handles the overlapping ranges
        self.cells.copy_within(0..y * width, width);
        self.cells[..width].fill(None);
    }

    /// Clear every full row, scanning bottom to top.
    ///
    /// After a removal the same index is examined again, since the row that
    /// shifted into it may be full as well. Board height is unchanged.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        let mut y = BOARD_HEIGHT as usize;

        while y > 0 {
            let row = y - 1;
            if self.is_row_full(row) {
                self.remove_row(row);
                // At most one removal per row.
                cleared.push(row);
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

    /// Copy the board into a row-major 2D grid
    pub fn to_grid(&self) -> [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize] {
        let mut grid = [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        for (y, row) in grid.iter_mut().enumerate() {
            let start = y * BOARD_WIDTH as usize;
            row.copy_from_slice(&self.cells[start..start + BOARD_WIDTH as usize]);
        }
        grid
    }

    /// Count of tagged cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Fill row `y` with `kind`, leaving the listed columns empty
    ///
    /// Used to stage puzzles and tests.
    pub fn fill_row_except(&mut self, y: i8, holes: &[i8], kind: ShapeKind) {
        for x in 0..BOARD_WIDTH as i8 {
            let cell = if holes.contains(&x) { None } else { Some(kind) };
            self.set(x, y, cell);
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::base_shape;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 14), Some(149));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 15), None);
    }

    #[test]
    fn test_collides_walls_and_floor() {
        let board = Board::new();
        let o = base_shape(ShapeKind::O);

        assert!(!board.collides(&o, 0, 0));
        assert!(board.collides(&o, -1, 0));
        assert!(board.collides(&o, 9, 0));
        assert!(!board.collides(&o, 8, 13));
        assert!(board.collides(&o, 8, 14));
    }

    #[test]
    fn test_collides_ignores_occupancy_above_top() {
        let mut board = Board::new();
        board.fill_row_except(0, &[], ShapeKind::Z);
        let i = base_shape(ShapeKind::I).rotate_cw();

        // Rows -4..-1 are off-board: only column bounds apply.
        assert!(!board.collides(&i, 3, -4));
        // Reaching row 0 hits the settled row.
        assert!(board.collides(&i, 3, -3));
        // Column bounds still apply above the board.
        assert!(board.collides(&i, 10, -4));
    }

    #[test]
    fn test_merge_drops_rows_above_top() {
        let mut board = Board::new();
        let i = base_shape(ShapeKind::I).rotate_cw();

        let dropped = board.merge(&i, 2, -2, ShapeKind::I);
        assert_eq!(dropped, 2);
        assert_eq!(board.get(2, 0), Some(Some(ShapeKind::I)));
        assert_eq!(board.get(2, 1), Some(Some(ShapeKind::I)));
        assert_eq!(board.filled_count(), 2);
    }

    #[test]
    fn test_clear_two_adjacent_rows() {
        let mut board = Board::new();
        board.fill_row_except(14, &[], ShapeKind::I);
        board.fill_row_except(13, &[], ShapeKind::O);
        board.set(4, 12, Some(ShapeKind::T));

        let cleared = board.clear_full_rows();
        assert_eq!(cleared.as_slice(), &[14, 14]);
        assert_eq!(board.get(4, 14), Some(Some(ShapeKind::T)));
        assert_eq!(board.filled_count(), 1);
    }

    #[test]
    fn test_clear_non_adjacent_rows() {
        let mut board = Board::new();
        board.fill_row_except(14, &[], ShapeKind::I);
        board.fill_row_except(13, &[0], ShapeKind::S);
        board.fill_row_except(12, &[], ShapeKind::L);

        let cleared = board.clear_full_rows();
        assert_eq!(cleared.len(), 2);
        // The partial row ends up on the floor.
        assert_eq!(board.get(0, 14), Some(None));
        assert_eq!(board.get(1, 14), Some(Some(ShapeKind::S)));
        assert!(board.row(13).unwrap().iter().all(|c| c.is_none()));
    }

    #[test]
    fn test_to_grid_matches_cells() {
        let mut board = Board::new();
        board.set(3, 7, Some(ShapeKind::J));
        let grid = board.to_grid();
        assert_eq!(grid.len(), BOARD_HEIGHT as usize);
        assert_eq!(grid[7][3], Some(ShapeKind::J));
        assert_eq!(grid[7][4], None);
    }
}
