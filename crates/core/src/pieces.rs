//! Pieces module - tetromino shape matrices and rotation
//!
//! A shape is a small row-major boolean matrix describing which cells of a
//! piece's bounding box are occupied. Templates are read-only; rotation always
//! produces a new matrix.
//!
//! Rotation is a plain clockwise quarter turn with no wall kicks: a rotation
//! that collides is rejected outright by the session.

use serde::{Serialize, Serializer};

use crate::board::Board;
use crate::types::{ShapeKind, BOARD_WIDTH};

/// Largest bounding box side of any tetromino
pub const MAX_SHAPE_DIM: usize = 4;

/// Occupancy matrix of a piece, at most 4x4
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    cells: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

const I_ROWS: &[&[u8]] = &[&[1, 1, 1, 1]];
const O_ROWS: &[&[u8]] = &[&[1, 1], &[1, 1]];
const T_ROWS: &[&[u8]] = &[&[0, 1, 0], &[1, 1, 1]];
const S_ROWS: &[&[u8]] = &[&[0, 1, 1], &[1, 1, 0]];
const Z_ROWS: &[&[u8]] = &[&[1, 1, 0], &[0, 1, 1]];
const J_ROWS: &[&[u8]] = &[&[1, 0, 0], &[1, 1, 1]];
const L_ROWS: &[&[u8]] = &[&[0, 0, 1], &[1, 1, 1]];

impl Shape {
    /// Build a shape from rows of 0/1 values.
    ///
    /// Rows and columns past the 4x4 bound are ignored; the column count is
    /// taken from the widest row.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        let row_count = rows.len().min(MAX_SHAPE_DIM);
        let mut col_count = 0usize;

        for (r, row) in rows.iter().take(row_count).enumerate() {
            let width = row.len().min(MAX_SHAPE_DIM);
            col_count = col_count.max(width);
            for (c, &v) in row.iter().take(width).enumerate() {
                cells[r][c] = v != 0;
            }
        }

        Self {
            rows: row_count as u8,
            cols: col_count as u8,
            cells,
        }
    }

    /// Number of rows in the bounding box
    pub fn rows(&self) -> u8 {
        self.rows
    }

    /// Number of columns in the bounding box
    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Whether the cell at (row, col) is occupied; false outside the box
    pub fn is_filled(&self, row: u8, col: u8) -> bool {
        row < self.rows && col < self.cols && self.cells[row as usize][col as usize]
    }

    /// Iterate occupied cells as (row, col) offsets from the anchor
    pub fn filled(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        (0..self.rows).flat_map(move |r| {
            (0..self.cols).filter_map(move |c| self.is_filled(r, c).then_some((r, c)))
        })
    }

    /// Clockwise quarter turn: `rotated[i][j] = self[R-1-j][i]`
    ///
    /// An R x C matrix becomes C x R.
    pub fn rotate_cw(&self) -> Self {
        let (r_count, c_count) = (self.rows as usize, self.cols as usize);
        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (i, row) in cells.iter_mut().enumerate().take(c_count) {
            for (j, cell) in row.iter_mut().enumerate().take(r_count) {
                *cell = self.cells[r_count - 1 - j][i];
            }
        }

        Self {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }

    /// Rows of 0/1 values, the same form `from_rows` accepts
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.rows)
            .map(|r| (0..self.cols).map(|c| self.is_filled(r, c) as u8).collect())
            .collect()
    }
}

impl Serialize for Shape {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_rows().serialize(serializer)
    }
}

/// Base (spawn) orientation of a shape kind
pub fn base_shape(kind: ShapeKind) -> Shape {
    let rows = match kind {
        ShapeKind::I => I_ROWS,
        ShapeKind::O => O_ROWS,
        ShapeKind::T => T_ROWS,
        ShapeKind::S => S_ROWS,
        ShapeKind::Z => Z_ROWS,
        ShapeKind::J => J_ROWS,
        ShapeKind::L => L_ROWS,
    };
    Shape::from_rows(rows)
}

/// Spawn column for a shape: centered, rounding left
pub fn spawn_x(shape: &Shape) -> i8 {
    (BOARD_WIDTH / 2) as i8 - (shape.cols() / 2) as i8
}

/// The falling, player-controlled piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: ShapeKind,
    pub shape: Shape,
    /// Column of the bounding box's left edge
    pub x: i8,
    /// Row of the bounding box's top edge (may be negative)
    pub y: i8,
}

impl Piece {
    /// Create a piece in its base orientation at the spawn position
    pub fn spawn(kind: ShapeKind) -> Self {
        let shape = base_shape(kind);
        Self {
            kind,
            shape,
            x: spawn_x(&shape),
            y: 0,
        }
    }

    /// Display tag written into settled cells
    pub fn color(&self) -> &'static str {
        self.kind.color()
    }

    /// Whether this piece, offset by (dx, dy) and optionally using `shape`
    /// instead of its own matrix, would be illegal on `board`.
    pub fn collides(&self, board: &Board, dx: i8, dy: i8, shape: Option<&Shape>) -> bool {
        board.collides(shape.unwrap_or(&self.shape), self.x + dx, self.y + dy)
    }

    /// Copy of this piece moved by (dx, dy)
    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }
}
