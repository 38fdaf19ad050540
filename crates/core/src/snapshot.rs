use serde::Serialize;

use crate::pieces::{Piece, Shape};
use crate::types::{Cell, Phase, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ActiveSnapshot {
    pub kind: ShapeKind,
    pub color: &'static str,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            color: value.color(),
            shape: value.shape,
            x: value.x,
            y: value.y,
        }
    }
}

/// Read-only copy of everything a renderer or host needs.
///
/// Taken between mutations, so it never shows a half-applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub board: [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub lines: u32,
    pub score: u32,
    pub goal: u32,
    pub game_over: bool,
    pub won: bool,
    pub paused: bool,
    pub phase: Phase,
}

impl GameSnapshot {
    /// Cell as displayed: the active piece drawn over the settled board.
    pub fn display_cell(&self, x: usize, y: usize) -> Cell {
        if let Some(active) = self.active {
            let local_y = y as i16 - active.y as i16;
            let local_x = x as i16 - active.x as i16;
            if (0..active.shape.rows() as i16).contains(&local_y)
                && (0..active.shape.cols() as i16).contains(&local_x)
                && active.shape.is_filled(local_y as u8, local_x as u8)
            {
                return Some(active.kind);
            }
        }
        self.board
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .flatten()
    }

    pub fn playable(&self) -> bool {
        !self.game_over && !self.won && !self.paused && self.active.is_some()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            lines: 0,
            score: 0,
            goal: crate::types::WIN_LINES,
            game_over: false,
            won: false,
            paused: false,
            phase: Phase::Spawning,
        }
    }
}
