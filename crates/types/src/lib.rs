//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the engine.
//! All types are plain data with no behavior beyond parsing and naming, making
//! them usable in any context (core logic, the engine actor, terminal rendering).
//!
//! # Board Dimensions
//!
//! The playfield is shorter than a guideline board so it fits an embedded page:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 15 rows (indexed 0-14)
//! - **Spawn position**: `x = WIDTH / 2 - shape_width / 2`, `y = 0`
//!
//! # Game Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRAVITY_MS` | 700 | Gravity period (one forced drop per period) |
//! | `TICK_MS` | 16 | Fixed timestep used by hosts driving `tick` |
//! | `WIN_LINES` | 5 | Cleared lines needed to win |
//! | `LINE_BONUS` | 100 | Score per cleared line (no combo bonus) |
//! | `WIN_DELAY_MS` | 1500 | Grace period before the completion callback fires |
//!
//! # Examples
//!
//! ```
//! use transform_tetris_types::{GameAction, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let kind = ShapeKind::from_str("t").unwrap();
//! assert_eq!(kind, ShapeKind::T);
//! assert_eq!(kind.color(), "indigo");
//!
//! let action = GameAction::from_str("moveLeft").unwrap();
//! assert_eq!(action, GameAction::MoveLeft);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 15);
//! ```

use serde::Serialize;

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (15 rows)
pub const BOARD_HEIGHT: u8 = 15;

/// Gravity period in milliseconds
pub const GRAVITY_MS: u32 = 700;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Cumulative cleared lines that end the session with a win
pub const WIN_LINES: u32 = 5;

/// Flat score bonus per cleared line
pub const LINE_BONUS: u32 = 100;

/// Delay between winning and firing the completion callback
pub const WIN_DELAY_MS: u32 = 1500;


/// The seven tetromino shape kinds
///
/// The kind doubles as the cell's display tag once a piece settles:
/// - **I**: sky, horizontal bar
/// - **O**: amber, 2x2 square
/// - **T**: indigo, T-shaped
/// - **S**: emerald, S-shaped
/// - **Z**: red, Z-shaped (mirror of S)
/// - **J**: blue, J-shaped
/// - **L**: orange, L-shaped (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl ShapeKind {
    /// All kinds in canonical order
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::T,
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::J,
        ShapeKind::L,
    ];

    /// Parse shape kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use transform_tetris_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_str("i"), Some(ShapeKind::I));
    /// assert_eq!(ShapeKind::from_str("O"), Some(ShapeKind::O));
    /// assert_eq!(ShapeKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(ShapeKind::I),
            "o" => Some(ShapeKind::O),
            "t" => Some(ShapeKind::T),
            "s" => Some(ShapeKind::S),
            "z" => Some(ShapeKind::Z),
            "j" => Some(ShapeKind::J),
            "l" => Some(ShapeKind::L),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::I => "i",
            ShapeKind::O => "o",
            ShapeKind::T => "t",
            ShapeKind::S => "s",
            ShapeKind::Z => "z",
            ShapeKind::J => "j",
            ShapeKind::L => "l",
        }
    }

    /// Display color tag paired with this shape
    ///
    /// Opaque to game logic; renderers map it to whatever palette they use.
    pub fn color(&self) -> &'static str {
        match self {
            ShapeKind::I => "sky",
            ShapeKind::O => "amber",
            ShapeKind::T => "indigo",
            ShapeKind::S => "emerald",
            ShapeKind::Z => "red",
            ShapeKind::J => "blue",
            ShapeKind::L => "orange",
        }
    }
}

/// Player commands that can be applied to a session
///
/// Keyboard and touch input both funnel into these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// One gravity step on demand (lands the piece if it cannot fall)
    SoftDrop,
    /// Rotate piece 90° clockwise, no wall kicks
    Rotate,
    /// Reset the session to its initial state
    Restart,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use transform_tetris_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("rotate"), Some(GameAction::Rotate));
    /// assert_eq!(GameAction::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "rotate" => Some(GameAction::Rotate),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::Rotate => "rotate",
            GameAction::Restart => "restart",
        }
    }
}

/// Observable lifecycle phase of a session
///
/// Landing happens inside a single mutation and is never observable, so it has
/// no variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    /// Live session waiting for a piece to be spawned
    Spawning,
    /// Active piece present, gravity and input accepted
    Falling,
    /// Spawn collided with the stack
    GameOver,
    /// Line goal reached
    Won,
}

impl Phase {
    /// True for `GameOver` and `Won`
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::GameOver | Phase::Won)
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(ShapeKind)`: Cell settled by a piece of the given kind
pub type Cell = Option<ShapeKind>;
