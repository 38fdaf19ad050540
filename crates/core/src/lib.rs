//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the puzzle rules, session state, and simulation logic.
//! It has **no dependencies** on UI, networking, timers, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical piece sequences
//! - **Testable**: Every rule is reachable from plain method calls
//! - **Portable**: Any host that can call `tick` and forward input can drive it
//!
//! # Module Structure
//!
//! - [`board`]: 10x15 grid with collision checks and line clearing
//! - [`game_state`]: Session state: active piece, counters, win/loss, completion callback
//! - [`pieces`]: Shape matrices, clockwise rotation, spawn placement
//! - [`rng`]: Uniform random piece generation
//! - [`snapshot`]: Read-only copies of a session for rendering
//!
//! # Game Rules
//!
//! - **Uniform randomizer**: Each piece is drawn independently; repeats are possible
//! - **Plain rotation**: Clockwise quarter turn, rejected outright on collision (no kicks)
//! - **Immediate lock**: A piece that cannot fall lands on the same gravity step
//! - **Line goal**: Clearing 5 lines wins; a blocked spawn loses
//! - **Scoring**: 100 per cleared line, no combo bonus
//!
//! # Example
//!
//! ```
//! use transform_tetris_core::GameState;
//! use transform_tetris_types::{GameAction, GRAVITY_MS};
//!
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.tick(GRAVITY_MS);
//!
//! assert_eq!(game.lines(), 0);
//! assert!(game.active().is_some());
//! ```
//!
//! # Timing
//!
//! The session uses a fixed timestep: call
//! [`GameState::tick`](game_state::GameState::tick) with elapsed milliseconds.
//! Each full gravity period (700ms) performs one forced drop.

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod snapshot;

pub use transform_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, ClearedRows};
pub use game_state::{CompletionCallback, GameConfig, GameState};
pub use pieces::{base_shape, Piece, Shape};
pub use rng::{PieceGenerator, PieceSource, RandomPieces, ScriptedPieces, SimpleRng};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
