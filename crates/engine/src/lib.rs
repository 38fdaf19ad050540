//! Engine module - drives a session in real time
//!
//! The core session is a plain state machine; this crate gives it a clock and a
//! single serialization point:
//!
//! - One tokio task exclusively owns the [`GameState`](crate::core::GameState)
//! - A cancellable gravity ticker and the input queue are `select!`ed in that task
//! - Each mutation publishes a complete snapshot on a watch channel, so readers
//!   never observe a half-applied change
//! - The ticker stops when the session reaches a terminal state (after the win
//!   callback has fired) and restarts on `Restart`
//!
//! # Example
//!
//! ```no_run
//! use transform_tetris_engine::{EngineConfig, EngineHandle};
//!
//! # async fn run() {
//! let handle = EngineHandle::spawn(&EngineConfig::default(), |lines| {
//!     println!("goal met with {} lines", lines);
//! });
//! handle.move_left().await;
//! handle.rotate().await;
//! let snap = handle.snapshot();
//! assert!(!snap.won);
//! handle.shutdown().await;
//! # }
//! ```
//!
//! Synchronous hosts use [`BlockingEngine`], which owns its own runtime.

pub mod blocking;
pub mod config;
pub mod runtime;

pub use transform_tetris_core as core;
pub use transform_tetris_types as types;

pub use blocking::BlockingEngine;
pub use config::EngineConfig;
pub use runtime::{EngineCommand, EngineHandle};
