//! Transform Tetris (workspace facade crate).
//!
//! Re-exports the member crates under one `transform_tetris::{core,engine,input,term,types}`
//! namespace so hosts and integration tests depend on a single package.

pub use transform_tetris_core as core;
pub use transform_tetris_engine as engine;
pub use transform_tetris_input as input;
pub use transform_tetris_term as term;
pub use transform_tetris_types as types;
