//! Terminal view for the interactive runner.
//!
//! Deliberately small: a pure [`GameView`] that turns a snapshot into colored
//! text lines, and a [`TerminalRenderer`] that redraws them in the alternate
//! screen. Styling beyond one color per settled cell is out of scope.

pub mod game_view;
pub mod renderer;

pub use transform_tetris_core as core;
pub use transform_tetris_types as types;

pub use game_view::{GameView, Span, ViewLine};
pub use renderer::{tag_color, TerminalRenderer};
