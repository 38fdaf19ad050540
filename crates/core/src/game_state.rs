//! Game state module - manages the complete session
//!
//! This module ties together the board, piece generator and win/loss rules.
//! It handles gravity timing, piece movement, rotation, landing, line clears,
//! and the session lifecycle.
//!
//! Every mutation goes through [`GameState::collides`] first. Calls that arrive
//! while no piece is falling (terminal state, before the first spawn) are
//! silent no-ops.

use log::{debug, info};

use crate::board::Board;
use crate::pieces::{Piece, Shape};
use crate::rng::{PieceGenerator, PieceSource, RandomPieces};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::*;

/// Invoked once with the cumulative cleared-line count when the goal is met.
pub type CompletionCallback = Box<dyn FnMut(u32) + Send>;

/// Tunable timing and goal; board size and the shape set are fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub gravity_ms: u32,
    pub win_delay_ms: u32,
    pub win_lines: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            gravity_ms: GRAVITY_MS,
            win_delay_ms: WIN_DELAY_MS,
            win_lines: WIN_LINES,
        }
    }
}

/// Complete session state
pub struct GameState {
    board: Board,
    active: Option<Piece>,
    generator: PieceGenerator,
    config: GameConfig,
    lines: u32,
    score: u32,
    game_over: bool,
    won: bool,
    paused: bool,
    started: bool,
    drop_timer_ms: u32,
    win_timer_ms: u32,
    completion: Option<CompletionCallback>,
    completion_pending: bool,
    completion_fired: bool,
}

impl GameState {
    /// Create a new session with uniform random pieces from the given seed
    pub fn new(seed: u32) -> Self {
        Self::with_source(RandomPieces::new(seed), GameConfig::default())
    }

    /// Create a new session drawing pieces from `source`
    pub fn with_source(source: impl PieceSource + 'static, config: GameConfig) -> Self {
        Self::from_parts(Board::new(), source, config)
    }

    /// Create a session over a pre-seeded board.
    ///
    /// The board is only the starting layout; `restart` always clears it.
    pub fn from_parts(board: Board, source: impl PieceSource + 'static, config: GameConfig) -> Self {
        Self {
            board,
            active: None,
            generator: PieceGenerator::new(source),
            config,
            lines: 0,
            score: 0,
            game_over: false,
            won: false,
            paused: false,
            started: false,
            drop_timer_ms: 0,
            win_timer_ms: 0,
            completion: None,
            completion_pending: false,
            completion_fired: false,
        }
    }

    /// Register the completion callback (replaces any previous one)
    pub fn with_completion(mut self, callback: impl FnMut(u32) + Send + 'static) -> Self {
        self.set_completion(callback);
        self
    }

    pub fn set_completion(&mut self, callback: impl FnMut(u32) + Send + 'static) {
        self.completion = Some(Box::new(callback));
    }

    /// Start the session and spawn the first piece
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        info!("session started");
        self.spawn_piece();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn won(&self) -> bool {
        self.won
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Whether the win callback is still waiting for its grace period
    pub fn completion_pending(&self) -> bool {
        self.completion_pending
    }

    pub fn phase(&self) -> Phase {
        if self.game_over {
            Phase::GameOver
        } else if self.won {
            Phase::Won
        } else if self.active.is_some() {
            Phase::Falling
        } else {
            Phase::Spawning
        }
    }

    /// Whether input and gravity currently apply
    fn accepting_input(&self) -> bool {
        !self.paused && !self.game_over && !self.won && self.active.is_some()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.to_grid(),
            active: self.active.map(ActiveSnapshot::from),
            lines: self.lines,
            score: self.score,
            goal: self.config.win_lines,
            game_over: self.game_over,
            won: self.won,
            paused: self.paused,
            phase: self.phase(),
        }
    }

    /// Whether `piece` offset by (dx, dy), optionally with a replacement shape,
    /// would leave the board or overlap a settled cell.
    pub fn collides(&self, piece: &Piece, dx: i8, dy: i8, shape: Option<&Shape>) -> bool {
        piece.collides(&self.board, dx, dy, shape)
    }

    /// Spawn a new piece from the generator.
    ///
    /// A spawn that collides with the stack ends the session.
    fn spawn_piece(&mut self) -> bool {
        let piece = self.generator.next();

        if self.collides(&piece, 0, 0, None) {
            self.active = None;
            self.game_over = true;
            self.paused = true;
            info!(
                "game over: {:?} blocked at spawn ({} lines, score {})",
                piece.kind, self.lines, self.score
            );
            return false;
        }

        debug!("spawned {:?} at ({}, {})", piece.kind, piece.x, piece.y);
        self.active = Some(piece);
        true
    }

    /// Try to move the active piece
    fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        if !self.accepting_input() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        if self.collides(&active, dx, dy, None) {
            return false;
        }

        self.active = Some(active.shifted(dx, dy));
        true
    }

    pub fn move_left(&mut self) -> bool {
        self.try_move(-1, 0)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_move(1, 0)
    }

    /// One gravity step on demand
    pub fn soft_drop(&mut self) -> bool {
        self.gravity_step()
    }

    /// Rotate the active piece clockwise; rejected outright on collision
    pub fn rotate(&mut self) -> bool {
        if !self.accepting_input() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let rotated = active.shape.rotate_cw();
        if self.collides(&active, 0, 0, Some(&rotated)) {
            return false;
        }

        self.active = Some(Piece {
            shape: rotated,
            ..active
        });
        true
    }

    /// Forced downward attempt: falls one row, or lands the piece.
    ///
    /// Returns false only when there is nothing to act on.
    pub fn gravity_step(&mut self) -> bool {
        if !self.accepting_input() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        if self.collides(&active, 0, 1, None) {
            self.solidify(active);
        } else {
            self.active = Some(active.shifted(0, 1));
        }
        true
    }

    /// Merge a landed piece, clear full rows, then either finish the session
    /// or commit the board and spawn the next piece.
    ///
    /// Reaching the goal leaves the board and active piece as they were, so the
    /// final frame shows the landed piece over the last committed board.
    fn solidify(&mut self, piece: Piece) {
        let mut next = self.board;
        let dropped = next.merge(&piece.shape, piece.x, piece.y, piece.kind);
        if dropped > 0 {
            debug!("{:?} landed with {} cells above the board", piece.kind, dropped);
        }

        let cleared = next.clear_full_rows().len() as u32;
        if cleared > 0 {
            self.lines += cleared;
            self.score += cleared * LINE_BONUS;
            debug!(
                "cleared {} line(s), total {} / {}",
                cleared, self.lines, self.config.win_lines
            );
        }

        if self.lines >= self.config.win_lines {
            self.won = true;
            self.paused = true;
            self.completion_pending = true;
            self.win_timer_ms = 0;
            info!("goal met with {} lines, score {}", self.lines, self.score);
            if self.config.win_delay_ms == 0 {
                self.fire_completion();
            }
            return;
        }

        self.board = next;
        self.active = None;
        self.spawn_piece();
    }

    fn fire_completion(&mut self) {
        if self.completion_fired {
            return;
        }
        self.completion_fired = true;
        self.completion_pending = false;
        if let Some(callback) = self.completion.as_mut() {
            callback(self.lines);
        }
    }

    /// Advance session time by `elapsed_ms`.
    ///
    /// Runs one gravity step per full gravity period, spawns the first piece if
    /// none exists yet, and fires the completion callback once the win grace
    /// period has elapsed. Returns whether anything changed.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.won {
            if !self.completion_pending {
                return false;
            }
            self.win_timer_ms = self.win_timer_ms.saturating_add(elapsed_ms);
            if self.win_timer_ms >= self.config.win_delay_ms {
                self.fire_completion();
                return true;
            }
            return false;
        }

        if self.game_over || self.paused {
            return false;
        }

        if self.active.is_none() {
            self.started = true;
            self.spawn_piece();
            return true;
        }

        let period = self.config.gravity_ms.max(1);
        self.drop_timer_ms = self.drop_timer_ms.saturating_add(elapsed_ms);

        let mut changed = false;
        while self.drop_timer_ms >= period && self.accepting_input() {
            self.drop_timer_ms -= period;
            changed |= self.gravity_step();
        }
        changed
    }

    /// Reset to a fresh session: empty board, zeroed counters and flags, and
    /// a re-armed completion callback. Spawns the first piece.
    ///
    /// Refused (returns false) while a win is waiting for its completion
    /// callback; that callback belongs to the finished session.
    pub fn restart(&mut self) -> bool {
        if self.completion_pending {
            debug!("restart ignored: completion still pending");
            return false;
        }
        self.board.clear();
        self.active = None;
        self.lines = 0;
        self.score = 0;
        self.game_over = false;
        self.won = false;
        self.paused = false;
        self.drop_timer_ms = 0;
        self.win_timer_ms = 0;
        self.completion_fired = false;
        self.started = false;
        info!("session restarted");
        self.start();
        true
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::Rotate => self.rotate(),
            GameAction::Restart => self.restart(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

impl std::fmt::Debug for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameState")
            .field("active", &self.active)
            .field("lines", &self.lines)
            .field("score", &self.score)
            .field("phase", &self.phase())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
