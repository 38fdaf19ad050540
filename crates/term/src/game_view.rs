//! GameView: maps a `GameSnapshot` into colored text lines.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// A run of text drawn with one color tag (`None` = terminal default).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub color: Option<&'static str>,
}

impl Span {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
        }
    }
}

pub type ViewLine = Vec<Span>;

/// Text layout of the board plus a header and status line.
pub struct GameView {
    filled: &'static str,
    empty: &'static str,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell.
        Self {
            filled: "[]",
            empty: " .",
        }
    }
}

impl GameView {
    pub fn render(&self, snap: &GameSnapshot) -> Vec<ViewLine> {
        let inner_width = BOARD_WIDTH as usize * self.filled.len();
        let border = format!("+{}+", "-".repeat(inner_width));

        let mut lines = Vec::with_capacity(BOARD_HEIGHT as usize + 4);
        lines.push(vec![Span::plain(format!(
            "LINES {}/{}  SCORE {}",
            snap.lines, snap.goal, snap.score
        ))]);
        lines.push(vec![Span::plain(border.clone())]);

        for y in 0..BOARD_HEIGHT as usize {
            let mut line = Vec::with_capacity(BOARD_WIDTH as usize + 2);
            line.push(Span::plain("|"));
            for x in 0..BOARD_WIDTH as usize {
                line.push(match snap.display_cell(x, y) {
                    Some(kind) => Span {
                        text: self.filled.to_string(),
                        color: Some(kind.color()),
                    },
                    None => Span::plain(self.empty),
                });
            }
            line.push(Span::plain("|"));
            lines.push(line);
        }

        lines.push(vec![Span::plain(border)]);
        lines.push(vec![Span::plain(status_text(snap))]);
        lines
    }
}

fn status_text(snap: &GameSnapshot) -> &'static str {
    if snap.won {
        "GOALS MET - preparing results"
    } else if snap.game_over {
        "GRIDLOCK - r: restart  q: quit"
    } else {
        "arrows/hjkl: move  up: rotate  down: drop  q: quit"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ActiveSnapshot, Piece};
    use crate::types::ShapeKind;

    fn text(line: &ViewLine) -> String {
        line.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn renders_header_board_and_status() {
        let view = GameView::default();
        let lines = view.render(&GameSnapshot::default());

        assert_eq!(lines.len(), BOARD_HEIGHT as usize + 4);
        assert_eq!(text(&lines[0]), "LINES 0/5  SCORE 0");
        assert_eq!(text(&lines[1]).len(), BOARD_WIDTH as usize * 2 + 2);
        assert!(text(&lines[lines.len() - 1]).contains("rotate"));
    }

    #[test]
    fn colors_settled_and_active_cells() {
        let mut snap = GameSnapshot::default();
        snap.board[14][0] = Some(ShapeKind::Z);
        snap.active = Some(ActiveSnapshot::from(Piece::spawn(ShapeKind::O)));

        let lines = GameView::default().render(&snap);
        // Row 0 is line 2; column 4 is span 5 (after the left border).
        assert_eq!(lines[2][5].color, Some("amber"));
        assert_eq!(lines[2][4].color, None);
        assert_eq!(lines[16][1].color, Some("red"));
    }

    #[test]
    fn status_reflects_terminal_states() {
        let mut snap = GameSnapshot::default();
        snap.game_over = true;
        assert!(status_text(&snap).starts_with("GRIDLOCK"));
        snap.game_over = false;
        snap.won = true;
        assert!(status_text(&snap).starts_with("GOALS MET"));
    }
}
