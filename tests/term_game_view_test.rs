use transform_tetris::core::GameState;
use transform_tetris::term::{GameView, ViewLine};
use transform_tetris::types::{ShapeKind, BOARD_HEIGHT};

fn text(line: &ViewLine) -> String {
    line.iter().map(|s| s.text.as_str()).collect()
}

#[test]
fn term_view_frames_the_board() {
    let mut state = GameState::new(1);
    state.start();
    let lines = GameView::default().render(&state.snapshot());

    let top = text(&lines[1]);
    let bottom = text(&lines[BOARD_HEIGHT as usize + 2]);
    assert!(top.starts_with('+') && top.ends_with('+'));
    assert_eq!(top, bottom);
    for line in &lines[2..BOARD_HEIGHT as usize + 2] {
        let row = text(line);
        assert_eq!(row.len(), top.len());
        assert!(row.starts_with('|') && row.ends_with('|'));
    }
}

#[test]
fn term_view_shows_active_piece_in_its_color() {
    let mut state = GameState::new(7);
    state.start();
    let snap = state.snapshot();
    let active = snap.active.unwrap();

    let lines = GameView::default().render(&snap);
    let colored: usize = lines
        .iter()
        .flatten()
        .filter(|span| span.color == Some(active.color))
        .count();
    assert_eq!(colored, 4);
}

#[test]
fn term_view_header_tracks_progress() {
    let mut snap = GameState::new(1).snapshot();
    snap.lines = 3;
    snap.score = 300;
    snap.board[14][2] = Some(ShapeKind::J);

    let lines = GameView::default().render(&snap);
    assert_eq!(text(&lines[0]), "LINES 3/5  SCORE 300");
    assert_eq!(lines[BOARD_HEIGHT as usize + 1][3].color, Some("blue"));
}
