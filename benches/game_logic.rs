use criterion::{black_box, criterion_group, criterion_main, Criterion};
use transform_tetris::core::{base_shape, Board, GameState};
use transform_tetris::types::{ShapeKind, TICK_MS};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            if !state.tick(black_box(TICK_MS)) && state.phase().is_terminal() {
                state.restart();
            }
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 11..15 {
                board.fill_row_except(y, &[], ShapeKind::I);
            }
            black_box(board.clear_full_rows());
        })
    });
}

fn bench_collides(c: &mut Criterion) {
    let mut board = Board::new();
    board.fill_row_except(14, &[0], ShapeKind::L);
    let shape = base_shape(ShapeKind::T);

    c.bench_function("collides", |b| {
        b.iter(|| board.collides(black_box(&shape), black_box(4), black_box(13)))
    });
}

fn bench_move_and_rotate(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("move_and_rotate", |b| {
        b.iter(|| {
            state.move_left();
            state.rotate();
            state.move_right();
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_collides,
    bench_move_and_rotate
);
criterion_main!(benches);
