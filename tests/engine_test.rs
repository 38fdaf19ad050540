//! Closed-loop tests for the session actor

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use transform_tetris::core::{Board, GameConfig, GameState, ScriptedPieces};
use transform_tetris::engine::{EngineConfig, EngineHandle};
use transform_tetris::types::{Phase, ShapeKind};

#[tokio::test(start_paused = true)]
async fn gravity_alone_lands_pieces_until_the_stack_tops_out() {
    let config = EngineConfig {
        seed: 42,
        ..EngineConfig::default()
    };
    let mut handle = EngineHandle::spawn(&config, |_| {});
    let first = handle.snapshot();
    assert_eq!(first.phase, Phase::Falling);

    let mut last_y = first.active.unwrap().y;
    let mut landed = 0;
    while !handle.snapshot().game_over {
        assert!(handle.changed().await);
        let snap = handle.snapshot();
        match snap.active {
            Some(active) if active.y > last_y => last_y = active.y,
            Some(active) => {
                landed += 1;
                last_y = active.y;
            }
            None => {}
        }
        assert!(landed < 200, "stack never topped out");
    }

    let over = handle.snapshot();
    assert!(over.paused);
    assert!(landed > 0);

    // Frozen: time passes but nothing is published.
    tokio::time::sleep(Duration::from_secs(30)).await;
    assert_eq!(handle.snapshot(), over);
    handle.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn soft_drops_reach_the_goal_and_completion_waits_for_the_delay() {
    let mut board = Board::new();
    for y in 10..15 {
        board.fill_row_except(y, &[0], ShapeKind::S);
    }
    let fired = Arc::new(AtomicU32::new(0));
    let seen = Arc::clone(&fired);
    let state = GameState::from_parts(
        board,
        ScriptedPieces::new([ShapeKind::I]),
        GameConfig::default(),
    )
    .with_completion(move |lines| {
        assert_eq!(lines, 5);
        seen.fetch_add(1, Ordering::SeqCst);
    });
    let handle = EngineHandle::spawn_with_state(state, Duration::from_millis(16), 16);

    while !handle.snapshot().won {
        assert!(handle.rotate().await);
        for _ in 0..3 {
            assert!(handle.move_left().await);
        }
        let lines_before = handle.snapshot().lines;
        while handle.snapshot().lines == lines_before {
            assert!(handle.soft_drop().await);
        }
    }

    let won = handle.snapshot();
    assert_eq!((won.lines, won.score), (5, 500));
    assert!(won.paused);
    assert_eq!(won.active.map(|a| (a.x, a.y)), Some((0, 11)));

    tokio::time::sleep(Duration::from_millis(1400)).await;
    assert_eq!(fired.load(Ordering::SeqCst), 0);
    assert!(!handle.restart().await);
    assert!(handle.snapshot().won);
    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(fired.load(Ordering::SeqCst), 1);

    assert!(handle.restart().await);
    assert_eq!(handle.snapshot().phase, Phase::Falling);
    assert_eq!(handle.snapshot().lines, 0);
    handle.shutdown().await;
}
