//! Terminal runner (default binary).
//!
//! Drives a session through the blocking engine: crossterm supplies keys, the
//! engine owns gravity, and every loop iteration redraws the latest snapshot.
//! On exit a one-line JSON summary is printed to stdout.

use std::sync::mpsc;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::{debug, info};
use serde::Serialize;

use transform_tetris::engine::{BlockingEngine, EngineConfig};
use transform_tetris::input::{handle_key_event, should_quit};
use transform_tetris::term::{GameView, TerminalRenderer};

const FRAME: Duration = Duration::from_millis(16);

#[derive(Debug, Serialize)]
struct Summary {
    goals_met: u32,
    score: u32,
    won: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = EngineConfig::from_env();
    info!("starting session: {:?}", config);

    let (done_tx, done_rx) = mpsc::channel();
    let engine = BlockingEngine::start(&config, move |lines| {
        let _ = done_tx.send(lines);
    })?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &engine, &done_rx);

    // Always try to restore terminal state.
    let _ = term.exit();

    let snap = engine.snapshot();
    engine.shutdown();
    let goals_met = result?.unwrap_or(snap.lines);

    let summary = Summary {
        goals_met,
        score: snap.score,
        won: snap.won,
    };
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}

/// Returns the completion callback's line count if the goal was reached.
fn run(
    term: &mut TerminalRenderer,
    engine: &BlockingEngine,
    done_rx: &mpsc::Receiver<u32>,
) -> Result<Option<u32>> {
    let view = GameView::default();

    loop {
        term.draw(&view.render(&engine.snapshot()))?;

        if let Ok(lines) = done_rx.try_recv() {
            info!("goal reached with {} lines", lines);
            return Ok(Some(lines));
        }

        if !event::poll(FRAME)? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if should_quit(key) {
                return Ok(None);
            }
            if let Some(action) = handle_key_event(key) {
                if !engine.send(action) {
                    debug!("dropped {:?}: input queue full", action);
                }
            }
        }
    }
}
