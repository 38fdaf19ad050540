//! Session actor.
//!
//! One task owns the [`GameState`]. Gravity ticks and player input both reach it
//! through a single `select!` loop, so there is exactly one mutator. Every
//! change is published as a whole [`GameSnapshot`] on a watch channel.

use std::future;
use std::time::Duration;

use log::{debug, info};
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, Interval, MissedTickBehavior};

use crate::config::EngineConfig;
use crate::core::{GameSnapshot, GameState, RandomPieces};
use crate::types::GameAction;

/// Message delivered to the session actor.
#[derive(Debug)]
pub enum EngineCommand {
    Action {
        action: GameAction,
        /// Receives whether the action changed the session
        reply: Option<oneshot::Sender<bool>>,
    },
    Shutdown,
}

/// Handle to a running session actor.
///
/// Dropping the handle stops the actor and its gravity ticker.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    snapshot_rx: watch::Receiver<GameSnapshot>,
    task: Option<JoinHandle<()>>,
}

impl EngineHandle {
    /// Spawn a random-piece session on the current tokio runtime.
    pub fn spawn(config: &EngineConfig, on_complete: impl FnMut(u32) + Send + 'static) -> Self {
        let state = GameState::with_source(RandomPieces::new(config.seed), config.game_config())
            .with_completion(on_complete);
        Self::spawn_with_state(state, config.tick_period(), config.max_pending_commands)
    }

    /// Spawn an actor around an already-built session.
    ///
    /// The session is started if it has not been yet.
    pub fn spawn_with_state(mut state: GameState, tick: Duration, max_pending: usize) -> Self {
        state.start();
        let (cmd_tx, cmd_rx) = mpsc::channel(max_pending.max(1));
        let (snapshot_tx, snapshot_rx) = watch::channel(state.snapshot());
        let task = tokio::spawn(run_session(state, cmd_rx, snapshot_tx, tick));

        Self {
            cmd_tx,
            snapshot_rx,
            task: Some(task),
        }
    }

    /// Apply an action and wait for the result.
    ///
    /// Returns false if the action was a no-op or the actor has stopped.
    pub async fn apply(&self, action: GameAction) -> bool {
        let (reply_tx, reply_rx) = oneshot::channel();
        let cmd = EngineCommand::Action {
            action,
            reply: Some(reply_tx),
        };
        if self.cmd_tx.send(cmd).await.is_err() {
            return false;
        }
        reply_rx.await.unwrap_or(false)
    }

    /// Queue an action without waiting for its result.
    ///
    /// Returns false if the actor has stopped.
    pub async fn send(&self, action: GameAction) -> bool {
        self.cmd_tx
            .send(EngineCommand::Action {
                action,
                reply: None,
            })
            .await
            .is_ok()
    }

    /// Queue an action without waiting; for synchronous hosts.
    ///
    /// Returns false if the queue is full or the actor has stopped.
    pub fn try_send(&self, action: GameAction) -> bool {
        self.cmd_tx
            .try_send(EngineCommand::Action {
                action,
                reply: None,
            })
            .is_ok()
    }

    pub async fn move_left(&self) -> bool {
        self.apply(GameAction::MoveLeft).await
    }

    pub async fn move_right(&self) -> bool {
        self.apply(GameAction::MoveRight).await
    }

    pub async fn soft_drop(&self) -> bool {
        self.apply(GameAction::SoftDrop).await
    }

    pub async fn rotate(&self) -> bool {
        self.apply(GameAction::Rotate).await
    }

    pub async fn restart(&self) -> bool {
        self.apply(GameAction::Restart).await
    }

    /// Latest published snapshot
    pub fn snapshot(&self) -> GameSnapshot {
        *self.snapshot_rx.borrow()
    }

    /// Wait until a newer snapshot is published.
    ///
    /// Returns false once the actor has stopped.
    pub async fn changed(&mut self) -> bool {
        self.snapshot_rx.changed().await.is_ok()
    }

    /// Independent receiver for snapshot updates
    pub fn subscribe(&self) -> watch::Receiver<GameSnapshot> {
        self.snapshot_rx.clone()
    }

    pub fn is_running(&self) -> bool {
        !self.cmd_tx.is_closed()
    }

    /// Stop the actor and wait for it to exit.
    pub async fn shutdown(mut self) {
        let _ = self.cmd_tx.send(EngineCommand::Shutdown).await;
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }
}

impl Drop for EngineHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

fn gravity_ticker(period: Duration) -> Interval {
    let mut ticker = time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Burst);
    ticker
}

async fn next_tick(ticker: &mut Option<Interval>) {
    match ticker {
        Some(ticker) => {
            ticker.tick().await;
        }
        None => future::pending::<()>().await,
    }
}

/// The ticker runs while the session is live or a win callback is pending.
fn needs_ticker(state: &GameState) -> bool {
    !state.phase().is_terminal() || state.completion_pending()
}

async fn run_session(
    mut state: GameState,
    mut cmd_rx: mpsc::Receiver<EngineCommand>,
    snapshot_tx: watch::Sender<GameSnapshot>,
    tick: Duration,
) {
    let tick_ms = u32::try_from(tick.as_millis()).unwrap_or(u32::MAX).max(1);
    info!("session actor started ({}ms tick)", tick_ms);

    let mut ticker = needs_ticker(&state).then(|| gravity_ticker(tick));

    loop {
        tokio::select! {
            cmd = cmd_rx.recv() => match cmd {
                Some(EngineCommand::Action { action, reply }) => {
                    let changed = state.apply_action(action);
                    if changed {
                        snapshot_tx.send_replace(state.snapshot());
                    }
                    if let Some(reply) = reply {
                        let _ = reply.send(changed);
                    }
                }
                Some(EngineCommand::Shutdown) | None => break,
            },
            _ = next_tick(&mut ticker) => {
                if state.tick(tick_ms) {
                    snapshot_tx.send_replace(state.snapshot());
                }
            }
        }

        match (ticker.is_some(), needs_ticker(&state)) {
            (true, false) => {
                debug!("gravity ticker cancelled ({:?})", state.phase());
                ticker = None;
            }
            (false, true) => {
                debug!("gravity ticker restarted");
                ticker = Some(gravity_ticker(tick));
            }
            _ => {}
        }
    }

    info!("session actor stopped");
}
