//! Synchronous bridge to the session actor.
//!
//! Owns a small tokio runtime so a plain (non-async) game loop can forward
//! input and read snapshots.

use anyhow::{Context, Result};
use tokio::runtime::{Builder, Runtime};

use crate::config::EngineConfig;
use crate::core::GameSnapshot;
use crate::runtime::EngineHandle;
use crate::types::GameAction;

/// Running engine for synchronous hosts.
pub struct BlockingEngine {
    rt: Runtime,
    handle: EngineHandle,
}

impl BlockingEngine {
    /// Start a session actor on a dedicated runtime.
    pub fn start(config: &EngineConfig, on_complete: impl FnMut(u32) + Send + 'static) -> Result<Self> {
        let rt = Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("transform-tetris-engine")
            .enable_time()
            .build()
            .context("failed to create engine runtime")?;

        let handle = {
            let _guard = rt.enter();
            EngineHandle::spawn(config, on_complete)
        };

        Ok(Self { rt, handle })
    }

    /// Queue an action without waiting for it to be applied.
    pub fn send(&self, action: GameAction) -> bool {
        self.handle.try_send(action)
    }

    /// Apply an action and block until the actor reports the result.
    pub fn apply(&self, action: GameAction) -> bool {
        self.rt.block_on(self.handle.apply(action))
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.handle.snapshot()
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_running()
    }

    /// Stop the actor and tear down the runtime.
    pub fn shutdown(self) {
        let Self { rt, handle } = self;
        rt.block_on(handle.shutdown());
    }
}
