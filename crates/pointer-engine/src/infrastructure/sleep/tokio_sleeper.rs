//! Cancellable sleeping on the tokio timer.
//!
//! A [`CancelSignal`] wraps a `tokio::sync::watch` channel holding a single
//! `bool`.  Every sleep subscribes to it and races the timer against the flag
//! turning `true`, so cancelling wakes an in-flight sleep immediately.  The
//! flag stays set until [`CancelSignal::reset`], which makes every later
//! sleep fail at once as well.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::watch;
use tracing::debug;

use crate::application::input_engine::EngineError;
use crate::application::ports::Sleeper;

/// Shared cancellation flag.  Clones refer to the same flag.
#[derive(Debug, Clone)]
pub struct CancelSignal {
    tx: Arc<watch::Sender<bool>>,
}

impl Default for CancelSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl CancelSignal {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    /// Interrupts in-flight sleeps and fails later ones until [`reset`](Self::reset).
    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }

    pub fn reset(&self) {
        self.tx.send_replace(false);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.tx.borrow()
    }

    fn subscribe(&self) -> watch::Receiver<bool> {
        self.tx.subscribe()
    }
}

/// Sleeps on the tokio timer; suspends only the calling task.
#[derive(Debug, Clone, Default)]
pub struct TokioSleeper {
    cancel: CancelSignal,
}

impl TokioSleeper {
    pub fn new(cancel: CancelSignal) -> Self {
        Self { cancel }
    }

    pub fn cancel_signal(&self) -> CancelSignal {
        self.cancel.clone()
    }
}

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) -> Result<(), EngineError> {
        let mut rx = self.cancel.subscribe();
        if *rx.borrow_and_update() {
            return Err(EngineError::Cancelled);
        }
        if duration.is_zero() {
            return Ok(());
        }

        tokio::select! {
            _ = tokio::time::sleep(duration) => Ok(()),
            // The sender lives as long as `self`, so `wait_for` only resolves
            // once the flag is set.
            _ = rx.wait_for(|cancelled| *cancelled) => {
                debug!(?duration, "sleep cancelled");
                Err(EngineError::Cancelled)
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
