//! Recording sleeper for unit and integration tests.
//!
//! Returns immediately and appends each requested duration to `sleeps`, so a
//! test can assert the exact timing schedule of a walk or click without
//! waiting for it.
//!
//! Two knobs shape its behaviour:
//!
//! - `cancel_after` – after this many successful sleeps, every further sleep
//!   returns `EngineError::Cancelled` (and is not recorded).
//! - a hook, called with the zero-based index of each recorded sleep.  Tests
//!   use it to change engine state mid-walk, e.g. lower the speed.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::application::input_engine::EngineError;
use crate::application::ports::Sleeper;

type SleepHook = Box<dyn Fn(usize) + Send + Sync>;

#[derive(Default)]
pub struct RecordingSleeper {
    pub sleeps: Mutex<Vec<Duration>>,
    pub cancel_after: Option<usize>,
    hook: Option<SleepHook>,
}

impl RecordingSleeper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lets `successful` sleeps through, then cancels.
    pub fn cancelling_after(successful: usize) -> Self {
        Self {
            cancel_after: Some(successful),
            ..Self::default()
        }
    }

    pub fn with_hook(mut self, hook: impl Fn(usize) + Send + Sync + 'static) -> Self {
        self.hook = Some(Box::new(hook));
        self
    }

    /// Durations recorded so far.
    pub fn recorded(&self) -> Vec<Duration> {
        self.sleeps.lock().unwrap().clone()
    }

    pub fn total(&self) -> Duration {
        self.sleeps.lock().unwrap().iter().sum()
    }
}

#[async_trait]
impl Sleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) -> Result<(), EngineError> {
        let index = {
            let mut sleeps = self.sleeps.lock().unwrap();
            if self.cancel_after.is_some_and(|limit| sleeps.len() >= limit) {
                return Err(EngineError::Cancelled);
            }
            sleeps.push(duration);
            sleeps.len() - 1
        };
        if let Some(hook) = &self.hook {
            hook(index);
        }
        Ok(())
    }
}
