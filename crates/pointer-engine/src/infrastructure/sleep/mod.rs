//! Sleeper implementations.
//!
//! [`TokioSleeper`] is the production delay primitive: a tokio timer raced
//! against a [`CancelSignal`].  [`mock::RecordingSleeper`] returns at once and
//! records each requested duration.

pub mod mock;
mod tokio_sleeper;

pub use tokio_sleeper::{CancelSignal, TokioSleeper};
