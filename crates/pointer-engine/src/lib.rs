//! pointer-engine library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.
//!
//! # What does the engine do?
//!
//! The engine drives a pointer across a surface the way a person would: it
//! asks a path provider for a trajectory from the current position to the
//! target, teleports the pointer through each sample with a short delay in
//! between, then reads the position back and checks that it actually landed.
//!
//! 1. The caller describes *where* to go with a `Targetable` and *what counts
//!    as arriving* with a `Filter` (both from `pointer-core`).
//! 2. `InputEngine::apply` makes up to three attempts, re-querying the target
//!    each time so moving targets are followed.
//! 3. Clicks, drags, scrolls, and text are thin compositions on top.
//!
//! The surface, path generator, and sleep primitive are injected through the
//! traits in `application::ports`; `infrastructure` provides in-memory and
//! tokio-backed implementations.

/// Application layer: the engine and the ports it depends on.
pub mod application;

/// Infrastructure layer: surface, path, sleep, and config adapters.
pub mod infrastructure;

pub use application::control::InputControl;
pub use application::input_engine::{ButtonPolicy, EngineError, EngineSettings, InputEngine};
pub use application::ports::{PathTimingProvider, Sleeper, SurfaceBinding};
