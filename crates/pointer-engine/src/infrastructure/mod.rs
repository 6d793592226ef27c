//! Infrastructure layer for the pointer engine.
//!
//! Contains adapters for the ports defined in `application::ports`, plus
//! configuration persistence.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `pointer_core`, but MUST NOT be imported by the `application` layer
//! outside of tests.
//!
//! # Sub-modules
//!
//! - **`surface`** – `SurfaceBinding` implementations.  `MockSurface` keeps
//!   the pointer in memory and records every event; it can be told to ignore
//!   or clamp positions and to reject button events.
//!
//! - **`path_timing`** – `PathTimingProvider` implementations.
//!   `LinearPathProvider` interpolates a straight path with a descending
//!   elevation and an ease-in/ease-out delay profile.
//!
//! - **`sleep`** – `Sleeper` implementations: a tokio timer raced against a
//!   `CancelSignal`, and a recording sleeper for tests.
//!
//! - **`storage`** – TOML configuration file load/save.

pub mod path_timing;
pub mod sleep;
pub mod storage;
pub mod surface;
