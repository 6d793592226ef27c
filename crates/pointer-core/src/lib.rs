//! # pointer-core
//!
//! Shared value types for the pointer input engine: 2D/3D geometry, input
//! identifiers, and the two capabilities the engine aims with.
//!
//! This crate has no dependencies on OS APIs, async runtimes, or timers.
//!
//! # Architecture overview
//!
//! The engine in `pointer-engine` moves a pointer along a generated path
//! until it lands on a target.  This crate defines what it moves *with*:
//!
//! - **`domain::geometry`** – `Point`, `Size`, `Region`, and the `Vector3`
//!   path sample whose third axis is a synthetic elevation used only to look
//!   up timing.
//!
//! - **`domain::input`** – mouse buttons and scroll directions.
//!
//! - **`domain::target`** – the `Targetable` and `Filter` capabilities plus
//!   small composition helpers (fixed targets, closure targets, exact and
//!   tolerance filters).

pub mod domain;

// Re-export the most-used types at the crate root so callers can write
// `pointer_core::Point` instead of `pointer_core::domain::geometry::Point`.
pub use domain::geometry::{
    Point, PointParseError, Region, Size, Vector3, GROUNDED_ELEVATION, LIFTED_ELEVATION,
};
pub use domain::input::{MouseButton, ScrollDirection};
pub use domain::target::{filter, Filter, FixedTarget, FnTarget, Targetable};
