//! Domain values for the pointer input engine.
//!
//! Everything here is pure data and pure predicates: no clocks, no I/O, no
//! shared state.  The engine crate composes these values with its injected
//! collaborators (surface binding, path provider, sleeper).

/// Points, sizes, regions, and 3D path samples.
pub mod geometry;

/// Mouse buttons and scroll directions.
pub mod input;

/// `Targetable` / `Filter` capabilities and their helpers.
pub mod target;
