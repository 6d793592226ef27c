//! Surface binding implementations.
//!
//! Only the in-memory surface ships with the engine; OS event injection is
//! supplied by the embedding application through
//! [`SurfaceBinding`](crate::application::ports::SurfaceBinding).

pub mod mock;

pub use mock::{MockSurface, SurfaceEvent};
