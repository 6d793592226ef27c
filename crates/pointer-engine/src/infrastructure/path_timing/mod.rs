//! Path/timing provider implementations.

pub mod linear;

pub use linear::LinearPathProvider;
