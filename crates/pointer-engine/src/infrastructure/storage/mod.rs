//! Persistent storage for the pointer engine.

pub mod config;
