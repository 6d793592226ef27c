//! Speed and blocking state.
//!
//! Both values are read and written from more than one task: the engine reads
//! the speed before every path sample while other automation may lower it to
//! slow a move down mid-flight.  Each cell is an atomic behind an `Arc`, so a
//! cloned [`InputControl`] is a handle onto the *same* state, and two engines
//! built separately never share it.

use std::sync::{
    atomic::{AtomicBool, AtomicI32, Ordering},
    Arc,
};

/// Slowest allowed speed percentage.
pub const MIN_SPEED: i32 = 10;

/// Fastest allowed speed percentage (the default).
pub const MAX_SPEED: i32 = 100;

/// Passing this to [`InputControl::set_speed`] reads the speed without
/// changing it.
pub const SPEED_QUERY: i32 = 0;

/// Shared handle to an engine's speed and blocking flag.
#[derive(Debug, Clone)]
pub struct InputControl {
    speed: Arc<AtomicI32>,
    blocking: Arc<AtomicBool>,
}

impl Default for InputControl {
    fn default() -> Self {
        Self::new()
    }
}

impl InputControl {
    /// Full speed, not blocking.
    pub fn new() -> Self {
        Self {
            speed: Arc::new(AtomicI32::new(MAX_SPEED)),
            blocking: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Sets the relative movement speed as a percentage and returns the value
    /// actually stored.
    ///
    /// `10` walks paths ten times faster than `100`.  Values outside
    /// `[10, 100]` are clamped.  [`SPEED_QUERY`] leaves the speed unchanged
    /// and returns the current value.
    pub fn set_speed(&self, percent: i32) -> i32 {
        if percent == SPEED_QUERY {
            return self.speed();
        }
        let clamped = percent.clamp(MIN_SPEED, MAX_SPEED);
        self.speed.store(clamped, Ordering::SeqCst);
        clamped
    }

    pub fn speed(&self) -> i32 {
        self.speed.load(Ordering::SeqCst)
    }

    /// Speed as a multiplier in `[0.1, 1.0]`.
    pub fn speed_factor(&self) -> f64 {
        f64::from(self.speed()) / 100.0
    }

    pub fn is_blocking(&self) -> bool {
        self.blocking.load(Ordering::SeqCst)
    }

    pub fn set_blocking(&self, blocking: bool) {
        self.blocking.store(blocking, Ordering::SeqCst);
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
