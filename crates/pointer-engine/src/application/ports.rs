//! Collaborator traits consumed by [`InputEngine`](super::input_engine::InputEngine).
//!
//! The engine never talks to an OS, a clock, or a curve generator directly.
//! Each of those is one of the traits below; the infrastructure layer
//! provides implementations and the caller wires them together.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use pointer_core::{MouseButton, Point, ScrollDirection, Size, Vector3};

use super::input_engine::EngineError;

/// Raw I/O against the component receiving synthetic input.
///
/// Every method is synchronous and always available.  Boolean results report
/// whether the surface accepted the event; the engine decides what to do with
/// a `false`.
#[cfg_attr(test, mockall::automock)]
pub trait SurfaceBinding: Send + Sync {
    /// Current pointer position.
    fn position(&self) -> Point;

    /// Pointer position at the most recent button press.
    fn press_position(&self) -> Point;

    /// Instant of the most recent button press, `None` before the first one.
    fn press_timestamp(&self) -> Option<Instant>;

    /// Teleports the pointer.  Unchecked: the surface may clamp or ignore it.
    fn set_position(&self, point: Point) -> bool;

    fn press(&self, button: MouseButton) -> bool;

    fn release(&self, button: MouseButton) -> bool;

    /// Emits one scroll notch.
    fn scroll(&self, direction: ScrollDirection) -> bool;

    fn send_text(&self, text: &str) -> bool;

    /// Dimensions of the target component.
    fn size(&self) -> Size;

    fn focus(&self);

    fn defocus(&self);
}

/// Trajectory and timing source.
///
/// Delays are returned in the provider's own units; the engine converts them
/// to milliseconds with its calibration divisor.
#[cfg_attr(test, mockall::automock)]
pub trait PathTimingProvider: Send + Sync {
    /// An ordered, finite path from `start` to `end`.  Whether the endpoints
    /// themselves are included is up to the provider.
    fn path(&self, start: Vector3, end: Vector3) -> Vec<Vector3>;

    /// How long a button stays down during a click, and how long to wait
    /// after releasing it.
    fn press_duration(&self) -> Duration;

    /// Raw delay for a sample at the given elevation.
    fn absolute_delay(&self, elevation: i32) -> f64;
}

/// Cancellable delay primitive.
///
/// Must suspend only the calling task.  Returns
/// [`EngineError::Cancelled`] when the wait was interrupted; the engine
/// propagates that instead of retrying.
#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration) -> Result<(), EngineError>;
}
