//! InputEngine: walks the pointer along generated paths and validates landings.
//!
//! The engine owns no I/O of its own.  It composes three injected ports
//! ([`SurfaceBinding`], [`PathTimingProvider`], [`Sleeper`]) with the
//! caller's [`Targetable`] and [`Filter`]:
//!
//! ```text
//! apply(target, filter)
//!  └─ up to `attempts` times:
//!       ├─ read surface position          -> start (z = 255)
//!       ├─ target.next_point()            -> end   (z = 0), or skip attempt
//!       ├─ provider.path(start, end)
//!       ├─ for each sample: hop + sleep(delay(z) * speed / divisor)
//!       └─ read surface position again    -> landed == end && filter.accept(end)?
//! ```
//!
//! Re-reading the surface after the walk (instead of trusting the last hop)
//! catches surfaces that clamp or silently drop positions.

use std::sync::Arc;
use std::time::{Duration, Instant};

use pointer_core::{
    filter, Filter, FixedTarget, MouseButton, Point, ScrollDirection, Size, Targetable, Vector3,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, trace, warn};
use uuid::Uuid;

use super::control::InputControl;
use super::ports::{PathTimingProvider, Sleeper, SurfaceBinding};

/// Attempts made by [`InputEngine::apply`] before giving up.
pub const DEFAULT_ATTEMPTS: u32 = 3;

/// Provider delay units per millisecond at full speed.
pub const DEFAULT_TIMING_DIVISOR: f64 = 1.33e6;

/// Error type for engine operations.
///
/// Landing failures are not errors: they are reported as `Ok(false)`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// A delay was interrupted by the cancellation signal.
    #[error("input operation cancelled")]
    Cancelled,
}

/// How click and drag treat a surface that rejects a press or release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonPolicy {
    /// Press/release results are logged and otherwise ignored.
    #[default]
    Permissive,
    /// A rejected press or release makes the operation report `false`.
    Strict,
}

/// Tunables for an [`InputEngine`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineSettings {
    pub attempts: u32,
    /// Converts provider delay units to milliseconds.
    pub timing_divisor: f64,
    pub button_policy: ButtonPolicy,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            attempts: DEFAULT_ATTEMPTS,
            timing_divisor: DEFAULT_TIMING_DIVISOR,
            button_policy: ButtonPolicy::Permissive,
        }
    }
}

/// The movement/interaction engine.
pub struct InputEngine {
    id: Uuid,
    surface: Arc<dyn SurfaceBinding>,
    provider: Arc<dyn PathTimingProvider>,
    sleeper: Arc<dyn Sleeper>,
    control: InputControl,
    settings: EngineSettings,
}

impl InputEngine {
    /// Creates an engine at full speed, not blocking, with default settings.
    pub fn new(
        surface: Arc<dyn SurfaceBinding>,
        provider: Arc<dyn PathTimingProvider>,
        sleeper: Arc<dyn Sleeper>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            surface,
            provider,
            sleeper,
            control: InputControl::new(),
            settings: EngineSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: EngineSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Uses an existing control handle instead of a fresh one.
    pub fn with_control(mut self, control: InputControl) -> Self {
        self.control = control;
        self
    }

    /// Identifier attached to this engine's log output.
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// A handle onto this engine's speed and blocking state.
    pub fn control(&self) -> InputControl {
        self.control.clone()
    }

    // ── Speed / blocking ──────────────────────────────────────────────────────

    /// See [`InputControl::set_speed`].  `0` reads without writing.
    pub fn set_speed(&self, percent: i32) -> i32 {
        self.control.set_speed(percent)
    }

    pub fn speed(&self) -> i32 {
        self.control.speed()
    }

    pub fn is_blocking(&self) -> bool {
        self.control.is_blocking()
    }

    pub fn set_blocking(&self, blocking: bool) {
        self.control.set_blocking(blocking);
    }

    // ── Movement ──────────────────────────────────────────────────────────────

    /// Teleports the pointer without a path, delay, or landing check.
    pub fn hop(&self, point: Point) -> bool {
        let accepted = self.surface.set_position(point);
        if !accepted {
            trace!(engine = %self.id, %point, "surface rejected position");
        }
        accepted
    }

    /// Moves to exactly `point`.
    ///
    /// Equivalent to [`apply`](Self::apply) with a [`FixedTarget`] and an
    /// exact-match filter.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Cancelled`] if a delay is interrupted.
    pub async fn move_to(&self, point: Point) -> Result<bool, EngineError> {
        self.apply(&FixedTarget(point), &filter::exact(point)).await
    }

    /// Walks the pointer onto `target` and reports whether it landed.
    ///
    /// Makes up to `attempts` attempts.  An attempt succeeds when the surface
    /// position after the walk equals the commanded end point *and* `filter`
    /// accepts that point.  Attempts where the target yields no point, or a
    /// point carrying the `-1` marker on either axis, are skipped without
    /// requesting a path.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Cancelled`] as soon as a delay is interrupted;
    /// remaining attempts are abandoned.
    pub async fn apply(
        &self,
        target: &dyn Targetable,
        filter: &dyn Filter<Point>,
    ) -> Result<bool, EngineError> {
        for attempt in 1..=self.settings.attempts {
            let start = Vector3::lifted(self.surface.position());
            let Some(aim) = target.next_point().filter(|p| !p.is_none_marker()) else {
                debug!(engine = %self.id, attempt, "target yielded no point; skipping attempt");
                continue;
            };
            let end = Vector3::grounded(aim);

            let path = self.provider.path(start, end);
            trace!(engine = %self.id, attempt, samples = path.len(), "walking path");
            for sample in path {
                let point = sample.to_point();
                if point.is_none_marker() {
                    continue;
                }
                self.hop(point);
                self.sleeper.sleep(self.step_delay(sample.z)).await?;
            }

            let landed = self.surface.position();
            let expected = end.to_point();
            if landed == expected && filter.accept(&expected) {
                debug!(engine = %self.id, attempt, %landed, "landed on target");
                return Ok(true);
            }
            debug!(engine = %self.id, attempt, %landed, %expected, "landing rejected");
        }

        warn!(
            engine = %self.id,
            attempts = self.settings.attempts,
            "target not reached"
        );
        Ok(false)
    }

    /// Delay after a path sample at `elevation`, scaled by the current speed.
    ///
    /// Rounded to the nearest millisecond; negative or non-finite results are
    /// treated as zero.
    pub fn step_delay(&self, elevation: i32) -> Duration {
        let raw = self.provider.absolute_delay(elevation);
        let millis = (raw * self.control.speed_factor() / self.settings.timing_divisor).round();
        if millis.is_finite() && millis > 0.0 {
            Duration::from_millis(millis as u64)
        } else {
            Duration::ZERO
        }
    }

    // ── Buttons ───────────────────────────────────────────────────────────────

    /// Press, hold for the provider's press duration, release, wait again.
    ///
    /// Under [`ButtonPolicy::Permissive`] this reports `true` even when the
    /// surface rejected the press or release.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Cancelled`] if a delay is interrupted.  The
    /// button is released before the error is returned.
    pub async fn click(&self, button: MouseButton) -> Result<bool, EngineError> {
        let pressed = self.press_button(button);
        let held = self.sleeper.sleep(self.provider.press_duration()).await;
        let released = self.release_button(button);
        held?;
        self.sleeper.sleep(self.provider.press_duration()).await?;
        Ok(self.button_outcome(pressed && released, true))
    }

    /// Clicks the left button when `primary`, otherwise the right.
    pub async fn click_primary(&self, primary: bool) -> Result<bool, EngineError> {
        self.click(MouseButton::from_primary(primary)).await
    }

    /// Moves to `point`, then clicks.  Does not click if the move fails.
    pub async fn click_at(&self, point: Point, button: MouseButton) -> Result<bool, EngineError> {
        if !self.move_to(point).await? {
            return Ok(false);
        }
        self.click(button).await
    }

    pub async fn click_at_primary(&self, point: Point, primary: bool) -> Result<bool, EngineError> {
        self.click_at(point, MouseButton::from_primary(primary)).await
    }

    /// Press, move to `point` along a full path, release.
    ///
    /// Reports whether the move landed (and, under [`ButtonPolicy::Strict`],
    /// whether both button events were accepted).
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Cancelled`] if the move is interrupted.  The
    /// button is released before the error is returned.
    pub async fn drag(&self, point: Point, button: MouseButton) -> Result<bool, EngineError> {
        let pressed = self.press_button(button);
        let moved = self.move_to(point).await;
        let released = self.release_button(button);
        let moved = moved?;
        Ok(self.button_outcome(pressed && released, moved))
    }

    pub async fn drag_primary(&self, point: Point, primary: bool) -> Result<bool, EngineError> {
        self.drag(point, MouseButton::from_primary(primary)).await
    }

    fn press_button(&self, button: MouseButton) -> bool {
        let accepted = self.surface.press(button);
        if !accepted {
            warn!(engine = %self.id, ?button, "surface rejected button press");
        }
        accepted
    }

    fn release_button(&self, button: MouseButton) -> bool {
        let accepted = self.surface.release(button);
        if !accepted {
            warn!(engine = %self.id, ?button, "surface rejected button release");
        }
        accepted
    }

    fn button_outcome(&self, buttons_accepted: bool, action: bool) -> bool {
        match self.settings.button_policy {
            ButtonPolicy::Permissive => action,
            ButtonPolicy::Strict => buttons_accepted && action,
        }
    }

    // ── Scroll / text / focus ─────────────────────────────────────────────────

    /// Scrolls one notch down.
    pub fn scroll(&self) -> bool {
        self.scroll_toward(ScrollDirection::Down)
    }

    pub fn scroll_toward(&self, direction: ScrollDirection) -> bool {
        self.surface.scroll(direction)
    }

    pub fn send(&self, text: &str) -> bool {
        self.surface.send_text(text)
    }

    /// Sends `text` followed by a newline.
    pub fn sendln(&self, text: &str) -> bool {
        self.send(&format!("{text}\n"))
    }

    pub fn focus(&self) {
        self.surface.focus();
    }

    pub fn defocus(&self) {
        self.surface.defocus();
    }

    // ── Read-back ─────────────────────────────────────────────────────────────

    pub fn position(&self) -> Point {
        self.surface.position()
    }

    pub fn press_position(&self) -> Point {
        self.surface.press_position()
    }

    pub fn press_timestamp(&self) -> Option<Instant> {
        self.surface.press_timestamp()
    }

    pub fn component_size(&self) -> Size {
        self.surface.size()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
