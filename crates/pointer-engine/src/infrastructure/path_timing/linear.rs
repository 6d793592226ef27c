//! Straight-line path provider with an ease-in/ease-out delay profile.
//!
//! # Path shape
//!
//! The segment from `start` to `end` is split into `n` equal steps, where
//! `n = ceil(distance / pixels_per_step)` clamped to `[min_steps, max_steps]`.
//! The start point itself is not emitted (the pointer is already there); the
//! last sample is always exactly `end`.
//!
//! Elevation is interpolated from the start's elevation down to the end's,
//! so with the engine's 255 → 0 convention it descends as the pointer
//! approaches the target.
//!
//! # Delay profile
//!
//! The delay for a sample is `step_delay_ms` scaled by
//! `0.5 + |2 * (z / 255) - 1|`: 1.5× at either end of the path and 0.5× in
//! the middle, so the pointer starts slowly, speeds up, then settles.  The
//! result is expressed in the engine's provider units
//! ([`DEFAULT_TIMING_DIVISOR`] units per millisecond).

use std::time::Duration;

use pointer_core::{Vector3, LIFTED_ELEVATION};

use crate::application::input_engine::DEFAULT_TIMING_DIVISOR;
use crate::application::ports::PathTimingProvider;
use crate::infrastructure::storage::config::PathConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct LinearPathProvider {
    pixels_per_step: u32,
    min_steps: u32,
    max_steps: u32,
    step_delay_ms: f64,
    press_duration: Duration,
}

impl Default for LinearPathProvider {
    fn default() -> Self {
        Self::from_config(&PathConfig::default())
    }
}

impl LinearPathProvider {
    pub fn from_config(config: &PathConfig) -> Self {
        let min_steps = config.min_steps.max(1);
        Self {
            pixels_per_step: config.pixels_per_step.max(1),
            min_steps,
            max_steps: config.max_steps.max(min_steps),
            step_delay_ms: config.step_delay_ms.max(0.0),
            press_duration: Duration::from_millis(config.press_duration_ms),
        }
    }

    /// Number of samples for a path between the two points.
    pub fn step_count(&self, start: Vector3, end: Vector3) -> u32 {
        let distance = start.to_point().distance(end.to_point());
        let raw = (distance / f64::from(self.pixels_per_step)).ceil();
        (raw.min(f64::from(u32::MAX)) as u32).clamp(self.min_steps, self.max_steps)
    }
}

fn lerp(from: i32, to: i32, t: f64) -> i32 {
    (f64::from(from) + (f64::from(to) - f64::from(from)) * t).round() as i32
}

impl PathTimingProvider for LinearPathProvider {
    fn path(&self, start: Vector3, end: Vector3) -> Vec<Vector3> {
        if start.to_point() == end.to_point() {
            return vec![end];
        }
        let steps = self.step_count(start, end);
        (1..=steps)
            .map(|i| {
                if i == steps {
                    return end;
                }
                let t = f64::from(i) / f64::from(steps);
                Vector3::new(
                    lerp(start.x, end.x, t),
                    lerp(start.y, end.y, t),
                    lerp(start.z, end.z, t),
                )
            })
            .collect()
    }

    fn press_duration(&self) -> Duration {
        self.press_duration
    }

    fn absolute_delay(&self, elevation: i32) -> f64 {
        let lift = f64::from(elevation.clamp(0, LIFTED_ELEVATION)) / f64::from(LIFTED_ELEVATION);
        let ease = 0.5 + (2.0 * lift - 1.0).abs();
        self.step_delay_ms * ease * DEFAULT_TIMING_DIVISOR
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
