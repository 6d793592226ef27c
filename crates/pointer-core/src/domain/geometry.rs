//! Surface geometry and path samples.
//!
//! All coordinates are integer pixels in the target component's local
//! coordinate space, with (0, 0) at the top-left corner.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Elevation of the first sample of a path: the pointer is "lifted".
pub const LIFTED_ELEVATION: i32 = 255;

/// Elevation of the last sample of a path: the pointer is "grounded".
pub const GROUNDED_ELEVATION: i32 = 0;

/// Errors produced when parsing a [`Point`] from text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PointParseError {
    /// The text did not contain exactly one `,` separator.
    #[error("expected \"x,y\", got {0:?}")]
    Format(String),

    /// One of the two components was not a valid integer.
    #[error("invalid coordinate {0:?}")]
    Coordinate(String),
}

/// A 2D position on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Legacy "no point" value.  Path samples projecting to it are never sent
    /// to the surface.
    pub const NONE: Point = Point { x: -1, y: -1 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns `true` if either axis carries the `-1` "no point" marker.
    pub fn is_none_marker(&self) -> bool {
        self.x == -1 || self.y == -1
    }

    /// Chebyshev distance: the larger of the two axis distances.
    pub fn chebyshev_distance(&self, other: Point) -> u32 {
        let dx = (i64::from(self.x) - i64::from(other.x)).unsigned_abs();
        let dy = (i64::from(self.y) - i64::from(other.y)).unsigned_abs();
        dx.max(dy).min(u64::from(u32::MAX)) as u32
    }

    /// Euclidean distance as a float, used for step-count calculations.
    pub fn distance(&self, other: Point) -> f64 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        (dx * dx + dy * dy).sqrt()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl FromStr for Point {
    type Err = PointParseError;

    /// Parses `"x,y"`, tolerating whitespace around either component.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| PointParseError::Format(s.to_string()))?;
        if y.contains(',') {
            return Err(PointParseError::Format(s.to_string()));
        }
        let parse = |part: &str| {
            part.trim()
                .parse::<i32>()
                .map_err(|_| PointParseError::Coordinate(part.trim().to_string()))
        };
        Ok(Self::new(parse(x)?, parse(y)?))
    }
}

/// Width and height of the target component in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Clamps `point` into `[0, width - 1] x [0, height - 1]`.
    ///
    /// An empty size clamps every point to the origin.
    pub fn clamp(&self, point: Point) -> Point {
        let max_x = (self.width.saturating_sub(1)).min(i32::MAX as u32) as i32;
        let max_y = (self.height.saturating_sub(1)).min(i32::MAX as u32) as i32;
        Point::new(point.x.clamp(0, max_x), point.y.clamp(0, max_y))
    }
}

/// A rectangular region of the surface.
///
/// The left and top edges are inside the region, the right and bottom edges
/// are not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Region {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Returns the rightmost X coordinate (exclusive).
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width.min(i32::MAX as u32) as i32)
    }

    /// Returns the bottommost Y coordinate (exclusive).
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height.min(i32::MAX as u32) as i32)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// The centre pixel, or `None` for an empty region.
    pub fn center(&self) -> Option<Point> {
        if self.is_empty() {
            return None;
        }
        let cx = i64::from(self.x) + i64::from(self.width / 2);
        let cy = i64::from(self.y) + i64::from(self.height / 2);
        Some(Point::new(
            cx.min(i64::from(i32::MAX)) as i32,
            cy.min(i64::from(i32::MAX)) as i32,
        ))
    }
}

/// A single path sample.
///
/// `x` and `y` are surface coordinates; `z` is a synthetic elevation that the
/// path provider maps to a delay.  It never reaches the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Vector3 {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Path start: the given point at [`LIFTED_ELEVATION`].
    pub const fn lifted(point: Point) -> Self {
        Self::new(point.x, point.y, LIFTED_ELEVATION)
    }

    /// Path end: the given point at [`GROUNDED_ELEVATION`].
    pub const fn grounded(point: Point) -> Self {
        Self::new(point.x, point.y, GROUNDED_ELEVATION)
    }

    /// Projects onto the surface plane, dropping the elevation.
    pub const fn to_point(self) -> Point {
        Point::new(self.x, self.y)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
