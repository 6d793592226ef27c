//! Targeting capabilities.
//!
//! A [`Targetable`] tells the engine *where* to aim on each attempt; a
//! [`Filter`] decides whether the spot the pointer landed on is acceptable.
//! Keeping them separate lets a caller aim at a moving object while accepting
//! any landing inside a tolerance window.

use super::geometry::{Point, Region};

/// Something the pointer can be moved onto.
///
/// `next_point` is called once per attempt, so a target that moves between
/// attempts is followed.  `None` means "no valid point right now"; the engine
/// skips the attempt instead of failing the whole call.
///
/// `contains` must be pure and agree with `next_point` for the same logical
/// target.
pub trait Targetable: Send + Sync {
    fn next_point(&self) -> Option<Point>;

    fn contains(&self, point: Point) -> bool;
}

/// Accepts or rejects a candidate value.  Must be pure.
pub trait Filter<T: ?Sized>: Send + Sync {
    fn accept(&self, value: &T) -> bool;
}

impl<T: ?Sized, F> Filter<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    fn accept(&self, value: &T) -> bool {
        self(value)
    }
}

/// A static target: always yields the same point and contains only that point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedTarget(pub Point);

impl Targetable for FixedTarget {
    fn next_point(&self) -> Option<Point> {
        Some(self.0)
    }

    fn contains(&self, point: Point) -> bool {
        self.0 == point
    }
}

/// A target built from two closures, for targets that move between attempts.
pub struct FnTarget<N, C> {
    next: N,
    contains: C,
}

impl<N, C> FnTarget<N, C>
where
    N: Fn() -> Option<Point> + Send + Sync,
    C: Fn(Point) -> bool + Send + Sync,
{
    pub fn new(next: N, contains: C) -> Self {
        Self { next, contains }
    }
}

impl<N, C> Targetable for FnTarget<N, C>
where
    N: Fn() -> Option<Point> + Send + Sync,
    C: Fn(Point) -> bool + Send + Sync,
{
    fn next_point(&self) -> Option<Point> {
        (self.next)()
    }

    fn contains(&self, point: Point) -> bool {
        (self.contains)(point)
    }
}

/// A region aims at its centre; an empty region has nothing to aim at.
impl Targetable for Region {
    fn next_point(&self) -> Option<Point> {
        self.center()
    }

    fn contains(&self, point: Point) -> bool {
        Region::contains(self, point)
    }
}

/// Ready-made point filters.
pub mod filter {
    use super::{Filter, Point};

    /// Accepts only `target` itself.
    pub fn exact(target: Point) -> impl Filter<Point> {
        move |p: &Point| *p == target
    }

    /// Accepts any point within `tolerance` pixels of `target` on both axes.
    pub fn within(target: Point, tolerance: u32) -> impl Filter<Point> {
        move |p: &Point| p.chebyshev_distance(target) <= tolerance
    }

    /// Accepts every point.
    pub fn any() -> impl Filter<Point> {
        |_: &Point| true
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
