//! In-memory surface for tests and the headless demo.
//!
//! # Why a mock surface?
//!
//! A real surface binding injects OS events, which needs a desktop session
//! and moves the real cursor.  `MockSurface` keeps the pointer position in
//! memory and appends every accepted event to an ordered log, so assertions
//! can inspect exactly what the engine emitted and in what order.
//!
//! # Misbehaving surfaces
//!
//! The public flags below are set before wrapping the surface in an `Arc`:
//!
//! - `ignore_moves` – every `set_position` is dropped and returns `false`.
//! - `ignored_points` – positions in this list are dropped silently.
//! - `clamp_to_bounds` – positions outside `size` are clamped to the edge.
//! - `reject_buttons` – every press and release returns `false`.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Mutex,
};
use std::time::Instant;

use pointer_core::{MouseButton, Point, ScrollDirection, Size};

use crate::application::ports::SurfaceBinding;

/// One accepted event, in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    Move(Point),
    Press(MouseButton),
    Release(MouseButton),
    Scroll(ScrollDirection),
    Text(String),
}

#[derive(Debug, Default)]
struct PressState {
    position: Point,
    at: Option<Instant>,
}

/// A surface that records instead of injecting.
#[derive(Debug)]
pub struct MockSurface {
    position: Mutex<Point>,
    press: Mutex<PressState>,
    events: Mutex<Vec<SurfaceEvent>>,
    focused: AtomicBool,
    /// Reported by `size()` and used by `clamp_to_bounds`.
    pub size: Size,
    pub ignore_moves: bool,
    pub ignored_points: Vec<Point>,
    pub clamp_to_bounds: bool,
    pub reject_buttons: bool,
}

impl Default for MockSurface {
    fn default() -> Self {
        Self::with_size(Size::new(1920, 1080))
    }
}

impl MockSurface {
    /// A 1920×1080 surface with the pointer at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(size: Size) -> Self {
        Self {
            position: Mutex::new(Point::default()),
            press: Mutex::new(PressState::default()),
            events: Mutex::new(Vec::new()),
            focused: AtomicBool::new(false),
            size,
            ignore_moves: false,
            ignored_points: Vec::new(),
            clamp_to_bounds: false,
            reject_buttons: false,
        }
    }

    /// Places the pointer without recording an event.
    pub fn starting_at(self, point: Point) -> Self {
        *self.position.lock().unwrap() = point;
        self
    }

    /// Every accepted event so far.
    pub fn events(&self) -> Vec<SurfaceEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Accepted positions only.
    pub fn moves(&self) -> Vec<Point> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter_map(|e| match e {
                SurfaceEvent::Move(p) => Some(*p),
                _ => None,
            })
            .collect()
    }

    /// Concatenation of every text sent.
    pub fn typed_text(&self) -> String {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter_map(|e| match e {
                SurfaceEvent::Text(t) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn is_focused(&self) -> bool {
        self.focused.load(Ordering::SeqCst)
    }

    fn record(&self, event: SurfaceEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl SurfaceBinding for MockSurface {
    fn position(&self) -> Point {
        *self.position.lock().unwrap()
    }

    fn press_position(&self) -> Point {
        self.press.lock().unwrap().position
    }

    fn press_timestamp(&self) -> Option<Instant> {
        self.press.lock().unwrap().at
    }

    fn set_position(&self, point: Point) -> bool {
        if self.ignore_moves || self.ignored_points.contains(&point) {
            return false;
        }
        let point = if self.clamp_to_bounds {
            self.size.clamp(point)
        } else {
            point
        };
        *self.position.lock().unwrap() = point;
        self.record(SurfaceEvent::Move(point));
        true
    }

    fn press(&self, button: MouseButton) -> bool {
        if self.reject_buttons {
            return false;
        }
        {
            let mut press = self.press.lock().unwrap();
            press.position = self.position();
            press.at = Some(Instant::now());
        }
        self.record(SurfaceEvent::Press(button));
        true
    }

    fn release(&self, button: MouseButton) -> bool {
        if self.reject_buttons {
            return false;
        }
        self.record(SurfaceEvent::Release(button));
        true
    }

    fn scroll(&self, direction: ScrollDirection) -> bool {
        self.record(SurfaceEvent::Scroll(direction));
        true
    }

    fn send_text(&self, text: &str) -> bool {
        self.record(SurfaceEvent::Text(text.to_string()));
        true
    }

    fn size(&self) -> Size {
        self.size
    }

    fn focus(&self) {
        self.focused.store(true, Ordering::SeqCst);
    }

    fn defocus(&self) {
        self.focused.store(false, Ordering::SeqCst);
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
