//! Integration tests for the input engine.
//!
//! These tests drive `InputEngine` end-to-end against the in-memory
//! `MockSurface`, the `LinearPathProvider` or a scripted provider, and the
//! `RecordingSleeper` so that no test waits on a real timer.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};
use std::time::Duration;

use pointer_core::{filter, FnTarget, MouseButton, Point, Region, Size, Vector3};
use pointer_engine::infrastructure::{
    path_timing::LinearPathProvider,
    sleep::{mock::RecordingSleeper, CancelSignal, TokioSleeper},
    surface::{MockSurface, SurfaceEvent},
};
use pointer_engine::{
    ButtonPolicy, EngineError, EngineSettings, InputControl, InputEngine, PathTimingProvider,
    Sleeper, SurfaceBinding,
};

/// Provider units for a 10ms delay at full speed.
const TEN_MS: f64 = 13.3e6;

/// Returns a fixed list of samples ending on the requested end point.
struct ScriptedProvider {
    via: Vec<Point>,
}

impl PathTimingProvider for ScriptedProvider {
    fn path(&self, _start: Vector3, end: Vector3) -> Vec<Vector3> {
        let mut samples: Vec<Vector3> = self
            .via
            .iter()
            .map(|p| Vector3::new(p.x, p.y, 128))
            .collect();
        samples.push(end);
        samples
    }

    fn press_duration(&self) -> Duration {
        Duration::from_millis(50)
    }

    fn absolute_delay(&self, _elevation: i32) -> f64 {
        TEN_MS
    }
}

fn scripted(via: &[(i32, i32)]) -> Arc<ScriptedProvider> {
    Arc::new(ScriptedProvider {
        via: via.iter().map(|&p| Point::from(p)).collect(),
    })
}

fn engine(
    surface: &Arc<MockSurface>,
    provider: Arc<dyn PathTimingProvider>,
    sleeper: &Arc<RecordingSleeper>,
) -> InputEngine {
    InputEngine::new(
        Arc::clone(surface) as Arc<dyn SurfaceBinding>,
        provider,
        Arc::clone(sleeper) as Arc<dyn Sleeper>,
    )
}

// ── Movement ──────────────────────────────────────────────────────────────────

#[test]
fn test_move_walks_scripted_path_and_lands() {
    // Arrange
    let surface = Arc::new(MockSurface::new());
    let sleeper = Arc::new(RecordingSleeper::new());
    let engine = engine(&surface, scripted(&[(30, 60), (70, 140)]), &sleeper);

    // Act
    let landed = tokio_test::block_on(engine.move_to(Point::new(100, 200)));

    // Assert
    assert_eq!(landed, Ok(true));
    assert_eq!(
        surface.moves(),
        vec![Point::new(30, 60), Point::new(70, 140), Point::new(100, 200)]
    );
    assert_eq!(sleeper.recorded(), vec![Duration::from_millis(10); 3]);
    assert_eq!(engine.position(), Point::new(100, 200));
}

#[test]
fn test_linear_provider_move_ends_on_target() {
    let surface = Arc::new(MockSurface::new());
    let sleeper = Arc::new(RecordingSleeper::new());
    let engine = engine(&surface, Arc::new(LinearPathProvider::default()), &sleeper);

    let landed = tokio_test::block_on(engine.move_to(Point::new(640, 360)));

    assert_eq!(landed, Ok(true));
    assert_eq!(surface.moves().last(), Some(&Point::new(640, 360)));
    assert!(surface.moves().len() >= 4, "a long move takes several samples");
    assert!(!sleeper.recorded().is_empty());
}

#[test]
fn test_repeated_move_to_same_point_is_stable() {
    let surface = Arc::new(MockSurface::new());
    let sleeper = Arc::new(RecordingSleeper::new());
    let engine = engine(&surface, Arc::new(LinearPathProvider::default()), &sleeper);
    let target = Point::new(250, 75);

    let first = tokio_test::block_on(engine.move_to(target));
    let after_first = engine.position();
    let second = tokio_test::block_on(engine.move_to(target));

    assert_eq!(first, Ok(true));
    assert_eq!(second, Ok(true));
    assert_eq!(after_first, engine.position());
}

#[test]
fn test_surface_dropping_final_point_exhausts_attempts() {
    // Arrange
    let mut mock = MockSurface::new();
    mock.ignored_points = vec![Point::new(100, 200)];
    let surface = Arc::new(mock);
    let sleeper = Arc::new(RecordingSleeper::new());
    let engine = engine(&surface, scripted(&[(50, 100)]), &sleeper);

    // Act
    let landed = tokio_test::block_on(engine.move_to(Point::new(100, 200)));

    // Assert – one intermediate move per attempt, never the target
    assert_eq!(landed, Ok(false));
    assert_eq!(surface.moves(), vec![Point::new(50, 100); 3]);
    assert_eq!(sleeper.recorded().len(), 6);
}

#[test]
fn test_clamping_surface_fails_out_of_bounds_target() {
    let mut mock = MockSurface::with_size(Size::new(800, 600));
    mock.clamp_to_bounds = true;
    let surface = Arc::new(mock);
    let sleeper = Arc::new(RecordingSleeper::new());
    let engine = engine(&surface, scripted(&[]), &sleeper);

    let landed = tokio_test::block_on(engine.move_to(Point::new(1000, 100)));

    assert_eq!(landed, Ok(false));
    assert_eq!(engine.position(), Point::new(799, 100));
}

#[test]
fn test_none_marker_samples_never_reach_the_surface() {
    let surface = Arc::new(MockSurface::new());
    let sleeper = Arc::new(RecordingSleeper::new());
    let engine = engine(&surface, scripted(&[(-1, -1), (20, 20), (-1, 40)]), &sleeper);

    let landed = tokio_test::block_on(engine.move_to(Point::new(40, 40)));

    assert_eq!(landed, Ok(true));
    assert_eq!(surface.moves(), vec![Point::new(20, 20), Point::new(40, 40)]);
    assert_eq!(sleeper.recorded().len(), 2);
}

#[test]
fn test_region_target_with_filter() {
    // Arrange – aim at the centre of a region, accept anything inside it
    let surface = Arc::new(MockSurface::new());
    let sleeper = Arc::new(RecordingSleeper::new());
    let engine = engine(&surface, Arc::new(LinearPathProvider::default()), &sleeper);
    let region = Region::new(100, 100, 50, 50);
    let inside = move |p: &Point| region.contains(*p);

    // Act
    let landed = tokio_test::block_on(engine.apply(&region, &inside));

    // Assert
    assert_eq!(landed, Ok(true));
    assert_eq!(engine.position(), Point::new(125, 125));
}

#[test]
fn test_marker_aim_point_consumes_no_path() {
    // Arrange – a legacy target reporting "no point" as (-1, -1)
    let surface = Arc::new(MockSurface::new().starting_at(Point::new(8, 8)));
    let sleeper = Arc::new(RecordingSleeper::new());
    let engine = engine(&surface, scripted(&[(4, 4)]), &sleeper);
    let legacy = FnTarget::new(|| Some(Point::NONE), |_| false);

    // Act
    let landed = tokio_test::block_on(engine.apply(&legacy, &filter::any()));

    // Assert
    assert_eq!(landed, Ok(false));
    assert!(surface.events().is_empty());
    assert!(sleeper.recorded().is_empty());
    assert_eq!(engine.position(), Point::new(8, 8));
}

#[test]
fn test_moving_target_is_followed_across_attempts() {
    // Arrange – the target shifts after the surface swallows the first landing
    let mut mock = MockSurface::new();
    mock.ignored_points = vec![Point::new(60, 60)];
    let surface = Arc::new(mock);
    let sleeper = Arc::new(RecordingSleeper::new());
    let engine = engine(&surface, scripted(&[]), &sleeper);
    let queries = AtomicUsize::new(0);
    let target = FnTarget::new(
        || Some(Point::new(60 + 10 * queries.fetch_add(1, Ordering::SeqCst) as i32, 60)),
        |p: Point| p.y == 60,
    );

    // Act
    let landed = tokio_test::block_on(engine.apply(&target, &filter::any()));

    // Assert
    assert_eq!(landed, Ok(true));
    assert_eq!(queries.load(Ordering::SeqCst), 2);
    assert_eq!(engine.position(), Point::new(70, 60));
}

#[test]
fn test_within_filter_rejects_far_target() {
    let surface = Arc::new(MockSurface::new());
    let sleeper = Arc::new(RecordingSleeper::new());
    let engine = engine(&surface, scripted(&[]), &sleeper);
    let target = pointer_core::FixedTarget(Point::new(300, 300));

    let landed =
        tokio_test::block_on(engine.apply(&target, &filter::within(Point::new(0, 0), 5)));

    assert_eq!(landed, Ok(false));
}

// ── Speed ─────────────────────────────────────────────────────────────────────

#[test]
fn test_speed_change_mid_walk_applies_to_later_samples() {
    // Arrange – drop to 50% after the second delay
    let control = InputControl::new();
    let hook_control = control.clone();
    let sleeper = Arc::new(RecordingSleeper::new().with_hook(move |index| {
        if index == 1 {
            hook_control.set_speed(50);
        }
    }));
    let surface = Arc::new(MockSurface::new());
    let engine = engine(
        &surface,
        scripted(&[(10, 10), (20, 20), (30, 30)]),
        &sleeper,
    )
    .with_control(control);

    // Act
    let landed = tokio_test::block_on(engine.move_to(Point::new(40, 40)));

    // Assert
    assert_eq!(landed, Ok(true));
    assert_eq!(
        sleeper.recorded(),
        vec![
            Duration::from_millis(10),
            Duration::from_millis(10),
            Duration::from_millis(5),
            Duration::from_millis(5),
        ]
    );
    assert_eq!(engine.speed(), 50);
}

#[test]
fn test_engines_do_not_share_speed() {
    let surface = Arc::new(MockSurface::new());
    let sleeper = Arc::new(RecordingSleeper::new());
    let a = engine(&surface, scripted(&[]), &sleeper);
    let b = engine(&surface, scripted(&[]), &sleeper);

    a.set_speed(20);

    assert_eq!(a.speed(), 20);
    assert_eq!(b.speed(), 100);
    assert_ne!(a.id(), b.id());
}

// ── Cancellation ──────────────────────────────────────────────────────────────

#[test]
fn test_cancellation_mid_walk_stops_all_attempts() {
    // Arrange
    let surface = Arc::new(MockSurface::new());
    let sleeper = Arc::new(RecordingSleeper::cancelling_after(2));
    let engine = engine(
        &surface,
        scripted(&[(10, 10), (20, 20), (30, 30), (40, 40)]),
        &sleeper,
    );

    // Act
    let result = tokio_test::block_on(engine.move_to(Point::new(50, 50)));

    // Assert – third hop happened, its delay was cancelled, nothing after
    assert_eq!(result, Err(EngineError::Cancelled));
    assert_eq!(
        surface.moves(),
        vec![Point::new(10, 10), Point::new(20, 20), Point::new(30, 30)]
    );
}

#[tokio::test]
async fn test_cancelled_tokio_sleeper_fails_move_immediately() {
    let cancel = CancelSignal::new();
    let surface = Arc::new(MockSurface::new());
    let engine = InputEngine::new(
        Arc::clone(&surface) as Arc<dyn SurfaceBinding>,
        Arc::new(LinearPathProvider::default()),
        Arc::new(TokioSleeper::new(cancel.clone())),
    );

    cancel.cancel();
    let result = engine.move_to(Point::new(500, 500)).await;

    assert_eq!(result, Err(EngineError::Cancelled));
    assert_eq!(surface.moves().len(), 1);
}

// ── Buttons ───────────────────────────────────────────────────────────────────

#[test]
fn test_click_at_moves_then_presses_and_releases() {
    let surface = Arc::new(MockSurface::new());
    let sleeper = Arc::new(RecordingSleeper::new());
    let engine = engine(&surface, scripted(&[]), &sleeper);

    let clicked = tokio_test::block_on(engine.click_at_primary(Point::new(15, 25), true));

    assert_eq!(clicked, Ok(true));
    assert_eq!(
        surface.events(),
        vec![
            SurfaceEvent::Move(Point::new(15, 25)),
            SurfaceEvent::Press(MouseButton::Left),
            SurfaceEvent::Release(MouseButton::Left),
        ]
    );
    assert_eq!(engine.press_position(), Point::new(15, 25));
    assert!(engine.press_timestamp().is_some());
    assert_eq!(
        sleeper.recorded(),
        vec![
            Duration::from_millis(10),
            Duration::from_millis(50),
            Duration::from_millis(50),
        ]
    );
}

#[test]
fn test_drag_holds_button_across_the_walk() {
    let surface = Arc::new(MockSurface::new().starting_at(Point::new(5, 5)));
    let sleeper = Arc::new(RecordingSleeper::new());
    let engine = engine(&surface, scripted(&[(50, 50)]), &sleeper);

    let dragged = tokio_test::block_on(engine.drag_primary(Point::new(100, 100), false));

    assert_eq!(dragged, Ok(true));
    assert_eq!(
        surface.events(),
        vec![
            SurfaceEvent::Press(MouseButton::Right),
            SurfaceEvent::Move(Point::new(50, 50)),
            SurfaceEvent::Move(Point::new(100, 100)),
            SurfaceEvent::Release(MouseButton::Right),
        ]
    );
    assert_eq!(engine.press_position(), Point::new(5, 5));
}

#[test]
fn test_button_policy_decides_rejected_click_outcome() {
    let mut mock = MockSurface::new();
    mock.reject_buttons = true;
    let surface = Arc::new(mock);
    let sleeper = Arc::new(RecordingSleeper::new());

    let permissive = engine(&surface, scripted(&[]), &sleeper);
    let strict = engine(&surface, scripted(&[]), &sleeper).with_settings(EngineSettings {
        button_policy: ButtonPolicy::Strict,
        ..EngineSettings::default()
    });

    assert_eq!(tokio_test::block_on(permissive.click(MouseButton::Left)), Ok(true));
    assert_eq!(tokio_test::block_on(strict.click(MouseButton::Left)), Ok(false));
}

// ── Scroll / text / focus ─────────────────────────────────────────────────────

#[test]
fn test_text_scroll_and_focus_pass_through() {
    let surface = Arc::new(MockSurface::with_size(Size::new(1024, 768)));
    let sleeper = Arc::new(RecordingSleeper::new());
    let engine = engine(&surface, scripted(&[]), &sleeper);

    engine.focus();
    assert!(surface.is_focused());
    assert!(engine.send("abc"));
    assert!(engine.sendln("def"));
    assert!(engine.scroll());
    engine.defocus();

    assert!(!surface.is_focused());
    assert_eq!(surface.typed_text(), "abcdef\n");
    assert_eq!(engine.component_size(), Size::new(1024, 768));
    assert!(sleeper.recorded().is_empty(), "pass-through calls never sleep");
}
