use super::*;

use std::cell::{Cell, RefCell};

use flick_core::Runtime;
use flick_ui_graphics::{Size, TransformOrigin};

use crate::content_size::FixedContentSize;

const FRAME_NANOS: u64 = 16_666_667;

/// Records callbacks and checks every reported ratio against the surface.
struct Recorder {
    surface: Rc<Surface>,
    ratios: RefCell<Vec<f32>>,
    mismatched_ratios: Cell<usize>,
    dismissals: RefCell<Vec<u64>>,
}

impl Recorder {
    fn new(surface: &Rc<Surface>) -> Rc<Self> {
        Rc::new(Self {
            surface: Rc::clone(surface),
            ratios: RefCell::new(Vec::new()),
            mismatched_ratios: Cell::new(0),
            dismissals: RefCell::new(Vec::new()),
        })
    }
}

impl FlickCallbacks for Recorder {
    fn on_move(&self, move_ratio: f32) {
        let expected = self.surface.layer().translation_y / self.surface.height();
        if move_ratio != expected {
            self.mismatched_ratios.set(self.mismatched_ratios.get() + 1);
        }
        self.ratios.borrow_mut().push(move_ratio);
    }

    fn on_flick_dismiss(&self, flick_animation_duration_ms: u64) {
        self.dismissals.borrow_mut().push(flick_animation_duration_ms);
    }
}

struct Fixture {
    runtime: Runtime,
    surface: Rc<Surface>,
    recorder: Rc<Recorder>,
    animator: DismissAnimator,
    frame_time: Cell<u64>,
}

impl Fixture {
    fn new() -> Self {
        let runtime = Runtime::default();
        let surface = Rc::new(Surface::with_window_height(Size::new(500.0, 1000.0), 1200.0));
        let recorder = Recorder::new(&surface);
        let animator = DismissAnimator::new(
            Rc::clone(&surface),
            runtime.frame_clock(),
            Rc::new(FixedContentSize::uniform(800)),
            recorder.clone(),
        );
        Self {
            runtime,
            surface,
            recorder,
            animator,
            frame_time: Cell::new(0),
        }
    }

    fn drag_to(&self, translation_y: f32, rotation_z: f32) {
        self.surface.update_layer(|layer| {
            layer.translation_x = 12.0;
            layer.translation_y = translation_y;
            layer.rotation_z = rotation_z;
            layer.transform_origin = TransformOrigin::TOP_CENTER;
        });
    }

    fn frame(&self) {
        let time = self.frame_time.get() + FRAME_NANOS;
        self.frame_time.set(time);
        self.runtime.drain_frame_callbacks(time);
    }

    fn run_until_idle(&self) {
        for _ in 0..120 {
            if !self.runtime.has_frame_callbacks() {
                return;
            }
            self.frame();
        }
        panic!("animation did not settle");
    }
}

#[test]
fn throw_distance_covers_window_and_rotation() {
    assert_eq!(throw_distance(0.0, 500.0, 800, 1200.0), 1200.0);
    assert_eq!(throw_distance(0.0, 500.0, 1500, 1200.0), 1500.0);
    // sin(30deg) * 500 / 2 = 125
    assert_eq!(throw_distance(30.0, 500.0, 800, 1200.0), 1325.0);
    assert_eq!(throw_distance(-30.0, 500.0, 800, 1200.0), 1325.0);
}

#[test]
fn throw_distance_rounds_rotation_offset_up() {
    // sin(1deg) * 500 / 2 is about 4.36
    assert_eq!(throw_distance(1.0, 500.0, 0, 1000.0), 1005.0);
}

#[test]
fn snap_back_returns_to_rest_and_reports_ratios() {
    let fixture = Fixture::new();
    fixture.drag_to(250.0, 4.0);

    fixture.animator.run(GestureOutcome::SnappedBack);
    assert!(fixture.animator.is_running());
    fixture.run_until_idle();

    assert!(fixture.surface.layer().is_at_rest());
    assert_eq!(fixture.surface.layer().alpha, 1.0);
    assert_eq!(fixture.recorder.mismatched_ratios.get(), 0);
    let ratios = fixture.recorder.ratios.borrow();
    assert!(ratios.len() > 2);
    assert_eq!(ratios.first().copied(), Some(0.25));
    assert_eq!(ratios.last().copied(), Some(0.0));
    assert!(fixture.recorder.dismissals.borrow().is_empty());
}

#[test]
fn dismissal_notifies_when_launched() {
    let fixture = Fixture::new();
    fixture.drag_to(-350.0, 0.0);

    fixture.animator.run(GestureOutcome::Dismissed {
        duration_ms: 100,
        direction: ThrowDirection::Up,
    });
    assert_eq!(fixture.recorder.dismissals.borrow().as_slice(), &[100]);

    fixture.frame();
    assert_eq!(fixture.recorder.dismissals.borrow().len(), 1);

    fixture.run_until_idle();
    assert_eq!(fixture.recorder.dismissals.borrow().len(), 1);
    assert_eq!(fixture.surface.layer().translation_y, -1200.0);
    assert_eq!(fixture.surface.layer().translation_x, 12.0);
    assert_eq!(fixture.recorder.mismatched_ratios.get(), 0);
    assert_eq!(fixture.recorder.ratios.borrow().last().copied(), Some(-1.2));
}

#[test]
fn dismissal_accounts_for_rotation() {
    let fixture = Fixture::new();
    fixture.drag_to(400.0, 30.0);

    fixture.animator.animate_dismissal(ThrowDirection::Down, 200);
    fixture.run_until_idle();

    assert_eq!(fixture.surface.layer().translation_y, 1325.0);
    assert_eq!(fixture.surface.layer().rotation_z, 30.0);
}

#[test]
#[should_panic(expected = "top edge")]
fn dismissal_requires_top_edge_pivot() {
    let fixture = Fixture::new();
    fixture
        .surface
        .update_layer(|layer| layer.transform_origin = TransformOrigin::CENTER);
    fixture.animator.animate_dismissal(ThrowDirection::Down, 200);
}

#[test]
fn ignored_outcome_does_nothing() {
    let fixture = Fixture::new();
    fixture.drag_to(10.0, 1.0);
    fixture.animator.run(GestureOutcome::Ignored);
    assert!(!fixture.animator.is_running());
    assert!(!fixture.runtime.has_frame_callbacks());
}

#[test]
fn cancel_leaves_surface_mid_flight() {
    let fixture = Fixture::new();
    fixture.drag_to(500.0, 0.0);
    fixture.animator.animate_back_to_position();
    fixture.frame();
    fixture.frame();
    fixture.frame();

    fixture.animator.cancel();
    let frozen = fixture.surface.layer();
    assert!(!fixture.animator.is_running());
    assert!(frozen.translation_y > 0.0 && frozen.translation_y < 500.0);

    fixture.frame();
    assert_eq!(fixture.surface.layer(), frozen);
}

#[test]
fn new_transition_starts_from_current_layer() {
    let fixture = Fixture::new();
    fixture.drag_to(500.0, 0.0);
    fixture.animator.animate_back_to_position();
    fixture.frame();
    fixture.frame();

    // Finger grabbed the surface and moved it somewhere else.
    fixture.animator.cancel();
    fixture.drag_to(-100.0, -2.0);
    fixture.animator.animate_back_to_position();
    fixture.frame();

    assert_eq!(fixture.surface.layer().translation_y, -100.0);
    fixture.run_until_idle();
    assert!(fixture.surface.layer().is_at_rest());
}

#[test]
fn exit_fades_and_tilts_then_runs_end_action() {
    let fixture = Fixture::new();
    let ended = Rc::new(Cell::new(false));

    let ended_in_callback = Rc::clone(&ended);
    fixture
        .animator
        .animate_exit(move || ended_in_callback.set(true));
    fixture.run_until_idle();

    let layer = fixture.surface.layer();
    assert!(ended.get());
    assert_eq!(layer.alpha, 0.0);
    assert_eq!(layer.translation_y, 50.0);
    assert_eq!(layer.rotation_z, -2.0);
    assert!(fixture.recorder.ratios.borrow().is_empty());
}

#[test]
fn running_outcome_tracks_the_transition_in_flight() {
    let fixture = Fixture::new();
    assert_eq!(fixture.animator.running_outcome(), None);

    fixture.drag_to(300.0, 0.0);
    fixture.animator.run(GestureOutcome::SnappedBack);
    assert_eq!(
        fixture.animator.running_outcome(),
        Some(GestureOutcome::SnappedBack)
    );

    let throw = GestureOutcome::Dismissed {
        duration_ms: 150,
        direction: ThrowDirection::Down,
    };
    fixture.animator.run(throw);
    assert_eq!(fixture.animator.running_outcome(), Some(throw));

    fixture.animator.animate_exit(|| {});
    assert_eq!(fixture.animator.running_outcome(), None);

    fixture.run_until_idle();
    assert_eq!(fixture.animator.running_outcome(), None);
}

#[test]
fn cancelled_transition_is_no_longer_reported_running() {
    let fixture = Fixture::new();
    fixture.drag_to(300.0, 0.0);
    fixture.animator.run(GestureOutcome::SnappedBack);
    fixture.frame();

    fixture.animator.cancel();
    assert_eq!(fixture.animator.running_outcome(), None);
}

#[test]
fn resumed_dismissal_finishes_without_notifying_again() {
    let fixture = Fixture::new();
    fixture.drag_to(400.0, 0.0);
    let throw = GestureOutcome::Dismissed {
        duration_ms: 200,
        direction: ThrowDirection::Down,
    };
    fixture.animator.run(throw);
    fixture.frame();
    fixture.frame();
    fixture.animator.cancel();

    fixture.animator.resume(throw);
    fixture.run_until_idle();

    assert_eq!(fixture.recorder.dismissals.borrow().as_slice(), &[200]);
    assert_eq!(fixture.surface.layer().translation_y, 1200.0);
}

#[test]
fn resumed_snap_back_settles_at_rest() {
    let fixture = Fixture::new();
    fixture.drag_to(400.0, 3.0);
    fixture.animator.run(GestureOutcome::SnappedBack);
    fixture.frame();
    fixture.frame();
    fixture.animator.cancel();

    fixture.animator.resume(GestureOutcome::SnappedBack);
    fixture.run_until_idle();

    assert!(fixture.surface.layer().is_at_rest());
    assert!(fixture.recorder.dismissals.borrow().is_empty());
}
