use super::*;

use flick::{GestureOutcome, Point, Size, ThrowDirection};

#[test]
fn robot_reports_slow_drag_snap_back() {
    let mut robot = GestureRobot::launch(Size::new(400.0, 800.0));
    let outcome = robot.slow_drag(300.0, 200.0, 300.0);

    assert_eq!(outcome, Some(GestureOutcome::SnappedBack));
    assert!(robot.is_animating());
    let frames = robot.pump_until_idle(60);
    assert!(frames > 0 && frames < 60);
    assert!(robot.layer().is_at_rest());
    assert_eq!(robot.callbacks().move_starts(), 1);
    assert_eq!(robot.callbacks().last_move_ratio(), Some(0.0));
}

#[test]
fn robot_drag_interpolates_positions() {
    let mut robot = GestureRobot::launch(Size::new(400.0, 800.0));
    robot.set_event_interval(200);
    let outcome = robot.drag(Point::new(100.0, 100.0), Point::new(100.0, 500.0), 4);

    assert_eq!(
        outcome,
        Some(GestureOutcome::Dismissed {
            duration_ms: 200,
            direction: ThrowDirection::Down,
        })
    );
    assert_eq!(robot.callbacks().move_ratios().len(), 4);
    assert_eq!(robot.uptime_millis(), 1000);
}

#[test]
fn recording_keeps_order_and_clears() {
    let callbacks = RecordingCallbacks::new();
    flick::FlickCallbacks::on_move_start(&callbacks);
    flick::FlickCallbacks::on_move(&callbacks, 0.5);
    flick::FlickCallbacks::on_flick_dismiss(&callbacks, 100);

    assert_eq!(
        callbacks.events(),
        vec![FlickEvent::MoveStart, FlickEvent::Move(0.5), FlickEvent::Dismiss(100)]
    );
    assert_eq!(callbacks.dismissals(), vec![100]);

    callbacks.clear();
    assert!(callbacks.events().is_empty());
}

#[test]
fn robot_reports_whether_recognizer_claimed_event() {
    let mut robot = GestureRobot::launch(Size::new(400.0, 800.0));
    assert!(!robot.press(200.0, 100.0));
    assert!(!robot.move_to(300.0, 110.0));
    assert!(!robot.release(300.0, 110.0));

    assert!(!robot.press(200.0, 100.0));
    assert!(robot.move_to(200.0, 300.0));
}
