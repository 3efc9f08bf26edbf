use super::*;

fn release(distance_y: f32, velocity_y: f32) -> ReleaseSnapshot {
    ReleaseSnapshot {
        distance_y,
        velocity_y,
        surface_height: 1000.0,
        threshold_height: 1000.0,
        flick_threshold_slop: 0.3,
        maximum_fling_velocity: 8000.0,
    }
}

#[test]
fn distance_below_threshold_snaps_back() {
    assert_eq!(decide(&release(200.0, 0.0)), GestureOutcome::SnappedBack);
    // Threshold itself is not enough.
    assert_eq!(decide(&release(300.0, 0.0)), GestureOutcome::SnappedBack);
}

#[test]
fn distance_past_threshold_dismisses_in_drag_direction() {
    assert_eq!(
        decide(&release(400.0, 0.0)),
        GestureOutcome::Dismissed {
            duration_ms: 200,
            direction: ThrowDirection::Down,
        }
    );
    assert_eq!(
        decide(&release(-301.0, 0.0)),
        GestureOutcome::Dismissed {
            duration_ms: 200,
            direction: ThrowDirection::Up,
        }
    );
}

#[test]
fn fast_short_drag_is_a_fling() {
    assert_eq!(
        decide(&release(-150.0, -2500.0)),
        GestureOutcome::Dismissed {
            duration_ms: 100,
            direction: ThrowDirection::Up,
        }
    );
}

#[test]
fn fling_requires_velocity_above_ratio() {
    assert_eq!(decide(&release(150.0, 600.0)), GestureOutcome::SnappedBack);
    assert!(decide(&release(150.0, 601.0)).is_dismissed());
}

#[test]
fn fling_requires_minimum_distance() {
    assert_eq!(decide(&release(99.0, 3000.0)), GestureOutcome::SnappedBack);
    assert!(decide(&release(100.0, 3000.0)).is_dismissed());
}

#[test]
fn velocity_ceiling_excludes_instead_of_clamping() {
    assert_eq!(decide(&release(150.0, 8000.0)), GestureOutcome::SnappedBack);
    assert_eq!(decide(&release(150.0, 50_000.0)), GestureOutcome::SnappedBack);
    assert!(decide(&release(150.0, 7999.0)).is_dismissed());
}

#[test]
fn threshold_uses_content_height_and_fling_uses_surface_height() {
    let small_content = ReleaseSnapshot {
        threshold_height: 400.0,
        ..release(130.0, 0.0)
    };
    // 130 > 400 * 0.3
    assert!(decide(&small_content).is_dismissed());

    let short_surface = ReleaseSnapshot {
        surface_height: 500.0,
        ..release(60.0, 400.0)
    };
    // 400 > 500 * 0.6 and 60 >= 500 * 0.1
    assert!(decide(&short_surface).is_dismissed());
    assert_eq!(decide(&release(60.0, 400.0)), GestureOutcome::SnappedBack);
}

#[test]
fn zero_slop_dismisses_any_vertical_release() {
    let release = ReleaseSnapshot {
        flick_threshold_slop: 0.0,
        ..release(1.0, 0.0)
    };
    assert!(decide(&release).is_dismissed());
}

#[test]
fn zero_distance_throws_upwards() {
    assert_eq!(ThrowDirection::from_distance(0.0), ThrowDirection::Up);
    assert_eq!(ThrowDirection::Down.signum(), 1.0);
}
