//! Release-time classification of a vertical drag.

use crate::config::{
    DEFAULT_ANIMATION_DURATION_MS, FLING_ANIMATION_DURATION_MS, FLING_VELOCITY_RATIO,
    MIN_FLING_DISTANCE_RATIO,
};

/// Direction the surface is thrown on dismissal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThrowDirection {
    Up,
    Down,
}

impl ThrowDirection {
    /// Only strictly positive distances throw downwards.
    pub fn from_distance(distance_y: f32) -> Self {
        if distance_y > 0.0 {
            ThrowDirection::Down
        } else {
            ThrowDirection::Up
        }
    }

    pub fn signum(self) -> f32 {
        match self {
            ThrowDirection::Up => -1.0,
            ThrowDirection::Down => 1.0,
        }
    }
}

/// Result of a completed drag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureOutcome {
    /// The drag never became a vertical flick.
    Ignored,
    SnappedBack,
    Dismissed {
        duration_ms: u64,
        direction: ThrowDirection,
    },
}

impl GestureOutcome {
    pub fn is_dismissed(&self) -> bool {
        matches!(self, GestureOutcome::Dismissed { .. })
    }
}

/// Measurements taken when the finger lifts from a vertical drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReleaseSnapshot {
    /// Signed vertical distance from pointer-down.
    pub distance_y: f32,
    /// Tracked vertical velocity, px/s.
    pub velocity_y: f32,
    pub surface_height: f32,
    /// Content height the flick threshold is measured against.
    pub threshold_height: f32,
    pub flick_threshold_slop: f32,
    pub maximum_fling_velocity: f32,
}

impl ReleaseSnapshot {
    pub fn flick_threshold(&self) -> f32 {
        self.threshold_height * self.flick_threshold_slop
    }

    pub fn is_flick(&self) -> bool {
        self.distance_y.abs() > self.flick_threshold()
    }

    /// Fast enough, short enough to trust, and long enough to be deliberate.
    /// Velocities at or above the ceiling are treated as tracking noise.
    pub fn is_fling(&self) -> bool {
        let velocity = self.velocity_y.abs();
        let required_velocity = self.surface_height * FLING_VELOCITY_RATIO;
        let min_distance = self.surface_height * MIN_FLING_DISTANCE_RATIO;
        velocity > required_velocity
            && velocity < self.maximum_fling_velocity
            && self.distance_y.abs() >= min_distance
    }
}

/// Chooses between dismissing and snapping back.
pub fn decide(release: &ReleaseSnapshot) -> GestureOutcome {
    let direction = ThrowDirection::from_distance(release.distance_y);
    if release.is_flick() {
        GestureOutcome::Dismissed {
            duration_ms: DEFAULT_ANIMATION_DURATION_MS,
            direction,
        }
    } else if release.is_fling() {
        GestureOutcome::Dismissed {
            duration_ms: FLING_ANIMATION_DURATION_MS,
            direction,
        }
    } else {
        GestureOutcome::SnappedBack
    }
}

#[cfg(test)]
#[path = "tests/decision_tests.rs"]
mod tests;
