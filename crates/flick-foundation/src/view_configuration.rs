use crate::gesture_constants::{DRAG_THRESHOLD, MAX_FLING_VELOCITY};

/// Platform gesture thresholds, already scaled to the surface's pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewConfiguration {
    /// Minimum movement in px before a drag direction is classified.
    pub touch_slop: f32,
    /// Fling velocities at or above this (px/s) are treated as noise.
    pub maximum_fling_velocity: f32,
}

impl ViewConfiguration {
    pub fn new(touch_slop: f32, maximum_fling_velocity: f32) -> Self {
        Self {
            touch_slop,
            maximum_fling_velocity,
        }
    }

    /// Default thresholds scaled by the display density (physical px per
    /// logical px).
    pub fn scaled(density: f32) -> Self {
        Self {
            touch_slop: DRAG_THRESHOLD * density,
            maximum_fling_velocity: MAX_FLING_VELOCITY * density,
        }
    }
}

impl Default for ViewConfiguration {
    fn default() -> Self {
        Self::scaled(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaled_multiplies_both_thresholds() {
        let config = ViewConfiguration::scaled(2.5);
        assert_eq!(config.touch_slop, 20.0);
        assert_eq!(config.maximum_fling_velocity, 20_000.0);
        assert_eq!(ViewConfiguration::default().touch_slop, DRAG_THRESHOLD);
    }
}
