use flick_foundation::ViewConfiguration;

use crate::error::FlickConfigError;

/// Fraction of the content height the finger must cross for a release to
/// count as a flick.
pub const DEFAULT_FLICK_THRESHOLD: f32 = 0.3;

/// Duration of the snap-back and of distance-based dismissals.
pub const DEFAULT_ANIMATION_DURATION_MS: u64 = 200;

/// Duration of velocity-based (fling) dismissals.
pub const FLING_ANIMATION_DURATION_MS: u64 = 100;

/// Degrees of rotation accumulated per surface-height of vertical travel.
pub const ROTATION_FACTOR_DEGREES: f32 = 20.0;

/// A fling must be faster than this many surface-heights per second.
pub const FLING_VELOCITY_RATIO: f32 = 0.6;

/// A fling must also travel at least this fraction of the surface height.
pub const MIN_FLING_DISTANCE_RATIO: f32 = 0.1;

/// Immutable thresholds owned by a recognizer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlickConfig {
    pub view_configuration: ViewConfiguration,
    /// Ratio in `[0, 1]` of the content height.
    pub flick_threshold_slop: f32,
}

impl FlickConfig {
    pub fn new(view_configuration: ViewConfiguration) -> Self {
        Self {
            view_configuration,
            flick_threshold_slop: DEFAULT_FLICK_THRESHOLD,
        }
    }

    pub fn with_flick_threshold_slop(mut self, flick_threshold_slop: f32) -> Self {
        self.flick_threshold_slop = flick_threshold_slop;
        self
    }

    pub fn touch_slop(&self) -> f32 {
        self.view_configuration.touch_slop
    }

    pub fn maximum_fling_velocity(&self) -> f32 {
        self.view_configuration.maximum_fling_velocity
    }

    pub fn validate(&self) -> Result<(), FlickConfigError> {
        validate_threshold_slop(self.flick_threshold_slop)?;

        let touch_slop = self.view_configuration.touch_slop;
        if !touch_slop.is_finite() || touch_slop < 0.0 {
            return Err(FlickConfigError::InvalidTouchSlop { value: touch_slop });
        }

        let velocity = self.view_configuration.maximum_fling_velocity;
        if !velocity.is_finite() || velocity <= 0.0 {
            return Err(FlickConfigError::InvalidMaximumFlingVelocity { value: velocity });
        }
        Ok(())
    }
}

impl Default for FlickConfig {
    fn default() -> Self {
        Self::new(ViewConfiguration::default())
    }
}

pub(crate) fn validate_threshold_slop(value: f32) -> Result<(), FlickConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(FlickConfigError::ThresholdSlopOutOfRange { value })
    }
}
