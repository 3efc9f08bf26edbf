use std::fmt;

/// Invalid recognizer configuration, reported when the recognizer is built
/// or reconfigured.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlickConfigError {
    /// The flick threshold slop must be a finite ratio in `[0, 1]`.
    ThresholdSlopOutOfRange { value: f32 },
    /// The touch slop must be finite and non-negative.
    InvalidTouchSlop { value: f32 },
    /// The maximum fling velocity must be finite and positive.
    InvalidMaximumFlingVelocity { value: f32 },
}

impl fmt::Display for FlickConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlickConfigError::ThresholdSlopOutOfRange { value } => {
                write!(f, "flick threshold slop {value} is outside [0, 1]")
            }
            FlickConfigError::InvalidTouchSlop { value } => {
                write!(f, "touch slop {value} must be a non-negative number of pixels")
            }
            FlickConfigError::InvalidMaximumFlingVelocity { value } => {
                write!(f, "maximum fling velocity {value} must be a positive px/s value")
            }
        }
    }
}

impl std::error::Error for FlickConfigError {}
