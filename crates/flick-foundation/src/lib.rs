//! Input foundation for flick surfaces: pointer events, velocity tracking
//! and the platform's gesture thresholds.

pub mod gesture_constants;
mod pointer;
mod velocity_tracker;
mod view_configuration;

pub use pointer::{PointerEvent, PointerEventKind};
pub use velocity_tracker::{AxisVelocityTracker, Velocity, VelocityTracker, ASSUME_STOPPED_MS};
pub use view_configuration::ViewConfiguration;

pub use flick_ui_graphics::{Point, Size};
