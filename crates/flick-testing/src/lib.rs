//! Test harness for flick surfaces.
//!
//! [`GestureRobot`] owns a runtime, a surface and its recognizer, feeds it
//! scripted pointer events with explicit timestamps, and drains animation
//! frames deterministically. [`RecordingCallbacks`] captures everything the
//! recognizer reports to the host.

mod recording;
mod robot;

pub use recording::{FlickEvent, RecordingCallbacks};
pub use robot::{GestureRobot, FRAME_INTERVAL_NANOS};

#[cfg(test)]
#[path = "tests/robot_tests.rs"]
mod tests;
