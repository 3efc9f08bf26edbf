//! Frame runtime for flick surfaces.
//!
//! Everything here runs on the one UI thread that also receives pointer
//! events. Animations register one-shot frame callbacks through a
//! [`FrameClock`]; the host drains them once per display frame with
//! [`Runtime::drain_frame_callbacks`].

mod frame_clock;
mod platform;
mod runtime;

pub use frame_clock::{FrameCallbackRegistration, FrameClock};
pub use platform::RuntimeScheduler;
pub use runtime::{DefaultScheduler, Runtime, RuntimeHandle};

pub(crate) type FrameCallbackId = u64;
