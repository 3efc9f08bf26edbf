//! Animation system for flick surfaces
//!
//! Provides time-based tweens with easing curves, driven by the
//! [`flick_core::FrameClock`] of the surface's runtime.

mod animation;

pub use animation::*;
