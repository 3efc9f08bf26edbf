//! Shared gesture constants for consistent touch/pointer handling.
//!
//! These values are in logical pixels. Hosts on high-density touch screens
//! scale them through [`crate::ViewConfiguration::scaled`].

/// Minimum distance the pointer must travel from the press position before
/// any drag direction is classified.
///
/// Matches common platform conventions (Android uses ~8dp for
/// ViewConfiguration.TOUCH_SLOP).
pub const DRAG_THRESHOLD: f32 = 8.0;

/// Maximum fling velocity in logical pixels per second.
///
/// Matches Android's default maximum fling velocity on a baseline density.
/// Faster readings are treated as tracking noise by the flick recognizer.
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;
