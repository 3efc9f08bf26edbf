use std::cell::Cell;
use std::rc::Rc;

use flick_animation::{Animatable, AnimationListener, AnimationSpec, Easing};
use flick_core::FrameClock;

use crate::config::DEFAULT_ANIMATION_DURATION_MS;

/// Dimmed backdrop behind a flickable surface.
///
/// The backdrop clears twice as fast as the surface moves, so it is fully
/// transparent once the surface has travelled half its height.
pub struct BackgroundDim {
    alpha: Rc<Cell<u8>>,
    transparency: Animatable<f32>,
}

impl BackgroundDim {
    pub fn new(frame_clock: FrameClock) -> Self {
        Self {
            alpha: Rc::new(Cell::new(u8::MAX)),
            transparency: Animatable::new(0.0, frame_clock),
        }
    }

    /// Backdrop alpha for a transparency factor, typically `|move_ratio|`.
    pub fn alpha_for(transparency_factor: f32) -> u8 {
        let dimming = 1.0 - (transparency_factor * 2.0).min(1.0);
        (dimming.clamp(0.0, 1.0) * 255.0) as u8
    }

    pub fn alpha(&self) -> u8 {
        self.alpha.get()
    }

    /// Follows the surface; stops any running fade.
    pub fn on_move(&self, move_ratio: f32) {
        let factor = move_ratio.abs();
        self.transparency.snap_to(factor);
        self.alpha.set(Self::alpha_for(factor));
    }

    /// Fades the backdrop in from fully transparent.
    pub fn animate_entry(&self) {
        self.fade(1.0, 0.0);
    }

    /// Fades the backdrop out, alongside a surface exit transition.
    pub fn animate_exit(&self) {
        self.fade(0.0, 1.0);
    }

    pub fn is_animating(&self) -> bool {
        self.transparency.is_running()
    }

    fn fade(&self, from: f32, to: f32) {
        self.transparency.snap_to(from);
        self.alpha.set(Self::alpha_for(from));

        let alpha = Rc::clone(&self.alpha);
        self.transparency.animate_to(
            to,
            AnimationSpec::tween(DEFAULT_ANIMATION_DURATION_MS, Easing::FastOutSlowInEasing),
            AnimationListener::new().on_update(move |factor: &f32| alpha.set(Self::alpha_for(*factor))),
        );
    }
}
