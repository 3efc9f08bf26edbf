//! Terminal transitions of a flickable surface.

use std::cell::Cell;
use std::rc::Rc;

use flick_animation::{Animatable, AnimationListener, AnimationSpec, Easing, Lerp};
use flick_core::FrameClock;
use flick_ui_graphics::GraphicsLayer;

use crate::callbacks::FlickCallbacks;
use crate::config::DEFAULT_ANIMATION_DURATION_MS;
use crate::content_size::ContentSizeProvider;
use crate::decision::{GestureOutcome, ThrowDirection};
use crate::surface::Surface;

/// Rotation the surface settles on while exiting without a flick.
const EXIT_ROTATION_DEGREES: f32 = -2.0;

/// The animated subset of a [`GraphicsLayer`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerTransform {
    pub translation_x: f32,
    pub translation_y: f32,
    pub rotation_z: f32,
    pub alpha: f32,
}

impl LayerTransform {
    pub fn from_layer(layer: &GraphicsLayer) -> Self {
        Self {
            translation_x: layer.translation_x,
            translation_y: layer.translation_y,
            rotation_z: layer.rotation_z,
            alpha: layer.alpha,
        }
    }

    pub fn apply_to(&self, layer: &mut GraphicsLayer) {
        layer.translation_x = self.translation_x;
        layer.translation_y = self.translation_y;
        layer.rotation_z = self.rotation_z;
        layer.alpha = self.alpha;
    }
}

impl Lerp for LayerTransform {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        Self {
            translation_x: self.translation_x.lerp(&target.translation_x, fraction),
            translation_y: self.translation_y.lerp(&target.translation_y, fraction),
            rotation_z: self.rotation_z.lerp(&target.rotation_z, fraction),
            alpha: self.alpha.lerp(&target.alpha, fraction),
        }
    }
}

/// Distance the surface must travel to leave the window entirely.
///
/// A surface rotated around its top edge sticks out sideways by
/// `|sin(rotation)| * width / 2`, which is added on top of the taller of the
/// content and the window.
pub fn throw_distance(
    rotation_degrees: f32,
    surface_width: f32,
    content_height: i32,
    window_height: f32,
) -> f32 {
    let radians = f64::from(rotation_degrees).to_radians();
    let distance_rotated = (radians.sin().abs() * f64::from(surface_width) / 2.0).ceil();
    (distance_rotated + f64::from(content_height.max(window_height as i32))) as f32
}

/// Animates a surface back to rest or out of the window, reporting the
/// move ratio to the host on every frame.
///
/// Starting any transition cancels the one in flight.
pub struct DismissAnimator {
    surface: Rc<Surface>,
    content_size: Rc<dyn ContentSizeProvider>,
    callbacks: Rc<dyn FlickCallbacks>,
    transform: Animatable<LayerTransform>,
    // Outcome behind the current transition, `None` for exits.
    running: Cell<Option<GestureOutcome>>,
}

impl DismissAnimator {
    pub fn new(
        surface: Rc<Surface>,
        frame_clock: FrameClock,
        content_size: Rc<dyn ContentSizeProvider>,
        callbacks: Rc<dyn FlickCallbacks>,
    ) -> Self {
        let transform = Animatable::new(LayerTransform::from_layer(&surface.layer()), frame_clock);
        Self {
            surface,
            content_size,
            callbacks,
            transform,
            running: Cell::new(None),
        }
    }

    /// Runs the transition matching a gesture outcome. Ignored gestures
    /// leave the surface untouched.
    pub fn run(&self, outcome: GestureOutcome) {
        match outcome {
            GestureOutcome::Ignored => {}
            GestureOutcome::SnappedBack => self.animate_back_to_position(),
            GestureOutcome::Dismissed {
                duration_ms,
                direction,
            } => self.animate_dismissal(direction, duration_ms),
        }
    }

    /// Restarts a transition that a new pointer-down interrupted, from
    /// wherever the surface was left. A resumed dismissal does not notify
    /// the host again.
    pub fn resume(&self, outcome: GestureOutcome) {
        match outcome {
            GestureOutcome::Ignored => {}
            GestureOutcome::SnappedBack => self.animate_back_to_position(),
            GestureOutcome::Dismissed {
                duration_ms,
                direction,
            } => self.throw(direction, duration_ms),
        }
    }

    /// The outcome whose transition is currently in flight.
    pub fn running_outcome(&self) -> Option<GestureOutcome> {
        if self.is_running() {
            self.running.get()
        } else {
            None
        }
    }

    pub fn animate_back_to_position(&self) {
        let current = self.current();
        let target = LayerTransform {
            translation_x: 0.0,
            translation_y: 0.0,
            rotation_z: 0.0,
            ..current
        };
        log::debug!("snapping back from {:?}", current);
        self.start(
            current,
            target,
            DEFAULT_ANIMATION_DURATION_MS,
            self.move_listener(),
        );
        self.running.set(Some(GestureOutcome::SnappedBack));
    }

    /// Throws the surface out of the window, notifying the host as the
    /// throw is launched.
    ///
    /// # Panics
    ///
    /// If the surface does not rotate around its top edge.
    pub fn animate_dismissal(&self, direction: ThrowDirection, duration_ms: u64) {
        self.throw(direction, duration_ms);
        self.callbacks.on_flick_dismiss(duration_ms);
    }

    fn throw(&self, direction: ThrowDirection, duration_ms: u64) {
        let layer = self.surface.layer();
        assert!(
            layer.transform_origin.is_on_top_edge(),
            "throw distance is only valid for surfaces rotating around their top edge, got {:?}",
            layer.transform_origin
        );

        let distance = throw_distance(
            layer.rotation_z,
            self.surface.width(),
            self.content_size.height_for_dismiss_animation(),
            self.surface.window_height(),
        );
        let current = LayerTransform::from_layer(&layer);
        let target = LayerTransform {
            translation_y: direction.signum() * distance,
            ..current
        };
        log::debug!(
            "throwing {:?} by {} over {}ms",
            direction,
            distance,
            duration_ms
        );

        self.start(current, target, duration_ms, self.move_listener());
        self.running.set(Some(GestureOutcome::Dismissed {
            duration_ms,
            direction,
        }));
    }

    /// Fades the surface out while nudging it down and tilting it, for exits
    /// that were not triggered by a flick.
    pub fn animate_exit(&self, on_end: impl FnOnce() + 'static) {
        let current = self.current();
        let target = LayerTransform {
            translation_x: current.translation_x,
            translation_y: self.surface.height() / 20.0,
            rotation_z: EXIT_ROTATION_DEGREES,
            alpha: 0.0,
        };
        let surface = Rc::clone(&self.surface);
        let listener = AnimationListener::new()
            .on_update(move |value: &LayerTransform| {
                surface.update_layer(|layer| value.apply_to(layer));
            })
            .on_end(on_end);
        self.start(current, target, DEFAULT_ANIMATION_DURATION_MS, listener);
        self.running.set(None);
    }

    /// Stops the running transition, leaving the surface where it is.
    pub fn cancel(&self) {
        self.transform.cancel();
    }

    pub fn is_running(&self) -> bool {
        self.transform.is_running()
    }

    fn current(&self) -> LayerTransform {
        LayerTransform::from_layer(&self.surface.layer())
    }

    fn move_listener(&self) -> AnimationListener<LayerTransform> {
        let surface = Rc::clone(&self.surface);
        let callbacks = Rc::clone(&self.callbacks);
        AnimationListener::new().on_update(move |value: &LayerTransform| {
            surface.update_layer(|layer| value.apply_to(layer));
            callbacks.on_move(surface.move_ratio());
        })
    }

    fn start(
        &self,
        from: LayerTransform,
        to: LayerTransform,
        duration_ms: u64,
        listener: AnimationListener<LayerTransform>,
    ) {
        // The finger moved the layer behind the animatable's back.
        self.transform.snap_to(from);
        self.transform.animate_to(
            to,
            AnimationSpec::tween(duration_ms, Easing::FastOutSlowInEasing),
            listener,
        );
    }
}

#[cfg(test)]
#[path = "tests/animator_tests.rs"]
mod tests;
