//! Time-based tween animations driven by the frame clock.

use std::cell::RefCell;
use std::rc::Rc;

use flick_core::{FrameCallbackRegistration, FrameClock};

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

/// Easing curves applied to the linear progress of a tween.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    LinearEasing,
    /// Material standard curve, used by every flick transition.
    FastOutSlowInEasing,
}

impl Easing {
    /// Apply the easing function to a linear fraction [0, 1].
    pub fn transform(&self, fraction: f32) -> f32 {
        match self {
            Easing::LinearEasing => fraction,
            Easing::FastOutSlowInEasing => cubic_bezier(0.4, 0.0, 0.2, 1.0, fraction),
        }
    }
}

/// Cubic bezier curve approximation for easing.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, fraction: f32) -> f32 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;

    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    fn sample_curve(a: f32, b: f32, c: f32, t: f32) -> f32 {
        ((a * t + b) * t + c) * t
    }

    fn sample_derivative(a: f32, b: f32, c: f32, t: f32) -> f32 {
        (3.0 * a * t + 2.0 * b) * t + c
    }

    // Newton-Raphson for the parametric `t` matching the x fraction.
    let mut t = fraction;
    let mut newton_success = false;
    for _ in 0..8 {
        let x = sample_curve(ax, bx, cx, t) - fraction;
        if x.abs() < 1e-6 {
            newton_success = true;
            break;
        }
        let dx = sample_derivative(ax, bx, cx, t);
        if dx.abs() < 1e-6 {
            break;
        }
        t = (t - x / dx).clamp(0.0, 1.0);
    }

    if !newton_success {
        let mut t0 = 0.0;
        let mut t1 = 1.0;
        t = fraction;
        for _ in 0..16 {
            let x = sample_curve(ax, bx, cx, t);
            let delta = x - fraction;
            if delta.abs() < 1e-6 {
                break;
            }
            if delta > 0.0 {
                t1 = t;
            } else {
                t0 = t;
            }
            t = 0.5 * (t0 + t1);
        }
    }

    sample_curve(ay, by, cy, t)
}

/// Animation specification combining duration and easing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    /// Duration in milliseconds.
    pub duration_millis: u64,
    /// Easing function to apply.
    pub easing: Easing,
    /// Delay before starting animation in milliseconds.
    pub delay_millis: u64,
}

impl AnimationSpec {
    /// Create a tween animation with duration and easing.
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
            delay_millis: 0,
        }
    }

    /// Create a linear tween animation.
    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::LinearEasing)
    }

    /// Add a delay before the animation starts.
    pub fn with_delay(mut self, delay_millis: u64) -> Self {
        self.delay_millis = delay_millis;
        self
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::tween(300, Easing::FastOutSlowInEasing)
    }
}

type StartAction = Box<dyn FnOnce()>;
type UpdateListener<T> = Box<dyn FnMut(&T)>;
type EndAction = Box<dyn FnOnce()>;

/// Hooks invoked while an [`Animatable`] runs.
///
/// The start action fires on the first frame of the animation, the update
/// listener on every frame (including the last), and the end action only
/// when the animation reaches its target. A cancelled animation never runs
/// its end action.
pub struct AnimationListener<T> {
    on_start: Option<StartAction>,
    on_update: Option<UpdateListener<T>>,
    on_end: Option<EndAction>,
}

impl<T> AnimationListener<T> {
    pub fn new() -> Self {
        Self {
            on_start: None,
            on_update: None,
            on_end: None,
        }
    }

    pub fn on_start(mut self, action: impl FnOnce() + 'static) -> Self {
        self.on_start = Some(Box::new(action));
        self
    }

    pub fn on_update(mut self, listener: impl FnMut(&T) + 'static) -> Self {
        self.on_update = Some(Box::new(listener));
        self
    }

    pub fn on_end(mut self, action: impl FnOnce() + 'static) -> Self {
        self.on_end = Some(Box::new(action));
        self
    }
}

impl<T> Default for AnimationListener<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Generic animatable value holder.
///
/// Clones share the same animation.
pub struct Animatable<T: Lerp + Clone + 'static> {
    inner: Rc<RefCell<AnimatableInner<T>>>,
}

struct AnimatableInner<T: Lerp + Clone + 'static> {
    frame_clock: FrameClock,
    current: T,
    start: T,
    target: T,
    spec: AnimationSpec,
    start_time_nanos: Option<u64>,
    registration: Option<FrameCallbackRegistration>,
    listener: Option<AnimationListener<T>>,
    running: bool,
    /// Bumped on every (re)start or cancel so in-flight frames can tell they
    /// were superseded while listeners ran.
    generation: u64,
}

impl<T: Lerp + Clone + 'static> Animatable<T> {
    /// Create a new animatable with the given initial value.
    pub fn new(initial: T, frame_clock: FrameClock) -> Self {
        let inner = AnimatableInner {
            frame_clock,
            current: initial.clone(),
            start: initial.clone(),
            target: initial,
            spec: AnimationSpec::default(),
            start_time_nanos: None,
            registration: None,
            listener: None,
            running: false,
            generation: 0,
        };
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    /// Animate from the current value to `target`, cancelling any animation
    /// already in flight.
    pub fn animate_to(&self, target: T, spec: AnimationSpec, listener: AnimationListener<T>) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.running {
                log::trace!("animatable retargeted while running");
            }
            inner.registration = None;
            inner.generation += 1;
            inner.start = inner.current.clone();
            inner.target = target;
            inner.spec = spec;
            inner.start_time_nanos = None;
            inner.listener = Some(listener);
            inner.running = true;
        }
        Self::schedule_frame(&self.inner);
    }

    /// Snap immediately to `value` without animating.
    pub fn snap_to(&self, value: T) {
        let mut inner = self.inner.borrow_mut();
        inner.registration = None;
        inner.listener = None;
        inner.generation += 1;
        inner.running = false;
        inner.current = value.clone();
        inner.start = value.clone();
        inner.target = value;
        inner.start_time_nanos = None;
    }

    /// Stop the animation where it is. The end action does not run.
    pub fn cancel(&self) {
        let mut inner = self.inner.borrow_mut();
        if !inner.running {
            return;
        }
        log::trace!("animatable cancelled");
        inner.registration = None;
        inner.listener = None;
        inner.generation += 1;
        inner.running = false;
        inner.start_time_nanos = None;
    }

    pub fn is_running(&self) -> bool {
        self.inner.borrow().running
    }

    pub fn value(&self) -> T {
        self.inner.borrow().current.clone()
    }

    fn schedule_frame(this: &Rc<RefCell<AnimatableInner<T>>>) {
        let frame_clock = {
            let inner = this.borrow();
            if inner.registration.is_some() {
                return;
            }
            inner.frame_clock.clone()
        };
        let weak = Rc::downgrade(this);
        let registration = frame_clock.with_frame_nanos(move |time| {
            if let Some(strong) = weak.upgrade() {
                Self::on_frame(&strong, time);
            }
        });
        this.borrow_mut().registration = Some(registration);
    }

    fn on_frame(this: &Rc<RefCell<AnimatableInner<T>>>, frame_time_nanos: u64) {
        let (generation, value, finished, mut listener) = {
            let mut inner = this.borrow_mut();
            inner.registration = None;
            if !inner.running {
                return;
            }

            let start_time = *inner.start_time_nanos.get_or_insert(frame_time_nanos);
            let elapsed_nanos = frame_time_nanos.saturating_sub(start_time);
            let delay_nanos = inner.spec.delay_millis * 1_000_000;

            if elapsed_nanos < delay_nanos {
                drop(inner);
                Self::schedule_frame(this);
                return;
            }

            let animation_elapsed = elapsed_nanos - delay_nanos;
            let duration_nanos = (inner.spec.duration_millis * 1_000_000).max(1);
            let linear_progress =
                (animation_elapsed as f32 / duration_nanos as f32).clamp(0.0, 1.0);
            let finished = linear_progress >= 1.0;

            let value = if finished {
                inner.target.clone()
            } else {
                let progress = inner.spec.easing.transform(linear_progress);
                inner.start.lerp(&inner.target, progress)
            };
            inner.current = value.clone();
            if finished {
                inner.start = inner.target.clone();
                inner.start_time_nanos = None;
                inner.running = false;
            }

            (
                inner.generation,
                value,
                finished,
                inner.listener.take(),
            )
        };

        // Listeners run without the borrow held so they may retarget or
        // cancel this animatable.
        if let Some(listener) = listener.as_mut() {
            if let Some(action) = listener.on_start.take() {
                action();
            }
            if let Some(on_update) = listener.on_update.as_mut() {
                on_update(&value);
            }
        }

        if this.borrow().generation != generation {
            return;
        }

        if finished {
            log::trace!("animatable finished");
            if let Some(action) = listener.and_then(|listener| listener.on_end) {
                action();
            }
        } else {
            this.borrow_mut().listener = listener;
            Self::schedule_frame(this);
        }
    }
}

impl<T: Lerp + Clone + 'static> Clone for Animatable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
