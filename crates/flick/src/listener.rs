//! The flick gesture recognizer.

use std::rc::Rc;

use flick_core::FrameClock;
use flick_foundation::{PointerEvent, PointerEventKind};
use flick_ui_graphics::{Point, TransformOrigin};

use crate::animator::DismissAnimator;
use crate::callbacks::FlickCallbacks;
use crate::config::{validate_threshold_slop, FlickConfig, ROTATION_FACTOR_DEGREES};
use crate::content_size::ContentSizeProvider;
use crate::decision::{decide, GestureOutcome, ReleaseSnapshot};
use crate::error::FlickConfigError;
use crate::interceptor::{GestureInterceptor, InterceptResult, NeverIntercept};
use crate::session::{GestureSession, SessionState};
use crate::surface::Surface;

/// Recognizes vertical flicks on a [`Surface`] and moves it with the finger.
///
/// Feed it every pointer event the surface receives, in raw window
/// coordinates. While a vertical drag is in progress the surface's layer
/// follows the finger with a slight rotation, and on release the surface is
/// either thrown out of the window or animated back to rest.
///
/// The same event may be delivered twice in a row (once through an intercept
/// path and once through a touch path); the repeat is ignored.
pub struct FlickGestureListener {
    surface: Rc<Surface>,
    config: FlickConfig,
    content_size: Rc<dyn ContentSizeProvider>,
    callbacks: Rc<dyn FlickCallbacks>,
    interceptor: Box<dyn GestureInterceptor>,
    animator: DismissAnimator,
    session: GestureSession,
    last_outcome: Option<GestureOutcome>,
    // Transition cancelled by the current pointer-down.
    interrupted: Option<GestureOutcome>,
}

impl FlickGestureListener {
    pub fn new(
        surface: Rc<Surface>,
        frame_clock: FrameClock,
        config: FlickConfig,
        content_size: impl ContentSizeProvider + 'static,
        callbacks: impl FlickCallbacks + 'static,
    ) -> Result<Self, FlickConfigError> {
        config.validate()?;

        let content_size: Rc<dyn ContentSizeProvider> = Rc::new(content_size);
        let callbacks: Rc<dyn FlickCallbacks> = Rc::new(callbacks);
        let animator = DismissAnimator::new(
            Rc::clone(&surface),
            frame_clock,
            Rc::clone(&content_size),
            Rc::clone(&callbacks),
        );
        Ok(Self {
            surface,
            config,
            content_size,
            callbacks,
            interceptor: Box::new(NeverIntercept),
            animator,
            session: GestureSession::default(),
            last_outcome: None,
            interrupted: None,
        })
    }

    pub fn with_interceptor(mut self, interceptor: impl GestureInterceptor + 'static) -> Self {
        self.set_gesture_interceptor(interceptor);
        self
    }

    /// Replaces the interceptor. Takes effect from the next undecided drag.
    pub fn set_gesture_interceptor(&mut self, interceptor: impl GestureInterceptor + 'static) {
        self.interceptor = Box::new(interceptor);
    }

    pub fn flick_threshold_slop(&self) -> f32 {
        self.config.flick_threshold_slop
    }

    pub fn set_flick_threshold_slop(&mut self, value: f32) -> Result<(), FlickConfigError> {
        validate_threshold_slop(value)?;
        self.config.flick_threshold_slop = value;
        Ok(())
    }

    pub fn config(&self) -> &FlickConfig {
        &self.config
    }

    pub fn surface(&self) -> &Rc<Surface> {
        &self.surface
    }

    pub fn animator(&self) -> &DismissAnimator {
        &self.animator
    }

    pub fn session(&self) -> &GestureSession {
        &self.session
    }

    /// Outcome of the most recent release, cleared on the next pointer-down.
    pub fn last_outcome(&self) -> Option<GestureOutcome> {
        self.last_outcome
    }

    pub fn handle_pointer_event(
        &mut self,
        kind: PointerEventKind,
        x: f32,
        y: f32,
        uptime_millis: i64,
    ) -> bool {
        self.on_touch(&PointerEvent::new(kind, Point::new(x, y), uptime_millis))
    }

    /// Processes one pointer event. Returns `true` only while a vertical
    /// drag is moving the surface.
    pub fn on_touch(&mut self, event: &PointerEvent) -> bool {
        if self.session.is_duplicate(event) {
            log::trace!("dropping duplicate {:?}", event);
            return false;
        }

        match event.kind {
            PointerEventKind::Down => self.on_down(event),
            PointerEventKind::Move => self.on_move(event),
            PointerEventKind::Up | PointerEventKind::Cancel => self.on_release(event),
        }
    }

    fn on_down(&mut self, event: &PointerEvent) -> bool {
        // The finger takes over from whatever transition is running.
        self.interrupted = self.animator.running_outcome();
        self.animator.cancel();
        self.surface.request_disallow_intercept(false);
        self.session = GestureSession::begin(event, self.surface.width());
        self.last_outcome = None;
        false
    }

    fn on_move(&mut self, event: &PointerEvent) -> bool {
        let delta = self.session.advance(event);
        match self.session.state() {
            SessionState::Idle | SessionState::Intercepted | SessionState::Canceled => {
                return false
            }
            SessionState::Undecided => {
                if !self.classify_vertical() {
                    return false;
                }
            }
            SessionState::Vertical => {}
        }

        self.apply_drag(delta);
        self.session.track(event);
        true
    }

    /// Tries to classify an undecided drag. Returns `true` once it is
    /// vertical.
    fn classify_vertical(&mut self) -> bool {
        let distance = self.session.distance();
        let distance_x = distance.x.abs();
        let distance_y = distance.y.abs();
        let touch_slop = self.config.touch_slop();

        if !self.session.interceptor_consulted()
            && (distance_x > touch_slop || distance_y > touch_slop)
        {
            self.session.mark_interceptor_consulted();
            if self.interceptor.should_intercept(distance.y) == InterceptResult::Intercepted {
                log::debug!("drag intercepted at dy={}", distance.y);
                self.session.intercept();
                return false;
            }
        }

        let is_vertical = distance_y > touch_slop && distance_y > distance_x;
        let is_horizontal = distance_x > touch_slop && distance_y < distance_x;

        if is_horizontal {
            log::debug!("horizontal drag, ignoring until next down");
            self.session.cancel();
            return false;
        }
        if !is_vertical {
            return false;
        }

        self.session.register_vertical_scroll();
        self.callbacks.on_move_start();
        true
    }

    fn apply_drag(&self, delta: Point) {
        let height = self.surface.height();
        let rotation_delta = if height > 0.0 {
            let direction = if self.session.started_on_left_half() {
                -1.0
            } else {
                1.0
            };
            delta.y / height * ROTATION_FACTOR_DEGREES * direction
        } else {
            0.0
        };

        self.surface.update_layer(|layer| {
            layer.translation_x += delta.x;
            layer.translation_y += delta.y;
            layer.transform_origin = TransformOrigin::TOP_CENTER;
            layer.rotation_z += rotation_delta;
        });
        self.surface.request_disallow_intercept(true);

        let move_ratio = self.surface.move_ratio();
        log::trace!("moved by {:?}, ratio {}", delta, move_ratio);
        self.callbacks.on_move(move_ratio);
    }

    fn on_release(&mut self, event: &PointerEvent) -> bool {
        self.session.advance(event);

        let outcome = if self.session.vertical_scroll_registered() {
            let surface_height = self.surface.height();
            let threshold_height = self
                .content_size
                .height_for_calculating_dismiss_threshold(surface_height as i32);
            let release = ReleaseSnapshot {
                distance_y: self.session.distance().y,
                velocity_y: self.session.velocity_y(),
                surface_height,
                threshold_height: threshold_height as f32,
                flick_threshold_slop: self.config.flick_threshold_slop,
                maximum_fling_velocity: self.config.maximum_fling_velocity(),
            };
            let outcome = decide(&release);
            log::debug!("released {:?}: {:?}", release, outcome);
            outcome
        } else {
            GestureOutcome::Ignored
        };

        self.session = self.session.finished();
        self.last_outcome = Some(outcome);
        match self.interrupted.take() {
            Some(interrupted) if outcome == GestureOutcome::Ignored => {
                log::debug!("resuming {:?} after an undecided touch", interrupted);
                self.animator.resume(interrupted);
            }
            _ => self.animator.run(outcome),
        }
        false
    }
}

#[cfg(test)]
#[path = "tests/listener_tests.rs"]
mod tests;
