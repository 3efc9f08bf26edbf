use std::rc::Rc;

use flick::{
    ContentSizeProvider, FixedContentSize, FlickConfig, FlickConfigError, FlickDismissLayout,
    FlickGestureListener, GestureInterceptor, GestureOutcome, GraphicsLayer, PointerEvent,
    PointerEventKind, Point, Size, Surface,
};
use flick_core::Runtime;

use crate::recording::RecordingCallbacks;

/// Frame interval of a 60 Hz display.
pub const FRAME_INTERVAL_NANOS: u64 = 16_666_667;

const DEFAULT_EVENT_INTERVAL_MS: i64 = 16;

/// Longer than the velocity tracker's stop detection window.
const SLOW_DRAG_PAUSE_MS: i64 = 500;

/// Headless harness driving a [`FlickDismissLayout`] with scripted pointer
/// input.
///
/// Every event is routed through both the intercept and the touch path, the
/// way a windowing host delivers it. Event timestamps advance by a fixed
/// interval per pointer event unless set explicitly, and animation frames
/// only run when the test steps them.
pub struct GestureRobot {
    runtime: Runtime,
    layout: FlickDismissLayout,
    callbacks: Rc<RecordingCallbacks>,
    uptime_millis: i64,
    event_interval_ms: i64,
    frame_time_nanos: u64,
}

impl GestureRobot {
    /// Launch a robot for a full-window surface whose content fills it.
    pub fn launch(size: Size) -> Self {
        Self::launch_with(
            Surface::new(size),
            FlickConfig::default(),
            FixedContentSize::uniform(size.height as i32),
        )
        .unwrap_or_else(|error| panic!("default configuration rejected: {error}"))
    }

    pub fn launch_with(
        surface: Surface,
        config: FlickConfig,
        content_size: impl ContentSizeProvider + 'static,
    ) -> Result<Self, FlickConfigError> {
        let runtime = Runtime::default();
        let callbacks = Rc::new(RecordingCallbacks::new());
        let listener = FlickGestureListener::new(
            Rc::new(surface),
            runtime.frame_clock(),
            config,
            content_size,
            Rc::clone(&callbacks),
        )?;
        Ok(Self {
            runtime,
            layout: FlickDismissLayout::new(listener),
            callbacks,
            uptime_millis: 0,
            event_interval_ms: DEFAULT_EVENT_INTERVAL_MS,
            frame_time_nanos: 0,
        })
    }

    pub fn set_interceptor(&mut self, interceptor: impl GestureInterceptor + 'static) {
        self.layout
            .listener_mut()
            .set_gesture_interceptor(interceptor);
    }

    /// Time between consecutive scripted pointer events.
    pub fn set_event_interval(&mut self, millis: i64) {
        self.event_interval_ms = millis;
    }

    /// Let time pass without any pointer events.
    pub fn advance_time(&mut self, millis: i64) {
        self.uptime_millis += millis;
    }

    pub fn uptime_millis(&self) -> i64 {
        self.uptime_millis
    }

    pub fn press(&mut self, x: f32, y: f32) -> bool {
        self.dispatch(PointerEventKind::Down, x, y)
    }

    pub fn move_to(&mut self, x: f32, y: f32) -> bool {
        self.uptime_millis += self.event_interval_ms;
        self.dispatch(PointerEventKind::Move, x, y)
    }

    pub fn release(&mut self, x: f32, y: f32) -> bool {
        self.uptime_millis += self.event_interval_ms;
        self.dispatch(PointerEventKind::Up, x, y)
    }

    pub fn cancel(&mut self, x: f32, y: f32) -> bool {
        self.uptime_millis += self.event_interval_ms;
        self.dispatch(PointerEventKind::Cancel, x, y)
    }

    /// Deliver an arbitrary event through the layout, without touching the
    /// robot's clock.
    pub fn send(&mut self, event: PointerEvent) -> bool {
        self.route(&event)
    }

    /// Press at `from`, move to `to` in `steps` evenly spaced events, then
    /// release at `to`. Returns the outcome of the release.
    pub fn drag(&mut self, from: Point, to: Point, steps: usize) -> Option<GestureOutcome> {
        self.press(from.x, from.y);
        let steps = steps.max(1);
        for step in 1..=steps {
            let fraction = step as f32 / steps as f32;
            let position = from + Point::new((to.x - from.x) * fraction, (to.y - from.y) * fraction);
            self.move_to(position.x, position.y);
        }
        self.release(to.x, to.y);
        self.last_outcome()
    }

    /// Vertical drag with long pauses between events, so the release
    /// carries no fling velocity.
    pub fn slow_drag(&mut self, x: f32, from_y: f32, to_y: f32) -> Option<GestureOutcome> {
        self.press(x, from_y);
        self.advance_time(SLOW_DRAG_PAUSE_MS);
        self.move_to(x, (from_y + to_y) / 2.0);
        self.advance_time(SLOW_DRAG_PAUSE_MS);
        self.move_to(x, to_y);
        self.release(x, to_y);
        self.last_outcome()
    }

    /// Run one animation frame.
    pub fn step(&mut self) {
        self.frame_time_nanos += FRAME_INTERVAL_NANOS;
        self.runtime.drain_frame_callbacks(self.frame_time_nanos);
    }

    /// Run frames until no animation is pending or `max_frames` ran.
    /// Returns the number of frames run.
    pub fn pump_until_idle(&mut self, max_frames: usize) -> usize {
        let mut frames = 0;
        while frames < max_frames && self.runtime.has_frame_callbacks() {
            self.step();
            frames += 1;
        }
        frames
    }

    pub fn is_animating(&self) -> bool {
        self.layout.listener().animator().is_running()
    }

    pub fn surface(&self) -> &Rc<Surface> {
        self.layout.surface()
    }

    pub fn layer(&self) -> GraphicsLayer {
        self.layout.surface().layer()
    }

    pub fn layout(&self) -> &FlickDismissLayout {
        &self.layout
    }

    pub fn layout_mut(&mut self) -> &mut FlickDismissLayout {
        &mut self.layout
    }

    pub fn listener(&self) -> &FlickGestureListener {
        self.layout.listener()
    }

    pub fn last_outcome(&self) -> Option<GestureOutcome> {
        self.layout.listener().last_outcome()
    }

    pub fn callbacks(&self) -> &RecordingCallbacks {
        &self.callbacks
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    fn dispatch(&mut self, kind: PointerEventKind, x: f32, y: f32) -> bool {
        let event = PointerEvent::new(kind, Point::new(x, y), self.uptime_millis);
        self.route(&event)
    }

    /// Returns whether the recognizer claimed the event, which is what the
    /// intercept path reports. The touch path consumes unconditionally.
    fn route(&mut self, event: &PointerEvent) -> bool {
        let claimed = self.layout.on_intercept_touch_event(event);
        self.layout.on_touch_event(event);
        claimed
    }
}
