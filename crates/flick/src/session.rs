use flick_foundation::{PointerEvent, PointerEventKind, VelocityTracker};
use flick_ui_graphics::Point;

/// Where a session stands in classifying the drag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// No pointer is down.
    Idle,
    /// Pointer is down but has not moved past the touch slop in a clear
    /// direction yet.
    Undecided,
    /// The drag was classified vertical; the surface follows the finger.
    Vertical,
    /// An interceptor claimed the drag.
    Intercepted,
    /// The drag went horizontal first.
    Canceled,
}

/// Tracking state for a single pointer-down to pointer-up sequence.
///
/// Replaced wholesale on every pointer-down.
#[derive(Clone)]
pub struct GestureSession {
    state: SessionState,
    down_position: Point,
    last_position: Point,
    last_kind: Option<PointerEventKind>,
    started_on_left_half: bool,
    interceptor_consulted: bool,
    velocity_tracker: VelocityTracker,
}

impl Default for GestureSession {
    fn default() -> Self {
        Self {
            state: SessionState::Idle,
            down_position: Point::ZERO,
            last_position: Point::ZERO,
            last_kind: None,
            started_on_left_half: false,
            interceptor_consulted: false,
            velocity_tracker: VelocityTracker::new(),
        }
    }
}

impl GestureSession {
    pub(crate) fn begin(down: &PointerEvent, surface_width: f32) -> Self {
        let mut velocity_tracker = VelocityTracker::new();
        velocity_tracker.add_movement(down);
        Self {
            state: SessionState::Undecided,
            down_position: down.position,
            last_position: down.position,
            last_kind: Some(down.kind),
            started_on_left_half: down.position.x < surface_width / 2.0,
            interceptor_consulted: false,
            velocity_tracker,
        }
    }

    /// An idle session that still remembers the last processed event so a
    /// repeated Up or Cancel is recognized as a duplicate.
    pub(crate) fn finished(&self) -> Self {
        Self {
            last_position: self.last_position,
            last_kind: self.last_kind,
            ..Self::default()
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn down_position(&self) -> Point {
        self.down_position
    }

    pub fn last_position(&self) -> Point {
        self.last_position
    }

    pub fn last_kind(&self) -> Option<PointerEventKind> {
        self.last_kind
    }

    pub fn started_on_left_half(&self) -> bool {
        self.started_on_left_half
    }

    pub fn vertical_scroll_registered(&self) -> bool {
        self.state == SessionState::Vertical
    }

    pub fn intercepted_until_next_down(&self) -> bool {
        self.state == SessionState::Intercepted
    }

    pub fn canceled_until_next_down(&self) -> bool {
        self.state == SessionState::Canceled
    }

    pub(crate) fn is_duplicate(&self, event: &PointerEvent) -> bool {
        self.last_kind
            .is_some_and(|kind| event.is_duplicate_of(kind, self.last_position))
    }

    /// Records `event` as the last processed one and returns the delta from
    /// the previous event.
    pub(crate) fn advance(&mut self, event: &PointerEvent) -> Point {
        let delta = event.position - self.last_position;
        self.last_position = event.position;
        self.last_kind = Some(event.kind);
        delta
    }

    /// Distance from the pointer-down position.
    pub fn distance(&self) -> Point {
        self.last_position - self.down_position
    }

    pub(crate) fn interceptor_consulted(&self) -> bool {
        self.interceptor_consulted
    }

    pub(crate) fn mark_interceptor_consulted(&mut self) {
        self.interceptor_consulted = true;
    }

    pub(crate) fn intercept(&mut self) {
        self.state = SessionState::Intercepted;
    }

    pub(crate) fn cancel(&mut self) {
        self.state = SessionState::Canceled;
    }

    /// Returns `true` the first time the drag is classified vertical.
    pub(crate) fn register_vertical_scroll(&mut self) -> bool {
        let newly_registered = self.state == SessionState::Undecided;
        if newly_registered {
            self.state = SessionState::Vertical;
        }
        newly_registered
    }

    pub(crate) fn track(&mut self, event: &PointerEvent) {
        self.velocity_tracker.add_movement(event);
    }

    /// Vertical velocity in px/s over the recent samples.
    pub fn velocity_y(&self) -> f32 {
        self.velocity_tracker.velocity().y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_records_down_and_side() {
        let session = GestureSession::begin(&PointerEvent::down(100.0, 300.0, 0), 500.0);
        assert_eq!(session.state(), SessionState::Undecided);
        assert_eq!(session.down_position(), Point::new(100.0, 300.0));
        assert!(session.started_on_left_half());

        let right = GestureSession::begin(&PointerEvent::down(250.0, 300.0, 0), 500.0);
        assert!(!right.started_on_left_half());
    }

    #[test]
    fn vertical_registration_is_sticky_and_exclusive() {
        let mut session = GestureSession::begin(&PointerEvent::down(0.0, 0.0, 0), 100.0);
        assert!(session.register_vertical_scroll());
        assert!(!session.register_vertical_scroll());
        assert!(session.vertical_scroll_registered());

        let mut blocked = GestureSession::begin(&PointerEvent::down(0.0, 0.0, 0), 100.0);
        blocked.cancel();
        assert!(!blocked.register_vertical_scroll());
        assert!(blocked.canceled_until_next_down());
        assert!(!blocked.intercepted_until_next_down());
    }

    #[test]
    fn finished_session_remembers_last_event() {
        let mut session = GestureSession::begin(&PointerEvent::down(0.0, 0.0, 0), 100.0);
        session.register_vertical_scroll();
        let up = PointerEvent::up(0.0, 90.0, 40);
        session.advance(&up);

        let finished = session.finished();
        assert_eq!(finished.state(), SessionState::Idle);
        assert!(finished.is_duplicate(&up));
        assert!(!finished.vertical_scroll_registered());
    }
}
