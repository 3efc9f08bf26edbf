use flick_ui_graphics::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

impl PointerEventKind {
    /// Up and Cancel both end the current gesture.
    pub fn ends_gesture(self) -> bool {
        matches!(self, PointerEventKind::Up | PointerEventKind::Cancel)
    }
}

/// A single-pointer event as delivered by the host windowing layer.
///
/// `position` is in raw (window) coordinates so it is unaffected by the
/// transform the recognizer applies to the surface under the finger.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub position: Point,
    /// Event time in milliseconds on a monotonic clock.
    pub uptime_millis: i64,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point, uptime_millis: i64) -> Self {
        Self {
            kind,
            position,
            uptime_millis,
        }
    }

    pub fn down(x: f32, y: f32, uptime_millis: i64) -> Self {
        Self::new(PointerEventKind::Down, Point::new(x, y), uptime_millis)
    }

    pub fn moved(x: f32, y: f32, uptime_millis: i64) -> Self {
        Self::new(PointerEventKind::Move, Point::new(x, y), uptime_millis)
    }

    pub fn up(x: f32, y: f32, uptime_millis: i64) -> Self {
        Self::new(PointerEventKind::Up, Point::new(x, y), uptime_millis)
    }

    pub fn cancel(x: f32, y: f32, uptime_millis: i64) -> Self {
        Self::new(PointerEventKind::Cancel, Point::new(x, y), uptime_millis)
    }

    /// Same kind and same position as `other`, regardless of time.
    pub fn is_duplicate_of(&self, kind: PointerEventKind, position: Point) -> bool {
        self.kind == kind && self.position == position
    }
}
