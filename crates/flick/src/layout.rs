use std::rc::Rc;

use flick_foundation::PointerEvent;

use crate::listener::FlickGestureListener;
use crate::surface::Surface;

/// Container that can be dismissed by flicking it vertically.
///
/// Hosts route events through both the intercept and the touch path, so the
/// recognizer sees most events twice and drops the repeats.
pub struct FlickDismissLayout {
    listener: FlickGestureListener,
}

impl FlickDismissLayout {
    pub fn new(listener: FlickGestureListener) -> Self {
        Self { listener }
    }

    pub fn surface(&self) -> &Rc<Surface> {
        self.listener.surface()
    }

    pub fn listener(&self) -> &FlickGestureListener {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut FlickGestureListener {
        &mut self.listener
    }

    /// Whether the surface asked its ancestors to keep their hands off the
    /// current pointer stream.
    pub fn parent_intercept_disallowed(&self) -> bool {
        self.listener.surface().parent_intercept_disallowed()
    }

    /// Steals the stream from children once a vertical drag is underway.
    pub fn on_intercept_touch_event(&mut self, event: &PointerEvent) -> bool {
        self.listener.on_touch(event)
    }

    /// Always consumes, so the parent never receives this stream.
    pub fn on_touch_event(&mut self, event: &PointerEvent) -> bool {
        self.listener.on_touch(event);
        true
    }

    /// Delivers `event` through the intercept path, then the touch path.
    pub fn dispatch_touch_event(&mut self, event: &PointerEvent) -> bool {
        self.on_intercept_touch_event(event);
        self.on_touch_event(event)
    }
}
