use std::cell::RefCell;

use flick::FlickCallbacks;

/// A single notification delivered to the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FlickEvent {
    MoveStart,
    Move(f32),
    Dismiss(u64),
}

/// Callbacks that remember every notification, in order.
#[derive(Debug, Default)]
pub struct RecordingCallbacks {
    events: RefCell<Vec<FlickEvent>>,
}

impl RecordingCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<FlickEvent> {
        self.events.borrow().clone()
    }

    pub fn move_ratios(&self) -> Vec<f32> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                FlickEvent::Move(ratio) => Some(*ratio),
                _ => None,
            })
            .collect()
    }

    pub fn last_move_ratio(&self) -> Option<f32> {
        self.move_ratios().last().copied()
    }

    /// Durations passed to every dismiss notification.
    pub fn dismissals(&self) -> Vec<u64> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                FlickEvent::Dismiss(duration) => Some(*duration),
                _ => None,
            })
            .collect()
    }

    pub fn move_starts(&self) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|event| matches!(event, FlickEvent::MoveStart))
            .count()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl FlickCallbacks for RecordingCallbacks {
    fn on_move_start(&self) {
        self.events.borrow_mut().push(FlickEvent::MoveStart);
    }

    fn on_move(&self, move_ratio: f32) {
        self.events.borrow_mut().push(FlickEvent::Move(move_ratio));
    }

    fn on_flick_dismiss(&self, flick_animation_duration_ms: u64) {
        self.events
            .borrow_mut()
            .push(FlickEvent::Dismiss(flick_animation_duration_ms));
    }
}
