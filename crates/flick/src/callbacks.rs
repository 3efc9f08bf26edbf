use std::rc::Rc;

/// Host notifications emitted while a surface is dragged and dismissed.
pub trait FlickCallbacks {
    /// Called once per gesture, when the drag is first classified vertical.
    fn on_move_start(&self) {}

    /// Called while the surface moves, including during snap-back and
    /// dismiss animations.
    ///
    /// `move_ratio` is the surface's vertical translation divided by the
    /// surface's (not the content's) height. It is signed and usually in
    /// `[-1, 1]`.
    fn on_move(&self, move_ratio: f32);

    /// Called when the dismiss animation starts. The host should wait
    /// `flick_animation_duration_ms` before tearing the surface down.
    fn on_flick_dismiss(&self, flick_animation_duration_ms: u64);
}

impl<T: FlickCallbacks + ?Sized> FlickCallbacks for Rc<T> {
    fn on_move_start(&self) {
        (**self).on_move_start()
    }

    fn on_move(&self, move_ratio: f32) {
        (**self).on_move(move_ratio)
    }

    fn on_flick_dismiss(&self, flick_animation_duration_ms: u64) {
        (**self).on_flick_dismiss(flick_animation_duration_ms)
    }
}

/// [`FlickCallbacks`] assembled from closures. Unset callbacks are no-ops.
pub struct LambdaCallbacks {
    on_move_start: Box<dyn Fn()>,
    on_move: Box<dyn Fn(f32)>,
    on_flick_dismiss: Box<dyn Fn(u64)>,
}

impl LambdaCallbacks {
    pub fn with_on_move_start(mut self, callback: impl Fn() + 'static) -> Self {
        self.on_move_start = Box::new(callback);
        self
    }

    pub fn with_on_move(mut self, callback: impl Fn(f32) + 'static) -> Self {
        self.on_move = Box::new(callback);
        self
    }

    pub fn with_on_flick_dismiss(mut self, callback: impl Fn(u64) + 'static) -> Self {
        self.on_flick_dismiss = Box::new(callback);
        self
    }
}

impl Default for LambdaCallbacks {
    fn default() -> Self {
        Self {
            on_move_start: Box::new(|| {}),
            on_move: Box::new(|_| {}),
            on_flick_dismiss: Box::new(|_| {}),
        }
    }
}

impl FlickCallbacks for LambdaCallbacks {
    fn on_move_start(&self) {
        (self.on_move_start)()
    }

    fn on_move(&self, move_ratio: f32) {
        (self.on_move)(move_ratio)
    }

    fn on_flick_dismiss(&self, flick_animation_duration_ms: u64) {
        (self.on_flick_dismiss)(flick_animation_duration_ms)
    }
}

/// Shorthand for [`LambdaCallbacks`] with the two commonly used callbacks.
pub fn flick_callbacks(
    on_move: impl Fn(f32) + 'static,
    on_flick_dismiss: impl Fn(u64) + 'static,
) -> LambdaCallbacks {
    LambdaCallbacks::default()
        .with_on_move(on_move)
        .with_on_flick_dismiss(on_flick_dismiss)
}
