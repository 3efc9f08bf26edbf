use std::cell::Cell;
use std::rc::Rc;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use flick::{
    flick_callbacks, BackgroundDim, FlickConfig, FlickDismissLayout, FlickGestureListener,
    GestureOutcome, PannableContentInterceptor, PointerEvent, ScaledContentSize, Size, Surface,
};
use flick_runtime_std::StdRuntime;

const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Upper bound on frames spent waiting for a transition to settle.
const MAX_SETTLE_FRAMES: usize = 120;

/// A full-screen image that can be zoomed, panned and flicked away.
pub struct Viewer {
    runtime: StdRuntime,
    layout: FlickDismissLayout,
    dim: Rc<BackgroundDim>,
    dismissed_after_ms: Rc<Cell<Option<u64>>>,
}

impl Viewer {
    /// `zoom` scales the image height; `pan_offset` is how far the zoomed
    /// image has been scrolled from its top edge.
    pub fn open(screen: Size, zoom: f32, pan_offset: f32, config: FlickConfig) -> Result<Self> {
        let runtime = StdRuntime::new();
        let surface = Rc::new(Surface::new(screen));
        let dim = Rc::new(BackgroundDim::new(runtime.frame_clock()));
        let dismissed_after_ms = Rc::new(Cell::new(None));

        let zoomed_height = screen.height * zoom;
        let dim_in_callback = Rc::clone(&dim);
        let dismissed_in_callback = Rc::clone(&dismissed_after_ms);
        let callbacks = flick_callbacks(
            move |move_ratio| dim_in_callback.on_move(move_ratio),
            move |duration_ms| dismissed_in_callback.set(Some(duration_ms)),
        );

        let max_pan = (zoomed_height - screen.height).max(0.0);
        let interceptor = PannableContentInterceptor::new(move |direction| {
            if direction < 0 {
                pan_offset < max_pan
            } else {
                pan_offset > 0.0
            }
        });

        let listener = FlickGestureListener::new(
            surface,
            runtime.frame_clock(),
            config,
            ScaledContentSize::new(move || zoomed_height as i32),
            callbacks,
        )?
        .with_interceptor(interceptor);

        let viewer = Self {
            runtime,
            layout: FlickDismissLayout::new(listener),
            dim,
            dismissed_after_ms,
        };
        viewer.dim.animate_entry();
        viewer.settle();
        Ok(viewer)
    }

    pub fn uptime_millis(&self) -> i64 {
        self.runtime.clock().uptime_millis()
    }

    pub fn dispatch(&mut self, event: PointerEvent) {
        self.layout.dispatch_touch_event(&event);
        log::trace!(
            "{:?} -> layer {:?}, dim {}",
            event.kind,
            self.layout.surface().layer(),
            self.dim.alpha()
        );
    }

    pub fn outcome(&self) -> Option<GestureOutcome> {
        self.layout.listener().last_outcome()
    }

    pub fn dismissed_after_ms(&self) -> Option<u64> {
        self.dismissed_after_ms.get()
    }

    pub fn surface(&self) -> &Rc<Surface> {
        self.layout.surface()
    }

    pub fn dim_alpha(&self) -> u8 {
        self.dim.alpha()
    }

    /// Back press: fade the image and backdrop out, then close.
    pub fn close(&self) -> bool {
        let closed = Rc::new(Cell::new(false));
        let closed_in_callback = Rc::clone(&closed);
        self.layout
            .listener()
            .animator()
            .animate_exit(move || closed_in_callback.set(true));
        self.dim.animate_exit();
        self.settle();
        closed.get()
    }

    /// Runs display frames until every transition has finished.
    pub fn settle(&self) -> usize {
        let mut frames = 0;
        while frames < MAX_SETTLE_FRAMES && self.runtime.runtime().has_frame_callbacks() {
            thread::sleep(FRAME_INTERVAL);
            if self.runtime.take_frame_request() || self.runtime.runtime().needs_frame() {
                self.runtime.drain_frame();
            }
            frames += 1;
        }
        frames
    }
}
