use super::*;

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Default)]
struct CountingScheduler {
    requests: AtomicUsize,
}

impl RuntimeScheduler for CountingScheduler {
    fn schedule_frame(&self) {
        self.requests.fetch_add(1, Ordering::SeqCst);
    }
}

#[test]
fn frame_callback_runs_once_with_frame_time() {
    let runtime = Runtime::default();
    let clock = runtime.frame_clock();
    let seen = Rc::new(RefCell::new(Vec::new()));

    let seen_in_callback = Rc::clone(&seen);
    let _registration = clock.with_frame_nanos(move |time| seen_in_callback.borrow_mut().push(time));
    assert!(runtime.needs_frame());

    runtime.drain_frame_callbacks(16_000_000);
    runtime.drain_frame_callbacks(32_000_000);

    assert_eq!(seen.borrow().as_slice(), &[16_000_000]);
    assert!(!runtime.needs_frame());
}

#[test]
fn dropping_registration_cancels_callback() {
    let runtime = Runtime::default();
    let fired = Rc::new(RefCell::new(false));

    let fired_in_callback = Rc::clone(&fired);
    let registration = runtime
        .frame_clock()
        .with_frame_nanos(move |_| *fired_in_callback.borrow_mut() = true);
    drop(registration);

    runtime.drain_frame_callbacks(0);
    assert!(!*fired.borrow());
    assert!(!runtime.has_frame_callbacks());
}

#[test]
fn callbacks_registered_while_draining_wait_for_next_frame() {
    let runtime = Runtime::default();
    let handle = runtime.handle();
    let frames = Rc::new(RefCell::new(Vec::new()));

    let frames_outer = Rc::clone(&frames);
    let handle_in_callback = handle.clone();
    handle.register_frame_callback(move |time| {
        frames_outer.borrow_mut().push(("outer", time));
        let frames_inner = Rc::clone(&frames_outer);
        handle_in_callback.register_frame_callback(move |time| {
            frames_inner.borrow_mut().push(("inner", time));
        });
    });

    runtime.drain_frame_callbacks(1);
    assert_eq!(frames.borrow().as_slice(), &[("outer", 1)]);
    assert!(runtime.needs_frame());

    runtime.drain_frame_callbacks(2);
    assert_eq!(frames.borrow().as_slice(), &[("outer", 1), ("inner", 2)]);
}

#[test]
fn scheduler_is_notified_on_registration() {
    let scheduler = Arc::new(CountingScheduler::default());
    let runtime = Runtime::new(scheduler.clone());

    let _a = runtime.frame_clock().with_frame_millis(|_| {});
    let _b = runtime.frame_clock().with_frame_millis(|_| {});

    assert_eq!(scheduler.requests.load(Ordering::SeqCst), 2);
}

#[test]
fn handle_outliving_runtime_is_inert() {
    let runtime = Runtime::default();
    let handle = runtime.handle();
    drop(runtime);

    assert!(!handle.is_alive());
    let registration = handle.frame_clock().with_frame_nanos(|_| {});
    assert!(!registration.is_active());
}
