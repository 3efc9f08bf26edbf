use std::hint::black_box;
use std::rc::Rc;

use criterion::{criterion_group, criterion_main, Criterion};
use flick::{
    decide, flick_callbacks, FixedContentSize, FlickConfig, FlickGestureListener, PointerEvent,
    ReleaseSnapshot, Size, Surface,
};
use flick_core::Runtime;

fn drag_events() -> Vec<PointerEvent> {
    let mut events = vec![PointerEvent::down(250.0, 100.0, 0)];
    for step in 1..=60 {
        events.push(PointerEvent::moved(
            250.0 + step as f32 * 0.5,
            100.0 + step as f32 * 6.0,
            step * 8,
        ));
    }
    events.push(PointerEvent::up(280.0, 460.0, 500));
    events
}

fn recognize_vertical_drag(c: &mut Criterion) {
    let runtime = Runtime::default();
    let surface = Rc::new(Surface::new(Size::new(1080.0, 2280.0)));
    let mut listener = FlickGestureListener::new(
        Rc::clone(&surface),
        runtime.frame_clock(),
        FlickConfig::default(),
        FixedContentSize::uniform(2280),
        flick_callbacks(
            |ratio| {
                black_box(ratio);
            },
            |_| {},
        ),
    )
    .expect("valid config");
    let events = drag_events();

    c.bench_function("recognize_vertical_drag", |b| {
        b.iter(|| {
            for event in &events {
                black_box(listener.on_touch(event));
            }
            listener.animator().cancel();
            surface.set_layer(Default::default());
        });
    });
}

fn decide_release(c: &mut Criterion) {
    let release = ReleaseSnapshot {
        distance_y: 180.0,
        velocity_y: 2400.0,
        surface_height: 2280.0,
        threshold_height: 2280.0,
        flick_threshold_slop: 0.3,
        maximum_fling_velocity: 8000.0,
    };

    c.bench_function("decide_release", |b| {
        b.iter(|| decide(black_box(&release)));
    });
}

criterion_group!(benches, recognize_vertical_drag, decide_release);
criterion_main!(benches);
