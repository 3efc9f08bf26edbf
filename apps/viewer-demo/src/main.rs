mod viewer;

use std::thread;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use flick::{FlickConfig, PointerEvent, PointerEventKind, Point, Size};

use crate::viewer::Viewer;

const SCREEN: Size = Size::new(1080.0, 2280.0);

/// One scripted pointer event, `at_ms` after the gesture started.
struct Step {
    kind: PointerEventKind,
    position: Point,
    at_ms: i64,
}

struct Scenario {
    name: &'static str,
    zoom: f32,
    pan_offset: f32,
    steps: Vec<Step>,
}

fn vertical_drag(x: f32, from_y: f32, to_y: f32, moves: i64, move_interval_ms: i64) -> Vec<Step> {
    let mut steps = vec![Step {
        kind: PointerEventKind::Down,
        position: Point::new(x, from_y),
        at_ms: 0,
    }];
    for index in 1..=moves {
        let fraction = index as f32 / moves as f32;
        steps.push(Step {
            kind: PointerEventKind::Move,
            position: Point::new(x, from_y + (to_y - from_y) * fraction),
            at_ms: index * move_interval_ms,
        });
    }
    steps.push(Step {
        kind: PointerEventKind::Up,
        position: Point::new(x, to_y),
        at_ms: (moves + 1) * move_interval_ms,
    });
    steps
}

fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "short drag",
            zoom: 1.0,
            pan_offset: 0.0,
            steps: vertical_drag(540.0, 1000.0, 1300.0, 6, 80),
        },
        Scenario {
            name: "long drag",
            zoom: 1.0,
            pan_offset: 0.0,
            steps: vertical_drag(300.0, 1000.0, 1900.0, 10, 60),
        },
        Scenario {
            name: "quick flick up",
            zoom: 1.0,
            pan_offset: 0.0,
            steps: vertical_drag(800.0, 1400.0, 1000.0, 5, 10),
        },
        Scenario {
            name: "horizontal swipe",
            zoom: 1.0,
            pan_offset: 0.0,
            steps: vec![
                Step {
                    kind: PointerEventKind::Down,
                    position: Point::new(900.0, 1100.0),
                    at_ms: 0,
                },
                Step {
                    kind: PointerEventKind::Move,
                    position: Point::new(700.0, 1120.0),
                    at_ms: 30,
                },
                Step {
                    kind: PointerEventKind::Move,
                    position: Point::new(300.0, 1400.0),
                    at_ms: 60,
                },
                Step {
                    kind: PointerEventKind::Up,
                    position: Point::new(300.0, 1400.0),
                    at_ms: 90,
                },
            ],
        },
        Scenario {
            name: "pan zoomed image",
            zoom: 2.5,
            pan_offset: 600.0,
            steps: vertical_drag(540.0, 1000.0, 1900.0, 10, 60),
        },
    ]
}

fn replay(scenario: &Scenario, config: FlickConfig) -> Result<()> {
    let mut viewer = Viewer::open(SCREEN, scenario.zoom, scenario.pan_offset, config)
        .with_context(|| format!("opening viewer for {}", scenario.name))?;

    let start = viewer.uptime_millis();
    for step in &scenario.steps {
        let due = start + step.at_ms;
        let now = viewer.uptime_millis();
        if due > now {
            thread::sleep(Duration::from_millis((due - now) as u64));
        }
        viewer.dispatch(PointerEvent::new(step.kind, step.position, due));
    }
    let frames = viewer.settle();

    let layer = viewer.surface().layer();
    println!(
        "{:<18} {:?} after {} frames: translation_y={:.1} rotation={:.2} dim={}",
        scenario.name,
        viewer.outcome(),
        frames,
        layer.translation_y,
        layer.rotation_z,
        viewer.dim_alpha()
    );
    if let Some(duration_ms) = viewer.dismissed_after_ms() {
        log::info!("{} dismissed, closing in {}ms", scenario.name, duration_ms);
    } else if !viewer.close() {
        bail!("{} did not finish its exit transition", scenario.name);
    }
    Ok(())
}

fn main() -> Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let mut config = FlickConfig::default();
    if let Some(argument) = std::env::args().nth(1) {
        let slop: f32 = argument
            .parse()
            .with_context(|| format!("invalid flick threshold slop {argument:?}"))?;
        config = config.with_flick_threshold_slop(slop);
    }
    config.validate()?;

    println!("=== Flick Viewer Demo ===");
    println!("flick threshold slop: {}", config.flick_threshold_slop);
    println!();

    for scenario in scenarios() {
        replay(&scenario, config)?;
    }
    Ok(())
}
