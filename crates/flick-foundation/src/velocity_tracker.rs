//! Release velocity estimation for the fling check.
//!
//! Each axis keeps a short history of pointer positions. When the finger
//! lifts, the samples that are still fresh are treated as a series of
//! impulses: every segment between two samples adds to the kinetic energy
//! of the pointer, which is then turned back into a velocity.

use crate::pointer::PointerEvent;

const HISTORY_SIZE: usize = 20;

/// Samples older than this, relative to the newest one, do not count.
const HORIZON_MS: i64 = 100;

/// A pointer that has not moved for this long is at rest.
pub const ASSUME_STOPPED_MS: i64 = 40;

#[derive(Clone, Copy)]
struct PositionSample {
    uptime_ms: i64,
    position: f32,
}

/// Position history of the pointer along one axis, bounded to the last
/// `HISTORY_SIZE` samples.
#[derive(Clone)]
pub struct AxisVelocityTracker {
    history: [Option<PositionSample>; HISTORY_SIZE],
    newest: usize,
}

impl Default for AxisVelocityTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl AxisVelocityTracker {
    pub fn new() -> Self {
        Self {
            history: [None; HISTORY_SIZE],
            newest: 0,
        }
    }

    /// Records the absolute pointer position at `uptime_ms`, overwriting
    /// the oldest sample once the history is full.
    pub fn add_position(&mut self, uptime_ms: i64, position: f32) {
        self.newest = (self.newest + 1) % HISTORY_SIZE;
        self.history[self.newest] = Some(PositionSample {
            uptime_ms,
            position,
        });
    }

    /// Velocity in px/s at the newest sample. Zero when fewer than two
    /// fresh samples are left, including when the pointer came to rest.
    pub fn velocity(&self) -> f32 {
        let latest = match self.history[self.newest] {
            Some(sample) => sample,
            None => return 0.0,
        };

        // Newest first, times relative to `latest`.
        let mut positions = [0.0f32; HISTORY_SIZE];
        let mut times = [0.0f32; HISTORY_SIZE];
        let mut count = 0;
        let mut slot = self.newest;
        while count < HISTORY_SIZE {
            let sample = match self.history[slot] {
                Some(sample) => sample,
                None => break,
            };
            let age = latest.uptime_ms - sample.uptime_ms;
            if age > HORIZON_MS || age.abs() > ASSUME_STOPPED_MS {
                break;
            }
            positions[count] = sample.position;
            times[count] = -(age as f32);
            count += 1;
            slot = (slot + HISTORY_SIZE - 1) % HISTORY_SIZE;
        }

        if count < 2 {
            return 0.0;
        }
        impulse_velocity(&positions[..count], &times[..count]) * 1000.0
    }

    pub fn is_empty(&self) -> bool {
        self.history[self.newest].is_none()
    }

    pub fn reset(&mut self) {
        self.history = [None; HISTORY_SIZE];
        self.newest = 0;
    }
}

/// Folds newest-first samples into a velocity in px/ms, oldest segment
/// first. Segments with no elapsed time are skipped.
fn impulse_velocity(positions: &[f32], times: &[f32]) -> f32 {
    let oldest = positions.len() - 1;
    let mut energy = 0.0f32;
    for i in (1..=oldest).rev() {
        let elapsed = times[i - 1] - times[i];
        if elapsed == 0.0 {
            continue;
        }
        let segment_velocity = (positions[i - 1] - positions[i]) / elapsed;
        let velocity_so_far = energy_to_velocity(energy);
        energy += (segment_velocity - velocity_so_far) * segment_velocity.abs();
        if i == oldest {
            energy *= 0.5;
        }
    }
    energy_to_velocity(energy)
}

/// Unit mass: `E = v^2 / 2`, keeping the sign of the energy.
fn energy_to_velocity(energy: f32) -> f32 {
    energy.signum() * (2.0 * energy.abs()).sqrt()
}

/// Pointer velocity in px/s.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Velocity {
    pub x: f32,
    pub y: f32,
}

impl Velocity {
    pub const ZERO: Velocity = Velocity { x: 0.0, y: 0.0 };
}

/// Two-axis tracker fed directly with pointer events.
#[derive(Clone, Default)]
pub struct VelocityTracker {
    x: AxisVelocityTracker,
    y: AxisVelocityTracker,
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_movement(&mut self, event: &PointerEvent) {
        self.x
            .add_position(event.uptime_millis, event.position.x);
        self.y
            .add_position(event.uptime_millis, event.position.y);
    }

    pub fn velocity(&self) -> Velocity {
        let velocity = Velocity {
            x: sanitize(self.x.velocity()),
            y: sanitize(self.y.velocity()),
        };
        log::trace!("tracked velocity {:?}", velocity);
        velocity
    }

    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }

    pub fn reset(&mut self) {
        self.x.reset();
        self.y.reset();
    }
}

fn sanitize(velocity: f32) -> f32 {
    if velocity.is_finite() {
        velocity
    } else {
        0.0
    }
}
