//! Velocity tracking for settle gestures.
//!
//! Uses the impulse strategy: velocity is derived from the kinetic energy
//! the sampled motion imparts, which is far more robust against pointer
//! jitter than a two-point difference.

/// Ring buffer capacity for motion samples.
const HISTORY_SIZE: usize = 20;

/// Only samples from the last 100ms of motion contribute.
const HORIZON_MS: i64 = 100;

/// A gap this long between consecutive samples means the pointer stopped;
/// older samples no longer describe the current motion.
pub const ASSUME_STOPPED_MS: i64 = 40;

#[derive(Clone, Copy, Default)]
struct Sample {
    time_ms: i64,
    position: f32,
}

/// One-dimensional velocity tracker over absolute positions.
///
/// Feed it every pointer position while a contact is tracked, then ask for
/// the velocity on release:
///
/// ```
/// use minidock_foundation::VelocityTracker;
///
/// let mut tracker = VelocityTracker::new();
/// tracker.add_sample(0, 0.0);
/// tracker.add_sample(10, 100.0);
/// tracker.add_sample(20, 200.0);
/// let velocity = tracker.velocity(1_000); // px/sec
/// assert!(velocity > 0.0);
/// ```
#[derive(Clone)]
pub struct VelocityTracker {
    samples: [Option<Sample>; HISTORY_SIZE],
    /// Index of the most recently written sample.
    index: usize,
}

impl Default for VelocityTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self {
            samples: [None; HISTORY_SIZE],
            index: 0,
        }
    }

    /// Records a position at the given time (milliseconds).
    pub fn add_sample(&mut self, time_ms: i64, position: f32) {
        self.index = (self.index + 1) % HISTORY_SIZE;
        self.samples[self.index] = Some(Sample { time_ms, position });
    }

    /// Calculates the tracked velocity, normalised to `units_ms` of travel
    /// (1000 yields units per second).
    ///
    /// Returns 0.0 when fewer than two recent samples exist or the pointer
    /// had already stopped.
    pub fn velocity(&self, units_ms: i64) -> f32 {
        let mut positions = [0.0f32; HISTORY_SIZE];
        let mut times = [0.0f32; HISTORY_SIZE];
        let mut count = 0;

        let newest = match self.samples[self.index] {
            Some(sample) => sample,
            None => return 0.0,
        };

        let mut index = self.index;
        let mut previous = newest;

        while let Some(sample) = self.samples[index] {
            let age = (newest.time_ms - sample.time_ms) as f32;
            let gap = (previous.time_ms - sample.time_ms) as f32;
            if age > HORIZON_MS as f32 || gap > ASSUME_STOPPED_MS as f32 {
                break;
            }

            positions[count] = sample.position;
            times[count] = -age;
            previous = sample;

            index = if index == 0 { HISTORY_SIZE - 1 } else { index - 1 };
            count += 1;
            if count >= HISTORY_SIZE {
                break;
            }
        }

        if count < 2 {
            return 0.0;
        }

        impulse_velocity(&positions, &times, count) * units_ms as f32
    }
}

/// Impulse-strategy velocity in units per millisecond.
///
/// Samples are ordered newest-first; times are negative ages relative to the
/// newest sample.
fn impulse_velocity(positions: &[f32; HISTORY_SIZE], times: &[f32; HISTORY_SIZE], count: usize) -> f32 {
    if count < 2 {
        return 0.0;
    }

    let mut work = 0.0f32;
    let start = count - 1;
    let mut next_time = times[start];

    for i in (1..=start).rev() {
        let current_time = next_time;
        next_time = times[i - 1];
        if current_time == next_time {
            continue;
        }

        let delta = positions[i] - positions[i - 1];
        let v_curr = delta / (current_time - next_time);
        let v_prev = kinetic_energy_to_velocity(work);
        work += (v_curr - v_prev) * v_curr.abs();
        if i == start {
            work *= 0.5;
        }
    }

    kinetic_energy_to_velocity(work)
}

/// E = ½mv² with m = 1, inverted while keeping the sign of the energy.
#[inline]
fn kinetic_energy_to_velocity(kinetic_energy: f32) -> f32 {
    kinetic_energy.signum() * (2.0 * kinetic_energy.abs()).sqrt()
}
