//! Time-driven settle simulation between a start and a target offset.

use crate::decay::FlingCalculator;
use crate::fling_spline::FlingSpline;

/// A fling in progress, sampled by play time.
///
/// The decay curve fixes the total distance and duration from the initial
/// velocity; the offset is then clamped to the travel between the start and
/// target, so the simulation rests exactly on the target when the curve
/// overshoots it and at the natural decay end when it falls short.
#[derive(Debug, Clone, Copy)]
pub struct FlingSimulation {
    start_offset: f32,
    target_offset: f32,
    initial_velocity: f32,
    distance: f32,
    duration_ms: i64,
}

impl FlingSimulation {
    pub fn new(
        calculator: FlingCalculator,
        start_offset: f32,
        target_offset: f32,
        initial_velocity: f32,
    ) -> Self {
        Self {
            start_offset,
            target_offset,
            initial_velocity,
            distance: calculator.fling_distance(initial_velocity),
            duration_ms: calculator.fling_duration_ms(initial_velocity),
        }
    }

    pub fn target_offset(&self) -> f32 {
        self.target_offset
    }

    pub fn initial_velocity(&self) -> f32 {
        self.initial_velocity
    }

    pub fn duration_ms(&self) -> i64 {
        self.duration_ms
    }

    /// Offset at `play_time_ms` since the fling started, clamped to the
    /// travel between start and target.
    pub fn offset_at(&self, play_time_ms: i64) -> f32 {
        let fraction = if self.duration_ms > 0 {
            play_time_ms as f32 / self.duration_ms as f32
        } else {
            1.0
        };
        let travelled = self.distance
            * self.initial_velocity.signum()
            * FlingSpline::distance_coefficient(fraction);
        let lo = self.start_offset.min(self.target_offset);
        let hi = self.start_offset.max(self.target_offset);
        (self.start_offset + travelled).clamp(lo, hi)
    }

    /// True once the offset has reached the target or the decay has run out.
    pub fn is_finished(&self, play_time_ms: i64) -> bool {
        play_time_ms >= self.duration_ms || self.offset_at(play_time_ms) == self.target_offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn simulation(start: f32, target: f32, velocity: f32) -> FlingSimulation {
        FlingSimulation::new(FlingCalculator::with_density(1.0), start, target, velocity)
    }

    #[test]
    fn starts_at_the_start_offset() {
        let sim = simulation(0.0, 950.0, 9_000.0);
        assert!(sim.offset_at(0).abs() < 1.0);
        assert!(!sim.is_finished(0));
    }

    #[test]
    fn advances_monotonically_to_the_target() {
        let sim = simulation(0.0, 950.0, 9_000.0);
        let mut prev = 0.0;
        let mut reached = false;
        for play_ms in (0..=sim.duration_ms()).step_by(16) {
            let offset = sim.offset_at(play_ms);
            assert!(offset >= prev, "offset regressed at {play_ms}ms");
            assert!(offset <= 950.0);
            prev = offset;
            if sim.is_finished(play_ms) {
                reached = true;
                break;
            }
        }
        assert!(reached);
        assert_eq!(prev, 950.0);
    }

    #[test]
    fn negative_velocity_travels_upward() {
        let sim = simulation(950.0, 0.0, -9_000.0);
        let midway = sim.offset_at(sim.duration_ms() / 2);
        assert!(midway < 950.0);
        assert!(midway >= 0.0);
        assert!(sim.is_finished(sim.duration_ms()));
    }

    #[test]
    fn decay_short_of_target_rests_at_natural_end() {
        // 200 px/s decays after a few px; a 10000 px travel is out of reach.
        let sim = simulation(0.0, 10_000.0, 200.0);
        let resting = sim.offset_at(sim.duration_ms());
        assert!(resting < 100.0);
        assert!(sim.is_finished(sim.duration_ms()));
    }

    #[test]
    fn start_on_target_is_immediately_finished() {
        let sim = simulation(950.0, 950.0, 9_000.0);
        assert!(sim.is_finished(0));
        assert_eq!(sim.offset_at(0), 950.0);
    }
}
