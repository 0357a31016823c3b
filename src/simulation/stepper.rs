//! Fixed-step wall-clock driver.
//!
//! Translates irregular real-time frames into whole simulation steps of a
//! constant `dt`, carrying the sub-step remainder over to the next frame so
//! no simulated time is lost or duplicated.

use std::time::{Duration, Instant};

use crate::simulation::engine::Simulation;

/// Split `elapsed` into whole steps of `step` plus the remainder.
///
/// A zero `step` yields no steps and no remainder. Nanosecond integer
/// arithmetic, so the split is exact.
pub fn split_steps(elapsed: Duration, step: Duration) -> (u64, Duration) {
    if step.is_zero() {
        return (0, Duration::ZERO);
    }
    let elapsed_nanos = elapsed.as_nanos();
    let step_nanos = step.as_nanos();
    let steps = (elapsed_nanos / step_nanos) as u64;
    let remainder = Duration::from_nanos((elapsed_nanos % step_nanos) as u64);
    (steps, remainder)
}

/// Advances a [`Simulation`] in fixed steps of wall-clock time.
pub struct FixedStepDriver {
    step_seconds: f64,
    step: Duration,
    last: Instant,
    leftover: Duration,
}

impl FixedStepDriver {
    pub fn new(step_seconds: f64) -> Self {
        Self {
            step_seconds,
            step: Duration::from_secs_f64(step_seconds),
            last: Instant::now(),
            leftover: Duration::ZERO,
        }
    }

    /// Forget accumulated time, e.g. after a pause.
    pub fn reset(&mut self) {
        self.last = Instant::now();
        self.leftover = Duration::ZERO;
    }

    /// Run as many whole steps as wall-clock time since the previous call
    /// allows, carrying the remainder. Returns the number of steps run.
    pub fn advance(&mut self, simulation: &mut Simulation) -> u64 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last) + self.leftover;
        self.last = now;

        let (steps, remainder) = split_steps(elapsed, self.step);
        self.leftover = remainder;

        for _ in 0..steps {
            simulation.update(self.step_seconds);
        }
        steps
    }
}
