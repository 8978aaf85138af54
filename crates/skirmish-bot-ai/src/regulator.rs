//! Frame-count update throttle.

use skirmish_core::constants::TICK_RATE;

/// Gates how often a subsystem updates, counted in simulation frames
/// against the nominal tick rate — not wall-clock time. If the host ticks
/// at a different rate than `TICK_RATE`, regulated rates drift with it;
/// this is an accepted approximation.
#[derive(Debug, Clone)]
pub struct Regulator {
    /// Frames between updates; 0 disables the throttle entirely.
    interval: u64,
    count: u64,
}

impl Regulator {
    /// Create a regulator targeting `updates_per_second`. Non-positive
    /// rates disable the throttle: `ready()` is then always true.
    pub fn new(updates_per_second: f64) -> Self {
        let interval = if updates_per_second <= 0.0 {
            0
        } else {
            ((TICK_RATE as f64 / updates_per_second).round() as u64).max(1)
        };
        Self { interval, count: 0 }
    }

    /// Advance the frame counter; true exactly once per interval.
    pub fn ready(&mut self) -> bool {
        if self.interval == 0 {
            return true;
        }
        self.count += 1;
        if self.count >= self.interval {
            self.count = 0;
            true
        } else {
            false
        }
    }

    /// Restart the current interval without changing the rate.
    pub fn reset(&mut self) {
        self.count = 0;
    }
}
