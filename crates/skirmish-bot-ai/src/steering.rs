//! Locomotion behavior handles toggled by the goal layer.
//!
//! The AI only flips these on and off and fills in their targets; the
//! steering math itself lives outside the decision core.

use skirmish_core::constants::PATH_RADIUS;
use skirmish_core::types::Position;

/// Head straight for a point.
#[derive(Debug, Clone, Default)]
pub struct SeekBehavior {
    pub active: bool,
    pub target: Position,
}

/// Walk a waypoint chain front to back.
#[derive(Debug, Clone, Default)]
pub struct FollowPathBehavior {
    pub active: bool,
    pub path: Vec<Position>,
    /// Index of the waypoint currently steered for.
    pub current: usize,
}

/// Correct back toward the path when drifting beyond a lateral radius.
#[derive(Debug, Clone)]
pub struct StayNearPathBehavior {
    pub active: bool,
    pub radius: f64,
}

impl Default for StayNearPathBehavior {
    fn default() -> Self {
        Self {
            active: false,
            radius: PATH_RADIUS,
        }
    }
}

/// All steering handles of one bot.
#[derive(Debug, Clone, Default)]
pub struct SteeringState {
    pub seek: SeekBehavior,
    pub follow_path: FollowPathBehavior,
    pub stay_near_path: StayNearPathBehavior,
}

impl SteeringState {
    /// Deactivate every behavior.
    pub fn release_all(&mut self) {
        self.seek.active = false;
        self.follow_path.active = false;
        self.stay_near_path.active = false;
    }
}
