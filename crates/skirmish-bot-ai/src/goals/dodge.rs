//! Oscillating lateral evasion while the target is shootable.
//!
//! Seeks a sideways point relative to the target; when the arena runs out
//! in the current direction the side flips and the goal restarts itself
//! (`Inactive`) instead of failing, producing the dodge oscillation.

use std::collections::VecDeque;

use glam::DVec3;

use skirmish_core::constants::{ARRIVE_TOLERANCE, DODGE_DISTANCE, REGION_TOLERANCE};
use skirmish_core::enums::{BotEvent, GoalStatus};
use skirmish_core::types::Position;

use super::node::{BotMind, GoalContext, GoalNode};

#[derive(Debug, Clone, Copy)]
pub struct DodgeGoal {
    right: bool,
    target_point: Position,
}

impl DodgeGoal {
    pub fn new(right: bool) -> Self {
        Self {
            right,
            target_point: Position::default(),
        }
    }
}

pub(crate) fn activate(
    g: &mut DodgeGoal,
    status: &mut GoalStatus,
    _subgoals: &mut VecDeque<GoalNode>,
    mind: &mut BotMind,
    ctx: &mut GoalContext,
) {
    *status = GoalStatus::Active;

    match dodge_point(g, mind, ctx) {
        Some(point) => {
            g.target_point = point;
            mind.steering.seek.target = point;
            mind.steering.seek.active = true;
            mind.fsm.dispatch(BotEvent::DodgeOn);
        }
        None => {
            // Cornered on both sides.
            *status = GoalStatus::Failed;
        }
    }
}

pub(crate) fn execute(
    g: &mut DodgeGoal,
    status: &mut GoalStatus,
    _subgoals: &mut VecDeque<GoalNode>,
    mind: &mut BotMind,
    ctx: &mut GoalContext,
) {
    // Dodging only makes sense while the target can shoot back.
    if !mind.targeting.is_target_shootable(mind.memory) {
        *status = GoalStatus::Completed;
        return;
    }

    // Out of room in the current direction: flip sides and restart.
    if !can_move_towards(g, mind, ctx) {
        g.right = !g.right;
        mind.steering.seek.active = false;
        *status = GoalStatus::Inactive;
        return;
    }

    // Reached the dodge point: restart from the new position, same side.
    if mind.body.position.range_to(&g.target_point) <= ARRIVE_TOLERANCE {
        mind.steering.seek.active = false;
        *status = GoalStatus::Inactive;
    }
}

pub(crate) fn terminate(_g: &mut DodgeGoal, mind: &mut BotMind, _ctx: &mut GoalContext) {
    mind.steering.seek.active = false;
    mind.fsm.dispatch(BotEvent::DodgeOff);
}

/// Next sideways point, flipping direction once if the preferred side is
/// off the walkable surface.
fn dodge_point(g: &mut DodgeGoal, mind: &BotMind, ctx: &GoalContext) -> Option<Position> {
    for _ in 0..2 {
        let point = mind
            .body
            .position
            .offset_by(side_direction(g, mind) * DODGE_DISTANCE);
        if ctx.nav.region_for_point(&point, REGION_TOLERANCE).is_some() {
            return Some(point);
        }
        g.right = !g.right;
    }
    None
}

/// Room left in the current dodge direction?
fn can_move_towards(g: &DodgeGoal, mind: &BotMind, ctx: &GoalContext) -> bool {
    let probe = mind
        .body
        .position
        .offset_by(side_direction(g, mind) * DODGE_DISTANCE);
    ctx.nav.region_for_point(&probe, REGION_TOLERANCE).is_some()
}

/// Sideways unit vector relative to the target (or the facing when the
/// target position is unknown).
fn side_direction(g: &DodgeGoal, mind: &BotMind) -> DVec3 {
    let forward = mind
        .targeting
        .last_sensed_position(mind.memory)
        .map(|p| mind.body.position.direction_to(&p))
        .filter(|d| *d != DVec3::ZERO)
        .unwrap_or(mind.body.heading);
    if g.right {
        DVec3::new(forward.y, -forward.x, 0.0)
    } else {
        DVec3::new(-forward.y, forward.x, 0.0)
    }
}
