//! Walk the path stored on the agent via the locomotion behaviors.

use std::collections::VecDeque;

use skirmish_core::constants::ARRIVE_TOLERANCE;
use skirmish_core::enums::{BotEvent, GoalStatus};

use super::node::{BotMind, GoalContext, GoalNode};

#[derive(Debug, Clone, Copy, Default)]
pub struct FollowPathGoal;

pub(crate) fn activate(
    _g: &mut FollowPathGoal,
    status: &mut GoalStatus,
    _subgoals: &mut VecDeque<GoalNode>,
    mind: &mut BotMind,
    _ctx: &mut GoalContext,
) {
    *status = GoalStatus::Active;
    match &mind.path.waypoints {
        Some(waypoints) if !waypoints.is_empty() => {
            mind.steering.follow_path.path = waypoints.clone();
            mind.steering.follow_path.current = 0;
            mind.steering.follow_path.active = true;
            mind.steering.stay_near_path.active = true;
        }
        _ => *status = GoalStatus::Failed,
    }
}

pub(crate) fn execute(
    _g: &mut FollowPathGoal,
    status: &mut GoalStatus,
    _subgoals: &mut VecDeque<GoalNode>,
    mind: &mut BotMind,
    _ctx: &mut GoalContext,
) {
    let Some(destination) = mind.steering.follow_path.path.last().copied() else {
        *status = GoalStatus::Failed;
        return;
    };
    if mind.body.position.range_to(&destination) <= ARRIVE_TOLERANCE {
        *status = GoalStatus::Completed;
        mind.fsm.dispatch(BotEvent::PointReached);
    }
}

/// Locomotion behaviors are released unconditionally — also on failure or
/// early termination.
pub(crate) fn terminate(_g: &mut FollowPathGoal, mind: &mut BotMind, _ctx: &mut GoalContext) {
    mind.steering.follow_path.active = false;
    mind.steering.stay_near_path.active = false;
}
