//! Thin wrapper over the seek steering behavior.

use std::collections::VecDeque;

use skirmish_core::constants::ARRIVE_TOLERANCE;
use skirmish_core::enums::GoalStatus;
use skirmish_core::types::Position;

use super::node::{BotMind, GoalContext, GoalNode};

#[derive(Debug, Clone, Copy)]
pub struct SeekToPositionGoal {
    pub target: Position,
}

impl SeekToPositionGoal {
    pub fn new(target: Position) -> Self {
        Self { target }
    }
}

pub(crate) fn activate(
    g: &mut SeekToPositionGoal,
    status: &mut GoalStatus,
    _subgoals: &mut VecDeque<GoalNode>,
    mind: &mut BotMind,
    _ctx: &mut GoalContext,
) {
    *status = GoalStatus::Active;
    mind.steering.seek.target = g.target;
    mind.steering.seek.active = true;
}

pub(crate) fn execute(
    g: &mut SeekToPositionGoal,
    status: &mut GoalStatus,
    _subgoals: &mut VecDeque<GoalNode>,
    mind: &mut BotMind,
    _ctx: &mut GoalContext,
) {
    if mind.body.position.range_to(&g.target) <= ARRIVE_TOLERANCE {
        *status = GoalStatus::Completed;
    }
}

pub(crate) fn terminate(_g: &mut SeekToPositionGoal, mind: &mut BotMind, _ctx: &mut GoalContext) {
    mind.steering.seek.active = false;
}
