//! Request a path from the deferred planner and wait for the result.

use std::collections::VecDeque;

use skirmish_core::enums::GoalStatus;
use skirmish_core::types::Position;

use super::node::{BotMind, GoalContext, GoalNode};

#[derive(Debug, Clone)]
pub struct FindPathGoal {
    pub to: Position,
    request: Option<u64>,
}

impl FindPathGoal {
    pub fn new(to: Position) -> Self {
        Self { to, request: None }
    }
}

pub(crate) fn activate(
    g: &mut FindPathGoal,
    status: &mut GoalStatus,
    _subgoals: &mut VecDeque<GoalNode>,
    mind: &mut BotMind,
    ctx: &mut GoalContext,
) {
    *status = GoalStatus::Active;
    mind.path.waypoints = None;
    g.request = Some(ctx.planner.submit(mind.body.position, g.to));
}

/// Pure wait: the status changes only when the planner delivers. The
/// result is claimed by request id, so a result computed for a request
/// this goal no longer owns (after cancel) can never be observed here.
pub(crate) fn execute(
    g: &mut FindPathGoal,
    status: &mut GoalStatus,
    _subgoals: &mut VecDeque<GoalNode>,
    mind: &mut BotMind,
    ctx: &mut GoalContext,
) {
    let Some(id) = g.request else { return };
    match ctx.planner.poll(id) {
        None => {} // still queued
        Some(Some(waypoints)) => {
            mind.path.waypoints = Some(waypoints);
            g.request = None;
            *status = GoalStatus::Completed;
        }
        Some(None) => {
            g.request = None;
            *status = GoalStatus::Failed;
        }
    }
}

pub(crate) fn terminate(g: &mut FindPathGoal, _mind: &mut BotMind, ctx: &mut GoalContext) {
    if let Some(id) = g.request.take() {
        ctx.planner.cancel(id);
    }
}
