//! Wander: pick a random region and walk to its centroid.

use std::collections::VecDeque;

use rand::Rng;

use skirmish_core::enums::GoalStatus;

use super::node::{clear_subgoals, run_subgoals, BotMind, GoalContext, GoalNode};

#[derive(Debug, Clone, Copy, Default)]
pub struct ExploreGoal;

pub(crate) fn activate(
    _g: &mut ExploreGoal,
    status: &mut GoalStatus,
    subgoals: &mut VecDeque<GoalNode>,
    mind: &mut BotMind,
    ctx: &mut GoalContext,
) {
    *status = GoalStatus::Active;
    clear_subgoals(subgoals, mind, ctx);

    let sample = ctx.rng.gen::<f64>();
    match ctx.nav.random_region(sample) {
        Some(region) => {
            subgoals.push_back(GoalNode::find_path(region.centroid));
            subgoals.push_back(GoalNode::follow_path());
        }
        None => *status = GoalStatus::Failed,
    }
}

pub(crate) fn execute(
    g: &mut ExploreGoal,
    status: &mut GoalStatus,
    subgoals: &mut VecDeque<GoalNode>,
    mind: &mut BotMind,
    ctx: &mut GoalContext,
) {
    match run_subgoals(subgoals, mind, ctx) {
        GoalStatus::Completed => *status = GoalStatus::Completed,
        GoalStatus::Failed => {
            // Replan from scratch with a fresh destination.
            activate(g, status, subgoals, mind, ctx);
        }
        _ => {}
    }
}
