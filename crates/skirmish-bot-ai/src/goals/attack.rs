//! Attack decomposition and the hunt for lost targets.

use std::collections::VecDeque;

use skirmish_core::enums::GoalStatus;

use super::node::{clear_subgoals, run_subgoals, BotMind, GoalContext, GoalNode};

/// Top-level combat behavior: press a visible target, hunt an unseen one.
#[derive(Debug, Clone, Copy, Default)]
pub struct AttackGoal;

pub(crate) fn activate(
    _g: &mut AttackGoal,
    status: &mut GoalStatus,
    subgoals: &mut VecDeque<GoalNode>,
    mind: &mut BotMind,
    ctx: &mut GoalContext,
) {
    *status = GoalStatus::Active;
    clear_subgoals(subgoals, mind, ctx);

    if mind.targeting.is_target_shootable(mind.memory) {
        subgoals.push_back(GoalNode::maintain_distance());
    } else {
        subgoals.push_back(GoalNode::hunt());
    }
}

pub(crate) fn execute(
    g: &mut AttackGoal,
    status: &mut GoalStatus,
    subgoals: &mut VecDeque<GoalNode>,
    mind: &mut BotMind,
    ctx: &mut GoalContext,
) {
    // Total loss of target memory ends the attack — not merely the target
    // slipping out of sight.
    if !mind.targeting.has_target() {
        *status = GoalStatus::Completed;
        return;
    }

    match run_subgoals(subgoals, mind, ctx) {
        GoalStatus::Completed => *status = GoalStatus::Completed,
        GoalStatus::Failed => activate(g, status, subgoals, mind, ctx),
        _ => {}
    }
}

/// Walk to the target's last sensed position; give up there.
#[derive(Debug, Clone, Copy, Default)]
pub struct HuntGoal;

pub(crate) fn activate_hunt(
    _g: &mut HuntGoal,
    status: &mut GoalStatus,
    subgoals: &mut VecDeque<GoalNode>,
    mind: &mut BotMind,
    ctx: &mut GoalContext,
) {
    *status = GoalStatus::Active;
    clear_subgoals(subgoals, mind, ctx);

    match mind.targeting.last_sensed_position(mind.memory) {
        Some(last_seen) => {
            subgoals.push_back(GoalNode::find_path(last_seen));
            subgoals.push_back(GoalNode::follow_path());
        }
        None => *status = GoalStatus::Failed,
    }
}

pub(crate) fn execute_hunt(
    g: &mut HuntGoal,
    status: &mut GoalStatus,
    subgoals: &mut VecDeque<GoalNode>,
    mind: &mut BotMind,
    ctx: &mut GoalContext,
) {
    // Reacquired on the way: the hunt is moot, not failed.
    if mind.targeting.is_target_shootable(mind.memory) {
        *status = GoalStatus::Completed;
        return;
    }

    match run_subgoals(subgoals, mind, ctx) {
        GoalStatus::Completed => {
            // Reached the last-known position without contact: give up
            // the search, forget this target, and refresh the selection.
            if let Some(target) = mind.targeting.target() {
                mind.memory.delete_record(target);
            }
            mind.targeting
                .update(&mind.body.position, mind.memory, ctx.now);
            *status = GoalStatus::Completed;
        }
        GoalStatus::Failed => activate_hunt(g, status, subgoals, mind, ctx),
        _ => {}
    }
}
