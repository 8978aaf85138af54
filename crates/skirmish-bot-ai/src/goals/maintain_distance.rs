//! Combat spacing: approach, retreat, or move laterally, re-evaluated on
//! a cooldown. This goal never completes on its own — the parent attack
//! goal ends it when target memory is lost.

use std::collections::VecDeque;

use glam::DVec3;
use rand::Rng;

use skirmish_core::constants::*;
use skirmish_core::enums::{BotEvent, GoalStatus};
use skirmish_core::types::Position;

use super::node::{clear_subgoals, run_subgoals, BotMind, GoalContext, GoalNode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tactic {
    Approach,
    Retreat,
    Strafe,
}

#[derive(Debug, Clone, Copy)]
pub struct MaintainDistanceGoal {
    tactic: Tactic,
    next_evaluation: f64,
}

impl MaintainDistanceGoal {
    pub fn new() -> Self {
        Self {
            tactic: Tactic::Strafe,
            next_evaluation: 0.0,
        }
    }
}

impl Default for MaintainDistanceGoal {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn activate(
    g: &mut MaintainDistanceGoal,
    status: &mut GoalStatus,
    subgoals: &mut VecDeque<GoalNode>,
    mind: &mut BotMind,
    ctx: &mut GoalContext,
) {
    *status = GoalStatus::Active;
    clear_subgoals(subgoals, mind, ctx);
    apply_tactic(g, subgoals, mind, ctx);
    g.next_evaluation = ctx.now + TACTIC_COOLDOWN;
}

pub(crate) fn execute(
    g: &mut MaintainDistanceGoal,
    status: &mut GoalStatus,
    subgoals: &mut VecDeque<GoalNode>,
    mind: &mut BotMind,
    ctx: &mut GoalContext,
) {
    if mind.targeting.last_sensed_position(mind.memory).is_none() {
        *status = GoalStatus::Failed;
        return;
    }

    if ctx.now >= g.next_evaluation {
        clear_subgoals(subgoals, mind, ctx);
        apply_tactic(g, subgoals, mind, ctx);
        g.next_evaluation = ctx.now + TACTIC_COOLDOWN;
    }

    match run_subgoals(subgoals, mind, ctx) {
        GoalStatus::Completed => {
            // The seek point was reached; immediately generate the next
            // one under the current tactic.
            apply_tactic(g, subgoals, mind, ctx);
        }
        GoalStatus::Failed => activate(g, status, subgoals, mind, ctx),
        _ => {}
    }
}

/// Pick the tactic for the current separation and queue its movement
/// sub-goal, if its seek point lands on the navigable surface.
fn apply_tactic(
    g: &mut MaintainDistanceGoal,
    subgoals: &mut VecDeque<GoalNode>,
    mind: &mut BotMind,
    ctx: &mut GoalContext,
) {
    let Some(target) = mind.targeting.last_sensed_position(mind.memory) else {
        return;
    };
    let owner = mind.body.position;
    let distance = owner.range_to(&target);

    g.tactic = if distance < COMBAT_MIN_DISTANCE {
        Tactic::Retreat
    } else if distance > COMBAT_MAX_DISTANCE {
        Tactic::Approach
    } else {
        Tactic::Strafe
    };

    let point = match g.tactic {
        Tactic::Approach => calculate_approach_position(&owner, &target),
        Tactic::Retreat => {
            mind.fsm.dispatch(BotEvent::Run);
            calculate_retreat_position(&owner, &target)
        }
        Tactic::Strafe => {
            let right = ctx.rng.gen_bool(0.5);
            if mind.fsm.is_dodging {
                // Oscillating lateral motion while the firefight is on.
                subgoals.push_back(GoalNode::dodge(right));
                return;
            }
            calculate_strafe_position(&owner, &target, right)
        }
    };

    if ctx.nav.region_for_point(&point, REGION_TOLERANCE).is_some() {
        subgoals.push_back(GoalNode::seek_to(point));
    }
}

/// Point on the target-owner line at 80% of the desired distance from the
/// target.
fn calculate_approach_position(owner: &Position, target: &Position) -> Position {
    let away = target.direction_to(owner);
    target.offset_by(away * (COMBAT_DESIRED_DISTANCE * 0.8))
}

/// Nudge away from the target by 20% of the desired distance. This is an
/// incremental step, not a move to 120% separation; possibly unintended,
/// kept pending product confirmation.
fn calculate_retreat_position(owner: &Position, target: &Position) -> Position {
    let away = target.direction_to(owner);
    owner.offset_by(away * (COMBAT_DESIRED_DISTANCE * 0.2))
}

/// Perpendicular offset at 30% of the desired distance, side chosen at
/// random.
fn calculate_strafe_position(owner: &Position, target: &Position, right: bool) -> Position {
    let to_target = owner.direction_to(target);
    let side = if right {
        DVec3::new(to_target.y, -to_target.x, 0.0)
    } else {
        DVec3::new(-to_target.y, to_target.x, 0.0)
    };
    owner.offset_by(side * (COMBAT_DESIRED_DISTANCE * 0.3))
}
