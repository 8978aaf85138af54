//! Retrieve the closest reachable item of a kind.

use std::collections::VecDeque;

use skirmish_core::constants::{ITEM_CHECK_RATE, REGION_TOLERANCE};
use skirmish_core::enums::{GoalStatus, ItemKind};
use skirmish_core::types::EntityId;

use crate::regulator::Regulator;

use super::node::{clear_subgoals, run_subgoals, BotMind, GoalContext, GoalNode};

#[derive(Debug, Clone)]
pub struct GetItemGoal {
    pub kind: ItemKind,
    item: Option<EntityId>,
    /// Throttles the is-it-still-there visibility check.
    check: Regulator,
    pushed_pickup: bool,
}

impl GetItemGoal {
    pub fn new(kind: ItemKind) -> Self {
        Self {
            kind,
            item: None,
            check: Regulator::new(ITEM_CHECK_RATE),
            pushed_pickup: false,
        }
    }
}

/// Choose by navigation-graph cost, not straight-line distance: a pack
/// behind a wall is farther than it looks.
pub(crate) fn activate(
    g: &mut GetItemGoal,
    status: &mut GoalStatus,
    subgoals: &mut VecDeque<GoalNode>,
    mind: &mut BotMind,
    ctx: &mut GoalContext,
) {
    *status = GoalStatus::Active;
    clear_subgoals(subgoals, mind, ctx);
    g.item = None;
    g.pushed_pickup = false;

    let own_region = match mind.body.region.or_else(|| {
        ctx.nav
            .region_for_point(&mind.body.position, REGION_TOLERANCE)
            .map(|r| r.index)
    }) {
        Some(region) => region,
        None => {
            *status = GoalStatus::Failed;
            return;
        }
    };

    let mut best: Option<(f64, EntityId, skirmish_core::types::Position)> = None;
    for info in ctx.items.items() {
        if info.kind != g.kind || !info.active {
            continue;
        }
        let Some(item_region) = info.region else { continue };
        let cost = ctx.costs.cost(own_region, item_region);
        if !cost.is_finite() {
            continue;
        }
        if best.map_or(true, |(b, _, _)| cost < b) {
            best = Some((cost, info.id, info.position));
        }
    }

    match best {
        Some((_, id, position)) => {
            g.item = Some(id);
            subgoals.push_back(GoalNode::find_path(position));
            subgoals.push_back(GoalNode::follow_path());
        }
        None => *status = GoalStatus::Failed,
    }
}

pub(crate) fn execute(
    g: &mut GetItemGoal,
    status: &mut GoalStatus,
    subgoals: &mut VecDeque<GoalNode>,
    mind: &mut BotMind,
    ctx: &mut GoalContext,
) {
    let Some(item_id) = g.item else {
        *status = GoalStatus::Failed;
        return;
    };

    // Throttled check that a competitor has not taken the item. Only a
    // sighted item can be judged gone; otherwise keep walking on faith.
    if g.check.ready() {
        let taken = match ctx.items.item(item_id) {
            Some(info) => {
                mind.vision
                    .can_see(ctx.nav, &mind.body.position, &info.position)
                    && !info.active
            }
            None => true,
        };
        if taken {
            // Replan toward a different item of the same kind.
            activate(g, status, subgoals, mind, ctx);
            return;
        }
    }

    match run_subgoals(subgoals, mind, ctx) {
        GoalStatus::Completed if !g.pushed_pickup => {
            subgoals.push_back(GoalNode::pickup_item(item_id));
            g.pushed_pickup = true;
        }
        GoalStatus::Completed => *status = GoalStatus::Completed,
        GoalStatus::Failed => activate(g, status, subgoals, mind, ctx),
        _ => {}
    }
}
