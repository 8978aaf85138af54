//! Collect an item the bot is standing next to.

use std::collections::VecDeque;

use skirmish_core::constants::{BOT_MAX_SPEED, PICKUP_RADIUS};
use skirmish_core::enums::{GoalStatus, ItemKind};
use skirmish_core::types::{EntityId, Velocity};

use super::node::{BotMind, GoalContext, GoalNode};

#[derive(Debug, Clone, Copy)]
pub struct PickupItemGoal {
    pub item: EntityId,
}

impl PickupItemGoal {
    pub fn new(item: EntityId) -> Self {
        Self { item }
    }
}

/// Halt in place for the duration of the pickup.
pub(crate) fn activate(
    _g: &mut PickupItemGoal,
    status: &mut GoalStatus,
    _subgoals: &mut VecDeque<GoalNode>,
    mind: &mut BotMind,
    _ctx: &mut GoalContext,
) {
    *status = GoalStatus::Active;
    mind.body.velocity = Velocity::default();
    mind.body.max_speed = 0.0;
}

pub(crate) fn execute(
    g: &mut PickupItemGoal,
    status: &mut GoalStatus,
    _subgoals: &mut VecDeque<GoalNode>,
    mind: &mut BotMind,
    ctx: &mut GoalContext,
) {
    let Some(info) = ctx.items.item(g.item) else {
        *status = GoalStatus::Failed;
        return;
    };
    if !info.active {
        // Someone got here first.
        *status = GoalStatus::Failed;
        return;
    }
    if mind.body.position.range_to(&info.position) > PICKUP_RADIUS {
        // Out of reach while halted; let the parent replan the approach.
        *status = GoalStatus::Failed;
        return;
    }

    match info.kind {
        ItemKind::HealthPack => mind.body.heal_full(),
    }
    ctx.pickups.push(super::node::PickupEvent {
        item: g.item,
        agent: mind.id,
    });
    *status = GoalStatus::Completed;
}

/// Restore normal movement whatever happened.
pub(crate) fn terminate(_g: &mut PickupItemGoal, mind: &mut BotMind, _ctx: &mut GoalContext) {
    mind.body.max_speed = BOT_MAX_SPEED;
}
