//! Desirability scoring for top-level goal arbitration.
//!
//! Evaluators are registered once on the brain and never owned by goals.
//! Each computes a bias-scaled desirability for its behavior; the winner
//! replaces the whole goal stack unless the matching goal is already on
//! top.

use skirmish_core::enums::{GoalKind, ItemKind};

use crate::features;
use crate::goals::{BotMind, GoalContext, GoalNode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluatorKind {
    Explore,
    GetHealth,
    Attack,
}

#[derive(Debug, Clone, Copy)]
pub struct GoalEvaluator {
    pub kind: EvaluatorKind,
    /// Per-character scaling applied to every score this evaluator emits.
    pub bias: f64,
}

impl GoalEvaluator {
    pub fn new(kind: EvaluatorKind, bias: f64) -> Self {
        Self { kind, bias }
    }

    /// Goal the evaluator installs when it wins arbitration.
    pub fn goal_kind(&self) -> GoalKind {
        match self.kind {
            EvaluatorKind::Explore => GoalKind::Explore,
            EvaluatorKind::GetHealth => GoalKind::GetItem,
            EvaluatorKind::Attack => GoalKind::Attack,
        }
    }

    pub fn make_goal(&self) -> GoalNode {
        match self.kind {
            EvaluatorKind::Explore => GoalNode::explore(),
            EvaluatorKind::GetHealth => GoalNode::get_item(ItemKind::HealthPack),
            EvaluatorKind::Attack => GoalNode::attack(),
        }
    }

    pub fn desirability(
        &self,
        top: Option<GoalKind>,
        mind: &BotMind,
        ctx: &GoalContext,
    ) -> f64 {
        let raw = match self.kind {
            // Slightly less attractive while already exploring, so a
            // marginally better option does not thrash the stack.
            EvaluatorKind::Explore => {
                if top == Some(GoalKind::Explore) {
                    0.05
                } else {
                    0.1
                }
            }
            EvaluatorKind::GetHealth => {
                if mind.body.health_ratio() < 0.5 {
                    0.8
                } else if visible_reachable_health_pack(mind, ctx) {
                    0.5
                } else {
                    0.04
                }
            }
            EvaluatorKind::Attack => {
                if mind.targeting.has_target() {
                    features::total_weapon_strength(mind.weapons) * mind.body.health_ratio()
                } else {
                    0.0
                }
            }
        };
        raw * self.bias
    }
}

/// Is there an active health pack the bot can both see and reach?
fn visible_reachable_health_pack(mind: &BotMind, ctx: &GoalContext) -> bool {
    let Some(own_region) = mind.body.region else {
        return false;
    };
    ctx.items.items().iter().any(|info| {
        info.kind == ItemKind::HealthPack
            && info.active
            && info
                .region
                .map(|r| ctx.costs.cost(own_region, r).is_finite())
                .unwrap_or(false)
            && mind
                .vision
                .can_see(ctx.nav, &mind.body.position, &info.position)
    })
}
