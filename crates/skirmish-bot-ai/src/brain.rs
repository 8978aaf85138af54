//! Top-level goal arbitration and execution.

use std::collections::VecDeque;

use crate::evaluators::{EvaluatorKind, GoalEvaluator};
use crate::goals::node::clear_subgoals;
use crate::goals::{BotMind, GoalContext, GoalNode};

use skirmish_core::enums::{GoalKind, GoalStatus};

/// The bot's goal stack plus its registered evaluators.
pub struct Brain {
    pub subgoals: VecDeque<GoalNode>,
    pub evaluators: Vec<GoalEvaluator>,
}

impl Brain {
    pub fn new() -> Self {
        Self {
            subgoals: VecDeque::new(),
            evaluators: Vec::new(),
        }
    }

    /// Standard loadout: explore, health retrieval, and attack all
    /// weighted evenly.
    pub fn with_default_evaluators() -> Self {
        let mut brain = Self::new();
        brain
            .evaluators
            .push(GoalEvaluator::new(EvaluatorKind::Explore, 1.0));
        brain
            .evaluators
            .push(GoalEvaluator::new(EvaluatorKind::GetHealth, 1.0));
        brain
            .evaluators
            .push(GoalEvaluator::new(EvaluatorKind::Attack, 1.0));
        brain
    }

    /// Kind of the current top-level goal, if any.
    pub fn top_kind(&self) -> Option<GoalKind> {
        self.subgoals.front().map(|g| g.kind())
    }

    /// Score every evaluator and install the winner's goal — replacing
    /// the entire stack — unless a goal of that kind is already on top.
    pub fn arbitrate(&mut self, mind: &mut BotMind, ctx: &mut GoalContext) {
        let top = self.top_kind();
        let mut winner: Option<(f64, GoalEvaluator)> = None;
        for evaluator in &self.evaluators {
            let score = evaluator.desirability(top, mind, ctx);
            if winner.map_or(true, |(best, _)| score > best) {
                winner = Some((score, *evaluator));
            }
        }

        if let Some((_, evaluator)) = winner {
            if top != Some(evaluator.goal_kind()) {
                self.replace_goal(evaluator.make_goal(), mind, ctx);
            }
        }
    }

    /// Terminate the whole stack and install a new top-level goal. The
    /// old tree releases steering before the new goal activates, so two
    /// goals never drive movement at once.
    pub fn replace_goal(&mut self, goal: GoalNode, mind: &mut BotMind, ctx: &mut GoalContext) {
        clear_subgoals(&mut self.subgoals, mind, ctx);
        self.subgoals.push_back(goal);
    }

    /// Drop finished goals off the front, then run the current one.
    pub fn execute(&mut self, mind: &mut BotMind, ctx: &mut GoalContext) {
        while let Some(front) = self.subgoals.front() {
            if matches!(front.status, GoalStatus::Completed | GoalStatus::Failed) {
                if let Some(mut finished) = self.subgoals.pop_front() {
                    finished.terminate(mind, ctx);
                }
            } else {
                break;
            }
        }
        if let Some(front) = self.subgoals.front_mut() {
            front.process(mind, ctx);
        }
    }
}

impl Default for Brain {
    fn default() -> Self {
        Self::new()
    }
}
