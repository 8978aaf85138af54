//! Goal tree node, dispatch, and the sub-goal execution contract.

use std::collections::VecDeque;

use rand_chacha::ChaCha8Rng;

use skirmish_core::enums::{GoalKind, GoalStatus, ItemKind};
use skirmish_core::surface::{NavigationQuery, RegionCostQuery};
use skirmish_core::types::{EntityId, Position};

use crate::agent::{BotBody, PathState};
use crate::fsm::CombatFsm;
use crate::items::ItemQuery;
use crate::memory::MemorySystem;
use crate::planner::PathPlanner;
use crate::steering::SteeringState;
use crate::targeting::TargetSystem;
use crate::vision::Vision;
use crate::weapons::WeaponSystem;

use super::attack::{AttackGoal, HuntGoal};
use super::dodge::DodgeGoal;
use super::explore::ExploreGoal;
use super::find_path::FindPathGoal;
use super::follow_path::FollowPathGoal;
use super::get_item::GetItemGoal;
use super::maintain_distance::MaintainDistanceGoal;
use super::pickup::PickupItemGoal;
use super::seek::SeekToPositionGoal;
use super::{attack, dodge, explore, find_path, follow_path, get_item, maintain_distance, pickup, seek};

/// Mutable view of everything a goal may touch on its own bot.
pub struct BotMind<'a> {
    pub id: EntityId,
    pub body: &'a mut BotBody,
    pub vision: &'a Vision,
    pub memory: &'a mut MemorySystem,
    pub targeting: &'a mut TargetSystem,
    pub weapons: &'a mut WeaponSystem,
    pub steering: &'a mut SteeringState,
    pub fsm: &'a mut CombatFsm,
    pub path: &'a mut PathState,
}

/// An item consumed during goal execution, applied by the engine after
/// the per-bot update.
#[derive(Debug, Clone, Copy)]
pub struct PickupEvent {
    pub item: EntityId,
    pub agent: EntityId,
}

/// Shared per-tick services for goal execution.
pub struct GoalContext<'a> {
    pub now: f64,
    pub dt: f64,
    pub nav: &'a dyn NavigationQuery,
    pub costs: &'a dyn RegionCostQuery,
    pub items: &'a dyn ItemQuery,
    pub planner: &'a mut PathPlanner,
    pub rng: &'a mut ChaCha8Rng,
    /// Items consumed by pickups this tick; applied by the engine.
    pub pickups: &'a mut Vec<PickupEvent>,
}

/// Behavior payload of one goal node.
pub enum GoalPayload {
    Explore(ExploreGoal),
    FindPath(FindPathGoal),
    FollowPath(FollowPathGoal),
    Attack(AttackGoal),
    Hunt(HuntGoal),
    MaintainDistance(MaintainDistanceGoal),
    GetItem(GetItemGoal),
    PickupItem(PickupItemGoal),
    SeekToPosition(SeekToPositionGoal),
    Dodge(DodgeGoal),
}

/// One node in a bot's goal tree. Composites own their sub-goals; a node
/// is destroyed when terminated and popped by its parent (or the brain).
pub struct GoalNode {
    pub status: GoalStatus,
    pub payload: GoalPayload,
    pub subgoals: VecDeque<GoalNode>,
}

impl GoalNode {
    fn with_payload(payload: GoalPayload) -> Self {
        Self {
            status: GoalStatus::Inactive,
            payload,
            subgoals: VecDeque::new(),
        }
    }

    pub fn explore() -> Self {
        Self::with_payload(GoalPayload::Explore(ExploreGoal::default()))
    }

    pub fn find_path(to: Position) -> Self {
        Self::with_payload(GoalPayload::FindPath(FindPathGoal::new(to)))
    }

    pub fn follow_path() -> Self {
        Self::with_payload(GoalPayload::FollowPath(FollowPathGoal::default()))
    }

    pub fn attack() -> Self {
        Self::with_payload(GoalPayload::Attack(AttackGoal::default()))
    }

    pub fn hunt() -> Self {
        Self::with_payload(GoalPayload::Hunt(HuntGoal::default()))
    }

    pub fn maintain_distance() -> Self {
        Self::with_payload(GoalPayload::MaintainDistance(MaintainDistanceGoal::new()))
    }

    pub fn get_item(kind: ItemKind) -> Self {
        Self::with_payload(GoalPayload::GetItem(GetItemGoal::new(kind)))
    }

    pub fn pickup_item(item: EntityId) -> Self {
        Self::with_payload(GoalPayload::PickupItem(PickupItemGoal::new(item)))
    }

    pub fn seek_to(target: Position) -> Self {
        Self::with_payload(GoalPayload::SeekToPosition(SeekToPositionGoal::new(target)))
    }

    pub fn dodge(right: bool) -> Self {
        Self::with_payload(GoalPayload::Dodge(DodgeGoal::new(right)))
    }

    /// Behavior discriminant for by-value comparison.
    pub fn kind(&self) -> GoalKind {
        match self.payload {
            GoalPayload::Explore(_) => GoalKind::Explore,
            GoalPayload::FindPath(_) => GoalKind::FindPath,
            GoalPayload::FollowPath(_) => GoalKind::FollowPath,
            GoalPayload::Attack(_) => GoalKind::Attack,
            GoalPayload::Hunt(_) => GoalKind::Hunt,
            GoalPayload::MaintainDistance(_) => GoalKind::MaintainDistance,
            GoalPayload::GetItem(_) => GoalKind::GetItem,
            GoalPayload::PickupItem(_) => GoalKind::PickupItem,
            GoalPayload::SeekToPosition(_) => GoalKind::SeekToPosition,
            GoalPayload::Dodge(_) => GoalKind::Dodge,
        }
    }

    /// Activate if needed, then execute while active. Returns the status
    /// after this tick.
    pub fn process(&mut self, mind: &mut BotMind, ctx: &mut GoalContext) -> GoalStatus {
        if self.status == GoalStatus::Inactive {
            self.activate(mind, ctx);
        }
        if self.status == GoalStatus::Active {
            self.execute(mind, ctx);
        }
        self.status
    }

    pub fn activate(&mut self, mind: &mut BotMind, ctx: &mut GoalContext) {
        let Self {
            status,
            payload,
            subgoals,
        } = self;
        match payload {
            GoalPayload::Explore(g) => explore::activate(g, status, subgoals, mind, ctx),
            GoalPayload::FindPath(g) => find_path::activate(g, status, subgoals, mind, ctx),
            GoalPayload::FollowPath(g) => follow_path::activate(g, status, subgoals, mind, ctx),
            GoalPayload::Attack(g) => attack::activate(g, status, subgoals, mind, ctx),
            GoalPayload::Hunt(g) => attack::activate_hunt(g, status, subgoals, mind, ctx),
            GoalPayload::MaintainDistance(g) => {
                maintain_distance::activate(g, status, subgoals, mind, ctx)
            }
            GoalPayload::GetItem(g) => get_item::activate(g, status, subgoals, mind, ctx),
            GoalPayload::PickupItem(g) => pickup::activate(g, status, subgoals, mind, ctx),
            GoalPayload::SeekToPosition(g) => seek::activate(g, status, subgoals, mind, ctx),
            GoalPayload::Dodge(g) => dodge::activate(g, status, subgoals, mind, ctx),
        }
    }

    pub fn execute(&mut self, mind: &mut BotMind, ctx: &mut GoalContext) {
        let Self {
            status,
            payload,
            subgoals,
        } = self;
        match payload {
            GoalPayload::Explore(g) => explore::execute(g, status, subgoals, mind, ctx),
            GoalPayload::FindPath(g) => find_path::execute(g, status, subgoals, mind, ctx),
            GoalPayload::FollowPath(g) => follow_path::execute(g, status, subgoals, mind, ctx),
            GoalPayload::Attack(g) => attack::execute(g, status, subgoals, mind, ctx),
            GoalPayload::Hunt(g) => attack::execute_hunt(g, status, subgoals, mind, ctx),
            GoalPayload::MaintainDistance(g) => {
                maintain_distance::execute(g, status, subgoals, mind, ctx)
            }
            GoalPayload::GetItem(g) => get_item::execute(g, status, subgoals, mind, ctx),
            GoalPayload::PickupItem(g) => pickup::execute(g, status, subgoals, mind, ctx),
            GoalPayload::SeekToPosition(g) => seek::execute(g, status, subgoals, mind, ctx),
            GoalPayload::Dodge(g) => dodge::execute(g, status, subgoals, mind, ctx),
        }
    }

    /// Terminate this goal and, recursively, any remaining sub-goals.
    /// Always releases externally-claimed resources (steering, pending
    /// path requests) so a replacement goal starts clean.
    pub fn terminate(&mut self, mind: &mut BotMind, ctx: &mut GoalContext) {
        clear_subgoals(&mut self.subgoals, mind, ctx);
        match &mut self.payload {
            GoalPayload::FindPath(g) => find_path::terminate(g, mind, ctx),
            GoalPayload::FollowPath(g) => follow_path::terminate(g, mind, ctx),
            GoalPayload::PickupItem(g) => pickup::terminate(g, mind, ctx),
            GoalPayload::SeekToPosition(g) => seek::terminate(g, mind, ctx),
            GoalPayload::Dodge(g) => dodge::terminate(g, mind, ctx),
            _ => {}
        }
    }
}

/// Run a composite's sub-goal queue for one tick.
///
/// Completed/failed goals are terminated and removed from the FRONT only;
/// then the (new) front goal — and only it — is processed. The composite
/// is `Completed` only once the queue drains with every goal completed,
/// `Failed` the tick its front goal fails, `Active` otherwise.
pub(crate) fn run_subgoals(
    subgoals: &mut VecDeque<GoalNode>,
    mind: &mut BotMind,
    ctx: &mut GoalContext,
) -> GoalStatus {
    while let Some(front) = subgoals.front() {
        if matches!(front.status, GoalStatus::Completed | GoalStatus::Failed) {
            if let Some(mut finished) = subgoals.pop_front() {
                finished.terminate(mind, ctx);
            }
        } else {
            break;
        }
    }

    let Some(front) = subgoals.front_mut() else {
        return GoalStatus::Completed;
    };
    let status = front.process(mind, ctx);
    match status {
        GoalStatus::Completed if subgoals.len() == 1 => GoalStatus::Completed,
        GoalStatus::Failed => GoalStatus::Failed,
        _ => GoalStatus::Active,
    }
}

/// Terminate and drop every sub-goal, front first.
pub(crate) fn clear_subgoals(
    subgoals: &mut VecDeque<GoalNode>,
    mind: &mut BotMind,
    ctx: &mut GoalContext,
) {
    while let Some(mut goal) = subgoals.pop_front() {
        goal.terminate(mind, ctx);
    }
}
