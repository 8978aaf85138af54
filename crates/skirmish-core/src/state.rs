//! Match state snapshot — the complete visible state produced each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::CombatEvent;
use crate::types::{EntityId, Position, SimTime, Velocity};

/// Complete match state broadcast to the host after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub time: SimTime,
    pub phase: MatchPhase,
    pub agents: Vec<AgentView>,
    pub items: Vec<ItemView>,
    pub projectiles: Vec<ProjectileView>,
    pub events: Vec<CombatEvent>,
    pub score: ScoreView,
}

/// One bot as seen by the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentView {
    pub id: EntityId,
    pub position: Position,
    pub velocity: Velocity,
    /// Facing direction (unit vector).
    pub heading: Position,
    pub health: f64,
    pub max_health: f64,
    pub state: BotState,
    pub weapon: WeaponKind,
    pub weapon_status: WeaponStatus,
    /// Discriminant of the current top-level goal, if any.
    pub goal: Option<GoalKind>,
    /// Current target, if the target system holds one.
    pub target: Option<EntityId>,
    pub is_dodging: bool,
}

/// One item spot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemView {
    pub id: EntityId,
    pub kind: ItemKind,
    pub position: Position,
    pub active: bool,
}

/// One in-flight projectile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Position,
    pub shooter: EntityId,
}

/// Running match totals.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub shots_fired: u64,
    pub kills: u32,
    pub items_collected: u32,
}
