//! ECS components shared between the engine and the snapshot layer.
//!
//! Components are plain data structs with no methods beyond small accessors.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::ItemKind;
use crate::types::EntityId;

/// Stable identity attached to every addressable entity. Perception memory
/// and snapshots key on this, never on raw ECS handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ident(pub EntityId);

/// A collectible item placed in the arena.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub kind: ItemKind,
    /// Inactive items are invisible to perception and cannot be collected.
    pub active: bool,
    /// Tick at which an inactive item reactivates.
    pub respawn_at_tick: u64,
}

/// An in-flight projectile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    pub shooter: EntityId,
    pub damage: f64,
    /// Tick past which the projectile despawns without hitting anything.
    pub expires_at_tick: u64,
}
