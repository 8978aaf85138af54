//! Events emitted by the simulation for presentation-layer feedback.
//!
//! The core owns only the transition facts; muzzle flashes, sounds and
//! animations are the consumer's concern.

use serde::{Deserialize, Serialize};

use crate::enums::{ItemKind, WeaponKind};
use crate::types::{EntityId, Position};

/// Combat and pickup events for the frontend effect system.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CombatEvent {
    /// A weapon discharged.
    WeaponFired {
        shooter: EntityId,
        weapon: WeaponKind,
        target: Position,
    },
    /// A clip refill started.
    ReloadStarted { agent: EntityId, weapon: WeaponKind },
    /// A weapon finished its equip transition.
    WeaponEquipped { agent: EntityId, weapon: WeaponKind },
    /// A weapon finished lowering ahead of a change.
    WeaponHidden { agent: EntityId, weapon: WeaponKind },
    /// A projectile struck a bot.
    ProjectileImpact {
        victim: EntityId,
        attacker: EntityId,
        damage: f64,
    },
    /// A bot ran out of health.
    AgentDied { agent: EntityId, killer: EntityId },
    /// An item was picked up.
    ItemCollected {
        item: EntityId,
        agent: EntityId,
        kind: ItemKind,
    },
    /// A collected item became available again.
    ItemRespawned { item: EntityId, kind: ItemKind },
}
