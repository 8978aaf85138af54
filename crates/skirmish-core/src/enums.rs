//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Weapon category. Every bot can hold at most one weapon of each kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponKind {
    /// Starting sidearm. Always present after a weapon-system reset.
    #[default]
    Blaster,
    /// Close-range burst weapon.
    Shotgun,
    /// Mid/long-range automatic weapon.
    AssaultRifle,
}

impl WeaponKind {
    /// All weapon kinds in inventory scan order.
    pub const ALL: [WeaponKind; 3] = [
        WeaponKind::Blaster,
        WeaponKind::Shotgun,
        WeaponKind::AssaultRifle,
    ];
}

/// Weapon readiness state.
///
/// `Ready` is the only state a shot can be fired from. `Shot`, `Reload`,
/// `Equip` and `Hide` are timed states resolved by the weapon's own
/// per-tick update once their deadline passes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeaponStatus {
    /// Holstered; not the visible weapon.
    #[default]
    Unready,
    /// Being brought up after a weapon change.
    Equip,
    /// In hand, able to fire.
    Ready,
    /// Between shots (fire-rate delay).
    Shot,
    /// Clip refill in progress.
    Reload,
    /// Clip empty, reserve ammo available.
    Empty,
    /// Clip and reserve both empty.
    OutOfAmmo,
    /// Being lowered ahead of a weapon change.
    Hide,
}

/// Lifecycle status of a goal node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoalStatus {
    /// Not yet activated (also used to request a restart).
    #[default]
    Inactive,
    /// Activated and executing.
    Active,
    /// Finished successfully.
    Completed,
    /// Finished unsuccessfully.
    Failed,
}

/// Behavior discriminant for a goal node. Evaluators compare these by
/// value to decide whether the stack already runs the behavior they want.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoalKind {
    Explore,
    FindPath,
    FollowPath,
    Attack,
    Hunt,
    MaintainDistance,
    GetItem,
    PickupItem,
    SeekToPosition,
    Dodge,
}

/// Collectible item category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    HealthPack,
}

/// Sub-state of the attack behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackState {
    #[default]
    Pursuing,
    Retreating,
}

/// Top-level behavior state of a bot, driven by the combat state machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BotState {
    /// Wandering the arena looking for contact.
    #[default]
    Exploring,
    /// Moving to a specific point (hunting a last-known position).
    Moving,
    /// Engaged with a target.
    Attacking(AttackState),
    /// Out of the match; despawned by cleanup.
    Dead,
}

/// Events dispatched into a bot's combat state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BotEvent {
    /// Target system acquired a shootable target.
    EnemySpotted,
    /// Target system lost all target memory.
    EnemyLost,
    /// Moving toward a target's last-known position.
    Hunt,
    /// Falling back from a too-close target.
    Run,
    /// Lateral evasion started.
    DodgeOn,
    /// Lateral evasion ended.
    DodgeOff,
    /// Arrived at a movement destination.
    PointReached,
    /// This bot was killed.
    Kill,
}

/// Match phase (top-level engine state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    #[default]
    Lobby,
    Active,
    Paused,
    Over,
}
