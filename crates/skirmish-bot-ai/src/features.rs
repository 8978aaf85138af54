//! Normalized situational features consumed by evaluators.
//!
//! Pure functions over agent state, each in [0, 1]; higher means
//! fuller/stronger, except `distance_to_item` which is best (1.0) when the
//! item is absent or far outside pickup relevance.

use skirmish_core::constants::{MAX_ITEM_RANGE, MIN_ITEM_RANGE};
use skirmish_core::enums::{ItemKind, WeaponKind};
use skirmish_core::types::Position;

use crate::agent::BotBody;
use crate::items::ItemQuery;
use crate::weapons::WeaponSystem;

/// Mean reserve-ammo ratio across all three weapon kinds; kinds not held
/// contribute 0.
pub fn total_weapon_strength(weapons: &WeaponSystem) -> f64 {
    let sum: f64 = WeaponKind::ALL
        .iter()
        .map(|&kind| individual_weapon_strength(weapons, kind))
        .sum();
    sum / WeaponKind::ALL.len() as f64
}

/// Reserve-ammo ratio of one weapon kind, 0 if not held.
pub fn individual_weapon_strength(weapons: &WeaponSystem, kind: WeaponKind) -> f64 {
    weapons.weapon(kind).map(|w| w.ammo_ratio()).unwrap_or(0.0)
}

/// Current health as a fraction of maximum.
pub fn health(body: &BotBody) -> f64 {
    body.health_ratio()
}

/// Proximity of the nearest active item of the kind: clamped into
/// [MIN_ITEM_RANGE, MAX_ITEM_RANGE] and normalized by MAX_ITEM_RANGE.
/// No such item resolves to 1.0.
pub fn distance_to_item(from: &Position, kind: ItemKind, items: &dyn ItemQuery) -> f64 {
    match items.closest_item(from, kind) {
        Some((_, distance)) => distance.clamp(MIN_ITEM_RANGE, MAX_ITEM_RANGE) / MAX_ITEM_RANGE,
        None => 1.0,
    }
}
