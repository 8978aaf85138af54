//! Per-kind weapon parameters and fuzzy rule tables.

use skirmish_core::constants::*;
use skirmish_core::enums::WeaponKind;

use crate::fuzzy::{FuzzyModule, FuzzySet, DESIRABLE, UNDESIRABLE, VERY_DESIRABLE};

/// Static parameters for one weapon kind.
#[derive(Debug, Clone)]
pub struct WeaponProfile {
    pub kind: WeaponKind,
    /// Rounds per clip.
    pub rounds_per_clip: u32,
    /// Maximum reserve ammo.
    pub max_ammo: u32,
    /// Reserve ammo granted at spawn.
    pub initial_ammo: u32,
    /// Seconds between shots.
    pub shot_time: f64,
    /// Seconds for a clip refill.
    pub reload_time: f64,
    /// Seconds to raise after a weapon change.
    pub equip_time: f64,
    /// Seconds to lower ahead of a weapon change.
    pub hide_time: f64,
    /// Damage per projectile.
    pub damage: f64,
    /// Projectiles per trigger pull (shotgun pellets).
    pub pellets: u32,
    /// Desirability scoring module for this kind.
    pub fuzzy: FuzzyModule,
}

/// Get the static profile for a weapon kind.
pub fn get_profile(kind: WeaponKind) -> WeaponProfile {
    match kind {
        WeaponKind::Blaster => WeaponProfile {
            kind,
            rounds_per_clip: 15,
            max_ammo: 48,
            initial_ammo: 48,
            shot_time: 0.45,
            reload_time: 1.6,
            equip_time: 0.6,
            hide_time: 0.4,
            damage: 8.0,
            pellets: 1,
            // The fallback sidearm: passable everywhere, outstanding
            // nowhere — it never reaches very-desirable, so a specialist
            // weapon with ammo always outbids it in its own band.
            fuzzy: make_fuzzy(
                [(0.0, 4.0, 8.0), (4.0, 8.0, 12.0), (8.0, 12.0, 15.0)],
                [
                    [UNDESIRABLE, DESIRABLE, DESIRABLE],
                    [UNDESIRABLE, DESIRABLE, DESIRABLE],
                    [UNDESIRABLE, UNDESIRABLE, DESIRABLE],
                ],
            ),
        },
        WeaponKind::Shotgun => WeaponProfile {
            kind,
            rounds_per_clip: 6,
            max_ammo: 24,
            initial_ammo: 12,
            shot_time: 0.9,
            reload_time: 2.2,
            equip_time: 0.7,
            hide_time: 0.5,
            damage: 6.0,
            pellets: 6,
            // Devastating inside the close band, useless at range.
            fuzzy: make_fuzzy(
                [(0.0, 1.0, 2.0), (1.0, 3.0, 5.0), (3.0, 5.0, 6.0)],
                [
                    [DESIRABLE, VERY_DESIRABLE, VERY_DESIRABLE],
                    [UNDESIRABLE, DESIRABLE, DESIRABLE],
                    [UNDESIRABLE, UNDESIRABLE, UNDESIRABLE],
                ],
            ),
        },
        WeaponKind::AssaultRifle => WeaponProfile {
            kind,
            rounds_per_clip: 30,
            max_ammo: 90,
            initial_ammo: 90,
            shot_time: 0.12,
            reload_time: 1.8,
            equip_time: 0.8,
            hide_time: 0.6,
            damage: 5.0,
            pellets: 1,
            // Mid and long range workhorse.
            fuzzy: make_fuzzy(
                [(0.0, 8.0, 15.0), (8.0, 15.0, 25.0), (15.0, 25.0, 30.0)],
                [
                    [UNDESIRABLE, DESIRABLE, DESIRABLE],
                    [DESIRABLE, VERY_DESIRABLE, VERY_DESIRABLE],
                    [DESIRABLE, DESIRABLE, VERY_DESIRABLE],
                ],
            ),
        },
    }
}

/// Build a weapon's fuzzy module from its ammo sets and rule table. The
/// distance and desirability sets are shared across all weapons.
fn make_fuzzy(ammo: [(f64, f64, f64); 3], rules: [[usize; 3]; 3]) -> FuzzyModule {
    FuzzyModule {
        distance: [
            FuzzySet::left_shoulder(FUZZY_DISTANCE_CLOSE),
            FuzzySet::triangular(FUZZY_DISTANCE_MEDIUM),
            FuzzySet::right_shoulder(FUZZY_DISTANCE_FAR),
        ],
        ammo: [
            FuzzySet::left_shoulder(ammo[0]),
            FuzzySet::triangular(ammo[1]),
            FuzzySet::right_shoulder(ammo[2]),
        ],
        desirability: [
            FuzzySet::left_shoulder(FUZZY_UNDESIRABLE),
            FuzzySet::triangular(FUZZY_DESIRABLE),
            FuzzySet::right_shoulder(FUZZY_VERY_DESIRABLE),
        ],
        rules,
    }
}
