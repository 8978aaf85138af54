//! Entity spawn factories and the default arena.

use hecs::World;

use skirmish_bot_ai::agent::Bot;
use skirmish_core::components::{Ident, Item};
use skirmish_core::enums::{ItemKind, WeaponKind};
use skirmish_core::types::{EntityId, Position};
use skirmish_nav::NavGrid;

/// Bot spawn points, one per arena quadrant.
pub const SPAWN_POINTS: [(f64, f64); 4] = [(6.0, 6.0), (34.0, 34.0), (6.0, 34.0), (34.0, 6.0)];

/// Health pack spots on the east-west midline.
pub const HEALTH_PACK_SPOTS: [(f64, f64); 2] = [(10.0, 20.0), (30.0, 20.0)];

/// Build the default 40x40 arena: a walled rim, two central pillars
/// forming corridors, and one navigation region per quadrant.
pub fn default_arena() -> NavGrid {
    let mut grid = NavGrid::open(0.0, 0.0, 40, 40, 1.0);

    // Outer rim.
    grid.block_rect(0.0, 0.0, 40.0, 1.0);
    grid.block_rect(0.0, 39.0, 40.0, 40.0);
    grid.block_rect(0.0, 0.0, 1.0, 40.0);
    grid.block_rect(39.0, 0.0, 40.0, 40.0);

    // Central pillars with a corridor between them.
    grid.block_rect(17.0, 8.0, 23.0, 16.0);
    grid.block_rect(17.0, 24.0, 23.0, 32.0);

    grid.add_region_rect(1.0, 1.0, 20.0, 20.0);
    grid.add_region_rect(20.0, 1.0, 39.0, 20.0);
    grid.add_region_rect(1.0, 20.0, 20.0, 39.0);
    grid.add_region_rect(20.0, 20.0, 39.0, 39.0);

    grid
}

/// Populate a fresh match: health packs plus `bot_count` bots on their
/// spawn points.
pub fn setup_match(world: &mut World, next_entity_id: &mut u64, bot_count: usize) {
    for &(x, y) in &HEALTH_PACK_SPOTS {
        spawn_health_pack(world, next_entity_id, Position::new(x, y, 0.0));
    }
    for &(x, y) in SPAWN_POINTS.iter().cycle().take(bot_count) {
        spawn_bot(world, next_entity_id, Position::new(x, y, 0.0));
    }
}

/// Spawn one bot with the full weapon loadout.
pub fn spawn_bot(world: &mut World, next_entity_id: &mut u64, position: Position) -> hecs::Entity {
    let id = EntityId(*next_entity_id);
    *next_entity_id += 1;

    let mut bot = Bot::new(id, position);
    bot.weapons.add_weapon(WeaponKind::Shotgun);
    bot.weapons.add_weapon(WeaponKind::AssaultRifle);

    world.spawn((Ident(id), bot))
}

/// Spawn a health pack, active immediately.
pub fn spawn_health_pack(
    world: &mut World,
    next_entity_id: &mut u64,
    position: Position,
) -> hecs::Entity {
    let id = EntityId(*next_entity_id);
    *next_entity_id += 1;

    world.spawn((
        Ident(id),
        position,
        Item {
            kind: ItemKind::HealthPack,
            active: true,
            respawn_at_tick: 0,
        },
    ))
}
