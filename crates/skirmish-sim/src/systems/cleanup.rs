//! Cleanup system: removes dead bots from the world.

use hecs::{Entity, World};

use skirmish_bot_ai::agent::Bot;

/// Despawn bots in the Dead state. Uses a pre-allocated buffer to avoid
/// per-tick allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, bot) in world.query_mut::<&Bot>() {
        if bot.fsm.is_dead() {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
