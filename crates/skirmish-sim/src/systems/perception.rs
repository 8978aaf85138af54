//! Perception system: throttled vision sweeps into each bot's memory.
//!
//! Must run before targeting so the records a bot selects from are
//! current. Each bot senses every other living bot through its vision
//! cone and the occlusion raycast; entities that have vanished from the
//! world are marked invisible so stale sightings age out of the memory
//! window instead of lingering as shootable.

use hecs::World;

use skirmish_bot_ai::agent::Bot;
use skirmish_core::components::Ident;
use skirmish_core::surface::NavigationQuery;
use skirmish_core::types::{EntityId, Position};

pub fn run(world: &mut World, nav: &dyn NavigationQuery, now: f64) {
    // Snapshot of every living bot this tick.
    let others: Vec<(EntityId, Position)> = world
        .query::<(&Ident, &Bot)>()
        .iter()
        .filter(|(_, (_, bot))| bot.body.is_alive())
        .map(|(_, (ident, bot))| (ident.0, bot.body.position))
        .collect();

    for (_entity, (ident, bot)) in world.query_mut::<(&Ident, &mut Bot)>() {
        if !bot.body.is_alive() {
            continue;
        }

        bot.decay_hurt(now);

        if !bot.vision_regulator.ready() {
            continue;
        }

        for &(other_id, other_pos) in &others {
            if other_id == ident.0 {
                continue;
            }
            let visible = bot.vision.check_field_of_view(
                nav,
                &bot.body.position,
                bot.body.heading,
                &other_pos,
            );
            bot.memory.sense(other_id, &other_pos, visible, now);
        }

        // Entities no longer in the world cannot be seen.
        for known in bot.memory.known_entities() {
            if known != ident.0 && !others.iter().any(|(id, _)| *id == known) {
                bot.memory.sense(known, &Position::default(), false, now);
            }
        }
    }
}
