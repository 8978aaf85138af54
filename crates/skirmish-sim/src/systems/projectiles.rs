//! Projectile impact system: proximity checks, damage, hurt awareness,
//! and deaths.

use hecs::{Entity, World};

use skirmish_bot_ai::agent::{Bot, HurtState};
use skirmish_core::components::{Ident, Projectile};
use skirmish_core::constants::PROJECTILE_LETHAL_RADIUS;
use skirmish_core::enums::BotEvent;
use skirmish_core::events::CombatEvent;
use skirmish_core::surface::NavigationQuery;
use skirmish_core::types::{EntityId, Position, Velocity};

use crate::engine::ScoreState;

struct Impact {
    victim: Entity,
    victim_id: EntityId,
    attacker: EntityId,
    damage: f64,
    /// Direction from the victim back toward the shot's origin.
    incoming: glam::DVec3,
}

pub fn run(
    world: &mut World,
    nav: &dyn NavigationQuery,
    now: f64,
    current_tick: u64,
    events: &mut Vec<CombatEvent>,
    score: &mut ScoreState,
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();
    let mut impacts: Vec<Impact> = Vec::new();

    // Snapshot living bots once; projectiles are checked against it.
    let bots: Vec<(Entity, EntityId, Position)> = world
        .query::<(&Ident, &Bot)>()
        .iter()
        .filter(|(_, (_, bot))| bot.body.is_alive())
        .map(|(entity, (ident, bot))| (entity, ident.0, bot.body.position))
        .collect();

    for (entity, (position, velocity, projectile)) in world
        .query::<(&Position, &Velocity, &Projectile)>()
        .iter()
    {
        if current_tick >= projectile.expires_at_tick {
            despawn_buffer.push(entity);
            continue;
        }
        // Walls stop projectiles.
        if nav.region_for_point(position, 0.0).is_none() {
            despawn_buffer.push(entity);
            continue;
        }

        let hit = bots
            .iter()
            .filter(|(_, id, _)| *id != projectile.shooter)
            .find(|(_, _, bot_pos)| position.range_to(bot_pos) <= PROJECTILE_LETHAL_RADIUS);

        if let Some(&(victim, victim_id, _)) = hit {
            impacts.push(Impact {
                victim,
                victim_id,
                attacker: projectile.shooter,
                damage: projectile.damage,
                incoming: -velocity.as_vec().normalize_or_zero(),
            });
            despawn_buffer.push(entity);
        }
    }

    for impact in impacts {
        let Ok(mut bot) = world.get::<&mut Bot>(impact.victim) else {
            continue;
        };
        let died = bot.body.take_damage(impact.damage);
        bot.hurt = Some(HurtState {
            attacker_direction: impact.incoming,
            time: now,
        });
        events.push(CombatEvent::ProjectileImpact {
            victim: impact.victim_id,
            attacker: impact.attacker,
            damage: impact.damage,
        });
        if died {
            bot.fsm.dispatch(BotEvent::Kill);
            events.push(CombatEvent::AgentDied {
                agent: impact.victim_id,
                killer: impact.attacker,
            });
            score.kills += 1;
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
