//! Combat system: weapon timers, throttled selection, aim and fire, and
//! projectile spawning.

use glam::DVec3;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skirmish_bot_ai::agent::Bot;
use skirmish_bot_ai::combat::{update_aim_and_shot, ShotRequest};
use skirmish_bot_ai::weapons::WeaponEvent;
use skirmish_core::components::{Ident, Projectile};
use skirmish_core::constants::*;
use skirmish_core::events::CombatEvent;
use skirmish_core::types::{EntityId, Position, Velocity};

use crate::engine::ScoreState;

pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    now: f64,
    current_tick: u64,
    events: &mut Vec<CombatEvent>,
    score: &mut ScoreState,
) {
    // Phase 1: per-bot weapon updates, buffering shots for spawning.
    let mut shots: Vec<(EntityId, ShotRequest)> = Vec::new();

    for (_entity, (ident, bot)) in world.query_mut::<(&Ident, &mut Bot)>() {
        if !bot.body.is_alive() {
            continue;
        }

        bot.weapons.update(now);

        if bot.targeting.has_target() && bot.weapon_select_regulator.ready() {
            if let Some(target_pos) = bot.targeting.last_sensed_position(&bot.memory) {
                let distance = bot.body.position.range_to(&target_pos);
                bot.weapons.select_best_weapon(distance);
            }
        }

        let shot = update_aim_and_shot(
            &mut bot.body,
            &mut bot.weapons,
            &bot.targeting,
            &bot.memory,
            bot.hurt.as_ref(),
            now,
            DT,
            rng,
        );
        if let Some(request) = shot {
            shots.push((ident.0, request));
        }

        for event in bot.weapons.take_events() {
            events.push(match event {
                WeaponEvent::Equipped(weapon) => CombatEvent::WeaponEquipped {
                    agent: ident.0,
                    weapon,
                },
                WeaponEvent::Hidden(weapon) => CombatEvent::WeaponHidden {
                    agent: ident.0,
                    weapon,
                },
                WeaponEvent::ReloadStarted(weapon) => CombatEvent::ReloadStarted {
                    agent: ident.0,
                    weapon,
                },
            });
        }
    }

    // Phase 2: spawn projectiles for the buffered shots.
    let lifetime_ticks = (PROJECTILE_LIFETIME / DT) as u64;
    for (shooter, request) in shots {
        score.shots_fired += 1;
        events.push(CombatEvent::WeaponFired {
            shooter,
            weapon: request.weapon,
            target: request.target,
        });

        let base_direction = request.origin.direction_to(&request.target);
        if base_direction == DVec3::ZERO {
            continue;
        }
        for _ in 0..request.pellets {
            let direction = if request.pellets > 1 {
                scatter(base_direction, rng)
            } else {
                base_direction
            };
            world.spawn((
                Position::from_vec(request.origin.as_vec() + direction * 0.5),
                Velocity::from_vec(direction * PROJECTILE_SPEED),
                Projectile {
                    shooter,
                    damage: request.damage,
                    expires_at_tick: current_tick + lifetime_ticks,
                },
            ));
        }
    }
}

/// Jitter a pellet direction inside the spread cone.
fn scatter(direction: DVec3, rng: &mut ChaCha8Rng) -> DVec3 {
    let side = DVec3::new(-direction.y, direction.x, 0.0).normalize_or_zero();
    let jitter = rng.gen_range(-PELLET_SPREAD..=PELLET_SPREAD);
    (direction + side * jitter).normalize_or_zero()
}
