//! Aim and fire orchestration.

use glam::DVec3;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skirmish_core::constants::NOISE_MAX_DISTANCE;
use skirmish_core::enums::WeaponKind;
use skirmish_core::types::Position;

use crate::agent::{BotBody, HurtState};
use crate::memory::MemorySystem;
use crate::targeting::TargetSystem;
use crate::weapons::WeaponSystem;

/// A resolved trigger pull, handed to the engine to spawn projectiles.
#[derive(Debug, Clone, Copy)]
pub struct ShotRequest {
    pub weapon: WeaponKind,
    pub origin: Position,
    pub target: Position,
    pub pellets: u32,
    pub damage: f64,
}

/// Per-tick facing and firing.
///
/// With a shootable target: rotate toward it and, once aligned AND the
/// target has been visible for at least the reaction time, fire with
/// distance-scaled aim noise. With a target that is known but unseen:
/// face the suspected attacker when recently hurt, else the last sensed
/// position. With no target: face the suspected attacker, else the
/// movement direction.
pub fn update_aim_and_shot(
    body: &mut BotBody,
    weapons: &mut WeaponSystem,
    targeting: &TargetSystem,
    memory: &MemorySystem,
    hurt: Option<&HurtState>,
    now: f64,
    dt: f64,
    rng: &mut ChaCha8Rng,
) -> Option<ShotRequest> {
    if !targeting.has_target() {
        face_idle(body, hurt, dt);
        return None;
    }

    if !targeting.is_target_shootable(memory) {
        match (hurt, targeting.last_sensed_position(memory)) {
            (Some(h), _) => {
                body.rotate_towards(h.attacker_direction, dt);
            }
            (None, Some(last_seen)) => {
                let dir = body.position.direction_to(&last_seen);
                body.rotate_towards(dir, dt);
            }
            (None, None) => {}
        }
        return None;
    }

    let target_position = targeting.last_sensed_position(memory)?;
    let aim_direction = body.position.direction_to(&target_position);
    let aligned = body.rotate_towards(aim_direction, dt);

    let became_visible = targeting.time_became_visible(memory);
    if !aligned || became_visible < 0.0 || now - became_visible < weapons.reaction_time {
        return None;
    }

    let noisy_target = apply_aim_noise(
        &body.position,
        &target_position,
        weapons.aim_accuracy,
        rng,
    );
    weapons.shoot(now, body.position, noisy_target)
}

/// Uniform per-axis offset in ±accuracy, scaled down for close targets.
fn apply_aim_noise(
    origin: &Position,
    target: &Position,
    accuracy: f64,
    rng: &mut ChaCha8Rng,
) -> Position {
    let distance = origin.range_to(target);
    let scale = distance.min(NOISE_MAX_DISTANCE) / NOISE_MAX_DISTANCE;
    let offset = DVec3::new(
        rng.gen_range(-accuracy..=accuracy),
        rng.gen_range(-accuracy..=accuracy),
        rng.gen_range(-accuracy..=accuracy),
    ) * scale;
    target.offset_by(offset)
}

fn face_idle(body: &mut BotBody, hurt: Option<&HurtState>, dt: f64) {
    if let Some(h) = hurt {
        body.rotate_towards(h.attacker_direction, dt);
        return;
    }
    let motion = body.velocity.as_vec();
    if motion.length_squared() > 1e-6 {
        body.rotate_towards(motion.normalize(), dt);
    }
}
