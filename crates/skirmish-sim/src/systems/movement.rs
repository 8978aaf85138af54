//! Locomotion integration: steering behaviors to velocity, velocity to
//! position, with wall rejection and region tracking.

use glam::DVec3;
use hecs::World;

use skirmish_bot_ai::agent::Bot;
use skirmish_core::components::Projectile;
use skirmish_core::constants::*;
use skirmish_core::surface::NavigationQuery;
use skirmish_core::types::{Position, Velocity};

pub fn run(world: &mut World, nav: &dyn NavigationQuery) {
    integrate_bots(world, nav);
    integrate_projectiles(world);
}

fn integrate_bots(world: &mut World, nav: &dyn NavigationQuery) {
    for (_entity, bot) in world.query_mut::<&mut Bot>() {
        if !bot.body.is_alive() {
            bot.body.velocity = Velocity::default();
            continue;
        }

        let desired = steer(bot);
        bot.body.velocity = match desired {
            Some(direction) => Velocity::from_vec(direction * bot.body.max_speed),
            None => Velocity::default(),
        };

        let next = bot
            .body
            .position
            .offset_by(bot.body.velocity.as_vec() * DT);
        // Reject steps off the walkable surface; the bot holds position
        // and the goal layer replans around the obstruction.
        if nav.region_for_point(&next, 0.3).is_some() {
            bot.body.position = next;
        } else {
            bot.body.velocity = Velocity::default();
        }

        bot.body.region = nav
            .region_for_point(&bot.body.position, REGION_TOLERANCE)
            .map(|r| r.index);
    }
}

/// Resolve the active steering behavior into a desired direction.
fn steer(bot: &mut Bot) -> Option<DVec3> {
    let position = bot.body.position;

    if bot.steering.follow_path.active {
        let follow = &mut bot.steering.follow_path;
        if follow.path.is_empty() {
            return None;
        }
        while follow.current < follow.path.len()
            && position.range_to(&follow.path[follow.current]) <= WAYPOINT_TOLERANCE
        {
            follow.current += 1;
        }
        let target_index = follow.current.min(follow.path.len() - 1);
        let mut target = follow.path[target_index];

        // Stay-near-path correction: when drifting beyond the lateral
        // radius, head for the nearest point on the current segment
        // instead of the waypoint.
        if bot.steering.stay_near_path.active && target_index > 0 {
            let nearest =
                nearest_on_segment(&follow.path[target_index - 1], &target, &position);
            if position.range_to(&nearest) > bot.steering.stay_near_path.radius {
                target = nearest;
            }
        }

        let direction = position.direction_to(&target);
        return (direction != DVec3::ZERO).then_some(direction);
    }

    if bot.steering.seek.active {
        let direction = position.direction_to(&bot.steering.seek.target);
        return (direction != DVec3::ZERO).then_some(direction);
    }

    None
}

fn nearest_on_segment(a: &Position, b: &Position, point: &Position) -> Position {
    let ab = b.as_vec() - a.as_vec();
    let length_sq = ab.length_squared();
    if length_sq < f64::EPSILON {
        return *a;
    }
    let t = ((point.as_vec() - a.as_vec()).dot(ab) / length_sq).clamp(0.0, 1.0);
    Position::from_vec(a.as_vec() + ab * t)
}

fn integrate_projectiles(world: &mut World) {
    for (_entity, (position, velocity, _projectile)) in
        world.query_mut::<(&mut Position, &Velocity, &Projectile)>()
    {
        position.x += velocity.x * DT;
        position.y += velocity.y * DT;
        position.z += velocity.z * DT;
    }
}
