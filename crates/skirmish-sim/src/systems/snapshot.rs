//! Snapshot system: queries the ECS world and builds a complete
//! `MatchSnapshot`. Read-only — it never modifies the world.

use hecs::World;

use skirmish_bot_ai::agent::Bot;
use skirmish_core::components::{Ident, Item, Projectile};
use skirmish_core::enums::MatchPhase;
use skirmish_core::events::CombatEvent;
use skirmish_core::state::*;
use skirmish_core::types::{Position, SimTime};

use crate::engine::ScoreState;

pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: MatchPhase,
    events: Vec<CombatEvent>,
    score: &ScoreState,
) -> MatchSnapshot {
    MatchSnapshot {
        time: *time,
        phase,
        agents: build_agents(world),
        items: build_items(world),
        projectiles: build_projectiles(world),
        events,
        score: ScoreView {
            shots_fired: score.shots_fired,
            kills: score.kills,
            items_collected: score.items_collected,
        },
    }
}

fn build_agents(world: &World) -> Vec<AgentView> {
    let mut agents: Vec<AgentView> = world
        .query::<(&Ident, &Bot)>()
        .iter()
        .map(|(_, (ident, bot))| AgentView {
            id: ident.0,
            position: bot.body.position,
            velocity: bot.body.velocity,
            heading: Position::from_vec(bot.body.heading),
            health: bot.body.health,
            max_health: bot.body.max_health,
            state: bot.fsm.state(),
            weapon: bot.weapons.current_kind(),
            weapon_status: bot.weapons.current_weapon().status,
            goal: bot.brain.top_kind(),
            target: bot.targeting.target(),
            is_dodging: bot.fsm.is_dodging,
        })
        .collect();
    agents.sort_by_key(|a| a.id);
    agents
}

fn build_items(world: &World) -> Vec<ItemView> {
    let mut items: Vec<ItemView> = world
        .query::<(&Ident, &Position, &Item)>()
        .iter()
        .map(|(_, (ident, position, item))| ItemView {
            id: ident.0,
            kind: item.kind,
            position: *position,
            active: item.active,
        })
        .collect();
    items.sort_by_key(|i| i.id);
    items
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut projectiles: Vec<ProjectileView> = world
        .query::<(&Position, &Projectile)>()
        .iter()
        .map(|(_, (position, projectile))| ProjectileView {
            position: *position,
            shooter: projectile.shooter,
        })
        .collect();
    projectiles.sort_by(|a, b| {
        (a.shooter, a.position.x, a.position.y)
            .partial_cmp(&(b.shooter, b.position.x, b.position.y))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    projectiles
}
