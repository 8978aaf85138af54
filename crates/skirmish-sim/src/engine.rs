//! Simulation engine — the core of the match.
//!
//! `SimulationEngine` owns the hecs ECS world, the navigation surface,
//! the deferred path planner, and the seeded RNG. It processes host
//! commands, runs all systems in the fixed pipeline order, and produces
//! `MatchSnapshot`s. Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use skirmish_bot_ai::planner::PathPlanner;
use skirmish_core::commands::SimCommand;
use skirmish_core::enums::MatchPhase;
use skirmish_core::events::CombatEvent;
use skirmish_core::state::MatchSnapshot;
use skirmish_core::types::{Position, SimTime};
use skirmish_nav::{NavGrid, RegionCosts};

use crate::systems;
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same match.
    pub seed: u64,
    /// Initial time scale (1.0 = normal).
    pub time_scale: f64,
    /// Bots spawned by StartMatch.
    pub bot_count: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
            bot_count: 3,
        }
    }
}

/// Running match totals.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreState {
    pub shots_fired: u64,
    pub kills: u32,
    pub items_collected: u32,
}

/// The simulation engine. Owns the ECS world and all match state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: MatchPhase,
    time_scale: f64,
    rng: ChaCha8Rng,
    nav: NavGrid,
    costs: RegionCosts,
    planner: PathPlanner,
    command_queue: VecDeque<SimCommand>,
    events: Vec<CombatEvent>,
    despawn_buffer: Vec<hecs::Entity>,
    next_entity_id: u64,
    score: ScoreState,
    bot_count: usize,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        let nav = world_setup::default_arena();
        let costs = RegionCosts::build(&nav);
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: MatchPhase::default(),
            time_scale: config.time_scale,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            nav,
            costs,
            planner: PathPlanner::new(),
            command_queue: VecDeque::new(),
            events: Vec::new(),
            despawn_buffer: Vec::new(),
            next_entity_id: 1,
            score: ScoreState::default(),
            bot_count: config.bot_count,
        }
    }

    /// Queue a host command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: SimCommand) {
        self.command_queue.push_back(command);
    }

    /// Advance the simulation by one tick and return the resulting
    /// snapshot.
    pub fn tick(&mut self) -> MatchSnapshot {
        self.process_commands();

        if self.phase == MatchPhase::Active {
            self.run_systems();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.world, &self.time, self.phase, events, &self.score)
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    /// Mutable world access for test scenarios.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Spawn an extra bot at a given position (for tests).
    #[cfg(test)]
    pub fn spawn_bot_at(&mut self, position: Position) -> skirmish_core::types::EntityId {
        let entity = world_setup::spawn_bot(&mut self.world, &mut self.next_entity_id, position);
        self.world
            .get::<&skirmish_core::components::Ident>(entity)
            .map(|ident| ident.0)
            .unwrap_or(skirmish_core::types::EntityId(0))
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: SimCommand) {
        match command {
            SimCommand::StartMatch => {
                if matches!(self.phase, MatchPhase::Lobby | MatchPhase::Over) {
                    tracing::debug!(bots = self.bot_count, "starting match");
                    self.world.clear();
                    self.planner = PathPlanner::new();
                    self.next_entity_id = 1;
                    self.score = ScoreState::default();
                    self.events.clear();
                    world_setup::setup_match(
                        &mut self.world,
                        &mut self.next_entity_id,
                        self.bot_count,
                    );
                    self.time = SimTime::default();
                    self.phase = MatchPhase::Active;
                }
            }
            SimCommand::Pause => {
                if self.phase == MatchPhase::Active {
                    self.phase = MatchPhase::Paused;
                }
            }
            SimCommand::Resume => {
                if self.phase == MatchPhase::Paused {
                    self.phase = MatchPhase::Active;
                }
            }
            SimCommand::SetTimeScale { scale } => {
                self.time_scale = scale.clamp(0.0, 4.0);
            }
            SimCommand::SpawnBot => {
                let spot = world_setup::SPAWN_POINTS
                    [self.rng.gen_range(0..world_setup::SPAWN_POINTS.len())];
                world_setup::spawn_bot(
                    &mut self.world,
                    &mut self.next_entity_id,
                    Position::new(spot.0, spot.1, 0.0),
                );
            }
        }
    }

    /// Run all systems in the contract order: path-queue drain, then
    /// perception, targeting, brain, combat, movement, projectiles,
    /// items, cleanup.
    fn run_systems(&mut self) {
        let now = self.time.elapsed_secs;
        let current_tick = self.time.tick;

        // 1. Resolve path requests submitted last tick.
        self.planner.drain(&self.nav);

        // 2. Perception (vision regulator gated).
        systems::perception::run(&mut self.world, &self.nav, now);

        // 3. Target refresh + combat FSM events (target regulator gated).
        systems::targeting::run(&mut self.world, now);

        // 4. Goal arbitration and execution.
        let item_index = systems::items::build_index(&self.world, &self.nav);
        let pickups = systems::brain::run(
            &mut self.world,
            &self.nav,
            &self.costs,
            &item_index,
            &mut self.planner,
            &mut self.rng,
            now,
        );
        let mut items_collected = self.score.items_collected;
        systems::items::apply_pickups(
            &mut self.world,
            &pickups,
            current_tick,
            &mut self.events,
            &mut items_collected,
        );
        self.score.items_collected = items_collected;

        // 5. Weapons: change/selection/aim/fire, projectile spawning.
        systems::combat::run(
            &mut self.world,
            &mut self.rng,
            now,
            current_tick,
            &mut self.events,
            &mut self.score,
        );

        // 6. Movement integration.
        systems::movement::run(&mut self.world, &self.nav);

        // 7. Projectile impacts, damage, deaths.
        systems::projectiles::run(
            &mut self.world,
            &self.nav,
            now,
            current_tick,
            &mut self.events,
            &mut self.score,
            &mut self.despawn_buffer,
        );

        // 8. Item respawn clocks.
        systems::items::run_respawns(&mut self.world, current_tick, &mut self.events);

        // 9. Remove the dead.
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
    }
}
