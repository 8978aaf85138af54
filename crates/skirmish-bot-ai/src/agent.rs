//! The bot aggregate: body state plus all decision subsystems.

use glam::DVec3;

use skirmish_core::constants::*;
use skirmish_core::types::{EntityId, Position, Velocity};

use crate::brain::Brain;
use crate::fsm::CombatFsm;
use crate::memory::MemorySystem;
use crate::regulator::Regulator;
use crate::steering::SteeringState;
use crate::targeting::TargetSystem;
use crate::vision::Vision;
use crate::weapons::WeaponSystem;

/// Kinematic and vital state of one bot.
#[derive(Debug, Clone)]
pub struct BotBody {
    pub position: Position,
    /// Facing direction (unit vector).
    pub heading: DVec3,
    pub velocity: Velocity,
    pub max_speed: f64,
    pub health: f64,
    pub max_health: f64,
    /// Navigation region the bot currently stands in.
    pub region: Option<usize>,
}

impl BotBody {
    pub fn new(position: Position) -> Self {
        Self {
            position,
            heading: DVec3::Y,
            velocity: Velocity::default(),
            max_speed: BOT_MAX_SPEED,
            health: BOT_MAX_HEALTH,
            max_health: BOT_MAX_HEALTH,
            region: None,
        }
    }

    pub fn health_ratio(&self) -> f64 {
        if self.max_health <= 0.0 {
            return 0.0;
        }
        (self.health / self.max_health).clamp(0.0, 1.0)
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }

    /// Apply damage; true when this kills the bot.
    pub fn take_damage(&mut self, amount: f64) -> bool {
        let was_alive = self.is_alive();
        self.health = (self.health - amount).max(0.0);
        was_alive && !self.is_alive()
    }

    pub fn heal_full(&mut self) {
        self.health = self.max_health;
    }

    /// Turn toward `direction` at the fixed turn rate. Returns true when
    /// the facing is within aim tolerance after this step. A zero
    /// direction leaves the heading untouched and counts as aligned.
    pub fn rotate_towards(&mut self, direction: DVec3, dt: f64) -> bool {
        let target = direction.normalize_or_zero();
        if target == DVec3::ZERO {
            return true;
        }
        let angle = self.heading.angle_between(target);
        if angle <= AIM_TOLERANCE {
            self.heading = target;
            return true;
        }
        let step = (TURN_RATE * dt / angle).min(1.0);
        self.heading = self.heading.lerp(target, step).normalize_or_zero();
        if self.heading == DVec3::ZERO {
            // Opposite vectors can cancel under lerp; snap instead.
            self.heading = target;
        }
        self.heading.angle_between(target) <= AIM_TOLERANCE
    }
}

/// Direction a bot was last hurt from, feeding the suspected-attacker
/// facing when the shooter is unseen.
#[derive(Debug, Clone, Copy)]
pub struct HurtState {
    pub attacker_direction: DVec3,
    pub time: f64,
}

/// The path most recently produced for this bot by the planner.
#[derive(Debug, Clone, Default)]
pub struct PathState {
    pub waypoints: Option<Vec<Position>>,
}

/// One complete bot. Subsystems are owned 1:1 and live and die with it.
pub struct Bot {
    pub id: EntityId,
    pub body: BotBody,
    pub vision: Vision,
    pub memory: MemorySystem,
    pub targeting: TargetSystem,
    pub weapons: WeaponSystem,
    pub brain: Brain,
    pub steering: SteeringState,
    pub fsm: CombatFsm,
    pub hurt: Option<HurtState>,
    pub path: PathState,
    pub vision_regulator: Regulator,
    pub target_regulator: Regulator,
    pub arbitration_regulator: Regulator,
    pub weapon_select_regulator: Regulator,
}

impl Bot {
    pub fn new(id: EntityId, position: Position) -> Self {
        Self {
            id,
            body: BotBody::new(position),
            vision: Vision::new(VISION_FIELD_OF_VIEW, VISION_RANGE),
            memory: MemorySystem::new(MEMORY_SPAN),
            targeting: TargetSystem::new(),
            weapons: WeaponSystem::new(REACTION_TIME, AIM_ACCURACY),
            brain: Brain::with_default_evaluators(),
            steering: SteeringState::default(),
            fsm: CombatFsm::new(),
            hurt: None,
            path: PathState::default(),
            vision_regulator: Regulator::new(VISION_UPDATE_RATE),
            target_regulator: Regulator::new(TARGET_UPDATE_RATE),
            arbitration_regulator: Regulator::new(ARBITRATION_UPDATE_RATE),
            weapon_select_regulator: Regulator::new(WEAPON_SELECT_RATE),
        }
    }

    /// Forget an expired hurt memory.
    pub fn decay_hurt(&mut self, now: f64) {
        if let Some(hurt) = self.hurt {
            if now - hurt.time > HURT_MEMORY_SECS {
                self.hurt = None;
            }
        }
    }
}
