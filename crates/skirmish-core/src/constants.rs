//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz). Regulator intervals are computed against this,
/// so throttle rates are frame-count based, not wall-clock based: if the host
/// ever ticks at a different rate, regulated subsystems drift with it.
/// Accepted approximation, not a bug.
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Perception ---

/// Full vision cone angle (radians).
pub const VISION_FIELD_OF_VIEW: f64 = std::f64::consts::PI;

/// Maximum vision range (meters). The squared-distance gate in
/// `Vision::check_field_of_view` compares against `range^2 / 2`, so the
/// effective sighting distance is `range / sqrt(2)`; see the vision module.
pub const VISION_RANGE: f64 = 25.0;

/// Seconds a memory record stays valid after the entity was last sensed.
pub const MEMORY_SPAN: f64 = 10.0;

/// Half-extents of the nearest-surface query used before a line-of-sight
/// raycast (x, y, z in world units).
pub const NEAREST_SURFACE_HALF_EXTENTS: (f64, f64, f64) = (2.0, 4.0, 2.0);

/// Seconds a bot remembers the direction it was last hurt from.
pub const HURT_MEMORY_SECS: f64 = 3.0;

// --- Update throttles (updates per second) ---

pub const VISION_UPDATE_RATE: f64 = 10.0;
pub const TARGET_UPDATE_RATE: f64 = 5.0;
pub const ARBITRATION_UPDATE_RATE: f64 = 5.0;
pub const WEAPON_SELECT_RATE: f64 = 2.0;
pub const ITEM_CHECK_RATE: f64 = 4.0;

// --- Combat ---

/// Seconds a target must have been visible before the first shot at it.
pub const REACTION_TIME: f64 = 0.5;

/// Maximum per-axis aim offset (world units) at `NOISE_MAX_DISTANCE`.
pub const AIM_ACCURACY: f64 = 0.6;

/// Distance at which aim noise reaches its full amplitude; closer targets
/// get proportionally less absolute noise.
pub const NOISE_MAX_DISTANCE: f64 = 50.0;

/// Desirability penalty applied to weapons other than the one in hand,
/// damping selection flapping between near-equal scores.
pub const WEAPON_CHANGE_COST: f64 = 0.2;

/// Angular tolerance (radians) within which a bot counts as aimed.
pub const AIM_TOLERANCE: f64 = 0.08;

/// Maximum turn rate (radians/second).
pub const TURN_RATE: f64 = std::f64::consts::PI;

/// Projectile muzzle speed (m/s).
pub const PROJECTILE_SPEED: f64 = 60.0;

/// Projectile lifetime (seconds).
pub const PROJECTILE_LIFETIME: f64 = 1.5;

/// Radius within which a projectile damages a bot (meters).
pub const PROJECTILE_LETHAL_RADIUS: f64 = 0.8;

/// Per-pellet angular spread for multi-pellet weapons (radians).
pub const PELLET_SPREAD: f64 = 0.12;

// --- Movement / goals ---

pub const BOT_MAX_SPEED: f64 = 4.0;

/// Arrival tolerance for path following and seek steering (meters).
pub const ARRIVE_TOLERANCE: f64 = 1.0;

/// Distance below which the current waypoint is considered reached.
pub const WAYPOINT_TOLERANCE: f64 = 0.8;

/// Allowed lateral deviation before stay-near-path steering corrects.
pub const PATH_RADIUS: f64 = 1.5;

/// Combat spacing thresholds (meters).
pub const COMBAT_MIN_DISTANCE: f64 = 6.0;
pub const COMBAT_MAX_DISTANCE: f64 = 16.0;
pub const COMBAT_DESIRED_DISTANCE: f64 = 10.0;

/// Seconds between combat-tactic re-evaluations.
pub const TACTIC_COOLDOWN: f64 = 1.5;

/// Lateral dodge step length (meters).
pub const DODGE_DISTANCE: f64 = 3.0;

/// Tolerance for resolving which region a point belongs to.
pub const REGION_TOLERANCE: f64 = 1.0;

/// Radius within which an item can be picked up (meters).
pub const PICKUP_RADIUS: f64 = 2.0;

/// Seconds before a collected item reactivates.
pub const ITEM_RESPAWN_SECS: f64 = 30.0;

/// Clamp bounds for the distance-to-item feature.
pub const MIN_ITEM_RANGE: f64 = 2.0;
pub const MAX_ITEM_RANGE: f64 = 30.0;

// --- Bot vitals ---

pub const BOT_MAX_HEALTH: f64 = 100.0;

// --- Fuzzy scoring (shared distance-to-target sets, meters) ---

pub const FUZZY_DISTANCE_CLOSE: (f64, f64, f64) = (0.0, 10.0, 20.0);
pub const FUZZY_DISTANCE_MEDIUM: (f64, f64, f64) = (10.0, 20.0, 40.0);
pub const FUZZY_DISTANCE_FAR: (f64, f64, f64) = (20.0, 40.0, 1000.0);

// --- Fuzzy scoring (shared desirability output sets, 0..100) ---

pub const FUZZY_UNDESIRABLE: (f64, f64, f64) = (0.0, 25.0, 50.0);
pub const FUZZY_DESIRABLE: (f64, f64, f64) = (25.0, 50.0, 75.0);
pub const FUZZY_VERY_DESIRABLE: (f64, f64, f64) = (50.0, 75.0, 100.0);
