//! Contracts for the navigable surface.
//!
//! The AI treats navigation as a black-box oracle: nearest-surface lookup,
//! constrained raycasts, region queries, and path finding. Any query that
//! cannot be answered resolves to `None` — absence of navigation data is a
//! normal outcome, never an error.

use serde::{Deserialize, Serialize};

use crate::types::Position;

/// Opaque handle to a walkable surface element (a cell or polygon).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceRef(pub usize);

/// A navigable region of the arena.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub index: usize,
    pub centroid: Position,
}

/// Spatial queries against the walkable surface.
pub trait NavigationQuery {
    /// Walkable surface element nearest to `point` within an axis-aligned
    /// search box of the given half-extents, or `None` if the box contains
    /// no walkable surface.
    fn nearest_surface(&self, point: &Position, half_extents: (f64, f64, f64))
        -> Option<SurfaceRef>;

    /// Cast a ray from `from` toward `to`, constrained to the walkable
    /// surface starting at `start`. Returns the fraction of the full
    /// distance travelled before obstruction; a value >= 1.0 means the ray
    /// reached `to` unobstructed. `None` when the cast cannot be evaluated.
    fn raycast(&self, start: SurfaceRef, from: &Position, to: &Position) -> Option<f64>;

    /// Uniformly pick a region from `sample` in [0, 1), or `None` when the
    /// surface has no regions at all.
    fn random_region(&self, sample: f64) -> Option<Region>;

    /// Region containing `point`, searching up to `tolerance` around it.
    fn region_for_point(&self, point: &Position, tolerance: f64) -> Option<Region>;

    fn region_count(&self) -> usize;

    /// Ordered waypoints from `from` to `to`, or `None` when unreachable.
    fn find_path(&self, from: &Position, to: &Position) -> Option<Vec<Position>>;
}

/// Graph-distance lookup between regions, used for nearest-reachable-item
/// searches. `f64::INFINITY` marks unreachable pairs.
pub trait RegionCostQuery {
    fn cost(&self, from_region: usize, to_region: usize) -> f64;
}
