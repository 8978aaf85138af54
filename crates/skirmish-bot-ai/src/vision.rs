//! Vision cone and line-of-sight checks against the navigable surface.

use glam::DVec3;

use skirmish_core::constants::NEAREST_SURFACE_HALF_EXTENTS;
use skirmish_core::surface::NavigationQuery;
use skirmish_core::types::Position;

/// A bot's sighting parameters.
///
/// NOTE: the distance gate in `check_field_of_view` compares squared
/// distance against `range^2 / 2`, halving the effective sighting range to
/// `range / sqrt(2)`. Possibly unintended; kept pending product
/// confirmation rather than silently widened.
#[derive(Debug, Clone)]
pub struct Vision {
    /// Full cone angle in radians.
    pub field_of_view: f64,
    /// Nominal sighting range in world units (see note above).
    pub range: f64,
}

impl Vision {
    pub fn new(field_of_view: f64, range: f64) -> Self {
        Self {
            field_of_view,
            range,
        }
    }

    /// Can the observer at `position`, facing `direction`, see `target`?
    /// Distance gate, then cone gate, then a line-of-sight raycast.
    pub fn check_field_of_view(
        &self,
        nav: &dyn NavigationQuery,
        position: &Position,
        direction: DVec3,
        target: &Position,
    ) -> bool {
        let squared_distance = position.squared_range_to(target);
        if squared_distance > self.range * self.range / 2.0 {
            return false;
        }

        let to_target = position.direction_to(target);
        if to_target != DVec3::ZERO {
            let facing = direction.normalize_or_zero();
            let cos_angle = facing.dot(to_target).clamp(-1.0, 1.0);
            if cos_angle.acos() > self.field_of_view / 2.0 {
                return false;
            }
        }

        self.can_see(nav, position, target)
    }

    /// Unoccluded line of sight from `from` to `to`, constrained to the
    /// walkable surface. Every navigation failure resolves to "not
    /// visible", never an error.
    pub fn can_see(&self, nav: &dyn NavigationQuery, from: &Position, to: &Position) -> bool {
        let start = match nav.nearest_surface(from, NEAREST_SURFACE_HALF_EXTENTS) {
            Some(s) => s,
            None => return false,
        };
        match nav.raycast(start, from, to) {
            Some(fraction) => fraction >= 1.0,
            None => false,
        }
    }
}
