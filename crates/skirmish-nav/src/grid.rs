//! Uniform cell grid over the arena floor.
//!
//! Cells are either walkable or blocked; walkable cells may belong to a
//! named region (room). All navigation queries degrade to `None` rather
//! than erroring when a point falls outside the walkable surface.

use glam::DVec2;

use skirmish_core::surface::{NavigationQuery, Region, SurfaceRef};
use skirmish_core::types::Position;

use crate::path;

/// Region marker for cells that belong to no region.
pub(crate) const NO_REGION: u16 = u16::MAX;

/// Fraction of a cell traversed per raycast sample step.
const RAY_STEP_FACTOR: f64 = 0.25;

pub struct NavGrid {
    pub(crate) width: usize,
    pub(crate) height: usize,
    pub(crate) cell_size: f64,
    origin_x: f64,
    origin_y: f64,
    pub(crate) walkable: Vec<bool>,
    pub(crate) region_of_cell: Vec<u16>,
    /// Centroid per region (mean of member cell centers).
    centroids: Vec<Position>,
}

impl NavGrid {
    /// Create a fully-walkable grid whose min corner is at `(origin_x, origin_y)`.
    pub fn open(origin_x: f64, origin_y: f64, width: usize, height: usize, cell_size: f64) -> Self {
        Self {
            width,
            height,
            cell_size,
            origin_x,
            origin_y,
            walkable: vec![true; width * height],
            region_of_cell: vec![NO_REGION; width * height],
            centroids: Vec::new(),
        }
    }

    /// Mark every cell intersecting the rectangle as blocked.
    pub fn block_rect(&mut self, min_x: f64, min_y: f64, max_x: f64, max_y: f64) {
        let (cx0, cy0) = self.clamped_cell(min_x, min_y);
        let (cx1, cy1) = self.clamped_cell(max_x, max_y);
        for cy in cy0..=cy1 {
            for cx in cx0..=cx1 {
                let idx = cy * self.width + cx;
                self.walkable[idx] = false;
                self.region_of_cell[idx] = NO_REGION;
            }
        }
    }

    /// Declare a region covering the rectangle. Only walkable cells join;
    /// the region centroid is the mean of its member cell centers.
    /// Returns the region index.
    pub fn add_region_rect(&mut self, min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> usize {
        let index = self.centroids.len();
        let (cx0, cy0) = self.clamped_cell(min_x, min_y);
        let (cx1, cy1) = self.clamped_cell(max_x, max_y);

        let mut sum = DVec2::ZERO;
        let mut count = 0u32;
        for cy in cy0..=cy1 {
            for cx in cx0..=cx1 {
                let idx = cy * self.width + cx;
                if self.walkable[idx] {
                    self.region_of_cell[idx] = index as u16;
                    let c = self.cell_center(idx);
                    sum += DVec2::new(c.x, c.y);
                    count += 1;
                }
            }
        }

        let centroid = if count > 0 {
            let mean = sum / count as f64;
            Position::new(mean.x, mean.y, 0.0)
        } else {
            Position::new((min_x + max_x) / 2.0, (min_y + max_y) / 2.0, 0.0)
        };
        self.centroids.push(centroid);
        index
    }

    pub(crate) fn cell_center(&self, idx: usize) -> Position {
        let cx = idx % self.width;
        let cy = idx / self.width;
        Position::new(
            self.origin_x + (cx as f64 + 0.5) * self.cell_size,
            self.origin_y + (cy as f64 + 0.5) * self.cell_size,
            0.0,
        )
    }

    /// Cell containing the point, or `None` outside the grid.
    pub(crate) fn cell_at(&self, x: f64, y: f64) -> Option<usize> {
        let cx = (x - self.origin_x) / self.cell_size;
        let cy = (y - self.origin_y) / self.cell_size;
        if cx < 0.0 || cy < 0.0 {
            return None;
        }
        let (cx, cy) = (cx as usize, cy as usize);
        if cx >= self.width || cy >= self.height {
            return None;
        }
        Some(cy * self.width + cx)
    }

    /// Cell coordinates clamped into the grid.
    fn clamped_cell(&self, x: f64, y: f64) -> (usize, usize) {
        let cx = ((x - self.origin_x) / self.cell_size).floor().max(0.0) as usize;
        let cy = ((y - self.origin_y) / self.cell_size).floor().max(0.0) as usize;
        (cx.min(self.width - 1), cy.min(self.height - 1))
    }

    pub(crate) fn is_walkable_point(&self, x: f64, y: f64) -> bool {
        self.cell_at(x, y).map(|i| self.walkable[i]).unwrap_or(false)
    }

    pub(crate) fn cell_size(&self) -> f64 {
        self.cell_size
    }

    pub(crate) fn region_centroid(&self, region: usize) -> Position {
        self.centroids[region]
    }

    fn region_at_cell(&self, idx: usize) -> Option<Region> {
        let r = self.region_of_cell[idx];
        if self.walkable[idx] && r != NO_REGION {
            Some(Region {
                index: r as usize,
                centroid: self.centroids[r as usize],
            })
        } else {
            None
        }
    }
}

impl NavigationQuery for NavGrid {
    fn nearest_surface(
        &self,
        point: &Position,
        half_extents: (f64, f64, f64),
    ) -> Option<SurfaceRef> {
        // The grid is flat; the vertical half-extent is accepted for
        // contract compatibility and ignored.
        let (hx, hy, _hz) = half_extents;
        let (cx0, cy0) = self.clamped_cell(point.x - hx, point.y - hy);
        let (cx1, cy1) = self.clamped_cell(point.x + hx, point.y + hy);

        let p = DVec2::new(point.x, point.y);
        let mut best: Option<(f64, usize)> = None;
        for cy in cy0..=cy1 {
            for cx in cx0..=cx1 {
                let idx = cy * self.width + cx;
                if !self.walkable[idx] {
                    continue;
                }
                let c = self.cell_center(idx);
                let d2 = p.distance_squared(DVec2::new(c.x, c.y));
                if best.map_or(true, |(bd, _)| d2 < bd) {
                    best = Some((d2, idx));
                }
            }
        }
        best.map(|(_, idx)| SurfaceRef(idx))
    }

    fn raycast(&self, start: SurfaceRef, from: &Position, to: &Position) -> Option<f64> {
        if start.0 >= self.walkable.len() {
            return None;
        }

        let a = DVec2::new(from.x, from.y);
        let b = DVec2::new(to.x, to.y);
        let total = a.distance(b);
        if total < f64::EPSILON {
            return Some(1.0);
        }

        // Stepped traversal at a fraction of the cell size: the first sample
        // landing on a blocked or out-of-grid cell ends the ray.
        let steps = (total / (self.cell_size * RAY_STEP_FACTOR)).ceil().max(1.0) as usize;
        for i in 1..=steps {
            let t = i as f64 / steps as f64;
            let s = a.lerp(b, t);
            if !self.is_walkable_point(s.x, s.y) {
                return Some((i - 1) as f64 / steps as f64);
            }
        }
        Some(1.0)
    }

    fn random_region(&self, sample: f64) -> Option<Region> {
        if self.centroids.is_empty() {
            return None;
        }
        let n = self.centroids.len();
        let index = ((sample.clamp(0.0, 1.0) * n as f64) as usize).min(n - 1);
        Some(Region {
            index,
            centroid: self.centroids[index],
        })
    }

    fn region_for_point(&self, point: &Position, tolerance: f64) -> Option<Region> {
        if let Some(idx) = self.cell_at(point.x, point.y) {
            if let Some(region) = self.region_at_cell(idx) {
                return Some(region);
            }
        }

        // Fall back to the nearest in-region cell within the tolerance box.
        let (cx0, cy0) = self.clamped_cell(point.x - tolerance, point.y - tolerance);
        let (cx1, cy1) = self.clamped_cell(point.x + tolerance, point.y + tolerance);
        let p = DVec2::new(point.x, point.y);
        let mut best: Option<(f64, Region)> = None;
        for cy in cy0..=cy1 {
            for cx in cx0..=cx1 {
                let idx = cy * self.width + cx;
                if let Some(region) = self.region_at_cell(idx) {
                    let c = self.cell_center(idx);
                    let d2 = p.distance_squared(DVec2::new(c.x, c.y));
                    if best.map_or(true, |(bd, _)| d2 < bd) {
                        best = Some((d2, region));
                    }
                }
            }
        }
        best.map(|(_, r)| r)
    }

    fn region_count(&self) -> usize {
        self.centroids.len()
    }

    fn find_path(&self, from: &Position, to: &Position) -> Option<Vec<Position>> {
        path::find_path(self, from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 20x20 open grid with a wall strip across the middle, gap at the left.
    fn make_walled_grid() -> NavGrid {
        let mut grid = NavGrid::open(0.0, 0.0, 20, 20, 1.0);
        grid.block_rect(4.0, 9.0, 20.0, 10.0);
        grid.add_region_rect(0.0, 0.0, 20.0, 9.0);
        grid.add_region_rect(0.0, 10.0, 20.0, 20.0);
        grid
    }

    #[test]
    fn test_nearest_surface_prefers_walkable() {
        let grid = make_walled_grid();
        // Point inside the wall strip: nearest surface must be outside it.
        let blocked = Position::new(10.0, 9.5, 0.0);
        let surface = grid
            .nearest_surface(&blocked, (2.0, 4.0, 2.0))
            .expect("walkable cell within extents");
        assert!(grid.walkable[surface.0]);
    }

    #[test]
    fn test_nearest_surface_none_when_boxed_out() {
        let mut grid = NavGrid::open(0.0, 0.0, 10, 10, 1.0);
        grid.block_rect(0.0, 0.0, 10.0, 10.0);
        let p = Position::new(5.0, 5.0, 0.0);
        assert!(grid.nearest_surface(&p, (2.0, 4.0, 2.0)).is_none());
    }

    #[test]
    fn test_raycast_clear_and_blocked() {
        let grid = make_walled_grid();
        let start = grid
            .nearest_surface(&Position::new(2.0, 2.0, 0.0), (2.0, 4.0, 2.0))
            .unwrap();

        // Same-side ray: unobstructed.
        let clear = grid
            .raycast(start, &Position::new(2.0, 2.0, 0.0), &Position::new(18.0, 2.0, 0.0))
            .unwrap();
        assert!(clear >= 1.0);

        // Ray through the wall strip: obstructed partway.
        let blocked = grid
            .raycast(start, &Position::new(10.0, 2.0, 0.0), &Position::new(10.0, 18.0, 0.0))
            .unwrap();
        assert!(blocked < 1.0);
        assert!(blocked > 0.2, "wall is past the first few samples");
    }

    #[test]
    fn test_region_for_point() {
        let grid = make_walled_grid();
        let south = grid
            .region_for_point(&Position::new(10.0, 4.0, 0.0), 1.0)
            .unwrap();
        let north = grid
            .region_for_point(&Position::new(10.0, 15.0, 0.0), 1.0)
            .unwrap();
        assert_ne!(south.index, north.index);

        // Inside the wall with zero tolerance: no region.
        assert!(grid
            .region_for_point(&Position::new(10.0, 9.5, 0.0), 0.0)
            .is_none());
    }

    #[test]
    fn test_random_region_covers_all_indices() {
        let grid = make_walled_grid();
        assert_eq!(grid.region_count(), 2);
        assert_eq!(grid.random_region(0.0).unwrap().index, 0);
        assert_eq!(grid.random_region(0.99).unwrap().index, 1);
        assert_eq!(grid.random_region(1.0).unwrap().index, 1);
    }
}
