//! Grid path finding and the region cost table.
//!
//! A* over walkable cells with integer step costs (10 orthogonal,
//! 14 diagonal), followed by a line-of-sight decimation pass so bots
//! walk waypoint chains instead of cell staircases.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use skirmish_core::surface::{NavigationQuery, RegionCostQuery};
use skirmish_core::types::Position;

use crate::grid::NavGrid;

const ORTHO_COST: i64 = 10;
const DIAG_COST: i64 = 14;

/// Snap half-extents used to pull endpoints onto the walkable surface.
const SNAP_EXTENTS: (f64, f64, f64) = (2.0, 4.0, 2.0);

pub(crate) fn find_path(grid: &NavGrid, from: &Position, to: &Position) -> Option<Vec<Position>> {
    let start = grid.nearest_surface(from, SNAP_EXTENTS)?.0;
    let goal = grid.nearest_surface(to, SNAP_EXTENTS)?.0;

    let cells = astar(grid, start, goal)?;

    let mut waypoints: Vec<Position> = cells.iter().map(|&c| grid.cell_center(c)).collect();
    // Preserve the caller's exact destination when it is itself walkable.
    if grid.is_walkable_point(to.x, to.y) {
        if let Some(last) = waypoints.last_mut() {
            *last = *to;
        }
    }
    Some(decimate(grid, waypoints))
}

/// A* over the cell graph. Diagonal steps require both orthogonal
/// neighbors to be walkable so paths cannot clip wall corners.
fn astar(grid: &NavGrid, start: usize, goal: usize) -> Option<Vec<usize>> {
    let n = grid.walkable.len();
    if start >= n || goal >= n {
        return None;
    }
    if start == goal {
        return Some(vec![start]);
    }

    let width = grid.width as i64;
    let height = grid.height as i64;
    let mut g_score = vec![i64::MAX; n];
    let mut came_from = vec![usize::MAX; n];
    let mut open: BinaryHeap<Reverse<(i64, usize)>> = BinaryHeap::new();

    g_score[start] = 0;
    open.push(Reverse((heuristic(grid, start, goal), start)));

    while let Some(Reverse((_, current))) = open.pop() {
        if current == goal {
            let mut path = vec![current];
            let mut c = current;
            while came_from[c] != usize::MAX {
                c = came_from[c];
                path.push(c);
            }
            path.reverse();
            return Some(path);
        }

        let cx = (current % grid.width) as i64;
        let cy = (current / grid.width) as i64;

        for dy in -1i64..=1 {
            for dx in -1i64..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let nx = cx + dx;
                let ny = cy + dy;
                if nx < 0 || ny < 0 || nx >= width || ny >= height {
                    continue;
                }
                let neighbor = (ny * width + nx) as usize;
                if !grid.walkable[neighbor] {
                    continue;
                }
                let diagonal = dx != 0 && dy != 0;
                if diagonal {
                    let side_a = (cy * width + nx) as usize;
                    let side_b = (ny * width + cx) as usize;
                    if !grid.walkable[side_a] || !grid.walkable[side_b] {
                        continue;
                    }
                }
                let step = if diagonal { DIAG_COST } else { ORTHO_COST };
                let tentative = g_score[current].saturating_add(step);
                if tentative < g_score[neighbor] {
                    g_score[neighbor] = tentative;
                    came_from[neighbor] = current;
                    open.push(Reverse((tentative + heuristic(grid, neighbor, goal), neighbor)));
                }
            }
        }
    }

    None
}

/// Octile-distance heuristic in the same integer cost units as the edges.
fn heuristic(grid: &NavGrid, a: usize, b: usize) -> i64 {
    let ax = (a % grid.width) as i64;
    let ay = (a / grid.width) as i64;
    let bx = (b % grid.width) as i64;
    let by = (b / grid.width) as i64;
    let dx = (ax - bx).abs();
    let dy = (ay - by).abs();
    ORTHO_COST * (dx + dy) + (DIAG_COST - 2 * ORTHO_COST) * dx.min(dy)
}

/// Drop intermediate waypoints that are mutually visible, keeping corners.
fn decimate(grid: &NavGrid, waypoints: Vec<Position>) -> Vec<Position> {
    if waypoints.len() <= 2 {
        return waypoints;
    }

    let mut out = Vec::with_capacity(waypoints.len());
    let mut anchor = 0;
    out.push(waypoints[0]);

    while anchor < waypoints.len() - 1 {
        let mut furthest = anchor + 1;
        for candidate in (anchor + 1)..waypoints.len() {
            if segment_clear(grid, &waypoints[anchor], &waypoints[candidate]) {
                furthest = candidate;
            } else {
                break;
            }
        }
        out.push(waypoints[furthest]);
        anchor = furthest;
    }
    out
}

fn segment_clear(grid: &NavGrid, a: &Position, b: &Position) -> bool {
    match grid.nearest_surface(a, SNAP_EXTENTS) {
        Some(start) => grid.raycast(start, a, b).map(|f| f >= 1.0).unwrap_or(false),
        None => false,
    }
}

/// All-pairs region distances along the walkable surface.
///
/// Built once per arena with a Dijkstra sweep from each region centroid;
/// unreachable pairs hold `f64::INFINITY`.
pub struct RegionCosts {
    count: usize,
    table: Vec<f64>,
}

impl RegionCosts {
    pub fn build(grid: &NavGrid) -> Self {
        let count = grid.region_count();
        let mut table = vec![f64::INFINITY; count * count];

        // Cell index of each region centroid.
        let centroid_cells: Vec<Option<usize>> = (0..count)
            .map(|r| {
                let centroid = grid.region_centroid(r);
                grid.nearest_surface(&centroid, SNAP_EXTENTS).map(|s| s.0)
            })
            .collect();

        for (region, &source) in centroid_cells.iter().enumerate() {
            let Some(source) = source else { continue };
            let dist = dijkstra_from(grid, source);
            for (other, &target) in centroid_cells.iter().enumerate() {
                if let Some(target) = target {
                    if dist[target] != i64::MAX {
                        table[region * count + other] =
                            dist[target] as f64 / ORTHO_COST as f64 * grid.cell_size();
                    }
                }
            }
        }

        Self { count, table }
    }
}

impl RegionCostQuery for RegionCosts {
    fn cost(&self, from_region: usize, to_region: usize) -> f64 {
        if from_region >= self.count || to_region >= self.count {
            return f64::INFINITY;
        }
        self.table[from_region * self.count + to_region]
    }
}

fn dijkstra_from(grid: &NavGrid, source: usize) -> Vec<i64> {
    let n = grid.walkable.len();
    let width = grid.width as i64;
    let height = grid.height as i64;
    let mut dist = vec![i64::MAX; n];
    let mut open: BinaryHeap<Reverse<(i64, usize)>> = BinaryHeap::new();

    dist[source] = 0;
    open.push(Reverse((0, source)));

    while let Some(Reverse((d, current))) = open.pop() {
        if d > dist[current] {
            continue;
        }
        let cx = (current % grid.width) as i64;
        let cy = (current / grid.width) as i64;
        for dy in -1i64..=1 {
            for dx in -1i64..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let nx = cx + dx;
                let ny = cy + dy;
                if nx < 0 || ny < 0 || nx >= width || ny >= height {
                    continue;
                }
                let neighbor = (ny * width + nx) as usize;
                if !grid.walkable[neighbor] {
                    continue;
                }
                let step = if dx != 0 && dy != 0 { DIAG_COST } else { ORTHO_COST };
                let next = d.saturating_add(step);
                if next < dist[neighbor] {
                    dist[neighbor] = next;
                    open.push(Reverse((next, neighbor)));
                }
            }
        }
    }

    dist
}
