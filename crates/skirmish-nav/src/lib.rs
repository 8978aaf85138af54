//! Walkable-surface navigation for SKIRMISH.
//!
//! Implements the core navigation contracts over a uniform cell grid:
//! nearest-surface lookup, stepped raycasts, region queries, A* paths,
//! and a precomputed region-to-region cost table.

pub mod grid;
pub mod path;

pub use grid::NavGrid;
pub use path::RegionCosts;

pub use skirmish_core as core;
