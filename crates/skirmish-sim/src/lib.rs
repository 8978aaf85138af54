//! Simulation engine for SKIRMISH.
//!
//! Owns the hecs ECS world, runs the per-agent AI pipeline at a fixed
//! tick rate, and produces `MatchSnapshot`s. Completely headless, which
//! keeps every match deterministic and testable.

pub mod engine;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use skirmish_core as core;

#[cfg(test)]
mod tests;
