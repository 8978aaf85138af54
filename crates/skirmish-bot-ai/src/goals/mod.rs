//! Goal-driven behavior engine.
//!
//! Goals form a tree of tagged payloads inside `GoalNode`; composites own
//! an ordered sub-goal queue executed strictly front to back, one front
//! goal per tick. Replacement always terminates the old tree first so no
//! two goals ever drive steering at once.

pub mod attack;
pub mod dodge;
pub mod explore;
pub mod find_path;
pub mod follow_path;
pub mod get_item;
pub mod maintain_distance;
pub mod node;
pub mod pickup;
pub mod seek;

pub use node::{BotMind, GoalContext, GoalNode, GoalPayload, PickupEvent};
