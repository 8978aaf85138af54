//! Brain system: evaluator arbitration and goal tree execution.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use skirmish_bot_ai::agent::Bot;
use skirmish_bot_ai::goals::{BotMind, GoalContext, PickupEvent};
use skirmish_bot_ai::items::ItemQuery;
use skirmish_bot_ai::planner::PathPlanner;
use skirmish_core::constants::DT;
use skirmish_core::surface::{NavigationQuery, RegionCostQuery};

/// Run arbitration (throttled) and goal execution (every tick) for every
/// living bot. Returns the pickups produced by goal execution; the engine
/// applies them to the world afterwards.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    nav: &dyn NavigationQuery,
    costs: &dyn RegionCostQuery,
    items: &dyn ItemQuery,
    planner: &mut PathPlanner,
    rng: &mut ChaCha8Rng,
    now: f64,
) -> Vec<PickupEvent> {
    let mut pickups: Vec<PickupEvent> = Vec::new();

    for (_entity, bot) in world.query_mut::<&mut Bot>() {
        if !bot.body.is_alive() {
            continue;
        }

        let arbitrate = bot.arbitration_regulator.ready();

        let Bot {
            id,
            body,
            vision,
            memory,
            targeting,
            weapons,
            brain,
            steering,
            fsm,
            path,
            ..
        } = bot;

        let mut mind = BotMind {
            id: *id,
            body,
            vision,
            memory,
            targeting,
            weapons,
            steering,
            fsm,
            path,
        };
        let mut ctx = GoalContext {
            now,
            dt: DT,
            nav,
            costs,
            items,
            planner: &mut *planner,
            rng: &mut *rng,
            pickups: &mut pickups,
        };

        if arbitrate {
            brain.arbitrate(&mut mind, &mut ctx);
        }
        brain.execute(&mut mind, &mut ctx);
    }

    pickups
}
