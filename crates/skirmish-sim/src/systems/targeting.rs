//! Target refresh system: throttled target selection plus combat state
//! machine event dispatch.

use hecs::World;

use skirmish_bot_ai::agent::Bot;
use skirmish_core::enums::BotEvent;

pub fn run(world: &mut World, now: f64) {
    for (_entity, bot) in world.query_mut::<&mut Bot>() {
        if !bot.body.is_alive() {
            continue;
        }
        if !bot.target_regulator.ready() {
            continue;
        }

        bot.targeting.update(&bot.body.position, &bot.memory, now);

        if bot.targeting.is_target_shootable(&bot.memory) {
            bot.fsm.dispatch(BotEvent::EnemySpotted);
            bot.fsm.dispatch(BotEvent::DodgeOn);
        } else if bot.targeting.has_target() {
            bot.fsm.dispatch(BotEvent::Hunt);
            bot.fsm.dispatch(BotEvent::DodgeOff);
        } else {
            bot.fsm.dispatch(BotEvent::EnemyLost);
        }
    }
}
