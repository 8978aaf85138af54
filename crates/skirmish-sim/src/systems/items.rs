//! Item index construction, pickup application, and respawn clocks.

use hecs::World;

use skirmish_bot_ai::goals::PickupEvent;
use skirmish_bot_ai::items::{ItemInfo, ItemQuery};
use skirmish_core::components::{Ident, Item};
use skirmish_core::constants::{DT, ITEM_RESPAWN_SECS, REGION_TOLERANCE};
use skirmish_core::events::CombatEvent;
use skirmish_core::surface::NavigationQuery;
use skirmish_core::types::Position;

/// Flat per-tick view of every item, handed to the AI behind `ItemQuery`.
pub struct ItemIndex(Vec<ItemInfo>);

impl ItemQuery for ItemIndex {
    fn items(&self) -> &[ItemInfo] {
        &self.0
    }
}

/// Collect the current item set from the world.
pub fn build_index(world: &World, nav: &dyn NavigationQuery) -> ItemIndex {
    let mut items: Vec<ItemInfo> = world
        .query::<(&Ident, &Position, &Item)>()
        .iter()
        .map(|(_, (ident, position, item))| ItemInfo {
            id: ident.0,
            kind: item.kind,
            position: *position,
            active: item.active,
            region: nav
                .region_for_point(position, REGION_TOLERANCE)
                .map(|r| r.index),
        })
        .collect();
    items.sort_by_key(|i| i.id);
    ItemIndex(items)
}

/// Deactivate items consumed during goal execution and start their
/// respawn clocks.
pub fn apply_pickups(
    world: &mut World,
    pickups: &[PickupEvent],
    current_tick: u64,
    events: &mut Vec<CombatEvent>,
    items_collected: &mut u32,
) {
    if pickups.is_empty() {
        return;
    }
    let respawn_ticks = (ITEM_RESPAWN_SECS / DT) as u64;

    for (_entity, (ident, item)) in world.query_mut::<(&Ident, &mut Item)>() {
        for pickup in pickups {
            if pickup.item == ident.0 && item.active {
                item.active = false;
                item.respawn_at_tick = current_tick + respawn_ticks;
                events.push(CombatEvent::ItemCollected {
                    item: ident.0,
                    agent: pickup.agent,
                    kind: item.kind,
                });
                *items_collected += 1;
            }
        }
    }
}

/// Reactivate items whose respawn clock has expired.
pub fn run_respawns(world: &mut World, current_tick: u64, events: &mut Vec<CombatEvent>) {
    for (_entity, (ident, item)) in world.query_mut::<(&Ident, &mut Item)>() {
        if !item.active && current_tick >= item.respawn_at_tick {
            item.active = true;
            events.push(CombatEvent::ItemRespawned {
                item: ident.0,
                kind: item.kind,
            });
        }
    }
}
