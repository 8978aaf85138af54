//! Item lookup contract consumed by the goal layer and feature scoring.
//!
//! The engine rebuilds a flat item index each tick and hands it to the AI
//! behind this trait; goals never touch the ECS world directly.

use skirmish_core::enums::ItemKind;
use skirmish_core::types::{EntityId, Position};

/// One item as seen by the AI this tick.
#[derive(Debug, Clone)]
pub struct ItemInfo {
    pub id: EntityId,
    pub kind: ItemKind,
    pub position: Position,
    pub active: bool,
    /// Navigation region the item sits in, if it is on the walkable surface.
    pub region: Option<usize>,
}

pub trait ItemQuery {
    fn items(&self) -> &[ItemInfo];

    fn item(&self, id: EntityId) -> Option<&ItemInfo> {
        self.items().iter().find(|i| i.id == id)
    }

    /// Closest active item of the kind by straight-line distance.
    fn closest_item(&self, from: &Position, kind: ItemKind) -> Option<(&ItemInfo, f64)> {
        let mut best: Option<(&ItemInfo, f64)> = None;
        for info in self.items() {
            if info.kind != kind || !info.active {
                continue;
            }
            let distance = from.range_to(&info.position);
            if best.map_or(true, |(_, bd)| distance < bd) {
                best = Some((info, distance));
            }
        }
        best
    }
}
