//! Target selection over the owner's memory records.

use skirmish_core::types::{EntityId, Position};

use crate::memory::MemorySystem;

/// Selects the single current target from memory each update.
///
/// The current target is a key into the owner's `MemorySystem`, never an
/// owned copy — accessors re-read the live record.
#[derive(Debug, Clone, Default)]
pub struct TargetSystem {
    current: Option<EntityId>,
}

impl TargetSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute the current target. Selection is a strict priority, not a
    /// blended score: any visible record beats every invisible one.
    ///
    /// 1. Visible records: nearest by squared distance to the last sensed
    ///    position (first minimal wins on ties).
    /// 2. Otherwise invisible records: most recently sensed wins.
    /// 3. Otherwise no target.
    pub fn update(&mut self, owner_position: &Position, memory: &MemorySystem, now: f64) {
        let records = memory.valid_records(now);

        let mut best_visible: Option<(f64, EntityId)> = None;
        let mut best_invisible: Option<(f64, EntityId)> = None;

        for record in records {
            if record.visible {
                let d2 = owner_position.squared_range_to(&record.last_sensed_position);
                if best_visible.map_or(true, |(bd, _)| d2 < bd) {
                    best_visible = Some((d2, record.entity));
                }
            } else {
                let t = record.time_last_sensed;
                if best_invisible.map_or(true, |(bt, _)| t > bt) {
                    best_invisible = Some((t, record.entity));
                }
            }
        }

        self.current = best_visible
            .map(|(_, e)| e)
            .or(best_invisible.map(|(_, e)| e));
    }

    /// Drop the current target without touching memory.
    pub fn reset(&mut self) {
        self.current = None;
    }

    pub fn target(&self) -> Option<EntityId> {
        self.current
    }

    pub fn has_target(&self) -> bool {
        self.current.is_some()
    }

    /// True when a target is held and its record says it is visible now.
    pub fn is_target_shootable(&self, memory: &MemorySystem) -> bool {
        self.current
            .and_then(|e| memory.record(e))
            .map(|r| r.visible)
            .unwrap_or(false)
    }

    pub fn last_sensed_position(&self, memory: &MemorySystem) -> Option<Position> {
        self.current
            .and_then(|e| memory.record(e))
            .map(|r| r.last_sensed_position)
    }

    /// Seconds timestamp of the last sensing, or -1.0 with no target.
    pub fn time_last_sensed(&self, memory: &MemorySystem) -> f64 {
        self.current
            .and_then(|e| memory.record(e))
            .map(|r| r.time_last_sensed)
            .unwrap_or(-1.0)
    }

    /// Seconds timestamp the target became visible, or -1.0 with no target.
    pub fn time_became_visible(&self, memory: &MemorySystem) -> f64 {
        self.current
            .and_then(|e| memory.record(e))
            .map(|r| r.time_became_visible)
            .unwrap_or(-1.0)
    }
}
