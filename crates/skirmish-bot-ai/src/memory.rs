//! Perception memory: last-known data about other entities.

use std::collections::BTreeMap;

use skirmish_core::types::{EntityId, Position};

/// One observer's last-known data about one other entity.
///
/// `time_became_visible` is written only on the invisible-to-visible
/// transition, so it marks the start of the current sighting.
#[derive(Debug, Clone)]
pub struct MemoryRecord {
    pub entity: EntityId,
    pub last_sensed_position: Position,
    pub time_last_sensed: f64,
    pub time_became_visible: f64,
    pub visible: bool,
}

impl MemoryRecord {
    fn new(entity: EntityId) -> Self {
        Self {
            entity,
            last_sensed_position: Position::default(),
            time_last_sensed: -1.0,
            time_became_visible: -1.0,
            visible: false,
        }
    }
}

/// Per-bot mapping from observed entity to memory record.
///
/// Records are never purged once created; `valid_records` filters by the
/// recency window instead. A `BTreeMap` keeps iteration order stable so
/// tie-breaks downstream are deterministic.
#[derive(Debug, Clone)]
pub struct MemorySystem {
    records: BTreeMap<EntityId, MemoryRecord>,
    /// Seconds after the last sensing within which a record stays valid.
    pub memory_span: f64,
}

impl MemorySystem {
    pub fn new(memory_span: f64) -> Self {
        Self {
            records: BTreeMap::new(),
            memory_span,
        }
    }

    /// Insert a fresh record for the entity, overwriting any existing one.
    pub fn create_record(&mut self, entity: EntityId) {
        self.records.insert(entity, MemoryRecord::new(entity));
    }

    /// Remove the record if present; absent records are a no-op.
    pub fn delete_record(&mut self, entity: EntityId) {
        self.records.remove(&entity);
    }

    pub fn has_record(&self, entity: EntityId) -> bool {
        self.records.contains_key(&entity)
    }

    pub fn record(&self, entity: EntityId) -> Option<&MemoryRecord> {
        self.records.get(&entity)
    }

    pub fn record_mut(&mut self, entity: EntityId) -> Option<&mut MemoryRecord> {
        self.records.get_mut(&entity)
    }

    /// Every entity a record exists for, in key order.
    pub fn known_entities(&self) -> Vec<EntityId> {
        self.records.keys().copied().collect()
    }

    /// Records sensed within the memory span (boundary inclusive).
    /// Returns a fresh collection, not a view.
    pub fn valid_records(&self, current_time: f64) -> Vec<&MemoryRecord> {
        self.records
            .values()
            .filter(|r| current_time - r.time_last_sensed <= self.memory_span)
            .collect()
    }

    /// Feed one perception result into the map. A record is created lazily
    /// the first time the entity is actually seen; thereafter visibility
    /// transitions and sensing times are tracked on the existing record.
    pub fn sense(&mut self, entity: EntityId, position: &Position, visible: bool, now: f64) {
        if !self.has_record(entity) {
            if !visible {
                return;
            }
            self.create_record(entity);
        }
        if let Some(record) = self.records.get_mut(&entity) {
            if visible {
                if !record.visible {
                    record.time_became_visible = now;
                }
                record.visible = true;
                record.last_sensed_position = *position;
                record.time_last_sensed = now;
            } else {
                record.visible = false;
            }
        }
    }
}
