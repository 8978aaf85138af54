//! Weapon inventory and the current/next weapon transition machine.

use std::collections::HashMap;

use skirmish_core::constants::WEAPON_CHANGE_COST;
use skirmish_core::enums::{WeaponKind, WeaponStatus};
use skirmish_core::types::Position;

use crate::combat::ShotRequest;
use crate::weapons::weapon::{Weapon, WeaponTransition};

/// Weapon lifecycle events buffered for the engine to translate into
/// presentation events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeaponEvent {
    Equipped(WeaponKind),
    Hidden(WeaponKind),
    ReloadStarted(WeaponKind),
}

/// One bot's weapon inventory.
///
/// The list and the kind-keyed index are kept in lock-step; both are
/// mutated only through `add_weapon`/`remove_weapon`.
#[derive(Debug, Clone)]
pub struct WeaponSystem {
    weapons: Vec<Weapon>,
    index: HashMap<WeaponKind, usize>,
    current: WeaponKind,
    next_weapon: Option<WeaponKind>,
    /// Seconds a target must have been visible before the first shot.
    pub reaction_time: f64,
    /// Maximum per-axis aim offset at full noise distance.
    pub aim_accuracy: f64,
    events: Vec<WeaponEvent>,
}

impl WeaponSystem {
    pub fn new(reaction_time: f64, aim_accuracy: f64) -> Self {
        let mut system = Self {
            weapons: Vec::new(),
            index: HashMap::new(),
            current: WeaponKind::Blaster,
            next_weapon: None,
            reaction_time,
            aim_accuracy,
            events: Vec::new(),
        };
        system.reset();
        system
    }

    /// Strip all weapons and hand back the base Blaster, already in hand.
    /// This is the only path to `Ready` that skips the equip transition —
    /// the starting weapon spawns drawn.
    pub fn reset(&mut self) {
        self.weapons.clear();
        self.index.clear();
        self.next_weapon = None;
        self.add_weapon(WeaponKind::Blaster);
        self.current = WeaponKind::Blaster;
        if let Some(weapon) = self.weapon_mut(WeaponKind::Blaster) {
            weapon.set_ready();
        }
    }

    /// Add a weapon of the kind. A second weapon of an already-held kind
    /// indicates a caller bug; the request is dropped.
    pub fn add_weapon(&mut self, kind: WeaponKind) {
        if self.index.contains_key(&kind) {
            tracing::debug!(?kind, "duplicate add_weapon ignored");
            return;
        }
        self.index.insert(kind, self.weapons.len());
        self.weapons.push(Weapon::new(kind));
    }

    /// Remove a weapon of the kind; absent kinds are a no-op. Removing the
    /// last weapon (a caller bug) falls back to a full reset so the
    /// current-weapon invariant holds.
    pub fn remove_weapon(&mut self, kind: WeaponKind) {
        let Some(pos) = self.index.remove(&kind) else {
            tracing::debug!(?kind, "remove_weapon for kind not held");
            return;
        };
        self.weapons.remove(pos);
        for (i, weapon) in self.weapons.iter().enumerate() {
            self.index.insert(weapon.kind, i);
        }
        if self.weapons.is_empty() {
            tracing::warn!("last weapon removed; resetting to base loadout");
            self.reset();
            return;
        }
        if self.current == kind {
            self.current = self.weapons[0].kind;
        }
        if self.next_weapon == Some(kind) {
            self.next_weapon = None;
        }
    }

    pub fn weapon(&self, kind: WeaponKind) -> Option<&Weapon> {
        self.index.get(&kind).and_then(|&i| self.weapons.get(i))
    }

    pub fn weapon_mut(&mut self, kind: WeaponKind) -> Option<&mut Weapon> {
        match self.index.get(&kind) {
            Some(&i) => self.weapons.get_mut(i),
            None => None,
        }
    }

    pub fn weapons(&self) -> &[Weapon] {
        &self.weapons
    }

    pub fn current_kind(&self) -> WeaponKind {
        self.current
    }

    pub fn next_pending(&self) -> Option<WeaponKind> {
        self.next_weapon
    }

    pub fn current_weapon(&self) -> &Weapon {
        match self.weapon(self.current) {
            Some(w) => w,
            // The list is never empty after reset.
            None => &self.weapons[0],
        }
    }

    fn current_weapon_mut(&mut self) -> &mut Weapon {
        let i = self.index.get(&self.current).copied().unwrap_or(0);
        &mut self.weapons[i]
    }

    /// Request a change to another held weapon. Requesting the kind
    /// already in hand records nothing.
    pub fn set_next_weapon(&mut self, kind: WeaponKind) {
        if kind == self.current {
            return;
        }
        if !self.index.contains_key(&kind) {
            tracing::debug!(?kind, "set_next_weapon for kind not held");
            return;
        }
        self.next_weapon = Some(kind);
    }

    /// Advance the hide → switch → equip sequence for a pending change.
    /// Runs every tick, unthrottled.
    pub fn update_weapon_change(&mut self, now: f64) {
        let Some(next) = self.next_weapon else { return };
        let status = self.current_weapon().status;
        match status {
            WeaponStatus::Ready | WeaponStatus::Empty | WeaponStatus::OutOfAmmo => {
                self.current_weapon_mut().hide(now);
            }
            WeaponStatus::Unready => {
                self.current = next;
                self.current_weapon_mut().equip(now);
                self.next_weapon = None;
            }
            _ => {}
        }
    }

    /// Per-tick update: drive any pending weapon change and advance every
    /// weapon's timed status.
    pub fn update(&mut self, now: f64) {
        self.update_weapon_change(now);
        for weapon in &mut self.weapons {
            match weapon.update(now) {
                Some(WeaponTransition::Equipped) => {
                    self.events.push(WeaponEvent::Equipped(weapon.kind));
                }
                Some(WeaponTransition::Hidden) => {
                    self.events.push(WeaponEvent::Hidden(weapon.kind));
                }
                None => {}
            }
        }
    }

    /// Fire the current weapon at `target`. `Empty` triggers a reload
    /// instead; any other non-`Ready` status silently drops the request.
    pub fn shoot(&mut self, now: f64, origin: Position, target: Position) -> Option<ShotRequest> {
        let kind = self.current;
        let weapon = self.current_weapon_mut();
        match weapon.status {
            WeaponStatus::Empty => {
                if weapon.reload(now) {
                    self.events.push(WeaponEvent::ReloadStarted(kind));
                }
                None
            }
            WeaponStatus::Ready => {
                if !weapon.try_shoot(now) {
                    return None;
                }
                Some(ShotRequest {
                    weapon: kind,
                    origin,
                    target,
                    pellets: weapon.profile.pellets,
                    damage: weapon.profile.damage,
                })
            }
            _ => None,
        }
    }

    /// Fuzzy desirability of one held weapon for a target at `distance`.
    /// An empty clip short-circuits to 0 regardless of the fuzzy inputs.
    pub fn weapon_desirability(&self, kind: WeaponKind, distance: f64) -> f64 {
        match self.weapon(kind) {
            Some(w) if w.rounds_left > 0 => {
                w.profile.fuzzy.desirability(distance, w.rounds_left as f64)
            }
            _ => 0.0,
        }
    }

    /// Pick the best weapon for a target at `distance` and request the
    /// change. Candidates other than the weapon in hand pay a fixed change
    /// cost; the strictly highest score wins, inventory order breaking
    /// ties.
    pub fn select_best_weapon(&mut self, distance: f64) {
        let mut best: Option<(f64, WeaponKind)> = None;
        for weapon in &self.weapons {
            let mut score = self.weapon_desirability(weapon.kind, distance);
            if weapon.kind != self.current {
                score -= WEAPON_CHANGE_COST;
            }
            if best.map_or(true, |(b, _)| score > b) {
                best = Some((score, weapon.kind));
            }
        }
        if let Some((_, kind)) = best {
            self.set_next_weapon(kind);
        }
    }

    /// Drain buffered lifecycle events.
    pub fn take_events(&mut self) -> Vec<WeaponEvent> {
        std::mem::take(&mut self.events)
    }
}
