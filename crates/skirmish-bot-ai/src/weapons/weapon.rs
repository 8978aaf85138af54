//! One weapon instance and its readiness state machine.

use skirmish_core::enums::{WeaponKind, WeaponStatus};

use crate::weapons::profile::{get_profile, WeaponProfile};

/// Status change surfaced to the presentation layer by a timed transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeaponTransition {
    /// Equip finished; the weapon is back in hand.
    Equipped,
    /// Hide finished; the weapon is holstered.
    Hidden,
}

/// A weapon owned by one bot's weapon system.
///
/// Timed states (`Shot`, `Reload`, `Equip`, `Hide`) carry a deadline in
/// simulation seconds; `update` resolves them once the deadline passes.
#[derive(Debug, Clone)]
pub struct Weapon {
    pub kind: WeaponKind,
    pub profile: WeaponProfile,
    pub status: WeaponStatus,
    /// Reserve ammo.
    pub ammo: u32,
    /// Rounds in the clip.
    pub rounds_left: u32,
    deadline: f64,
    /// Status to restore when an equip completes. Captured on hide, so a
    /// weapon swapped away while Empty comes back Empty.
    previous_status: WeaponStatus,
}

impl Weapon {
    pub fn new(kind: WeaponKind) -> Self {
        let profile = get_profile(kind);
        Self {
            kind,
            ammo: profile.initial_ammo,
            rounds_left: profile.rounds_per_clip,
            profile,
            status: WeaponStatus::Unready,
            deadline: 0.0,
            previous_status: WeaponStatus::Ready,
        }
    }

    /// Advance any timed status whose deadline has passed.
    pub fn update(&mut self, now: f64) -> Option<WeaponTransition> {
        if now < self.deadline {
            return None;
        }
        match self.status {
            WeaponStatus::Shot => {
                self.status = self.resolve_after_shot();
                None
            }
            WeaponStatus::Reload => {
                self.status = if self.rounds_left > 0 {
                    WeaponStatus::Ready
                } else {
                    WeaponStatus::OutOfAmmo
                };
                None
            }
            WeaponStatus::Equip => {
                self.status = self.previous_status;
                Some(WeaponTransition::Equipped)
            }
            WeaponStatus::Hide => {
                self.status = WeaponStatus::Unready;
                Some(WeaponTransition::Hidden)
            }
            _ => None,
        }
    }

    /// Fire one round. Only valid from `Ready`; returns whether a round
    /// actually left the clip.
    pub fn try_shoot(&mut self, now: f64) -> bool {
        if self.status != WeaponStatus::Ready || self.rounds_left == 0 {
            return false;
        }
        self.rounds_left -= 1;
        self.status = WeaponStatus::Shot;
        self.deadline = now + self.profile.shot_time;
        true
    }

    /// Begin a clip refill from reserve. Only valid from `Ready`/`Empty`;
    /// moves as much reserve as is available, up to a full clip.
    pub fn reload(&mut self, now: f64) -> bool {
        if !matches!(self.status, WeaponStatus::Ready | WeaponStatus::Empty) {
            return false;
        }
        let space = self.profile.rounds_per_clip - self.rounds_left;
        let moved = space.min(self.ammo);
        self.rounds_left += moved;
        self.ammo -= moved;
        self.status = WeaponStatus::Reload;
        self.deadline = now + self.profile.reload_time;
        true
    }

    /// Begin raising this weapon after a change.
    pub fn equip(&mut self, now: f64) {
        self.status = WeaponStatus::Equip;
        self.deadline = now + self.profile.equip_time;
    }

    /// Begin lowering this weapon ahead of a change, remembering the
    /// status to restore when it is next equipped.
    pub fn hide(&mut self, now: f64) {
        self.previous_status = self.status;
        self.status = WeaponStatus::Hide;
        self.deadline = now + self.profile.hide_time;
    }

    /// Place the weapon directly in hand, skipping the equip transition.
    /// Used only by the system reset for the starting weapon.
    pub fn set_ready(&mut self) {
        self.status = WeaponStatus::Ready;
        self.previous_status = WeaponStatus::Ready;
    }

    /// Add reserve ammo, clamped to the profile maximum.
    pub fn add_rounds(&mut self, rounds: u32) {
        self.ammo = (self.ammo + rounds).min(self.profile.max_ammo);
    }

    /// Reserve ammo as a fraction of maximum.
    pub fn ammo_ratio(&self) -> f64 {
        if self.profile.max_ammo == 0 {
            return 0.0;
        }
        self.ammo as f64 / self.profile.max_ammo as f64
    }

    fn resolve_after_shot(&self) -> WeaponStatus {
        if self.rounds_left > 0 {
            WeaponStatus::Ready
        } else if self.ammo > 0 {
            WeaponStatus::Empty
        } else {
            WeaponStatus::OutOfAmmo
        }
    }
}
