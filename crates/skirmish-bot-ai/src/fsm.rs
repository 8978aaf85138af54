//! Combat behavior state machine.
//!
//! Explicit state enum plus a transition table. The `is_dodging` context
//! flag is mutated only here, by dispatched events; everything else reads
//! it.

use skirmish_core::enums::{AttackState, BotEvent, BotState};

#[derive(Debug, Clone)]
pub struct CombatFsm {
    state: BotState,
    /// Context flag: lateral evasion currently engaged. Written only by
    /// the transition handler.
    pub is_dodging: bool,
}

impl Default for CombatFsm {
    fn default() -> Self {
        Self::new()
    }
}

impl CombatFsm {
    pub fn new() -> Self {
        Self {
            state: BotState::Exploring,
            is_dodging: false,
        }
    }

    pub fn state(&self) -> BotState {
        self.state
    }

    pub fn is_dead(&self) -> bool {
        self.state == BotState::Dead
    }

    /// Any combat sub-state (pursuing or retreating).
    pub fn is_attacking(&self) -> bool {
        matches!(self.state, BotState::Attacking(_))
    }

    /// Run one event through the transition table. Events that do not
    /// apply in the current state are absorbed without effect; `Dead` is
    /// terminal.
    pub fn dispatch(&mut self, event: BotEvent) {
        use BotEvent::*;
        use BotState::*;

        if self.state == Dead {
            return;
        }

        match (self.state, event) {
            (_, Kill) => {
                self.state = Dead;
                self.is_dodging = false;
            }
            (Exploring | Moving, EnemySpotted) => {
                self.state = Attacking(AttackState::Pursuing);
            }
            (_, EnemyLost) => {
                self.state = Exploring;
                self.is_dodging = false;
            }
            (Exploring | Attacking(_), Hunt) => {
                self.state = Moving;
            }
            (Moving, PointReached) => {
                self.state = Exploring;
            }
            (Attacking(AttackState::Pursuing), Run) => {
                self.state = Attacking(AttackState::Retreating);
            }
            (Attacking(_), DodgeOn) => {
                self.is_dodging = true;
            }
            (_, DodgeOff) => {
                self.is_dodging = false;
            }
            _ => {}
        }
    }
}
