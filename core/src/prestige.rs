//! Prestige — the tribe migrates on, trading all progress for nomad
//! tokens that permanently boost caravan payouts.
//!
//! Two states, re-evaluated every tick: Locked until the herd or the
//! caravan fleet is large enough, Unlocked until the reset fires. The
//! reset zeroes every ledger field and all four timers; only
//! `nomad_tokens` survives.

use crate::{
    event::SimEvent,
    ledger::Ledger,
    timers::TimerSet,
    types::Count,
};
use serde::{Deserialize, Serialize};

pub const PRESTIGE_CAMEL_THRESHOLD: Count = 1000;
pub const PRESTIGE_CARAVAN_THRESHOLD: Count = 100;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PrestigeStatus {
    Locked,
    Unlocked,
}

#[derive(Debug)]
pub struct PrestigeController {
    status: PrestigeStatus,
}

impl PrestigeController {
    pub fn new() -> Self {
        Self { status: PrestigeStatus::Locked }
    }

    pub fn status(&self) -> PrestigeStatus {
        self.status
    }

    pub fn is_unlocked(&self) -> bool {
        self.status == PrestigeStatus::Unlocked
    }

    /// Re-check the unlock condition against the current ledger.
    /// Returns an event on the Locked → Unlocked transition.
    pub fn reevaluate(&mut self, ledger: &Ledger) -> Option<SimEvent> {
        let eligible = ledger.camels >= PRESTIGE_CAMEL_THRESHOLD
            || ledger.caravans >= PRESTIGE_CARAVAN_THRESHOLD;

        match (self.status, eligible) {
            (PrestigeStatus::Locked, true) => {
                self.status = PrestigeStatus::Unlocked;
                Some(SimEvent::PrestigeUnlocked)
            }
            (PrestigeStatus::Unlocked, false) => {
                self.status = PrestigeStatus::Locked;
                None
            }
            _ => None,
        }
    }

    /// Perform the migration. While Locked this is a silent no-op.
    /// Otherwise: bank the earned tokens, zero everything else
    /// atomically, and relock.
    pub fn request(&mut self, ledger: &mut Ledger, timers: &mut TimerSet) -> Option<Count> {
        if !self.is_unlocked() {
            return None;
        }

        let earned = (ledger.camels / PRESTIGE_CAMEL_THRESHOLD
            + ledger.caravans / PRESTIGE_CARAVAN_THRESHOLD)
            .max(1);

        let tokens = ledger.nomad_tokens + earned;
        *ledger = Ledger { nomad_tokens: tokens, ..Ledger::default() };
        timers.reset();
        self.status = PrestigeStatus::Locked;

        log::info!("prestige: migrated, earned {earned} nomad token(s)");
        Some(earned)
    }
}

impl Default for PrestigeController {
    fn default() -> Self {
        Self::new()
    }
}
