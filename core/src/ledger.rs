//! The resource ledger — the live, authoritative record of every
//! economy quantity for the running session.
//!
//! RULE: all counts stay non-negative. Every spend is check-then-commit:
//! an operation that would drive a balance negative is rejected before
//! any mutation.

use crate::types::Count;
use serde::{Deserialize, Serialize};

/// Camels spent to form one caravan.
pub const CARAVAN_CAMEL_COST: Count = 100;
/// Gold cost of one farm.
pub const FARM_GOLD_COST: Count = 25;
/// Gold cost of one grassland.
pub const GRASSLAND_GOLD_COST: Count = 50;
/// Gold cost of one guard camp.
pub const GUARD_CAMP_GOLD_COST: Count = 100;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Ledger {
    pub camels: Count,
    pub gold: Count,
    /// Feedstock for farms and herd upkeep. Accumulates fractionally;
    /// display and production floor it.
    pub grass: f64,
    pub farms: Count,
    pub grasslands: Count,
    pub guard_camps: Count,
    pub caravans: Count,
    /// Prestige currency. Survives resets, never decreases.
    pub nomad_tokens: Count,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Grass as shown to the player.
    pub fn grass_display(&self) -> Count {
        self.grass.floor() as Count
    }

    /// Spend gold. Rejects a zero amount or an amount above the current
    /// balance without mutating anything.
    #[must_use]
    pub fn spend_gold(&mut self, cost: Count) -> bool {
        if cost == 0 || cost > self.gold {
            return false;
        }
        self.gold -= cost;
        true
    }

    /// Spend camels. Same contract as [`Ledger::spend_gold`].
    #[must_use]
    pub fn spend_camels(&mut self, amount: Count) -> bool {
        if amount == 0 || amount > self.camels {
            return false;
        }
        self.camels -= amount;
        true
    }

    /// Add gold. A zero amount is a silent no-op.
    pub fn gain_gold(&mut self, amount: Count) {
        self.gold += amount;
    }

    /// Add camels. A zero amount is a silent no-op.
    pub fn gain_camels(&mut self, amount: Count) {
        self.camels += amount;
    }

    /// Add grass. Negative or non-finite amounts are rejected.
    pub fn gain_grass(&mut self, amount: f64) {
        if amount.is_finite() && amount > 0.0 {
            self.grass += amount;
        }
    }

    /// Take up to `wanted` grass. Returns how much was actually taken,
    /// which is less than `wanted` when the supply runs dry.
    pub fn consume_grass(&mut self, wanted: f64) -> f64 {
        if !wanted.is_finite() || wanted <= 0.0 {
            return 0.0;
        }
        let used = wanted.min(self.grass);
        self.grass -= used;
        used
    }
}
