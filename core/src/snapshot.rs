//! Snapshot serialization — the persisted save format.
//!
//! The snapshot is a flat JSON object under one fixed key. Field names
//! are the external camelCase format; the live Ledger and TimerSet are
//! the authoritative copies, the snapshot is owned by persistence.
//!
//! Hydration is per-field: each stored value is accepted only if it is
//! a finite number, otherwise the current in-memory value stands. A
//! corrupt field never aborts hydration as a whole.

use crate::{ledger::Ledger, timers::TimerSet, types::Count};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersistedSnapshot {
    pub camel_count: Count,
    pub gold_amount: Count,
    pub caravan_count: Count,
    pub farm_count: Count,
    pub grass_amount: f64,
    pub grassland_count: Count,
    pub guard_camp_count: Count,
    pub nomad_tokens: Count,
    pub caravan_gold_timer: f64,
    pub farm_production_timer: f64,
    pub grass_consumption_timer: f64,
    pub bandit_timer: f64,
}

impl PersistedSnapshot {
    pub fn capture(ledger: &Ledger, timers: &TimerSet) -> Self {
        Self {
            camel_count: ledger.camels,
            gold_amount: ledger.gold,
            caravan_count: ledger.caravans,
            farm_count: ledger.farms,
            grass_amount: ledger.grass,
            grassland_count: ledger.grasslands,
            guard_camp_count: ledger.guard_camps,
            nomad_tokens: ledger.nomad_tokens,
            caravan_gold_timer: timers.caravan_gold,
            farm_production_timer: timers.farm_production,
            grass_consumption_timer: timers.grass_consumption,
            bandit_timer: timers.bandit,
        }
    }

    pub fn apply(&self, ledger: &mut Ledger, timers: &mut TimerSet) {
        ledger.camels = self.camel_count;
        ledger.gold = self.gold_amount;
        ledger.caravans = self.caravan_count;
        ledger.farms = self.farm_count;
        ledger.grass = self.grass_amount;
        ledger.grasslands = self.grassland_count;
        ledger.guard_camps = self.guard_camp_count;
        ledger.nomad_tokens = self.nomad_tokens;
        timers.caravan_gold = self.caravan_gold_timer;
        timers.farm_production = self.farm_production_timer;
        timers.grass_consumption = self.grass_consumption_timer;
        timers.bandit = self.bandit_timer;
    }
}

/// Hydrate the live state from a parsed save object, field by field.
/// Stored counts clamp at zero; timers and grass accept any finite
/// non-negative number.
pub fn hydrate(value: &Value, ledger: &mut Ledger, timers: &mut TimerSet) {
    ledger.camels = count_field(value, "camelCount", ledger.camels);
    ledger.gold = count_field(value, "goldAmount", ledger.gold);
    ledger.caravans = count_field(value, "caravanCount", ledger.caravans);
    ledger.farms = count_field(value, "farmCount", ledger.farms);
    ledger.grass = f64_field(value, "grassAmount", ledger.grass);
    ledger.grasslands = count_field(value, "grasslandCount", ledger.grasslands);
    ledger.guard_camps = count_field(value, "guardCampCount", ledger.guard_camps);
    ledger.nomad_tokens = count_field(value, "nomadTokens", ledger.nomad_tokens);
    timers.caravan_gold = f64_field(value, "caravanGoldTimer", timers.caravan_gold);
    timers.farm_production = f64_field(value, "farmProductionTimer", timers.farm_production);
    timers.grass_consumption =
        f64_field(value, "grassConsumptionTimer", timers.grass_consumption);
    timers.bandit = f64_field(value, "banditTimer", timers.bandit);
}

fn finite(value: &Value, field: &str) -> Option<f64> {
    let number = value.get(field)?.as_f64()?;
    if number.is_finite() {
        Some(number)
    } else {
        log::warn!("save field '{field}' is not finite, keeping current value");
        None
    }
}

fn count_field(value: &Value, field: &str, current: Count) -> Count {
    match finite(value, field) {
        Some(n) => n.max(0.0).floor() as Count,
        None => current,
    }
}

fn f64_field(value: &Value, field: &str, current: f64) -> f64 {
    match finite(value, field) {
        Some(n) => n.max(0.0),
        None => current,
    }
}
