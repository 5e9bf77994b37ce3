//! Bandit raids — every 60 seconds bandits may strike, independent of
//! how many caravans exist.
//!
//! Per pending cycle: attack chance is rolled in [0.05, 0.10). On an
//! attack a caravan is lost with chance 0.5 when a guard camp stands
//! (1.0 otherwise), and a fraction of the gold in [0.10, 0.20) is
//! stolen independently. Cycles accumulated while the session was idle
//! are each processed with their own rolls.

use crate::{
    error::SimResult,
    event::SimEvent,
    ledger::Ledger,
    resolver::{ResolveOutcome, Resolver},
    rng::ResolverRng,
    timers::{pending_cycles, TimerSet, BANDIT_CYCLE_SECS},
    types::Seconds,
};

pub const ATTACK_CHANCE_MIN: f64 = 0.05;
pub const ATTACK_CHANCE_MAX: f64 = 0.10;
pub const STEAL_FRACTION_MIN: f64 = 0.10;
pub const STEAL_FRACTION_MAX: f64 = 0.20;
/// Caravan loss chance when at least one guard camp stands.
pub const GUARDED_LOSS_CHANCE: f64 = 0.5;

pub struct BanditRaids;

impl Resolver for BanditRaids {
    fn name(&self) -> &'static str {
        "bandit"
    }

    fn resolve(
        &mut self,
        ledger: &mut Ledger,
        timers: &mut TimerSet,
        elapsed: Seconds,
        rng: &mut ResolverRng,
    ) -> SimResult<ResolveOutcome> {
        timers.bandit += elapsed.max(0.0);

        let cycles = pending_cycles(timers.bandit, BANDIT_CYCLE_SECS);
        if cycles == 0 {
            return Ok(ResolveOutcome::unchanged());
        }

        // Timer settles up front, whether or not any raid lands.
        timers.bandit -= cycles as f64 * BANDIT_CYCLE_SECS;

        let mut outcome = ResolveOutcome::unchanged();
        for _ in 0..cycles {
            let attack_chance = rng.range_f64(ATTACK_CHANCE_MIN, ATTACK_CHANCE_MAX);
            if !rng.chance(attack_chance) {
                continue;
            }

            let loss_chance = if ledger.guard_camps > 0 {
                GUARDED_LOSS_CHANCE
            } else {
                1.0
            };
            let caravan_lost = ledger.caravans > 0 && rng.chance(loss_chance);
            if caravan_lost {
                ledger.caravans -= 1;
            }

            let fraction = rng.range_f64(STEAL_FRACTION_MIN, STEAL_FRACTION_MAX);
            let gold_stolen = ((ledger.gold as f64 * fraction).floor() as u64).min(ledger.gold);
            ledger.gold -= gold_stolen;

            log::debug!("bandit: raid — caravan_lost={caravan_lost} gold_stolen={gold_stolen}");

            if caravan_lost || gold_stolen > 0 {
                outcome.changed = true;
            }
            outcome.events.push(SimEvent::BanditRaid { caravan_lost, gold_stolen });
        }

        Ok(outcome)
    }
}
