//! Farm production — every 2 seconds each farm breeds one camel,
//! consuming one grass per camel. Farms are grass-limited: production
//! never exceeds the grass on hand.
//!
//! Idle behavior: with no farms (or nothing to produce) the timer is
//! capped at one cycle length so it cannot grow without bound.

use crate::{
    error::SimResult,
    event::SimEvent,
    ledger::Ledger,
    resolver::{ResolveOutcome, Resolver},
    rng::ResolverRng,
    timers::{pending_cycles, TimerSet, FARM_CYCLE_SECS},
    types::Seconds,
};

pub struct FarmProduction;

impl Resolver for FarmProduction {
    fn name(&self) -> &'static str {
        "farm"
    }

    fn resolve(
        &mut self,
        ledger: &mut Ledger,
        timers: &mut TimerSet,
        elapsed: Seconds,
        _rng: &mut ResolverRng,
    ) -> SimResult<ResolveOutcome> {
        timers.farm_production += elapsed.max(0.0);

        let cycles = pending_cycles(timers.farm_production, FARM_CYCLE_SECS);
        if ledger.farms == 0 || cycles == 0 {
            timers.farm_production = timers.farm_production.min(FARM_CYCLE_SECS);
            return Ok(ResolveOutcome::unchanged());
        }

        let potential = cycles * ledger.farms;
        let produced = potential.min(ledger.grass_display());
        if produced == 0 {
            timers.farm_production = timers.farm_production.min(FARM_CYCLE_SECS);
            return Ok(ResolveOutcome::unchanged());
        }

        ledger.consume_grass(produced as f64);
        timers.farm_production -= cycles as f64 * FARM_CYCLE_SECS;
        ledger.gain_camels(produced);

        log::debug!(
            "farm: {cycles} cycle(s), +{produced} camels, grass left {:.1}",
            ledger.grass
        );

        Ok(ResolveOutcome::changed_with(SimEvent::CamelsBred {
            produced,
            grass_consumed: produced,
        }))
    }
}
