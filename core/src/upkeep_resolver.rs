//! Herd upkeep — every 10 seconds each camel eats one grass.
//!
//! With no herd the timer keeps accruing but nothing is consumed; the
//! pending cycles are settled as soon as camels exist again. When the
//! supply runs short the herd eats whatever is left (possibly a
//! fractional remainder) and the shortage is reported distinctly.

use crate::{
    error::SimResult,
    event::SimEvent,
    ledger::Ledger,
    resolver::{ResolveOutcome, Resolver},
    rng::ResolverRng,
    timers::{pending_cycles, TimerSet, UPKEEP_CYCLE_SECS},
    types::Seconds,
};

pub struct HerdUpkeep;

impl Resolver for HerdUpkeep {
    fn name(&self) -> &'static str {
        "upkeep"
    }

    fn resolve(
        &mut self,
        ledger: &mut Ledger,
        timers: &mut TimerSet,
        elapsed: Seconds,
        _rng: &mut ResolverRng,
    ) -> SimResult<ResolveOutcome> {
        timers.grass_consumption += elapsed.max(0.0);

        if ledger.camels == 0 {
            return Ok(ResolveOutcome::unchanged());
        }

        let cycles = pending_cycles(timers.grass_consumption, UPKEEP_CYCLE_SECS);
        if cycles == 0 {
            return Ok(ResolveOutcome::unchanged());
        }

        let needed = (ledger.camels * cycles) as f64;
        let used = ledger.consume_grass(needed);
        timers.grass_consumption -= cycles as f64 * UPKEEP_CYCLE_SECS;

        let shortage = used < needed;
        if shortage {
            log::debug!("upkeep: grass ran dry ({used:.1} of {needed:.1})");
        } else {
            log::debug!("upkeep: herd grazed {used:.1} grass");
        }

        if used > 0.0 {
            Ok(ResolveOutcome::changed_with(SimEvent::HerdGrazed {
                used,
                needed,
                shortage,
            }))
        } else {
            // Nothing left to eat: cycles are still settled, but the
            // ledger did not move.
            Ok(ResolveOutcome {
                changed: false,
                events: vec![SimEvent::HerdGrazed { used, needed, shortage }],
            })
        }
    }
}
