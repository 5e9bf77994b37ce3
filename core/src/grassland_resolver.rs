//! Grassland growth — each grassland yields one grass per second.
//!
//! The only resolver with no timer and no randomness: growth is a
//! straight function of elapsed time, floored to whole grass.

use crate::{
    error::SimResult,
    event::SimEvent,
    ledger::Ledger,
    resolver::{ResolveOutcome, Resolver},
    rng::ResolverRng,
    timers::TimerSet,
    types::Seconds,
};

pub struct GrasslandGrowth;

impl Resolver for GrasslandGrowth {
    fn name(&self) -> &'static str {
        "grassland"
    }

    fn resolve(
        &mut self,
        ledger: &mut Ledger,
        _timers: &mut TimerSet,
        elapsed: Seconds,
        _rng: &mut ResolverRng,
    ) -> SimResult<ResolveOutcome> {
        if ledger.grasslands == 0 || elapsed <= 0.0 {
            return Ok(ResolveOutcome::unchanged());
        }

        let gained = (ledger.grasslands as f64 * elapsed).floor() as u64;
        if gained == 0 {
            return Ok(ResolveOutcome::unchanged());
        }

        ledger.gain_grass(gained as f64);
        log::debug!("grassland: +{gained} grass (total {:.1})", ledger.grass);

        Ok(ResolveOutcome::changed_with(SimEvent::GrassGrown { gained }))
    }
}
