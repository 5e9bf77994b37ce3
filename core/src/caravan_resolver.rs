//! Caravan payouts — every 60 seconds each caravan returns with gold.
//!
//! Each caravan-cycle is an independent roll in [14, 21] gold, scaled
//! by the nomad-token bonus (+1% per token) and floored. With no
//! caravans the timer accrues but is never consumed: progress resets
//! only when cycles are actually processed.

use crate::{
    error::SimResult,
    event::SimEvent,
    ledger::Ledger,
    resolver::{ResolveOutcome, Resolver},
    rng::ResolverRng,
    timers::{pending_cycles, TimerSet, CARAVAN_CYCLE_SECS},
    types::Seconds,
};

pub const CARAVAN_GOLD_MIN: u64 = 14;
pub const CARAVAN_GOLD_MAX: u64 = 21;
/// Payout bonus per nomad token.
pub const TOKEN_BONUS: f64 = 0.01;

pub struct CaravanGold;

impl Resolver for CaravanGold {
    fn name(&self) -> &'static str {
        "caravan"
    }

    fn resolve(
        &mut self,
        ledger: &mut Ledger,
        timers: &mut TimerSet,
        elapsed: Seconds,
        rng: &mut ResolverRng,
    ) -> SimResult<ResolveOutcome> {
        timers.caravan_gold += elapsed.max(0.0);

        if ledger.caravans == 0 {
            return Ok(ResolveOutcome::unchanged());
        }

        let cycles = pending_cycles(timers.caravan_gold, CARAVAN_CYCLE_SECS);
        if cycles == 0 {
            return Ok(ResolveOutcome::unchanged());
        }

        // Cycle accounting happens before the zero-total check.
        timers.caravan_gold -= cycles as f64 * CARAVAN_CYCLE_SECS;

        let bonus = 1.0 + ledger.nomad_tokens as f64 * TOKEN_BONUS;
        let mut total = 0u64;
        for _ in 0..ledger.caravans * cycles {
            let roll = rng.roll_inclusive(CARAVAN_GOLD_MIN, CARAVAN_GOLD_MAX);
            total += (roll as f64 * bonus).floor() as u64;
        }

        if total == 0 {
            return Ok(ResolveOutcome::unchanged());
        }

        ledger.gain_gold(total);
        log::debug!("caravan: {cycles} cycle(s), +{total} gold");

        Ok(ResolveOutcome::changed_with(SimEvent::CaravanPayout {
            cycles,
            gold: total,
        }))
    }
}
