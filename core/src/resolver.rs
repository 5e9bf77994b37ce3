//! Resolver trait.
//!
//! RULE: Every periodic process implements Resolver. The engine calls
//! resolve() on each registered resolver in registration order, every
//! tick — the full sequence always runs, never short-circuited on an
//! earlier resolver's result. Execution order is fixed and documented
//! in engine.rs.

use crate::{
    error::SimResult,
    event::SimEvent,
    ledger::Ledger,
    rng::ResolverRng,
    timers::TimerSet,
    types::Seconds,
};

/// What one resolver did this tick.
#[derive(Debug, Default)]
pub struct ResolveOutcome {
    /// True iff the resolver mutated the ledger or consumed timer cycles.
    pub changed: bool,
    pub events: Vec<SimEvent>,
}

impl ResolveOutcome {
    pub fn unchanged() -> Self {
        Self::default()
    }

    pub fn changed_with(event: SimEvent) -> Self {
        Self { changed: true, events: vec![event] }
    }
}

/// The contract every resolver must fulfill.
pub trait Resolver: Send {
    /// Unique stable name for this resolver.
    fn name(&self) -> &'static str;

    /// Called once per tick by the engine.
    ///
    /// - `ledger`:  the shared resource ledger
    /// - `timers`:  the shared timer set
    /// - `elapsed`: simulated seconds since the previous tick
    /// - `rng`:     this resolver's deterministic RNG stream
    fn resolve(
        &mut self,
        ledger: &mut Ledger,
        timers: &mut TimerSet,
        elapsed: Seconds,
        rng: &mut ResolverRng,
    ) -> SimResult<ResolveOutcome>;
}
