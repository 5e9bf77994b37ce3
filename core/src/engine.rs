//! The tick scheduler — the heart of the caravan economy.
//!
//! EXECUTION ORDER (fixed, documented, never reordered):
//!   1. Grassland growth
//!   2. Farm production
//!   3. Herd upkeep (grass consumption)
//!   4. Caravan gold payout
//!   5. Bandit raids
//!
//! RULES:
//!   - Resolvers execute in registration order, every tick. A resolver
//!     later in the sequence observes mutations made by earlier ones in
//!     the same tick.
//!   - No resolver is skipped based on another's result.
//!   - All randomness flows through the RngBank.
//!   - Changed-flags aggregate; a changed tick schedules a debounced
//!     save and routes status text through the notifier.

use crate::{
    bandit_resolver::BanditRaids,
    caravan_resolver::CaravanGold,
    clock::SimClock,
    error::SimResult,
    event::{SimEvent, Structure},
    farm_resolver::FarmProduction,
    grassland_resolver::GrasslandGrowth,
    ledger::{
        Ledger, CARAVAN_CAMEL_COST, FARM_GOLD_COST, GRASSLAND_GOLD_COST, GUARD_CAMP_GOLD_COST,
    },
    notify::{LogSink, Notifier, StatusSink},
    persistence::PersistenceManager,
    prestige::PrestigeController,
    resolver::Resolver,
    rng::{ResolverSlot, RngBank},
    store::SaveStore,
    timers::TimerSet,
    types::{Count, Seconds},
    upkeep_resolver::HerdUpkeep,
};

pub struct SimEngine {
    pub clock: SimClock,
    pub ledger: Ledger,
    pub timers: TimerSet,
    rng_bank: RngBank,
    resolvers: Vec<(ResolverSlot, Box<dyn Resolver>)>,
    prestige: PrestigeController,
    notifier: Notifier,
    persistence: PersistenceManager,
}

impl SimEngine {
    pub fn new(seed: u64, store: SaveStore) -> Self {
        Self {
            clock: SimClock::new(),
            ledger: Ledger::new(),
            timers: TimerSet::new(),
            rng_bank: RngBank::new(seed),
            resolvers: Vec::new(),
            prestige: PrestigeController::new(),
            notifier: Notifier::new(Box::new(LogSink)),
            persistence: PersistenceManager::new(store),
        }
    }

    /// Build a fully wired engine: all resolvers registered in the
    /// documented execution order, state hydrated from the store.
    /// Call this instead of new() + manual register() calls.
    pub fn build(seed: u64, store: SaveStore) -> Self {
        let mut engine = SimEngine::new(seed, store);

        // EXECUTION ORDER — fixed, documented, never reordered.
        engine.register(ResolverSlot::Grassland, Box::new(GrasslandGrowth));
        engine.register(ResolverSlot::Farm, Box::new(FarmProduction));
        engine.register(ResolverSlot::Upkeep, Box::new(HerdUpkeep));
        engine.register(ResolverSlot::Caravan, Box::new(CaravanGold));
        engine.register(ResolverSlot::Bandit, Box::new(BanditRaids));

        engine
            .persistence
            .load(&mut engine.ledger, &mut engine.timers);
        engine.prestige.reevaluate(&engine.ledger);
        engine
    }

    /// Register a resolver. Call in the documented execution order.
    pub fn register(&mut self, slot: ResolverSlot, resolver: Box<dyn Resolver>) {
        self.resolvers.push((slot, resolver));
    }

    /// Replace the status sink (UI collaborator or test recorder).
    pub fn set_status_sink(&mut self, sink: Box<dyn StatusSink>) {
        self.notifier = Notifier::new(sink);
    }

    pub fn prestige_unlocked(&self) -> bool {
        self.prestige.is_unlocked()
    }

    pub fn save_pending(&self) -> bool {
        self.persistence.save_pending()
    }

    /// Advance the simulation by `elapsed` seconds. This is the core
    /// scheduler step: the full resolver sequence always runs.
    ///
    /// Returns the tick's events — the display-refresh signal for the
    /// UI collaborator.
    pub fn tick(&mut self, elapsed: Seconds) -> SimResult<Vec<SimEvent>> {
        let now = self.clock.advance(elapsed);

        // Flush a save whose debounce deadline passed between ticks.
        self.persistence.poll(now, &self.ledger, &self.timers);

        let mut tick_events: Vec<SimEvent> = Vec::new();
        let mut any_changed = false;

        for (slot, resolver) in &mut self.resolvers {
            let rng = self.rng_bank.for_resolver(*slot);
            debug_assert_eq!(
                rng.name,
                resolver.name(),
                "resolver registered under the wrong slot"
            );
            let outcome = resolver.resolve(&mut self.ledger, &mut self.timers, elapsed, rng)?;
            if outcome.changed {
                log::trace!(
                    "tick {}: {} changed state",
                    self.clock.tick_count,
                    resolver.name()
                );
            }
            any_changed |= outcome.changed;
            tick_events.extend(outcome.events);
        }

        // Unlock condition is re-evaluated every tick.
        if let Some(event) = self.prestige.reevaluate(&self.ledger) {
            tick_events.push(event);
        }

        for event in &tick_events {
            if let Some(message) = status_text(event) {
                self.notifier.notify(now, &message);
            }
        }

        if any_changed {
            self.persistence.schedule(now);
        }

        Ok(tick_events)
    }

    /// Run n one-second ticks. Used for testing and fast-forward.
    pub fn run_ticks(&mut self, n: u64) -> SimResult<Vec<SimEvent>> {
        let mut events = Vec::new();
        for _ in 0..n {
            events.extend(self.tick(1.0)?);
        }
        Ok(events)
    }

    /// Write the current state to the store immediately. Used at
    /// session teardown.
    pub fn flush_save(&mut self) {
        self.persistence.flush(&self.ledger, &self.timers);
    }

    // ── Collaborator-facing operations ─────────────────────────────
    //
    // Invoked out-of-band by user actions, interleaved with ticks on
    // the same single-threaded queue. Each routes status text and a
    // debounced save.

    pub fn purchase_farm(&mut self) -> bool {
        self.purchase(Structure::Farm)
    }

    pub fn purchase_grassland(&mut self) -> bool {
        self.purchase(Structure::Grassland)
    }

    pub fn purchase_guard_camp(&mut self) -> bool {
        self.purchase(Structure::GuardCamp)
    }

    /// Spend exactly 100 camels to form one caravan, atomically.
    pub fn form_caravan(&mut self) -> bool {
        self.purchase(Structure::Caravan)
    }

    fn purchase(&mut self, structure: Structure) -> bool {
        let (cost, available, paid) = match structure {
            Structure::Farm => {
                let ok = self.ledger.spend_gold(FARM_GOLD_COST);
                (FARM_GOLD_COST, self.ledger.gold, ok)
            }
            Structure::Grassland => {
                let ok = self.ledger.spend_gold(GRASSLAND_GOLD_COST);
                (GRASSLAND_GOLD_COST, self.ledger.gold, ok)
            }
            Structure::GuardCamp => {
                let ok = self.ledger.spend_gold(GUARD_CAMP_GOLD_COST);
                (GUARD_CAMP_GOLD_COST, self.ledger.gold, ok)
            }
            Structure::Caravan => {
                let ok = self.ledger.spend_camels(CARAVAN_CAMEL_COST);
                (CARAVAN_CAMEL_COST, self.ledger.camels, ok)
            }
        };

        let event = if paid {
            match structure {
                Structure::Farm => self.ledger.farms += 1,
                Structure::Grassland => self.ledger.grasslands += 1,
                Structure::GuardCamp => self.ledger.guard_camps += 1,
                Structure::Caravan => self.ledger.caravans += 1,
            }
            SimEvent::StructurePurchased { structure, cost }
        } else {
            SimEvent::PurchaseRejected { structure, needed: cost, available }
        };

        self.emit(&event);
        if paid {
            self.persistence.schedule(self.clock.now);
        }
        paid
    }

    /// Perform the prestige migration. Returns the tokens earned, or
    /// None while the option is still locked (silent rejection).
    pub fn request_prestige(&mut self) -> Option<Count> {
        let earned = self.prestige.request(&mut self.ledger, &mut self.timers)?;
        self.emit(&SimEvent::PrestigeCompleted { tokens_earned: earned });
        self.persistence.schedule(self.clock.now);
        Some(earned)
    }

    /// User-initiated spawn: one camel joins the herd and one visual
    /// unit should drop. Returns the new herd size — the signal the
    /// physics collaborator consumes.
    pub fn spawn_visual_camel(&mut self) -> Count {
        self.ledger.gain_camels(1);
        self.emit(&SimEvent::VisualCamelSpawned { total_camels: self.ledger.camels });
        self.persistence.schedule(self.clock.now);
        self.ledger.camels
    }

    fn emit(&mut self, event: &SimEvent) {
        if let Some(message) = status_text(event) {
            self.notifier.notify(self.clock.now, &message);
        }
    }
}

/// Render one event as a short status line, or None for events that
/// carry no player-facing text.
pub fn status_text(event: &SimEvent) -> Option<String> {
    let text = match event {
        SimEvent::GrassGrown { gained } => {
            format!("The grasslands yield {gained} grass.")
        }
        SimEvent::CamelsBred { produced, .. } => {
            format!("The farms raised {produced} new camel(s).")
        }
        SimEvent::HerdGrazed { used, shortage, .. } => {
            if *shortage {
                format!("The herd ate {:.0} grass — the supply ran dry.", used.floor())
            } else {
                format!("The herd grazed {:.0} grass.", used.floor())
            }
        }
        SimEvent::CaravanPayout { gold, .. } => {
            format!("Caravans returned with {gold} gold.")
        }
        SimEvent::BanditRaid { caravan_lost, gold_stolen } => {
            if *caravan_lost {
                format!("Bandits struck! A caravan was lost and {gold_stolen} gold stolen.")
            } else {
                format!("Bandits struck! {gold_stolen} gold stolen.")
            }
        }
        SimEvent::PrestigeUnlocked => "The tribe is ready to migrate.".to_string(),
        SimEvent::PrestigeCompleted { tokens_earned } => {
            format!("The tribe migrates on, earning {tokens_earned} nomad token(s).")
        }
        SimEvent::StructurePurchased { structure, .. } => match structure {
            Structure::Caravan => "A caravan forms and sets out.".to_string(),
            other => format!("A new {} is built.", other.label()),
        },
        SimEvent::PurchaseRejected { structure, .. } => {
            format!("Not enough resources for a {}.", structure.label())
        }
        SimEvent::VisualCamelSpawned { .. } => return None,
    };
    Some(text)
}
