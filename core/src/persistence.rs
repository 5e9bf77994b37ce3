//! Persistence manager — debounced saves and validated hydration.
//!
//! Any mutation schedules a write 500 ms ahead; a newer mutation inside
//! that window cancels and reschedules rather than stacking writes. The
//! deadline is polled at tick boundaries against the simulation clock.
//!
//! Failure policy: persistence is never fatal. A write or read error is
//! logged and swallowed; the in-memory ledger stays authoritative and
//! the next scheduled save proceeds normally. The worst case is loss of
//! the most recent ≤500 ms of unsaved state.

use crate::{
    ledger::Ledger,
    snapshot::{self, PersistedSnapshot},
    store::SaveStore,
    timers::TimerSet,
    types::Seconds,
};

/// The one fixed save key.
pub const SAVE_KEY: &str = "caravan_idle_save";
/// Delay between a mutation and its save.
pub const DEBOUNCE_SECS: Seconds = 0.5;

pub struct PersistenceManager {
    store: SaveStore,
    deadline: Option<Seconds>,
}

impl PersistenceManager {
    pub fn new(store: SaveStore) -> Self {
        Self { store, deadline: None }
    }

    /// A mutation happened at `now`: (re)schedule the save.
    pub fn schedule(&mut self, now: Seconds) {
        self.deadline = Some(now + DEBOUNCE_SECS);
    }

    pub fn save_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Write the snapshot if the debounce deadline has passed.
    pub fn poll(&mut self, now: Seconds, ledger: &Ledger, timers: &TimerSet) {
        match self.deadline {
            Some(deadline) if deadline <= now => {
                self.deadline = None;
                self.write(ledger, timers);
            }
            _ => {}
        }
    }

    /// Write the snapshot immediately, canceling any pending deadline.
    /// Used at session teardown.
    pub fn flush(&mut self, ledger: &Ledger, timers: &TimerSet) {
        self.deadline = None;
        self.write(ledger, timers);
    }

    fn write(&mut self, ledger: &Ledger, timers: &TimerSet) {
        let snapshot = PersistedSnapshot::capture(ledger, timers);
        let result = serde_json::to_string(&snapshot)
            .map_err(crate::error::SimError::from)
            .and_then(|json| self.store.write_save(SAVE_KEY, &json));
        match result {
            Ok(()) => log::debug!("save written"),
            Err(e) => log::warn!("save failed, state remains in memory: {e}"),
        }
    }

    /// Hydrate the live state from the store at startup.
    ///
    /// Absent key: the defaults stand. Unparseable payload or storage
    /// error: logged, defaults stand. Otherwise each stored field is
    /// validated independently (finite-number check) and applied, with
    /// per-field fallback to the current value.
    pub fn load(&self, ledger: &mut Ledger, timers: &mut TimerSet) {
        let payload = match self.store.read_save(SAVE_KEY) {
            Ok(Some(payload)) => payload,
            Ok(None) => return,
            Err(e) => {
                log::warn!("save read failed, starting from defaults: {e}");
                return;
            }
        };

        match serde_json::from_str::<serde_json::Value>(&payload) {
            Ok(value) => snapshot::hydrate(&value, ledger, timers),
            Err(e) => log::warn!("save payload corrupt, starting from defaults: {e}"),
        }
    }
}
