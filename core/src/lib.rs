//! caravan-core — the idle resource-economy engine behind the camel
//! drop toy.
//!
//! The engine converts simulated time into resources (grass, camels,
//! gold, caravans), resolves randomized bandit raids, and persists
//! progress to a durable save store. Rendering, physics, and DOM wiring
//! are external collaborators: they call the engine's operations and
//! consume its events and status text.

pub mod bandit_resolver;
pub mod caravan_resolver;
pub mod clock;
pub mod engine;
pub mod error;
pub mod event;
pub mod farm_resolver;
pub mod grassland_resolver;
pub mod ledger;
pub mod notify;
pub mod persistence;
pub mod prestige;
pub mod resolver;
pub mod rng;
pub mod snapshot;
pub mod store;
pub mod timers;
pub mod types;
pub mod upkeep_resolver;

pub use engine::SimEngine;
pub use error::{SimError, SimResult};
pub use event::SimEvent;
pub use ledger::Ledger;
pub use store::SaveStore;
pub use timers::TimerSet;
