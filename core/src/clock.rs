//! Simulation clock — owns total elapsed simulated time.
//!
//! The engine never reads a wall clock. Every tick carries an injected
//! elapsed-seconds value, so tests can single-step the simulation at
//! whatever cadence they need.

use crate::types::Seconds;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SimClock {
    /// Total simulated seconds since session start.
    pub now: Seconds,
    /// Number of completed scheduler invocations.
    pub tick_count: u64,
}

impl SimClock {
    pub fn new() -> Self {
        Self { now: 0.0, tick_count: 0 }
    }

    /// Advance by `elapsed` seconds. Returns the new absolute time.
    pub fn advance(&mut self, elapsed: Seconds) -> Seconds {
        self.now += elapsed.max(0.0);
        self.tick_count += 1;
        self.now
    }
}
