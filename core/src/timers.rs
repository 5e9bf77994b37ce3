//! The timer set — fractional-second accumulators for the four
//! independent periodic processes.
//!
//! Each timer accumulates elapsed seconds and is only ever decremented
//! by whole multiples of its cycle length. Post-condition of every
//! resolver: a timer that had at least one consumable cycle ends below
//! its cycle length.

use crate::types::Seconds;
use serde::{Deserialize, Serialize};

/// Farms breed camels every 2 seconds.
pub const FARM_CYCLE_SECS: Seconds = 2.0;
/// The herd grazes every 10 seconds.
pub const UPKEEP_CYCLE_SECS: Seconds = 10.0;
/// Caravans return with gold every 60 seconds.
pub const CARAVAN_CYCLE_SECS: Seconds = 60.0;
/// Bandits consider a raid every 60 seconds.
pub const BANDIT_CYCLE_SECS: Seconds = 60.0;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TimerSet {
    pub farm_production: Seconds,
    pub grass_consumption: Seconds,
    pub caravan_gold: Seconds,
    pub bandit: Seconds,
}

impl TimerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero every accumulator. Used by the prestige reset.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Whole cycles currently pending on `timer`.
pub fn pending_cycles(timer: Seconds, cycle_len: Seconds) -> u64 {
    if timer < cycle_len {
        0
    } else {
        (timer / cycle_len).floor() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_cycles_floors() {
        assert_eq!(pending_cycles(0.0, 2.0), 0);
        assert_eq!(pending_cycles(1.99, 2.0), 0);
        assert_eq!(pending_cycles(2.0, 2.0), 1);
        assert_eq!(pending_cycles(125.0, 60.0), 2);
    }

    #[test]
    fn reset_zeroes_all_four() {
        let mut timers = TimerSet {
            farm_production: 1.5,
            grass_consumption: 9.0,
            caravan_gold: 59.0,
            bandit: 30.0,
        };
        timers.reset();
        assert_eq!(timers, TimerSet::default());
    }
}
