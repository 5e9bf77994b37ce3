//! Deterministic random number generation.
//!
//! RULE: Nothing in the simulation may call any platform RNG.
//! All randomness flows through ResolverRng streams derived from the
//! single master seed the engine was built with.
//!
//! Each resolver gets its own RNG stream, seeded deterministically
//! from (master_seed XOR slot_index). This means:
//!   - Adding a new resolver never changes existing resolvers' streams.
//!   - Each resolver's stream is fully reproducible in isolation.
//!
//! Streams live for the whole session: successive cycles of the same
//! resolver draw successive values, never a replay of the first draw.

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;

/// A named, deterministic RNG stream for a single resolver.
pub struct ResolverRng {
    pub name: &'static str,
    inner: Pcg64Mcg,
}

impl ResolverRng {
    /// Create a resolver RNG from the master seed and a stable slot
    /// index. The index must never change once assigned.
    pub fn new(master_seed: u64, slot_index: u64) -> Self {
        let derived_seed = master_seed ^ (slot_index.wrapping_mul(0x9e37_79b9_7f4a_7c15));
        Self {
            name: "unnamed",
            inner: Pcg64Mcg::seed_from_u64(derived_seed),
        }
    }

    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Roll a u64 in [0, n).
    pub fn next_u64_below(&mut self, n: u64) -> u64 {
        assert!(n > 0, "n must be > 0");
        self.inner.next_u64() % n
    }

    /// Roll a u64 in [lo, hi] inclusive.
    pub fn roll_inclusive(&mut self, lo: u64, hi: u64) -> u64 {
        assert!(hi >= lo, "empty range");
        lo + self.next_u64_below(hi - lo + 1)
    }

    /// Roll a float in [lo, hi).
    pub fn range_f64(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_f64() * (hi - lo)
    }

    /// Bernoulli trial: returns true with probability p.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}

/// All resolver RNG streams for a single session, indexed by stable slot.
pub struct RngBank {
    streams: Vec<ResolverRng>,
}

impl RngBank {
    pub fn new(master_seed: u64) -> Self {
        let streams = ResolverSlot::ALL
            .iter()
            .map(|slot| ResolverRng::new(master_seed, *slot as u64).with_name(slot.name()))
            .collect();
        Self { streams }
    }

    /// Borrow the persistent stream for one resolver slot.
    pub fn for_resolver(&mut self, slot: ResolverSlot) -> &mut ResolverRng {
        &mut self.streams[slot as usize]
    }
}

/// Stable resolver slot assignments.
/// NEVER reorder or remove entries — only append.
/// Reordering changes every resolver's seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum ResolverSlot {
    Grassland = 0,
    Farm = 1,
    Upkeep = 2,
    Caravan = 3,
    Bandit = 4,
    // Add new resolvers here — append only.
}

impl ResolverSlot {
    pub const ALL: [ResolverSlot; 5] = [
        Self::Grassland,
        Self::Farm,
        Self::Upkeep,
        Self::Caravan,
        Self::Bandit,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Grassland => "grassland",
            Self::Farm => "farm",
            Self::Upkeep => "upkeep",
            Self::Caravan => "caravan",
            Self::Bandit => "bandit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a = ResolverRng::new(7, 3);
        let mut b = ResolverRng::new(7, 3);
        for _ in 0..100 {
            assert_eq!(a.next_f64().to_bits(), b.next_f64().to_bits());
        }
    }

    #[test]
    fn roll_inclusive_stays_in_range() {
        let mut rng = ResolverRng::new(42, 0);
        for _ in 0..1000 {
            let v = rng.roll_inclusive(14, 21);
            assert!((14..=21).contains(&v));
        }
    }

    #[test]
    fn bank_streams_advance_between_borrows() {
        let mut bank = RngBank::new(99);
        let first = bank.for_resolver(ResolverSlot::Bandit).next_f64();
        let second = bank.for_resolver(ResolverSlot::Bandit).next_f64();
        assert_ne!(first.to_bits(), second.to_bits());
    }
}
