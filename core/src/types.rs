//! Shared primitive types used across the entire simulation.

/// Elapsed simulated time. The reference cadence is 1.0 per tick.
pub type Seconds = f64;

/// A whole quantity of camels, gold, structures, or tokens.
pub type Count = u64;
