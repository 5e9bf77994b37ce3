//! Events — everything the resolvers and out-of-band operations report.
//!
//! RULE: resolvers communicate outward ONLY through events. The
//! scheduler turns them into status text for the notifier; the UI
//! collaborator consumes the raw vec returned by `tick()`.

use crate::types::Count;
use serde::{Deserialize, Serialize};

/// Every event emitted during simulation.
/// Variants are appended — never removed or reordered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SimEvent {
    // ── Resolver events ────────────────────────────
    GrassGrown {
        gained: Count,
    },
    CamelsBred {
        produced: Count,
        grass_consumed: Count,
    },
    HerdGrazed {
        used: f64,
        needed: f64,
        shortage: bool,
    },
    CaravanPayout {
        cycles: Count,
        gold: Count,
    },
    BanditRaid {
        caravan_lost: bool,
        gold_stolen: Count,
    },

    // ── Prestige events ────────────────────────────
    PrestigeUnlocked,
    PrestigeCompleted {
        tokens_earned: Count,
    },

    // ── Player operation events ────────────────────
    StructurePurchased {
        structure: Structure,
        cost: Count,
    },
    PurchaseRejected {
        structure: Structure,
        needed: Count,
        available: Count,
    },
    VisualCamelSpawned {
        total_camels: Count,
    },
}

/// Everything the player can buy or form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Structure {
    Farm,
    Grassland,
    GuardCamp,
    Caravan,
}

impl Structure {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Farm => "farm",
            Self::Grassland => "grassland",
            Self::GuardCamp => "guard camp",
            Self::Caravan => "caravan",
        }
    }
}
