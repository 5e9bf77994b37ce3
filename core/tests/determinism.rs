//! Two engines, same seed, same operations.
//! They must produce identical event streams.
//! Any divergence means a resolver bypassed its RNG stream.

use caravan_core::{engine::SimEngine, event::SimEvent, store::SaveStore};

fn build_engine(seed: u64) -> SimEngine {
    let _ = env_logger::builder().is_test(true).try_init();
    let store = SaveStore::in_memory().expect("in-memory store");
    store.migrate().expect("migration");
    let mut engine = SimEngine::build(seed, store);
    engine.ledger.grasslands = 3;
    engine.ledger.farms = 2;
    engine.ledger.grass = 10.0;
    engine.ledger.caravans = 10;
    engine.ledger.guard_camps = 1;
    engine.ledger.gold = 500;
    engine.ledger.camels = 5;
    engine
}

fn event_log(events: &[SimEvent]) -> Vec<String> {
    events
        .iter()
        .map(|e| serde_json::to_string(e).expect("serialize event"))
        .collect()
}

#[test]
fn same_seed_produces_identical_event_streams() {
    const SEED: u64 = 0xDEAD_BEEF_CAFE_1234;
    const TICKS: u64 = 600;

    let mut engine_a = build_engine(SEED);
    let mut engine_b = build_engine(SEED);

    let log_a = event_log(&engine_a.run_ticks(TICKS).expect("engine_a run"));
    let log_b = event_log(&engine_b.run_ticks(TICKS).expect("engine_b run"));

    assert!(!log_a.is_empty(), "expected events over {TICKS} ticks");
    assert_eq!(
        log_a.len(),
        log_b.len(),
        "Event stream lengths differ: {} vs {}",
        log_a.len(),
        log_b.len()
    );

    for (i, (a, b)) in log_a.iter().zip(log_b.iter()).enumerate() {
        assert_eq!(a, b, "Event stream diverged at entry {i}:\n  A: {a}\n  B: {b}");
    }

    assert_eq!(engine_a.ledger, engine_b.ledger);
    assert_eq!(engine_a.timers, engine_b.timers);
}

#[test]
fn different_seeds_produce_different_streams() {
    let mut engine_a = build_engine(42);
    let mut engine_b = build_engine(99);

    let log_a = event_log(&engine_a.run_ticks(600).expect("run a"));
    let log_b = event_log(&engine_b.run_ticks(600).expect("run b"));

    // Caravan payouts and bandit rolls must depend on the seed.
    let any_different = log_a.len() != log_b.len()
        || log_a.iter().zip(log_b.iter()).any(|(a, b)| a != b);
    assert!(
        any_different,
        "Different seeds produced identical streams — the seed is not being used"
    );
}
