//! Persistence: hydration, per-field fallback, debounce timing, and
//! failure tolerance.

use caravan_core::{
    engine::SimEngine,
    ledger::Ledger,
    persistence::SAVE_KEY,
    snapshot::PersistedSnapshot,
    store::SaveStore,
    timers::TimerSet,
};
use std::path::PathBuf;

fn build_engine(seed: u64, store: SaveStore) -> SimEngine {
    SimEngine::build(seed, store)
}

fn in_memory_store() -> SaveStore {
    let store = SaveStore::in_memory().expect("in-memory store");
    store.migrate().expect("migration");
    store
}

fn temp_db(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("caravan_{}_{}.db", name, std::process::id()));
    let _ = std::fs::remove_file(&path);
    path
}

fn file_store(path: &PathBuf) -> SaveStore {
    let store = SaveStore::open(path.to_str().expect("utf-8 path")).expect("open store");
    store.migrate().expect("migration");
    store
}

#[test]
fn stored_snapshot_hydrates_identically() {
    let ledger = Ledger {
        camels: 42,
        gold: 1300,
        grass: 7.25,
        farms: 3,
        grasslands: 6,
        guard_camps: 2,
        caravans: 5,
        nomad_tokens: 9,
    };
    let timers = TimerSet {
        farm_production: 1.5,
        grass_consumption: 4.0,
        caravan_gold: 32.5,
        bandit: 58.0,
    };

    let store = in_memory_store();
    let json = serde_json::to_string(&PersistedSnapshot::capture(&ledger, &timers))
        .expect("serialize snapshot");
    store.write_save(SAVE_KEY, &json).expect("seed save");

    let engine = build_engine(7, store);
    assert_eq!(engine.ledger, ledger);
    assert_eq!(engine.timers, timers);
    // Caravan fleet of 5 is well short of the threshold.
    assert!(!engine.prestige_unlocked());
}

#[test]
fn save_then_reload_reproduces_the_session() {
    let path = temp_db("reload");

    let (saved_ledger, saved_timers) = {
        let mut engine = build_engine(11, file_store(&path));
        engine.ledger.grasslands = 4;
        engine.ledger.farms = 2;
        engine.ledger.grass = 30.0;
        engine.ledger.caravans = 1;
        engine.run_ticks(95).expect("run");
        engine.flush_save();
        (engine.ledger.clone(), engine.timers.clone())
    };

    let engine = build_engine(11, file_store(&path));
    assert_eq!(engine.ledger, saved_ledger);
    assert_eq!(engine.timers, saved_timers);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn bad_fields_fall_back_individually() {
    let store = in_memory_store();
    store
        .write_save(
            SAVE_KEY,
            r#"{
                "camelCount": 50,
                "goldAmount": "NaN-producing",
                "grassAmount": 9.5,
                "banditTimer": null
            }"#,
        )
        .expect("seed save");

    let engine = build_engine(7, store);
    assert_eq!(engine.ledger.camels, 50);
    assert_eq!(engine.ledger.gold, 0); // invalid → default stands
    assert_eq!(engine.ledger.grass, 9.5);
    assert_eq!(engine.ledger.farms, 0); // missing → default stands
    assert_eq!(engine.timers.bandit, 0.0); // null → default stands
}

#[test]
fn corrupt_payload_leaves_defaults() {
    let store = in_memory_store();
    store.write_save(SAVE_KEY, "{ definitely not json").expect("seed save");

    let engine = build_engine(7, store);
    assert_eq!(engine.ledger, Ledger::default());
    assert_eq!(engine.timers, TimerSet::default());
}

#[test]
fn absent_save_leaves_defaults() {
    let engine = build_engine(7, in_memory_store());
    assert_eq!(engine.ledger, Ledger::default());
    assert_eq!(engine.timers, TimerSet::default());
}

#[test]
fn hydrated_herd_can_unlock_prestige_immediately() {
    let store = in_memory_store();
    store
        .write_save(SAVE_KEY, r#"{"camelCount": 1500}"#)
        .expect("seed save");

    let engine = build_engine(7, store);
    assert!(engine.prestige_unlocked());
}

#[test]
fn failing_store_is_logged_and_never_fatal() {
    // No migrate(): the save_slot table is absent, so every read and
    // write against this store errs at the rusqlite boundary.
    let store = SaveStore::in_memory().expect("in-memory store");
    let mut engine = build_engine(7, store);

    // The failed startup read leaves the defaults standing.
    assert_eq!(engine.ledger, Ledger::default());

    engine.ledger.grasslands = 3;
    for _ in 0..5 {
        engine.tick(1.0).expect("tick survives failing saves");
    }
    engine.flush_save();

    // In-memory state stays authoritative through every failed write.
    assert_eq!(engine.ledger.grass, 15.0);
    assert_eq!(engine.ledger.grasslands, 3);
}

#[test]
fn debounced_save_lands_one_tick_after_the_mutation() {
    let path = temp_db("debounce");
    let mut engine = build_engine(7, file_store(&path));
    engine.ledger.grasslands = 1;

    let reader = SaveStore::open(path.to_str().expect("utf-8 path")).expect("reader");

    engine.tick(1.0).expect("tick"); // mutation at t=1, deadline t=1.5
    assert!(engine.save_pending());
    assert!(reader.read_save(SAVE_KEY).expect("read").is_none());

    engine.tick(1.0).expect("tick"); // t=2: pending save flushes first

    let payload = reader.read_save(SAVE_KEY).expect("read").expect("saved");
    let value: serde_json::Value = serde_json::from_str(&payload).expect("parse");
    // The write carries the state as of the first tick, before this
    // tick's growth landed.
    assert_eq!(value["grassAmount"], 1.0);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn new_mutation_reschedules_instead_of_stacking() {
    let path = temp_db("reschedule");
    let mut engine = build_engine(7, file_store(&path));
    engine.ledger.gold = 100;

    let reader = SaveStore::open(path.to_str().expect("utf-8 path")).expect("reader");

    assert!(engine.purchase_farm()); // t=0.0, deadline 0.5
    engine.tick(0.3).expect("tick"); // t=0.3: not due yet
    assert!(reader.read_save(SAVE_KEY).expect("read").is_none());

    assert!(engine.purchase_farm()); // t=0.3, deadline moves to 0.8
    engine.tick(0.3).expect("tick"); // t=0.6: past the old deadline, not the new
    assert!(
        reader.read_save(SAVE_KEY).expect("read").is_none(),
        "canceled deadline still fired"
    );

    engine.tick(0.3).expect("tick"); // t=0.9: due
    let payload = reader.read_save(SAVE_KEY).expect("read").expect("saved");
    let value: serde_json::Value = serde_json::from_str(&payload).expect("parse");
    assert_eq!(value["farmCount"], 2.0);
    assert_eq!(value["goldAmount"], 50.0);

    let _ = std::fs::remove_file(&path);
}
