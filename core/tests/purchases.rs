//! Purchase and spend operations: check-then-commit, exact costs, and
//! the insufficient-resources path.

use caravan_core::{engine::SimEngine, notify::StatusSink, store::SaveStore};
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct RecordingSink(Arc<Mutex<Vec<String>>>);

impl StatusSink for RecordingSink {
    fn show(&mut self, message: &str) {
        self.0.lock().expect("lock").push(message.to_string());
    }
}

fn build_engine() -> SimEngine {
    let store = SaveStore::in_memory().expect("in-memory store");
    store.migrate().expect("migration");
    SimEngine::build(17, store)
}

#[test]
fn farm_purchase_spends_gold_then_rejects_when_short() {
    let mut engine = build_engine();
    engine.ledger.gold = 40;

    assert!(engine.purchase_farm());
    assert_eq!(engine.ledger.gold, 15);
    assert_eq!(engine.ledger.farms, 1);

    assert!(!engine.purchase_farm());
    assert_eq!(engine.ledger.gold, 15);
    assert_eq!(engine.ledger.farms, 1);
}

#[test]
fn structure_costs_are_exact() {
    let mut engine = build_engine();
    engine.ledger.gold = 150;

    assert!(engine.purchase_grassland()); // 50
    assert_eq!(engine.ledger.gold, 100);
    assert_eq!(engine.ledger.grasslands, 1);

    assert!(engine.purchase_guard_camp()); // 100
    assert_eq!(engine.ledger.gold, 0);
    assert_eq!(engine.ledger.guard_camps, 1);

    assert!(!engine.purchase_grassland());
    assert_eq!(engine.ledger.grasslands, 1);
}

#[test]
fn caravan_formation_spends_exactly_one_hundred_camels() {
    let mut engine = build_engine();
    engine.ledger.camels = 250;

    assert!(engine.form_caravan());
    assert!(engine.form_caravan());
    assert_eq!(engine.ledger.camels, 50);
    assert_eq!(engine.ledger.caravans, 2);

    assert!(!engine.form_caravan());
    assert_eq!(engine.ledger.camels, 50);
    assert_eq!(engine.ledger.caravans, 2);
}

#[test]
fn rejected_purchase_emits_an_insufficient_status() {
    let mut engine = build_engine();
    let sink = RecordingSink::default();
    let seen = sink.0.clone();
    engine.set_status_sink(Box::new(sink));

    assert!(!engine.purchase_farm());

    let seen = seen.lock().expect("lock");
    assert_eq!(*seen, vec!["Not enough resources for a farm."]);
}

#[test]
fn purchases_schedule_a_save() {
    let mut engine = build_engine();
    engine.ledger.gold = 25;

    assert!(!engine.save_pending());
    assert!(engine.purchase_farm());
    assert!(engine.save_pending());
}

#[test]
fn rejected_purchase_does_not_schedule_a_save() {
    let mut engine = build_engine();
    assert!(!engine.purchase_farm());
    assert!(!engine.save_pending());
}

#[test]
fn spawn_visual_camel_grows_the_herd_one_at_a_time() {
    let mut engine = build_engine();

    assert_eq!(engine.spawn_visual_camel(), 1);
    assert_eq!(engine.spawn_visual_camel(), 2);
    assert_eq!(engine.ledger.camels, 2);
    assert!(engine.save_pending());
}
