//! caravan-runner: headless runner for the caravan idle economy.
//!
//! Usage:
//!   caravan-runner --seed 12345 --ticks 600 --db save.db
//!   caravan-runner --seed 12345 --ticks 600 --grasslands 5 --farms 3

use anyhow::Result;
use caravan_core::{engine::SimEngine, store::SaveStore};
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", 42u64);
    let ticks = parse_arg(&args, "--ticks", 600u64);
    let grasslands = parse_arg(&args, "--grasslands", 0u64);
    let farms = parse_arg(&args, "--farms", 0u64);
    let db = args
        .windows(2)
        .find(|w| w[0] == "--db")
        .map(|w| w[1].as_str())
        .unwrap_or(":memory:");

    println!("caravan-runner");
    println!("  seed:   {seed}");
    println!("  ticks:  {ticks}");
    println!("  db:     {db}");
    println!();

    let store = if db == ":memory:" {
        SaveStore::in_memory()?
    } else {
        SaveStore::open(db)?
    };
    store.migrate()?;

    let mut engine = SimEngine::build(seed, store);

    // Optional starting structures for quick experiments.
    engine.ledger.grasslands += grasslands;
    engine.ledger.farms += farms;

    engine.run_ticks(ticks)?;
    engine.flush_save();

    print_summary(&engine);
    Ok(())
}

fn print_summary(engine: &SimEngine) {
    let ledger = &engine.ledger;
    println!("── after {} ticks ({:.0}s) ──", engine.clock.tick_count, engine.clock.now);
    println!("  camels:       {}", ledger.camels);
    println!("  gold:         {}", ledger.gold);
    println!("  grass:        {}", ledger.grass_display());
    println!("  farms:        {}", ledger.farms);
    println!("  grasslands:   {}", ledger.grasslands);
    println!("  guard camps:  {}", ledger.guard_camps);
    println!("  caravans:     {}", ledger.caravans);
    println!("  nomad tokens: {}", ledger.nomad_tokens);
    println!("  prestige:     {}", if engine.prestige_unlocked() { "unlocked" } else { "locked" });
}

fn parse_arg<T: std::str::FromStr>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
