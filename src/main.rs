//! Headless fishery demo driver.
//!
//! Runs a seeded multi-angler session against the default lake and prints
//! the resulting ledger. The engine's own randomness is fully determined by
//! the catch seed; the driver-side `rand` RNG only picks who casts where
//! and in what weather, so `--seed` reproduces an entire session.
//!
//! Usage:
//!   cargo run -- [OPTIONS]
//!
//! Examples:
//!   cargo run                      # default: 200 casts, 4 anglers
//!   cargo run -- -c 1000 -a 8     # longer session, more anglers
//!   cargo run -- --seed 7 --json  # reproducible run with JSON report

use std::env;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use baitline::{CastError, Engine, TackleType, WeatherCondition};

const WEATHER_CHOICES: [WeatherCondition; 5] = [
    WeatherCondition::Clear,
    WeatherCondition::Overcast,
    WeatherCondition::Rain,
    WeatherCondition::Fog,
    WeatherCondition::Storm,
];

const TACKLE_CHOICES: [TackleType; 4] = [
    TackleType::Basic,
    TackleType::Spinner,
    TackleType::Baitcaster,
    TackleType::DeepSea,
];

struct DemoConfig {
    casts: u64,
    anglers: usize,
    seed: u64,
    json: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            casts: 200,
            anglers: 4,
            seed: 42,
            json: false,
        }
    }
}

#[derive(Serialize)]
struct SessionReport {
    seed: u64,
    attempts: u64,
    landed: u64,
    rate_limited: u64,
    final_block: u64,
    final_season: u64,
    total_casts: u64,
    total_bait_claimed: u64,
    balance_leaderboard: Vec<(String, u64)>,
    weight_leaderboard: Vec<(String, u64)>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let config = parse_args(&env::args().collect::<Vec<_>>());

    println!("=== Azure Trench fishery session ===");
    println!("  Attempts: {}", config.casts);
    println!("  Anglers:  {}", config.anglers);
    println!("  Seed:     {}", config.seed);
    println!();

    let mut engine = Engine::new(0, &config.seed.to_be_bytes());
    let mut rng = StdRng::seed_from_u64(config.seed);

    let addresses: Vec<String> = (0..config.anglers).map(|i| format!("A{}", i + 1)).collect();
    let slot_ids: Vec<String> = engine.lake().slot_ids().to_vec();

    let mut landed = 0u64;
    let mut rate_limited = 0u64;

    for _ in 0..config.casts {
        let angler = &addresses[rng.gen_range(0..addresses.len())];
        let slot = &slot_ids[rng.gen_range(0..slot_ids.len())];
        let weather = WEATHER_CHOICES[rng.gen_range(0..WEATHER_CHOICES.len())];
        let tackle = TACKLE_CHOICES[rng.gen_range(0..TACKLE_CHOICES.len())];

        match engine.cast_line(angler, slot, weather, tackle) {
            Ok(success) => {
                landed += 1;
                println!(
                    "[block {:>5}] {} landed {} ({} g, rarity {:.3}) at {} (+{} bait)",
                    success.record.block,
                    angler,
                    success.record.fish.species().display_name(),
                    success.record.fish.weight_grams(),
                    success.record.fish.rarity(),
                    slot,
                    success.bait_credits,
                );
            }
            Err(CastError::CooldownOrCap) => rate_limited += 1,
            Err(CastError::SlotEmpty) => {
                // Default lake slots are all filled; unreachable with stock ids.
                println!("unexpected empty slot {}", slot);
            }
        }

        // Drift the clock so cooldowns and seasons actually elapse.
        engine.advance_blocks(rng.gen_range(4..=20));
    }

    let report = SessionReport {
        seed: config.seed,
        attempts: config.casts,
        landed,
        rate_limited,
        final_block: engine.current_block(),
        final_season: engine.current_season(),
        total_casts: engine.total_casts(),
        total_bait_claimed: engine.total_bait_claimed(),
        balance_leaderboard: engine.top_by_balance(10),
        weight_leaderboard: engine.top_by_weight(10),
    };

    println!();
    println!("=== Session summary ===");
    println!("  Landed:        {} / {}", report.landed, report.attempts);
    println!("  Rate limited:  {}", report.rate_limited);
    println!("  Final block:   {}", report.final_block);
    println!("  Final season:  {}", report.final_season);
    println!("  Bait claimed:  {}", report.total_bait_claimed);
    println!();
    println!("  Top anglers by balance:");
    for (rank, (address, balance)) in report.balance_leaderboard.iter().enumerate() {
        println!("    {}. {:<6} {:>6} bait", rank + 1, address, balance);
    }
    println!("  Top anglers by landed weight:");
    for (rank, (address, grams)) in report.weight_leaderboard.iter().enumerate() {
        println!("    {}. {:<6} {:>8} g", rank + 1, address, grams);
    }

    if config.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => {
                let filename = format!(
                    "fishery_report_{}.json",
                    chrono::Utc::now().format("%Y%m%d_%H%M%S")
                );
                match std::fs::write(&filename, json) {
                    Ok(()) => println!("\nJSON report saved to: {}", filename),
                    Err(err) => eprintln!("failed to write JSON report: {}", err),
                }
            }
            Err(err) => eprintln!("failed to serialize report: {}", err),
        }
    }
}

fn parse_args(args: &[String]) -> DemoConfig {
    let mut config = DemoConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-c" | "--casts" => {
                if i + 1 < args.len() {
                    config.casts = args[i + 1].parse().unwrap_or(config.casts);
                    i += 1;
                }
            }
            "-a" | "--anglers" => {
                if i + 1 < args.len() {
                    config.anglers = args[i + 1].parse().unwrap_or(config.anglers);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().unwrap_or(config.seed);
                    i += 1;
                }
            }
            "--json" => config.json = true,
            other => eprintln!("ignoring unknown argument: {}", other),
        }
        i += 1;
    }

    config.anglers = config.anglers.max(1);
    config
}
