//! Skirmish binary.
//!
//! Resolves a configured number of attacks between two generated ships and
//! prints the summary.
//!
//! # Examples
//!
//! ```bash
//! SKIRMISH_ROUNDS=10 SKIRMISH_DEFENDER_EVASION=40 cargo run -p combat-sim
//!
//! # JSON summary with per-shot roll tracing
//! RUST_LOG=combat_core=trace SKIRMISH_REPORT_JSON=true cargo run -p combat-sim
//! ```

use anyhow::{Context, Result};
use combat_sim::{ChaChaRandom, SimConfig, logging};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    logging::setup_logging();

    let config = SimConfig::from_env().context("failed to load skirmish configuration")?;
    tracing::info!("Starting skirmish");
    tracing::info!("Seed: {}", config.seed);
    tracing::info!("Rounds: {}", config.rounds);

    let mut rng = ChaChaRandom::seed_from_u64(config.seed);
    let summary = combat_sim::run(&config, &mut rng).context("skirmish aborted")?;

    if config.report_json {
        let json = serde_json::to_string_pretty(&summary).context("failed to encode summary")?;
        println!("{json}");
    } else {
        println!(
            "{} rounds, {} shots fired, {} hits ({:.1}% hit rate)",
            summary.rounds.len(),
            summary.total_fired,
            summary.total_hits,
            summary.hit_rate() * 100.0
        );
    }

    tracing::info!("Skirmish complete");
    Ok(())
}
