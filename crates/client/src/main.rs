//! Command-line client for the DPS calculator.
//!
//! Composition root that assembles the recompute channel, trigger, and
//! results state, runs one end-to-end recomputation for a player/monster
//! pair loaded from JSON, and prints the computed values.
//!
//! ```bash
//! cargo run -p dps-client -- player.json monster.json
//! RUST_LOG=debug cargo run -p dps-client -- player.json monster.json
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use calc_core::{MonsterForm, PlayerForm};
use runtime::{RecomputeChannel, RecomputeTrigger, ResultsState};

/// Input file locations, from arguments or environment.
struct Config {
    player_path: PathBuf,
    monster_path: PathBuf,
}

impl Config {
    /// Positional arguments win; `DPS_PLAYER` / `DPS_MONSTER` are the
    /// fallbacks for running from a `.env` file.
    fn resolve() -> Result<Self> {
        let mut args = std::env::args().skip(1);
        let player_path = args
            .next()
            .or_else(|| std::env::var("DPS_PLAYER").ok())
            .map(PathBuf::from);
        let monster_path = args
            .next()
            .or_else(|| std::env::var("DPS_MONSTER").ok())
            .map(PathBuf::from);

        match (player_path, monster_path) {
            (Some(player_path), Some(monster_path)) => Ok(Self {
                player_path,
                monster_path,
            }),
            _ => bail!("usage: dps <player.json> <monster.json>"),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::resolve()?;
    let player: PlayerForm = load_json(&config.player_path)?;
    let monster: MonsterForm = load_json(&config.monster_path)?;

    let (channel, mut responses) = RecomputeChannel::spawn();
    let mut trigger = RecomputeTrigger::new(channel.handle(), player, monster);
    let mut results = ResultsState::new();

    let token = trigger.flush()?.expect("fresh trigger is dirty");
    results.note_submitted(token);

    let response = responses
        .recv()
        .await
        .context("compute worker exited before responding")?;
    trigger.on_applied(response.token());
    results.apply(response);

    if let Some(error) = results.last_error() {
        bail!("computation failed: {error}");
    }
    let values = results
        .values()
        .context("no computed values were produced")?;

    println!("target:        {}", trigger.monster().name);
    println!("accuracy:      {:.2}%", values.accuracy * 100.0);
    println!("max hit:       {}", values.max_hit);
    println!("expected hit:  {:.3}", values.expected_hit);
    println!("dps:           {:.4}", values.dps);
    if values.ttk_seconds.is_finite() {
        println!("time to kill:  {:.1}s", values.ttk_seconds);
    } else {
        println!("time to kill:  never (zero damage output)");
    }

    println!("hit distribution:");
    for (damage, p) in values.hit_distribution.as_slice().iter().enumerate() {
        if *p >= 0.0005 {
            println!("  {damage:>3}  {:>6.2}%  {}", p * 100.0, bar(*p));
        }
    }

    channel.shutdown().await?;
    Ok(())
}

fn load_json<T: serde::de::DeserializeOwned>(path: &PathBuf) -> Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
}

fn bar(p: f64) -> String {
    "#".repeat((p * 200.0).round() as usize)
}
