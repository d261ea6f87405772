#![deny(clippy::all, clippy::pedantic)]
//! # Reacher Runtime
//!
//! Runs reacher episodes with a scripted policy and reports reward and
//! telemetry. Episode parameters can be edited while it runs when started
//! with `--watch`; changes apply from the next episode.

mod config;
mod watcher;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use reacher::{Arena, EpisodeSummary, PolicyKind, StatsCollector};
use serde::Serialize;

use crate::config::{reload_parameters, resolve_parameters, RuntimeConfig};

#[derive(Parser, Debug)]
#[command(name = "runtime", version, about = "Run two-link reacher episodes")]
struct Cli {
    /// JSON runtime config
    #[arg(long)]
    config: Option<PathBuf>,
    /// JSON object of episode parameters, layered over the config
    #[arg(long)]
    params: Option<PathBuf>,
    /// Reload the parameter file between episodes when it changes
    #[arg(long, requires = "params")]
    watch: bool,
    #[arg(long)]
    episodes: Option<u32>,
    #[arg(long)]
    max_steps: Option<u32>,
    /// Seed for the agent's goal placement
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, value_enum)]
    policy: Option<PolicyArg>,
    /// Episode parameter override, repeatable
    #[arg(long = "param", value_name = "KEY=VALUE")]
    param_overrides: Vec<String>,
    /// Write episode summaries and stats as JSON
    #[arg(long)]
    stats_out: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum PolicyArg {
    Random,
    Zero,
}

impl From<PolicyArg> for PolicyKind {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Random => PolicyKind::Random,
            PolicyArg::Zero => PolicyKind::Zero,
        }
    }
}

#[derive(Serialize)]
struct RunReport<'a> {
    episodes: &'a [EpisodeSummary],
    stats: &'a StatsCollector,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => RuntimeConfig::load(path)?,
        None => RuntimeConfig::default(),
    };
    if let Some(episodes) = cli.episodes {
        config.episodes = episodes;
    }
    if let Some(max_steps) = cli.max_steps {
        config.arena.max_steps = max_steps;
    }
    if let Some(seed) = cli.seed {
        config.arena.seed = seed;
    }
    if let Some(policy) = cli.policy {
        config.policy = policy.into();
    }
    if cli.stats_out.is_some() {
        config.stats_out.clone_from(&cli.stats_out);
    }

    run(&cli, &config)
}

fn run(cli: &Cli, config: &RuntimeConfig) -> Result<()> {
    let params = resolve_parameters(&config.parameters, cli.params.as_deref(), &cli.param_overrides)?;
    let mut arena = Arena::new(config.arena.clone(), params).context("cannot build arena")?;
    let mut policy = config.policy.build(config.policy_seed);

    let param_watcher = match (&cli.params, cli.watch) {
        (Some(path), true) => Some(watcher::start(path)?),
        _ => None,
    };

    tracing::info!(
        episodes = config.episodes,
        max_steps = config.arena.max_steps,
        policy = ?config.policy,
        "Starting reacher run..."
    );

    let mut summaries = Vec::new();
    for _ in 0..config.episodes {
        if let (Some(path), Some(w)) = (&cli.params, &param_watcher) {
            if w.changed() {
                if let Some(params) = reload_parameters(&config.parameters, path, &cli.param_overrides) {
                    arena.update_parameters(params);
                }
            }
        }
        summaries.push(arena.run_episode(policy.as_mut())?);
    }

    let stats = arena.stats();
    for (key, summary) in stats.iter() {
        tracing::info!("{key}: {:.4} over {} samples", summary.value(), summary.count);
    }

    if let Some(path) = &config.stats_out {
        let report = RunReport { episodes: &summaries, stats: &stats };
        let json = serde_json::to_string_pretty(&report)?;
        fs::write(path, json).with_context(|| format!("cannot write {}", path.display()))?;
        tracing::info!("Stats written to {}", path.display());
    }
    Ok(())
}
