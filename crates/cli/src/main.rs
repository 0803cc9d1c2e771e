use anyhow::Context;
use clap::Parser;
use std::io;
use std::path::{Path, PathBuf};
use switch_autoplay::{run_autoplay, write_json, write_text, AutoplayConfig};
use switch_core::{run_game, RngState, RoundConfig, Strategy};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod terminal;

use terminal::TerminalFrontend;

#[derive(Debug, Parser)]
#[command(name = "switch", version, about = "Switch, a shedding card game for 2-4 players")]
struct Args {
    /// Seed for shuffles and computer decisions. Random when omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// Play this many computer-only rounds instead of the interactive game.
    #[arg(long, value_name = "ROUNDS")]
    auto: Option<u32>,
    /// Comma-separated seat strategies for --auto (random, heuristic).
    #[arg(long, value_delimiter = ',', value_parser = parse_strategy)]
    strategies: Vec<Strategy>,
    /// Per-round turn limit for --auto.
    #[arg(long, default_value_t = 5_000)]
    max_turns: u32,
    /// Write the --auto report here; `.json` selects JSON, anything else text.
    #[arg(long, value_name = "PATH")]
    report: Option<PathBuf>,
    /// Keep every game notice in the --auto round records.
    #[arg(long)]
    record_events: bool,
    /// Debug logging on stderr (RUST_LOG takes precedence).
    #[arg(short, long)]
    verbose: bool,
}

fn parse_strategy(value: &str) -> Result<Strategy, String> {
    Strategy::from_label(value)
        .filter(|strategy| strategy.is_ai())
        .ok_or_else(|| {
            format!("unknown computer strategy `{value}` (expected random or heuristic)")
        })
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    let rng = match args.seed {
        Some(seed) => RngState::from_seed(seed),
        None => RngState::from_entropy(),
    };
    info!(seed = rng.seed(), "switch starting");
    match args.auto {
        Some(rounds) => run_auto(&args, rounds, rng.seed()),
        None => run_interactive(rng),
    }
}

fn run_interactive(mut rng: RngState) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut frontend = TerminalFrontend::new(stdin.lock(), io::stdout());
    let played = run_game(&mut frontend, &mut rng, RoundConfig::default())
        .context("failed to start a round")?;
    info!(played, "session finished");
    Ok(())
}

fn run_auto(args: &Args, rounds: u32, seed: u64) -> anyhow::Result<()> {
    let mut config = AutoplayConfig {
        seed,
        rounds,
        max_turns: args.max_turns,
        record_events: args.record_events,
        ..AutoplayConfig::default()
    };
    if !args.strategies.is_empty() {
        config.strategies = args.strategies.clone();
    }
    let result = run_autoplay(&config).context("autoplay failed")?;
    match &args.report {
        Some(path) if is_json(path) => write_json(path, &result)
            .with_context(|| format!("writing {}", path.display()))?,
        Some(path) => write_text(path, &result)
            .with_context(|| format!("writing {}", path.display()))?,
        None => print!("{}", result.to_text_report()),
    }
    Ok(())
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}
