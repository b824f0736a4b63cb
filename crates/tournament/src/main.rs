//! Tournament CLI
//!
//! Plays a match between two engine specs and writes the record.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use tournament::{EngineSpec, MatchConfig, MatchRunner};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Chess self-play runner");
    println!();
    println!("Usage:");
    println!("  tournament [--config FILE] [--white SPEC] [--black SPEC] [--games N]");
    println!("             [--max-plies N] [--seed N] [--output FILE] [--no-alternate]");
    println!();
    println!("Engine specs:");
    println!("  alphabeta:<depth>  - Negamax with alpha-beta pruning");
    println!("  negamax:<depth>    - Negamax without pruning");
    println!("  minimax:<depth>    - Two-sided minimax");
    println!("  greedy             - One-ply lookahead");
    println!("  random             - Uniform random legal move");
    println!();
    println!("Examples:");
    println!("  tournament --white alphabeta:3 --black random --games 20");
    println!("  tournament --config match.toml --output results/match.json");
    println!();
    println!("Log level comes from RUST_LOG (default: info).");
}

/// Flags given on the command line; each one overrides the config file.
#[derive(Debug, Default)]
struct CliArgs {
    config: Option<PathBuf>,
    white: Option<EngineSpec>,
    black: Option<EngineSpec>,
    games: Option<u32>,
    max_plies: Option<u32>,
    seed: Option<u64>,
    output: Option<PathBuf>,
    no_alternate: bool,
    help: bool,
}

fn next_value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .with_context(|| format!("{flag} needs a value"))
}

fn parse_args(args: &[String]) -> Result<CliArgs> {
    let mut cli = CliArgs::default();

    let mut i = 0;
    while i < args.len() {
        let flag = args[i].as_str();
        let mut value = || next_value(args, &mut i, flag);
        match flag {
            "--config" | "-c" => cli.config = Some(PathBuf::from(value()?)),
            "--white" | "-w" => cli.white = Some(value()?.parse()?),
            "--black" | "-b" => cli.black = Some(value()?.parse()?),
            "--games" | "-g" => {
                cli.games = Some(value()?.parse().context("--games expects a number")?)
            }
            "--max-plies" => {
                cli.max_plies = Some(value()?.parse().context("--max-plies expects a number")?)
            }
            "--seed" => cli.seed = Some(value()?.parse().context("--seed expects a number")?),
            "--output" | "-o" => cli.output = Some(PathBuf::from(value()?)),
            "--no-alternate" => cli.no_alternate = true,
            "help" | "--help" | "-h" => cli.help = true,
            other => bail!("Unknown argument: {other}"),
        }
        i += 1;
    }

    Ok(cli)
}

fn build_config(cli: &CliArgs) -> Result<MatchConfig> {
    let mut config = match &cli.config {
        Some(path) => MatchConfig::load(path)
            .with_context(|| format!("loading match config {}", path.display()))?,
        None => MatchConfig::default(),
    };

    if let Some(white) = cli.white {
        config.white = white;
    }
    if let Some(black) = cli.black {
        config.black = black;
    }
    if let Some(games) = cli.games {
        config.games = games;
    }
    if let Some(max_plies) = cli.max_plies {
        config.max_plies = max_plies;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    if cli.output.is_some() {
        config.output = cli.output.clone();
    }
    if cli.no_alternate {
        config.alternate_colors = false;
    }
    Ok(config)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let cli = parse_args(&args)?;
    if cli.help {
        print_usage();
        return Ok(());
    }

    let config = build_config(&cli)?;
    info!(
        white = %config.white,
        black = %config.black,
        games = config.games,
        max_plies = config.max_plies,
        "starting match"
    );

    let runner = MatchRunner::new(config);
    let record = runner.run_match()?;
    record.print_report();

    if let Some(path) = &runner.config().output {
        record
            .save(path)
            .with_context(|| format!("saving match record to {}", path.display()))?;
        info!(path = %path.display(), "match record saved");
    }

    Ok(())
}
