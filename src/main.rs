//! Command-line entry point for the Elo rating calculator
//!
//! Reads two ratings and a match outcome, applies the configured Elo curve
//! and prints the updated ratings.

use anyhow::{anyhow, Result};
use clap::Parser;
use elo_system::config::{validate_config, AppConfig};
use elo_system::{EloRatingUpdater, MatchOptions, MatchOutcome};
use std::path::PathBuf;
use tracing::{debug, error, info};

/// Elo System - two-player skill rating updates
#[derive(Parser)]
#[command(
    name = "elo-system",
    version,
    about = "Compute updated Elo ratings for two competitors after a match",
    long_about = "Applies a logistic win-probability curve to two ratings and a match outcome, \
                 optionally weighting each side by the reliability of its opponent's rating and \
                 overriding the K-factor per player."
)]
struct Args {
    /// Current rating of player 0
    #[arg(allow_negative_numbers = true)]
    rating0: f64,

    /// Current rating of player 1
    #[arg(allow_negative_numbers = true)]
    rating1: f64,

    /// Match result for player 0: win, lose, draw, or a coefficient in [0;1]
    #[arg(allow_negative_numbers = true)]
    outcome: String,

    /// Reliability of player 0's rating
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    reliability0: f64,

    /// Reliability of player 1's rating
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    reliability1: f64,

    /// K-factor override for player 0
    #[arg(long, allow_negative_numbers = true)]
    k_factor0: Option<f64>,

    /// K-factor override for player 1
    #[arg(long, allow_negative_numbers = true)]
    k_factor1: Option<f64>,

    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Base K-factor override
    #[arg(long, allow_negative_numbers = true)]
    k_factor: Option<f64>,

    /// Interval override
    #[arg(long, allow_negative_numbers = true)]
    interval: Option<f64>,

    /// Logistic base override
    #[arg(long, allow_negative_numbers = true)]
    base: Option<f64>,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// Print the full match report as JSON
    #[arg(long)]
    json: bool,

    /// Dry run mode (validate config and exit)
    #[arg(long, help = "Validate configuration and exit without calculating")]
    dry_run: bool,
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load and merge configuration from file, environment and CLI arguments
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = match &args.config {
        Some(path) => AppConfig::from_file(path)?.with_env_overrides()?,
        None => AppConfig::from_env()?,
    };

    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }
    if let Some(k_factor) = args.k_factor {
        config.rating.k_factor = k_factor;
    }
    if let Some(interval) = args.interval {
        config.rating.interval = interval;
    }
    if let Some(base) = args.base {
        config.rating.base = base;
    }

    validate_config(&config)?;
    Ok(config)
}

/// Accept either a named outcome or a raw coefficient
fn parse_outcome(raw: &str) -> Result<f64> {
    if let Ok(outcome) = raw.parse::<MatchOutcome>() {
        return Ok(outcome.coefficient());
    }
    raw.parse::<f64>()
        .map_err(|_| anyhow!("Invalid outcome '{}': expected win, lose, draw or a number", raw))
}

fn run(args: Args) -> Result<()> {
    let config = load_config(&args)?;
    init_logging(&config.service.log_level)?;

    info!(
        k_factor = config.rating.k_factor,
        interval = config.rating.interval,
        base = config.rating.base,
        "Loaded {} configuration",
        config.service.name
    );

    if args.dry_run {
        println!("Configuration is valid");
        return Ok(());
    }

    let outcome = parse_outcome(&args.outcome)?;
    let updater = EloRatingUpdater::from_config(&config.rating);
    let options = MatchOptions::default()
        .with_reliability(args.reliability0, args.reliability1)
        .with_k_factors(args.k_factor0, args.k_factor1);

    debug!(?options, outcome, "Applying match result");
    let report = updater.report(args.rating0, args.rating1, outcome, options)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{} {}", report.new_rating0, report.new_rating1);
    }

    Ok(())
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
