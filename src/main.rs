use analytics::ResultFilter;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use configuration::{init_tracing, load_config, Config, LogLevel};
use core_types::{AmericanOdds, BettorInput, Outcome, Stake, WagerInput};
use ledger::{BettorReport, Ledger};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use store::InMemoryRepository;

mod render;

/// The main entry point for the Basic Bettor application.
#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine; it only carries optional overrides.
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    let _log_guard = init_tracing(&config.logging)?;

    // Execute the appropriate command
    match cli.command {
        Commands::Report(args) => handle_report(args, &config).await,
        Commands::Series(args) => handle_series(args, &config).await,
        Commands::Odds(args) => handle_odds(args, &config),
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Track sports wagers and grade a bettor's performance.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a TOML settings file. Defaults to ./bettor.toml when present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Overrides the configured log level.
    #[arg(long, global = true, value_enum)]
    log_level: Option<LogLevel>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize a bettor and list their bets.
    Report(ReportArgs),
    /// Print the cumulative profit series of a bettor.
    Series(SeriesArgs),
    /// Valuate a single hypothetical bet.
    Odds(OddsArgs),
}

#[derive(Parser)]
struct ReportArgs {
    /// A JSON file holding one bettor and their bets.
    #[arg(long, short)]
    file: PathBuf,

    /// Which bets to list: ALL, GRADED, PENDING, WIN, LOSS, PUSH or VOID.
    #[arg(long, default_value = "ALL")]
    filter: ResultFilter,

    /// Print the report as JSON instead of tables.
    #[arg(long)]
    json: bool,
}

#[derive(Parser)]
struct SeriesArgs {
    /// A JSON file holding one bettor and their bets.
    #[arg(long, short)]
    file: PathBuf,

    /// Print the series as JSON instead of a table.
    #[arg(long)]
    json: bool,
}

#[derive(Parser)]
struct OddsArgs {
    /// American odds, e.g. -110 or 150.
    #[arg(long, allow_negative_numbers = true)]
    odds: i32,

    /// Stake in units.
    #[arg(long, default_value_t = 1.0)]
    stake: f64,

    /// The outcome to valuate.
    #[arg(long, default_value = "WIN")]
    result: Outcome,
}

/// The on-disk shape of a bettor file: the bettor fields plus their bets.
#[derive(Debug, Deserialize)]
struct BettorFile {
    #[serde(flatten)]
    bettor: BettorInput,
    #[serde(default)]
    bets: Vec<WagerInput>,
}

// ==============================================================================
// Command Logic
// ==============================================================================

/// Loads a bettor file into a fresh in-memory ledger and builds the report.
async fn load_report(path: &Path, filter: ResultFilter, config: &Config) -> Result<BettorReport> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read bettor file {}", path.display()))?;
    let file: BettorFile = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse bettor file {}", path.display()))?;

    let ledger = Ledger::new(
        Arc::new(InMemoryRepository::new()),
        config.display.date_format.clone(),
    );
    let bettor = ledger.register_bettor(file.bettor).await?;
    for (index, bet) in file.bets.into_iter().enumerate() {
        ledger
            .place_wager(bettor.id, bet)
            .await
            .with_context(|| format!("Bet #{} in {} is invalid", index + 1, path.display()))?;
    }

    tracing::info!(bettor = %bettor.name, file = %path.display(), "Bettor file loaded.");
    Ok(ledger.report(bettor.id, filter).await?)
}

async fn handle_report(args: ReportArgs, config: &Config) -> Result<()> {
    let report = load_report(&args.file, args.filter, config).await?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let precision = config.display.units_precision;
    println!("{}", report.bettor.name);
    println!("{}", render::summary_table(&report.summary, precision));
    println!("Bets ({})", report.filter);
    println!("{}", render::bets_table(&report.bets, precision));
    Ok(())
}

async fn handle_series(args: SeriesArgs, config: &Config) -> Result<()> {
    let report = load_report(&args.file, ResultFilter::All, config).await?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report.series)?);
        return Ok(());
    }

    println!(
        "{}",
        render::series_table(&report.series, config.display.units_precision)
    );
    Ok(())
}

fn handle_odds(args: OddsArgs, config: &Config) -> Result<()> {
    let odds = AmericanOdds::new(args.odds)?;
    let stake = Stake::from_f64(args.stake)?;
    let profit = core_types::profit(odds, stake, args.result);

    println!(
        "{} at {} for {} units: {} units",
        args.result,
        core_types::format_odds(odds),
        render::units(stake.units(), config.display.units_precision),
        render::signed_units(profit, config.display.units_precision),
    );
    Ok(())
}
