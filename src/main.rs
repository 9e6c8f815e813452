//! doc-scraper main entry point
//!
//! This is the command-line interface for the documentation scraper.

use clap::Parser;
use doc_scraper::config::{load_or_default, Config};
use doc_scraper::output::{control_output, OutputMode};
use doc_scraper::{run_mode, Mode, ModeOutcome, ScrapeContext, Session, StatusTaxonomy, TracingEvents};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// doc-scraper: Python documentation scraper
///
/// Collects release notes, documentation versions, the PDF archive and
/// proposal statuses from the Python documentation sites.
#[derive(Parser, Debug)]
#[command(name = "doc-scraper")]
#[command(version)]
#[command(about = "Python documentation scraper", long_about = None)]
struct Cli {
    /// Scraping mode
    #[arg(value_enum)]
    mode: Mode,

    /// Clear the HTTP response cache before scraping
    #[arg(short, long)]
    clear_cache: bool,

    /// Additional output method (default: plain console output)
    #[arg(short, long, value_enum)]
    output: Option<OutputMode>,

    /// Path to a TOML configuration file
    #[arg(long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_or_default(cli.config.as_deref())?;

    setup_logging(cli.verbose, cli.quiet, &config.output.logs_path())?;
    tracing::info!("Scraper started");
    tracing::info!("Command line arguments: {:?}", cli);

    match run(&cli, &config).await {
        Ok(()) => {
            tracing::info!("Scraper finished");
            Ok(())
        }
        Err(e) => {
            tracing::error!("Scraper failed: {}", e);
            Err(e)
        }
    }
}

/// Sets up the logging/tracing subscriber
///
/// Events go to the console (filtered by verbosity) and are appended to
/// `parser.log` in the logs directory.
fn setup_logging(verbose: u8, quiet: bool, logs_dir: &Path) -> anyhow::Result<()> {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("doc_scraper=info,warn"),
            1 => EnvFilter::new("doc_scraper=debug,info"),
            2 => EnvFilter::new("doc_scraper=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    std::fs::create_dir_all(logs_dir)?;
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(logs_dir.join("parser.log"))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false),
        )
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(Mutex::new(log_file)),
        )
        .init();

    Ok(())
}

/// Runs the selected mode and hands its table to the output collaborator
async fn run(cli: &Cli, config: &Config) -> anyhow::Result<()> {
    let session = Session::from_config(config)?;
    if cli.clear_cache {
        session.clear_cache()?;
    }

    let taxonomy = StatusTaxonomy::from_config(config);
    let events = TracingEvents;
    let ctx = ScrapeContext::new(&session, config, &taxonomy, &events);

    match run_mode(cli.mode, &ctx).await? {
        ModeOutcome::Table(table) => {
            control_output(&table, cli.mode, cli.output, &config.output)?;
        }
        ModeOutcome::Saved(path) => {
            tracing::debug!("{} wrote {}", cli.mode, path.display());
        }
        ModeOutcome::Aborted => {
            tracing::warn!("{} produced no results", cli.mode);
        }
    }

    Ok(())
}
