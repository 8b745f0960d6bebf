//! raincheck CLI
//!
//! Invoked with no subcommands, typically from a scheduler tick: evaluates
//! the gate, fetches the forecast, and sends the verdict to the configured
//! channels. `--force` skips the gate for manual checks.

#![allow(clippy::print_stdout)]
#![allow(clippy::print_stderr)]

use std::path::PathBuf;
use std::sync::Arc;

use application::services::{CheckOutcome, CheckRun, CheckService};
use clap::Parser;
use domain::entities::WeatherReport;
use infrastructure::{
    AppConfig, DesktopChannel, FileRunMarker, NeaForecastAdapter, TelegramChannel,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Evening rain check for the bike commute home
#[derive(Parser)]
#[command(name = "raincheck")]
#[command(author, version, about = "Checks the NEA forecast and warns when rain is coming", long_about = None)]
struct Cli {
    /// Path to the configuration file (default: raincheck.toml, if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Run even before the earliest time or when already ran today
    #[arg(long)]
    force: bool,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Console divider, same width the original used
fn separator() -> String {
    "=".repeat(50)
}

/// One-line console verdict
const fn verdict_line(rainy: bool) -> &'static str {
    if rainy {
        "🚨 RAIN DETECTED - Bike safely!"
    } else {
        "✅ Clear weather - Safe to bike!"
    }
}

/// Console note for a channel that rejected the alert
fn failure_line(channel: &str, error: &str) -> String {
    format!("⚠️  {channel} notification failed: {error}")
}

/// Render a completed run for the console
fn render_run(report: &WeatherReport, failures: &[(String, String)]) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(&report.header());
    out.push('\n');
    out.push_str(&separator());
    out.push('\n');
    for line in report.body_lines() {
        out.push_str(&line);
        out.push('\n');
    }
    out.push_str(&separator());
    out.push('\n');
    out.push_str(verdict_line(report.is_rainy()));
    out.push('\n');
    for (channel, error) in failures {
        out.push_str(&failure_line(channel, error));
        out.push('\n');
    }
    out
}

/// Collect the failed channels of a run as printable pairs
fn collect_failures(run: &CheckRun) -> Vec<(String, String)> {
    run.failed_channels()
        .map(|d| {
            (
                d.channel().to_string(),
                d.error().map_or_else(String::new, ToString::to_string),
            )
        })
        .collect()
}

/// Wire the pipeline from configuration
fn build_service(config: &AppConfig) -> anyhow::Result<CheckService> {
    let watchlist = config.watch.watchlist()?;
    let keywords = config.watch.keywords()?;
    let gate = config.gate.policy()?;

    let forecasts = NeaForecastAdapter::with_config(config.feed.clone())?;
    let marker = FileRunMarker::new(config.state.resolve_marker_path());

    let mut service = CheckService::new(
        Arc::new(forecasts),
        Arc::new(marker),
        watchlist,
        keywords,
        gate,
    );

    if config.desktop.enabled {
        service = service.with_channel(Arc::new(DesktopChannel::new(
            config.desktop.notifier_config(),
        )));
    } else {
        info!("Desktop channel disabled in configuration");
    }

    match config.telegram.as_ref() {
        Some(section) => match section.client_config() {
            Some(telegram_config) => {
                service =
                    service.with_channel(Arc::new(TelegramChannel::new(telegram_config)?));
            },
            None => {
                warn!(
                    "[telegram] section is incomplete (bot_token and chat_id are both required), skipping Telegram"
                );
            },
        },
        None => {
            info!("No [telegram] section, skipping Telegram");
        },
    }

    Ok(service)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity; RUST_LOG wins when set
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(log_filter_from_verbosity(cli.verbose))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match cli.config.as_deref() {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Configuration error: {e}");
            std::process::exit(1);
        },
    };

    let service = build_service(&config)?;

    if cli.force {
        match service.force_run().await {
            Ok(run) => print!("{}", render_run(&run.report, &collect_failures(&run))),
            Err(e) => {
                eprintln!("❌ Rain check failed: {e}");
                std::process::exit(1);
            },
        }
        return Ok(());
    }

    match service.run().await {
        Ok(CheckOutcome::Completed(run)) => {
            print!("{}", render_run(&run.report, &collect_failures(&run)));
        },
        Ok(CheckOutcome::SkippedTooEarly { earliest }) => {
            println!("Too early - runs after {} only", earliest.format("%H:%M"));
        },
        Ok(CheckOutcome::SkippedAlreadyRan { date }) => {
            println!("Already ran today ({date}) - skipping");
        },
        Err(e) => {
            eprintln!("❌ Rain check failed: {e}");
            std::process::exit(1);
        },
    }

    Ok(())
}
