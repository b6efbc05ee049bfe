use std::path::PathBuf;

use clap::Parser;

use crewroster::{ingest, Config, ScheduleConfig};

#[derive(Parser)]
#[command(
    name = "crewroster",
    about = "Reconstruct a crew schedule from scanned-roster OCR text"
)]
struct Cli {
    /// Roster text file (reads stdin when omitted).
    input: Option<PathBuf>,

    /// Override the assumed schedule year.
    #[arg(long)]
    year: Option<i32>,

    /// Override the assumed schedule month (1-12).
    #[arg(long)]
    month: Option<u32>,

    /// Pretty-print the resulting schedule JSON.
    #[arg(long)]
    pretty: bool,

    /// Log at debug level (stderr; stdout carries only the schedule JSON).
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(%err, "config load failed, using built-in defaults");
            Config::defaults()
        }
    };
    let schedule_config = ScheduleConfig::new(
        cli.year.unwrap_or(config.schedule.year),
        cli.month.unwrap_or(config.schedule.month),
    )?;

    let raw = ingest::read_input(cli.input.as_deref())?;
    let schedule = ingest::parse_schedule(&raw, &schedule_config);

    if schedule.is_empty() {
        tracing::warn!("no schedule entries recognized in input");
    } else {
        tracing::info!(entries = schedule.len(), "schedule entries found");
    }

    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&schedule)?
    } else {
        serde_json::to_string(&schedule)?
    };
    println!("{rendered}");
    Ok(())
}
