//! CLI entry point for the bike-share statistics tool.
//!
//! Loads one city's trip log, narrows it to a month and/or weekday, and
//! reports travel times, station popularity, trip durations and rider
//! demographics.

use anyhow::{Context, Result};
use bikeshare_stats::{
    analyzers::analyzer::build_report,
    config::Settings,
    filter::apply,
    loader::load_city,
    model::{DayOfWeek, FilterSelection, Month, Selector},
    output::{print_pretty, render_json},
};
use clap::{Parser, Subcommand, ValueEnum};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "bikeshare_stats")]
#[command(about = "Descriptive statistics over city bike-share trip logs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Pretty,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute all statistics for a city, optionally narrowed to a month and weekday
    Analyze {
        /// City to analyze (e.g. "Chicago", "new_york_city")
        #[arg(short, long)]
        city: String,

        /// Month: jan..dec, full name, 1-12, or "all"
        #[arg(short, long, default_value = "all")]
        month: Selector<Month>,

        /// Weekday: mo..su, mon..sun, full name, 1-7 (Monday = 1), or "all"
        #[arg(short, long, default_value = "all")]
        day: Selector<DayOfWeek>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Pretty)]
        format: Format,

        #[command(flatten)]
        source: SourceArgs,
    },
    /// List the cities known to the catalog
    ListCities {
        /// JSON city catalog (overrides BIKESHARE_CATALOG)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

#[derive(clap::Args)]
struct SourceArgs {
    /// Directory holding the trip logs (overrides BIKESHARE_DATA_DIR)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Base URL to download trip logs from instead (overrides BIKESHARE_DATA_URL)
    #[arg(long)]
    data_url: Option<String>,

    /// JSON city catalog (overrides BIKESHARE_CATALOG)
    #[arg(long)]
    catalog: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/bikeshare_stats.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("bikeshare_stats.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            city,
            month,
            day,
            format,
            source,
        } => {
            let settings = Settings::resolve(source.data_dir, source.data_url, source.catalog);
            let selection = FilterSelection::new(month, day);
            analyze(&settings, &city, selection, format).await?;
        }
        Commands::ListCities { catalog } => {
            let settings = Settings::resolve(None, None, catalog);
            let catalog = settings.catalog()?;

            for entry in catalog.iter() {
                info!(city = %entry.name, file = %entry.file, "City");
            }
            info!(total = catalog.len(), "City list summary");
        }
    }

    Ok(())
}

/// Loads, filters and summarizes one city's trips, then renders the report.
#[tracing::instrument(skip(settings, format), fields(month = %selection.month, weekday = %selection.weekday))]
async fn analyze(
    settings: &Settings,
    city: &str,
    selection: FilterSelection,
    format: Format,
) -> Result<()> {
    let catalog = settings.catalog()?;
    let source = settings.source()?;

    let dataset = load_city(&catalog, source.as_ref(), city)
        .await
        .with_context(|| format!("loading trip data for {city}"))?;
    let filtered = Arc::new(apply(&dataset, &selection));

    let report = build_report(city, selection, filtered).await?;

    match format {
        Format::Pretty => print_pretty(&report),
        Format::Json => println!("{}", render_json(&report)?),
    }

    Ok(())
}
