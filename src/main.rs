//! CLI entry point for the plane risk rater.
//!
//! Provides subcommands for running the full clean/feature/aggregate
//! pipeline over the two source CSVs, and for cleaning a single source table
//! on its own.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use plane_risk_rater::analyzers::analyzer::run_pipeline;
use plane_risk_rater::analyzers::types::RaterConfig;
use plane_risk_rater::clean::{clean_accidents, clean_inventory};
use plane_risk_rater::features::DangerWeights;
use plane_risk_rater::output::{print_json, write_csv};
use plane_risk_rater::parser::RawTable;
use std::ffi::OsStr;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "plane_risk_rater")]
#[command(about = "Clean aircraft accident and fleet inventory data and rate make/model risk", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full pipeline and write the aggregate risk table
    Rate {
        /// CSV file with raw accident records
        #[arg(short, long)]
        accidents: String,

        /// CSV file with raw fleet inventory records
        #[arg(short, long)]
        inventory: String,

        /// CSV file to write the aggregate table to
        #[arg(short, long, default_value = "risk_table.csv")]
        output: String,

        /// Make/model entries to keep per size bucket
        #[arg(short = 'n', long, default_value_t = 10)]
        top_n: usize,

        /// Weight of the aircraft-damage score in the danger score
        #[arg(long, default_value_t = 0.75)]
        damage_weight: f64,

        /// Weight of the human-injury score in the danger score
        #[arg(long, default_value_t = 0.25)]
        injury_weight: f64,

        /// Also log the aggregate table as pretty JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Clean a single source table and write the cleaned records
    Clean {
        /// Which source the input file comes from
        #[arg(short, long, value_enum)]
        kind: SourceKind,

        /// CSV file with raw records
        #[arg(short, long)]
        source: String,

        /// CSV file to write cleaned records to
        #[arg(short, long, default_value = "cleaned.csv")]
        output: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SourceKind {
    Accidents,
    Inventory,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/plane_risk_rater.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("plane_risk_rater.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Rate {
            accidents,
            inventory,
            output,
            top_n,
            damage_weight,
            injury_weight,
            json,
        } => {
            let config = RaterConfig {
                top_n,
                weights: DangerWeights {
                    aircraft_damage: damage_weight,
                    human_injury: injury_weight,
                },
                ..RaterConfig::default()
            };

            let raw_accidents = RawTable::from_path(&accidents)?;
            let raw_inventory = RawTable::from_path(&inventory)?;
            info!(
                accidents = raw_accidents.len(),
                inventory = raw_inventory.len(),
                "Input tables loaded"
            );

            let rows = run_pipeline(&raw_accidents, &raw_inventory, &config)?;
            if json {
                print_json(&rows)?;
            }
            write_csv(&output, &rows)?;
            info!(output = %output, rows = rows.len(), "Aggregate table written");
        }
        Commands::Clean {
            kind,
            source,
            output,
        } => {
            let raw = RawTable::from_path(&source)?;
            info!(source = %source, rows = raw.len(), "Input table loaded");

            match kind {
                SourceKind::Accidents => {
                    let records = clean_accidents(&raw)?;
                    write_csv(&output, &records)?;
                    info!(output = %output, rows = records.len(), "Cleaned accident table written");
                }
                SourceKind::Inventory => {
                    let records = clean_inventory(&raw)?;
                    write_csv(&output, &records)?;
                    info!(output = %output, rows = records.len(), "Cleaned inventory table written");
                }
            }
        }
    }

    Ok(())
}
