//! Monthly Expense Report - Main Entry Point

use anyhow::Result;
use clap::Parser;
use expense_common::{init_default_logging, init_logging, LoggingConfig, ReportPeriod};
use expense_config::{Config, ConfigError, ConfigLoader};
use expense_report::ReportPipeline;
use std::path::PathBuf;
use tracing::{error, info};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, env = "EXPENSE_REPORT_CONFIG")]
    config: Option<PathBuf>,

    /// Log level, overriding the configured one
    #[arg(short, long)]
    log_level: Option<String>,

    /// Fetch only the first N records with a single request
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=100))]
    limit: Option<u32>,
}

fn load_config(args: &Args) -> Result<Config, ConfigError> {
    match &args.config {
        Some(path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            // Configured logging is unavailable, report on the console
            let fallback = match &args.log_level {
                Some(level) => init_logging(LoggingConfig {
                    level: level.clone(),
                    ..LoggingConfig::default()
                }),
                None => init_default_logging(),
            };
            if let Err(log_err) = fallback {
                eprintln!("Failed to initialize logging: {}", log_err);
            }
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let mut logging = LoggingConfig::from(&config.logging);
    if let Some(level) = &args.log_level {
        logging.level = level.clone();
    }
    init_logging(logging)?;

    let period = ReportPeriod::current();
    info!("Starting monthly expense report for {}", period);

    let pipeline = match ReportPipeline::from_config(&config) {
        Ok(pipeline) => pipeline,
        Err(e) => {
            error!("Failed to set up report pipeline: {}", e);
            return Err(e.into());
        }
    };

    match pipeline.run(period, args.limit).await {
        Ok(summary) => {
            info!(
                "Sent {} covering {} expenses ({} fetched)",
                summary.report_file, summary.rows_in_period, summary.records_fetched
            );
            Ok(())
        }
        Err(e) => {
            error!("Report run failed: {}", e);
            Err(e.into())
        }
    }
}
