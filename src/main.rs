//! Launchboard CLI
//!
//! Serve the dashboard, validate a dataset, or emit a config template.
//!
//! # Configuration
//!
//! Settings come from a TOML file (see `launchboard config`), with
//! environment variable overrides:
//! - `LAUNCHBOARD_CSV_PATH`: Path to the launch CSV
//! - `LAUNCHBOARD_HOST`: Host to bind to (default: 0.0.0.0)
//! - `LAUNCHBOARD_PORT`: Port to listen on (default: 8050)
//! - `LAUNCHBOARD_LOG_LEVEL` / `LAUNCHBOARD_LOG_FORMAT`: Logging
//! - `RUST_LOG`: Full tracing filter (wins over the config level)

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use launchboard::api::{serve, ApiConfig, AppState};
use launchboard::config::{generate_default_config, Config, LoggingConfig};
use launchboard::data::load_csv;

#[derive(Parser)]
#[command(name = "launchboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Interactive launch records dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file path (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load the dataset and serve the dashboard
    Serve {
        /// Path to the launch CSV (overrides config)
        #[arg(long)]
        csv: Option<PathBuf>,
        /// Host to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Load and validate a dataset, print a summary, and exit
    Check {
        /// Path to the launch CSV (overrides config)
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };

    match cli.command {
        Commands::Serve { csv, host, port } => {
            init_logging(&config.logging);
            tracing::info!("Launchboard v{}", env!("CARGO_PKG_VERSION"));

            let csv_path = csv.unwrap_or_else(|| config.data.csv_path.clone());
            let table = load_csv(&csv_path)
                .with_context(|| format!("Failed to load dataset from {:?}", csv_path))?;

            let api_config = ApiConfig::new(
                host.unwrap_or_else(|| config.server.host.clone()),
                port.unwrap_or(config.server.port),
            );

            let state = AppState::new(Arc::new(table), api_config.clone());
            serve(state, &api_config).await?;

            tracing::info!("Launchboard stopped");
        }

        Commands::Check { csv } => {
            init_logging(&config.logging);

            let csv_path = csv.unwrap_or_else(|| config.data.csv_path.clone());
            let table = load_csv(&csv_path)
                .with_context(|| format!("Failed to load dataset from {:?}", csv_path))?;

            let (min_payload, max_payload) = table.payload_bounds();
            println!("Dataset: {:?}", csv_path);
            println!("Records: {}", table.len());
            println!("Sites:");
            for site in table.sites() {
                let total = table.records().iter().filter(|r| r.site == site).count();
                let successes = table
                    .records()
                    .iter()
                    .filter(|r| r.site == site && r.is_success())
                    .count();
                println!("  {} ({} launches, {} successful)", site, total, successes);
            }
            println!("Payload range: {} - {} kg", min_payload, max_payload);
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("Failed to write config to {:?}", path))?;
                    println!("Wrote default config to {:?}", path);
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

/// Initialize the tracing subscriber from the logging config
fn init_logging(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!(
            "launchboard={},tower_http=info",
            logging.level
        ))
    });

    let registry = tracing_subscriber::registry().with(filter);
    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
