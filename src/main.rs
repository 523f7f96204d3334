// src/main.rs
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod api;
mod client;
mod config;
mod seed;

use config::{SeedConfig, SeedPlan};

#[derive(Parser)]
#[command(name = "pm-seed")]
#[command(about = "Populate a project-management backend with demo data")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full seed pipeline against a running backend
    Run {
        /// Backend base URL
        #[arg(long, default_value = "http://localhost")]
        base_url: String,
        /// Request timeout in milliseconds
        #[arg(long, default_value_t = 30_000)]
        timeout_ms: u64,
        /// Seed plan file (JSON); defaults to the built-in demo dataset
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Check that the backend is reachable
    Status {
        /// Backend base URL
        #[arg(long, default_value = "http://localhost")]
        base_url: String,
        /// Request timeout in milliseconds
        #[arg(long, default_value_t = 30_000)]
        timeout_ms: u64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            base_url,
            timeout_ms,
            config,
        } => {
            let cfg = SeedConfig { base_url, timeout_ms };
            let plan = match config {
                Some(path) => SeedPlan::load(&path)?,
                None => SeedPlan::default(),
            };
            seed::run(&cfg, &plan).await?;
        }
        Commands::Status { base_url, timeout_ms } => {
            let cfg = SeedConfig { base_url, timeout_ms };
            client::check_status(&cfg).await?;
        }
    }

    Ok(())
}
