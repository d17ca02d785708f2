use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

mod crawl;

#[derive(Debug, Parser)]
#[command(name = "findus")]
#[command(about = "Tesla Korea charging station crawler")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Crawl the vendor locator and export the stations found.
    Crawl {
        /// Which charger listings to crawl.
        #[arg(value_enum, default_value_t = Target::All)]
        target: Target,
        /// Write the stations as pretty-printed JSON to this path.
        #[arg(long, value_name = "PATH")]
        json: Option<PathBuf>,
        /// Write the stations as CSV to this path.
        #[arg(long, value_name = "PATH")]
        csv: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Target {
    Supercharger,
    Destination,
    All,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = findus_core::load_app_config()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Crawl { target, json, csv } => {
            crawl::run_crawl(&config, target, json.as_deref(), csv.as_deref()).await
        }
    }
}
