//! NeurIPS paper harvester - entry point.
//!
//! `create` rebuilds the dataset from every conference year; `add <year>`
//! harvests one year and appends it to the existing dataset.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use neurips_harvest::client::PageClient;
use neurips_harvest::config::{Config, site};
use neurips_harvest::harvest::{self, Harvester};
use neurips_harvest::store::DatasetStore;

#[derive(Parser, Debug)]
#[command(name = "neurips-harvest")]
#[command(about = "Harvest NeurIPS paper metadata into a JSON dataset")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Dataset file path
    #[arg(long, global = true, default_value = site::DATASET_FILE)]
    dataset: PathBuf,

    /// Maximum in-flight detail-page requests
    #[arg(long, global = true, default_value_t = site::DETAIL_CONCURRENCY)]
    concurrency: usize,

    /// Fetch detail pages one at a time instead of concurrently
    #[arg(long, global = true)]
    sequential: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info", env = "RUST_LOG")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rebuild the dataset from every conference year
    Create {
        /// Last year to harvest (defaults to the previous calendar year)
        #[arg(long)]
        last_year: Option<i32>,
    },
    /// Harvest one year and append it to the existing dataset
    Add {
        /// Conference year to harvest
        year: i32,
    },
}

fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().compact())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli.log_level);

    let config = Config {
        dataset_path: cli.dataset,
        detail_concurrency: cli.concurrency,
        sequential: cli.sequential,
        ..Config::default()
    };

    let client = PageClient::new(&config)?;
    let harvester = Harvester::new(client, &config);
    let store = DatasetStore::new(&config.dataset_path);

    match cli.command {
        Command::Create { last_year } => {
            let last = last_year.unwrap_or_else(harvest::default_last_year);
            let papers = harvester.harvest_all(last).await?;
            store.save(&papers)?;
            println!("Harvested {} papers through {}", papers.len(), last);
        }
        Command::Add { year } => {
            let mut papers = store.load()?;
            println!("Loaded {} papers from {}", papers.len(), store.path().display());

            let added = harvester.harvest_year(year).await?;
            println!("Added {} papers from {}", added.len(), year);

            papers.extend(added);
            store.save(&papers)?;
        }
    }

    Ok(())
}
