//! NeurIPS paper harvester
//!
//! Fetches metadata (title, authors, abstract, year, source URL) for every
//! paper published at NeurIPS and persists the result as a single JSON
//! dataset. Detail pages are fetched with bounded concurrency; per-paper
//! failures degrade to an empty abstract instead of aborting the batch.
//!
//! # Example
//!
//! ```no_run
//! use neurips_harvest::{client::PageClient, config::Config, harvest::Harvester};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::default();
//!     let client = PageClient::new(&config)?;
//!     let harvester = Harvester::new(client, &config);
//!
//!     let papers = harvester.harvest_year(2019).await?;
//!     println!("{} papers", papers.len());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod executor;
pub mod harvest;
pub mod models;
pub mod parse;
pub mod store;

pub use client::PageClient;
pub use config::Config;
pub use error::{FetchError, HarvestError, StoreError};
pub use harvest::Harvester;
pub use store::DatasetStore;
