//! Dataset persistence.
//!
//! The dataset is a single JSON array of papers, written pretty-printed for
//! human diffability. Saves go through a temporary sibling file renamed
//! over the destination, so a reader of the final path never observes a
//! truncated dataset.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::StoreResult;
use crate::models::Dataset;

/// Loads and saves the persisted paper collection.
#[derive(Debug, Clone)]
pub struct DatasetStore {
    path: PathBuf,
}

impl DatasetStore {
    /// Create a store over the given dataset path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The dataset file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted dataset, or an empty one if no file exists yet.
    pub fn load(&self) -> StoreResult<Dataset> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no existing dataset");
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Save the full dataset, replacing prior content only once the new
    /// content has been fully written.
    pub fn save(&self, papers: &Dataset) -> StoreResult<()> {
        let serialized = serde_json::to_string_pretty(papers)?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serialized)?;
        fs::rename(&tmp, &self.path)?;

        debug!(path = %self.path.display(), papers = papers.len(), "dataset saved");
        Ok(())
    }
}
