//! Configuration management and validation.
//!
//! Provides the configuration structure for finder queries: which dataset
//! file to load and how many stations to return in the top-K ranking.

use crate::constants::{DEFAULT_DATASET_FILE, DEFAULT_TOP_K};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// Finder configuration for dataset location and ranking parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinderConfig {
    /// Path to the station dataset CSV file
    pub dataset_path: PathBuf,

    /// Number of stations to return in the top-K ranking
    pub top_k: usize,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(DEFAULT_DATASET_FILE),
            top_k: DEFAULT_TOP_K,
        }
    }
}

impl FinderConfig {
    /// Create a configuration, falling back to defaults for unspecified values
    pub fn new(dataset_path: Option<PathBuf>, top_k: Option<usize>) -> Self {
        let config = Self {
            dataset_path: dataset_path.unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET_FILE)),
            top_k: top_k.unwrap_or(DEFAULT_TOP_K),
        };
        debug!("Finder configuration: {:?}", config);
        config
    }

    /// Validate configuration values for consistency
    pub fn validate(&self) -> Result<()> {
        if self.top_k == 0 {
            return Err(Error::configuration(
                "top_k must be at least 1".to_string(),
            ));
        }

        if self.dataset_path.as_os_str().is_empty() {
            return Err(Error::configuration(
                "dataset path cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
