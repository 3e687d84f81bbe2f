//! Run configuration with file loading and per-field defaults
//!
//! Every magic value (service address, confidence threshold, row limit,
//! output paths) lives here and is passed into constructors explicitly.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Default spell service endpoint
pub const DEFAULT_SPELLER_ADDRESS: &str = "http://localhost:8080";

/// Default confidence threshold for counting a correction as claimed
pub const DEFAULT_SPELLER_THRESHOLD: i64 = 50000;

/// Default cap on source rows read per run
pub const DEFAULT_DATA_LIMIT: i64 = 1000;

/// Spell service connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpellerConfig {
    /// Base URL of the spell service
    pub address: String,
    /// Minimum confidence rate for a correction to count as claimed
    pub threshold: i64,
}

impl Default for SpellerConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_SPELLER_ADDRESS.to_string(),
            threshold: DEFAULT_SPELLER_THRESHOLD,
        }
    }
}

/// Sample-data source settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Path to the sqlite database holding address paths
    pub database: PathBuf,
    /// Maximum number of rows to read
    pub limit: i64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            database: PathBuf::from("addresses.db"),
            limit: DEFAULT_DATA_LIMIT,
        }
    }
}

/// Output file locations
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Per-trial tab-separated detail report
    pub report: PathBuf,
    /// Two-line final summary
    pub summary: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            report: PathBuf::from("out.txt"),
            summary: PathBuf::from("stats.txt"),
        }
    }
}

/// Complete run configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub speller: SpellerConfig,
    pub source: SourceConfig,
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a JSON file, filling missing fields with defaults
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that cannot drive a run
    pub fn validate(&self) -> Result<()> {
        if self.speller.address.is_empty() {
            return Err(Error::Config("speller address must not be empty".into()));
        }
        if self.source.limit < 0 {
            return Err(Error::Config(format!(
                "row limit must be non-negative, got {}",
                self.source.limit
            )));
        }
        Ok(())
    }
}
