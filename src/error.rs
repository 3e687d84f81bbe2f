//! Error types for Spellprobe

use thiserror::Error;

/// Result type alias using Spellprobe's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in Spellprobe
#[derive(Error, Debug)]
pub enum Error {
    #[error("Source error: {0}")]
    Source(#[from] rusqlite::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
