//! Spellprobe - quality evaluation harness for a remote spell-correction service
//!
//! Corrupts known-correct text samples with synthetic typos, submits both the
//! corrupted and pristine text to the service, and tabulates how often the
//! service detects and correctly repairs the corruption.

pub mod config;
pub mod error;
pub mod evaluator;
pub mod experiment;
pub mod report;
pub mod source;
pub mod speller;
pub mod stats;
pub mod typo;
pub mod types;

pub use error::{Error, Result};
pub use types::*;

/// Re-export the main pipeline components for convenience
pub use config::Config;
pub use evaluator::Evaluator;
pub use experiment::{Experiment, ExperimentSummary};
pub use report::DetailReport;
pub use source::AddressSource;
pub use speller::{HttpSpeller, SpellChecker};
pub use stats::RunningStats;
pub use typo::TypoGenerator;
