//! Core types used throughout Spellprobe

use serde::{Deserialize, Serialize};

/// One correction returned by the spell service for a single query.
///
/// The default value (empty correction, zero rate) doubles as the degraded
/// result when the service is unreachable or its response is incomplete.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectionResult {
    /// Corrected text proposed by the service, empty when none
    pub correction: String,
    /// Opaque confidence score; ordinal only, higher means more confident
    pub rate: i64,
}

impl CorrectionResult {
    pub fn new(correction: impl Into<String>, rate: i64) -> Self {
        Self {
            correction: correction.into(),
            rate,
        }
    }
}

/// Outcome of evaluating one query through one arm
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialOutcome {
    /// Correction text the service returned (empty when none)
    pub fixed_query: String,
    /// Confidence score the service returned
    pub rate: i64,
    /// The service claimed a confident fix
    pub server_fixed: bool,
    /// The resulting text matches the known-correct original
    pub really_fixed: bool,
}

impl TrialOutcome {
    /// Service claimed a fix but the result is wrong
    pub fn false_positive(&self) -> bool {
        self.server_fixed && !self.really_fixed
    }

    /// Service claimed nothing but the result is correct
    pub fn false_negative(&self) -> bool {
        !self.server_fixed && self.really_fixed
    }
}

/// One detail-report row: a text unit evaluated through both arms
#[derive(Debug, Clone)]
pub struct TrialRecord {
    /// Known-correct original text
    pub query: String,
    /// Corrupted variant submitted to the treatment arm
    pub typo_query: String,
    /// Treatment arm outcome (service saw the corrupted text)
    pub treatment: TrialOutcome,
    /// Control arm outcome (service saw the original text)
    pub control: TrialOutcome,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_correction_is_degraded_result() {
        let result = CorrectionResult::default();
        assert_eq!(result.correction, "");
        assert_eq!(result.rate, 0);
    }

    #[test]
    fn test_fp_fn_never_both() {
        // exhaustive over the four cells
        for server_fixed in [false, true] {
            for really_fixed in [false, true] {
                let outcome = TrialOutcome {
                    fixed_query: String::new(),
                    rate: 0,
                    server_fixed,
                    really_fixed,
                };
                assert!(!(outcome.false_positive() && outcome.false_negative()));
            }
        }
    }

    #[test]
    fn test_true_positive_is_unflagged() {
        let outcome = TrialOutcome {
            fixed_query: "москва".to_string(),
            rate: 60000,
            server_fixed: true,
            really_fixed: true,
        };
        assert!(!outcome.false_positive());
        assert!(!outcome.false_negative());
    }
}
