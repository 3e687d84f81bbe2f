//! Trial evaluation: claims test, normalization, outcome classification
//!
//! Two independent judgments per trial: did the service claim a confident
//! fix, and does the resulting text actually match the original. Crossing
//! them yields the four outcome cells; the false-positive and false-negative
//! flags are the two disagreement cells.

use strsim::jaro_winkler;
use tracing::debug;

use crate::speller::SpellChecker;
use crate::types::{CorrectionResult, TrialOutcome};

/// Similarity above which a wrong correction gets a near-miss debug line
const NEAR_MISS_SIMILARITY: f64 = 0.85;

/// Evaluates single trials against a spell-correction backend
pub struct Evaluator {
    speller: Box<dyn SpellChecker>,
    threshold: i64,
}

impl Evaluator {
    pub fn new(speller: Box<dyn SpellChecker>, threshold: i64) -> Self {
        Self { speller, threshold }
    }

    /// Submit one query and classify the service's answer against the
    /// known-correct original
    pub async fn evaluate(&self, original: &str, query: &str) -> TrialOutcome {
        let result = self.speller.check(query).await;
        self.classify(original, query, result)
    }

    /// Pure classification of one service response
    pub fn classify(
        &self,
        original: &str,
        query: &str,
        result: CorrectionResult,
    ) -> TrialOutcome {
        let server_fixed = server_claims_fixed(&result, self.threshold);

        // with no correction the service leaves the query as-is, so that is
        // the text the "really fixed" judgment must be made against
        let candidate = if result.correction.is_empty() {
            query
        } else {
            &result.correction
        };
        let really_fixed = normalize(original) == normalize(candidate);

        if server_fixed && !really_fixed {
            let similarity = jaro_winkler(&normalize(original), &normalize(&result.correction));
            if similarity >= NEAR_MISS_SIMILARITY {
                debug!(
                    "Near miss: {:?} -> {:?} (similarity: {:.2})",
                    original, result.correction, similarity
                );
            }
        }

        TrialOutcome {
            fixed_query: result.correction,
            rate: result.rate,
            server_fixed,
            really_fixed,
        }
    }
}

/// The service claims a fix when it returned a correction at or above the
/// confidence threshold
pub fn server_claims_fixed(result: &CorrectionResult, threshold: i64) -> bool {
    !result.correction.is_empty() && result.rate >= threshold
}

/// Lowercase and fold ё into е; the service never distinguishes the two
pub fn normalize(text: &str) -> String {
    text.to_lowercase().replace('ё', "е")
}
