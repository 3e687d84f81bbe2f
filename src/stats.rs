//! Per-arm running statistics and summary formatting

use crate::types::TrialOutcome;

/// Monotone outcome counters for one evaluation arm
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunningStats {
    /// Trials where the service claimed a confident fix
    pub server_fixed: u64,
    /// Trials where the resulting text matched the original
    pub really_fixed: u64,
    /// Claimed but wrong
    pub false_positives: u64,
    /// Correct but unclaimed
    pub false_negatives: u64,
    /// Trials seen by this arm
    pub analyzed: u64,
}

impl RunningStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one trial outcome
    pub fn record(&mut self, outcome: &TrialOutcome) {
        self.analyzed += 1;
        if outcome.server_fixed {
            self.server_fixed += 1;
        }
        if outcome.really_fixed {
            self.really_fixed += 1;
        }
        if outcome.false_positive() {
            self.false_positives += 1;
        }
        if outcome.false_negative() {
            self.false_negatives += 1;
        }
    }

    /// Format the one-line summary. Fixed-rate percentages carry 4 decimal
    /// places, false-positive/negative rates 6; a zero-trial run reports 0%.
    pub fn summary(&self) -> String {
        let mut out = format!(
            "analyzed: {}, server_fixed: {} ({:.4}%), really_fixed: {} ({:.4}%)",
            self.analyzed,
            self.server_fixed,
            self.percent(self.server_fixed),
            self.really_fixed,
            self.percent(self.really_fixed),
        );
        if self.false_positives != 0 || self.false_negatives != 0 {
            out.push_str(&format!(
                " ( false_positive: {} ({:.6}%), false_neg: {} ({:.6}%) )",
                self.false_positives,
                self.percent(self.false_positives),
                self.false_negatives,
                self.percent(self.false_negatives),
            ));
        }
        out
    }

    fn percent(&self, count: u64) -> f64 {
        if self.analyzed == 0 {
            0.0
        } else {
            100.0 * count as f64 / self.analyzed as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(server_fixed: bool, really_fixed: bool) -> TrialOutcome {
        TrialOutcome {
            fixed_query: String::new(),
            rate: 0,
            server_fixed,
            really_fixed,
        }
    }

    #[test]
    fn test_record_counts_all_cells() {
        let mut stats = RunningStats::new();
        stats.record(&outcome(true, true)); // true positive
        stats.record(&outcome(true, false)); // false positive
        stats.record(&outcome(false, true)); // false negative
        stats.record(&outcome(false, false)); // true negative

        assert_eq!(stats.analyzed, 4);
        assert_eq!(stats.server_fixed, 2);
        assert_eq!(stats.really_fixed, 2);
        assert_eq!(stats.false_positives, 1);
        assert_eq!(stats.false_negatives, 1);
    }

    #[test]
    fn test_summary_formatting() {
        let stats = RunningStats {
            server_fixed: 3,
            really_fixed: 2,
            false_positives: 1,
            false_negatives: 0,
            analyzed: 10,
        };
        assert_eq!(
            stats.summary(),
            "analyzed: 10, server_fixed: 3 (30.0000%), really_fixed: 2 (20.0000%) \
             ( false_positive: 1 (10.000000%), false_neg: 0 (0.000000%) )"
        );
    }

    #[test]
    fn test_summary_omits_fp_fn_when_both_zero() {
        let stats = RunningStats {
            server_fixed: 3,
            really_fixed: 3,
            false_positives: 0,
            false_negatives: 0,
            analyzed: 10,
        };
        assert_eq!(
            stats.summary(),
            "analyzed: 10, server_fixed: 3 (30.0000%), really_fixed: 3 (30.0000%)"
        );
    }

    #[test]
    fn test_zero_trial_summary_does_not_divide_by_zero() {
        let stats = RunningStats::new();
        assert_eq!(
            stats.summary(),
            "analyzed: 0, server_fixed: 0 (0.0000%), really_fixed: 0 (0.0000%)"
        );
    }
}
