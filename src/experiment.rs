//! Run aggregation over the full text stream
//!
//! Each text unit is processed end-to-end before the next begins: one typo,
//! a treatment evaluation of the corrupted text, a control evaluation of the
//! pristine text (the false-positive-rate baseline), one detail row, both
//! arms' counters. A cumulative treatment progress line goes to stdout after
//! every trial.

use rand::Rng;
use std::io::{self, Write};
use tracing::info;

use crate::error::Result;
use crate::evaluator::Evaluator;
use crate::report::{self, DetailReport};
use crate::stats::RunningStats;
use crate::typo::TypoGenerator;
use crate::types::TrialRecord;

/// Final state of one full run
#[derive(Debug, Clone)]
pub struct ExperimentSummary {
    pub treatment: RunningStats,
    pub control: RunningStats,
    /// Total trial count (text units evaluated through both arms)
    pub analyzed: u64,
}

/// Drives both evaluation arms over a stream of text units
pub struct Experiment<R: Rng> {
    evaluator: Evaluator,
    typos: TypoGenerator<R>,
    progress: bool,
}

impl<R: Rng> Experiment<R> {
    pub fn new(evaluator: Evaluator, typos: TypoGenerator<R>) -> Self {
        Self {
            evaluator,
            typos,
            progress: true,
        }
    }

    /// Enable or disable the per-trial stdout progress line
    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    /// Run both arms over the stream, writing one detail row per trial
    pub async fn run<I, W>(
        &mut self,
        queries: I,
        report: &mut DetailReport<W>,
    ) -> Result<ExperimentSummary>
    where
        I: IntoIterator<Item = String>,
        W: Write,
    {
        let mut treatment = RunningStats::new();
        let mut control = RunningStats::new();
        let mut stdout = io::stdout();

        report.write_header()?;

        for query in queries {
            if query.is_empty() {
                continue;
            }

            let typo_query = self.typos.make_typo(&query);
            let treatment_outcome = self.evaluator.evaluate(&query, &typo_query).await;
            let control_outcome = self.evaluator.evaluate(&query, &query).await;

            treatment.record(&treatment_outcome);
            control.record(&control_outcome);

            if self.progress {
                report::write_progress(&mut stdout, &treatment.summary())?;
            }

            report.write_row(&TrialRecord {
                query,
                typo_query,
                treatment: treatment_outcome,
                control: control_outcome,
            })?;
        }

        let analyzed = treatment.analyzed;
        info!("Run complete: {} trials", analyzed);
        Ok(ExperimentSummary {
            treatment,
            control,
            analyzed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::speller::SpellChecker;
    use crate::types::CorrectionResult;
    use async_trait::async_trait;
    use std::collections::HashMap;

    /// Speller answering from a fixed script, default result otherwise
    struct ScriptedSpeller {
        answers: HashMap<String, CorrectionResult>,
    }

    #[async_trait]
    impl SpellChecker for ScriptedSpeller {
        fn name(&self) -> &'static str {
            "scripted"
        }

        async fn check(&self, query: &str) -> CorrectionResult {
            self.answers.get(query).cloned().unwrap_or_default()
        }
    }

    fn experiment(answers: HashMap<String, CorrectionResult>) -> Experiment<rand::rngs::StdRng> {
        let evaluator = Evaluator::new(Box::new(ScriptedSpeller { answers }), 50000);
        Experiment::new(evaluator, TypoGenerator::from_seed(1)).with_progress(false)
    }

    #[tokio::test]
    async fn test_empty_units_are_skipped() {
        let mut run = experiment(HashMap::new());
        let mut report = DetailReport::new(Vec::new());

        let summary = run
            .run(
                vec!["".to_string(), "москва".to_string(), "".to_string()],
                &mut report,
            )
            .await
            .unwrap();

        assert_eq!(summary.analyzed, 1);
        assert_eq!(summary.treatment.analyzed, 1);
        assert_eq!(summary.control.analyzed, 1);
    }

    #[tokio::test]
    async fn test_zero_trial_run() {
        let mut run = experiment(HashMap::new());
        let mut report = DetailReport::new(Vec::new());

        let summary = run.run(Vec::<String>::new(), &mut report).await.unwrap();

        assert_eq!(summary.analyzed, 0);
        // header only
        let text = String::from_utf8(report.into_inner()).unwrap();
        assert_eq!(text.lines().count(), 1);
    }

    #[tokio::test]
    async fn test_one_row_per_trial() {
        let mut run = experiment(HashMap::new());
        let mut report = DetailReport::new(Vec::new());

        run.run(
            vec!["москва".to_string(), "тверь".to_string()],
            &mut report,
        )
        .await
        .unwrap();

        let text = String::from_utf8(report.into_inner()).unwrap();
        assert_eq!(text.lines().count(), 3);
    }
}
