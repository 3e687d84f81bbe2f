//! Spellprobe CLI: run one evaluation pass and write the reports

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use spellprobe::config::Config;
use spellprobe::evaluator::Evaluator;
use spellprobe::experiment::Experiment;
use spellprobe::report::{self, DetailReport};
use spellprobe::source::AddressSource;
use spellprobe::speller::HttpSpeller;
use spellprobe::typo::TypoGenerator;

#[derive(Parser, Debug)]
#[command(about = "Evaluate a remote spell-correction service against typo'd text samples")]
struct Args {
    /// Path to a JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Spell service base URL
    #[arg(long)]
    address: Option<String>,

    /// Confidence threshold for counting a correction as claimed
    #[arg(long)]
    threshold: Option<i64>,

    /// Path to the sqlite database with address samples
    #[arg(long)]
    database: Option<PathBuf>,

    /// Maximum number of source rows to read
    #[arg(long)]
    limit: Option<i64>,

    /// Detail report output path
    #[arg(long)]
    report: Option<PathBuf>,

    /// Summary output path
    #[arg(long)]
    summary: Option<PathBuf>,

    /// Seed for the typo generator (random when omitted)
    #[arg(long)]
    seed: Option<u64>,
}

impl Args {
    fn into_config(self) -> anyhow::Result<(Config, Option<u64>)> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)
                .with_context(|| format!("failed to load config from {}", path.display()))?,
            None => Config::default(),
        };
        if let Some(address) = self.address {
            config.speller.address = address;
        }
        if let Some(threshold) = self.threshold {
            config.speller.threshold = threshold;
        }
        if let Some(database) = self.database {
            config.source.database = database;
        }
        if let Some(limit) = self.limit {
            config.source.limit = limit;
        }
        if let Some(report) = self.report {
            config.output.report = report;
        }
        if let Some(summary) = self.summary {
            config.output.summary = summary;
        }
        Ok((config, self.seed))
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_env("SPELLPROBE_LOG"))
        .init();

    let (config, seed) = Args::parse().into_config()?;

    let source = AddressSource::open(&config.source.database, config.source.limit)
        .with_context(|| {
            format!(
                "failed to open address source {}",
                config.source.database.display()
            )
        })?;

    let speller = HttpSpeller::new(config.speller.address.clone());
    let evaluator = Evaluator::new(Box::new(speller), config.speller.threshold);
    let typos = match seed {
        Some(seed) => TypoGenerator::from_seed(seed),
        None => TypoGenerator::from_entropy(),
    };

    info!(
        "Evaluating {} against {}",
        config.source.database.display(),
        config.speller.address
    );

    let mut run = Experiment::new(evaluator, typos);
    let mut detail = DetailReport::create(&config.output.report)?;
    let summary = run.run(source.text_units()?, &mut detail).await?;

    let treatment = summary.treatment.summary();
    let control = summary.control.summary();

    println!();
    println!("Treatment: {treatment}");
    println!("Control: {control}");

    report::write_summary(&config.output.summary, &treatment, &control)?;
    println!("Done");

    Ok(())
}
