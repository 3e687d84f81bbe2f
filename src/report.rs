//! Detail report and summary file output
//!
//! The detail report is a UTF-8 tab-separated file with one row per trial,
//! flushed as it is written so an aborted run leaves a usable partial
//! artifact. The summary file carries one line per arm.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::types::{TrialOutcome, TrialRecord};

/// Column order of the detail report
pub const REPORT_HEADER: [&str; 10] = [
    "query",
    "typo_query",
    "fixed_query",
    "treatment_rate",
    "treatment_server_fixed",
    "treatment_really_fixed",
    "control_fixed_query",
    "control_rate",
    "control_server_fixed",
    "control_really_fixed",
];

/// Incremental tab-separated detail report writer
pub struct DetailReport<W: Write> {
    out: W,
}

impl DetailReport<BufWriter<File>> {
    /// Create (truncating) the report file at the given path
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> DetailReport<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write the header row
    pub fn write_header(&mut self) -> Result<()> {
        writeln!(self.out, "{}", REPORT_HEADER.join("\t"))?;
        self.out.flush()?;
        Ok(())
    }

    /// Write one trial row and flush it
    pub fn write_row(&mut self, record: &TrialRecord) -> Result<()> {
        let mut fields = vec![record.query.clone(), record.typo_query.clone()];
        fields.extend(arm_fields(&record.treatment));
        fields.extend(arm_fields(&record.control));
        writeln!(self.out, "{}", fields.join("\t"))?;
        self.out.flush()?;
        Ok(())
    }

    /// Consume the writer, returning the underlying sink
    pub fn into_inner(self) -> W {
        self.out
    }
}

fn arm_fields(outcome: &TrialOutcome) -> [String; 4] {
    [
        outcome.fixed_query.clone(),
        outcome.rate.to_string(),
        flag(outcome.server_fixed),
        flag(outcome.really_fixed),
    ]
}

fn flag(value: bool) -> String {
    if value { "1" } else { "0" }.to_string()
}

/// Write the two-line run summary file
pub fn write_summary<P: AsRef<Path>>(path: P, treatment: &str, control: &str) -> Result<()> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    writeln!(out, "Treatment: {treatment}")?;
    writeln!(out, "Control: {control}")?;
    out.flush()?;
    Ok(())
}

/// Write the one-line cumulative progress indicator, overwriting in place
pub fn write_progress(out: &mut impl Write, summary: &str) -> io::Result<()> {
    write!(out, "\r Treatment: {summary}")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> TrialRecord {
        TrialRecord {
            query: "москва".to_string(),
            typo_query: "моъсква".to_string(),
            treatment: TrialOutcome {
                fixed_query: "москва".to_string(),
                rate: 60000,
                server_fixed: true,
                really_fixed: true,
            },
            control: TrialOutcome {
                fixed_query: String::new(),
                rate: 0,
                server_fixed: false,
                really_fixed: true,
            },
        }
    }

    #[test]
    fn test_header_row() {
        let mut report = DetailReport::new(Vec::new());
        report.write_header().unwrap();
        let text = String::from_utf8(report.into_inner()).unwrap();
        assert_eq!(
            text,
            "query\ttypo_query\tfixed_query\ttreatment_rate\ttreatment_server_fixed\t\
             treatment_really_fixed\tcontrol_fixed_query\tcontrol_rate\t\
             control_server_fixed\tcontrol_really_fixed\n"
        );
    }

    #[test]
    fn test_row_layout() {
        let mut report = DetailReport::new(Vec::new());
        report.write_row(&record()).unwrap();
        let text = String::from_utf8(report.into_inner()).unwrap();
        assert_eq!(
            text,
            "москва\tмоъсква\tмосква\t60000\t1\t1\t\t0\t0\t1\n"
        );
    }

    #[test]
    fn test_rows_are_one_line_per_trial() {
        let mut report = DetailReport::new(Vec::new());
        report.write_header().unwrap();
        report.write_row(&record()).unwrap();
        report.write_row(&record()).unwrap();
        let text = String::from_utf8(report.into_inner()).unwrap();
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn test_progress_line_overwrites_in_place() {
        let mut buf = Vec::new();
        write_progress(&mut buf, "analyzed: 1").unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with('\r'));
        assert!(!text.ends_with('\n'));
    }
}
