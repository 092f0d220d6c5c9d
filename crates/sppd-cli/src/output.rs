//! Canonical CSV and JSON run report writers.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use sppd_model::{CanonicalRecord, ConversionOptions, RunReport, SourceReport};

/// Writes records as CSV with the canonical header, in record order.
pub fn write_records<W: Write>(writer: W, records: &[CanonicalRecord]) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(CanonicalRecord::header())
        .context("write CSV header")?;
    for record in records {
        csv.write_record(record.to_row())
            .with_context(|| format!("write record {}", record.trip_number))?;
    }
    csv.flush().context("flush CSV output")?;
    Ok(())
}

/// Renders records as a CSV string.
pub fn render_csv(records: &[CanonicalRecord]) -> Result<String> {
    let mut buffer = Vec::new();
    write_records(&mut buffer, records)?;
    String::from_utf8(buffer).context("CSV output is not UTF-8")
}

/// Writes records to `path`, or to stdout when `path` is `None`.
pub fn write_records_to(path: Option<&Path>, records: &[CanonicalRecord]) -> Result<()> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("create output file {}", path.display()))?;
            write_records(BufWriter::new(file), records)
        }
        None => write_records(io::stdout().lock(), records),
    }
}

/// Conversion status of one source in the JSON report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceStatus {
    Converted,
    Rejected,
}

#[derive(Debug, Serialize)]
pub struct SourceEntry<'a> {
    pub status: SourceStatus,
    #[serde(flatten)]
    pub report: &'a SourceReport,
}

/// The JSON run report document.
#[derive(Debug, Serialize)]
pub struct ReportDocument<'a> {
    pub inputs: &'a [PathBuf],
    pub options: &'a ConversionOptions,
    pub rows_seen: usize,
    pub rows_emitted: usize,
    pub per_source: Vec<SourceEntry<'a>>,
}

impl<'a> ReportDocument<'a> {
    pub fn new(inputs: &'a [PathBuf], options: &'a ConversionOptions, report: &'a RunReport) -> Self {
        let per_source = report
            .per_source
            .iter()
            .map(|source| SourceEntry {
                status: if source.is_rejected() {
                    SourceStatus::Rejected
                } else {
                    SourceStatus::Converted
                },
                report: source,
            })
            .collect();
        Self {
            inputs,
            options,
            rows_seen: report.rows_seen(),
            rows_emitted: report.rows_emitted(),
            per_source,
        }
    }
}

/// Writes the run report as pretty-printed JSON.
pub fn write_report(path: &Path, document: &ReportDocument<'_>) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("create report file {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, document)
        .with_context(|| format!("write report {}", path.display()))?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
