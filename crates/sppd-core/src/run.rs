//! Conversion runs over an ordered list of sources.

use sppd_model::{CanonicalRecord, ConversionOptions, RawSource, RunReport, SkipReason, SourceReport};
use tracing::{debug, info, info_span, trace, warn};

use crate::dedupe::DuplicateGuard;
use crate::extract::{RowOutcome, SourceExtraction, extract_source};

/// Records and accounting produced by one run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversionOutput {
    pub records: Vec<CanonicalRecord>,
    pub report: RunReport,
}

/// State for one conversion invocation.
///
/// Sources are processed to completion one at a time, in the order they are
/// given. Duplicate suppression spans every source of the run and nothing
/// else: a new run starts with no remembered trip numbers.
#[derive(Debug)]
pub struct ConversionRun {
    options: ConversionOptions,
    guard: DuplicateGuard,
    records: Vec<CanonicalRecord>,
    report: RunReport,
}

impl ConversionRun {
    pub fn new(options: ConversionOptions) -> Self {
        Self {
            options,
            guard: DuplicateGuard::new(),
            records: Vec::new(),
            report: RunReport::new(),
        }
    }

    pub fn options(&self) -> &ConversionOptions {
        &self.options
    }

    /// Converts one source and appends its records.
    ///
    /// A rejected source contributes no records, only a report entry.
    pub fn process_source(&mut self, source: &RawSource) -> &SourceReport {
        let span = info_span!("source", source = %source.name);
        let _enter = span.enter();

        let report = match extract_source(source, &self.options) {
            Ok(extraction) => self.accept(&source.name, extraction),
            Err(rejection) => {
                warn!(%rejection, "source rejected");
                SourceReport::rejected(&source.name, rejection)
            }
        };
        self.report.push(report)
    }

    /// Records emitted so far.
    pub fn records(&self) -> &[CanonicalRecord] {
        &self.records
    }

    pub fn finish(self) -> ConversionOutput {
        info!(
            sources = self.report.per_source.len(),
            rejected = self.report.rejected().count(),
            records = self.records.len(),
            "conversion finished"
        );
        ConversionOutput {
            records: self.records,
            report: self.report,
        }
    }

    fn accept(&mut self, source_name: &str, extraction: SourceExtraction) -> SourceReport {
        let mut report = SourceReport::new(source_name);
        report.header_row = Some(extraction.layout.header_row);
        info!(
            header_row = extraction.layout.header_row,
            columns = extraction.layout.resolution.map.len(),
            "header resolved"
        );

        for row in extraction.rows {
            report.rows_seen += 1;
            match row.outcome {
                RowOutcome::Skipped(reason) => {
                    debug!(row = row.row, reason = reason.as_str(), "row skipped");
                    report.record_skip(reason);
                }
                RowOutcome::Record { record, degraded } => {
                    if !self.guard.admit(&record.trip_number) {
                        debug!(
                            row = row.row,
                            trip_number = %record.trip_number,
                            "duplicate trip number skipped"
                        );
                        report.record_skip(SkipReason::Duplicate);
                        continue;
                    }
                    for field in degraded {
                        trace!(row = row.row, %field, "field degraded to default");
                        report.record_degraded(field);
                    }
                    report.rows_emitted += 1;
                    self.records.push(record);
                }
            }
        }

        info!(
            rows_seen = report.rows_seen,
            rows_emitted = report.rows_emitted,
            skipped = report.skipped_total(),
            degraded = report.degraded_total(),
            "source converted"
        );
        report
    }
}

/// Converts `sources` in order with a fresh run.
pub fn convert(sources: &[RawSource], options: &ConversionOptions) -> ConversionOutput {
    let mut run = ConversionRun::new(options.clone());
    for source in sources {
        run.process_source(source);
    }
    run.finish()
}
