//! Per-source and per-run accounting of every skip and degrade decision.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::SourceRejection;
use crate::field::CanonicalFieldId;

/// Structural reasons a data row produces no record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Every cell in the row is blank.
    Empty,
    /// The row starts with a footer/summary marker.
    Footer,
    /// The trip number normalizes to nothing.
    NoIdentifier,
    /// The trip number was already emitted earlier in the run.
    Duplicate,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Footer => "footer",
            Self::NoIdentifier => "no_identifier",
            Self::Duplicate => "duplicate",
        }
    }
}

/// Counters for one source.
///
/// For a converted source,
/// `rows_seen == rows_emitted + skipped_empty + skipped_footer
/// + skipped_no_identifier + skipped_duplicate`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceReport {
    pub source: String,
    /// 0-based header row index, when one was found.
    pub header_row: Option<usize>,
    pub rejection: Option<SourceRejection>,
    pub rows_seen: usize,
    pub rows_emitted: usize,
    pub skipped_empty: usize,
    pub skipped_no_identifier: usize,
    pub skipped_duplicate: usize,
    pub skipped_footer: usize,
    /// Fields that fell back to their safe default, per field.
    pub degraded: BTreeMap<CanonicalFieldId, usize>,
}

impl SourceReport {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            ..Self::default()
        }
    }

    pub fn rejected(source: impl Into<String>, rejection: SourceRejection) -> Self {
        Self {
            source: source.into(),
            rejection: Some(rejection),
            ..Self::default()
        }
    }

    pub fn is_rejected(&self) -> bool {
        self.rejection.is_some()
    }

    pub fn record_skip(&mut self, reason: SkipReason) {
        *self.skip_counter(reason) += 1;
    }

    pub fn record_degraded(&mut self, field: CanonicalFieldId) {
        *self.degraded.entry(field).or_insert(0) += 1;
    }

    pub fn skipped(&self, reason: SkipReason) -> usize {
        match reason {
            SkipReason::Empty => self.skipped_empty,
            SkipReason::Footer => self.skipped_footer,
            SkipReason::NoIdentifier => self.skipped_no_identifier,
            SkipReason::Duplicate => self.skipped_duplicate,
        }
    }

    pub fn skipped_total(&self) -> usize {
        self.skipped_empty + self.skipped_footer + self.skipped_no_identifier + self.skipped_duplicate
    }

    pub fn degraded_total(&self) -> usize {
        self.degraded.values().sum()
    }

    fn skip_counter(&mut self, reason: SkipReason) -> &mut usize {
        match reason {
            SkipReason::Empty => &mut self.skipped_empty,
            SkipReason::Footer => &mut self.skipped_footer,
            SkipReason::NoIdentifier => &mut self.skipped_no_identifier,
            SkipReason::Duplicate => &mut self.skipped_duplicate,
        }
    }
}

/// Report for a whole run, in source processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    pub per_source: Vec<SourceReport>,
}

impl RunReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a source report and returns it.
    pub fn push(&mut self, report: SourceReport) -> &SourceReport {
        let index = self.per_source.len();
        self.per_source.push(report);
        &self.per_source[index]
    }

    pub fn source(&self, name: &str) -> Option<&SourceReport> {
        self.per_source.iter().find(|report| report.source == name)
    }

    pub fn rejected(&self) -> impl Iterator<Item = &SourceReport> {
        self.per_source.iter().filter(|report| report.is_rejected())
    }

    pub fn rows_seen(&self) -> usize {
        self.per_source.iter().map(|report| report.rows_seen).sum()
    }

    pub fn rows_emitted(&self) -> usize {
        self.per_source.iter().map(|report| report.rows_emitted).sum()
    }

    pub fn skipped(&self, reason: SkipReason) -> usize {
        self.per_source.iter().map(|report| report.skipped(reason)).sum()
    }

    pub fn degraded_total(&self) -> usize {
        self.per_source.iter().map(SourceReport::degraded_total).sum()
    }
}
