//! Column resolution: binding canonical fields to header cells.

use rapidfuzz::distance::jaro_winkler::similarity as jaro_similarity;
use serde::Serialize;
use sppd_model::{CanonicalFieldId, ColumnMap, HeaderMatching, RawCell, SourceRejection};
use tracing::debug;

use crate::aliases::{aliases_for, label_matches};
use crate::utils::normalize_label;

/// Minimum Jaro-Winkler similarity for a lenient match.
pub const SIMILARITY_THRESHOLD: f64 = 0.90;

/// How a field was bound to its column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatchKind {
    /// The label equals an alias.
    Exact,
    /// The label contains an alias.
    Contains,
    /// Lenient fallback on normalized labels.
    Similar { score: f64 },
}

impl MatchKind {
    pub fn describe(&self) -> String {
        match self {
            Self::Exact => "exact".to_string(),
            Self::Contains => "contains".to_string(),
            Self::Similar { score } => format!("similar ({:.0}%)", score * 100.0),
        }
    }
}

/// One resolved field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnMatch {
    pub field: CanonicalFieldId,
    pub column: usize,
    pub label: String,
    pub kind: MatchKind,
}

/// The outcome of resolving one header row.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ColumnResolution {
    pub map: ColumnMap,
    /// Resolved fields in declaration order.
    pub matches: Vec<ColumnMatch>,
    /// Non-empty header labels no field claimed, as `(column, label)`.
    pub unmapped: Vec<(usize, String)>,
}

/// Resolves canonical fields against a header row.
///
/// Fields are visited in declaration order and each claims the first
/// unclaimed cell (by column index) whose label matches one of its aliases.
/// An ambiguous label therefore goes to the earlier-declared field, and no
/// column is ever bound to two fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColumnResolver {
    matching: HeaderMatching,
}

impl ColumnResolver {
    pub fn new(matching: HeaderMatching) -> Self {
        Self { matching }
    }

    pub fn resolve(
        &self,
        header: &[RawCell],
        header_row: usize,
    ) -> Result<ColumnResolution, SourceRejection> {
        let labels: Vec<String> = header.iter().map(RawCell::to_text).collect();
        let mut resolution = ColumnResolution::default();

        for field in CanonicalFieldId::ALL {
            if let Some(found) = strict_match(field, &labels, &resolution.map) {
                resolution.map.insert(field, found.column);
                resolution.matches.push(found);
            }
        }

        if self.matching == HeaderMatching::Lenient {
            for field in CanonicalFieldId::ALL {
                if resolution.map.contains(field) {
                    continue;
                }
                if let Some(found) = similar_match(field, &labels, &resolution.map) {
                    debug!(
                        field = %field,
                        column = found.column,
                        label = %found.label,
                        "lenient header match"
                    );
                    resolution.map.insert(field, found.column);
                    resolution.matches.push(found);
                }
            }
            resolution.matches.sort_by_key(|m| m.field);
        }

        if let Some(missing) = CanonicalFieldId::ALL
            .into_iter()
            .find(|field| field.is_mandatory() && !resolution.map.contains(*field))
        {
            return Err(SourceRejection::MissingMandatoryColumn {
                field: missing,
                header_row,
            });
        }

        resolution.unmapped = labels
            .into_iter()
            .enumerate()
            .filter(|(column, label)| !label.is_empty() && !resolution.map.is_column_claimed(*column))
            .collect();

        Ok(resolution)
    }
}

/// Resolves a header row with strict matching.
pub fn resolve_columns(
    header: &[RawCell],
    header_row: usize,
) -> Result<ColumnResolution, SourceRejection> {
    ColumnResolver::default().resolve(header, header_row)
}

fn strict_match(field: CanonicalFieldId, labels: &[String], map: &ColumnMap) -> Option<ColumnMatch> {
    let aliases = aliases_for(field);
    labels.iter().enumerate().find_map(|(column, label)| {
        if map.is_column_claimed(column) {
            return None;
        }
        if aliases.iter().any(|alias| label == alias) {
            return Some(ColumnMatch {
                field,
                column,
                label: label.clone(),
                kind: MatchKind::Exact,
            });
        }
        aliases
            .iter()
            .any(|alias| label_matches(label, alias))
            .then(|| ColumnMatch {
                field,
                column,
                label: label.clone(),
                kind: MatchKind::Contains,
            })
    })
}

/// Best unclaimed label by similarity to any alias; ties go to the lower
/// column index.
fn similar_match(field: CanonicalFieldId, labels: &[String], map: &ColumnMap) -> Option<ColumnMatch> {
    let aliases: Vec<String> = aliases_for(field).iter().map(|a| normalize_label(a)).collect();
    let mut best: Option<(usize, f64)> = None;

    for (column, label) in labels.iter().enumerate() {
        if label.is_empty() || map.is_column_claimed(column) {
            continue;
        }
        let normalized = normalize_label(label);
        let score = aliases
            .iter()
            .map(|alias| jaro_similarity(normalized.chars(), alias.chars()))
            .fold(0.0_f64, f64::max);
        if score >= SIMILARITY_THRESHOLD && best.is_none_or(|(_, top)| score > top) {
            best = Some((column, score));
        }
    }

    best.map(|(column, score)| ColumnMatch {
        field,
        column,
        label: labels[column].clone(),
        kind: MatchKind::Similar { score },
    })
}
