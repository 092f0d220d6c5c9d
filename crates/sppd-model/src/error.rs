use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::field::CanonicalFieldId;

/// Why a whole source was excluded from the output.
///
/// Scoped to one source: the run carries on with the remaining sources.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum SourceRejection {
    #[error("no header row found within the first {window} rows")]
    HeaderNotFound { window: usize },
    #[error("no column matches mandatory field `{field}` in header row {header_row}")]
    MissingMandatoryColumn {
        field: CanonicalFieldId,
        header_row: usize,
    },
}
