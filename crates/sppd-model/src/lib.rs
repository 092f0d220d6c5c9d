//! Data model for SPPD expense conversion.
//!
//! - **cell**: raw grid handed over by a workbook reader
//! - **field**: canonical field identifiers and the column map
//! - **record**: the canonical output record
//! - **report**: per-source skip/degrade accounting
//! - **options**: run configuration
//! - **error**: source-level rejection

pub mod cell;
pub mod error;
pub mod field;
pub mod options;
pub mod record;
pub mod report;

pub use cell::{CellValue, FormatHint, RawCell, RawGrid, RawSource};
pub use error::SourceRejection;
pub use field::{CanonicalFieldId, ColumnMap, FieldKind};
pub use options::{
    BankNameFallback, ConversionOptions, DEFAULT_FOOTER_MARKER, DEFAULT_HEADER_SEARCH_WINDOW,
    HeaderMatching,
};
pub use record::CanonicalRecord;
pub use report::{RunReport, SkipReason, SourceReport};
