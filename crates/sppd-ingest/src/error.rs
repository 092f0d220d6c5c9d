//! Error types for reading SPPD source files.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading source files.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("input file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// The file extension is neither a workbook nor a delimited text format.
    #[error("unsupported input format '{extension}': {path}")]
    UnsupportedFormat { path: PathBuf, extension: String },

    #[error("failed to open workbook {path}: {source}")]
    Workbook {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    #[error("failed to read sheet '{sheet}' in {path}: {source}")]
    SheetRead {
        path: PathBuf,
        sheet: String,
        #[source]
        source: calamine::Error,
    },

    #[error("sheet '{sheet}' not found in {path}")]
    SheetNotFound { path: PathBuf, sheet: String },

    #[error("failed to read CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = IngestError::SheetNotFound {
            path: PathBuf::from("/data/sppd.xlsx"),
            sheet: "BNI".to_string(),
        };
        assert_eq!(err.to_string(), "sheet 'BNI' not found in /data/sppd.xlsx");

        let err = IngestError::UnsupportedFormat {
            path: PathBuf::from("notes.txt"),
            extension: "txt".to_string(),
        };
        assert_eq!(err.to_string(), "unsupported input format 'txt': notes.txt");
    }
}
