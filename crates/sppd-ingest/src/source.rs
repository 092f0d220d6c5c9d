//! Input file dispatch and sheet selection.

use std::path::{Path, PathBuf};

use sppd_model::RawSource;
use tracing::info;

use crate::delimited::read_delimited;
use crate::error::{IngestError, Result};
use crate::workbook::read_workbook;

/// Which sheets of a workbook to read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SheetSelection {
    /// Every sheet, in workbook order.
    #[default]
    All,
    /// Only these sheets, in this order.
    Named(Vec<String>),
}

impl SheetSelection {
    /// `All` for an empty list, otherwise the named sheets.
    pub fn from_names(names: Vec<String>) -> Self {
        if names.is_empty() {
            Self::All
        } else {
            Self::Named(names)
        }
    }
}

/// Container format of an input file, by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Workbook,
    Delimited { delimiter: u8 },
}

impl SourceFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Ok(Self::Workbook),
            "csv" => Ok(Self::Delimited { delimiter: b',' }),
            "tsv" => Ok(Self::Delimited { delimiter: b'\t' }),
            _ => Err(IngestError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension,
            }),
        }
    }
}

/// Reads one input file into sources.
///
/// The sheet selection applies to workbooks only; a delimited file is always
/// one source.
pub fn read_path(path: &Path, selection: &SheetSelection) -> Result<Vec<RawSource>> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let sources = match SourceFormat::from_path(path)? {
        SourceFormat::Workbook => read_workbook(path, selection)?,
        SourceFormat::Delimited { delimiter } => vec![read_delimited(path, delimiter)?],
    };
    info!(path = %path.display(), sources = sources.len(), "input read");
    Ok(sources)
}

/// Reads every input file, concatenating their sources in argument order.
pub fn read_sources(paths: &[PathBuf], selection: &SheetSelection) -> Result<Vec<RawSource>> {
    let mut sources = Vec::new();
    for path in paths {
        sources.extend(read_path(path, selection)?);
    }
    Ok(sources)
}
