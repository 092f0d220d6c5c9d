//! Delimited text (CSV/TSV) reading.

use std::path::Path;

use csv::ReaderBuilder;
use sppd_model::{CellValue, RawCell, RawGrid, RawSource};
use tracing::debug;

use crate::error::{IngestError, Result};

const UTF8_BOM: char = '\u{feff}';

/// Reads a delimited text file as a single source named after the file stem.
///
/// Every record is kept, including title rows above the header, and records
/// may have different lengths. Blank lines are not records. Cells are
/// untyped text; blank cells are empty.
pub fn read_delimited(path: &Path, delimiter: u8) -> Result<RawSource> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_path(path)
        .map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;

    let mut grid = RawGrid::default();
    for (index, record) in reader.records().enumerate() {
        let record = record.map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        let cells = record
            .iter()
            .enumerate()
            .map(|(column, field)| {
                let field = if index == 0 && column == 0 {
                    field.trim_start_matches(UTF8_BOM)
                } else {
                    field
                };
                text_cell(field)
            })
            .collect();
        grid.push_row(cells);
    }

    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    debug!(source = %name, rows = grid.len(), "delimited file read");
    Ok(RawSource::new(name, grid))
}

fn text_cell(field: &str) -> RawCell {
    if field.trim().is_empty() {
        RawCell::empty()
    } else {
        RawCell::new(CellValue::Text(field.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fields_become_empty_cells() {
        assert!(matches!(text_cell("   ").value, CellValue::Empty));
        assert_eq!(text_cell(" 42 ").value, CellValue::Text(" 42 ".to_string()));
    }
}
