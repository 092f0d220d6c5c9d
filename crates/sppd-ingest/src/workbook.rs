//! Spreadsheet workbook reading via calamine.

use std::path::Path;

use calamine::{Data, Range, Reader, open_workbook_auto};
use sppd_model::{CellValue, FormatHint, RawCell, RawGrid, RawSource};
use tracing::debug;

use crate::error::{IngestError, Result};
use crate::source::SheetSelection;

/// Reads the selected sheets of a workbook, one source per sheet.
///
/// Named sheets are returned in the requested order; a missing name is an
/// error rather than a silently empty source.
pub fn read_workbook(path: &Path, selection: &SheetSelection) -> Result<Vec<RawSource>> {
    let mut workbook = open_workbook_auto(path).map_err(|source| IngestError::Workbook {
        path: path.to_path_buf(),
        source,
    })?;
    let available = workbook.sheet_names();

    let names = match selection {
        SheetSelection::All => available,
        SheetSelection::Named(names) => {
            if let Some(missing) = names.iter().find(|name| !available.contains(name)) {
                return Err(IngestError::SheetNotFound {
                    path: path.to_path_buf(),
                    sheet: missing.clone(),
                });
            }
            names.clone()
        }
    };

    let mut sources = Vec::with_capacity(names.len());
    for name in names {
        let range = workbook
            .worksheet_range(&name)
            .map_err(|source| IngestError::SheetRead {
                path: path.to_path_buf(),
                sheet: name.clone(),
                source,
            })?;
        let grid = range_to_grid(&range);
        debug!(sheet = %name, rows = grid.len(), "sheet read");
        sources.push(RawSource::new(name, grid));
    }
    Ok(sources)
}

/// Converts a calamine range into a grid anchored at A1.
///
/// Ranges start at their first used cell, so leading empty rows and columns
/// are restored to keep row indices equal to sheet row numbers minus one.
pub(crate) fn range_to_grid(range: &Range<Data>) -> RawGrid {
    let Some((start_row, start_col)) = range.start() else {
        return RawGrid::default();
    };
    let mut grid = RawGrid::default();
    for _ in 0..start_row {
        grid.push_row(Vec::new());
    }
    for row in range.rows() {
        let mut cells = vec![RawCell::empty(); start_col as usize];
        cells.extend(row.iter().map(convert_cell));
        grid.push_row(cells);
    }
    grid
}

fn convert_cell(data: &Data) -> RawCell {
    match data {
        Data::Empty | Data::Error(_) => RawCell::empty(),
        Data::String(text) | Data::DurationIso(text) => RawCell::new(text.as_str()),
        Data::Int(value) => RawCell::new(*value as f64).with_hint(FormatHint::Number),
        Data::Float(value) => RawCell::new(*value).with_hint(FormatHint::Number),
        Data::Bool(value) => RawCell::new(CellValue::Bool(*value)),
        Data::DateTime(value) if value.is_duration() => {
            RawCell::new(value.as_f64()).with_hint(FormatHint::Number)
        }
        Data::DateTime(value) => RawCell::date_serial(value.as_f64()),
        Data::DateTimeIso(text) => RawCell::new(text.as_str()).with_hint(FormatHint::Date),
    }
}
