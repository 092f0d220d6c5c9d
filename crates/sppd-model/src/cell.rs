//! Raw spreadsheet cells as handed over by a workbook reader.
//!
//! The core never opens files. A reader materializes each sheet into a
//! [`RawGrid`] of [`RawCell`]s, keeping the untyped cell value plus an
//! optional display-format hint.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An untyped cell value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Number(f64),
    Date(NaiveDate),
    Bool(bool),
    Empty,
}

impl CellValue {
    /// True for empty cells and whitespace-only text.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(text) => text.trim().is_empty(),
            Self::Number(_) | Self::Date(_) | Self::Bool(_) => false,
        }
    }

    /// Stringified, trimmed rendering of the value.
    ///
    /// Whole numbers render without a fractional part (`4120178765`, not
    /// `4120178765.0`). Non-finite numbers render as an empty string so that
    /// `NaN` never leaks into text output.
    pub fn to_text(&self) -> String {
        match self {
            Self::Text(text) => text.trim().to_string(),
            Self::Number(number) if number.is_finite() => format!("{number}"),
            Self::Number(_) | Self::Empty => String::new(),
            Self::Date(date) => date.format("%Y-%m-%d").to_string(),
            Self::Bool(true) => "TRUE".to_string(),
            Self::Bool(false) => "FALSE".to_string(),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

/// Display-format hint attached to a cell by the reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatHint {
    /// The cell is formatted as a date or date-time.
    Date,
    /// The cell is formatted as a plain number (`General`, `#,##0`, ...).
    Number,
    /// The cell is formatted as text (`@`).
    Text,
}

/// A cell value plus its optional format hint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawCell {
    pub value: CellValue,
    pub hint: Option<FormatHint>,
}

impl RawCell {
    pub fn new(value: impl Into<CellValue>) -> Self {
        Self {
            value: value.into(),
            hint: None,
        }
    }

    pub fn empty() -> Self {
        Self {
            value: CellValue::Empty,
            hint: None,
        }
    }

    /// A serial-day number formatted as a date, as workbook readers report it.
    pub fn date_serial(serial: f64) -> Self {
        Self::new(serial).with_hint(FormatHint::Date)
    }

    #[must_use]
    pub fn with_hint(mut self, hint: FormatHint) -> Self {
        self.hint = Some(hint);
        self
    }

    pub fn is_blank(&self) -> bool {
        self.value.is_blank()
    }

    pub fn to_text(&self) -> String {
        self.value.to_text()
    }

    pub fn is_date_formatted(&self) -> bool {
        self.hint == Some(FormatHint::Date)
    }
}

impl From<CellValue> for RawCell {
    fn from(value: CellValue) -> Self {
        Self::new(value)
    }
}

/// An ordered, possibly ragged, grid of raw cells for one sheet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawGrid {
    rows: Vec<Vec<RawCell>>,
}

impl RawGrid {
    pub fn new(rows: Vec<Vec<RawCell>>) -> Self {
        Self { rows }
    }

    /// Builds a grid of unhinted cells.
    pub fn from_values(rows: Vec<Vec<CellValue>>) -> Self {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(RawCell::new).collect())
                .collect(),
        }
    }

    pub fn push_row(&mut self, row: Vec<RawCell>) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[Vec<RawCell>] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&[RawCell]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Cell at `(row, column)`; cells past the end of a short row are absent.
    pub fn cell(&self, row: usize, column: usize) -> Option<&RawCell> {
        self.rows.get(row).and_then(|cells| cells.get(column))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A named grid, typically one worksheet of a workbook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSource {
    pub name: String,
    pub grid: RawGrid,
}

impl RawSource {
    pub fn new(name: impl Into<String>, grid: RawGrid) -> Self {
        Self {
            name: name.into(),
            grid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_numbers_render_without_fraction() {
        assert_eq!(CellValue::Number(4120178765.0).to_text(), "4120178765");
        assert_eq!(CellValue::Number(12.5).to_text(), "12.5");
        assert_eq!(CellValue::Number(f64::NAN).to_text(), "");
    }

    #[test]
    fn blank_detection() {
        assert!(CellValue::Empty.is_blank());
        assert!(CellValue::from("   ").is_blank());
        assert!(!CellValue::Number(0.0).is_blank());
        assert!(!CellValue::from("x").is_blank());
    }

    #[test]
    fn ragged_rows_have_absent_cells() {
        let grid = RawGrid::from_values(vec![
            vec![CellValue::from("a"), CellValue::from("b")],
            vec![CellValue::from("c")],
        ]);
        assert_eq!(grid.len(), 2);
        assert!(grid.cell(1, 1).is_none());
        assert_eq!(grid.cell(0, 1).map(RawCell::to_text), Some("b".to_string()));
    }
}
