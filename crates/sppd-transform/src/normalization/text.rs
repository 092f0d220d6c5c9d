//! Text field normalization.

use sppd_model::{CellValue, FormatHint};

use super::{Normalized, is_placeholder_text, serial_to_date};

/// Normalizes a raw cell value into a trimmed display string.
///
/// A number in a date-formatted cell renders as its `YYYY-MM-DD` date rather
/// than the serial. Placeholder text (`nan`, `None`, `NULL`, `#N/A`) is
/// empty. A non-finite number is a degraded empty string.
pub fn normalize_text(raw: &CellValue, hint: Option<FormatHint>) -> Normalized<String> {
    match raw {
        CellValue::Number(number) if !number.is_finite() => Normalized::degraded(String::new()),
        CellValue::Number(number) if hint == Some(FormatHint::Date) => {
            match serial_to_date(*number) {
                Some(date) => Normalized::clean(date.format("%Y-%m-%d").to_string()),
                None => Normalized::clean(raw.to_text()),
            }
        }
        CellValue::Text(text) if is_placeholder_text(text) => Normalized::clean(String::new()),
        _ => Normalized::clean(raw.to_text()),
    }
}
