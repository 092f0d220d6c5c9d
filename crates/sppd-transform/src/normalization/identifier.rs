//! Trip number normalization.

use sppd_model::CellValue;

use super::Normalized;

/// Normalizes a raw cell value into a digits-only identifier.
///
/// - numbers render as their integer part (`4120178765.0` -> `4120178765`)
/// - scientific-notation text is expanded (`4.120178765E9` -> `4120178765`)
/// - an integer with a float-style suffix (`"4120178765.0"`) is cut at the `.`
/// - everything else keeps only its ASCII digits
///
/// An empty result means the row has no identifier. It is degraded when the
/// cell was not blank to begin with.
pub fn normalize_identifier(raw: &CellValue) -> Normalized<String> {
    let digits = match raw {
        CellValue::Empty => return Normalized::clean(String::new()),
        CellValue::Number(number) => integer_digits(*number),
        CellValue::Text(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Normalized::clean(String::new());
            }
            identifier_from_text(trimmed)
        }
        CellValue::Date(_) | CellValue::Bool(_) => String::new(),
    };
    if digits.is_empty() {
        Normalized::degraded(digits)
    } else {
        Normalized::clean(digits)
    }
}

/// Keeps at most `max_digits` leading digits of an identifier.
pub fn cap_identifier_digits(identifier: &str, max_digits: usize) -> String {
    identifier.chars().take(max_digits).collect()
}

fn identifier_from_text(text: &str) -> String {
    if is_scientific(text)
        && let Ok(number) = text.parse::<f64>()
    {
        return integer_digits(number);
    }
    let head = match text.split_once('.') {
        Some((whole, fraction)) if is_digits(whole) && is_digits(fraction) => whole,
        _ => text,
    };
    head.chars().filter(char::is_ascii_digit).collect()
}

/// `"4.120178765E+09"` and friends, as spreadsheets render long numbers.
fn is_scientific(text: &str) -> bool {
    text.contains(['e', 'E'])
        && text
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'))
}

/// Non-empty and ASCII digits only. Both halves of a stringified float pass.
fn is_digits(part: &str) -> bool {
    !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit())
}

fn integer_digits(number: f64) -> String {
    if !number.is_finite() {
        return String::new();
    }
    format!("{:.0}", number.abs().trunc())
}
