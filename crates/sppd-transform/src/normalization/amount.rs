//! Currency amount normalization.

use sppd_model::CellValue;

use super::Normalized;

/// Normalizes a raw cell value into whole, non-negative currency units.
///
/// Text keeps only its ASCII digits, so the currency prefix, thousands
/// separators (`,` and `.`), spaces, and sign characters all drop out:
/// `"Rp 1.234.567"`, `"1,234,567"` and `"1234567"` are the same amount.
/// Numbers lose their fractional part and sign.
///
/// Blank input is a clean zero. Text without any digit, non-finite numbers,
/// and values that overflow `u64` are a degraded zero.
pub fn normalize_amount(raw: &CellValue) -> Normalized<u64> {
    match raw {
        CellValue::Empty => Normalized::clean(0),
        CellValue::Number(number) => amount_from_number(*number),
        CellValue::Text(text) => amount_from_text(text),
        CellValue::Date(_) | CellValue::Bool(_) => Normalized::degraded(0),
    }
}

fn amount_from_number(number: f64) -> Normalized<u64> {
    let whole = number.abs().trunc();
    // 2^64 and above would saturate the cast.
    if !whole.is_finite() || whole >= u64::MAX as f64 {
        return Normalized::degraded(0);
    }
    Normalized::clean(whole as u64)
}

fn amount_from_text(text: &str) -> Normalized<u64> {
    if text.trim().is_empty() {
        return Normalized::clean(0);
    }
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return Normalized::degraded(0);
    }
    match digits.parse::<u64>() {
        Ok(amount) => Normalized::clean(amount),
        Err(_) => Normalized::degraded(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separators_and_currency_are_ignored() {
        for input in ["Rp 1.234.567", "1,234,567", "1234567", "Rp1,234,567 ", "IDR 1 234 567"] {
            assert_eq!(
                normalize_amount(&CellValue::from(input)),
                Normalized::clean(1_234_567),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn numbers_are_truncated() {
        assert_eq!(normalize_amount(&CellValue::Number(1_500_000.0)).value, 1_500_000);
        assert_eq!(normalize_amount(&CellValue::Number(2500.99)).value, 2500);
        assert_eq!(normalize_amount(&CellValue::Number(-750.0)).value, 750);
    }

    #[test]
    fn blank_is_clean_zero() {
        assert_eq!(normalize_amount(&CellValue::Empty), Normalized::clean(0));
        assert_eq!(normalize_amount(&CellValue::from("   ")), Normalized::clean(0));
    }

    #[test]
    fn unusable_input_is_degraded_zero() {
        assert_eq!(normalize_amount(&CellValue::from("Rp -")), Normalized::degraded(0));
        assert_eq!(normalize_amount(&CellValue::Number(f64::NAN)), Normalized::degraded(0));
        assert_eq!(
            normalize_amount(&CellValue::from("99999999999999999999999")),
            Normalized::degraded(0)
        );
        assert_eq!(normalize_amount(&CellValue::Bool(true)), Normalized::degraded(0));
    }

    #[test]
    fn oversized_numbers_are_degraded_like_oversized_text() {
        assert_eq!(normalize_amount(&CellValue::Number(1e25)), Normalized::degraded(0));
        assert_eq!(normalize_amount(&CellValue::Number(-1e25)), Normalized::degraded(0));
        assert_eq!(
            normalize_amount(&CellValue::from("10000000000000000000000000")),
            Normalized::degraded(0)
        );
        assert_eq!(
            normalize_amount(&CellValue::Number(9_007_199_254_740_992.0)),
            Normalized::clean(9_007_199_254_740_992)
        );
    }
}
