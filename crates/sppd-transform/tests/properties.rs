//! Property tests for the normalizers.

use chrono::NaiveDate;
use proptest::prelude::*;
use sppd_model::{CellValue, FormatHint};
use sppd_transform::{
    date_to_serial, normalize_amount, normalize_date, normalize_identifier, serial_to_date,
};

proptest! {
    #[test]
    fn serial_round_trips(serial in 1i64..=2_958_465) {
        let date = serial_to_date(serial as f64).unwrap();
        prop_assert_eq!(date_to_serial(date), serial);
        let normalized = normalize_date(&CellValue::Number(serial as f64), None);
        prop_assert_eq!(normalized.value, Some(date));
        prop_assert!(!normalized.degraded);
    }

    #[test]
    fn canonical_text_is_a_fixed_point(days in 0u64..100_000) {
        let date = NaiveDate::from_ymd_opt(1900, 1, 1)
            .unwrap()
            .checked_add_days(chrono::Days::new(days))
            .unwrap();
        let text = date.format("%Y-%m-%d").to_string();
        let result = normalize_date(&CellValue::from(text.as_str()), Some(FormatHint::Text));
        prop_assert_eq!(result.value, Some(date));
        prop_assert!(!result.degraded);
    }

    #[test]
    fn grouped_amounts_match_plain_digits(amount in 0u64..1_000_000_000_000) {
        let plain = amount.to_string();
        let mut grouped = String::new();
        for (i, ch) in plain.chars().enumerate() {
            if i > 0 && (plain.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(ch);
        }
        let prefixed = format!("Rp {grouped}");
        prop_assert_eq!(normalize_amount(&CellValue::from(prefixed.as_str())).value, amount);
        prop_assert_eq!(normalize_amount(&CellValue::from(plain.as_str())).value, amount);
    }

    #[test]
    fn identifiers_are_digits_only(input in "\\PC{0,24}") {
        let result = normalize_identifier(&CellValue::from(input.as_str()));
        prop_assert!(result.value.chars().all(|c| c.is_ascii_digit()));
        if result.value.is_empty() && !input.trim().is_empty() {
            prop_assert!(result.degraded);
        }
    }

    #[test]
    fn float_identifiers_lose_the_suffix(id in 1u64..10_000_000_000) {
        let rendered = format!("{id}.0");
        prop_assert_eq!(normalize_identifier(&CellValue::from(rendered.as_str())).value, id.to_string());
        prop_assert_eq!(normalize_identifier(&CellValue::Number(id as f64)).value, id.to_string());
    }
}
