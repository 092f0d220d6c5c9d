//! Normalization functions for raw cell values.

pub mod amount;
pub mod date;
pub mod identifier;
pub mod text;

pub use amount::normalize_amount;
pub use date::{MAX_SERIAL_DAY, date_to_serial, normalize_date, serial_epoch, serial_to_date};
pub use identifier::{cap_identifier_digits, normalize_identifier};
pub use text::normalize_text;

/// A normalized value and whether it is a fallback for unusable input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized<T> {
    pub value: T,
    /// True when non-empty input could not be converted and `value` is the
    /// field's safe default.
    pub degraded: bool,
}

impl<T> Normalized<T> {
    pub fn clean(value: T) -> Self {
        Self {
            value,
            degraded: false,
        }
    }

    pub fn degraded(value: T) -> Self {
        Self {
            value,
            degraded: true,
        }
    }

    pub fn into_value(self) -> T {
        self.value
    }
}

/// Spreadsheet and dataframe placeholders that mean "no value".
pub(crate) fn is_placeholder_text(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.eq_ignore_ascii_case("nan")
        || trimmed.eq_ignore_ascii_case("none")
        || trimmed.eq_ignore_ascii_case("null")
        || trimmed.eq_ignore_ascii_case("#n/a")
}
