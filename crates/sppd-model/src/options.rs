//! Configuration options for a conversion run.

use serde::{Deserialize, Serialize};

/// Rows scanned for a header when nothing else is configured.
pub const DEFAULT_HEADER_SEARCH_WINDOW: usize = 10;

/// Footer marker used by the known payment attachments (amount in words).
pub const DEFAULT_FOOTER_MARKER: &str = "TERBILANG";

/// How header labels are matched against field aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderMatching {
    /// Exact or substring match against the alias table (case-sensitive).
    #[default]
    Strict,
    /// Strict matching first, then similarity matching for fields that are
    /// still unresolved.
    Lenient,
}

/// Value used for an empty or absent `beneficiary_bank_name`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BankNameFallback {
    /// Leave the field empty.
    #[default]
    Empty,
    /// Use the source name; per-bank sheets are named after the bank.
    SourceName,
}

/// Options controlling one conversion run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionOptions {
    /// Number of leading rows searched for the header row.
    pub header_search_window: usize,

    /// Header label matching strictness.
    pub header_matching: HeaderMatching,

    /// Rows whose first populated cell starts with one of these are footers.
    pub footer_markers: Vec<String>,

    /// Keep only this many leading digits of each trip number.
    pub identifier_max_digits: Option<usize>,

    /// Fallback for a missing beneficiary bank name.
    pub bank_name_fallback: BankNameFallback,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            header_search_window: DEFAULT_HEADER_SEARCH_WINDOW,
            header_matching: HeaderMatching::Strict,
            footer_markers: vec![DEFAULT_FOOTER_MARKER.to_string()],
            identifier_max_digits: None,
            bank_name_fallback: BankNameFallback::Empty,
        }
    }
}

impl ConversionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_header_search_window(mut self, window: usize) -> Self {
        self.header_search_window = window;
        self
    }

    #[must_use]
    pub fn with_header_matching(mut self, matching: HeaderMatching) -> Self {
        self.header_matching = matching;
        self
    }

    /// Adds a footer marker; blank markers are ignored.
    #[must_use]
    pub fn with_footer_marker(mut self, marker: impl Into<String>) -> Self {
        let marker = marker.into();
        let marker = marker.trim();
        if !marker.is_empty() && !self.footer_markers.iter().any(|m| m == marker) {
            self.footer_markers.push(marker.to_string());
        }
        self
    }

    #[must_use]
    pub fn with_identifier_max_digits(mut self, digits: Option<usize>) -> Self {
        self.identifier_max_digits = digits.filter(|d| *d > 0);
        self
    }

    #[must_use]
    pub fn with_bank_name_fallback(mut self, fallback: BankNameFallback) -> Self {
        self.bank_name_fallback = fallback;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = ConversionOptions::default();
        assert_eq!(options.header_search_window, 10);
        assert_eq!(options.header_matching, HeaderMatching::Strict);
        assert_eq!(options.footer_markers, vec!["TERBILANG".to_string()]);
        assert_eq!(options.identifier_max_digits, None);
    }

    #[test]
    fn footer_markers_are_deduplicated() {
        let options = ConversionOptions::new()
            .with_footer_marker("TERBILANG")
            .with_footer_marker("  ")
            .with_footer_marker("TOTAL");
        assert_eq!(options.footer_markers, vec!["TERBILANG", "TOTAL"]);
    }

    #[test]
    fn zero_digit_cap_is_ignored() {
        let options = ConversionOptions::new().with_identifier_max_digits(Some(0));
        assert_eq!(options.identifier_max_digits, None);
    }
}
