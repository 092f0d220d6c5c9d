//! Label helpers shared by the header locator and column resolver.

/// Normalizes a label for fuzzy comparison by lowercasing and replacing
/// separators with spaces.
pub fn normalize_label(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .replace(['_', '-', '.', '/', '\\', ':', '(', ')'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
