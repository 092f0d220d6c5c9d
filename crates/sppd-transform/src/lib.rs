//! SPPD cell value normalization.
//!
//! Every function here is total: malformed input falls back to the field's
//! safe default and reports the fallback through [`Normalized::degraded`] so
//! callers can count it.
//!
//! - **date**: structured dates, serial day numbers, and best-effort strings
//! - **amount**: currency strings to whole non-negative units
//! - **identifier**: trip numbers to digits-only strings
//! - **text**: trimmed display strings

pub mod normalization;

pub use normalization::{
    Normalized, cap_identifier_digits, date_to_serial, normalize_amount, normalize_date,
    normalize_identifier, normalize_text, serial_epoch, serial_to_date,
};
