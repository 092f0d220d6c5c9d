//! Date normalization.
//!
//! Spreadsheets carry dates three ways: as structured date cells, as serial
//! day numbers counted from 1899-12-30, and as free text in whatever format
//! the person typing used. All three collapse to `Option<NaiveDate>`.

use chrono::{Days, NaiveDate, NaiveDateTime};
use sppd_model::{CellValue, FormatHint};

use super::{Normalized, is_placeholder_text};

/// Day zero of the spreadsheet serial date system.
const SERIAL_EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(1899, 12, 30) {
    Some(date) => date,
    None => panic!("invalid serial epoch"),
};

/// Serial number of 9999-12-31, the last date spreadsheets can represent.
pub const MAX_SERIAL_DAY: i64 = 2_958_465;

/// Longest digit-only string still read as a serial day number.
const MAX_SERIAL_TEXT_DIGITS: usize = 6;

pub fn serial_epoch() -> NaiveDate {
    SERIAL_EPOCH
}

/// Converts a serial day number to a date.
///
/// The fractional (time-of-day) part is discarded. Values at or below zero,
/// non-finite values, and values past 9999-12-31 have no date.
pub fn serial_to_date(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() || serial <= 0.0 {
        return None;
    }
    let days = serial.floor();
    if days > MAX_SERIAL_DAY as f64 {
        return None;
    }
    SERIAL_EPOCH.checked_add_days(Days::new(days as u64))
}

/// Serial day number of `date`; the inverse of [`serial_to_date`].
pub fn date_to_serial(date: NaiveDate) -> i64 {
    (date - SERIAL_EPOCH).num_days()
}

/// Normalizes a raw cell value into a calendar date.
///
/// Numbers are always serial day numbers in a date field. The hint only
/// matters for digit-only text: a text-formatted cell holding `45962` is not
/// reinterpreted as a serial.
pub fn normalize_date(raw: &CellValue, hint: Option<FormatHint>) -> Normalized<Option<NaiveDate>> {
    match raw {
        CellValue::Empty => Normalized::clean(None),
        CellValue::Date(date) => Normalized::clean(Some(*date)),
        CellValue::Number(serial) => match serial_to_date(*serial) {
            Some(date) => Normalized::clean(Some(date)),
            None => Normalized::degraded(None),
        },
        CellValue::Text(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() || is_placeholder_text(trimmed) {
                return Normalized::clean(None);
            }
            match parse_date_text(trimmed, hint) {
                Some(date) => Normalized::clean(Some(date)),
                None => Normalized::degraded(None),
            }
        }
        CellValue::Bool(_) => Normalized::degraded(None),
    }
}

fn parse_date_text(value: &str, hint: Option<FormatHint>) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }

    if let Some(serial) = serial_text(value)
        && hint != Some(FormatHint::Text)
    {
        return serial_to_date(serial);
    }

    if value.len() == 8 && value.bytes().all(|b| b.is_ascii_digit()) {
        return NaiveDate::parse_from_str(value, "%Y%m%d").ok();
    }

    let english = translate_month_names(value);
    try_parse_datetime(&english)
        .map(|dt| dt.date())
        .or_else(|| try_parse_date(&english))
}

/// A short digit string, optionally with a fractional part, read as a
/// serial number (`45962`, `45962.0`, `45962.5`).
fn serial_text(value: &str) -> Option<f64> {
    let (whole, fraction) = value.split_once('.').unwrap_or((value, ""));
    let digits_only = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if whole.is_empty()
        || whole.len() > MAX_SERIAL_TEXT_DIGITS
        || !digits_only(whole)
        || !digits_only(fraction)
    {
        return None;
    }
    value.parse::<f64>().ok()
}

fn try_parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let formats = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M:%S",
        "%Y/%m/%d %H:%M",
        "%d-%b-%Y %H:%M:%S",
        "%d-%b-%Y %H:%M",
        "%d/%m/%Y %H:%M:%S",
        "%d/%m/%Y %H:%M",
        "%m/%d/%Y %H:%M:%S",
        "%m/%d/%Y %H:%M",
    ];

    formats
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}

/// Day-first formats come before month-first ones: expense sheets are filled
/// in with Indonesian conventions, so `01/11/2025` is the 1st of November.
fn try_parse_date(value: &str) -> Option<NaiveDate> {
    let formats = [
        "%Y/%m/%d",
        "%d-%b-%Y",  // 15-Jan-2024
        "%d-%B-%Y",  // 15-January-2024
        "%d/%m/%Y",  // 15/01/2024
        "%m/%d/%Y",  // 01/15/2024
        "%d.%m.%Y",  // 15.01.2024
        "%b %d, %Y", // Jan 15, 2024
        "%B %d, %Y", // January 15, 2024
        "%d %b %Y",  // 15 Jan 2024
        "%d %B %Y",  // 15 January 2024
        "%Y-%b-%d",  // 2024-Jan-15
        "%d-%m-%Y",  // 15-01-2024
    ];

    formats
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
}

/// Indonesian month names whose spelling differs from English.
const INDONESIAN_MONTHS: [(&str, &str); 12] = [
    ("januari", "January"),
    ("februari", "February"),
    ("maret", "March"),
    ("mei", "May"),
    ("juni", "June"),
    ("juli", "July"),
    ("agustus", "August"),
    ("oktober", "October"),
    ("desember", "December"),
    ("agu", "Aug"),
    ("okt", "Oct"),
    ("des", "Dec"),
];

/// Rewrites Indonesian month words so chrono's English `%b`/`%B` can parse
/// them. Words are matched whole and case-insensitively.
fn translate_month_names(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut word = String::new();
    let flush = |word: &mut String, out: &mut String| {
        let replacement = INDONESIAN_MONTHS
            .iter()
            .find(|(id, _)| id.eq_ignore_ascii_case(word.as_str()))
            .map(|(_, en)| *en);
        match replacement {
            Some(en) => out.push_str(en),
            None => out.push_str(word),
        }
        word.clear();
    };
    for ch in value.chars() {
        if ch.is_alphabetic() {
            word.push(ch);
        } else {
            flush(&mut word, &mut out);
            out.push(ch);
        }
    }
    flush(&mut word, &mut out);
    out
}
