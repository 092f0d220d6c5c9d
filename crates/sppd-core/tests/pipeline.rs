//! End-to-end conversion runs over in-memory sheets.

use chrono::NaiveDate;
use proptest::prelude::*;
use sppd_core::{ConversionRun, convert};
use sppd_model::{
    BankNameFallback, CanonicalFieldId, CellValue, ConversionOptions, RawCell, RawGrid,
    RawSource, SkipReason, SourceRejection,
};

const HEADER: [&str; 9] = [
    "Trip Number",
    "Customer Name",
    "Trip Destination",
    "Reason for Trip",
    "Trip Begins On",
    "Trip Ends On",
    "Tanggal Rencana Bayar",
    "Paid Amount",
    "Beneficiary Bank Name",
];

fn text_row(values: &[&str]) -> Vec<RawCell> {
    values.iter().map(|v| RawCell::new(*v)).collect()
}

fn data_row(trip: f64, name: &str, amount: &str) -> Vec<RawCell> {
    vec![
        RawCell::new(trip),
        RawCell::new(name),
        RawCell::new("Jakarta - Medan"),
        RawCell::new("Audit"),
        RawCell::date_serial(45962.0),
        RawCell::date_serial(45964.0),
        RawCell::new("2025-11-10"),
        RawCell::new(amount),
        RawCell::new("BNI"),
    ]
}

fn sheet(name: &str, rows: Vec<Vec<RawCell>>) -> RawSource {
    let mut grid = RawGrid::default();
    grid.push_row(text_row(&["REKAP SPPD"]));
    grid.push_row(Vec::new());
    grid.push_row(text_row(&HEADER));
    for row in rows {
        grid.push_row(row);
    }
    RawSource::new(name, grid)
}

fn ymd(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

#[test]
fn converts_a_typical_sheet() {
    let source = sheet(
        "Sheet1",
        vec![
            data_row(4120178765.0, "Budi", "Rp 1.234.567"),
            vec![RawCell::empty(); 9],
            data_row(4120178766.0, "Sari", "750,000"),
            text_row(&["TERBILANG", "satu juta"]),
        ],
    );
    let output = convert(&[source], &ConversionOptions::default());

    assert_eq!(output.records.len(), 2);
    let first = &output.records[0];
    assert_eq!(first.trip_number, "4120178765");
    assert_eq!(first.trip_begins_on, ymd(2025, 11, 1));
    assert_eq!(first.trip_ends_on, ymd(2025, 11, 3));
    assert_eq!(first.planned_payment_date, ymd(2025, 11, 10));
    assert_eq!(first.paid_amount, 1_234_567);
    assert_eq!(output.records[1].paid_amount, 750_000);

    let report = output.report.source("Sheet1").unwrap();
    assert_eq!(report.header_row, Some(2));
    assert_eq!(report.rows_seen, 4);
    assert_eq!(report.rows_emitted, 2);
    assert_eq!(report.skipped_empty, 1);
    assert_eq!(report.skipped_footer, 1);
}

#[test]
fn duplicates_across_sheets_keep_the_first() {
    let first = sheet("BNI", vec![data_row(4120178765.0, "Budi", "100")]);
    let second = sheet(
        "MANDIRI",
        vec![
            data_row(4120178765.0, "Budi (again)", "999"),
            data_row(4120178767.0, "Rina", "200"),
        ],
    );
    let output = convert(&[first, second], &ConversionOptions::default());

    let budi: Vec<_> = output
        .records
        .iter()
        .filter(|r| r.trip_number == "4120178765")
        .collect();
    assert_eq!(budi.len(), 1);
    assert_eq!(budi[0].customer_name, "Budi");
    assert_eq!(budi[0].paid_amount, 100);

    assert_eq!(output.report.source("BNI").unwrap().skipped_duplicate, 0);
    assert_eq!(output.report.source("MANDIRI").unwrap().skipped_duplicate, 1);
    assert_eq!(output.report.skipped(SkipReason::Duplicate), 1);
}

#[test]
fn column_order_does_not_change_records() {
    let original = sheet("a", vec![data_row(4120178765.0, "Budi", "100")]);

    // Same data with columns reversed.
    let mut reversed = RawGrid::default();
    let mut header = text_row(&HEADER);
    header.reverse();
    reversed.push_row(header);
    let mut row = data_row(4120178765.0, "Budi", "100");
    row.reverse();
    reversed.push_row(row);

    let a = convert(&[original], &ConversionOptions::default());
    let b = convert(&[RawSource::new("b", reversed)], &ConversionOptions::default());
    assert_eq!(a.records, b.records);
}

#[test]
fn missing_optional_column_leaves_field_empty() {
    let mut grid = RawGrid::default();
    grid.push_row(text_row(&["Trip Number", "Customer Name", "Paid Amount"]));
    grid.push_row(text_row(&["4120178765", "Budi", "100"]));
    let output = convert(&[RawSource::new("s", grid)], &ConversionOptions::default());

    assert_eq!(output.records.len(), 1);
    assert_eq!(output.records[0].planned_payment_date, None);
    assert!(output.report.rejected().next().is_none());
}

#[test]
fn missing_mandatory_column_rejects_only_that_source() {
    let good = sheet("good", vec![data_row(4120178765.0, "Budi", "100")]);
    let mut no_anchor = RawGrid::default();
    no_anchor.push_row(text_row(&["Customer Name", "Paid Amount"]));
    no_anchor.push_row(text_row(&["Budi", "100"]));

    let output = convert(
        &[
            RawSource::new("no-anchor", no_anchor),
            good,
            RawSource::new("summary", RawGrid::default()),
        ],
        &ConversionOptions::default(),
    );

    assert_eq!(output.records.len(), 1);
    let rejected = output.report.source("no-anchor").unwrap();
    assert_eq!(
        rejected.rejection,
        Some(SourceRejection::HeaderNotFound { window: 10 })
    );
    assert_eq!(rejected.rows_seen, 0);
    assert_eq!(output.report.source("good").unwrap().rows_emitted, 1);
    assert_eq!(output.report.rejected().count(), 2);
}

#[test]
fn reports_degraded_fields() {
    let mut row = data_row(4120178765.0, "Budi", "n/a");
    row[4] = RawCell::new("sometime");
    let output = convert(&[sheet("s", vec![row])], &ConversionOptions::default());

    let report = output.report.source("s").unwrap();
    assert_eq!(report.rows_emitted, 1);
    assert_eq!(report.degraded.get(&CanonicalFieldId::PaidAmount), Some(&1));
    assert_eq!(report.degraded.get(&CanonicalFieldId::TripBeginsOn), Some(&1));
    assert_eq!(report.degraded_total(), 2);
}

#[test]
fn per_bank_sheets_use_their_name() {
    let mut grid = RawGrid::default();
    grid.push_row(text_row(&["Trip Number", "Customer Name", "Amount"]));
    grid.push_row(text_row(&["4120178765", "Budi", "100"]));
    let options = ConversionOptions::default().with_bank_name_fallback(BankNameFallback::SourceName);
    let output = convert(&[RawSource::new("MANDIRI", grid)], &options);
    assert_eq!(output.records[0].beneficiary_bank_name, "MANDIRI");
}

#[test]
fn runs_are_idempotent() {
    let sources = vec![
        sheet("a", vec![data_row(1.0, "x", "1"), data_row(2.0, "y", "2")]),
        sheet("b", vec![data_row(2.0, "y", "2"), data_row(3.0, "z", "3")]),
    ];
    let first = convert(&sources, &ConversionOptions::default());
    let second = convert(&sources, &ConversionOptions::default());
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first.report).unwrap(),
        serde_json::to_string(&second.report).unwrap()
    );
}

#[test]
fn incremental_run_matches_convert() {
    let sources = [
        sheet("a", vec![data_row(1.0, "x", "1")]),
        sheet("b", vec![data_row(1.0, "x", "1")]),
    ];
    let mut run = ConversionRun::new(ConversionOptions::default());
    assert_eq!(run.process_source(&sources[0]).rows_emitted, 1);
    assert_eq!(run.process_source(&sources[1]).skipped_duplicate, 1);
    assert_eq!(run.finish(), convert(&sources, &ConversionOptions::default()));
}

fn arbitrary_cell() -> impl Strategy<Value = RawCell> {
    prop_oneof![
        Just(RawCell::empty()),
        "[0-9]{1,12}".prop_map(|s| RawCell::new(s.as_str())),
        "[ A-Za-z.,-]{0,8}".prop_map(|s| RawCell::new(s.as_str())),
        (0u32..60_000).prop_map(|n| RawCell::date_serial(f64::from(n))),
        Just(RawCell::new("TERBILANG")),
        Just(RawCell::new(CellValue::Number(f64::NAN))),
    ]
}

proptest! {
    #[test]
    fn every_row_is_accounted_for(
        rows in prop::collection::vec(prop::collection::vec(arbitrary_cell(), 0..9), 0..40)
    ) {
        let output = convert(&[sheet("s", rows.clone())], &ConversionOptions::default());
        let report = output.report.source("s").unwrap();
        prop_assert_eq!(report.rows_seen, rows.len());
        prop_assert_eq!(report.rows_seen, report.rows_emitted + report.skipped_total());
        prop_assert_eq!(report.rows_emitted, output.records.len());

        let mut trips: Vec<_> = output.records.iter().map(|r| r.trip_number.clone()).collect();
        prop_assert!(trips.iter().all(|t| !t.is_empty() && t.chars().all(|c| c.is_ascii_digit())));
        trips.sort();
        trips.dedup();
        prop_assert_eq!(trips.len(), output.records.len());
    }
}
