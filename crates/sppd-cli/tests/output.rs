//! Canonical CSV output.

use chrono::NaiveDate;
use sppd_cli::output::{render_csv, write_records_to};
use sppd_model::CanonicalRecord;

fn records() -> Vec<CanonicalRecord> {
    vec![
        CanonicalRecord {
            trip_number: "4120178765".to_string(),
            customer_name: "Budi Santoso".to_string(),
            trip_destination: "Jakarta, Medan".to_string(),
            reason_for_trip: "Audit cabang".to_string(),
            trip_begins_on: NaiveDate::from_ymd_opt(2025, 11, 1),
            trip_ends_on: NaiveDate::from_ymd_opt(2025, 11, 3),
            planned_payment_date: NaiveDate::from_ymd_opt(2025, 11, 10),
            paid_amount: 1_234_567,
            beneficiary_bank_name: "BNI".to_string(),
        },
        CanonicalRecord {
            trip_number: "4120178766".to_string(),
            customer_name: "Sari".to_string(),
            trip_destination: "Surabaya".to_string(),
            reason_for_trip: String::new(),
            trip_begins_on: NaiveDate::from_ymd_opt(2025, 11, 5),
            trip_ends_on: None,
            planned_payment_date: None,
            paid_amount: 0,
            beneficiary_bank_name: "MANDIRI".to_string(),
        },
    ]
}

#[test]
fn canonical_csv() {
    let csv = render_csv(&records()).unwrap();
    insta::assert_snapshot!("canonical_csv", csv);
}

#[test]
fn writes_to_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");
    write_records_to(Some(&path), &records()).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, render_csv(&records()).unwrap());
    assert_eq!(written.lines().count(), 3);
}
