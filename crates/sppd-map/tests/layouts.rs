//! Header detection and resolution across the workbook layouts seen in
//! practice.

use sppd_map::{ColumnResolver, locate_header, resolve_columns};
use sppd_model::{CanonicalFieldId, CellValue, HeaderMatching, RawGrid};

fn grid(rows: Vec<Vec<&str>>) -> RawGrid {
    RawGrid::from_values(
        rows.into_iter()
            .map(|row| row.into_iter().map(CellValue::from).collect())
            .collect(),
    )
}

fn resolved(grid: &RawGrid) -> sppd_map::ColumnResolution {
    let row = locate_header(grid, 10).expect("header row");
    resolve_columns(grid.row(row).expect("row exists"), row).expect("resolves")
}

#[test]
fn reordered_headers_bind_the_same_fields() {
    let a = grid(vec![vec!["Trip Number", "Customer Name", "Paid Amount"]]);
    let b = grid(vec![vec!["Paid Amount", "Trip Number", "Customer Name"]]);

    let fields_a: Vec<_> = resolved(&a).map.iter().map(|(field, _)| field).collect();
    let fields_b: Vec<_> = resolved(&b).map.iter().map(|(field, _)| field).collect();
    assert_eq!(fields_a, fields_b);
    assert_eq!(resolved(&b).map.get(CanonicalFieldId::PaidAmount), Some(0));
}

#[test]
fn payment_date_aliases() {
    for label in ["Tanggal Rencana Bayar", "Tanggal Bayar", "Planned Payment Date"] {
        let g = grid(vec![vec!["Trip Number", label]]);
        assert_eq!(
            resolved(&g).map.get(CanonicalFieldId::PlannedPaymentDate),
            Some(1),
            "label {label:?}"
        );
    }
}

#[test]
fn bank_sheet_without_bank_column() {
    let g = grid(vec![
        vec!["TRANSFER BANK MANDIRI"],
        vec![""],
        vec!["No", "Trip Number", "Customer Name", "Reason For Trip", "Amount"],
    ]);
    let resolution = resolved(&g);
    assert_eq!(resolution.map.get(CanonicalFieldId::ReasonForTrip), Some(3));
    assert_eq!(resolution.map.get(CanonicalFieldId::PaidAmount), Some(4));
    assert!(!resolution.map.contains(CanonicalFieldId::BeneficiaryBankName));
}

#[test]
fn lenient_mode_accepts_snake_case_exports() {
    let g = grid(vec![vec![
        "Trip Number",
        "customer_name",
        "trip_destination",
        "paid_amount",
    ]]);
    let resolution = ColumnResolver::new(HeaderMatching::Lenient)
        .resolve(g.row(0).expect("row"), 0)
        .expect("resolves");
    assert_eq!(resolution.map.get(CanonicalFieldId::CustomerName), Some(1));
    assert_eq!(resolution.map.get(CanonicalFieldId::TripDestination), Some(2));
    assert_eq!(resolution.map.get(CanonicalFieldId::PaidAmount), Some(3));
    assert!(resolution.unmapped.is_empty());
}
