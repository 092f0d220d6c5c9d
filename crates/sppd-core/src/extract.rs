//! Per-source extraction: header, columns, and one outcome per data row.

use serde::Serialize;
use sppd_map::{ColumnResolution, ColumnResolver, locate_header};
use sppd_model::{
    BankNameFallback, CanonicalFieldId, CanonicalRecord, ColumnMap, ConversionOptions, RawCell,
    RawGrid, RawSource, SkipReason, SourceRejection,
};
use sppd_transform::{
    Normalized, cap_identifier_digits, normalize_amount, normalize_date, normalize_identifier,
    normalize_text,
};

/// Where a source's header is and how its columns resolve.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceLayout {
    pub header_row: usize,
    pub resolution: ColumnResolution,
}

/// What became of one data row.
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    Record {
        record: CanonicalRecord,
        /// Fields that fell back to their safe default.
        degraded: Vec<CanonicalFieldId>,
    },
    Skipped(SkipReason),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedRow {
    /// 0-based row index within the grid.
    pub row: usize,
    pub outcome: RowOutcome,
}

/// All rows of one source, before duplicate suppression.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceExtraction {
    pub layout: SourceLayout,
    pub rows: Vec<ExtractedRow>,
}

/// Locates the header row and resolves the columns of `grid`.
pub fn resolve_layout(
    grid: &RawGrid,
    options: &ConversionOptions,
) -> Result<SourceLayout, SourceRejection> {
    let window = options.header_search_window;
    let header_row =
        locate_header(grid, window).ok_or(SourceRejection::HeaderNotFound { window })?;
    let header = grid.row(header_row).unwrap_or_default();
    let resolution = ColumnResolver::new(options.header_matching).resolve(header, header_row)?;
    Ok(SourceLayout {
        header_row,
        resolution,
    })
}

/// Extracts every row after the header of `source`.
///
/// Sources are independent of one another; duplicate suppression happens
/// later, in run order.
pub fn extract_source(
    source: &RawSource,
    options: &ConversionOptions,
) -> Result<SourceExtraction, SourceRejection> {
    let layout = resolve_layout(&source.grid, options)?;
    let rows = source
        .grid
        .rows()
        .iter()
        .enumerate()
        .skip(layout.header_row + 1)
        .map(|(row, cells)| ExtractedRow {
            row,
            outcome: assemble_row(cells, &layout.resolution.map, options, &source.name),
        })
        .collect();
    Ok(SourceExtraction { layout, rows })
}

/// Assembles one data row into a record, or says why it has none.
///
/// Fields without a column, and columns past the end of a short row, take
/// their empty value.
pub fn assemble_row(
    row: &[RawCell],
    map: &ColumnMap,
    options: &ConversionOptions,
    source_name: &str,
) -> RowOutcome {
    if row.iter().all(RawCell::is_blank) {
        return RowOutcome::Skipped(SkipReason::Empty);
    }
    if starts_with_footer(row, &options.footer_markers) {
        return RowOutcome::Skipped(SkipReason::Footer);
    }

    let cells = RowCells { row, map };
    let mut trip_number = cells
        .get(CanonicalFieldId::TripNumber)
        .map(|cell| normalize_identifier(&cell.value).into_value())
        .unwrap_or_default();
    if trip_number.is_empty() {
        return RowOutcome::Skipped(SkipReason::NoIdentifier);
    }
    if let Some(max_digits) = options.identifier_max_digits {
        trip_number = cap_identifier_digits(&trip_number, max_digits);
    }

    let mut degraded = Vec::new();
    let mut text = |field| cells.normalize(field, &mut degraded, |c| normalize_text(&c.value, c.hint));
    let customer_name = text(CanonicalFieldId::CustomerName);
    let trip_destination = text(CanonicalFieldId::TripDestination);
    let reason_for_trip = text(CanonicalFieldId::ReasonForTrip);
    let mut beneficiary_bank_name = text(CanonicalFieldId::BeneficiaryBankName);

    let mut date = |field| cells.normalize(field, &mut degraded, |c| normalize_date(&c.value, c.hint));
    let trip_begins_on = date(CanonicalFieldId::TripBeginsOn);
    let trip_ends_on = date(CanonicalFieldId::TripEndsOn);
    let planned_payment_date = date(CanonicalFieldId::PlannedPaymentDate);

    let paid_amount = cells.normalize(CanonicalFieldId::PaidAmount, &mut degraded, |c| {
        normalize_amount(&c.value)
    });

    if beneficiary_bank_name.is_empty() && options.bank_name_fallback == BankNameFallback::SourceName
    {
        beneficiary_bank_name = source_name.trim().to_string();
    }

    degraded.sort();
    RowOutcome::Record {
        record: CanonicalRecord {
            trip_number,
            customer_name,
            trip_destination,
            reason_for_trip,
            trip_begins_on,
            trip_ends_on,
            planned_payment_date,
            paid_amount,
            beneficiary_bank_name,
        },
        degraded,
    }
}

/// True when the first populated cell starts with a footer marker,
/// ignoring ASCII case.
fn starts_with_footer(row: &[RawCell], markers: &[String]) -> bool {
    let Some(first) = row.iter().find(|cell| !cell.is_blank()) else {
        return false;
    };
    let text = first.to_text();
    markers.iter().any(|marker| {
        text.get(..marker.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(marker))
    })
}

#[derive(Clone, Copy)]
struct RowCells<'a> {
    row: &'a [RawCell],
    map: &'a ColumnMap,
}

impl<'a> RowCells<'a> {
    fn get(&self, field: CanonicalFieldId) -> Option<&'a RawCell> {
        self.map.get(field).and_then(|column| self.row.get(column))
    }

    fn normalize<T: Default>(
        &self,
        field: CanonicalFieldId,
        degraded: &mut Vec<CanonicalFieldId>,
        normalizer: impl Fn(&RawCell) -> Normalized<T>,
    ) -> T {
        let Some(cell) = self.get(field) else {
            return T::default();
        };
        let normalized = normalizer(cell);
        if normalized.degraded {
            degraded.push(field);
        }
        normalized.value
    }
}
