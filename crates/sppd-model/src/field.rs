//! Canonical field identifiers and the column map.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The closed set of logical fields an SPPD record carries.
///
/// Declaration order is the output column order and also the order in which
/// the column resolver claims header cells, so an ambiguous label goes to the
/// field declared first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum CanonicalFieldId {
    TripNumber,
    CustomerName,
    TripDestination,
    ReasonForTrip,
    TripBeginsOn,
    TripEndsOn,
    PlannedPaymentDate,
    PaidAmount,
    BeneficiaryBankName,
}

/// Scalar type of a canonical field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Digits-only identifier string.
    Identifier,
    Text,
    /// Calendar date, or empty.
    Date,
    /// Non-negative whole currency units.
    Amount,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Identifier => "identifier",
            Self::Text => "text",
            Self::Date => "date",
            Self::Amount => "amount",
        }
    }
}

impl CanonicalFieldId {
    /// All fields in declaration order.
    pub const ALL: [Self; 9] = [
        Self::TripNumber,
        Self::CustomerName,
        Self::TripDestination,
        Self::ReasonForTrip,
        Self::TripBeginsOn,
        Self::TripEndsOn,
        Self::PlannedPaymentDate,
        Self::PaidAmount,
        Self::BeneficiaryBankName,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TripNumber => "trip_number",
            Self::CustomerName => "customer_name",
            Self::TripDestination => "trip_destination",
            Self::ReasonForTrip => "reason_for_trip",
            Self::TripBeginsOn => "trip_begins_on",
            Self::TripEndsOn => "trip_ends_on",
            Self::PlannedPaymentDate => "planned_payment_date",
            Self::PaidAmount => "paid_amount",
            Self::BeneficiaryBankName => "beneficiary_bank_name",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::TripNumber => FieldKind::Identifier,
            Self::TripBeginsOn | Self::TripEndsOn | Self::PlannedPaymentDate => FieldKind::Date,
            Self::PaidAmount => FieldKind::Amount,
            Self::CustomerName
            | Self::TripDestination
            | Self::ReasonForTrip
            | Self::BeneficiaryBankName => FieldKind::Text,
        }
    }

    /// A source without a column for a mandatory field is rejected.
    pub fn is_mandatory(&self) -> bool {
        matches!(self, Self::TripNumber)
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for CanonicalFieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field to 0-based column index mapping for one grid.
///
/// Fields without a resolved column are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMap {
    columns: BTreeMap<CanonicalFieldId, usize>,
}

impl ColumnMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: CanonicalFieldId, column: usize) {
        self.columns.insert(field, column);
    }

    pub fn get(&self, field: CanonicalFieldId) -> Option<usize> {
        self.columns.get(&field).copied()
    }

    pub fn contains(&self, field: CanonicalFieldId) -> bool {
        self.columns.contains_key(&field)
    }

    /// True when some field already claims `column`.
    pub fn is_column_claimed(&self, column: usize) -> bool {
        self.columns.values().any(|claimed| *claimed == column)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Entries in field declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (CanonicalFieldId, usize)> + '_ {
        self.columns.iter().map(|(field, column)| (*field, *column))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declaration_order_is_output_order() {
        let names: Vec<&str> = CanonicalFieldId::ALL.iter().map(|f| f.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "trip_number",
                "customer_name",
                "trip_destination",
                "reason_for_trip",
                "trip_begins_on",
                "trip_ends_on",
                "planned_payment_date",
                "paid_amount",
                "beneficiary_bank_name",
            ]
        );
        let mut sorted = CanonicalFieldId::ALL;
        sorted.sort();
        assert_eq!(sorted, CanonicalFieldId::ALL);
    }

    #[test]
    fn only_trip_number_is_mandatory() {
        let mandatory: Vec<_> = CanonicalFieldId::ALL
            .into_iter()
            .filter(CanonicalFieldId::is_mandatory)
            .collect();
        assert_eq!(mandatory, vec![CanonicalFieldId::TripNumber]);
    }

    #[test]
    fn parse_round_trips_names() {
        for field in CanonicalFieldId::ALL {
            assert_eq!(CanonicalFieldId::parse(field.as_str()), Some(field));
        }
        assert_eq!(CanonicalFieldId::parse("unknown"), None);
    }

    #[test]
    fn column_map_tracks_claims() {
        let mut map = ColumnMap::new();
        map.insert(CanonicalFieldId::TripNumber, 3);
        assert!(map.is_column_claimed(3));
        assert!(!map.is_column_claimed(0));
        assert_eq!(map.get(CanonicalFieldId::TripNumber), Some(3));
        assert_eq!(map.get(CanonicalFieldId::PaidAmount), None);
    }
}
