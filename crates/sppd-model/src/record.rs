use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::field::CanonicalFieldId;

/// One fully typed output row.
///
/// `trip_number` is non-empty and unique within a run's output. Dates are
/// either a calendar date or absent, never a raw serial or free text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalRecord {
    pub trip_number: String,
    pub customer_name: String,
    pub trip_destination: String,
    pub reason_for_trip: String,
    pub trip_begins_on: Option<NaiveDate>,
    pub trip_ends_on: Option<NaiveDate>,
    pub planned_payment_date: Option<NaiveDate>,
    pub paid_amount: u64,
    pub beneficiary_bank_name: String,
}

impl CanonicalRecord {
    /// Output column names, in output order.
    pub fn header() -> [&'static str; 9] {
        CanonicalFieldId::ALL.map(|field| field.as_str())
    }

    /// Renders one field the way it appears in delimited output.
    pub fn field_text(&self, field: CanonicalFieldId) -> String {
        match field {
            CanonicalFieldId::TripNumber => self.trip_number.clone(),
            CanonicalFieldId::CustomerName => self.customer_name.clone(),
            CanonicalFieldId::TripDestination => self.trip_destination.clone(),
            CanonicalFieldId::ReasonForTrip => self.reason_for_trip.clone(),
            CanonicalFieldId::TripBeginsOn => format_date(self.trip_begins_on),
            CanonicalFieldId::TripEndsOn => format_date(self.trip_ends_on),
            CanonicalFieldId::PlannedPaymentDate => format_date(self.planned_payment_date),
            CanonicalFieldId::PaidAmount => self.paid_amount.to_string(),
            CanonicalFieldId::BeneficiaryBankName => self.beneficiary_bank_name.clone(),
        }
    }

    /// All fields rendered in output order.
    pub fn to_row(&self) -> [String; 9] {
        CanonicalFieldId::ALL.map(|field| self.field_text(field))
    }
}

fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}
