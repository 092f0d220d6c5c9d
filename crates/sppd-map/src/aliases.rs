//! Known header labels for each canonical field.
//!
//! Labels are matched case-sensitively as they appear in the expense
//! workbooks, either as the whole cell or as a substring of it.

use sppd_model::CanonicalFieldId;

/// The header labels accepted for one field.
#[derive(Debug, Clone, Copy)]
pub struct FieldAliases {
    pub field: CanonicalFieldId,
    pub aliases: &'static [&'static str],
}

/// Alias table in field declaration order.
pub const HEADER_ALIASES: [FieldAliases; 9] = [
    FieldAliases {
        field: CanonicalFieldId::TripNumber,
        aliases: &["Trip Number"],
    },
    FieldAliases {
        field: CanonicalFieldId::CustomerName,
        aliases: &["Customer Name"],
    },
    FieldAliases {
        field: CanonicalFieldId::TripDestination,
        aliases: &["Trip Destination"],
    },
    FieldAliases {
        field: CanonicalFieldId::ReasonForTrip,
        aliases: &["Reason for Trip", "Reason For Trip", "Reason"],
    },
    FieldAliases {
        field: CanonicalFieldId::TripBeginsOn,
        aliases: &["Trip Begins On"],
    },
    FieldAliases {
        field: CanonicalFieldId::TripEndsOn,
        aliases: &["Trip Ends On"],
    },
    FieldAliases {
        field: CanonicalFieldId::PlannedPaymentDate,
        aliases: &[
            "Tanggal Rencana Bayar",
            "Tanggal Bayar",
            "Planned Payment Date",
        ],
    },
    FieldAliases {
        field: CanonicalFieldId::PaidAmount,
        aliases: &["Paid Amount", "Amount"],
    },
    FieldAliases {
        field: CanonicalFieldId::BeneficiaryBankName,
        aliases: &["Beneficiary Bank Name"],
    },
];

/// Fields whose labels identify a header row.
pub const STRONG_ANCHORS: [CanonicalFieldId; 1] = [CanonicalFieldId::TripNumber];

pub fn aliases_for(field: CanonicalFieldId) -> &'static [&'static str] {
    HEADER_ALIASES
        .iter()
        .find(|entry| entry.field == field)
        .map(|entry| entry.aliases)
        .unwrap_or_default()
}

/// True when a trimmed header label equals or contains `alias`.
///
/// Containment is intentional: labels carry suffixes like `(SAP)` or `No.`.
/// The header locator shares this rule, so a title cell such as
/// `"Rekap Trip Number SPPD"` inside the search window counts as a header.
pub(crate) fn label_matches(label: &str, alias: &str) -> bool {
    !label.is_empty() && label.contains(alias)
}
