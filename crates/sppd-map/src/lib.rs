//! Header detection and column resolution for SPPD sheets.
//!
//! A sheet's header row is found by scanning for an anchor label (the trip
//! number column, present in every known layout). Each canonical field is
//! then bound to the header cell whose label matches one of its aliases.

pub mod aliases;
pub mod header;
pub mod resolve;
pub mod utils;

pub use aliases::{FieldAliases, HEADER_ALIASES, STRONG_ANCHORS, aliases_for};
pub use header::locate_header;
pub use resolve::{
    ColumnMatch, ColumnResolution, ColumnResolver, MatchKind, SIMILARITY_THRESHOLD,
    resolve_columns,
};
