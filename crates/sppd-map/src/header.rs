//! Header row detection.

use sppd_model::RawGrid;

use crate::aliases::{STRONG_ANCHORS, aliases_for, label_matches};

/// Finds the header row within the first `window` rows of `grid`.
///
/// The header row is the first row with a cell matching an alias of a strong
/// anchor field. `None` means the grid is not an SPPD data sheet and should
/// be skipped.
pub fn locate_header(grid: &RawGrid, window: usize) -> Option<usize> {
    grid.rows()
        .iter()
        .take(window)
        .position(|row| row.iter().any(|cell| is_anchor_label(&cell.to_text())))
}

fn is_anchor_label(label: &str) -> bool {
    STRONG_ANCHORS
        .iter()
        .flat_map(|field| aliases_for(*field).iter())
        .any(|alias| label_matches(label, alias))
}
