//! SPPD conversion pipeline.
//!
//! Raw grids go in, canonical records and a run report come out:
//!
//! 1. [`extract`]: header detection, column resolution and per-row assembly
//!    for one source, with no state shared between sources
//! 2. [`dedupe`]: first-seen-wins suppression of repeated trip numbers
//! 3. [`run`]: the per-invocation run that applies both, source by source,
//!    in caller order
//!
//! Nothing here performs I/O.

pub mod dedupe;
pub mod extract;
pub mod run;

pub use dedupe::DuplicateGuard;
pub use extract::{
    ExtractedRow, RowOutcome, SourceExtraction, SourceLayout, assemble_row, extract_source,
    resolve_layout,
};
pub use run::{ConversionOutput, ConversionRun, convert};
