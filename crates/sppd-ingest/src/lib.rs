//! Readers that materialize SPPD source files into raw grids.
//!
//! Workbooks (`.xlsx`, `.xlsm`, `.xlsb`, `.xls`, `.ods`) yield one source per
//! sheet; delimited text files (`.csv`, `.tsv`) yield one source named after
//! the file. Cells keep their untyped value plus a format hint where the
//! container provides one.

pub mod delimited;
pub mod error;
pub mod source;
pub mod workbook;

pub use delimited::read_delimited;
pub use error::{IngestError, Result};
pub use source::{SheetSelection, SourceFormat, read_path, read_sources};
pub use workbook::read_workbook;
