//! # sheet-scribe
//!
//! Build spreadsheet reports one row at a time.
//!
//! A [`Workbook`] keeps a write cursor per sheet, so rows are appended without
//! computing addresses by hand. Text widens its column to fit, floats get a
//! fixed width and precision, booleans become localized labels. Header rows get
//! a bold fill and an auto-filter, and `SUBTOTAL` formulas cover exactly the
//! data rows written so far.
//!
//! ## Example
//!
//! ```rust
//! use sheet_scribe::prelude::*;
//!
//! let mut workbook = Workbook::new("General", 2).unwrap();
//! let demo = workbook.new_sheet("Demo", 2).unwrap();
//!
//! let mut sheet = workbook.sheet(demo).unwrap();
//! sheet.add_row_header(["ID", "Nombre", "Vivo"]).unwrap();
//! sheet
//!     .add_row([CellValue::from(1), "Rick Sanchez".into(), true.into()])
//!     .unwrap();
//! sheet.subtotal("A1", "A").unwrap();
//! sheet.freeze(2, 0).unwrap();
//!
//! let bytes = workbook.output().unwrap();
//! assert_eq!(&bytes[..2], b"PK");
//! // workbook.save_file("report.xlsx").unwrap();
//! ```
//!
//! ## Engines
//!
//! The document itself lives in a [`DocumentEngine`]. [`XlsxEngine`] (feature
//! `xlsx`, on by default) writes Office Open XML; [`MemoryEngine`] keeps the
//! document inspectable in memory and dumps it as JSON.

pub mod prelude;
pub mod sheet;
pub mod workbook;

pub use sheet::Sheet;
pub use workbook::{SheetId, Workbook};

// Re-export core types
pub use sheet_scribe_core::{
    cell_address,
    classify,
    column_index,
    column_name,
    column_range,
    parse_cell,
    row_range,
    subtotal_formula,
    // Styles
    ActivePane,
    BooleanLabels,
    // Addresses
    CellAddress,
    CellRange,
    CellRecord,
    // Values
    CellValue,
    CellWrite,
    Color,
    // Engines
    DocumentEngine,
    // Error types
    Error,
    MemoryEngine,
    Panes,
    Result,
    SheetCursor,
    SheetDocument,
    StoredValue,
    StyleId,
    StyleSet,
    StyleSpec,
    SubtotalFunction,
    WidthRule,
    // Configuration
    WorkbookOptions,
    WriteInstruction,
    // Constants
    DEFAULT_COLUMN_WIDTH,
    MAX_COLS,
    MAX_COLUMN_WIDTH,
    MAX_ROWS,
    MAX_SHEET_NAME_LEN,
};

#[cfg(feature = "xlsx")]
pub use sheet_scribe_xlsx::{XlsxEngine, XlsxError};
