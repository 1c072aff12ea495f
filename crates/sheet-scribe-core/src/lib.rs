//! # sheet-scribe-core
//!
//! Core data structures for the sheet-scribe report builder.
//!
//! This crate provides the pieces that do not depend on a concrete file format:
//! - [`CellAddress`] and [`CellRange`] - A1-style addressing
//! - [`CellValue`] and [`classify`] - the supported scalar kinds and how each one is written
//! - [`SheetCursor`] - per-sheet write position and column count
//! - [`StyleSpec`], [`StyleSet`] - formatting intents handed to the engine
//! - [`DocumentEngine`] - the boundary to whatever stores and serializes the document
//! - [`MemoryEngine`] - an in-memory engine that records every instruction
//!
//! ## Example
//!
//! ```rust
//! use sheet_scribe_core::{column_name, column_range, CellAddress};
//!
//! assert_eq!(column_name(27).unwrap(), "AA");
//! assert_eq!(CellAddress::new(3, 10).unwrap().to_string(), "C10");
//!
//! // Data cells of column A when the header sits on row 2 and row 5 is next
//! let range = column_range("A", 2, 5).unwrap();
//! assert_eq!(range.to_string(), "A3:A4");
//! ```

pub mod address;
pub mod classify;
pub mod cursor;
pub mod engine;
pub mod error;
pub mod memory;
pub mod options;
pub mod pane;
pub mod style;
pub mod subtotal;
pub mod value;

pub use address::{
    cell_address, column_index, column_name, column_range, parse_cell, row_range, CellAddress,
    CellRange,
};
pub use classify::{classify, CellWrite, WidthRule, WriteInstruction};
pub use cursor::SheetCursor;
pub use engine::DocumentEngine;
pub use error::{Error, Result};
pub use memory::{CellRecord, MemoryEngine, SheetDocument, StoredValue};
pub use options::{BooleanLabels, WorkbookOptions};
pub use pane::{ActivePane, Panes};
pub use style::{Color, StyleId, StyleSet, StyleSpec};
pub use subtotal::{subtotal_formula, SubtotalFunction};
pub use value::CellValue;

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLS: u32 = 16_384;

/// Maximum length of a sheet name
pub const MAX_SHEET_NAME_LEN: usize = 31;

/// Column width used by spreadsheet applications for untouched columns
pub const DEFAULT_COLUMN_WIDTH: f64 = 8.43;

/// Upper bound (exclusive) for automatic text column widening
pub const MAX_COLUMN_WIDTH: f64 = 255.0;
