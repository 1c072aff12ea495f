//! The boundary to the component that stores and serializes the document

use crate::address::{CellAddress, CellRange};
use crate::error::Result;
use crate::pane::Panes;
use crate::style::{StyleId, StyleSpec};
use std::path::Path;

/// Storage and serialization backend for a workbook
///
/// Sheets are addressed by name. A fresh engine holds exactly one sheet, which
/// the workbook renames to its default sheet name.
///
/// Implementations report rejected operations as
/// [`Error::EngineWriteFailure`](crate::Error::EngineWriteFailure), operations on
/// a missing sheet as [`Error::UnknownSheet`](crate::Error::UnknownSheet), and a
/// taken name as [`Error::DuplicateSheet`](crate::Error::DuplicateSheet).
pub trait DocumentEngine {
    /// Register a style and return its handle
    fn new_style(&mut self, spec: &StyleSpec) -> Result<StyleId>;

    /// Names of all sheets, in document order
    fn sheet_names(&self) -> Vec<String>;

    /// Name of the first sheet
    fn first_sheet_name(&self) -> Option<String> {
        self.sheet_names().into_iter().next()
    }

    /// Append a sheet
    fn new_sheet(&mut self, name: &str) -> Result<()>;

    /// Rename a sheet
    fn rename_sheet(&mut self, from: &str, to: &str) -> Result<()>;

    /// Write a string cell
    fn set_cell_str(&mut self, sheet: &str, cell: CellAddress, value: &str) -> Result<()>;

    /// Write an integer cell
    fn set_cell_int(&mut self, sheet: &str, cell: CellAddress, value: i64) -> Result<()>;

    /// Write a numeric cell rounded to `precision` decimal places
    fn set_cell_float(
        &mut self,
        sheet: &str,
        cell: CellAddress,
        value: f64,
        precision: u8,
    ) -> Result<()>;

    /// Write a formula cell; `formula` carries no leading `=`
    fn set_cell_formula(&mut self, sheet: &str, cell: CellAddress, formula: &str) -> Result<()>;

    /// Apply a style to every cell of `range`, replacing any previous style
    fn set_cell_style(&mut self, sheet: &str, range: CellRange, style: StyleId) -> Result<()>;

    /// Current width of a column (1-based)
    fn column_width(&self, sheet: &str, col: u32) -> Result<f64>;

    /// Set the width of a column (1-based)
    fn set_column_width(&mut self, sheet: &str, col: u32, width: f64) -> Result<()>;

    /// Register an auto-filter over `range`, replacing any previous one
    fn auto_filter(&mut self, sheet: &str, range: CellRange) -> Result<()>;

    /// Configure freeze/split panes
    fn set_panes(&mut self, sheet: &str, panes: &Panes) -> Result<()>;

    /// File extension of the serialized document, without the dot
    fn file_extension(&self) -> &'static str {
        "xlsx"
    }

    /// Serialize the document to `path`
    fn save_as(&mut self, path: &Path) -> Result<()>;

    /// Serialize the document into memory
    fn write_to_vec(&mut self) -> Result<Vec<u8>>;
}
