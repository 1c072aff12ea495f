//! Per-sheet write cursor

use crate::address::{column_range, row_range, CellAddress, CellRange};
use crate::error::{Error, Result};
use crate::MAX_ROWS;

/// Write position and shape of one sheet under construction
///
/// `write_row` starts at `start_index` and only moves forward, one row per
/// completed [`advance`](Self::advance).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetCursor {
    /// Sheet name
    name: String,
    /// Row the next row is written to (1-based)
    write_row: u32,
    /// Row of the first row written, normally the header
    start_index: u32,
    /// Number of values in the most recent row
    column_count: u32,
}

impl SheetCursor {
    /// Create a cursor whose first row goes to `start_index`
    pub fn new<S: Into<String>>(name: S, start_index: u32) -> Result<Self> {
        if start_index == 0 || start_index > MAX_ROWS {
            return Err(Error::InvalidAddress(format!(
                "start row {} out of bounds (1..={})",
                start_index, MAX_ROWS
            )));
        }
        Ok(Self {
            name: name.into(),
            write_row: start_index,
            start_index,
            column_count: 0,
        })
    }

    /// Get the sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Row the next row is written to
    pub fn write_row(&self) -> u32 {
        self.write_row
    }

    /// Row of the first row written
    pub fn start_index(&self) -> u32 {
        self.start_index
    }

    /// Number of values in the most recent row
    pub fn column_count(&self) -> u32 {
        self.column_count
    }

    /// Row most recently completed, if any
    pub fn last_row(&self) -> Option<u32> {
        (self.write_row > self.start_index).then(|| self.write_row - 1)
    }

    /// Record the width of the row about to be written
    ///
    /// Overwrites the previous count; a narrower row narrows later row ranges.
    pub fn set_column_count(&mut self, count: u32) {
        self.column_count = count;
    }

    /// Address of column `col` on the current write row
    pub fn cell(&self, col: u32) -> Result<CellAddress> {
        CellAddress::new(col, self.write_row)
    }

    /// Move to the next row
    pub fn advance(&mut self) {
        self.write_row += 1;
    }

    /// First and last cell of `row`, as wide as the most recent row
    pub fn row_range(&self, row: u32) -> Result<CellRange> {
        row_range(row, self.column_count)
    }

    /// Data cells of `column` written so far, header row excluded
    pub fn column_range(&self, column: &str) -> Result<CellRange> {
        column_range(column, self.start_index, self.write_row)
    }
}
