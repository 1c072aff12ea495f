//! Freeze pane descriptors

use crate::address::CellAddress;
use crate::error::Result;
use serde::Serialize;

/// Pane that holds the active cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ActivePane {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Freeze/split pane settings for a sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Panes {
    /// Panes are frozen rather than scrollable
    pub freeze: bool,
    /// Window is split
    pub split: bool,
    /// Number of columns left of the split
    pub x_split: u32,
    /// Number of rows above the split
    pub y_split: u32,
    /// First cell of the scrolling region
    pub top_left_cell: CellAddress,
    /// Pane holding the active cell
    pub active_pane: ActivePane,
}

impl Panes {
    /// Freeze the first `row_split` rows and the first `col_split` columns
    ///
    /// # Examples
    /// ```
    /// use sheet_scribe_core::Panes;
    ///
    /// let panes = Panes::frozen_at(2, 0).unwrap();
    /// assert_eq!(panes.top_left_cell.to_string(), "A3");
    /// ```
    pub fn frozen_at(row_split: u32, col_split: u32) -> Result<Self> {
        Ok(Self {
            freeze: true,
            split: true,
            x_split: col_split,
            y_split: row_split,
            top_left_cell: CellAddress::new(
                col_split.saturating_add(1),
                row_split.saturating_add(1),
            )?,
            active_pane: ActivePane::TopRight,
        })
    }
}
