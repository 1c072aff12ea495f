//! In-memory document engine
//!
//! [`MemoryEngine`] keeps every instruction it receives in plain data structures.
//! It is useful on its own for inspecting what a report would contain, and it is
//! the buffer other engines render from. Serializing it produces a JSON dump of
//! the document.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;

use crate::address::{CellAddress, CellRange};
use crate::engine::DocumentEngine;
use crate::error::{Error, Result};
use crate::pane::Panes;
use crate::style::{StyleId, StyleSpec};
use crate::{DEFAULT_COLUMN_WIDTH, MAX_COLS, MAX_COLUMN_WIDTH, MAX_SHEET_NAME_LEN};

/// Name of the sheet a new engine starts with
pub const FIRST_SHEET_NAME: &str = "Sheet1";

/// A value stored in a cell
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum StoredValue {
    String(String),
    Integer(i64),
    Number(f64),
    /// Formula text without the leading `=`
    Formula(String),
}

impl StoredValue {
    /// Get the string, if this is a string cell
    pub fn as_str(&self) -> Option<&str> {
        match self {
            StoredValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the value as a number, if numeric
    pub fn as_number(&self) -> Option<f64> {
        match self {
            StoredValue::Integer(n) => Some(*n as f64),
            StoredValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the formula text, if this is a formula cell
    pub fn formula(&self) -> Option<&str> {
        match self {
            StoredValue::Formula(f) => Some(f),
            _ => None,
        }
    }
}

/// Contents of one cell: a value, a style, or both
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CellRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<StoredValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<StyleId>,
}

/// One sheet of a [`MemoryEngine`] document
#[derive(Debug, Clone, Default, Serialize)]
pub struct SheetDocument {
    name: String,
    /// Cells keyed by row, then column
    rows: BTreeMap<u32, BTreeMap<u32, CellRecord>>,
    column_widths: BTreeMap<u32, f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    auto_filter: Option<CellRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    panes: Option<Panes>,
}

impl SheetDocument {
    fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Get the sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get a cell by address
    pub fn cell_at(&self, addr: CellAddress) -> Option<&CellRecord> {
        self.rows.get(&addr.row).and_then(|row| row.get(&addr.col))
    }

    /// Get a cell by address string (e.g., "A1")
    pub fn cell(&self, address: &str) -> Option<&CellRecord> {
        CellAddress::parse(address)
            .ok()
            .and_then(|addr| self.cell_at(addr))
    }

    /// Get the value of a cell by address string
    pub fn value(&self, address: &str) -> Option<&StoredValue> {
        self.cell(address).and_then(|c| c.value.as_ref())
    }

    /// Get the style of a cell by address string
    pub fn style(&self, address: &str) -> Option<StyleId> {
        self.cell(address).and_then(|c| c.style)
    }

    /// Iterate over all cells, row by row
    pub fn cells(&self) -> impl Iterator<Item = (CellAddress, &CellRecord)> {
        self.rows.iter().flat_map(|(row, cols)| {
            cols.iter()
                .map(move |(col, record)| (CellAddress { row: *row, col: *col }, record))
        })
    }

    /// Width of a column (1-based)
    pub fn column_width(&self, col: u32) -> f64 {
        self.column_widths
            .get(&col)
            .copied()
            .unwrap_or(DEFAULT_COLUMN_WIDTH)
    }

    /// Columns whose width was set explicitly
    pub fn column_widths(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.column_widths.iter().map(|(col, width)| (*col, *width))
    }

    /// Auto-filter range, if any
    pub fn auto_filter(&self) -> Option<CellRange> {
        self.auto_filter
    }

    /// Pane settings, if any
    pub fn panes(&self) -> Option<Panes> {
        self.panes
    }

    fn cell_mut(&mut self, addr: CellAddress) -> &mut CellRecord {
        self.rows
            .entry(addr.row)
            .or_default()
            .entry(addr.col)
            .or_default()
    }

    fn set_value(&mut self, addr: CellAddress, value: StoredValue) {
        log::trace!("{}!{} = {:?}", self.name, addr, value);
        self.cell_mut(addr).value = Some(value);
    }
}

/// Engine that keeps the whole document in memory
#[derive(Debug, Clone, Serialize)]
pub struct MemoryEngine {
    styles: Vec<StyleSpec>,
    sheets: Vec<SheetDocument>,
}

impl MemoryEngine {
    /// Create a document with one sheet named [`FIRST_SHEET_NAME`]
    pub fn new() -> Self {
        Self {
            styles: Vec::new(),
            sheets: vec![SheetDocument::new(FIRST_SHEET_NAME)],
        }
    }

    /// Get a sheet by name
    pub fn sheet(&self, name: &str) -> Option<&SheetDocument> {
        self.sheets.iter().find(|s| s.name == name)
    }

    /// Iterate over all sheets
    pub fn sheets(&self) -> impl Iterator<Item = &SheetDocument> {
        self.sheets.iter()
    }

    /// Get a registered style
    pub fn style(&self, id: StyleId) -> Option<&StyleSpec> {
        self.styles.get(id.0 as usize)
    }

    /// All registered styles; a [`StyleId`] indexes this slice
    pub fn styles(&self) -> &[StyleSpec] {
        &self.styles
    }

    /// Pretty-printed JSON dump of the document
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(Error::engine)
    }

    fn sheet_mut(&mut self, name: &str) -> Result<&mut SheetDocument> {
        self.sheets
            .iter_mut()
            .find(|s| s.name == name)
            .ok_or_else(|| Error::UnknownSheet(name.to_string()))
    }

    fn sheet_ref(&self, name: &str) -> Result<&SheetDocument> {
        self.sheet(name)
            .ok_or_else(|| Error::UnknownSheet(name.to_string()))
    }

    /// Validate a sheet name, optionally excluding a sheet from the duplicate check
    fn validate_sheet_name(&self, name: &str, exclude_index: Option<usize>) -> Result<()> {
        if name.is_empty() {
            return Err(Error::InvalidSheetName("Sheet name cannot be empty".into()));
        }
        if name.chars().count() > MAX_SHEET_NAME_LEN {
            return Err(Error::InvalidSheetName(format!(
                "Sheet name too long (max {} characters)",
                MAX_SHEET_NAME_LEN
            )));
        }

        const INVALID_CHARS: &[char] = &[':', '\\', '/', '?', '*', '[', ']'];
        if let Some(c) = name.chars().find(|c| INVALID_CHARS.contains(c)) {
            return Err(Error::InvalidSheetName(format!(
                "Sheet name cannot contain '{}'",
                c
            )));
        }

        if name.starts_with('\'') || name.ends_with('\'') {
            return Err(Error::InvalidSheetName(
                "Sheet name cannot start or end with an apostrophe".into(),
            ));
        }

        // Case-insensitive, like spreadsheet applications
        let name_lower = name.to_lowercase();
        let taken = self
            .sheets
            .iter()
            .enumerate()
            .any(|(i, s)| Some(i) != exclude_index && s.name.to_lowercase() == name_lower);
        if taken {
            return Err(Error::DuplicateSheet(name.into()));
        }

        Ok(())
    }

    fn check_style(&self, style: StyleId) -> Result<()> {
        if self.style(style).is_none() {
            return Err(Error::engine(format!("unknown {}", style)));
        }
        Ok(())
    }
}

impl Default for MemoryEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Round the way a fixed-precision decimal rendering would
fn round_to(value: f64, precision: u8) -> f64 {
    format!("{:.*}", precision as usize, value)
        .parse()
        .unwrap_or(value)
}

fn check_column(col: u32) -> Result<()> {
    if col == 0 || col > MAX_COLS {
        return Err(Error::InvalidColumn(col.to_string()));
    }
    Ok(())
}

impl DocumentEngine for MemoryEngine {
    fn new_style(&mut self, spec: &StyleSpec) -> Result<StyleId> {
        if let Some(format) = &spec.number_format {
            if format.trim().is_empty() {
                return Err(Error::engine("empty number format"));
            }
        }
        let id = StyleId(self.styles.len() as u32);
        self.styles.push(spec.clone());
        Ok(id)
    }

    fn sheet_names(&self) -> Vec<String> {
        self.sheets.iter().map(|s| s.name.clone()).collect()
    }

    fn new_sheet(&mut self, name: &str) -> Result<()> {
        self.validate_sheet_name(name, None)?;
        log::debug!("new sheet '{}'", name);
        self.sheets.push(SheetDocument::new(name));
        Ok(())
    }

    fn rename_sheet(&mut self, from: &str, to: &str) -> Result<()> {
        let index = self
            .sheets
            .iter()
            .position(|s| s.name == from)
            .ok_or_else(|| Error::UnknownSheet(from.to_string()))?;
        self.validate_sheet_name(to, Some(index))?;
        log::debug!("renamed sheet '{}' to '{}'", from, to);
        self.sheets[index].name = to.to_string();
        Ok(())
    }

    fn set_cell_str(&mut self, sheet: &str, cell: CellAddress, value: &str) -> Result<()> {
        self.sheet_mut(sheet)?
            .set_value(cell, StoredValue::String(value.to_string()));
        Ok(())
    }

    fn set_cell_int(&mut self, sheet: &str, cell: CellAddress, value: i64) -> Result<()> {
        self.sheet_mut(sheet)?
            .set_value(cell, StoredValue::Integer(value));
        Ok(())
    }

    fn set_cell_float(
        &mut self,
        sheet: &str,
        cell: CellAddress,
        value: f64,
        precision: u8,
    ) -> Result<()> {
        if !value.is_finite() {
            return Err(Error::engine(format!(
                "cannot store non-finite number {} at {}",
                value, cell
            )));
        }
        self.sheet_mut(sheet)?
            .set_value(cell, StoredValue::Number(round_to(value, precision)));
        Ok(())
    }

    fn set_cell_formula(&mut self, sheet: &str, cell: CellAddress, formula: &str) -> Result<()> {
        let formula = formula.strip_prefix('=').unwrap_or(formula);
        if formula.is_empty() {
            return Err(Error::engine(format!("empty formula at {}", cell)));
        }
        self.sheet_mut(sheet)?
            .set_value(cell, StoredValue::Formula(formula.to_string()));
        Ok(())
    }

    fn set_cell_style(&mut self, sheet: &str, range: CellRange, style: StyleId) -> Result<()> {
        self.check_style(style)?;
        let doc = self.sheet_mut(sheet)?;
        log::trace!("{}!{} styled with {}", doc.name, range, style);
        for addr in range.cells() {
            doc.cell_mut(addr).style = Some(style);
        }
        Ok(())
    }

    fn column_width(&self, sheet: &str, col: u32) -> Result<f64> {
        check_column(col)?;
        Ok(self.sheet_ref(sheet)?.column_width(col))
    }

    fn set_column_width(&mut self, sheet: &str, col: u32, width: f64) -> Result<()> {
        check_column(col)?;
        if !(0.0..=MAX_COLUMN_WIDTH).contains(&width) {
            return Err(Error::engine(format!(
                "column width {} out of range (0..={})",
                width, MAX_COLUMN_WIDTH
            )));
        }
        let doc = self.sheet_mut(sheet)?;
        log::trace!("{} column {} width {}", doc.name, col, width);
        doc.column_widths.insert(col, width);
        Ok(())
    }

    fn auto_filter(&mut self, sheet: &str, range: CellRange) -> Result<()> {
        self.sheet_mut(sheet)?.auto_filter = Some(range);
        Ok(())
    }

    fn set_panes(&mut self, sheet: &str, panes: &Panes) -> Result<()> {
        self.sheet_mut(sheet)?.panes = Some(*panes);
        Ok(())
    }

    fn file_extension(&self) -> &'static str {
        "json"
    }

    fn save_as(&mut self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    fn write_to_vec(&mut self) -> Result<Vec<u8>> {
        Ok(self.to_json()?.into_bytes())
    }
}
