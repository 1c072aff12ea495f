//! XLSX document engine

use std::path::Path;

use rust_xlsxwriter::{ColNum, Format, RowNum, Workbook as XlsxWorkbook, Worksheet};
use sheet_scribe_core::{
    CellAddress, CellRange, CellRecord, DocumentEngine, MemoryEngine, Panes, Result,
    SheetDocument, StoredValue, StyleId, StyleSpec,
};

use crate::error::{XlsxError, XlsxResult};
use crate::format::to_format;

/// Document engine that serializes to `.xlsx`
///
/// Every instruction lands in an in-memory document first; the XLSX package is
/// produced from it by [`save_as`](DocumentEngine::save_as) or
/// [`write_to_vec`](DocumentEngine::write_to_vec), so saving twice yields the
/// same file.
#[derive(Debug, Clone, Default)]
pub struct XlsxEngine {
    document: MemoryEngine,
}

impl XlsxEngine {
    /// Create an engine holding one sheet named `Sheet1`
    pub fn new() -> Self {
        Self {
            document: MemoryEngine::new(),
        }
    }

    /// The buffered document
    pub fn document(&self) -> &MemoryEngine {
        &self.document
    }

    /// Build a writer workbook from the buffered document
    pub fn render(&self) -> XlsxResult<XlsxWorkbook> {
        let formats: Vec<Format> = self.document.styles().iter().map(to_format).collect();
        let mut workbook = XlsxWorkbook::new();

        for sheet in self.document.sheets() {
            let worksheet = workbook.add_worksheet();
            worksheet.set_name(sheet.name())?;
            Self::render_sheet(worksheet, sheet, &formats)?;
        }

        log::debug!(
            "rendered {} sheet(s) with {} style(s)",
            self.document.sheets().count(),
            formats.len()
        );
        Ok(workbook)
    }

    fn render_sheet(
        worksheet: &mut Worksheet,
        sheet: &SheetDocument,
        formats: &[Format],
    ) -> XlsxResult<()> {
        for (col, width) in sheet.column_widths() {
            worksheet.set_column_width(col_num(col)?, width)?;
        }

        for (addr, record) in sheet.cells() {
            Self::render_cell(worksheet, addr, record, formats)?;
        }

        if let Some(range) = sheet.auto_filter() {
            let (top_left, bottom_right) = range.normalized();
            worksheet.autofilter(
                row_num(top_left.row),
                col_num(top_left.col)?,
                row_num(bottom_right.row),
                col_num(bottom_right.col)?,
            )?;
        }

        if let Some(panes) = sheet.panes() {
            Self::render_panes(worksheet, sheet.name(), &panes)?;
        }

        Ok(())
    }

    fn render_cell(
        worksheet: &mut Worksheet,
        addr: CellAddress,
        record: &CellRecord,
        formats: &[Format],
    ) -> XlsxResult<()> {
        let row = row_num(addr.row);
        let col = col_num(addr.col)?;
        let format = match record.style {
            Some(id) => Some(formats.get(id.0 as usize).ok_or_else(|| {
                XlsxError::OutOfBounds(format!("{} used at {} was never registered", id, addr))
            })?),
            None => None,
        };

        match (&record.value, format) {
            (Some(StoredValue::String(s)), Some(f)) => {
                worksheet.write_string_with_format(row, col, s, f)?;
            }
            (Some(StoredValue::String(s)), None) => {
                worksheet.write_string(row, col, s)?;
            }
            (Some(StoredValue::Integer(n)), Some(f)) => {
                worksheet.write_number_with_format(row, col, *n as f64, f)?;
            }
            (Some(StoredValue::Integer(n)), None) => {
                worksheet.write_number(row, col, *n as f64)?;
            }
            (Some(StoredValue::Number(n)), Some(f)) => {
                worksheet.write_number_with_format(row, col, *n, f)?;
            }
            (Some(StoredValue::Number(n)), None) => {
                worksheet.write_number(row, col, *n)?;
            }
            (Some(StoredValue::Formula(text)), Some(f)) => {
                worksheet.write_formula_with_format(row, col, text.as_str(), f)?;
            }
            (Some(StoredValue::Formula(text)), None) => {
                worksheet.write_formula(row, col, text.as_str())?;
            }
            (None, Some(f)) => {
                worksheet.write_blank(row, col, f)?;
            }
            (None, None) => {}
        }

        Ok(())
    }

    fn render_panes(worksheet: &mut Worksheet, name: &str, panes: &Panes) -> XlsxResult<()> {
        if !panes.freeze {
            // The writer only produces frozen panes
            log::warn!("sheet '{}': unfrozen split panes are not written", name);
            return Ok(());
        }

        // Split counts are 0-based offsets already
        let x_split = ColNum::try_from(panes.x_split)
            .map_err(|_| XlsxError::OutOfBounds(format!("column split {}", panes.x_split)))?;
        worksheet.set_freeze_panes(panes.y_split, x_split)?;
        worksheet.set_freeze_panes_top_cell(
            row_num(panes.top_left_cell.row),
            col_num(panes.top_left_cell.col)?,
        )?;
        Ok(())
    }
}

/// 1-based row to the writer's 0-based row
fn row_num(row: u32) -> RowNum {
    row.saturating_sub(1)
}

/// 1-based column to the writer's 0-based column
fn col_num(col: u32) -> XlsxResult<ColNum> {
    ColNum::try_from(col.saturating_sub(1))
        .map_err(|_| XlsxError::OutOfBounds(format!("column {}", col)))
}

impl DocumentEngine for XlsxEngine {
    fn new_style(&mut self, spec: &StyleSpec) -> Result<StyleId> {
        self.document.new_style(spec)
    }

    fn sheet_names(&self) -> Vec<String> {
        self.document.sheet_names()
    }

    fn new_sheet(&mut self, name: &str) -> Result<()> {
        self.document.new_sheet(name)
    }

    fn rename_sheet(&mut self, from: &str, to: &str) -> Result<()> {
        self.document.rename_sheet(from, to)
    }

    fn set_cell_str(&mut self, sheet: &str, cell: CellAddress, value: &str) -> Result<()> {
        self.document.set_cell_str(sheet, cell, value)
    }

    fn set_cell_int(&mut self, sheet: &str, cell: CellAddress, value: i64) -> Result<()> {
        self.document.set_cell_int(sheet, cell, value)
    }

    fn set_cell_float(
        &mut self,
        sheet: &str,
        cell: CellAddress,
        value: f64,
        precision: u8,
    ) -> Result<()> {
        self.document.set_cell_float(sheet, cell, value, precision)
    }

    fn set_cell_formula(&mut self, sheet: &str, cell: CellAddress, formula: &str) -> Result<()> {
        self.document.set_cell_formula(sheet, cell, formula)
    }

    fn set_cell_style(&mut self, sheet: &str, range: CellRange, style: StyleId) -> Result<()> {
        self.document.set_cell_style(sheet, range, style)
    }

    fn column_width(&self, sheet: &str, col: u32) -> Result<f64> {
        self.document.column_width(sheet, col)
    }

    fn set_column_width(&mut self, sheet: &str, col: u32, width: f64) -> Result<()> {
        self.document.set_column_width(sheet, col, width)
    }

    fn auto_filter(&mut self, sheet: &str, range: CellRange) -> Result<()> {
        self.document.auto_filter(sheet, range)
    }

    fn set_panes(&mut self, sheet: &str, panes: &Panes) -> Result<()> {
        self.document.set_panes(sheet, panes)
    }

    fn save_as(&mut self, path: &Path) -> Result<()> {
        log::debug!("saving xlsx to {}", path.display());
        self.render()?.save(path).map_err(XlsxError::from)?;
        Ok(())
    }

    fn write_to_vec(&mut self) -> Result<Vec<u8>> {
        let bytes = self
            .render()?
            .save_to_buffer()
            .map_err(XlsxError::from)?;
        log::debug!("serialized xlsx in memory ({} bytes)", bytes.len());
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_conversion() {
        assert_eq!(row_num(1), 0);
        assert_eq!(col_num(1).unwrap(), 0);
        assert_eq!(col_num(16384).unwrap(), 16383);
        assert!(col_num(70_000).is_err());
    }

    #[test]
    fn test_render_keeps_sheet_order() {
        let mut engine = XlsxEngine::new();
        engine.rename_sheet("Sheet1", "General").unwrap();
        engine.new_sheet("Demo").unwrap();

        let mut workbook = engine.render().unwrap();
        assert_eq!(workbook.worksheet_from_index(0).unwrap().name(), "General");
        assert_eq!(workbook.worksheet_from_index(1).unwrap().name(), "Demo");
    }

    #[test]
    fn test_render_styled_blank_cell() {
        let mut engine = XlsxEngine::new();
        let style = engine.new_style(&StyleSpec::new().bold(true)).unwrap();
        engine
            .set_cell_style("Sheet1", CellRange::parse("A1").unwrap(), style)
            .unwrap();
        assert!(engine.render().is_ok());
    }
}
