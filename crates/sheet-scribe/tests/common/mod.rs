//! Shared helpers for integration tests

#![allow(dead_code)]

use std::path::Path;

use sheet_scribe::{
    CellAddress, CellRange, DocumentEngine, Error, MemoryEngine, Panes, Result, StyleId,
    StyleSpec, Workbook, WorkbookOptions,
};

/// Memory engine that rejects any value written to one cell
#[derive(Debug)]
pub struct FailingEngine {
    pub inner: MemoryEngine,
    pub fail_at: Option<CellAddress>,
    pub fail_styles: bool,
}

impl FailingEngine {
    pub fn new() -> Self {
        Self {
            inner: MemoryEngine::new(),
            fail_at: None,
            fail_styles: false,
        }
    }

    pub fn failing_at(address: &str) -> Self {
        Self {
            fail_at: Some(CellAddress::parse(address).unwrap()),
            ..Self::new()
        }
    }

    fn check(&self, cell: CellAddress) -> Result<()> {
        if self.fail_at == Some(cell) {
            return Err(Error::EngineWriteFailure(format!("refused to write {}", cell)));
        }
        Ok(())
    }
}

impl DocumentEngine for FailingEngine {
    fn new_style(&mut self, spec: &StyleSpec) -> Result<StyleId> {
        if self.fail_styles {
            return Err(Error::EngineWriteFailure("style table is full".into()));
        }
        self.inner.new_style(spec)
    }

    fn sheet_names(&self) -> Vec<String> {
        self.inner.sheet_names()
    }

    fn new_sheet(&mut self, name: &str) -> Result<()> {
        self.inner.new_sheet(name)
    }

    fn rename_sheet(&mut self, from: &str, to: &str) -> Result<()> {
        self.inner.rename_sheet(from, to)
    }

    fn set_cell_str(&mut self, sheet: &str, cell: CellAddress, value: &str) -> Result<()> {
        self.check(cell)?;
        self.inner.set_cell_str(sheet, cell, value)
    }

    fn set_cell_int(&mut self, sheet: &str, cell: CellAddress, value: i64) -> Result<()> {
        self.check(cell)?;
        self.inner.set_cell_int(sheet, cell, value)
    }

    fn set_cell_float(
        &mut self,
        sheet: &str,
        cell: CellAddress,
        value: f64,
        precision: u8,
    ) -> Result<()> {
        self.check(cell)?;
        self.inner.set_cell_float(sheet, cell, value, precision)
    }

    fn set_cell_formula(&mut self, sheet: &str, cell: CellAddress, formula: &str) -> Result<()> {
        self.check(cell)?;
        self.inner.set_cell_formula(sheet, cell, formula)
    }

    fn set_cell_style(&mut self, sheet: &str, range: CellRange, style: StyleId) -> Result<()> {
        self.inner.set_cell_style(sheet, range, style)
    }

    fn column_width(&self, sheet: &str, col: u32) -> Result<f64> {
        self.inner.column_width(sheet, col)
    }

    fn set_column_width(&mut self, sheet: &str, col: u32, width: f64) -> Result<()> {
        self.inner.set_column_width(sheet, col, width)
    }

    fn auto_filter(&mut self, sheet: &str, range: CellRange) -> Result<()> {
        self.inner.auto_filter(sheet, range)
    }

    fn set_panes(&mut self, sheet: &str, panes: &Panes) -> Result<()> {
        self.inner.set_panes(sheet, panes)
    }

    fn save_as(&mut self, path: &Path) -> Result<()> {
        self.inner.save_as(path)
    }

    fn write_to_vec(&mut self) -> Result<Vec<u8>> {
        self.inner.write_to_vec()
    }
}

/// Memory-backed workbook with a "General" default sheet starting at row 2
pub fn memory_workbook() -> Workbook<MemoryEngine> {
    Workbook::with_engine(MemoryEngine::new(), "General", 2, WorkbookOptions::default())
        .unwrap()
}

/// Column headers of the character report
pub const HEADER: [&str; 6] = ["ID", "Genero", "Especie", "Tipo", "Estatus", "Nombre"];
