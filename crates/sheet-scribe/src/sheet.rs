//! Row-at-a-time builder for one sheet

use sheet_scribe_core::{
    classify, subtotal_formula, CellAddress, CellRange, CellValue, CellWrite, DocumentEngine,
    Panes, Result, SheetCursor, StyleId, StyleSet, SubtotalFunction, WidthRule, WorkbookOptions,
    MAX_COLUMN_WIDTH,
};

/// Mutable view of one sheet of a [`Workbook`](crate::Workbook)
///
/// Rows are appended at the cursor; every other operation addresses cells
/// explicitly and leaves the cursor alone.
pub struct Sheet<'a, E: DocumentEngine> {
    engine: &'a mut E,
    cursor: &'a mut SheetCursor,
    styles: &'a StyleSet,
    options: &'a WorkbookOptions,
}

impl<'a, E: DocumentEngine> Sheet<'a, E> {
    pub(crate) fn new(
        engine: &'a mut E,
        cursor: &'a mut SheetCursor,
        styles: &'a StyleSet,
        options: &'a WorkbookOptions,
    ) -> Self {
        Self {
            engine,
            cursor,
            styles,
            options,
        }
    }

    /// Get the sheet name
    pub fn name(&self) -> &str {
        self.cursor.name()
    }

    /// Row the next [`add_row`](Self::add_row) writes to
    pub fn write_row(&self) -> u32 {
        self.cursor.write_row()
    }

    /// Row of the first row written
    pub fn start_index(&self) -> u32 {
        self.cursor.start_index()
    }

    /// Number of values in the most recent row
    pub fn column_count(&self) -> u32 {
        self.cursor.column_count()
    }

    /// Cursor state
    pub fn cursor(&self) -> &SheetCursor {
        self.cursor
    }

    /// Named styles of the workbook
    pub fn styles(&self) -> StyleSet {
        *self.styles
    }

    /// Write `values` left to right on the current row, then move to the next one
    ///
    /// The first failed write aborts the row and is returned. Cells written
    /// before it stay written and the cursor does not move.
    pub fn add_row<I, V>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        let values: Vec<CellValue> = values.into_iter().map(Into::into).collect();
        self.cursor.set_column_count(values.len() as u32);

        for (i, value) in values.iter().enumerate() {
            let cell = self.cursor.cell(i as u32 + 1)?;
            self.write_value(cell, value)?;
        }

        self.cursor.advance();
        Ok(())
    }

    /// [`add_row`](Self::add_row), then header style and an auto-filter on that row
    pub fn add_row_header<I, V>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        self.add_row(values)?;

        let row = self.cursor.write_row() - 1;
        self.set_row_style(row)?;
        let range = self.cursor.row_range(row)?;
        self.engine.auto_filter(self.cursor.name(), range)?;
        log::debug!("sheet '{}': header on row {}, filter {}", self.name(), row, range);
        Ok(())
    }

    /// Apply the header style across `row`, as wide as the most recent row
    pub fn set_row_style(&mut self, row: u32) -> Result<()> {
        let range = self.cursor.row_range(row)?;
        self.engine
            .set_cell_style(self.cursor.name(), range, self.styles.header)
    }

    /// Apply `style` to the data cells of `column` written so far
    pub fn set_column_style(&mut self, style: StyleId, column: &str) -> Result<()> {
        let range = self.cursor.column_range(column)?;
        self.engine.set_cell_style(self.cursor.name(), range, style)
    }

    /// Apply `style` to one cell
    pub fn set_cell_style(&mut self, address: &str, style: StyleId) -> Result<()> {
        let cell = CellAddress::parse(address)?;
        self.engine
            .set_cell_style(self.cursor.name(), CellRange::single(cell), style)
    }

    /// Write one value at `address`, with the same width rules as [`add_row`](Self::add_row)
    pub fn set_cell_value<V: Into<CellValue>>(&mut self, address: &str, value: V) -> Result<()> {
        let cell = CellAddress::parse(address)?;
        self.write_value(cell, &value.into())
    }

    /// Store a `SUBTOTAL(9, ...)` of the data rows of `column` at `target`
    pub fn subtotal(&mut self, target: &str, column: &str) -> Result<()> {
        self.subtotal_with(target, column, SubtotalFunction::Sum)
    }

    /// Store a `SUBTOTAL` of the data rows of `column` at `target`
    pub fn subtotal_with(
        &mut self,
        target: &str,
        column: &str,
        function: SubtotalFunction,
    ) -> Result<()> {
        let cell = CellAddress::parse(target)?;
        let range = self.cursor.column_range(column)?;
        let formula = subtotal_formula(function, &range);
        log::debug!("sheet '{}': {} = {}", self.name(), cell, formula);
        self.engine
            .set_cell_formula(self.cursor.name(), cell, &formula)
    }

    /// Freeze the first `row_split` rows and `col_split` columns
    pub fn freeze(&mut self, row_split: u32, col_split: u32) -> Result<()> {
        let panes = Panes::frozen_at(row_split, col_split)?;
        self.engine.set_panes(self.cursor.name(), &panes)
    }

    fn write_value(&mut self, cell: CellAddress, value: &CellValue) -> Result<()> {
        let instruction = classify(value, self.options);
        let sheet = self.cursor.name();

        if let Some(rule) = instruction.width {
            let current = self.engine.column_width(sheet, cell.col)?;
            match rule.resolve(current) {
                Some(width) => {
                    log::trace!(
                        "{}!{}: column width {} -> {}",
                        sheet,
                        cell.column_letters(),
                        current,
                        width
                    );
                    self.engine.set_column_width(sheet, cell.col, width)?;
                }
                None => {
                    if let WidthRule::Fit(width) = rule {
                        if width >= MAX_COLUMN_WIDTH {
                            log::warn!(
                                "{}!{}: text needs width {}, column left at {}",
                                sheet,
                                cell,
                                width,
                                current
                            );
                        }
                    }
                }
            }
        }

        log::trace!("{}!{} <- {}", sheet, cell, value);
        match instruction.write {
            CellWrite::Str(text) => self.engine.set_cell_str(sheet, cell, &text),
            CellWrite::Int(n) => self.engine.set_cell_int(sheet, cell, n),
            CellWrite::Float { value, precision } => {
                self.engine.set_cell_float(sheet, cell, value, precision)
            }
        }
    }
}
