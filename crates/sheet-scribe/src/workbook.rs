//! Workbook registry: the engine, the named styles and one cursor per sheet

use std::fmt;
use std::path::{Path, PathBuf};

use sheet_scribe_core::{
    DocumentEngine, Error, Result, SheetCursor, StyleSet, WorkbookOptions,
};

use crate::sheet::Sheet;

/// Handle to a sheet of a [`Workbook`]
///
/// Returned by [`Workbook::new_sheet`] and [`Workbook::default_sheet_id`]; only
/// meaningful for the workbook that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SheetId(usize);

impl SheetId {
    /// Position of the sheet in the workbook
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for SheetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sheet #{}", self.0)
    }
}

/// A spreadsheet document under construction
///
/// # Example
///
/// ```rust
/// use sheet_scribe::{CellValue, MemoryEngine, Workbook, WorkbookOptions};
///
/// let mut workbook =
///     Workbook::with_engine(MemoryEngine::new(), "General", 2, WorkbookOptions::default())
///         .unwrap();
/// let demo = workbook.new_sheet("Demo", 2).unwrap();
///
/// let mut sheet = workbook.sheet(demo).unwrap();
/// sheet.add_row_header(["ID", "Name"]).unwrap();
/// sheet.add_row([CellValue::from(1), CellValue::from("Rick")]).unwrap();
/// assert_eq!(sheet.write_row(), 4);
/// ```
pub struct Workbook<E: DocumentEngine> {
    engine: E,
    /// Cursors, indexed by [`SheetId`]
    sheets: Vec<SheetCursor>,
    styles: StyleSet,
    options: WorkbookOptions,
    default_sheet: SheetId,
}

#[cfg(feature = "xlsx")]
impl Workbook<sheet_scribe_xlsx::XlsxEngine> {
    /// Create an XLSX workbook whose first sheet is `default_sheet`
    ///
    /// Rows of the default sheet start at `start_index` (1-based).
    pub fn new(default_sheet: &str, start_index: u32) -> Result<Self> {
        Self::with_options(default_sheet, start_index, WorkbookOptions::default())
    }

    /// Create an XLSX workbook with custom options
    pub fn with_options(
        default_sheet: &str,
        start_index: u32,
        options: WorkbookOptions,
    ) -> Result<Self> {
        Self::with_engine(
            sheet_scribe_xlsx::XlsxEngine::new(),
            default_sheet,
            start_index,
            options,
        )
    }
}

impl<E: DocumentEngine> Workbook<E> {
    /// Create a workbook on top of `engine`
    ///
    /// Registers the named styles, then renames the engine's first sheet to
    /// `default_sheet`. Any engine error is returned.
    pub fn with_engine(
        mut engine: E,
        default_sheet: &str,
        start_index: u32,
        options: WorkbookOptions,
    ) -> Result<Self> {
        let cursor = SheetCursor::new(default_sheet, start_index)?;
        let styles = StyleSet::allocate(&mut engine, &options)?;

        let first = engine
            .first_sheet_name()
            .ok_or_else(|| Error::UnknownSheet("<first sheet>".into()))?;
        if first != default_sheet {
            engine.rename_sheet(&first, default_sheet)?;
        }
        log::debug!(
            "workbook created, default sheet '{}' starting at row {}",
            default_sheet,
            start_index
        );

        Ok(Self {
            engine,
            sheets: vec![cursor],
            styles,
            options,
            default_sheet: SheetId(0),
        })
    }

    /// Add a sheet whose rows start at `start_index`
    ///
    /// Fails with [`Error::DuplicateSheet`] if the name is taken; the workbook is
    /// left as it was.
    pub fn new_sheet(&mut self, name: &str, start_index: u32) -> Result<SheetId> {
        let cursor = SheetCursor::new(name, start_index)?;
        if self.find(name).is_some() {
            return Err(Error::DuplicateSheet(name.to_string()));
        }
        self.engine.new_sheet(name)?;

        let id = SheetId(self.sheets.len());
        self.sheets.push(cursor);
        log::debug!("registered sheet '{}' as {}", name, id);
        Ok(id)
    }

    /// Builder view of a sheet
    pub fn sheet(&mut self, id: SheetId) -> Result<Sheet<'_, E>> {
        let Self {
            engine,
            sheets,
            styles,
            options,
            ..
        } = self;
        let cursor = sheets
            .get_mut(id.0)
            .ok_or_else(|| Error::UnknownSheet(id.to_string()))?;
        Ok(Sheet::new(engine, cursor, styles, options))
    }

    /// Builder view of a sheet, looked up by name
    pub fn sheet_by_name(&mut self, name: &str) -> Result<Sheet<'_, E>> {
        let id = self.sheet_id(name)?;
        self.sheet(id)
    }

    /// Builder view of the default sheet
    pub fn default_sheet(&mut self) -> Sheet<'_, E> {
        let Self {
            engine,
            sheets,
            styles,
            options,
            default_sheet,
        } = self;
        Sheet::new(engine, &mut sheets[default_sheet.0], styles, options)
    }

    /// Handle of the default sheet
    pub fn default_sheet_id(&self) -> SheetId {
        self.default_sheet
    }

    /// Handle of a sheet by name
    pub fn sheet_id(&self, name: &str) -> Result<SheetId> {
        self.find(name)
            .ok_or_else(|| Error::UnknownSheet(name.to_string()))
    }

    /// Cursor state of a sheet
    pub fn cursor(&self, id: SheetId) -> Result<&SheetCursor> {
        self.sheets
            .get(id.0)
            .ok_or_else(|| Error::UnknownSheet(id.to_string()))
    }

    /// Number of sheets
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    /// Sheet names, in creation order
    pub fn sheet_names(&self) -> impl Iterator<Item = &str> {
        self.sheets.iter().map(|s| s.name())
    }

    /// The named styles allocated at creation
    pub fn styles(&self) -> StyleSet {
        self.styles
    }

    /// Workbook options
    pub fn options(&self) -> &WorkbookOptions {
        &self.options
    }

    /// The underlying engine
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// The underlying engine, for operations the builder does not cover
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// Consume the workbook and return the engine
    pub fn into_engine(self) -> E {
        self.engine
    }

    /// Serialize the document into memory
    pub fn output(&mut self) -> Result<Vec<u8>> {
        self.engine.write_to_vec()
    }

    /// Serialize the document to `path`
    pub fn save_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        self.engine.save_as(path.as_ref())
    }

    /// Serialize the document to a new file in the system temp directory
    ///
    /// The file is named after the current timestamp and is not removed; the
    /// caller owns it.
    pub fn save_tmp(&mut self) -> Result<PathBuf> {
        let path = temp_path(self.engine.file_extension());
        self.engine.save_as(&path).map_err(|e| match e {
            Error::Io(io) => Error::TempFileFailure(io),
            other => other,
        })?;
        log::debug!("saved temporary copy to {}", path.display());
        Ok(path)
    }

    /// Exact, case-sensitive name lookup first; case-insensitive as a fallback,
    /// since sheet names are unique regardless of case
    fn find(&self, name: &str) -> Option<SheetId> {
        self.sheets
            .iter()
            .position(|s| s.name() == name)
            .or_else(|| {
                let lower = name.to_lowercase();
                self.sheets
                    .iter()
                    .position(|s| s.name().to_lowercase() == lower)
            })
            .map(SheetId)
    }
}

impl<E: DocumentEngine + fmt::Debug> fmt::Debug for Workbook<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Workbook")
            .field("engine", &self.engine)
            .field("sheets", &self.sheets)
            .field("styles", &self.styles)
            .field("default_sheet", &self.default_sheet)
            .finish()
    }
}

fn temp_path(extension: &str) -> PathBuf {
    let now = chrono::Utc::now();
    std::env::temp_dir().join(format!(
        "{}-{:09}.{}",
        now.timestamp(),
        now.timestamp_subsec_nanos(),
        extension
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheet_scribe_core::MemoryEngine;

    fn workbook() -> Workbook<MemoryEngine> {
        Workbook::with_engine(MemoryEngine::new(), "General", 2, WorkbookOptions::default())
            .unwrap()
    }

    #[test]
    fn test_new_workbook() {
        let wb = workbook();
        assert_eq!(wb.sheet_count(), 1);
        assert_eq!(wb.sheet_names().collect::<Vec<_>>(), vec!["General"]);
        assert_eq!(wb.engine().sheet_names(), vec!["General".to_string()]);
        assert_eq!(wb.default_sheet_id(), SheetId(0));
        assert_eq!(wb.cursor(SheetId(0)).unwrap().write_row(), 2);
        assert_eq!(wb.engine().styles().len(), 3);
    }

    #[test]
    fn test_new_sheet() {
        let mut wb = workbook();
        let id = wb.new_sheet("Demo", 3).unwrap();
        assert_eq!(id.index(), 1);
        assert_eq!(wb.sheet_id("Demo").unwrap(), id);
        assert_eq!(wb.cursor(id).unwrap().start_index(), 3);
    }

    #[test]
    fn test_unknown_sheet() {
        let mut wb = workbook();
        assert!(matches!(wb.sheet_id("Nope"), Err(Error::UnknownSheet(_))));
        assert!(matches!(wb.sheet(SheetId(7)), Err(Error::UnknownSheet(_))));
        assert!(matches!(
            wb.sheet_by_name("Nope"),
            Err(Error::UnknownSheet(_))
        ));
    }

    #[test]
    fn test_invalid_start_index() {
        let mut wb = workbook();
        assert!(matches!(
            wb.new_sheet("Demo", 0),
            Err(Error::InvalidAddress(_))
        ));
        assert_eq!(wb.sheet_count(), 1);
        assert!(wb.engine().sheet("Demo").is_none());
    }

    #[test]
    fn test_temp_path_is_in_temp_dir() {
        let path = temp_path("xlsx");
        assert!(path.starts_with(std::env::temp_dir()));
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("xlsx"));
    }
}
