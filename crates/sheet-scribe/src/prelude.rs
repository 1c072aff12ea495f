//! Prelude module - common imports for sheet-scribe users
//!
//! ```rust
//! use sheet_scribe::prelude::*;
//! ```

pub use crate::{
    BooleanLabels,
    CellAddress,
    CellRange,
    CellValue,
    Color,
    DocumentEngine,
    Error,
    MemoryEngine,
    Result,
    Sheet,
    SheetId,
    StyleId,
    StyleSet,
    SubtotalFunction,
    Workbook,
    WorkbookOptions,
};

#[cfg(feature = "xlsx")]
pub use crate::XlsxEngine;
