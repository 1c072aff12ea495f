//! Error types for sheet-scribe-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a document
#[derive(Debug, Error)]
pub enum Error {
    /// Column index outside `1..=MAX_COLS`, or column letters that do not name a column
    #[error("Invalid column: {0}")]
    InvalidColumn(String),

    /// Invalid cell address or row number
    #[error("Invalid cell address: {0}")]
    InvalidAddress(String),

    /// Sheet not registered in the workbook or engine
    #[error("Sheet not found: {0}")]
    UnknownSheet(String),

    /// Sheet name already taken
    #[error("Sheet name already exists: {0}")]
    DuplicateSheet(String),

    /// Sheet name the document format cannot hold
    #[error("Invalid sheet name: {0}")]
    InvalidSheetName(String),

    /// The document engine rejected a cell, style, formula or pane operation
    #[error("Document engine error: {0}")]
    EngineWriteFailure(String),

    /// Creating, reading or removing a temporary output file failed
    #[error("Temporary file error: {0}")]
    TempFileFailure(#[source] std::io::Error),

    /// IO error while writing an output file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an engine failure from any displayable reason
    pub fn engine<S: ToString>(reason: S) -> Self {
        Error::EngineWriteFailure(reason.to_string())
    }
}
