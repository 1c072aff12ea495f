//! XLSX error types

use thiserror::Error;

/// Result type for XLSX operations
pub type XlsxResult<T> = std::result::Result<T, XlsxError>;

/// Errors that can occur while rendering an XLSX file
#[derive(Debug, Error)]
pub enum XlsxError {
    /// Writer error
    #[error("XLSX writer error: {0}")]
    Writer(#[from] rust_xlsxwriter::XlsxError),

    /// Cell or column outside what the format can address
    #[error("Out of XLSX bounds: {0}")]
    OutOfBounds(String),

    /// Core error
    #[error("Core error: {0}")]
    Core(#[from] sheet_scribe_core::Error),
}

impl From<XlsxError> for sheet_scribe_core::Error {
    fn from(err: XlsxError) -> Self {
        match err {
            XlsxError::Core(inner) => inner,
            other => sheet_scribe_core::Error::engine(other),
        }
    }
}
