//! # sheet-scribe-xlsx
//!
//! XLSX (Office Open XML) document engine for sheet-scribe.
//!
//! [`XlsxEngine`] buffers the document in a
//! [`MemoryEngine`](sheet_scribe_core::MemoryEngine) while it is being built and
//! renders it through `rust_xlsxwriter` whenever it is saved.

pub mod engine;
pub mod error;

mod format;

pub use engine::XlsxEngine;
pub use error::{XlsxError, XlsxResult};
