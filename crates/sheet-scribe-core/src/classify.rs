//! Value classification: how each [`CellValue`] kind is written
//!
//! [`classify`] is pure. It returns the engine primitive to call and the column
//! width adjustment to make before calling it; the caller performs both.

use crate::options::WorkbookOptions;
use crate::value::CellValue;
use crate::MAX_COLUMN_WIDTH;

/// Extra width added to the character count of text cells
pub const TEXT_WIDTH_PADDING: usize = 4;

/// Column width change that goes with a write
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WidthRule {
    /// Widen to this width if it is wider than the column and below the width cap
    Fit(f64),
    /// Set exactly this width
    Fixed(f64),
}

impl WidthRule {
    /// Width to set given the column's current width, or `None` to leave it alone
    pub fn resolve(&self, current: f64) -> Option<f64> {
        match *self {
            WidthRule::Fit(width) if width > current && width < MAX_COLUMN_WIDTH => Some(width),
            WidthRule::Fit(_) => None,
            WidthRule::Fixed(width) => Some(width),
        }
    }
}

/// The typed write primitive for a cell
#[derive(Debug, Clone, PartialEq)]
pub enum CellWrite {
    /// String cell
    Str(String),
    /// Integer cell
    Int(i64),
    /// Numeric cell with a fixed number of decimal places
    Float { value: f64, precision: u8 },
}

/// Everything needed to write one value
#[derive(Debug, Clone, PartialEq)]
pub struct WriteInstruction {
    /// Width adjustment applied to the target column before the write
    pub width: Option<WidthRule>,
    /// The write itself
    pub write: CellWrite,
}

/// Decide how `value` is written
///
/// # Examples
/// ```
/// use sheet_scribe_core::{classify, CellValue, CellWrite, WidthRule, WorkbookOptions};
///
/// let options = WorkbookOptions::default();
/// let instruction = classify(&CellValue::from("Rick"), &options);
/// assert_eq!(instruction.width, Some(WidthRule::Fit(8.0)));
/// assert_eq!(instruction.write, CellWrite::Str("Rick".into()));
/// ```
pub fn classify(value: &CellValue, options: &WorkbookOptions) -> WriteInstruction {
    match value {
        CellValue::Text(text) => WriteInstruction {
            // Width counts characters, not bytes
            width: Some(WidthRule::Fit(
                (text.chars().count() + TEXT_WIDTH_PADDING) as f64,
            )),
            write: CellWrite::Str(text.clone()),
        },
        CellValue::Integer(n) => WriteInstruction {
            width: None,
            write: CellWrite::Int(*n),
        },
        CellValue::Float(n) => WriteInstruction {
            width: Some(WidthRule::Fixed(options.float_column_width)),
            write: CellWrite::Float {
                value: *n,
                precision: options.float_precision,
            },
        },
        CellValue::Boolean(b) => WriteInstruction {
            width: None,
            write: CellWrite::Str(options.boolean_labels.label(*b).to_string()),
        },
    }
}
