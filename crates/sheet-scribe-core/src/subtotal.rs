//! SUBTOTAL formula text

use crate::address::CellRange;
use std::fmt;

/// Aggregation codes of the spreadsheet `SUBTOTAL` function
///
/// Codes 1-11 skip rows hidden by an auto-filter but still count rows hidden by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubtotalFunction {
    Average,
    Count,
    CountA,
    Max,
    Min,
    Sum,
}

impl SubtotalFunction {
    /// Function code used in the formula
    pub fn code(&self) -> u8 {
        match self {
            SubtotalFunction::Average => 1,
            SubtotalFunction::Count => 2,
            SubtotalFunction::CountA => 3,
            SubtotalFunction::Max => 4,
            SubtotalFunction::Min => 5,
            SubtotalFunction::Sum => 9,
        }
    }
}

impl fmt::Display for SubtotalFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// `SUBTOTAL(<code>,<range>)` formula text, without a leading `=`
pub fn subtotal_formula(function: SubtotalFunction, range: &CellRange) -> String {
    format!("SUBTOTAL({},{})", function, range)
}
