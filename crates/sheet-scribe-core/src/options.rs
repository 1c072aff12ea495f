//! Workbook-wide settings

use crate::style::Color;

/// Labels written in place of boolean values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BooleanLabels {
    /// Text written for `true`
    pub yes: String,
    /// Text written for `false`
    pub no: String,
}

impl BooleanLabels {
    /// Create a label pair
    pub fn new<Y: Into<String>, N: Into<String>>(yes: Y, no: N) -> Self {
        Self {
            yes: yes.into(),
            no: no.into(),
        }
    }

    /// Label for a boolean value
    pub fn label(&self, value: bool) -> &str {
        if value {
            &self.yes
        } else {
            &self.no
        }
    }
}

impl Default for BooleanLabels {
    fn default() -> Self {
        Self::new("Si", "No")
    }
}

/// Workbook-level settings
///
/// Fixed for the lifetime of a workbook; every sheet shares them.
#[derive(Debug, Clone)]
pub struct WorkbookOptions {
    /// Labels for boolean cells
    pub boolean_labels: BooleanLabels,
    /// Decimal places kept when writing float cells
    pub float_precision: u8,
    /// Width given to any column a float is written into
    pub float_column_width: f64,
    /// Fill color of the header style
    pub header_fill: Color,
    /// Number format of the money style
    pub money_format: String,
}

impl Default for WorkbookOptions {
    fn default() -> Self {
        Self {
            boolean_labels: BooleanLabels::default(),
            float_precision: 2,
            float_column_width: 15.0,
            header_fill: Color::rgb(0xF4, 0xF4, 0xF5),
            money_format: "\"$\"#,##0.00".to_string(),
        }
    }
}
