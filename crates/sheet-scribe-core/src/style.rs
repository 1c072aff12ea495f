//! Formatting intents and the handles the engine returns for them

use crate::engine::DocumentEngine;
use crate::error::Result;
use crate::options::WorkbookOptions;
use serde::Serialize;
use std::fmt;

/// RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create an RGB color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create from a hex string (e.g., "#FF0000" or "FF0000")
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 {
            return None;
        }
        let value = u32::from_str_radix(hex, 16).ok()?;
        Some(Self::from_u32(value))
    }

    /// Create from a packed `0xRRGGBB` value
    pub const fn from_u32(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }

    /// Packed `0xRRGGBB` value
    pub const fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Hex string with a leading `#`
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Color {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A formatting intent: what a style should look like
///
/// The engine turns a spec into whatever its format stores and hands back a
/// [`StyleId`].
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct StyleSpec {
    /// Bold font
    pub bold: bool,
    /// Solid background fill
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<Color>,
    /// Number format code (e.g., `#,##0.00`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_format: Option<String>,
}

impl StyleSpec {
    /// Create an empty spec
    pub fn new() -> Self {
        Self::default()
    }

    /// Set font to bold
    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Set fill color (solid fill)
    pub fn fill_color(mut self, color: Color) -> Self {
        self.fill = Some(color);
        self
    }

    /// Set number format string
    pub fn number_format<S: Into<String>>(mut self, format: S) -> Self {
        self.number_format = Some(format.into());
        self
    }
}

/// Opaque handle to a style registered with an engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct StyleId(pub u32);

impl fmt::Display for StyleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "style#{}", self.0)
    }
}

/// The named styles every workbook allocates when it is created
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleSet {
    /// Bold text on a light fill, used for header rows
    pub header: StyleId,
    /// Money number format
    pub money: StyleId,
    /// Bold text
    pub bold: StyleId,
}

impl StyleSet {
    /// Specs of the three named styles, in allocation order
    pub fn specs(options: &WorkbookOptions) -> [StyleSpec; 3] {
        [
            StyleSpec::new().bold(true).fill_color(options.header_fill),
            StyleSpec::new().number_format(options.money_format.clone()),
            StyleSpec::new().bold(true),
        ]
    }

    /// Register the named styles with `engine`
    ///
    /// The first failing registration is returned as the error.
    pub fn allocate<E: DocumentEngine + ?Sized>(
        engine: &mut E,
        options: &WorkbookOptions,
    ) -> Result<Self> {
        let [header, money, bold] = Self::specs(options);
        let set = Self {
            header: engine.new_style(&header)?,
            money: engine.new_style(&money)?,
            bold: engine.new_style(&bold)?,
        };
        log::debug!(
            "allocated styles: header={}, money={}, bold={}",
            set.header,
            set.money,
            set.bold
        );
        Ok(set)
    }
}
