//! Cell address and range types
//!
//! Both rows and columns are 1-based here, the way they appear in A1 notation:
//! column 1 is "A", row 1 is "1".

use crate::error::{Error, Result};
use crate::{MAX_COLS, MAX_ROWS};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Convert a 1-based column index to letters (1 = A, 26 = Z, 27 = AA, etc.)
///
/// # Examples
/// ```
/// use sheet_scribe_core::column_name;
///
/// assert_eq!(column_name(1).unwrap(), "A");
/// assert_eq!(column_name(702).unwrap(), "ZZ");
/// assert!(column_name(0).is_err());
/// ```
pub fn column_name(col: u32) -> Result<String> {
    if col == 0 || col > MAX_COLS {
        return Err(Error::InvalidColumn(col.to_string()));
    }

    let mut result = String::new();
    let mut n = col;
    while n > 0 {
        n -= 1;
        let c = ((n % 26) as u8 + b'A') as char;
        result.insert(0, c);
        n /= 26;
    }

    Ok(result)
}

/// Convert column letters to a 1-based index (A = 1, Z = 26, AA = 27, etc.)
///
/// Letters are case-insensitive.
pub fn column_index(letters: &str) -> Result<u32> {
    if letters.is_empty() {
        return Err(Error::InvalidColumn("empty column letters".into()));
    }

    let mut col: u32 = 0;
    for c in letters.chars() {
        if !c.is_ascii_alphabetic() {
            return Err(Error::InvalidColumn(letters.to_string()));
        }
        col = col * 26 + (c.to_ascii_uppercase() as u32 - 'A' as u32 + 1);
        if col > MAX_COLS {
            return Err(Error::InvalidColumn(letters.to_string()));
        }
    }

    Ok(col)
}

/// Format a 1-based (column, row) pair as an A1-style string
pub fn cell_address(col: u32, row: u32) -> Result<String> {
    CellAddress::new(col, row).map(|addr| addr.to_string())
}

/// Split an A1-style address into its 1-based (column, row)
///
/// ```
/// use sheet_scribe_core::parse_cell;
///
/// assert_eq!(parse_cell("B12").unwrap(), (2, 12));
/// assert_eq!(parse_cell("AA3").unwrap(), (27, 3));
/// ```
pub fn parse_cell(text: &str) -> Result<(u32, u32)> {
    CellAddress::parse(text).map(|addr| (addr.col, addr.row))
}

/// First and last cell of a row, spanning `column_count` columns from column A
pub fn row_range(row: u32, column_count: u32) -> Result<CellRange> {
    Ok(CellRange::new(
        CellAddress::new(1, row)?,
        CellAddress::new(column_count, row)?,
    ))
}

/// Data cells of a column: rows `start_index + 1` through `write_row - 1`
///
/// The header row (`start_index`) and the row the cursor points at (`write_row`, not
/// written yet) are both left out. The range is not normalized, so a sheet holding
/// only its header yields an inverted range such as `A3:A2`.
pub fn column_range(column: &str, start_index: u32, write_row: u32) -> Result<CellRange> {
    let col = column_index(column)?;
    let last_row = write_row.checked_sub(1).ok_or_else(|| {
        Error::InvalidAddress(format!("no rows before row {} in column {}", write_row, column))
    })?;

    Ok(CellRange::new(
        CellAddress::new(col, start_index.saturating_add(1))?,
        CellAddress::new(col, last_row)?,
    ))
}

/// A cell address (e.g., "A1", "XFD1048576")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellAddress {
    /// Row number (1-based)
    pub row: u32,
    /// Column number (1-based, A=1)
    pub col: u32,
}

impl CellAddress {
    /// Create a new cell address from a 1-based column and row
    pub fn new(col: u32, row: u32) -> Result<Self> {
        if col == 0 || col > MAX_COLS {
            return Err(Error::InvalidColumn(col.to_string()));
        }
        if row == 0 || row > MAX_ROWS {
            return Err(Error::InvalidAddress(format!(
                "row {} out of bounds (1..={})",
                row, MAX_ROWS
            )));
        }
        Ok(Self { row, col })
    }

    /// Parse a cell address from A1-style notation
    ///
    /// One absolute marker (`$`) is accepted before the column letters and one
    /// before the row number; both are dropped.
    ///
    /// # Examples
    /// ```
    /// use sheet_scribe_core::CellAddress;
    ///
    /// let addr = CellAddress::parse("AB12").unwrap();
    /// assert_eq!(addr.col, 28);
    /// assert_eq!(addr.row, 12);
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::InvalidAddress("empty address".into()));
        }

        // At most one `$` before the letters and one before the digits
        let rest = s.strip_prefix('$').unwrap_or(s);
        let split = rest
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(rest.len());
        let (letters, digits) = rest.split_at(split);
        let digits = digits.strip_prefix('$').unwrap_or(digits);

        if letters.is_empty() {
            return Err(Error::InvalidAddress(format!(
                "no column letters in '{}'",
                s
            )));
        }
        if digits.is_empty() {
            return Err(Error::InvalidAddress(format!("no row number in '{}'", s)));
        }
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidAddress(format!(
                "invalid row number in '{}'",
                s
            )));
        }

        let col = column_index(letters)?;
        let row: u32 = digits
            .parse()
            .map_err(|_| Error::InvalidAddress(format!("invalid row number in '{}'", s)))?;

        Self::new(col, row)
    }

    /// Column letters of this address
    pub fn column_letters(&self) -> String {
        // `new` and `parse` already bounded the column
        column_name(self.col).unwrap_or_default()
    }

    /// Create a range from this address to another
    pub fn to(&self, other: CellAddress) -> CellRange {
        CellRange::new(*self, other)
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column_letters(), self.row)
    }
}

impl FromStr for CellAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for CellAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A range of cells (e.g., "A1:F1")
///
/// The corners are kept in the order they were given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRange {
    /// First corner
    pub start: CellAddress,
    /// Last corner
    pub end: CellAddress,
}

impl CellRange {
    /// Create a range between two corners
    pub fn new(start: CellAddress, end: CellAddress) -> Self {
        Self { start, end }
    }

    /// Create a single-cell range
    pub fn single(addr: CellAddress) -> Self {
        Self {
            start: addr,
            end: addr,
        }
    }

    /// Parse a range from A1:B10 notation, or a single cell
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();

        match s.split_once(':') {
            Some((start, end)) => Ok(Self::new(
                CellAddress::parse(start)?,
                CellAddress::parse(end)?,
            )),
            None => Ok(Self::single(CellAddress::parse(s)?)),
        }
    }

    /// Top-left and bottom-right corners, whatever order the range was built in
    pub fn normalized(&self) -> (CellAddress, CellAddress) {
        (
            CellAddress {
                row: self.start.row.min(self.end.row),
                col: self.start.col.min(self.end.col),
            },
            CellAddress {
                row: self.start.row.max(self.end.row),
                col: self.start.col.max(self.end.col),
            },
        )
    }

    /// Iterate over all cell addresses in the range (row by row)
    pub fn cells(&self) -> impl Iterator<Item = CellAddress> {
        let (top_left, bottom_right) = self.normalized();
        (top_left.row..=bottom_right.row).flat_map(move |row| {
            (top_left.col..=bottom_right.col).map(move |col| CellAddress { row, col })
        })
    }

    /// Check if a cell is within this range
    pub fn contains(&self, addr: &CellAddress) -> bool {
        let (top_left, bottom_right) = self.normalized();
        (top_left.row..=bottom_right.row).contains(&addr.row)
            && (top_left.col..=bottom_right.col).contains(&addr.col)
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start, self.end)
    }
}

impl FromStr for CellRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for CellRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_name() {
        assert_eq!(column_name(1).unwrap(), "A");
        assert_eq!(column_name(2).unwrap(), "B");
        assert_eq!(column_name(26).unwrap(), "Z");
        assert_eq!(column_name(27).unwrap(), "AA");
        assert_eq!(column_name(28).unwrap(), "AB");
        assert_eq!(column_name(702).unwrap(), "ZZ");
        assert_eq!(column_name(703).unwrap(), "AAA");
        assert_eq!(column_name(16384).unwrap(), "XFD"); // Max Excel column
    }

    #[test]
    fn test_column_name_rejects_out_of_bounds() {
        assert!(matches!(column_name(0), Err(Error::InvalidColumn(_))));
        assert!(matches!(column_name(16385), Err(Error::InvalidColumn(_))));
    }

    #[test]
    fn test_column_index() {
        assert_eq!(column_index("A").unwrap(), 1);
        assert_eq!(column_index("Z").unwrap(), 26);
        assert_eq!(column_index("AA").unwrap(), 27);
        assert_eq!(column_index("XFD").unwrap(), 16384);

        // Case insensitive
        assert_eq!(column_index("aa").unwrap(), 27);

        assert!(matches!(column_index(""), Err(Error::InvalidColumn(_))));
        assert!(matches!(column_index("A1"), Err(Error::InvalidColumn(_))));
        assert!(matches!(column_index("XFE"), Err(Error::InvalidColumn(_))));
    }

    #[test]
    fn test_cell_address() {
        assert_eq!(cell_address(1, 1).unwrap(), "A1");
        assert_eq!(cell_address(3, 100).unwrap(), "C100");
        assert!(cell_address(0, 1).is_err());
        assert!(cell_address(1, 0).is_err());
    }

    #[test]
    fn test_parse() {
        let addr = CellAddress::parse("B2").unwrap();
        assert_eq!((addr.col, addr.row), (2, 2));

        let addr = CellAddress::parse("$AA$10").unwrap();
        assert_eq!((addr.col, addr.row), (27, 10));

        assert!(CellAddress::parse("").is_err());
        assert!(CellAddress::parse("A").is_err());
        assert!(CellAddress::parse("1").is_err());
        assert!(CellAddress::parse("A0").is_err());
        assert!(CellAddress::parse("A1048577").is_err());
        assert!(CellAddress::parse("A1B").is_err());
    }

    #[test]
    fn test_parse_absolute_markers() {
        for text in ["$A1", "A$1", "$A$1"] {
            let addr = CellAddress::parse(text).unwrap();
            assert_eq!((addr.col, addr.row), (1, 1), "{}", text);
        }

        for text in ["A1$", "$$A1", "A$$1", "$", "A$", "$1", "A1$2", "A+1"] {
            assert!(
                matches!(CellAddress::parse(text), Err(Error::InvalidAddress(_))),
                "{} should not parse",
                text
            );
        }
    }

    #[test]
    fn test_row_range() {
        let range = row_range(2, 6).unwrap();
        assert_eq!(range.to_string(), "A2:F2");

        assert!(matches!(row_range(2, 0), Err(Error::InvalidColumn(_))));
    }

    #[test]
    fn test_column_range_excludes_header_and_cursor_row() {
        let range = column_range("A", 2, 5).unwrap();
        assert_eq!(range.to_string(), "A3:A4");

        let range = column_range("c", 1, 10).unwrap();
        assert_eq!(range.to_string(), "C2:C9");
    }

    #[test]
    fn test_column_range_header_only_is_inverted() {
        let range = column_range("B", 2, 3).unwrap();
        assert_eq!(range.to_string(), "B3:B2");
    }

    #[test]
    fn test_column_range_errors() {
        assert!(matches!(column_range("1", 2, 5), Err(Error::InvalidColumn(_))));
        assert!(matches!(column_range("A", 1, 1), Err(Error::InvalidAddress(_))));
    }

    #[test]
    fn test_range_cells_and_contains() {
        let range = CellRange::parse("A1:B2").unwrap();
        let cells: Vec<_> = range.cells().map(|c| c.to_string()).collect();
        assert_eq!(cells, vec!["A1", "B1", "A2", "B2"]);

        assert!(range.contains(&CellAddress::parse("B2").unwrap()));
        assert!(!range.contains(&CellAddress::parse("C1").unwrap()));

        let inverted = CellRange::parse("B3:B2").unwrap();
        assert_eq!(inverted.cells().count(), 2);
    }
}
