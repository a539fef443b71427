//! Cell addressing for the grid.
//!
//! A [`CellIndex`] is a plain `(row, column)` pair into the current grid.
//! Row 0 and column 0 form the header band: by convention the cells of row 0
//! label columns, the cells of column 0 label rows, and the corner `(0, 0)`
//! is usually blank.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the two grid axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// The vertical axis: indices address rows.
    Row,
    /// The horizontal axis: indices address columns.
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row => f.write_str("row"),
            Self::Column => f.write_str("column"),
        }
    }
}

/// The position of a cell in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CellIndex {
    /// The row of the cell.
    pub row: usize,
    /// The column of the cell.
    pub column: usize,
}

impl CellIndex {
    /// The top-left corner of the header band.
    pub const CORNER: Self = Self::new(0, 0);

    /// Creates a new cell index.
    #[inline]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Returns the index along `axis`.
    #[inline]
    pub fn on(self, axis: Axis) -> usize {
        match axis {
            Axis::Row => self.row,
            Axis::Column => self.column,
        }
    }

    /// Returns `true` for `(0, 0)`.
    #[inline]
    pub fn is_corner(self) -> bool {
        self == Self::CORNER
    }

    /// Returns `true` for a column label: row 0, any column but 0.
    #[inline]
    pub fn is_column_header(self) -> bool {
        self.row == 0 && self.column > 0
    }

    /// Returns `true` for a row label: column 0, any row but 0.
    #[inline]
    pub fn is_row_header(self) -> bool {
        self.column == 0 && self.row > 0
    }

    /// Returns `true` if the cell lies in row 0 or column 0.
    #[inline]
    pub fn is_in_header_band(self) -> bool {
        self.row == 0 || self.column == 0
    }
}

impl From<(usize, usize)> for CellIndex {
    fn from((row, column): (usize, usize)) -> Self {
        Self::new(row, column)
    }
}

impl fmt::Display for CellIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}
