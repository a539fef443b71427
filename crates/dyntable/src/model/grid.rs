//! Rectangular storage for the grid's text cells.
//!
//! [`Grid`] owns an ordered sequence of rows, each an ordered sequence of
//! string cells. It knows nothing about selection or the header band beyond
//! the "Row N"/"Col N" labelling conventions used when rows and columns are
//! created.
//!
//! Column-wide operations are atomic: they validate rectangularity and every
//! index up front, and only then touch the rows. After validation no step can
//! fail, so a refused operation leaves every row exactly as it was.

use serde::{Deserialize, Serialize};

use super::index::{Axis, CellIndex};
use crate::error::{GridError, Result};

/// Returns the label written into column 0 of a new row.
pub fn row_label(row: usize) -> String {
    format!("Row {row}")
}

/// Returns the label written into row 0 of a new column.
pub fn column_label(column: usize) -> String {
    format!("Col {column}")
}

/// A two-dimensional grid of text cells.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid {
    rows: Vec<Vec<String>>,
}

impl Grid {
    /// Creates an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a `row_count` x `column_count` grid with labelled header band.
    ///
    /// Cells `(i, 0)` for `i >= 1` read "Row i", cells `(0, j)` for `j >= 1`
    /// read "Col j", everything else (including the corner) is empty.
    pub fn labeled(row_count: usize, column_count: usize) -> Self {
        let mut rows = vec![vec![String::new(); column_count]; row_count];
        if column_count > 0 {
            for (i, row) in rows.iter_mut().enumerate().skip(1) {
                row[0] = row_label(i);
            }
        }
        if let Some(header) = rows.first_mut() {
            for (j, cell) in header.iter_mut().enumerate().skip(1) {
                *cell = column_label(j);
            }
        }
        Self { rows }
    }

    /// Wraps caller-supplied rows verbatim. Rectangularity is not checked.
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Returns the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of columns, taken from row 0 (0 for an empty grid).
    pub fn column_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Returns the length of `axis`.
    pub fn len(&self, axis: Axis) -> usize {
        match axis {
            Axis::Row => self.row_count(),
            Axis::Column => self.column_count(),
        }
    }

    /// Returns `true` if the grid has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns all rows.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Returns the row at `row`, if it exists.
    pub fn row(&self, row: usize) -> Option<&[String]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    /// Returns the text of a cell, if it exists.
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row)?.get(column).map(String::as_str)
    }

    /// Consumes the grid, returning its rows.
    pub fn into_rows(self) -> Vec<Vec<String>> {
        self.rows
    }

    /// Returns `true` if every row has the length of row 0.
    pub fn is_rectangular(&self) -> bool {
        self.check_rectangular().is_ok()
    }

    /// Fails with [`GridError::NotRectangular`] naming the first ragged row.
    pub fn check_rectangular(&self) -> Result<()> {
        let expected = self.column_count();
        match self
            .rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != expected)
        {
            Some((row, cells)) => Err(GridError::NotRectangular {
                row,
                expected,
                found: cells.len(),
            }),
            None => Ok(()),
        }
    }

    /// Fails with [`GridError::IndexOutOfRange`] unless `index < len(axis)`.
    pub fn check_index(&self, axis: Axis, index: usize) -> Result<()> {
        let len = self.len(axis);
        if index < len {
            Ok(())
        } else {
            Err(GridError::IndexOutOfRange { axis, index, len })
        }
    }

    /// Fails with [`GridError::IndexOutOfRange`] unless the cell exists.
    ///
    /// The column is checked against the length of the addressed row, so
    /// this also works on ragged grids.
    pub fn check_cell(&self, cell: CellIndex) -> Result<()> {
        self.check_index(Axis::Row, cell.row)?;
        let len = self.rows[cell.row].len();
        if cell.column < len {
            Ok(())
        } else {
            Err(GridError::IndexOutOfRange {
                axis: Axis::Column,
                index: cell.column,
                len,
            })
        }
    }

    /// Replaces the text of a cell. Returns `true` if the text changed.
    pub fn set_cell(&mut self, cell: CellIndex, text: String) -> Result<bool> {
        self.check_cell(cell)?;
        let slot = &mut self.rows[cell.row][cell.column];
        if *slot == text {
            return Ok(false);
        }
        *slot = text;
        Ok(true)
    }

    /// Appends a row sized to the current column count and labels it.
    ///
    /// Returns the index of the new row. A grid without columns gets an
    /// empty, unlabelled row.
    pub fn push_row(&mut self) -> Result<usize> {
        if self.is_empty() {
            return Err(GridError::EmptyGrid);
        }
        let index = self.rows.len();
        let mut row = vec![String::new(); self.column_count()];
        if let Some(first) = row.first_mut() {
            *first = row_label(index);
        }
        self.rows.push(row);
        Ok(index)
    }

    /// Appends an empty cell to every row and labels the new column in row 0.
    ///
    /// Returns the index of the new column.
    pub fn push_column(&mut self) -> Result<usize> {
        if self.is_empty() {
            return Err(GridError::EmptyGrid);
        }
        self.check_rectangular()?;
        let index = self.column_count();
        for row in &mut self.rows {
            row.push(String::new());
        }
        self.rows[0][index] = column_label(index);
        Ok(index)
    }

    /// Removes and returns the row at `index`.
    pub fn remove_row(&mut self, index: usize) -> Result<Vec<String>> {
        self.check_index(Axis::Row, index)?;
        Ok(self.rows.remove(index))
    }

    /// Removes the column at `index` from every row, returning its cells.
    pub fn remove_column(&mut self, index: usize) -> Result<Vec<String>> {
        self.check_rectangular()?;
        self.check_index(Axis::Column, index)?;
        Ok(self.rows.iter_mut().map(|row| row.remove(index)).collect())
    }

    /// Relocates the row at `from` so that it ends up at index `to`.
    pub fn move_row(&mut self, from: usize, to: usize) -> Result<()> {
        self.check_index(Axis::Row, from)?;
        self.check_index(Axis::Row, to)?;
        let row = self.rows.remove(from);
        self.rows.insert(to, row);
        Ok(())
    }

    /// Relocates the column at `from` so that it ends up at index `to`, in every row.
    pub fn move_column(&mut self, from: usize, to: usize) -> Result<()> {
        self.check_rectangular()?;
        self.check_index(Axis::Column, from)?;
        self.check_index(Axis::Column, to)?;
        for row in &mut self.rows {
            let cell = row.remove(from);
            row.insert(to, cell);
        }
        Ok(())
    }
}

impl From<Vec<Vec<String>>> for Grid {
    fn from(rows: Vec<Vec<String>>) -> Self {
        Self::from_rows(rows)
    }
}

static_assertions::assert_impl_all!(Grid: Send, Sync);
