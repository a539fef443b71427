//! Versioned, owned snapshots of a grid model.
//!
//! A presentation layer that renders off the model's thread, or that wants
//! to diff successive states, takes a [`GridSnapshot`] and compares
//! [`version`](GridSnapshot::version)s instead of observing the model's
//! containers directly.

use serde::{Deserialize, Serialize};

use super::selection::Selection;

/// An owned copy of a model's cells and selection at one version.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GridSnapshot {
    /// The model version the snapshot was taken at.
    pub version: u64,
    /// The cells, row by row.
    pub cells: Vec<Vec<String>>,
    /// The selection.
    pub selection: Selection,
}

impl GridSnapshot {
    /// Returns the number of rows.
    pub fn row_count(&self) -> usize {
        self.cells.len()
    }

    /// Returns the number of columns, taken from row 0.
    pub fn column_count(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    /// Returns the text of a cell, if it exists.
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.cells.get(row)?.get(column).map(String::as_str)
    }

    /// Returns `true` if this snapshot is older than `other`.
    pub fn is_stale(&self, other: &GridSnapshot) -> bool {
        self.version < other.version
    }
}

static_assertions::assert_impl_all!(GridSnapshot: Send, Sync);
