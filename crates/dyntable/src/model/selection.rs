//! Selection state for the grid.
//!
//! At most one row or one column is selected at a time. Tapping a column
//! label selects that column, tapping a row label selects that row, and
//! tapping anywhere else (an interior cell or the corner) clears the
//! selection.
//!
//! ```text
//!            tap (0, c>0)                 tap (r>0, 0)
//!   None ─────────────────> Column(c)   None ─────────────> Row(r)
//!     ^                        │          ^                   │
//!     └──── tap interior ──────┘          └── delete / tap ───┘
//! ```
//!
//! The selected index is kept valid across structural edits: deleting the
//! selected line clears the selection, and moving lines remaps the index so
//! it keeps pointing at the same logical row or column.

use serde::{Deserialize, Serialize};

use super::index::{Axis, CellIndex};

/// The currently highlighted row or column, or nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "index", rename_all = "snake_case")]
pub enum Selection {
    /// Nothing is selected.
    #[default]
    None,
    /// The row at this index is selected.
    Row(usize),
    /// The column at this index is selected.
    Column(usize),
}

impl Selection {
    /// Selects `index` on `axis`.
    pub fn on_axis(axis: Axis, index: usize) -> Self {
        match axis {
            Axis::Row => Self::Row(index),
            Axis::Column => Self::Column(index),
        }
    }

    /// Resolves a tap on `cell` into the selection it produces.
    pub fn from_tap(cell: CellIndex) -> Self {
        if cell.is_column_header() {
            Self::Column(cell.column)
        } else if cell.is_row_header() {
            Self::Row(cell.row)
        } else {
            Self::None
        }
    }

    /// Returns the selected row, if a row is selected.
    pub fn row(self) -> Option<usize> {
        match self {
            Self::Row(row) => Some(row),
            _ => None,
        }
    }

    /// Returns the selected column, if a column is selected.
    pub fn column(self) -> Option<usize> {
        match self {
            Self::Column(column) => Some(column),
            _ => None,
        }
    }

    /// Returns the selected index on `axis`, if that axis is selected.
    pub fn index_on(self, axis: Axis) -> Option<usize> {
        match axis {
            Axis::Row => self.row(),
            Axis::Column => self.column(),
        }
    }

    /// Returns `true` if nothing is selected.
    pub fn is_none(self) -> bool {
        self == Self::None
    }

    /// Returns `true` if the cell shares the selected row or the selected column.
    ///
    /// This does not look at whether the cell is in the header band.
    pub fn highlights(self, row: usize, column: usize) -> bool {
        match self {
            Self::Row(selected) => selected == row,
            Self::Column(selected) => selected == column,
            Self::None => false,
        }
    }

    /// Returns the selection after the line at `index` on `axis` was removed.
    pub(crate) fn after_remove(self, axis: Axis, index: usize) -> Self {
        match self.index_on(axis) {
            Some(selected) if selected == index => Self::None,
            Some(selected) if selected > index => Self::on_axis(axis, selected - 1),
            _ => self,
        }
    }

    /// Returns the selection after a line on `axis` moved from `from` to `to`.
    pub(crate) fn after_move(self, axis: Axis, from: usize, to: usize) -> Self {
        let Some(selected) = self.index_on(axis) else {
            return self;
        };
        let remapped = if selected == from {
            to
        } else if from < selected && selected <= to {
            selected - 1
        } else if to <= selected && selected < from {
            selected + 1
        } else {
            selected
        };
        Self::on_axis(axis, remapped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tap_resolution() {
        assert_eq!(Selection::from_tap(CellIndex::new(0, 2)), Selection::Column(2));
        assert_eq!(Selection::from_tap(CellIndex::new(3, 0)), Selection::Row(3));
        assert_eq!(Selection::from_tap(CellIndex::new(1, 1)), Selection::None);
        assert_eq!(Selection::from_tap(CellIndex::CORNER), Selection::None);
    }

    #[test]
    fn test_highlights() {
        assert!(!Selection::None.highlights(0, 0));

        let row = Selection::Row(1);
        assert!(row.highlights(1, 0));
        assert!(row.highlights(1, 5));
        assert!(!row.highlights(2, 1));

        let column = Selection::Column(1);
        assert!(column.highlights(0, 1));
        assert!(column.highlights(4, 1));
        assert!(!column.highlights(1, 2));
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Selection::Row(2).row(), Some(2));
        assert_eq!(Selection::Row(2).column(), None);
        assert_eq!(Selection::Column(3).index_on(Axis::Column), Some(3));
        assert_eq!(Selection::on_axis(Axis::Row, 4), Selection::Row(4));
        assert!(Selection::default().is_none());
    }

    #[test]
    fn test_after_remove() {
        assert_eq!(Selection::Row(2).after_remove(Axis::Row, 2), Selection::None);
        assert_eq!(Selection::Row(3).after_remove(Axis::Row, 1), Selection::Row(2));
        assert_eq!(Selection::Row(1).after_remove(Axis::Row, 3), Selection::Row(1));
        assert_eq!(Selection::Column(2).after_remove(Axis::Row, 1), Selection::Column(2));
    }

    #[test]
    fn test_after_move() {
        // The moved line carries the selection with it.
        assert_eq!(Selection::Row(1).after_move(Axis::Row, 1, 3), Selection::Row(3));
        // Lines between shift towards the vacated slot.
        assert_eq!(Selection::Row(2).after_move(Axis::Row, 1, 3), Selection::Row(1));
        assert_eq!(Selection::Row(2).after_move(Axis::Row, 3, 1), Selection::Row(3));
        // Lines outside the range stay put.
        assert_eq!(Selection::Row(4).after_move(Axis::Row, 1, 3), Selection::Row(4));
        // Other axis is untouched.
        assert_eq!(Selection::Column(1).after_move(Axis::Row, 1, 2), Selection::Column(1));
        assert_eq!(Selection::None.after_move(Axis::Column, 1, 2), Selection::None);
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_string(&Selection::Row(2)).unwrap();
        assert_eq!(json, r#"{"kind":"row","index":2}"#);
        let none = serde_json::to_string(&Selection::None).unwrap();
        assert_eq!(none, r#"{"kind":"none"}"#);
    }
}
