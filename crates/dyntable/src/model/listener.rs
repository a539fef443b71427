//! Update notifications.
//!
//! A [`GridModel`](super::GridModel) reports every committed change to at most
//! one [`UpdateListener`]. The listener is called synchronously, after the
//! change is visible in the model and before the mutating call returns.
//! Every method has an empty default body, so an implementation only
//! overrides the notifications it cares about.
//!
//! Each notification also exists as a [`GridEvent`] value, which is what the
//! model's [`GridSignals`](super::GridSignals) carry to any number of
//! observers.

use serde::{Deserialize, Serialize};

/// Receives notifications from a grid model.
///
/// A panic raised by a listener method propagates out of the model call that
/// triggered it. The model's state at that point already includes the change
/// being reported.
pub trait UpdateListener {
    /// The grid was saved; `rows` is the full grid at the time of the call.
    fn on_table_updated(&mut self, _rows: &[Vec<String>]) {}

    /// A row label was tapped and the row is now selected.
    fn on_row_selected(&mut self, _row: usize) {}

    /// A column label was tapped and the column is now selected.
    fn on_column_selected(&mut self, _column: usize) {}

    /// A row was appended at index `row`.
    fn on_row_added(&mut self, _row: usize) {}

    /// A column was appended at index `column`.
    fn on_column_added(&mut self, _column: usize) {}

    /// The row at index `row` was deleted.
    fn on_row_deleted(&mut self, _row: usize) {}

    /// The column at index `column` was deleted.
    fn on_column_deleted(&mut self, _column: usize) {}

    /// An interior cell (or the corner) was tapped; the selection is cleared.
    fn on_cell_selected(&mut self, _row: usize, _column: usize) {}

    /// A row moved from index `from` to index `to`.
    fn on_row_moved(&mut self, _from: usize, _to: usize) {}

    /// A column moved from index `from` to index `to`.
    fn on_column_moved(&mut self, _from: usize, _to: usize) {}

    /// The text of a cell was edited.
    fn on_cell_changed(&mut self, _row: usize, _column: usize) {}
}

/// A single notification emitted by a grid model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GridEvent {
    /// See [`UpdateListener::on_table_updated`].
    TableUpdated {
        /// The saved grid.
        rows: Vec<Vec<String>>,
    },
    /// See [`UpdateListener::on_row_selected`].
    RowSelected {
        /// The selected row.
        row: usize,
    },
    /// See [`UpdateListener::on_column_selected`].
    ColumnSelected {
        /// The selected column.
        column: usize,
    },
    /// See [`UpdateListener::on_row_added`].
    RowAdded {
        /// The index of the new row.
        row: usize,
    },
    /// See [`UpdateListener::on_column_added`].
    ColumnAdded {
        /// The index of the new column.
        column: usize,
    },
    /// See [`UpdateListener::on_row_deleted`].
    RowDeleted {
        /// The index the row had.
        row: usize,
    },
    /// See [`UpdateListener::on_column_deleted`].
    ColumnDeleted {
        /// The index the column had.
        column: usize,
    },
    /// See [`UpdateListener::on_cell_selected`].
    CellSelected {
        /// The tapped row.
        row: usize,
        /// The tapped column.
        column: usize,
    },
    /// See [`UpdateListener::on_row_moved`].
    RowMoved {
        /// The original index.
        from: usize,
        /// The new index.
        to: usize,
    },
    /// See [`UpdateListener::on_column_moved`].
    ColumnMoved {
        /// The original index.
        from: usize,
        /// The new index.
        to: usize,
    },
    /// See [`UpdateListener::on_cell_changed`].
    CellChanged {
        /// The edited row.
        row: usize,
        /// The edited column.
        column: usize,
    },
}

impl GridEvent {
    /// Delivers this event to the matching listener method.
    pub fn dispatch(&self, listener: &mut dyn UpdateListener) {
        match *self {
            Self::TableUpdated { ref rows } => listener.on_table_updated(rows),
            Self::RowSelected { row } => listener.on_row_selected(row),
            Self::ColumnSelected { column } => listener.on_column_selected(column),
            Self::RowAdded { row } => listener.on_row_added(row),
            Self::ColumnAdded { column } => listener.on_column_added(column),
            Self::RowDeleted { row } => listener.on_row_deleted(row),
            Self::ColumnDeleted { column } => listener.on_column_deleted(column),
            Self::CellSelected { row, column } => listener.on_cell_selected(row, column),
            Self::RowMoved { from, to } => listener.on_row_moved(from, to),
            Self::ColumnMoved { from, to } => listener.on_column_moved(from, to),
            Self::CellChanged { row, column } => listener.on_cell_changed(row, column),
        }
    }

    /// Returns a short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::TableUpdated { .. } => "table_updated",
            Self::RowSelected { .. } => "row_selected",
            Self::ColumnSelected { .. } => "column_selected",
            Self::RowAdded { .. } => "row_added",
            Self::ColumnAdded { .. } => "column_added",
            Self::RowDeleted { .. } => "row_deleted",
            Self::ColumnDeleted { .. } => "column_deleted",
            Self::CellSelected { .. } => "cell_selected",
            Self::RowMoved { .. } => "row_moved",
            Self::ColumnMoved { .. } => "column_moved",
            Self::CellChanged { .. } => "cell_changed",
        }
    }
}

/// Adapts a closure into an [`UpdateListener`] that receives every
/// notification as a [`GridEvent`].
///
/// ```
/// use dyntable::model::{EventListener, GridEvent, GridModel, TableConfig};
///
/// let mut model = GridModel::new(2, 2, TableConfig::default())
///     .with_listener(EventListener::new(|event| println!("{}", event.name())));
/// model.add_row().unwrap();
/// ```
pub struct EventListener<F> {
    callback: F,
}

impl<F: FnMut(GridEvent)> EventListener<F> {
    /// Wraps `callback`.
    pub fn new(callback: F) -> Self {
        Self { callback }
    }
}

impl<F: FnMut(GridEvent)> UpdateListener for EventListener<F> {
    fn on_table_updated(&mut self, rows: &[Vec<String>]) {
        (self.callback)(GridEvent::TableUpdated {
            rows: rows.to_vec(),
        });
    }

    fn on_row_selected(&mut self, row: usize) {
        (self.callback)(GridEvent::RowSelected { row });
    }

    fn on_column_selected(&mut self, column: usize) {
        (self.callback)(GridEvent::ColumnSelected { column });
    }

    fn on_row_added(&mut self, row: usize) {
        (self.callback)(GridEvent::RowAdded { row });
    }

    fn on_column_added(&mut self, column: usize) {
        (self.callback)(GridEvent::ColumnAdded { column });
    }

    fn on_row_deleted(&mut self, row: usize) {
        (self.callback)(GridEvent::RowDeleted { row });
    }

    fn on_column_deleted(&mut self, column: usize) {
        (self.callback)(GridEvent::ColumnDeleted { column });
    }

    fn on_cell_selected(&mut self, row: usize, column: usize) {
        (self.callback)(GridEvent::CellSelected { row, column });
    }

    fn on_row_moved(&mut self, from: usize, to: usize) {
        (self.callback)(GridEvent::RowMoved { from, to });
    }

    fn on_column_moved(&mut self, from: usize, to: usize) {
        (self.callback)(GridEvent::ColumnMoved { from, to });
    }

    fn on_cell_changed(&mut self, row: usize, column: usize) {
        (self.callback)(GridEvent::CellChanged { row, column });
    }
}
