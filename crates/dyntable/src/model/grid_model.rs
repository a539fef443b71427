//! The editable grid model.
//!
//! [`GridModel`] owns the cells, the selection and the configuration of one
//! table widget. A presentation layer renders from it and translates user
//! gestures into its methods: taps become [`handle_selection`], buttons
//! become [`add_row`], [`move_row`], [`delete_selected_column`] and so on,
//! and committed text edits become [`set_cell`].
//!
//! Every operation is synchronous. A successful operation commits its change,
//! bumps the model [`version`], then notifies the listener and the
//! [`GridSignals`] before returning. A refused operation returns a
//! [`GridError`] and leaves the model untouched and silent.
//!
//! # Example
//!
//! ```
//! use dyntable::model::{GridModel, Selection, TableConfig};
//!
//! let mut model = GridModel::new(3, 3, TableConfig::default());
//! assert_eq!(model.cell(0, 1).unwrap(), "Col 1");
//! assert_eq!(model.cell(2, 0).unwrap(), "Row 2");
//!
//! // Tap the "Row 1" label, then delete that row.
//! assert_eq!(model.handle_selection(1, 0).unwrap(), Selection::Row(1));
//! assert_eq!(model.delete_selected_row().unwrap(), 1);
//! assert_eq!(model.row_count(), 2);
//! assert!(model.selection().is_none());
//!
//! // The header row cannot be moved.
//! assert!(model.move_row(0, 1).is_err());
//! ```
//!
//! [`handle_selection`]: GridModel::handle_selection
//! [`add_row`]: GridModel::add_row
//! [`move_row`]: GridModel::move_row
//! [`delete_selected_column`]: GridModel::delete_selected_column
//! [`set_cell`]: GridModel::set_cell
//! [`version`]: GridModel::version

use std::fmt;

use dyntable_core::PerfSpan;
use dyntable_core::logging::{span_names, targets};

use super::config::TableConfig;
use super::grid::Grid;
use super::index::{Axis, CellIndex};
use super::listener::{GridEvent, UpdateListener};
use super::selection::Selection;
use super::signals::GridSignals;
use super::snapshot::GridSnapshot;
use crate::error::{GridError, Result};

/// Owns a grid of text cells and its selection, and applies edits to them.
pub struct GridModel {
    grid: Grid,
    selection: Selection,
    config: TableConfig,
    version: u64,
    listener: Option<Box<dyn UpdateListener>>,
    signals: GridSignals,
}

impl Default for GridModel {
    /// A 2 x 2 labelled grid with the default configuration.
    fn default() -> Self {
        Self::new(2, 2, TableConfig::default())
    }
}

impl fmt::Debug for GridModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridModel")
            .field("grid", &self.grid)
            .field("selection", &self.selection)
            .field("config", &self.config)
            .field("version", &self.version)
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}

impl GridModel {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a `row_count` x `column_count` grid with a labelled header band.
    ///
    /// Row labels read "Row i", column labels "Col j", the corner is empty.
    /// Zero in either dimension gives a grid without cells.
    pub fn new(row_count: usize, column_count: usize, config: TableConfig) -> Self {
        tracing::debug!(
            target: targets::MODEL,
            row_count,
            column_count,
            editable = config.editable,
            "creating labelled grid"
        );
        Self::with_grid(Grid::labeled(row_count, column_count), config)
    }

    /// Creates a model over caller-supplied rows, used verbatim.
    ///
    /// Rectangularity is not checked here; column operations on a ragged
    /// grid fail with [`GridError::NotRectangular`].
    pub fn from_data(rows: Vec<Vec<String>>, config: TableConfig) -> Self {
        tracing::debug!(
            target: targets::MODEL,
            row_count = rows.len(),
            editable = config.editable,
            "creating grid from data"
        );
        Self::with_grid(Grid::from_rows(rows), config)
    }

    fn with_grid(grid: Grid, config: TableConfig) -> Self {
        Self {
            grid,
            selection: Selection::None,
            config,
            version: 0,
            listener: None,
            signals: GridSignals::new(),
        }
    }

    /// Installs `listener`, replacing any previous one.
    pub fn with_listener(mut self, listener: impl UpdateListener + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    /// Installs or removes the listener.
    pub fn set_listener(&mut self, listener: Option<Box<dyn UpdateListener>>) {
        self.listener = listener;
    }

    /// Removes and returns the listener.
    pub fn take_listener(&mut self) -> Option<Box<dyn UpdateListener>> {
        self.listener.take()
    }

    /// Returns `true` if a listener is installed.
    pub fn has_listener(&self) -> bool {
        self.listener.is_some()
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns all rows.
    pub fn rows(&self) -> &[Vec<String>] {
        self.grid.rows()
    }

    /// Returns the number of rows, header row included.
    pub fn row_count(&self) -> usize {
        self.grid.row_count()
    }

    /// Returns the number of columns, header column included.
    pub fn column_count(&self) -> usize {
        self.grid.column_count()
    }

    /// Returns the text of a cell.
    pub fn cell(&self, row: usize, column: usize) -> Result<&str> {
        let index = CellIndex::new(row, column);
        self.grid.check_cell(index)?;
        Ok(self.grid.rows()[row][column].as_str())
    }

    /// Returns the selection.
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Returns the selected row, if any.
    pub fn selected_row(&self) -> Option<usize> {
        self.selection.row()
    }

    /// Returns the selected column, if any.
    pub fn selected_column(&self) -> Option<usize> {
        self.selection.column()
    }

    /// Returns the configuration.
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Returns `true` if the table accepts edits.
    pub fn is_editable(&self) -> bool {
        self.config.editable
    }

    /// Returns the number of committed state changes since construction.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Returns the signals emitted by this model.
    pub fn signals(&self) -> &GridSignals {
        &self.signals
    }

    /// Returns an owned copy of the cells and selection at the current version.
    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot {
            version: self.version,
            cells: self.grid.rows().to_vec(),
            selection: self.selection,
        }
    }

    /// Consumes the model, returning its rows.
    pub fn into_rows(self) -> Vec<Vec<String>> {
        self.grid.into_rows()
    }

    /// Returns `true` if the cell lies in the selected row or the selected column.
    ///
    /// Views use this to highlight the selected line; it does not depend on
    /// whether the cell is in the header band.
    pub fn is_heading(&self, row: usize, column: usize) -> bool {
        self.selection.highlights(row, column)
    }

    /// Returns `true` if the cell lies in row 0 or column 0.
    pub fn is_header_cell(&self, row: usize, column: usize) -> bool {
        CellIndex::new(row, column).is_in_header_band()
    }

    // =========================================================================
    // Structural edits
    // =========================================================================

    /// Appends a row of empty cells labelled "Row n", where n is its index.
    ///
    /// Returns the index of the new row.
    pub fn add_row(&mut self) -> Result<usize> {
        let row = self.guarded("add_row", |model| {
            model.ensure_editable()?;
            model.grid.push_row()
        })?;
        tracing::debug!(target: targets::MODEL, row, "row added");
        self.commit(GridEvent::RowAdded { row });
        Ok(row)
    }

    /// Appends an empty cell to every row and labels it "Col n" in row 0.
    ///
    /// Returns the index of the new column.
    pub fn add_column(&mut self) -> Result<usize> {
        let column = self.guarded("add_column", |model| {
            model.ensure_editable()?;
            model.grid.push_column()
        })?;
        tracing::debug!(target: targets::MODEL, column, "column added");
        self.commit(GridEvent::ColumnAdded { column });
        Ok(column)
    }

    /// Deletes the selected row and clears the selection.
    ///
    /// Returns the index the row had.
    pub fn delete_selected_row(&mut self) -> Result<usize> {
        let row = self.guarded("delete_selected_row", |model| {
            model.ensure_editable()?;
            let row = model.selection.row().ok_or(GridError::NoRowSelected)?;
            protect_header(Axis::Row, row)?;
            model.grid.remove_row(row)?;
            Ok(row)
        })?;
        self.selection = self.selection.after_remove(Axis::Row, row);
        tracing::debug!(target: targets::MODEL, row, "row deleted");
        self.commit(GridEvent::RowDeleted { row });
        Ok(row)
    }

    /// Deletes the selected column from every row and clears the selection.
    ///
    /// Returns the index the column had.
    pub fn delete_selected_column(&mut self) -> Result<usize> {
        let column = self.guarded("delete_selected_column", |model| {
            model.ensure_editable()?;
            let column = model
                .selection
                .column()
                .ok_or(GridError::NoColumnSelected)?;
            protect_header(Axis::Column, column)?;
            model.grid.remove_column(column)?;
            Ok(column)
        })?;
        self.selection = self.selection.after_remove(Axis::Column, column);
        tracing::debug!(target: targets::MODEL, column, "column deleted");
        self.commit(GridEvent::ColumnDeleted { column });
        Ok(column)
    }

    /// Moves the row at `from` so that it ends up at index `to`.
    ///
    /// Neither index may be 0. A selected row keeps pointing at the same
    /// logical row.
    pub fn move_row(&mut self, from: usize, to: usize) -> Result<()> {
        self.guarded("move_row", |model| {
            model.ensure_editable()?;
            protect_header(Axis::Row, from)?;
            protect_header(Axis::Row, to)?;
            model.grid.move_row(from, to)
        })?;
        self.selection = self.selection.after_move(Axis::Row, from, to);
        tracing::debug!(target: targets::MODEL, from, to, "row moved");
        self.commit(GridEvent::RowMoved { from, to });
        Ok(())
    }

    /// Moves the column at `from` so that it ends up at index `to`, in every row.
    ///
    /// Neither index may be 0. A selected column keeps pointing at the same
    /// logical column.
    pub fn move_column(&mut self, from: usize, to: usize) -> Result<()> {
        self.guarded("move_column", |model| {
            model.ensure_editable()?;
            protect_header(Axis::Column, from)?;
            protect_header(Axis::Column, to)?;
            model.grid.move_column(from, to)
        })?;
        self.selection = self.selection.after_move(Axis::Column, from, to);
        tracing::debug!(target: targets::MODEL, from, to, "column moved");
        self.commit(GridEvent::ColumnMoved { from, to });
        Ok(())
    }

    /// Moves the selected row one step up. Returns its new index.
    pub fn move_selected_row_up(&mut self) -> Result<usize> {
        let row = self.selected_for("move_selected_row_up", Axis::Row)?;
        let to = self.guarded("move_selected_row_up", |_| step_back(Axis::Row, row))?;
        self.move_row(row, to)?;
        Ok(to)
    }

    /// Moves the selected row one step down. Returns its new index.
    pub fn move_selected_row_down(&mut self) -> Result<usize> {
        let row = self.selected_for("move_selected_row_down", Axis::Row)?;
        self.move_row(row, row + 1)?;
        Ok(row + 1)
    }

    /// Moves the selected column one step left. Returns its new index.
    pub fn move_selected_column_left(&mut self) -> Result<usize> {
        let column = self.selected_for("move_selected_column_left", Axis::Column)?;
        let to = self.guarded("move_selected_column_left", |_| {
            step_back(Axis::Column, column)
        })?;
        self.move_column(column, to)?;
        Ok(to)
    }

    /// Moves the selected column one step right. Returns its new index.
    pub fn move_selected_column_right(&mut self) -> Result<usize> {
        let column = self.selected_for("move_selected_column_right", Axis::Column)?;
        self.move_column(column, column + 1)?;
        Ok(column + 1)
    }

    // =========================================================================
    // Cell edits
    // =========================================================================

    /// Replaces the text of a cell.
    ///
    /// Notifies only when the text actually changed.
    pub fn set_cell(&mut self, row: usize, column: usize, text: impl Into<String>) -> Result<()> {
        let text = text.into();
        let changed = self.guarded("set_cell", |model| {
            model.ensure_editable()?;
            model.grid.set_cell(CellIndex::new(row, column), text)
        })?;
        if changed {
            tracing::debug!(target: targets::MODEL, row, column, "cell edited");
            self.commit(GridEvent::CellChanged { row, column });
        }
        Ok(())
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Applies a tap on the cell at `(row, column)`.
    ///
    /// - a column label (`row == 0`, `column > 0`) selects the column
    /// - a row label (`column == 0`, `row > 0`) selects the row
    /// - anything else, the corner included, clears the selection and is
    ///   reported as a cell selection
    ///
    /// Returns the resulting selection.
    pub fn handle_selection(&mut self, row: usize, column: usize) -> Result<Selection> {
        let cell = CellIndex::new(row, column);
        self.guarded("handle_selection", |model| model.grid.check_cell(cell))?;

        let selection = Selection::from_tap(cell);
        let event = match selection {
            Selection::Column(column) => GridEvent::ColumnSelected { column },
            Selection::Row(row) => GridEvent::RowSelected { row },
            Selection::None => GridEvent::CellSelected { row, column },
        };
        self.selection = selection;
        tracing::debug!(target: targets::SELECTION, %cell, ?selection, "selection changed");
        self.commit(event);
        Ok(selection)
    }

    /// Selects the row at `row`, clearing any column selection.
    ///
    /// Unlike a tap, this accepts the header row; deleting or moving it is
    /// still refused.
    pub fn select_row(&mut self, row: usize) -> Result<()> {
        self.guarded("select_row", |model| model.grid.check_index(Axis::Row, row))?;
        self.selection = Selection::Row(row);
        tracing::debug!(target: targets::SELECTION, row, "row selected");
        self.commit(GridEvent::RowSelected { row });
        Ok(())
    }

    /// Selects the column at `column`, clearing any row selection.
    ///
    /// Unlike a tap, this accepts the header column; deleting or moving it
    /// is still refused.
    pub fn select_column(&mut self, column: usize) -> Result<()> {
        self.guarded("select_column", |model| {
            model.grid.check_index(Axis::Column, column)
        })?;
        self.selection = Selection::Column(column);
        tracing::debug!(target: targets::SELECTION, column, "column selected");
        self.commit(GridEvent::ColumnSelected { column });
        Ok(())
    }

    /// Clears the selection. Returns `true` if something was selected.
    pub fn clear_selection(&mut self) -> bool {
        if self.selection.is_none() {
            return false;
        }
        self.selection = Selection::None;
        tracing::debug!(target: targets::SELECTION, "selection cleared");
        self.bump_version();
        true
    }

    // =========================================================================
    // Commit
    // =========================================================================

    /// Hands the current grid to the listener as the committed table data.
    ///
    /// The model stores nothing itself; persisting the rows is up to the
    /// listener. Saving does not change the model's version.
    pub fn save(&mut self) {
        let _perf = PerfSpan::new("save");
        tracing::debug!(
            target: targets::MODEL,
            row_count = self.row_count(),
            column_count = self.column_count(),
            "saving table data"
        );
        self.notify(GridEvent::TableUpdated {
            rows: self.grid.rows().to_vec(),
        });
    }

    // =========================================================================
    // Internal Helpers
    // =========================================================================

    /// Runs a precondition check (and the mutation it guards), logging refusals.
    fn guarded<T>(
        &mut self,
        operation: &'static str,
        f: impl FnOnce(&mut Self) -> Result<T>,
    ) -> Result<T> {
        let _span =
            tracing::debug_span!(target: targets::MODEL, span_names::MUTATION, operation).entered();
        f(self).inspect_err(|err| {
            tracing::debug!(target: targets::MODEL, operation, %err, "operation refused");
        })
    }

    fn ensure_editable(&self) -> Result<()> {
        if self.config.editable {
            Ok(())
        } else {
            Err(GridError::ReadOnly)
        }
    }

    fn selected_for(&mut self, operation: &'static str, axis: Axis) -> Result<usize> {
        self.guarded(operation, |model| {
            model.selection.index_on(axis).ok_or(match axis {
                Axis::Row => GridError::NoRowSelected,
                Axis::Column => GridError::NoColumnSelected,
            })
        })
    }

    fn bump_version(&mut self) {
        self.version += 1;
        self.signals.version_changed.emit(self.version);
    }

    fn commit(&mut self, event: GridEvent) {
        self.version += 1;
        self.notify(event);
        self.signals.version_changed.emit(self.version);
    }

    fn notify(&mut self, event: GridEvent) {
        tracing::trace!(target: targets::MODEL, event = event.name(), "notifying");
        if let Some(listener) = self.listener.as_deref_mut() {
            event.dispatch(listener);
        }
        self.signals.event.emit(event);
    }
}

/// Refuses index 0 on either axis.
fn protect_header(axis: Axis, index: usize) -> Result<()> {
    if index == 0 {
        Err(GridError::HeaderProtected { axis, index })
    } else {
        Ok(())
    }
}

/// Returns `index - 1`, refusing to step into the header band.
fn step_back(axis: Axis, index: usize) -> Result<usize> {
    match index.checked_sub(1) {
        Some(to) if to > 0 => Ok(to),
        _ => Err(GridError::HeaderProtected { axis, index: 0 }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::listener::EventListener;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn mock_rows() -> Vec<Vec<String>> {
        [
            ["", "Col 1", "Col 2", "Col 3", "Col 4"],
            ["Row 1", "Data 11", "Data 12", "Data 13", "Data 14"],
            ["Row 2", "Data 21", "Data 22", "Data 23", "Data 24"],
            ["Row 3", "Data 31", "Data 32", "Data 33", "Data 34"],
            ["Row 4", "Data 41", "Data 42", "Data 43", "Data 44"],
        ]
        .iter()
        .map(|row| row.iter().map(|s| s.to_string()).collect())
        .collect()
    }

    fn recording_model() -> (GridModel, Rc<RefCell<Vec<GridEvent>>>) {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = events.clone();
        let model = GridModel::from_data(mock_rows(), TableConfig::default())
            .with_listener(EventListener::new(move |event| {
                sink.borrow_mut().push(event)
            }));
        (model, events)
    }

    #[test]
    fn test_new_labels_header_band() {
        let model = GridModel::new(3, 3, TableConfig::default());
        assert_eq!(model.row_count(), 3);
        assert_eq!(model.column_count(), 3);
        assert_eq!(model.cell(0, 0), Ok(""));
        assert_eq!(model.cell(0, 2), Ok("Col 2"));
        assert_eq!(model.cell(2, 0), Ok("Row 2"));
        assert_eq!(model.version(), 0);
        assert!(model.selection().is_none());
    }

    #[test]
    fn test_default_is_two_by_two() {
        let model = GridModel::default();
        assert_eq!(model.row_count(), 2);
        assert_eq!(model.column_count(), 2);
        assert!(model.is_editable());
        assert!(!model.has_listener());
    }

    #[test]
    fn test_add_row() {
        let (mut model, events) = recording_model();
        assert_eq!(model.add_row(), Ok(5));
        assert_eq!(model.row_count(), 6);
        assert_eq!(model.column_count(), 5);
        assert_eq!(model.cell(5, 0), Ok("Row 5"));
        assert_eq!(model.cell(5, 3), Ok(""));
        assert_eq!(*events.borrow(), vec![GridEvent::RowAdded { row: 5 }]);
        assert_eq!(model.version(), 1);
    }

    #[test]
    fn test_add_column() {
        let (mut model, events) = recording_model();
        assert_eq!(model.add_column(), Ok(5));
        assert!(model.rows().iter().all(|row| row.len() == 6));
        assert_eq!(model.cell(0, 5), Ok("Col 5"));
        assert_eq!(*events.borrow(), vec![GridEvent::ColumnAdded { column: 5 }]);
    }

    #[test]
    fn test_delete_selected_row() {
        let (mut model, events) = recording_model();
        model.select_row(1).unwrap();
        assert_eq!(model.delete_selected_row(), Ok(1));
        assert_eq!(model.row_count(), 4);
        assert_eq!(model.cell(1, 0), Ok("Row 2"));
        assert_eq!(model.selected_row(), None);
        assert_eq!(
            events.borrow().last(),
            Some(&GridEvent::RowDeleted { row: 1 })
        );
    }

    #[test]
    fn test_delete_without_selection_is_refused() {
        let (mut model, events) = recording_model();
        assert_eq!(model.delete_selected_row(), Err(GridError::NoRowSelected));
        assert_eq!(
            model.delete_selected_column(),
            Err(GridError::NoColumnSelected)
        );
        assert_eq!(model.row_count(), 5);
        assert!(events.borrow().is_empty());
        assert_eq!(model.version(), 0);
    }

    #[test]
    fn test_delete_header_is_refused() {
        let (mut model, _events) = recording_model();
        model.select_row(0).unwrap();
        assert_eq!(
            model.delete_selected_row(),
            Err(GridError::HeaderProtected {
                axis: Axis::Row,
                index: 0
            })
        );
        assert_eq!(model.selected_row(), Some(0));

        model.select_column(0).unwrap();
        assert_eq!(
            model.delete_selected_column(),
            Err(GridError::HeaderProtected {
                axis: Axis::Column,
                index: 0
            })
        );
        assert_eq!(model.column_count(), 5);
    }

    #[test]
    fn test_delete_selected_column() {
        let (mut model, _events) = recording_model();
        model.select_column(2).unwrap();
        assert_eq!(model.delete_selected_column(), Ok(2));
        assert!(model.rows().iter().all(|row| row.len() == 4));
        assert_eq!(model.cell(1, 2), Ok("Data 13"));
        assert_eq!(model.selected_column(), None);
    }

    #[test]
    fn test_move_row_and_column() {
        let (mut model, events) = recording_model();
        model.move_row(1, 2).unwrap();
        assert_eq!(model.cell(2, 0), Ok("Row 1"));
        assert_eq!(model.cell(1, 0), Ok("Row 2"));

        model.move_column(1, 2).unwrap();
        assert_eq!(model.cell(0, 2), Ok("Col 1"));
        assert_eq!(model.cell(2, 2), Ok("Data 11"));

        assert_eq!(
            *events.borrow(),
            vec![
                GridEvent::RowMoved { from: 1, to: 2 },
                GridEvent::ColumnMoved { from: 1, to: 2 },
            ]
        );
    }

    #[test]
    fn test_move_header_is_refused() {
        let (mut model, events) = recording_model();
        let before = model.rows().to_vec();
        assert!(matches!(
            model.move_row(0, 2),
            Err(GridError::HeaderProtected { axis: Axis::Row, index: 0 })
        ));
        assert!(model.move_row(2, 0).is_err());
        assert!(model.move_column(0, 1).is_err());
        assert!(model.move_column(1, 0).is_err());
        assert_eq!(model.rows(), before.as_slice());
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_move_out_of_range_is_refused() {
        let (mut model, _events) = recording_model();
        assert_eq!(
            model.move_row(1, 5),
            Err(GridError::IndexOutOfRange {
                axis: Axis::Row,
                index: 5,
                len: 5
            })
        );
        assert_eq!(
            model.move_column(9, 1),
            Err(GridError::IndexOutOfRange {
                axis: Axis::Column,
                index: 9,
                len: 5
            })
        );
    }

    #[test]
    fn test_selection_follows_moves() {
        let (mut model, _events) = recording_model();
        model.select_row(1).unwrap();
        model.move_row(1, 3).unwrap();
        assert_eq!(model.selected_row(), Some(3));
        assert!(model.is_heading(3, 2));

        model.select_column(2).unwrap();
        model.move_column(1, 3).unwrap();
        assert_eq!(model.selected_column(), Some(1));
    }

    #[test]
    fn test_move_selected_row_steps() {
        let (mut model, _events) = recording_model();
        model.select_row(2).unwrap();
        assert_eq!(model.move_selected_row_up(), Ok(1));
        assert_eq!(model.selected_row(), Some(1));
        assert_eq!(model.cell(1, 0), Ok("Row 2"));

        assert_eq!(
            model.move_selected_row_up(),
            Err(GridError::HeaderProtected {
                axis: Axis::Row,
                index: 0
            })
        );

        model.select_row(4).unwrap();
        assert!(matches!(
            model.move_selected_row_down(),
            Err(GridError::IndexOutOfRange { .. })
        ));
        assert_eq!(model.selected_row(), Some(4));
    }

    #[test]
    fn test_move_selected_column_steps() {
        let (mut model, _events) = recording_model();
        assert_eq!(
            model.move_selected_column_right(),
            Err(GridError::NoColumnSelected)
        );

        model.select_column(1).unwrap();
        assert_eq!(model.move_selected_column_right(), Ok(2));
        assert_eq!(model.cell(0, 2), Ok("Col 1"));
        assert_eq!(model.move_selected_column_left(), Ok(1));
        assert_eq!(model.cell(0, 1), Ok("Col 1"));
    }

    #[test]
    fn test_handle_selection_dispatch() {
        let (mut model, events) = recording_model();

        assert_eq!(model.handle_selection(1, 2), Ok(Selection::None));
        assert_eq!(model.handle_selection(0, 2), Ok(Selection::Column(2)));
        assert_eq!(model.selected_row(), None);
        assert_eq!(model.handle_selection(1, 0), Ok(Selection::Row(1)));
        assert_eq!(model.selected_column(), None);
        assert_eq!(model.handle_selection(0, 0), Ok(Selection::None));

        assert_eq!(
            *events.borrow(),
            vec![
                GridEvent::CellSelected { row: 1, column: 2 },
                GridEvent::ColumnSelected { column: 2 },
                GridEvent::RowSelected { row: 1 },
                GridEvent::CellSelected { row: 0, column: 0 },
            ]
        );
    }

    #[test]
    fn test_handle_selection_out_of_range() {
        let (mut model, events) = recording_model();
        model.select_row(2).unwrap();
        assert!(model.handle_selection(7, 0).is_err());
        assert_eq!(model.selected_row(), Some(2));
        assert_eq!(events.borrow().len(), 1);
    }

    #[test]
    fn test_is_heading() {
        let mut model = GridModel::from_data(mock_rows(), TableConfig::default());
        assert!(!model.is_heading(1, 1));

        model.select_row(1).unwrap();
        assert!(model.is_heading(1, 0));
        assert!(model.is_heading(1, 1));
        assert!(!model.is_heading(2, 1));

        model.select_column(1).unwrap();
        assert!(model.is_heading(0, 1));
        assert!(model.is_heading(3, 1));
        assert!(!model.is_heading(1, 2));
    }

    #[test]
    fn test_save_delivers_current_grid() {
        let (mut model, events) = recording_model();
        model.set_cell(1, 1, "New Data11").unwrap();
        model.set_cell(2, 3, "New Data12").unwrap();
        let version = model.version();

        model.save();

        assert_eq!(model.version(), version);
        assert_eq!(
            events.borrow().last(),
            Some(&GridEvent::TableUpdated {
                rows: model.rows().to_vec()
            })
        );
        assert_eq!(model.cell(2, 3), Ok("New Data12"));
    }

    #[test]
    fn test_set_cell_unchanged_is_silent() {
        let (mut model, events) = recording_model();
        model.set_cell(1, 1, "Data 11").unwrap();
        assert!(events.borrow().is_empty());
        assert_eq!(model.version(), 0);
    }

    #[test]
    fn test_read_only_refuses_edits() {
        let mut model = GridModel::from_data(mock_rows(), TableConfig::read_only());
        assert_eq!(model.add_row(), Err(GridError::ReadOnly));
        assert_eq!(model.add_column(), Err(GridError::ReadOnly));
        assert_eq!(model.move_row(1, 2), Err(GridError::ReadOnly));
        assert_eq!(model.set_cell(1, 1, "x"), Err(GridError::ReadOnly));

        // Selection and saving stay available.
        assert_eq!(model.handle_selection(2, 0), Ok(Selection::Row(2)));
        assert_eq!(model.delete_selected_row(), Err(GridError::ReadOnly));
        model.save();
        assert_eq!(model.rows(), mock_rows().as_slice());
    }

    #[test]
    fn test_clear_selection() {
        let mut model = GridModel::default();
        assert!(!model.clear_selection());
        model.select_column(1).unwrap();
        let version = model.version();
        assert!(model.clear_selection());
        assert!(model.selection().is_none());
        assert_eq!(model.version(), version + 1);
    }

    #[test]
    fn test_snapshot_tracks_version() {
        let mut model = GridModel::default();
        let first = model.snapshot();
        model.add_row().unwrap();
        let second = model.snapshot();
        assert!(first.is_stale(&second));
        assert_eq!(second.row_count(), 3);
        assert_eq!(second.cells, model.rows());
    }

    #[test]
    fn test_listener_can_be_swapped() {
        let (mut model, events) = recording_model();
        let old = model.take_listener();
        assert!(old.is_some());
        model.add_row().unwrap();
        assert!(events.borrow().is_empty());

        model.set_listener(old);
        model.add_row().unwrap();
        assert_eq!(*events.borrow(), vec![GridEvent::RowAdded { row: 6 }]);
    }
}
