//! The editable grid model.
//!
//! This module holds everything a table widget needs below its view layer:
//! a two-dimensional grid of text cells whose row 0 and column 0 form a
//! header band, the single row or column selection, and the notifications
//! raised when either changes.
//!
//! # Core Types
//!
//! - `GridModel`: Owns the grid, the selection and the configuration, and
//!   applies every edit
//! - `Grid`: Rectangular cell storage with the "Row N"/"Col N" labelling rules
//! - `Selection`: Nothing, one row, or one column
//! - `CellIndex` / `Axis`: Cell addressing
//! - `TableConfig`: Editability and keyboard hint
//!
//! # Notifications
//!
//! - `UpdateListener`: The single listener a model calls synchronously
//! - `GridEvent`: One notification as a value
//! - `GridSignals`: Multi-observer signals carrying `GridEvent`s and versions
//!
//! # Diagnostics
//!
//! - `GridSnapshot`: Owned, versioned copy of cells and selection
//! - `GridDebug`: Text table rendering for logs
//!
//! # Example
//!
//! ```
//! use dyntable::model::{GridModel, Selection, TableConfig};
//!
//! let mut model = GridModel::new(4, 3, TableConfig::default());
//!
//! model.signals().version_changed.connect(|version| {
//!     println!("grid is now at version {version}");
//! });
//!
//! model.add_column().unwrap();
//! model.handle_selection(2, 0).unwrap();
//! model.move_selected_row_up().unwrap();
//!
//! assert_eq!(model.cell(1, 0).unwrap(), "Row 2");
//! assert_eq!(model.selection(), Selection::Row(1));
//! ```

mod config;
mod debug;
mod grid;
mod grid_model;
mod index;
mod listener;
mod selection;
mod signals;
mod snapshot;

pub use config::{KeyboardKind, TableConfig};
pub use debug::{GridDebug, GridFormatOptions, GridStyle};
pub use grid::{Grid, column_label, row_label};
pub use grid_model::GridModel;
pub use index::{Axis, CellIndex};
pub use listener::{EventListener, GridEvent, UpdateListener};
pub use selection::Selection;
pub use signals::GridSignals;
pub use snapshot::GridSnapshot;
