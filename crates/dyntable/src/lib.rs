//! dyntable - An editable grid data model for table widgets.
//!
//! The grid's row 0 and column 0 form a header band of labels. Rows and
//! columns can be appended, deleted and reordered, a single row or column
//! can be selected by tapping its label, and every committed change is
//! reported to an [`UpdateListener`](model::UpdateListener) and to the
//! model's signals.
//!
//! This is the umbrella crate: it re-exports the signal and logging
//! primitives of `dyntable-core` at its root.
//!
//! # Example
//!
//! ```
//! use dyntable::prelude::*;
//!
//! struct Printer;
//!
//! impl UpdateListener for Printer {
//!     fn on_row_added(&mut self, row: usize) {
//!         println!("row {row} added");
//!     }
//! }
//!
//! fn main() -> Result<(), GridError> {
//!     let mut model = GridModel::new(3, 3, TableConfig::default()).with_listener(Printer);
//!     model.add_row()?;
//!     model.set_cell(3, 1, "42")?;
//!     model.save();
//!     Ok(())
//! }
//! ```

pub use dyntable_core::*;

pub mod error;
pub mod model;
pub mod prelude;

pub use error::{ConfigError, GridError, Result};
