//! Error types for dyntable.

use thiserror::Error;

use crate::model::Axis;

/// Reasons a grid operation was refused.
///
/// A refused operation never mutates the grid or the selection and never
/// notifies the listener.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// The table was configured as read-only.
    #[error("table is read-only")]
    ReadOnly,

    /// The grid has no rows, so the column count is unknown.
    #[error("grid has no rows")]
    EmptyGrid,

    /// A row operation needs a selected row but none is selected.
    #[error("no row is selected")]
    NoRowSelected,

    /// A column operation needs a selected column but none is selected.
    #[error("no column is selected")]
    NoColumnSelected,

    /// Index 0 of either axis is the header band and cannot be moved or deleted.
    #[error("{axis} {index} belongs to the header band")]
    HeaderProtected {
        /// The axis of the protected index.
        axis: Axis,
        /// The protected index.
        index: usize,
    },

    /// An index lies outside the grid.
    #[error("{axis} index {index} out of range (length {len})")]
    IndexOutOfRange {
        /// The axis the index addresses.
        axis: Axis,
        /// The offending index.
        index: usize,
        /// The length of the axis at the time of the call.
        len: usize,
    },

    /// Rows have different lengths, so a column-wide operation cannot be applied.
    #[error("grid is not rectangular: row {row} has {found} cells, expected {expected}")]
    NotRectangular {
        /// The first row whose length differs from row 0.
        row: usize,
        /// The length of row 0.
        expected: usize,
        /// The length of the offending row.
        found: usize,
    },
}

/// Errors raised while parsing a [`TableConfig`](crate::model::TableConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The TOML document could not be parsed.
    #[error("invalid TOML table config: {0}")]
    Toml(#[from] toml::de::Error),

    /// The JSON document could not be parsed.
    #[error("invalid JSON table config: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for grid operations.
pub type Result<T> = std::result::Result<T, GridError>;
