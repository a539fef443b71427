//! Prelude module for dyntable.
//!
//! ```
//! use dyntable::prelude::*;
//! ```
//!
//! This provides access to:
//! - The grid model (`GridModel`, `TableConfig`, `Selection`)
//! - Notifications (`UpdateListener`, `GridEvent`, `Signal`)
//! - Errors (`GridError`, `ConfigError`)

// ============================================================================
// Grid Model
// ============================================================================

pub use crate::model::{Axis, CellIndex, GridModel, KeyboardKind, Selection, TableConfig};

// ============================================================================
// Notifications
// ============================================================================

pub use crate::model::{EventListener, GridEvent, GridSignals, UpdateListener};
pub use crate::signal::{ConnectionId, Signal};

// ============================================================================
// Errors
// ============================================================================

pub use crate::error::{ConfigError, GridError};

// ============================================================================
// Diagnostics
// ============================================================================

pub use crate::model::{GridDebug, GridSnapshot};
