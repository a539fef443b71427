//! Core systems for dyntable.
//!
//! This crate provides the foundational components shared by the dyntable
//! grid model:
//!
//! - **Signal/Slot System**: Type-safe, synchronous change notification
//! - **Logging**: Tracing targets, span names and helper macros
//!
//! # Signal/Slot Example
//!
//! ```
//! use dyntable_core::Signal;
//!
//! // Create a signal that notifies when a value changes
//! let value_changed = Signal::<i32>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! // Emit the signal
//! value_changed.emit(42);
//!
//! // Disconnect when done
//! value_changed.disconnect(conn_id);
//! ```

pub mod logging;
pub mod signal;

pub use logging::PerfSpan;
pub use signal::{ConnectionGuard, ConnectionId, Signal};
