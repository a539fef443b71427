//! Logging facilities for dyntable.
//!
//! This module provides:
//! - Integration with the `tracing` crate for structured logging
//! - Target and span names for filtering dyntable output
//! - Performance tracing hooks for profiling
//!
//! # Tracing Integration
//!
//! dyntable uses the `tracing` crate for instrumentation and never installs a
//! subscriber itself. To see logs, install one in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("dyntable=debug")
//!         .init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! Committed model mutations are logged at `debug`, rejected operations at
//! `debug` together with the rejection reason, and signal emission at `trace`.

/// Span names used throughout dyntable for tracing.
pub mod span_names {
    /// Signal emission span.
    pub const SIGNAL: &str = "dyntable::signal";
    /// Grid mutation span.
    pub const MUTATION: &str = "dyntable::mutation";
    /// Performance measurement span.
    pub const PERF: &str = "dyntable::perf";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core framework target.
    pub const CORE: &str = "dyntable_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "dyntable_core::signal";
    /// Grid model target.
    pub const MODEL: &str = "dyntable::model";
    /// Selection state target.
    pub const SELECTION: &str = "dyntable::selection";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// This is useful for tracking the duration of operations.
#[derive(Debug)]
pub struct PerfSpan {
    _span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    ///
    /// The span will be active until the guard is dropped.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: "dyntable::perf", "perf", operation = name);
        Self {
            _span: span.entered(),
        }
    }
}

/// Macros for common tracing patterns.
///
/// These are thin wrappers around the `tracing` crate macros with
/// consistent target naming.
#[macro_export]
macro_rules! dyntable_trace {
    ($($arg:tt)*) => {
        tracing::trace!(target: "dyntable_core", $($arg)*)
    };
}

#[macro_export]
macro_rules! dyntable_debug {
    ($($arg:tt)*) => {
        tracing::debug!(target: "dyntable_core", $($arg)*)
    };
}

#[macro_export]
macro_rules! dyntable_info {
    ($($arg:tt)*) => {
        tracing::info!(target: "dyntable_core", $($arg)*)
    };
}

#[macro_export]
macro_rules! dyntable_warn {
    ($($arg:tt)*) => {
        tracing::warn!(target: "dyntable_core", $($arg)*)
    };
}

#[macro_export]
macro_rules! dyntable_error {
    ($($arg:tt)*) => {
        tracing::error!(target: "dyntable_core", $($arg)*)
    };
}
