//! Signals emitted by the grid model.

use dyntable_core::Signal;

use super::listener::GridEvent;

/// Collection of signals emitted by a [`GridModel`](super::GridModel).
///
/// Presentation layers connect here to re-render after each change. Unlike
/// the single [`UpdateListener`](super::UpdateListener), any number of slots
/// may be connected. Signals fire after the listener has been called.
///
/// # Signal Usage
///
/// - `event`: every notification, including saves and cell edits
/// - `version_changed`: every committed state change, carrying the new
///   [`version`](super::GridModel::version); saving does not change state
///   and does not fire it
pub struct GridSignals {
    /// Emitted for every notification.
    pub event: Signal<GridEvent>,

    /// Emitted after the grid or the selection changed. Args: new version
    pub version_changed: Signal<u64>,
}

impl Default for GridSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GridSignals {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GridSignals")
            .field("event", &self.event)
            .field("version_changed", &self.version_changed)
            .finish()
    }
}

impl GridSignals {
    /// Creates a new set of grid signals.
    pub fn new() -> Self {
        Self {
            event: Signal::new(),
            version_changed: Signal::new(),
        }
    }

    /// Blocks or unblocks every signal in the set.
    pub fn set_blocked(&self, blocked: bool) {
        self.event.set_blocked(blocked);
        self.version_changed.set_blocked(blocked);
    }
}

static_assertions::assert_impl_all!(GridSignals: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[test]
    fn test_grid_signals_creation() {
        let signals = GridSignals::new();
        assert_eq!(signals.event.connection_count(), 0);
        assert_eq!(signals.version_changed.connection_count(), 0);
    }

    #[test]
    fn test_set_blocked() {
        let signals = GridSignals::new();
        let received = Arc::new(Mutex::new(Vec::new()));

        let recv = received.clone();
        signals.version_changed.connect(move |&v| recv.lock().push(v));

        signals.set_blocked(true);
        signals.version_changed.emit(1);
        signals.set_blocked(false);
        signals.version_changed.emit(2);

        assert!(!signals.event.is_blocked());
        assert_eq!(*received.lock(), vec![2]);
    }
}
