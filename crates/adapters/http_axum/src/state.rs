//! Shared application state for axum handlers.

use std::sync::Arc;

use sensordash_app::ports::SnapshotRepository;
use sensordash_app::snapshot_bus::InProcessSnapshotBus;

/// Application state shared across all axum handlers.
///
/// Generic over the snapshot repository to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repository itself does not need
/// to be `Clone`; only the `Arc` wrappers are cloned.
pub struct AppState<R> {
    /// Latest snapshot, written by the polling loop.
    pub snapshots: Arc<R>,
    /// Snapshot bus for real-time SSE subscriptions.
    pub snapshot_bus: Arc<InProcessSnapshotBus>,
    /// Auto-refresh interval of the live dashboard page.
    pub refresh_seconds: u32,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            snapshots: Arc::clone(&self.snapshots),
            snapshot_bus: Arc::clone(&self.snapshot_bus),
            refresh_seconds: self.refresh_seconds,
        }
    }
}

impl<R> AppState<R>
where
    R: SnapshotRepository + Send + Sync + 'static,
{
    /// Create a new application state, taking ownership of its parts.
    pub fn new(snapshots: R, snapshot_bus: InProcessSnapshotBus, refresh_seconds: u32) -> Self {
        Self::from_arcs(Arc::new(snapshots), Arc::new(snapshot_bus), refresh_seconds)
    }

    /// Create a new application state from pre-wrapped `Arc`s.
    ///
    /// Use this when the repository and bus are shared with the polling
    /// task before constructing the HTTP state.
    pub fn from_arcs(
        snapshots: Arc<R>,
        snapshot_bus: Arc<InProcessSnapshotBus>,
        refresh_seconds: u32,
    ) -> Self {
        Self {
            snapshots,
            snapshot_bus,
            refresh_seconds,
        }
    }
}
