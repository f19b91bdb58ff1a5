//! Storage port — where the latest snapshot lives.

use std::future::Future;

use sensordash_domain::error::SensorError;
use sensordash_domain::snapshot::Snapshot;

/// Holds the most recent [`Snapshot`].
///
/// Backend failures are reported as [`SensorError::Storage`].
pub trait SnapshotRepository {
    /// Return the latest snapshot, or an empty one when nothing was saved yet.
    fn latest(&self) -> impl Future<Output = Result<Snapshot, SensorError>> + Send;

    /// Replace the stored snapshot.
    fn save(&self, snapshot: Snapshot) -> impl Future<Output = Result<(), SensorError>> + Send;
}

impl<T: SnapshotRepository + Send + Sync> SnapshotRepository for std::sync::Arc<T> {
    fn latest(&self) -> impl Future<Output = Result<Snapshot, SensorError>> + Send {
        (**self).latest()
    }

    fn save(&self, snapshot: Snapshot) -> impl Future<Output = Result<(), SensorError>> + Send {
        (**self).save(snapshot)
    }
}
