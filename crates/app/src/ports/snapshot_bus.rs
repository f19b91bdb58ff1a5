//! Snapshot bus port — publish snapshot updates to interested subscribers.

use std::future::Future;

use sensordash_domain::error::SensorError;
use sensordash_domain::snapshot::Snapshot;

/// Publishes snapshot updates to all current subscribers.
pub trait SnapshotPublisher {
    /// Publish a snapshot to all current subscribers.
    fn publish(&self, snapshot: Snapshot) -> impl Future<Output = Result<(), SensorError>> + Send;
}

impl<T: SnapshotPublisher + Send + Sync> SnapshotPublisher for std::sync::Arc<T> {
    fn publish(&self, snapshot: Snapshot) -> impl Future<Output = Result<(), SensorError>> + Send {
        (**self).publish(snapshot)
    }
}
