//! In-process snapshot bus backed by a tokio broadcast channel.

use std::future::Future;

use tokio::sync::broadcast;

use sensordash_domain::error::SensorError;
use sensordash_domain::snapshot::Snapshot;

use crate::ports::SnapshotPublisher;

/// In-process snapshot bus using a tokio [`broadcast`] channel.
///
/// Publishing succeeds even when there are no active subscribers
/// (the snapshot is simply dropped).
pub struct InProcessSnapshotBus {
    sender: broadcast::Sender<Snapshot>,
}

impl InProcessSnapshotBus {
    /// Create a new bus with the given channel capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribe to snapshot updates.
    ///
    /// Returns a receiver that will get all snapshots published *after*
    /// the subscription is created.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<Snapshot> {
        self.sender.subscribe()
    }
}

impl SnapshotPublisher for InProcessSnapshotBus {
    fn publish(&self, snapshot: Snapshot) -> impl Future<Output = Result<(), SensorError>> + Send {
        // send only fails when nobody is listening
        let _ = self.sender.send(snapshot);
        async { Ok(()) }
    }
}
