//! In-memory snapshot repository.
//!
//! The dashboard only ever needs the latest values, so a single
//! lock-protected [`Snapshot`] is enough.

use std::future::Future;

use tokio::sync::RwLock;

use sensordash_domain::error::SensorError;
use sensordash_domain::snapshot::Snapshot;

use crate::ports::SnapshotRepository;

#[derive(Default)]
pub struct InMemorySnapshotRepository {
    current: RwLock<Snapshot>,
}

impl SnapshotRepository for InMemorySnapshotRepository {
    fn latest(&self) -> impl Future<Output = Result<Snapshot, SensorError>> + Send {
        async { Ok(self.current.read().await.clone()) }
    }

    fn save(&self, snapshot: Snapshot) -> impl Future<Output = Result<(), SensorError>> + Send {
        async move {
            *self.current.write().await = snapshot;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_return_empty_snapshot_initially() {
        let repo = InMemorySnapshotRepository::default();
        assert!(repo.latest().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_return_saved_snapshot() {
        let repo = InMemorySnapshotRepository::default();
        let snapshot = Snapshot {
            humidity: Some(55.0),
            ..Snapshot::default()
        };
        repo.save(snapshot.clone()).await.unwrap();
        assert_eq!(repo.latest().await.unwrap(), snapshot);
    }
}
