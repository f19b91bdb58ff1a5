//! Sensor service — polls a source and keeps the latest snapshot current.

use std::time::Duration;

use tokio::sync::watch;
use tokio::time::MissedTickBehavior;

use sensordash_domain::error::SensorError;
use sensordash_domain::snapshot::Snapshot;

use crate::ports::{SensorSource, SnapshotPublisher, SnapshotRepository};

/// Application service driving the measure → store → publish cycle.
pub struct SensorService<S, R, P> {
    source: S,
    repo: R,
    publisher: P,
}

impl<S, R, P> SensorService<S, R, P>
where
    S: SensorSource + Send + Sync,
    R: SnapshotRepository + Send + Sync,
    P: SnapshotPublisher + Send + Sync,
{
    /// Create a new service from its ports.
    pub fn new(source: S, repo: R, publisher: P) -> Self {
        Self {
            source,
            repo,
            publisher,
        }
    }

    /// Return the latest stored snapshot.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn latest(&self) -> Result<Snapshot, SensorError> {
        self.repo.latest().await
    }

    /// Read the source once and merge every valid reading into the snapshot.
    ///
    /// Invalid readings are logged and skipped. The snapshot is only saved and
    /// published when at least one reading was applied.
    ///
    /// The merge is a read-modify-write on the repository: only one poller may
    /// write to a given repository at a time, or readings can be lost.
    ///
    /// # Errors
    ///
    /// Returns the source error unchanged (the stored snapshot is left as is),
    /// or an error from the repository or publisher.
    pub async fn poll_once(&self) -> Result<Snapshot, SensorError> {
        let readings = self.source.read().await?;
        let mut snapshot = self.repo.latest().await?;

        let mut applied = 0usize;
        for reading in &readings {
            match reading.validate() {
                Ok(()) => {
                    snapshot.apply(reading);
                    applied += 1;
                }
                Err(err) => tracing::warn!(
                    source = self.source.name(),
                    quantity = %reading.quantity,
                    value = reading.value,
                    error = %err,
                    "discarding invalid reading"
                ),
            }
        }

        if applied == 0 {
            tracing::debug!(source = self.source.name(), "no valid readings");
            return Ok(snapshot);
        }

        self.repo.save(snapshot.clone()).await?;
        self.publisher.publish(snapshot.clone()).await?;
        tracing::debug!(
            source = self.source.name(),
            applied,
            discarded = readings.len() - applied,
            "snapshot updated"
        );
        Ok(snapshot)
    }

    /// Poll the source every `period` until `shutdown` turns `true` or its
    /// sender is dropped.
    ///
    /// The first poll happens immediately. Poll failures are logged and the
    /// loop keeps going. A poll still in flight when shutdown is requested is
    /// abandoned.
    pub async fn run(&self, period: Duration, mut shutdown: watch::Receiver<bool>) {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        tracing::info!(
            source = self.source.name(),
            period_secs = period.as_secs_f64(),
            "sensor polling started"
        );

        let stop = shutdown_requested(&mut shutdown);
        tokio::pin!(stop);

        loop {
            tokio::select! {
                biased;
                () = &mut stop => break,
                _ = ticker.tick() => {}
            }
            tokio::select! {
                biased;
                () = &mut stop => {
                    tracing::warn!(source = self.source.name(), "abandoning in-flight sensor poll");
                    break;
                }
                result = self.poll_once() => {
                    if let Err(err) = result {
                        tracing::warn!(source = self.source.name(), error = %err, "sensor poll failed");
                    }
                }
            }
        }

        tracing::info!(source = self.source.name(), "sensor polling stopped");
    }
}

/// Resolve once the flag is `true` or the sender is gone.
async fn shutdown_requested(shutdown: &mut watch::Receiver<bool>) {
    loop {
        if *shutdown.borrow_and_update() {
            return;
        }
        if shutdown.changed().await.is_err() {
            return;
        }
    }
}
