//! Server-Sent Events (SSE) stream of snapshot updates.

use std::convert::Infallible;

use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;
use tokio_stream::{Stream, StreamExt};

use sensordash_app::ports::SnapshotRepository;
use sensordash_domain::snapshot::Snapshot;

use crate::error::ApiError;
use crate::state::AppState;

const EVENT_NAME: &str = "snapshot";

fn to_event(snapshot: &Snapshot) -> Option<Event> {
    match serde_json::to_string(snapshot) {
        Ok(json) => Some(Event::default().event(EVENT_NAME).data(json)),
        Err(err) => {
            tracing::warn!(%err, "failed to serialize snapshot for SSE stream");
            None
        }
    }
}

/// `GET /api/readings/stream` — SSE stream of snapshots.
///
/// The first frame carries the current snapshot so clients render
/// immediately; every later frame is a snapshot published by the polling
/// loop. The stream continues until the client disconnects.
pub async fn stream<R>(
    State(state): State<AppState<R>>,
) -> Result<Sse<impl Stream<Item = Result<Event, Infallible>>>, ApiError>
where
    R: SnapshotRepository + Send + Sync + 'static,
{
    // subscribe first so nothing published between the two calls is lost
    let updates = BroadcastStream::new(state.snapshot_bus.subscribe());
    let current = state.snapshots.latest().await?;

    let updates = updates.filter_map(|result| match result {
        Ok(snapshot) => to_event(&snapshot).map(Ok),
        Err(BroadcastStreamRecvError::Lagged(skipped)) => {
            tracing::warn!(skipped, "SSE subscriber lagged, some snapshots were dropped");
            None
        }
    });
    let stream = tokio_stream::iter(to_event(&current).map(Ok)).chain(updates);

    Ok(Sse::new(stream).keep_alive(KeepAlive::default()))
}
