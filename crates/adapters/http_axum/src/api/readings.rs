//! Readings API — the latest snapshot as JSON.

use axum::Json;
use axum::extract::{Path, State};
use serde::Serialize;

use sensordash_app::ports::SnapshotRepository;
use sensordash_domain::error::NotFoundError;
use sensordash_domain::quantity::Quantity;
use sensordash_domain::snapshot::Snapshot;

use crate::error::ApiError;
use crate::state::AppState;

/// One quantity of the latest snapshot.
#[derive(Debug, Serialize)]
pub struct ReadingView {
    pub quantity: Quantity,
    pub unit: &'static str,
    pub value: Option<f64>,
    /// Same text the dashboard shows, e.g. `"-- hPa"` or `"72.5 °F"`.
    pub display: String,
}

impl ReadingView {
    fn from_snapshot(snapshot: &Snapshot, quantity: Quantity) -> Self {
        Self {
            quantity,
            unit: quantity.unit(),
            value: snapshot.get(quantity),
            display: snapshot.display(quantity),
        }
    }
}

/// `GET /api/readings` — full snapshot.
pub async fn list<R>(State(state): State<AppState<R>>) -> Result<Json<Snapshot>, ApiError>
where
    R: SnapshotRepository + Send + Sync + 'static,
{
    let snapshot = state.snapshots.latest().await?;
    Ok(Json(snapshot))
}

/// `GET /api/readings/{quantity}` — a single quantity.
pub async fn get<R>(
    State(state): State<AppState<R>>,
    Path(slug): Path<String>,
) -> Result<Json<ReadingView>, ApiError>
where
    R: SnapshotRepository + Send + Sync + 'static,
{
    let quantity: Quantity = slug.parse().map_err(|_| NotFoundError {
        entity: "Quantity",
        id: slug.clone(),
    })?;
    let snapshot = state.snapshots.latest().await?;
    Ok(Json(ReadingView::from_snapshot(&snapshot, quantity)))
}
