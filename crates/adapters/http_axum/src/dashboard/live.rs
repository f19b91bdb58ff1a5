//! Live dashboard — the static page with current values injected.

use askama::Template;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use sensordash_app::ports::SnapshotRepository;
use sensordash_domain::quantity::Quantity;
use sensordash_domain::snapshot::Snapshot;
use sensordash_domain::time;

use crate::error::ApiError;
use crate::state::AppState;

/// One `sensor-box` on the page.
pub struct SensorCard {
    label: &'static str,
    display: String,
}

/// Live dashboard template.
#[derive(Template)]
#[template(path = "live.html")]
pub struct LiveTemplate {
    refresh_seconds: u32,
    cards: Vec<SensorCard>,
    updated: String,
}

impl LiveTemplate {
    /// Build the page model for a snapshot.
    #[must_use]
    pub fn from_snapshot(snapshot: &Snapshot, refresh_seconds: u32) -> Self {
        let cards = Quantity::ALL
            .into_iter()
            .map(|quantity| SensorCard {
                label: quantity.label(),
                display: snapshot.display(quantity),
            })
            .collect();
        let updated = snapshot
            .updated_at
            .as_ref()
            .map_or_else(|| "never".to_string(), time::display);

        Self {
            refresh_seconds,
            cards,
            updated,
        }
    }
}

impl IntoResponse for LiveTemplate {
    fn into_response(self) -> Response {
        match self.render() {
            Ok(body) => Html(body).into_response(),
            Err(err) => {
                tracing::error!(error = %err, "failed to render live dashboard");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

/// `GET /live` — dashboard with the latest values.
pub async fn index<R>(State(state): State<AppState<R>>) -> Result<LiveTemplate, ApiError>
where
    R: SnapshotRepository + Send + Sync + 'static,
{
    let snapshot = state.snapshots.latest().await?;
    Ok(LiveTemplate::from_snapshot(&snapshot, state.refresh_seconds))
}
