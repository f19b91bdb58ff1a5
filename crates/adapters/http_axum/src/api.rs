//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod readings;
#[allow(clippy::missing_errors_doc)]
pub mod sse;

use axum::Router;
use axum::routing::get;

use sensordash_app::ports::SnapshotRepository;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: SnapshotRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/readings", get(readings::list::<R>))
        .route("/readings/stream", get(sse::stream::<R>))
        .route("/readings/{quantity}", get(readings::get::<R>))
}
