//! Server-side rendered HTML dashboard (no JavaScript).

#[allow(clippy::missing_errors_doc)]
pub mod live;
pub mod static_page;

use axum::Router;
use axum::routing::get;

use sensordash_app::ports::SnapshotRepository;

use crate::state::AppState;

/// Build the dashboard sub-router for HTML pages.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: SnapshotRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(static_page::index))
        .route("/live", get(live::index::<R>))
}
