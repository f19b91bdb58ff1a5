//! The dashboard page as it ships in the firmware image.
//!
//! The markup is compiled into the binary and served verbatim: a title, a
//! heading, and one `sensor-box` per quantity showing the `--` placeholder.

use axum::response::Html;

/// The static dashboard document.
pub const INDEX_HTML: &str = include_str!("../../assets/index.html");

/// `GET /` — the static dashboard page.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
