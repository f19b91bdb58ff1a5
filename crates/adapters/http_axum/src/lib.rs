//! # sensordash-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **static dashboard page** exactly as it is baked into the
//!   binary (`/`), placeholders included
//! - Serve a **server-side-rendered live variant** of the same page with the
//!   latest values injected (`/live`), refreshed with
//!   `<meta http-equiv="refresh">` and no JavaScript
//! - Serve a small **JSON API** (`/api/readings`, …) and an SSE stream of
//!   snapshot updates
//! - Map application results into HTTP responses (HTML, JSON, SSE)
//!
//! ## Dependency rule
//! Depends on `sensordash-app` (for port traits and the snapshot bus) and
//! `sensordash-domain` (for types used in response mapping). Never leaks
//! axum types into the domain.

pub mod api;
pub mod dashboard;
pub mod error;
pub mod router;
pub mod state;
