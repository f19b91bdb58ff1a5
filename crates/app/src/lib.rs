//! # sensordash-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `SensorSource` — produce fresh readings
//!   - `SnapshotRepository` — keep the latest snapshot
//!   - `SnapshotPublisher` — fan snapshot updates out to subscribers
//! - Define **driving/inbound ports** as use-case structs:
//!   - `SensorService` — poll a source, validate, merge, store, publish
//! - Provide **in-process infrastructure** (snapshot bus, in-memory
//!   repository) that doesn't need IO
//!
//! ## Dependency rule
//! Depends on `sensordash-domain` only (plus `tokio::sync` / `tokio::time`).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod memory;
pub mod ports;
pub mod services;
pub mod snapshot_bus;
