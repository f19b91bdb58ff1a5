//! # sensordash-domain
//!
//! Pure domain model for the sensordash weather dashboard.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, timestamps
//! - Define **Quantities** (temperature, humidity, pressure) with their labels
//!   and display units
//! - Define **Readings** (one validated measurement of one quantity)
//! - Define **Snapshots** (latest known value of every quantity)
//! - Format values for display, including the `--` placeholder used before
//!   any data has arrived
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod time;

pub mod quantity;
pub mod reading;
pub mod snapshot;
