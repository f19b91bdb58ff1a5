//! # sensordash-adapter-virtual
//!
//! Virtual/demo sensor source for running the dashboard without hardware.
//!
//! ## Provided source
//!
//! | Source | Quantities | Behaviour |
//! |--------|------------|-----------|
//! | `VirtualWeatherStation` | temperature, humidity, pressure | Slow deterministic sine drift around configured baselines |
//!
//! ## Dependency rule
//!
//! Depends on `sensordash-app` (port traits) and `sensordash-domain` only.

mod config;
mod station;

pub use config::VirtualConfig;
pub use station::VirtualWeatherStation;
