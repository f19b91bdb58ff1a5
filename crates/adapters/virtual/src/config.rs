//! Virtual weather station configuration.

use serde::Deserialize;

/// Baselines the simulated readings drift around.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct VirtualConfig {
    /// Centre temperature, in degrees Celsius (the station reports Celsius
    /// like a BME280 and is converted to Fahrenheit on read).
    pub base_temperature_c: f64,
    /// Centre relative humidity, in percent.
    pub base_humidity: f64,
    /// Centre barometric pressure, in hPa.
    pub base_pressure_hpa: f64,
}

impl Default for VirtualConfig {
    fn default() -> Self {
        Self {
            base_temperature_c: 21.0,
            base_humidity: 45.0,
            base_pressure_hpa: 1013.25,
        }
    }
}
