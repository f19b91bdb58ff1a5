//! Simulated weather station.

use std::future::Future;
use std::sync::atomic::{AtomicU32, Ordering};

use sensordash_app::ports::SensorSource;
use sensordash_domain::error::SensorError;
use sensordash_domain::quantity::Quantity;
use sensordash_domain::reading::Reading;
use sensordash_domain::time::now;

use crate::config::VirtualConfig;

const TEMPERATURE_SWING_C: f64 = 3.0;
const HUMIDITY_SWING: f64 = 10.0;
const PRESSURE_SWING_HPA: f64 = 4.0;

/// A simulated BME280-style station.
///
/// Every call to [`read`](SensorSource::read) advances an internal tick and
/// returns one reading per quantity. Values follow sine waves of different
/// periods so the dashboard shows movement without any randomness.
pub struct VirtualWeatherStation {
    config: VirtualConfig,
    tick: AtomicU32,
}

impl Default for VirtualWeatherStation {
    fn default() -> Self {
        Self::new(VirtualConfig::default())
    }
}

impl VirtualWeatherStation {
    #[must_use]
    pub fn new(config: VirtualConfig) -> Self {
        Self {
            config,
            tick: AtomicU32::new(0),
        }
    }

    /// Compute the raw values for a given tick: (°C, %RH, hPa).
    fn sample(&self, tick: u32) -> (f64, f64, f64) {
        let t = f64::from(tick);
        let temperature = self.config.base_temperature_c + TEMPERATURE_SWING_C * (t * 0.10).sin();
        let humidity = (self.config.base_humidity + HUMIDITY_SWING * (t * 0.07 + 1.0).sin())
            .clamp(0.0, 100.0);
        let pressure = self.config.base_pressure_hpa + PRESSURE_SWING_HPA * (t * 0.03).sin();
        (temperature, humidity, pressure)
    }
}

impl SensorSource for VirtualWeatherStation {
    fn name(&self) -> &'static str {
        "virtual"
    }

    fn read(&self) -> impl Future<Output = Result<Vec<Reading>, SensorError>> + Send {
        let tick = self.tick.fetch_add(1, Ordering::Relaxed);
        let (temperature_c, humidity, pressure) = self.sample(tick);
        let ts = now();

        let readings = vec![
            Reading::fahrenheit_from_celsius(temperature_c, ts),
            Reading::new(Quantity::Humidity, humidity, ts),
            Reading::new(Quantity::Pressure, pressure, ts),
        ];
        async move { Ok(readings) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_report_every_quantity() {
        let station = VirtualWeatherStation::default();
        let readings = station.read().await.unwrap();

        let quantities: Vec<_> = readings.iter().map(|r| r.quantity).collect();
        assert_eq!(quantities, Quantity::ALL);
    }

    #[tokio::test]
    async fn should_start_at_baseline() {
        let station = VirtualWeatherStation::default();
        let readings = station.read().await.unwrap();

        // 21 °C == 69.8 °F
        assert!((readings[0].value - 69.8).abs() < 1e-9);
        assert!((readings[2].value - 1013.25).abs() < 1e-9);
    }

    #[tokio::test]
    async fn should_produce_valid_readings_over_time() {
        let station = VirtualWeatherStation::default();
        for _ in 0..500 {
            for reading in station.read().await.unwrap() {
                assert!(reading.validate().is_ok(), "{reading:?}");
            }
        }
    }

    #[tokio::test]
    async fn should_drift_between_reads() {
        let station = VirtualWeatherStation::default();
        let first = station.read().await.unwrap();
        let second = station.read().await.unwrap();
        assert!((first[0].value - second[0].value).abs() > 0.0);
    }

    #[tokio::test]
    async fn should_clamp_humidity_near_saturation() {
        let station = VirtualWeatherStation::new(VirtualConfig {
            base_humidity: 98.0,
            ..VirtualConfig::default()
        });
        for _ in 0..100 {
            let readings = station.read().await.unwrap();
            assert!(readings[1].value <= 100.0);
        }
    }

    #[test]
    fn should_return_virtual_as_name() {
        let station = VirtualWeatherStation::default();
        assert_eq!(station.name(), "virtual");
    }
}
