//! Sensor source port — anything that can produce readings on demand.
//!
//! A source bridges real hardware (I2C, BLE, MQTT, …) or a simulation into
//! sensordash. It may report only a subset of quantities on each call.

use std::future::Future;

use sensordash_domain::error::SensorError;
use sensordash_domain::reading::Reading;

/// Produces the current readings of one physical or virtual sensor.
pub trait SensorSource {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Take one round of measurements.
    ///
    /// Failures to talk to the sensor are reported as
    /// [`SensorError::Source`].
    fn read(&self) -> impl Future<Output = Result<Vec<Reading>, SensorError>> + Send;
}

impl<T: SensorSource + Send + Sync> SensorSource for std::sync::Arc<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn read(&self) -> impl Future<Output = Result<Vec<Reading>, SensorError>> + Send {
        (**self).read()
    }
}
