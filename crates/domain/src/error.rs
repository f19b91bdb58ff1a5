//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`SensorError`] via `#[from]`.

use crate::quantity::Quantity;

/// Top-level error shared by every layer.
#[derive(Debug, thiserror::Error)]
pub enum SensorError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// A sensor source failed to produce readings.
    #[error("sensor source error")]
    Source(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The snapshot store failed to load or save.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A reading or request violated a domain invariant.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("{quantity} value is not a finite number")]
    NonFinite { quantity: Quantity },

    #[error("humidity must be between 0 and 100 %, got {value}")]
    HumidityOutOfRange { value: f64 },

    #[error("pressure must be positive, got {value}")]
    NonPositivePressure { value: f64 },

    #[error("unknown quantity {0:?}")]
    UnknownQuantity(String),
}

/// A requested resource does not exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_humidity_out_of_range() {
        let err = ValidationError::HumidityOutOfRange { value: 120.0 };
        assert_eq!(
            err.to_string(),
            "humidity must be between 0 and 100 %, got 120"
        );
    }

    #[test]
    fn should_display_non_finite_with_quantity_label() {
        let err = ValidationError::NonFinite {
            quantity: Quantity::Pressure,
        };
        assert_eq!(err.to_string(), "Pressure value is not a finite number");
    }

    #[test]
    fn should_display_not_found() {
        let err = NotFoundError {
            entity: "Quantity",
            id: "wind".to_string(),
        };
        assert_eq!(err.to_string(), "Quantity wind not found");
    }

    #[test]
    fn should_convert_validation_error_into_sensor_error() {
        let err: SensorError = ValidationError::UnknownQuantity("wind".into()).into();
        assert!(matches!(err, SensorError::Validation(_)));
    }

    #[test]
    fn should_keep_source_error_as_source() {
        let io = std::io::Error::other("bus timeout");
        let err = SensorError::Source(Box::new(io));
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "bus timeout");
    }

    #[test]
    fn should_display_storage_error_apart_from_source_error() {
        let storage = SensorError::Storage(Box::new(std::io::Error::other("disk full")));
        let source = SensorError::Source(Box::new(std::io::Error::other("i2c nack")));
        assert_eq!(storage.to_string(), "storage error");
        assert_eq!(source.to_string(), "sensor source error");
    }
}
