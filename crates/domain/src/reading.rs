//! Reading — one measurement of one quantity.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::quantity::{Quantity, celsius_to_fahrenheit};
use crate::time::Timestamp;

/// A single measurement produced by a sensor source.
///
/// Temperature readings are expressed in degrees Fahrenheit; use
/// [`Reading::fahrenheit_from_celsius`] for sensors reporting Celsius.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub quantity: Quantity,
    pub value: f64,
    pub taken_at: Timestamp,
}

impl Reading {
    #[must_use]
    pub fn new(quantity: Quantity, value: f64, taken_at: Timestamp) -> Self {
        Self {
            quantity,
            value,
            taken_at,
        }
    }

    /// Build a temperature reading from a Celsius value.
    #[must_use]
    pub fn fahrenheit_from_celsius(celsius: f64, taken_at: Timestamp) -> Self {
        Self::new(Quantity::Temperature, celsius_to_fahrenheit(celsius), taken_at)
    }

    /// Check the physical invariants of the reading.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NonFinite`] for `NaN` or infinite values,
    /// [`ValidationError::HumidityOutOfRange`] for humidity outside
    /// `0..=100`, and [`ValidationError::NonPositivePressure`] for a
    /// pressure of zero or less.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.value.is_finite() {
            return Err(ValidationError::NonFinite {
                quantity: self.quantity,
            });
        }
        match self.quantity {
            Quantity::Humidity if !(0.0..=100.0).contains(&self.value) => {
                Err(ValidationError::HumidityOutOfRange { value: self.value })
            }
            Quantity::Pressure if self.value <= 0.0 => {
                Err(ValidationError::NonPositivePressure { value: self.value })
            }
            _ => Ok(()),
        }
    }
}
