//! Measured quantities and how they are presented.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Placeholder shown in place of a value that has not been measured yet.
pub const PLACEHOLDER: &str = "--";

/// One physical quantity shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quantity {
    Temperature,
    Humidity,
    Pressure,
}

impl Quantity {
    /// Every quantity, in dashboard order.
    pub const ALL: [Self; 3] = [Self::Temperature, Self::Humidity, Self::Pressure];

    /// Heading shown above the value.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Temperature => "Temperature",
            Self::Humidity => "Humidity",
            Self::Pressure => "Pressure",
        }
    }

    /// Display unit. Temperatures are always shown in degrees Fahrenheit.
    #[must_use]
    pub fn unit(self) -> &'static str {
        match self {
            Self::Temperature => "\u{b0}F",
            Self::Humidity => "%",
            Self::Pressure => "hPa",
        }
    }

    /// URL-safe identifier, also the serialized form.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Temperature => "temperature",
            Self::Humidity => "humidity",
            Self::Pressure => "pressure",
        }
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Quantity {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|quantity| quantity.slug().eq_ignore_ascii_case(s))
            .ok_or_else(|| ValidationError::UnknownQuantity(s.to_string()))
    }
}

/// Format a value for display: one decimal place followed by the unit, or
/// the `--` placeholder when no value is known.
///
/// ```
/// use sensordash_domain::quantity::{format_value, Quantity};
///
/// assert_eq!(format_value(Quantity::Pressure, None), "-- hPa");
/// assert_eq!(format_value(Quantity::Humidity, Some(41.0)), "41.0 %");
/// ```
#[must_use]
pub fn format_value(quantity: Quantity, value: Option<f64>) -> String {
    match value {
        Some(value) => format!("{value:.1} {}", quantity.unit()),
        None => format!("{PLACEHOLDER} {}", quantity.unit()),
    }
}

/// Convert degrees Celsius to degrees Fahrenheit.
#[must_use]
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}
