//! Snapshot — the latest known value of every quantity.

use serde::{Deserialize, Serialize};

use crate::quantity::{Quantity, format_value};
use crate::reading::Reading;
use crate::time::Timestamp;

/// Latest value per quantity. A fresh snapshot holds no data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub pressure: Option<f64>,
    pub updated_at: Option<Timestamp>,
}

impl Snapshot {
    /// Overwrite the value of the reading's quantity.
    ///
    /// `updated_at` only moves forward, so an out-of-order reading still
    /// updates its value without rewinding the snapshot clock.
    pub fn apply(&mut self, reading: &Reading) {
        *self.slot_mut(reading.quantity) = Some(reading.value);
        self.updated_at = Some(match self.updated_at {
            Some(current) if current > reading.taken_at => current,
            _ => reading.taken_at,
        });
    }

    /// Value currently known for `quantity`.
    #[must_use]
    pub fn get(&self, quantity: Quantity) -> Option<f64> {
        match quantity {
            Quantity::Temperature => self.temperature,
            Quantity::Humidity => self.humidity,
            Quantity::Pressure => self.pressure,
        }
    }

    /// Display string for `quantity`, with the placeholder when unknown.
    #[must_use]
    pub fn display(&self, quantity: Quantity) -> String {
        format_value(quantity, self.get(quantity))
    }

    /// Whether no reading has been applied yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        Quantity::ALL.iter().all(|q| self.get(*q).is_none())
    }

    fn slot_mut(&mut self, quantity: Quantity) -> &mut Option<f64> {
        match quantity {
            Quantity::Temperature => &mut self.temperature,
            Quantity::Humidity => &mut self.humidity,
            Quantity::Pressure => &mut self.pressure,
        }
    }
}
