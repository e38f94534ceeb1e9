//! Sensor traits

use crate::ranging::Distance;

/// Distance sensor
pub trait RangeFinder {
    /// Start a new measurement if none is in flight
    ///
    /// Returns immediately with the last completed sample.
    fn request_distance(&mut self) -> Distance;
}

/// Ambient temperature sensor
pub trait Thermometer {
    /// Begin a conversion; the result shows up in a later [`celsius`] call
    ///
    /// [`celsius`]: Thermometer::celsius
    fn start_conversion(&mut self);

    /// Last converted temperature (°C)
    fn celsius(&self) -> u8;
}
