//! ADC channel for the temperature sensor

use embassy_rp::adc::{Adc, Blocking, Channel};
use smartbox_drivers::sensor::AdcReader;
use smartbox_drivers::DriverError;

/// One ADC input read in blocking mode
pub struct AdcChannel<'d> {
    adc: Adc<'d, Blocking>,
    channel: Channel<'d>,
}

impl<'d> AdcChannel<'d> {
    pub fn new(adc: Adc<'d, Blocking>, channel: Channel<'d>) -> Self {
        Self { adc, channel }
    }
}

impl AdcReader for AdcChannel<'_> {
    fn read(&mut self) -> Result<u16, DriverError> {
        self.adc
            .blocking_read(&mut self.channel)
            .map_err(|_| DriverError::Adc)
    }
}
