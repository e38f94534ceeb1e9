//! Linear analog temperature sensor (LM35 class)
//!
//! The sensor output is proportional to temperature, so conversion is an
//! offset and a divisor in integer math.

use smartbox_core::traits::Thermometer;

use crate::DriverError;

/// ADC reading trait for platform abstraction
pub trait AdcReader {
    /// Read one raw conversion
    fn read(&mut self) -> Result<u16, DriverError>;
}

/// Raw ADC counts to whole degrees: `(raw - offset) / counts_per_degree`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TemperatureScale {
    /// Raw counts at 0 °C
    pub offset: u16,
    /// Raw counts per degree
    pub counts_per_degree: u16,
}

impl TemperatureScale {
    /// 10-bit ADC on a 2.56 V reference
    pub const DEFAULT: Self = Self {
        offset: 2,
        counts_per_degree: 10,
    };

    /// Convert a raw reading, truncating and clamping to 0..=255
    pub fn celsius(&self, raw: u16) -> u8 {
        if self.counts_per_degree == 0 {
            return 0;
        }
        let degrees = raw.saturating_sub(self.offset) / self.counts_per_degree;
        degrees.min(u8::MAX as u16) as u8
    }
}

impl Default for TemperatureScale {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Thermometer on one ADC channel
///
/// Keeps the last good conversion; a failed read leaves it unchanged.
pub struct LinearThermometer<A> {
    adc: A,
    scale: TemperatureScale,
    celsius: u8,
}

impl<A: AdcReader> LinearThermometer<A> {
    pub fn new(adc: A, scale: TemperatureScale) -> Self {
        Self {
            adc,
            scale,
            celsius: 0,
        }
    }
}

impl<A: AdcReader> Thermometer for LinearThermometer<A> {
    fn start_conversion(&mut self) {
        if let Ok(raw) = self.adc.read() {
            self.celsius = self.scale.celsius(raw);
        }
    }

    fn celsius(&self) -> u8 {
        self.celsius
    }
}
