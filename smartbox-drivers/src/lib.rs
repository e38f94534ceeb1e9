//! Device driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in smartbox-core on top of `embedded-hal` 1.0:
//!
//! - Lid stepper (unipolar, wave drive)
//! - Buzzer (GPIO)
//! - Character LCD (HD44780 over I2C)
//! - Temperature sensor (linear analog)

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod buzzer;
pub mod display;
pub mod sensor;
pub mod stepper;

/// Errors reported by driver peripherals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriverError {
    /// GPIO write failed
    Pin,
    /// ADC conversion failed
    Adc,
}
