//! RP2040-specific HAL for the SmartBox firmware
//!
//! This crate provides RP2040-specific implementations of the shared
//! `smartbox-hal` timer traits and of the core device traits:
//!
//! - Deadline tick timer (fast and slow tick sources)
//! - PWM-slice echo counter (free-running 1 MHz counter)
//! - On-chip RTC as the calendar clock
//! - ADC channel for the temperature sensor

#![no_std]

pub mod adc;
pub mod rtc;
pub mod timer;

pub use adc::AdcChannel;
pub use rtc::RtcClock;
pub use timer::{DeadlineTimer, PwmEchoCounter};
