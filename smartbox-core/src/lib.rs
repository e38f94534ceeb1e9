//! Board-agnostic core logic for the SmartBox firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (range finder, lid motor, clock, display)
//! - Event-flag scheduler fed by the tick interrupts
//! - Echo ranging engine
//! - Lid state machine
//! - Screen layout
//! - Main control loop
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod config;
pub mod control;
pub mod ranging;
pub mod scheduler;
pub mod state;
pub mod traits;
pub mod ui;
