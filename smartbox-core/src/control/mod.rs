//! Main control loop
//!
//! One pass polls every duty in a fixed order. Nothing in a pass waits on
//! an event; the only delays are the bounded busy-waits of lid motion.

pub mod controller;
pub mod duty;

pub use controller::{Controller, Devices, Pass};
pub use duty::{Duty, DUTY_COUNT};
