//! Echo ranging
//!
//! Drives an HC-SR04-style sensor: a short trigger pulse starts a
//! measurement, the sensor answers with an echo pulse whose width is the
//! round-trip time of the sound burst.

pub mod distance;
pub mod engine;

pub use distance::Distance;
pub use engine::{EchoRanging, Edge, RangingState, RangingStats};
