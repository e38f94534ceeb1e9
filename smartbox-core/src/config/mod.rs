//! Configuration types
//!
//! Board-agnostic timing and calibration constants. Everything is fixed at
//! compile time; nothing is persisted.

pub mod timing;

pub use timing::*;
