//! Stepper driver implementations

pub mod unipolar;

pub use unipolar::{UnipolarStepper, COIL_COUNT, WAVE_SEQUENCE};
