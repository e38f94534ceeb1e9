//! User interface
//!
//! The box has a 16x2 character LCD showing the clock, the last distance
//! reading and the ambient temperature.

pub mod screen;

pub use screen::{Field, Screen, DEGREE_GLYPH, DISPLAY_COLS, DISPLAY_ROWS};
