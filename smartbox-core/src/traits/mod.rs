//! Hardware abstraction traits
//!
//! These traits define the interface between the control loop and the
//! devices around it. Board crates implement them; tests use mocks.

pub mod clock;
pub mod console;
pub mod display;
pub mod motor;
pub mod sensor;

pub use clock::{Calendar, ClockError};
pub use console::Console;
pub use display::{DisplayDriver, DisplayError};
pub use motor::{Buzzer, Direction, LidMotor};
pub use sensor::{RangeFinder, Thermometer};
