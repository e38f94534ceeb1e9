//! Event-flag scheduler
//!
//! Interrupt handlers raise one-shot flags; the main loop takes them in a
//! fixed order. Period flags come from counters advanced by two tick
//! sources, event flags from the button, alarm and serial producers.

pub mod flags;
pub mod period;
pub mod tick;

pub use flags::{EventFlags, Flag, FLAG_COUNT};
pub use period::PeriodCounter;
pub use tick::Scheduler;
