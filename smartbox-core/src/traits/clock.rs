//! Real-time clock trait

use smartbox_protocol::DateTime;

/// Errors reported by the real-time clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockError {
    /// Bus transfer failed
    Bus,
    /// Clock is stopped or has never been set
    NotRunning,
    /// Rejected date or time
    InvalidTime,
}

/// Battery-backed calendar clock with a daily alarm
pub trait Calendar {
    /// Read the current date and time
    fn now(&mut self) -> Result<DateTime, ClockError>;

    /// Set the current date and time
    fn set(&mut self, time: DateTime) -> Result<(), ClockError>;

    /// Clear the alarm flag so the alarm line is released
    fn acknowledge_alarm(&mut self) -> Result<(), ClockError>;
}
