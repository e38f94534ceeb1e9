//! Counting timer abstractions
//!
//! The firmware is paced by counting peripherals that raise an overflow
//! event once per period. Two shapes are needed:
//!
//! - [`OverflowTimer`] - a tick source whose only job is to overflow at a
//!   fixed period. The overflow handler must re-arm it every time.
//! - [`FreeRunningCounter`] - a wide counter used to time an echo pulse.
//!   Its current value is read together with the number of overflows seen
//!   since it was last reset.

/// A timer peripheral that overflows at a fixed period
///
/// Timers behind this trait do not reload on their own. If [`rearm`] is
/// skipped on an overflow, the next period stretches to the peripheral's
/// native maximum and every period flag derived from it drifts.
///
/// [`rearm`]: OverflowTimer::rearm
pub trait OverflowTimer {
    /// Reload the timer so the next overflow lands one period from now
    ///
    /// Also acknowledges the pending overflow where the hardware needs it.
    /// Must be called exactly once per overflow, on every path.
    fn rearm(&mut self);
}

/// A free-running counter that wraps at a fixed period
///
/// The period (in counter ticks) and the tick frequency are calibration
/// values held by the caller; the counter itself only reports where it is
/// within the current period.
pub trait FreeRunningCounter: OverflowTimer {
    /// Restart counting from zero
    fn reset(&mut self);

    /// Ticks elapsed since the last overflow (or reset)
    fn count(&self) -> u32;

    /// Check if the counter wrapped since the last [`rearm`]
    ///
    /// Lets a caller that holds off the overflow interrupt tell whether a
    /// wrap belongs before or after the value it just read.
    ///
    /// [`rearm`]: OverflowTimer::rearm
    fn wrap_pending(&self) -> bool;
}

/// Overflow bookkeeping shared by software-backed timers
///
/// Counts how many times a timer has been re-armed. Useful for host-side
/// timers and diagnostics where the hardware keeps no such count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RearmCount(pub u32);

impl RearmCount {
    /// Record one re-arm
    pub fn record(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }
}
