//! Tick source handlers and the flag registry they feed

use smartbox_hal::OverflowTimer;

use super::flags::{EventFlags, Flag};
use super::period::PeriodCounter;
use crate::config::TimingConfig;

/// Flag registry plus the four period counters
///
/// The fast source drives the ranging and refresh cadences, the slow source
/// the alarm silence and auto-close windows. Meant to live in a `static`.
pub struct Scheduler {
    flags: EventFlags,
    ranging: PeriodCounter,
    refresh: PeriodCounter,
    silence: PeriodCounter,
    auto_close: PeriodCounter,
}

impl Scheduler {
    pub const fn new(config: &TimingConfig) -> Self {
        Self {
            flags: EventFlags::new(),
            ranging: PeriodCounter::new(Flag::Ranging, config.ranging_ticks),
            refresh: PeriodCounter::new(Flag::Refresh, config.refresh_ticks),
            silence: PeriodCounter::new(Flag::Silence, config.silence_ticks),
            auto_close: PeriodCounter::new(Flag::AutoClose, config.auto_close_ticks),
        }
    }

    /// Fast tick overflow handler
    pub fn on_fast_overflow<T: OverflowTimer>(&self, timer: &mut T) {
        timer.rearm();
        self.ranging.advance(&self.flags);
        self.refresh.advance(&self.flags);
    }

    /// Slow tick overflow handler
    pub fn on_slow_overflow<T: OverflowTimer>(&self, timer: &mut T) {
        timer.rearm();
        self.silence.advance(&self.flags);
        self.auto_close.advance(&self.flags);
    }

    /// Raise an event flag from its producer
    pub fn raise(&self, flag: Flag) {
        self.flags.raise(flag);
    }

    /// Raise `flag` only if its payload made it into the queue
    ///
    /// Hands back the queue result so the producer can report a drop.
    pub fn raise_if_queued<T, E>(&self, flag: Flag, queued: Result<T, E>) -> Result<T, E> {
        if queued.is_ok() {
            self.flags.raise(flag);
        }
        queued
    }

    /// Test-and-clear a flag (main loop only)
    pub fn take(&self, flag: Flag) -> bool {
        self.flags.take(flag)
    }

    pub fn is_raised(&self, flag: Flag) -> bool {
        self.flags.is_raised(flag)
    }

    /// Reopen the full auto-close window
    pub fn restart_auto_close(&self) {
        self.auto_close.restart();
    }

    /// Reopen the full alarm silence window
    pub fn restart_silence(&self) {
        self.silence.restart();
    }

    pub fn flags(&self) -> &EventFlags {
        &self.flags
    }
}
