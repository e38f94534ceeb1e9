//! Timer bindings
//!
//! Neither timer reloads on its own: the tick timer is a one-shot deadline
//! moved forward by exactly one period on every re-arm, and the echo
//! counter's wrap flag stays set until it is acknowledged.

use embassy_rp::pac;
use embassy_rp::pwm::{Config, Pwm};
use embassy_time::{Duration, Instant, Timer};
use fixed::types::U12F4;
use smartbox_hal::{FreeRunningCounter, OverflowTimer, RearmCount};

/// Periodic tick source built on the embassy time driver
///
/// Deadlines advance from the previous deadline, not from "now", so a late
/// wake-up does not stretch the next period.
pub struct DeadlineTimer {
    deadline: Instant,
    period: Duration,
    rearms: RearmCount,
}

impl DeadlineTimer {
    /// Start a timer whose first overflow is one period from now
    pub fn new(period: Duration) -> Self {
        Self {
            deadline: Instant::now() + period,
            period,
            rearms: RearmCount::default(),
        }
    }

    /// Wait for the next overflow
    pub async fn wait(&self) {
        Timer::at(self.deadline).await;
    }

    /// Overflows handled since start
    pub fn overflows(&self) -> u32 {
        self.rearms.0
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}

impl OverflowTimer for DeadlineTimer {
    fn rearm(&mut self) {
        self.deadline += self.period;
        self.rearms.record();
    }
}

/// Clock divider and TOP register for a slice ticking at `timer_hz` and
/// wrapping after `period` ticks
///
/// Out-of-range values saturate to what the 8.4 divider and the 16-bit
/// counter can hold.
pub fn echo_counter_setup(sys_hz: u32, timer_hz: u32, period: u32) -> (U12F4, u16) {
    let divider = U12F4::saturating_from_num(sys_hz / timer_hz.max(1)).max(U12F4::ONE);
    let top = period.saturating_sub(1).min(u16::MAX as u32) as u16;
    (divider, top)
}

/// PWM slice used as a free-running echo counter
///
/// The slice counts at `timer_hz` and wraps after `period` ticks, raising
/// `PWM_IRQ_WRAP`. No output pin is attached.
pub struct PwmEchoCounter<'d> {
    pwm: Pwm<'d>,
    slice: usize,
}

impl<'d> PwmEchoCounter<'d> {
    /// Configure a free slice
    ///
    /// `sys_hz / timer_hz` must fit the 8.4 fractional divider and `period`
    /// must fit the 16-bit counter.
    pub fn new(
        mut pwm: Pwm<'d>,
        slice: usize,
        sys_hz: u32,
        timer_hz: u32,
        period: u32,
    ) -> Self {
        let (divider, top) = echo_counter_setup(sys_hz, timer_hz, period);
        let mut config = Config::default();
        config.divider = divider;
        config.top = top;
        pwm.set_config(&config);
        Self { pwm, slice }
    }

    /// Route this slice's wrap to `PWM_IRQ_WRAP`
    pub fn enable_wrap_interrupt(&mut self) {
        self.pwm.clear_wrapped();
        pac::PWM.inte().modify(|w| w.set_ch(self.slice, true));
    }

    pub fn slice(&self) -> usize {
        self.slice
    }
}

impl OverflowTimer for PwmEchoCounter<'_> {
    fn rearm(&mut self) {
        self.pwm.clear_wrapped();
    }
}

impl FreeRunningCounter for PwmEchoCounter<'_> {
    fn reset(&mut self) {
        self.pwm.set_counter(0);
    }

    fn count(&self) -> u32 {
        self.pwm.counter() as u32
    }

    fn wrap_pending(&self) -> bool {
        pac::PWM.intr().read().ch(self.slice)
    }
}
