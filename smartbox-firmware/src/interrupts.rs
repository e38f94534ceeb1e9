//! Raw interrupt handlers
//!
//! Both handlers are short: one feeds the ranging engine, the other turns
//! the RTC alarm into an event flag.

use embassy_rp::{interrupt, pac};

use smartbox_core::scheduler::Flag;

use crate::channels::{with_engine, SCHEDULER};

/// Echo counter wrapped
#[interrupt]
fn PWM_IRQ_WRAP() {
    // Only unmasked once the engine is installed
    with_engine(|engine| engine.on_timer_overflow());
}

/// RTC alarm matched
#[interrupt]
fn RTC_IRQ() {
    // The match stays asserted for the whole second; mask it until the
    // silence duty acknowledges the alarm
    pac::RTC.irq_setup_0().modify(|w| w.set_match_ena(false));
    SCHEDULER.raise(Flag::AlarmFired);
}
