//! Tick tasks
//!
//! Two independent tick sources advance the duty period counters:
//! - fast tick: ranging and display refresh
//! - slow tick: alarm silence and lid auto-close windows

use defmt::*;
use embassy_time::Duration;

use smartbox_hal_rp2040::DeadlineTimer;

use crate::channels::SCHEDULER;
use crate::config::TIMING;

/// Fast tick task
#[embassy_executor::task]
pub async fn fast_tick_task() {
    let period = Duration::from_micros(TIMING.fast_tick_us as u64);
    info!("Fast tick task started ({} us)", period.as_micros());

    let mut timer = DeadlineTimer::new(period);
    loop {
        timer.wait().await;
        SCHEDULER.on_fast_overflow(&mut timer);
    }
}

/// Slow tick task
#[embassy_executor::task]
pub async fn slow_tick_task() {
    let period = Duration::from_millis(TIMING.slow_tick_ms as u64);
    info!("Slow tick task started ({} ms)", period.as_millis());

    let mut timer = DeadlineTimer::new(period);
    loop {
        timer.wait().await;
        SCHEDULER.on_slow_overflow(&mut timer);
        trace!("Slow tick {}", timer.overflows());
    }
}
