//! Lid button task

use defmt::*;
use embassy_rp::gpio::Input;

use smartbox_core::scheduler::Flag;

use crate::channels::SCHEDULER;

/// Raise the button flag on every press (falling edge, pulled up)
#[embassy_executor::task]
pub async fn button_task(mut button: Input<'static>) {
    info!("Button task started");

    loop {
        button.wait_for_falling_edge().await;
        debug!("Button pressed");
        SCHEDULER.raise(Flag::ButtonPressed);
    }
}
