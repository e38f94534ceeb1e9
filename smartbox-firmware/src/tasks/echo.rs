//! Echo line task
//!
//! Turns every edge on the echo input into an engine event. The level is
//! sampled right after the wake-up to tell rising from falling.

use defmt::*;
use embassy_rp::gpio::Input;

use smartbox_core::ranging::Edge;

use crate::channels::with_engine;

#[embassy_executor::task]
pub async fn echo_task(mut echo: Input<'static>) {
    info!("Echo task started");

    loop {
        echo.wait_for_any_edge().await;
        let edge = Edge::from_level(echo.is_high());
        trace!("Echo {:?}", edge);
        with_engine(|engine| engine.on_edge(edge));
    }
}
