//! Control loop task
//!
//! Polls the event flags without ever waiting on one. Each pass runs the
//! due duties in order, then yields so the console transmitter gets a turn.

use defmt::*;
use embassy_futures::yield_now;

use smartbox_core::control::Controller;

use crate::board::Board;
use crate::channels::SCHEDULER;
use crate::config::{LID, RANGING};

#[embassy_executor::task]
pub async fn control_task(mut board: Board) {
    info!("Control task started");

    let mut controller = Controller::new(RANGING, LID);
    controller.boot(&mut board);

    let mut lid = controller.lid();
    loop {
        let pass = controller.service(&SCHEDULER, &mut board);
        if !pass.is_empty() {
            trace!("Pass: {:?}", pass.as_slice());
        }

        if controller.lid() != lid {
            info!(
                "Lid {:?} -> {:?} (distance {} cm)",
                lid,
                controller.lid(),
                controller.distance().cm()
            );
            lid = controller.lid();
        }

        yield_now().await;
    }
}
