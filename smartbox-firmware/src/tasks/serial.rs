//! Serial console tasks
//!
//! The receiver echoes every byte, assembles lines and queues the parsed
//! command for the control loop. The transmitter drains the console pipe.

use defmt::*;
use embassy_rp::uart::{BufferedUartRx, BufferedUartTx};
use embedded_io_async::{Read, Write};

use smartbox_core::scheduler::Flag;
use smartbox_protocol::{parse_command, LineAssembler};

use crate::board::write_console;
use crate::channels::{COMMANDS, CONSOLE_OUT, SCHEDULER};

/// Buffer size for UART receive
const RX_BUF_SIZE: usize = 32;

/// Largest chunk handed to the UART at once
const TX_CHUNK_SIZE: usize = 64;

/// Console RX task
#[embassy_executor::task]
pub async fn console_rx_task(mut rx: BufferedUartRx) {
    info!("Console RX task started");

    let mut assembler = LineAssembler::new();
    let mut buf = [0u8; RX_BUF_SIZE];

    loop {
        match rx.read(&mut buf).await {
            Ok(n) if n > 0 => {
                trace!("RX: {} bytes", n);
                write_console(&buf[..n]);

                for &byte in &buf[..n] {
                    let parsed = match assembler.feed(byte) {
                        Ok(Some(line)) => parse_command(&line),
                        Ok(None) => continue,
                        Err(e) => Err(e),
                    };

                    debug!("Console line: {:?}", parsed);
                    let queued = COMMANDS.try_send(parsed);
                    if SCHEDULER.raise_if_queued(Flag::CommandReady, queued).is_err() {
                        warn!("Command queue full, dropping line");
                    }
                }
            }
            Ok(_) => {}
            Err(e) => {
                warn!("UART read error: {:?}", e);
            }
        }
    }
}

/// Console TX task
#[embassy_executor::task]
pub async fn console_tx_task(mut tx: BufferedUartTx) {
    info!("Console TX task started");

    let mut buf = [0u8; TX_CHUNK_SIZE];
    loop {
        let n = CONSOLE_OUT.read(&mut buf).await;
        if let Err(e) = tx.write_all(&buf[..n]).await {
            warn!("UART write error: {:?}", e);
        }
    }
}
