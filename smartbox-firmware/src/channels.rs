//! Shared state between interrupts and tasks
//!
//! Producers (tick timers, echo and button edges, the RTC alarm, the serial
//! receiver) only ever raise flags or queue data here. The control task is
//! the single consumer.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::channel::Channel;
use embassy_sync::pipe::Pipe;

use smartbox_core::scheduler::Scheduler;
use smartbox_protocol::{Command, CommandError};

use crate::board::Engine;
use crate::config::TIMING;

/// Parsed command lines waiting for the control loop
const COMMAND_QUEUE_SIZE: usize = 2;

/// Bytes buffered for the serial transmitter
const CONSOLE_OUT_SIZE: usize = 256;

/// Event flags and duty period counters
pub static SCHEDULER: Scheduler = Scheduler::new(&TIMING);

/// Ranging engine, touched from the echo task, the wrap interrupt and the
/// control loop
pub static ENGINE: Mutex<CriticalSectionRawMutex, RefCell<Option<Engine>>> =
    Mutex::new(RefCell::new(None));

/// Console commands from the serial receiver
pub static COMMANDS: Channel<
    CriticalSectionRawMutex,
    Result<Command, CommandError>,
    COMMAND_QUEUE_SIZE,
> = Channel::new();

/// Text for the terminal (echoes and replies)
pub static CONSOLE_OUT: Pipe<CriticalSectionRawMutex, CONSOLE_OUT_SIZE> = Pipe::new();

/// Hand the engine over to interrupt context
pub fn install_engine(engine: Engine) {
    ENGINE.lock(|cell| cell.replace(Some(engine)));
}

/// Run `f` on the engine inside a critical section
///
/// Returns `None` before [`install_engine`] has run.
pub fn with_engine<R>(f: impl FnOnce(&mut Engine) -> R) -> Option<R> {
    ENGINE.lock(|cell| cell.borrow_mut().as_mut().map(f))
}
