//! Embassy async tasks
//!
//! Producers run on the high-priority interrupt executor and only raise
//! flags or feed the ranging engine. The control loop and the serial
//! console run on the thread executor.

pub mod button;
pub mod control;
pub mod echo;
pub mod serial;
pub mod tick;

pub use button::button_task;
pub use control::control_task;
pub use echo::echo_task;
pub use serial::{console_rx_task, console_tx_task};
pub use tick::{fast_tick_task, slow_tick_task};
