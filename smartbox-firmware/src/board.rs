//! Concrete device types for the Pico board
//!
//! | Function        | Pin / resource           |
//! |-----------------|--------------------------|
//! | Console TX / RX | GPIO0 / GPIO1 (UART0)    |
//! | Trigger         | GPIO2                    |
//! | Echo            | GPIO3                    |
//! | LCD SDA / SCL   | GPIO4 / GPIO5 (I2C0)     |
//! | Lid button      | GPIO6 (active low)       |
//! | Buzzer          | GPIO7                    |
//! | Stepper coils   | GPIO10-GPIO13            |
//! | Temperature     | GPIO26 (ADC0)            |
//! | Echo counter    | PWM slice 7              |

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_rp::i2c::{Blocking, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_time::Delay;

use smartbox_core::control::Devices;
use smartbox_core::ranging::{Distance, EchoRanging};
use smartbox_core::traits::{Console, RangeFinder};
use smartbox_drivers::buzzer::GpioBuzzer;
use smartbox_drivers::display::Hd44780I2c;
use smartbox_drivers::sensor::LinearThermometer;
use smartbox_drivers::stepper::UnipolarStepper;
use smartbox_hal_rp2040::{AdcChannel, PwmEchoCounter, RtcClock};
use smartbox_protocol::{Command, CommandError};

use crate::channels::{with_engine, COMMANDS, CONSOLE_OUT};

/// Ranging engine with its trigger pin, echo counter and delay source
pub type Engine = EchoRanging<Output<'static>, PwmEchoCounter<'static>, Delay>;

pub type LidStepper = UnipolarStepper<Output<'static>, Delay>;
pub type Display = Hd44780I2c<I2c<'static, I2C0, Blocking>, Delay>;
pub type Thermometer = LinearThermometer<AdcChannel<'static>>;

/// Everything the control loop drives
pub type Board = Devices<
    SharedRanging,
    LidStepper,
    GpioBuzzer<Output<'static>>,
    RtcClock<'static>,
    Display,
    Thermometer,
    SerialConsole,
>;

/// Control-loop handle to the engine that lives in [`crate::channels::ENGINE`]
pub struct SharedRanging;

impl RangeFinder for SharedRanging {
    fn request_distance(&mut self) -> Distance {
        with_engine(|engine| engine.request()).unwrap_or(Distance::NONE)
    }
}

/// Console backed by the command queue and the transmit pipe
pub struct SerialConsole;

impl Console for SerialConsole {
    fn take_command(&mut self) -> Option<Result<Command, CommandError>> {
        COMMANDS.try_receive().ok()
    }

    fn write_str(&mut self, text: &str) {
        write_console(text.as_bytes());
    }
}

/// Queue bytes for the transmitter without blocking
///
/// Whatever does not fit is dropped.
pub fn write_console(mut bytes: &[u8]) {
    while !bytes.is_empty() {
        match CONSOLE_OUT.try_write(bytes) {
            Ok(n) => bytes = &bytes[n..],
            Err(_) => {
                warn!("Console output full, dropping {} bytes", bytes.len());
                return;
            }
        }
    }
}
