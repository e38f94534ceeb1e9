//! SmartBox - Proximity Storage Box Firmware
//!
//! Main firmware binary for a Raspberry Pi Pico driving the SmartBox: an
//! ultrasonic sensor opens the lid when something comes close, a timer
//! closes it again, and a real-time clock sounds a buzzer at midnight.
//!
//! Interrupts and producer tasks only raise event flags. A single control
//! loop takes the flags and does the work.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::{InterruptExecutor, Spawner};
use embassy_rp::adc::{Adc, Channel as AdcInput};
use embassy_rp::clocks::clk_sys_freq;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{Config as I2cConfig, I2c};
use embassy_rp::interrupt::{InterruptExt, Priority};
use embassy_rp::peripherals::UART0;
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_rp::rtc::Rtc;
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use embassy_rp::{bind_interrupts, interrupt};
use embassy_time::Delay;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use smartbox_core::control::Devices;
use smartbox_core::ranging::EchoRanging;
use smartbox_core::traits::Calendar;
use smartbox_drivers::buzzer::GpioBuzzer;
use smartbox_drivers::display::{Hd44780I2c, DEFAULT_ADDRESS};
use smartbox_drivers::sensor::LinearThermometer;
use smartbox_drivers::stepper::UnipolarStepper;
use smartbox_hal_rp2040::{AdcChannel, PwmEchoCounter, RtcClock};
use smartbox_protocol::DateTime;

use crate::board::{Board, SerialConsole, SharedRanging};
use crate::channels::install_engine;
use crate::config::{
    CONSOLE_BAUD, DISPLAY_COLS, DISPLAY_ROWS, ECHO_SLICE, LID, RANGING, TEMPERATURE,
};

mod board;
mod channels;
mod config;
mod interrupts;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 256]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 64]> = StaticCell::new();

/// Runs the producer tasks above thread mode
static EXECUTOR_HIGH: InterruptExecutor = InterruptExecutor::new();

#[interrupt]
unsafe fn SWI_IRQ_1() {
    EXECUTOR_HIGH.on_interrupt()
}

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("SmartBox firmware starting...");

    unwrap!(config::validate());

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Console UART
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = CONSOLE_BAUD;

    let tx_buf = TX_BUF.init([0u8; 256]);
    let rx_buf = RX_BUF.init([0u8; 64]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, rx) = uart.split();

    info!("UART initialized at {} baud", CONSOLE_BAUD);

    // Ranging: trigger output, echo input and a PWM slice counting at 1 MHz
    let trigger = Output::new(p.PIN_2, Level::Low);
    let echo = Input::new(p.PIN_3, Pull::Down);

    let pwm = Pwm::new_free(p.PWM_SLICE7, PwmConfig::default());
    let mut counter = PwmEchoCounter::new(
        pwm,
        ECHO_SLICE,
        clk_sys_freq(),
        RANGING.timer_hz,
        RANGING.timer_period,
    );
    counter.enable_wrap_interrupt();

    install_engine(EchoRanging::new(trigger, counter, Delay, RANGING));
    interrupt::PWM_IRQ_WRAP.set_priority(Priority::P1);
    unsafe { interrupt::PWM_IRQ_WRAP.enable() };

    info!(
        "Ranging initialized ({} overflows to timeout)",
        RANGING.timeout_overflows()
    );

    // Real-time clock with the daily alarm
    let mut clock = RtcClock::new(Rtc::new(p.RTC));
    if let Err(e) = clock.set(DateTime::POWER_ON) {
        warn!("Failed to set power-on time: {:?}", e);
    }
    clock.schedule_midnight_alarm();
    interrupt::RTC_IRQ.set_priority(Priority::P3);
    unsafe { interrupt::RTC_IRQ.enable() };

    info!("RTC initialized");

    // Character LCD behind a PCF8574 expander
    let i2c = I2c::new_blocking(p.I2C0, p.PIN_5, p.PIN_4, I2cConfig::default());
    let mut display = Hd44780I2c::new(i2c, Delay, DEFAULT_ADDRESS, DISPLAY_COLS, DISPLAY_ROWS);
    if let Err(e) = display.init() {
        warn!("Display init failed: {:?}", e);
    }

    // Temperature sensor on ADC0
    let adc = Adc::new_blocking(p.ADC, Default::default());
    let input = AdcInput::new_pin(p.PIN_26, Pull::None);
    let thermometer = LinearThermometer::new(AdcChannel::new(adc, input), TEMPERATURE);

    // Lid stepper (four coils, wave drive)
    let coils = [
        Output::new(p.PIN_10, Level::Low),
        Output::new(p.PIN_11, Level::Low),
        Output::new(p.PIN_12, Level::Low),
        Output::new(p.PIN_13, Level::Low),
    ];
    let lid = UnipolarStepper::new(coils, Delay, LID.phase_ms);

    let buzzer = GpioBuzzer::new_active_high(Output::new(p.PIN_7, Level::Low));
    let button = Input::new(p.PIN_6, Pull::Up);

    info!("Devices initialized");

    let board: Board = Devices {
        ranger: SharedRanging,
        lid,
        buzzer,
        clock,
        display,
        thermometer,
        console: SerialConsole,
    };

    // Producers on the high-priority executor: SWI_IRQ_1, priority level 2
    interrupt::SWI_IRQ_1.set_priority(Priority::P2);
    let high = EXECUTOR_HIGH.start(interrupt::SWI_IRQ_1);
    high.spawn(unwrap!(tasks::fast_tick_task()));
    high.spawn(unwrap!(tasks::slow_tick_task()));
    high.spawn(unwrap!(tasks::echo_task(echo)));
    high.spawn(unwrap!(tasks::button_task(button)));

    spawner.spawn(unwrap!(tasks::console_rx_task(rx)));
    spawner.spawn(unwrap!(tasks::console_tx_task(tx)));
    spawner.spawn(unwrap!(tasks::control_task(board)));

    info!("All tasks spawned, firmware running");
}
