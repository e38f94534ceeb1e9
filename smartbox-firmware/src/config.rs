//! Board configuration
//!
//! Compiled-in settings for a Raspberry Pi Pico wired as the SmartBox.

use smartbox_core::config::{ConfigError, LidConfig, RangingConfig, TimingConfig};
use smartbox_drivers::sensor::TemperatureScale;

/// Tick periods and duty moduli
pub const TIMING: TimingConfig = TimingConfig::DEFAULT;

/// Echo ranging parameters
pub const RANGING: RangingConfig = RangingConfig::DEFAULT;

/// Lid motion
pub const LID: LidConfig = LidConfig::DEFAULT;

/// LM35 on a 12-bit ADC with a 3.3 V reference (about 12.4 counts per degree)
pub const TEMPERATURE: TemperatureScale = TemperatureScale {
    offset: 0,
    counts_per_degree: 12,
};

/// Console line speed
pub const CONSOLE_BAUD: u32 = 9600;

/// PWM slice used as the echo counter (no pins routed to it)
pub const ECHO_SLICE: usize = 7;

/// Character display geometry, shared with the screen layout
pub use smartbox_core::ui::{DISPLAY_COLS, DISPLAY_ROWS};

/// Check every compiled-in setting
pub fn validate() -> Result<(), ConfigError> {
    TIMING.validate()?;
    RANGING.validate()?;
    LID.validate()?;
    Ok(())
}
