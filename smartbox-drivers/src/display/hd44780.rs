//! HD44780 character LCD behind a PCF8574 I2C expander
//!
//! The expander drives the LCD in 4-bit mode:
//!
//! ```text
//!   P7..P4   P3         P2   P1   P0
//!   D7..D4   backlight  EN   RW   RS
//! ```
//!
//! Every nibble is latched with one two-byte write (EN high, then EN low).
//! RW is never driven, so the busy flag cannot be read and fixed delays are
//! used instead.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use smartbox_core::traits::{DisplayDriver, DisplayError};

/// Expander address with A0 and A1 strapped high
pub const DEFAULT_ADDRESS: u8 = 0x23;

const RS: u8 = 0x01;
const EN: u8 = 0x04;
const BACKLIGHT: u8 = 0x08;

const CMD_CLEAR: u8 = 0x01;
const CMD_ENTRY_INCREMENT: u8 = 0x06;
const CMD_DISPLAY_ON: u8 = 0x0C;
const CMD_FUNCTION_4BIT_2LINE: u8 = 0x28;
const CMD_SET_DDRAM: u8 = 0x80;

/// DDRAM address of the first cell of each row
const ROW_OFFSETS: [u8; 4] = [0x00, 0x40, 0x14, 0x54];

/// HD44780 LCD on a PCF8574 backpack
pub struct Hd44780I2c<I, D> {
    i2c: I,
    delay: D,
    address: u8,
    cols: u8,
    rows: u8,
    backlight: bool,
}

impl<I: I2c, D: DelayNs> Hd44780I2c<I, D> {
    /// Create a driver; call [`init`](Self::init) before use
    pub fn new(i2c: I, delay: D, address: u8, cols: u8, rows: u8) -> Self {
        Self {
            i2c,
            delay,
            address,
            cols,
            rows: rows.min(ROW_OFFSETS.len() as u8),
            backlight: true,
        }
    }

    /// Run the power-on initialization sequence
    pub fn init(&mut self) -> Result<(), DisplayError> {
        self.delay.delay_ms(50);
        self.expander(0)?;

        // Force 8-bit mode three times, then switch to 4-bit
        for (nibble, wait_us) in [(0x30, 4_500), (0x30, 4_500), (0x30, 150), (0x20, 150)] {
            self.nibble(nibble, 0)?;
            self.delay.delay_us(wait_us);
        }

        self.command(CMD_FUNCTION_4BIT_2LINE)?;
        self.command(CMD_DISPLAY_ON)?;
        self.clear()?;
        self.command(CMD_ENTRY_INCREMENT)
    }

    pub fn set_backlight(&mut self, on: bool) -> Result<(), DisplayError> {
        self.backlight = on;
        self.expander(0)
    }

    /// Move the cursor to a cell
    pub fn set_cursor(&mut self, row: u8, col: u8) -> Result<(), DisplayError> {
        if row >= self.rows || col >= self.cols {
            return Err(DisplayError::OutOfBounds);
        }
        self.command(CMD_SET_DDRAM | (ROW_OFFSETS[row as usize] + col))
    }

    fn command(&mut self, cmd: u8) -> Result<(), DisplayError> {
        self.send(cmd, 0)
    }

    fn send(&mut self, byte: u8, mode: u8) -> Result<(), DisplayError> {
        self.nibble(byte & 0xF0, mode)?;
        self.nibble(byte << 4, mode)
    }

    fn nibble(&mut self, high: u8, mode: u8) -> Result<(), DisplayError> {
        let data = (high & 0xF0) | mode | self.backlight_bit();
        self.i2c
            .write(self.address, &[data | EN, data])
            .map_err(|_| DisplayError::Bus)?;
        self.delay.delay_us(50);
        Ok(())
    }

    fn expander(&mut self, bits: u8) -> Result<(), DisplayError> {
        self.i2c
            .write(self.address, &[bits | self.backlight_bit()])
            .map_err(|_| DisplayError::Bus)
    }

    fn backlight_bit(&self) -> u8 {
        if self.backlight {
            BACKLIGHT
        } else {
            0
        }
    }
}

impl<I: I2c, D: DelayNs> DisplayDriver for Hd44780I2c<I, D> {
    fn text(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError> {
        self.set_cursor(row, col)?;
        let room = (self.cols - col) as usize;
        for c in text.chars().take(room) {
            // Code points up to 0xFF map straight onto the character ROM
            let byte = u8::try_from(c as u32).unwrap_or(b'?');
            self.send(byte, RS)?;
        }
        Ok(())
    }

    fn clear(&mut self) -> Result<(), DisplayError> {
        self.command(CMD_CLEAR)?;
        self.delay.delay_ms(2);
        Ok(())
    }
}
