//! Line assembly for the serial console
//!
//! Bytes arrive one at a time from the UART receive interrupt. A carriage
//! return ends the line. Line feeds are dropped so terminals that send
//! `\r\n` behave the same as ones that send a bare `\r`.

use heapless::String;

use crate::command::CommandError;

/// Longest accepted command line, excluding the terminator
pub const MAX_LINE_LEN: usize = 99;

/// Line terminator
pub const LINE_END: u8 = b'\r';

/// A complete command line
pub type Line = String<MAX_LINE_LEN>;

/// Accumulates received bytes into command lines
#[derive(Debug, Clone, Default)]
pub struct LineAssembler {
    buffer: Line,
    /// Set once the current line ran past `MAX_LINE_LEN`
    overflowed: bool,
}

impl LineAssembler {
    /// Create an empty assembler
    pub const fn new() -> Self {
        Self {
            buffer: String::new(),
            overflowed: false,
        }
    }

    /// Drop any partial line
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.overflowed = false;
    }

    /// Number of bytes buffered for the current line
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Check if no partial line is buffered
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Feed a single received byte
    ///
    /// Returns `Ok(Some(line))` when a terminator completes a non-empty line,
    /// `Ok(None)` when more bytes are needed, and `Err(LineTooLong)` at the
    /// terminator of a line that overflowed the buffer. Empty lines are
    /// ignored.
    pub fn feed(&mut self, byte: u8) -> Result<Option<Line>, CommandError> {
        match byte {
            LINE_END => {
                if self.overflowed {
                    self.reset();
                    return Err(CommandError::LineTooLong);
                }
                if self.buffer.is_empty() {
                    return Ok(None);
                }
                let line = core::mem::take(&mut self.buffer);
                Ok(Some(line))
            }
            b'\n' => Ok(None),
            _ => {
                if self.overflowed {
                    return Ok(None);
                }
                // Non-ASCII bytes are replaced so the buffer stays valid UTF-8
                let c = if byte.is_ascii() { byte as char } else { '?' };
                if self.buffer.push(c).is_err() {
                    self.buffer.clear();
                    self.overflowed = true;
                }
                Ok(None)
            }
        }
    }
}
