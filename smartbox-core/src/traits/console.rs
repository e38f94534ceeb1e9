//! Serial console trait

use smartbox_protocol::{Command, CommandError};

/// Serial terminal the box talks to
pub trait Console {
    /// Next complete command line, parsed
    ///
    /// Returns `None` once every received line has been taken.
    fn take_command(&mut self) -> Option<Result<Command, CommandError>>;

    /// Send text to the terminal
    fn write_str(&mut self, text: &str);
}
