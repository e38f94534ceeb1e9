//! Fixed console texts
//!
//! Lines start and end with `\r` so they land on a fresh line of a
//! terminal that only honours carriage returns.

use crate::command::CommandError;

/// Printed once at power-on
pub const GREETING: [&str; 2] = ["Hello there!\r", "Write help for list of commands.\r"];

/// Help menu, one entry per line
pub const HELP: [&str; 3] = [
    "\r******  << Help >>  ******\r",
    "\r   set time XX:YY:ZZ M/D/Y\r",
    "-> Sets the desired time\r",
];

/// Reply after a command completed
pub const DONE: &str = "\rDone!\r";

/// Reply for a line that could not be used
pub const INVALID_INPUT: &str = "\rInvalid input!\r";

impl CommandError {
    /// Text sent back to the terminal for this error
    pub fn reply(&self) -> &'static str {
        // The terminal only ever sees one message; the variant is for logs
        INVALID_INPUT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_error_has_a_reply() {
        for e in [
            CommandError::Unknown,
            CommandError::InvalidTime,
            CommandError::LineTooLong,
        ] {
            assert_eq!(e.reply(), INVALID_INPUT);
        }
    }

    #[test]
    fn test_texts_are_carriage_return_terminated() {
        for line in GREETING.iter().chain(HELP.iter()).chain([DONE, INVALID_INPUT].iter()) {
            assert!(line.ends_with('\r'), "{:?}", line);
        }
    }
}
