//! Console commands
//!
//! Two commands are understood:
//! - `help` - print the command list
//! - `set time HH:MM:SS M/D/Y` - set the real-time clock (two-digit year)

use crate::time::{DateTime, Weekday, CENTURY};

/// Keyword for the help command (matched against the whole line)
pub const CMD_HELP: &str = "help";

/// First two words of the set-time command
pub const CMD_SET_TIME: [&str; 2] = ["set", "time"];

/// Commands parsed from a console line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Print the help menu
    Help,
    /// Set the real-time clock
    SetTime(DateTime),
}

/// Errors that can occur while reading a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandError {
    /// Line did not match any known command
    Unknown,
    /// Time or date field missing, malformed or out of range
    InvalidTime,
    /// Line exceeded the receive buffer and was discarded
    LineTooLong,
}

/// Parse a complete console line
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    if line == CMD_HELP {
        return Ok(Command::Help);
    }

    let mut words = line.split_ascii_whitespace();
    let key = (words.next(), words.next());
    if key != (Some(CMD_SET_TIME[0]), Some(CMD_SET_TIME[1])) {
        return Err(CommandError::Unknown);
    }

    let time = words.next().ok_or(CommandError::InvalidTime)?;
    let date = words.next().ok_or(CommandError::InvalidTime)?;
    // Anything after the date is ignored

    let [hour, minute, second] = split_fields(time, ':')?;
    let [month, date, year] = split_fields(date, '/')?;

    if year > 99 {
        return Err(CommandError::InvalidTime);
    }

    let t = DateTime {
        year: CENTURY + year as u16,
        month,
        date,
        weekday: Weekday::Sunday,
        hour,
        minute,
        second,
    };

    if !t.is_valid() {
        return Err(CommandError::InvalidTime);
    }
    Ok(Command::SetTime(t))
}

/// Split `a<sep>b<sep>c` into three small decimal numbers
fn split_fields(s: &str, sep: char) -> Result<[u8; 3], CommandError> {
    let mut out = [0u8; 3];
    let mut parts = s.split(sep);
    for slot in out.iter_mut() {
        let part = parts.next().ok_or(CommandError::InvalidTime)?;
        *slot = part.parse::<u8>().map_err(|_| CommandError::InvalidTime)?;
    }
    if parts.next().is_some() {
        return Err(CommandError::InvalidTime);
    }
    Ok(out)
}
