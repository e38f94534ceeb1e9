//! SmartBox Serial Command Protocol
//!
//! This crate defines the line-oriented text protocol spoken on the box's
//! serial port, plus the calendar types exchanged with the real-time clock.
//! The protocol is designed for a human at a terminal.
//!
//! # Protocol Overview
//!
//! Every byte received is echoed back. Bytes accumulate into a line until a
//! carriage return arrives:
//! ```text
//! ┌──────────┬─────────┬──────────┬──────────┬────┐
//! │ "set"    │ "time"  │ HH:MM:SS │ M/D/Y    │ \r │
//! └──────────┴─────────┴──────────┴──────────┴────┘
//! ┌──────────┬────┐
//! │ "help"   │ \r │
//! └──────────┴────┘
//! ```
//!
//! Replies are plain text terminated with `\r`.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod command;
pub mod console;
pub mod line;
pub mod time;

pub use command::{parse_command, Command, CommandError};
pub use line::{Line, LineAssembler, MAX_LINE_LEN};
pub use time::{DateTime, Weekday};
