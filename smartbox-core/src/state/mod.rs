//! Lid state machine
//!
//! The lid position is a function of the current state and an event.
//! Motion is derived from the transition, never stored separately.

pub mod events;
pub mod machine;

pub use events::LidEvent;
pub use machine::{LidState, CLOSE_DIRECTION, OPEN_DIRECTION};
