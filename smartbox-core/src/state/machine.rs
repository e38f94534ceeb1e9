//! Lid state definition

use super::events::LidEvent;
use crate::traits::Direction;

/// Motor direction that opens the lid
pub const OPEN_DIRECTION: Direction = Direction::Clockwise;

/// Motor direction that closes the lid
pub const CLOSE_DIRECTION: Direction = Direction::CounterClockwise;

/// Lid states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LidState {
    /// Lid down
    #[default]
    Closed,
    /// Opened by proximity, closes on its own
    Open,
    /// Opened by the button; ignores proximity and auto-close
    ManualOpen,
}

impl LidState {
    pub fn is_open(&self) -> bool {
        !matches!(self, LidState::Closed)
    }

    /// Check if automatic behavior is suspended
    pub fn is_manual(&self) -> bool {
        matches!(self, LidState::ManualOpen)
    }

    /// Process an event and return the next state
    pub fn transition(self, event: LidEvent) -> Self {
        use LidEvent::*;
        use LidState::*;

        match (self, event) {
            (Closed, ObjectDetected) => Open,
            (Closed, ButtonPressed) => ManualOpen,

            (Open, AutoCloseElapsed) => Closed,
            (Open, ButtonPressed) => Closed,

            (ManualOpen, ButtonPressed) => Closed,

            // Default: stay in current state
            _ => self,
        }
    }

    /// Motor direction needed to get from `self` to `next`, if any
    pub fn motion_to(self, next: LidState) -> Option<Direction> {
        match (self.is_open(), next.is_open()) {
            (false, true) => Some(OPEN_DIRECTION),
            (true, false) => Some(CLOSE_DIRECTION),
            _ => None,
        }
    }
}
