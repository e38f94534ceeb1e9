//! Actuator traits

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rotation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    #[default]
    Clockwise,
    CounterClockwise,
}

impl Direction {
    /// Get the opposite direction
    pub fn reversed(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// Motor that swings the lid
pub trait LidMotor {
    /// Rotate a whole number of revolutions
    ///
    /// Blocks until the motion completes. The last phase stays energized
    /// so the lid holds its position.
    fn rotate(&mut self, direction: Direction, turns: u16);
}

/// Alarm sounder
pub trait Buzzer {
    fn set_on(&mut self, on: bool);

    fn is_on(&self) -> bool;
}
