//! Distance samples

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Last completed distance reading, in whole centimeters
///
/// Zero means no valid reading yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Distance(u32);

impl Distance {
    /// No reading
    pub const NONE: Distance = Distance(0);

    pub const fn from_cm(cm: u32) -> Self {
        Self(cm)
    }

    /// Convert an echo width in timer ticks (truncating)
    pub const fn from_ticks(ticks: u32, ticks_per_cm: u32) -> Self {
        if ticks_per_cm == 0 {
            return Self::NONE;
        }
        Self(ticks / ticks_per_cm)
    }

    pub const fn cm(self) -> u32 {
        self.0
    }

    /// Check if this holds a reading
    pub const fn is_valid(self) -> bool {
        self.0 > 0
    }
}
