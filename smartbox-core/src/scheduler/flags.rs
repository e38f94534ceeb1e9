//! One-shot flag registry
//!
//! Every flag has exactly one producer (an interrupt) and one consumer (the
//! main loop). Raising is idempotent; taking clears the flag in the same
//! atomic operation that observes it.

use portable_atomic::{AtomicBool, Ordering};

/// Number of flags in the registry
pub const FLAG_COUNT: usize = 7;

/// Flags raised from interrupt context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Flag {
    /// Half-second period: take a distance sample
    Ranging = 0,
    /// One-second period: refresh the screen
    Refresh = 1,
    /// Alarm silence window elapsed
    Silence = 2,
    /// Auto-close window elapsed
    AutoClose = 3,
    /// RTC alarm matched
    AlarmFired = 4,
    /// Lid button pressed
    ButtonPressed = 5,
    /// A console command is waiting
    CommandReady = 6,
}

impl Flag {
    /// All flags, in registry order
    pub const ALL: [Flag; FLAG_COUNT] = [
        Flag::Ranging,
        Flag::Refresh,
        Flag::Silence,
        Flag::AutoClose,
        Flag::AlarmFired,
        Flag::ButtonPressed,
        Flag::CommandReady,
    ];

    /// Slot in the registry
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Check if this flag is produced by a tick counter
    pub const fn is_period(self) -> bool {
        matches!(
            self,
            Flag::Ranging | Flag::Refresh | Flag::Silence | Flag::AutoClose
        )
    }
}

/// Registry of one-shot flags
///
/// Usable from a `static`; all accessors take `&self`.
pub struct EventFlags {
    flags: [AtomicBool; FLAG_COUNT],
}

#[allow(clippy::declare_interior_mutable_const)]
const LOWERED: AtomicBool = AtomicBool::new(false);

impl EventFlags {
    /// Create a registry with every flag lowered
    pub const fn new() -> Self {
        Self {
            flags: [LOWERED; FLAG_COUNT],
        }
    }

    /// Raise a flag (idempotent)
    pub fn raise(&self, flag: Flag) {
        self.flags[flag.index()].store(true, Ordering::Release);
    }

    /// Test-and-clear a flag
    pub fn take(&self, flag: Flag) -> bool {
        self.flags[flag.index()].swap(false, Ordering::AcqRel)
    }

    /// Check a flag without clearing it
    pub fn is_raised(&self, flag: Flag) -> bool {
        self.flags[flag.index()].load(Ordering::Acquire)
    }

    /// Check if any flag is waiting to be taken
    pub fn any_raised(&self) -> bool {
        Flag::ALL.iter().any(|&f| self.is_raised(f))
    }
}

impl Default for EventFlags {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_registry_is_clear() {
        let flags = EventFlags::new();
        assert!(!flags.any_raised());
        for f in Flag::ALL {
            assert!(!flags.is_raised(f));
        }
    }

    #[test]
    fn test_raise_is_idempotent() {
        let flags = EventFlags::new();
        flags.raise(Flag::ButtonPressed);
        flags.raise(Flag::ButtonPressed);
        assert!(flags.take(Flag::ButtonPressed));
        assert!(!flags.take(Flag::ButtonPressed));
    }

    #[test]
    fn test_take_only_clears_its_own_flag() {
        let flags = EventFlags::new();
        flags.raise(Flag::AlarmFired);
        flags.raise(Flag::CommandReady);
        assert!(flags.take(Flag::AlarmFired));
        assert!(flags.is_raised(Flag::CommandReady));
        assert!(!flags.is_raised(Flag::AlarmFired));
    }

    #[test]
    fn test_indices_match_registry_order() {
        for (i, f) in Flag::ALL.iter().enumerate() {
            assert_eq!(f.index(), i);
        }
        assert_eq!(Flag::ALL.iter().filter(|f| f.is_period()).count(), 4);
    }
}
