//! Tick counters that raise a period flag at their modulus

use portable_atomic::{AtomicU16, Ordering};

use super::flags::{EventFlags, Flag};

/// Counts tick overflows and raises its flag every `modulus` ticks
///
/// Only the owning tick handler advances the counter, so plain load/store is
/// enough and no compare-and-swap is needed.
pub struct PeriodCounter {
    count: AtomicU16,
    modulus: u16,
    flag: Flag,
}

impl PeriodCounter {
    pub const fn new(flag: Flag, modulus: u16) -> Self {
        Self {
            count: AtomicU16::new(0),
            modulus,
            flag,
        }
    }

    /// Advance by one tick, raising the flag at the modulus
    pub fn advance(&self, flags: &EventFlags) {
        let count = self.count.load(Ordering::Relaxed).wrapping_add(1);
        if count >= self.modulus {
            self.count.store(0, Ordering::Relaxed);
            flags.raise(self.flag);
        } else {
            self.count.store(count, Ordering::Relaxed);
        }
    }

    /// Start a fresh window
    pub fn restart(&self) {
        self.count.store(0, Ordering::Relaxed);
    }

    /// Ticks since the last boundary or restart
    pub fn count(&self) -> u16 {
        self.count.load(Ordering::Relaxed)
    }

    pub fn modulus(&self) -> u16 {
        self.modulus
    }

    pub fn flag(&self) -> Flag {
        self.flag
    }
}
