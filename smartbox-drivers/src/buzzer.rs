//! GPIO buzzer
//!
//! Active buzzer switched by a GPIO pin (directly or via a transistor).

use embedded_hal::digital::OutputPin;
use smartbox_core::traits::Buzzer;

/// GPIO buzzer output
///
/// The pin can be configured as active-high (default) or active-low.
pub struct GpioBuzzer<P> {
    pin: P,
    /// If true, buzzer ON = pin LOW
    inverted: bool,
    /// Current logical state (true = sounding)
    on: bool,
}

impl<P: OutputPin> GpioBuzzer<P> {
    /// Create a new buzzer, initially silent
    pub fn new(pin: P, inverted: bool) -> Self {
        let mut buzzer = Self {
            pin,
            inverted,
            on: false,
        };
        buzzer.set_on(false);
        buzzer
    }

    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, false)
    }

    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true)
    }
}

impl<P: OutputPin> Buzzer for GpioBuzzer<P> {
    fn set_on(&mut self, on: bool) {
        self.on = on;

        let result = if on != self.inverted {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        if result.is_err() {
            self.on = false;
        }
    }

    fn is_on(&self) -> bool {
        self.on
    }
}
