//! Unipolar stepper on four GPIO lines
//!
//! Wave drive: exactly one coil is energized per phase, four phases per
//! revolution of the lid drive. Runs through a ULN2003-style darlington
//! array, so a high pin energizes its coil.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use smartbox_core::traits::{Direction, LidMotor};

use crate::DriverError;

/// Number of coil lines
pub const COIL_COUNT: usize = 4;

/// Coil energized in each clockwise phase
///
/// Counter-clockwise runs the same table backwards.
pub const WAVE_SEQUENCE: [usize; COIL_COUNT] = [2, 1, 3, 0];

/// Four-coil unipolar stepper
pub struct UnipolarStepper<P, D> {
    coils: [P; COIL_COUNT],
    delay: D,
    /// Dwell per phase (ms)
    phase_ms: u32,
}

impl<P: OutputPin, D: DelayNs> UnipolarStepper<P, D> {
    /// Create a new stepper with every coil off
    pub fn new(coils: [P; COIL_COUNT], delay: D, phase_ms: u32) -> Self {
        let mut stepper = Self {
            coils,
            delay,
            phase_ms,
        };
        let _ = stepper.release();
        stepper
    }

    /// Switch every coil off
    pub fn release(&mut self) -> Result<(), DriverError> {
        for coil in self.coils.iter_mut() {
            coil.set_low().map_err(|_| DriverError::Pin)?;
        }
        Ok(())
    }

    /// Energize one coil and hold for the phase dwell
    fn phase(&mut self, active: usize) -> Result<(), DriverError> {
        for (i, coil) in self.coils.iter_mut().enumerate() {
            let result = if i == active {
                coil.set_high()
            } else {
                coil.set_low()
            };
            result.map_err(|_| DriverError::Pin)?;
        }
        self.delay.delay_ms(self.phase_ms);
        Ok(())
    }

    /// Run whole revolutions, stopping at the first pin error
    pub fn step(&mut self, direction: Direction, turns: u16) -> Result<(), DriverError> {
        for _ in 0..turns {
            match direction {
                Direction::Clockwise => {
                    for active in WAVE_SEQUENCE {
                        self.phase(active)?;
                    }
                }
                Direction::CounterClockwise => {
                    for active in WAVE_SEQUENCE.into_iter().rev() {
                        self.phase(active)?;
                    }
                }
            }
        }
        Ok(())
    }
}

impl<P: OutputPin, D: DelayNs> LidMotor for UnipolarStepper<P, D> {
    fn rotate(&mut self, direction: Direction, turns: u16) {
        if self.step(direction, turns).is_err() {
            let _ = self.release();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::{Cell, RefCell};
    use embedded_hal::digital::{ErrorKind, ErrorType};
    use std::rc::Rc;
    use std::vec::Vec;

    /// Coil line writing its bit into a shared port image
    struct MockCoil {
        bit: u8,
        port: Rc<Cell<u8>>,
        broken: bool,
    }

    impl ErrorType for MockCoil {
        type Error = ErrorKind;
    }

    impl OutputPin for MockCoil {
        fn set_high(&mut self) -> Result<(), ErrorKind> {
            if self.broken {
                return Err(ErrorKind::Other);
            }
            self.port.set(self.port.get() | self.bit);
            Ok(())
        }

        fn set_low(&mut self) -> Result<(), ErrorKind> {
            self.port.set(self.port.get() & !self.bit);
            Ok(())
        }
    }

    /// Port image and dwell (ms) at each phase
    type Log = Rc<RefCell<Vec<(u8, u32)>>>;

    /// Delay that snapshots the port at every dwell
    struct MockDelay {
        port: Rc<Cell<u8>>,
        log: Log,
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.log.borrow_mut().push((self.port.get(), ns / 1_000_000));
        }
    }

    fn stepper(broken: bool) -> (UnipolarStepper<MockCoil, MockDelay>, Rc<Cell<u8>>, Log) {
        let port = Rc::new(Cell::new(0x0F));
        let log = Rc::new(RefCell::new(Vec::new()));
        let coils = [0u8, 1, 2, 3].map(|i| MockCoil {
            bit: 1 << i,
            port: port.clone(),
            broken,
        });
        let delay = MockDelay {
            port: port.clone(),
            log: log.clone(),
        };
        (UnipolarStepper::new(coils, delay, 50), port, log)
    }

    fn ports(log: &Log) -> Vec<u8> {
        log.borrow().iter().map(|e| e.0).collect()
    }

    #[test]
    fn test_starts_released() {
        let (_, port, _) = stepper(false);
        assert_eq!(port.get(), 0);
    }

    #[test]
    fn test_clockwise_wave_order() {
        let (mut motor, _, log) = stepper(false);
        motor.rotate(Direction::Clockwise, 1);
        assert_eq!(ports(&log), [0x04, 0x02, 0x08, 0x01]);
        assert!(log.borrow().iter().all(|e| e.1 == 50));
    }

    #[test]
    fn test_counter_clockwise_reverses() {
        let (mut motor, port, log) = stepper(false);
        motor.rotate(Direction::CounterClockwise, 2);
        assert_eq!(ports(&log), [0x01, 0x08, 0x02, 0x04, 0x01, 0x08, 0x02, 0x04]);
        // Last phase keeps holding
        assert_eq!(port.get(), 0x04);
    }

    #[test]
    fn test_lid_travel_length() {
        let (mut motor, _, log) = stepper(false);
        motor.rotate(Direction::Clockwise, 4);
        assert_eq!(log.borrow().len(), 16);
    }

    #[test]
    fn test_pin_error_releases_coils() {
        let (mut motor, port, log) = stepper(true);
        assert_eq!(motor.step(Direction::Clockwise, 1), Err(DriverError::Pin));
        motor.rotate(Direction::Clockwise, 1);
        assert!(log.borrow().is_empty());
        assert_eq!(port.get(), 0);
    }
}
