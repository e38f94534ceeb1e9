//! Control loop
//!
//! Owns the lid state and the last distance sample, and maps taken flags
//! onto device actions.

use heapless::Vec;
use smartbox_protocol::console::{DONE, GREETING, HELP, INVALID_INPUT};
use smartbox_protocol::Command;

use super::duty::{Duty, DUTY_COUNT};
use crate::config::{LidConfig, RangingConfig};
use crate::ranging::Distance;
use crate::scheduler::Scheduler;
use crate::state::{LidEvent, LidState};
use crate::traits::{
    Buzzer, Calendar, Console, DisplayDriver, LidMotor, RangeFinder, Thermometer,
};
use crate::ui::Screen;

/// Duties performed in one pass, in the order they ran
pub type Pass = Vec<Duty, DUTY_COUNT>;

/// Devices driven by the control loop
pub struct Devices<R, L, B, K, D, T, C> {
    pub ranger: R,
    pub lid: L,
    pub buzzer: B,
    pub clock: K,
    pub display: D,
    pub thermometer: T,
    pub console: C,
}

/// Main loop state
pub struct Controller {
    lid: LidState,
    distance: Distance,
    /// Set by the ranging duty, consumed by the open-lid duty
    open_pending: bool,
    ranging: RangingConfig,
    lid_config: LidConfig,
}

impl Controller {
    /// Create a controller with the lid closed
    pub const fn new(ranging: RangingConfig, lid_config: LidConfig) -> Self {
        Self {
            lid: LidState::Closed,
            distance: Distance::NONE,
            open_pending: false,
            ranging,
            lid_config,
        }
    }

    pub fn lid(&self) -> LidState {
        self.lid
    }

    /// Last distance sample seen by the loop
    pub fn distance(&self) -> Distance {
        self.distance
    }

    pub fn open_pending(&self) -> bool {
        self.open_pending
    }

    /// Greet the terminal and draw the first screen
    pub fn boot<R, L, B, K, D, T, C>(&mut self, devices: &mut Devices<R, L, B, K, D, T, C>)
    where
        K: Calendar,
        D: DisplayDriver,
        T: Thermometer,
        C: Console,
    {
        for line in GREETING {
            devices.console.write_str(line);
        }
        let _ = devices.display.clear();
        self.render(devices);
    }

    /// Run one pass over every duty
    pub fn service<R, L, B, K, D, T, C>(
        &mut self,
        scheduler: &Scheduler,
        devices: &mut Devices<R, L, B, K, D, T, C>,
    ) -> Pass
    where
        R: RangeFinder,
        L: LidMotor,
        B: Buzzer,
        K: Calendar,
        D: DisplayDriver,
        T: Thermometer,
        C: Console,
    {
        let mut pass = Pass::new();

        for duty in Duty::ORDER {
            let due = match duty.flag() {
                Some(flag) => scheduler.take(flag),
                None => core::mem::take(&mut self.open_pending),
            };
            if !due {
                continue;
            }

            match duty {
                Duty::Ranging => {
                    if !self.lid.is_manual() {
                        self.distance = devices.ranger.request_distance();
                        if self.ranging.is_proximate(self.distance.cm()) {
                            self.open_pending = true;
                        }
                    }
                }
                Duty::Refresh => {
                    devices.thermometer.start_conversion();
                    self.render(devices);
                }
                Duty::SilenceAlarm => {
                    let _ = devices.clock.acknowledge_alarm();
                    devices.buzzer.set_on(false);
                }
                Duty::AutoClose => {
                    self.apply(LidEvent::AutoCloseElapsed, &mut devices.lid);
                }
                Duty::OpenLid => {
                    self.apply(LidEvent::ObjectDetected, &mut devices.lid);
                    scheduler.restart_auto_close();
                }
                Duty::SoundAlarm => {
                    devices.buzzer.set_on(true);
                    scheduler.restart_silence();
                }
                Duty::ToggleLid => {
                    self.apply(LidEvent::ButtonPressed, &mut devices.lid);
                }
                Duty::RunCommand => self.run_commands(devices),
            }
            let _ = pass.push(duty);
        }

        pass
    }

    fn apply<L: LidMotor>(&mut self, event: LidEvent, motor: &mut L) {
        let next = self.lid.transition(event);
        if let Some(direction) = self.lid.motion_to(next) {
            motor.rotate(direction, self.lid_config.turns);
        }
        self.lid = next;
    }

    fn render<R, L, B, K, D, T, C>(&self, devices: &mut Devices<R, L, B, K, D, T, C>)
    where
        K: Calendar,
        D: DisplayDriver,
        T: Thermometer,
    {
        let now = devices.clock.now().ok();
        let screen = Screen::compose(
            now.as_ref(),
            self.distance,
            devices.thermometer.celsius(),
        );
        // A failed write is retried by the next refresh
        let _ = screen.draw(&mut devices.display);
    }

    fn run_commands<R, L, B, K, D, T, C>(&self, devices: &mut Devices<R, L, B, K, D, T, C>)
    where
        K: Calendar,
        D: DisplayDriver,
        T: Thermometer,
        C: Console,
    {
        // One flag may stand for several queued lines
        while let Some(parsed) = devices.console.take_command() {
            match parsed {
                Ok(Command::Help) => {
                    for line in HELP {
                        devices.console.write_str(line);
                    }
                }
                Ok(Command::SetTime(time)) => match devices.clock.set(time) {
                    Ok(()) => {
                        self.render(devices);
                        devices.console.write_str(DONE);
                    }
                    Err(_) => devices.console.write_str(INVALID_INPUT),
                },
                Err(e) => devices.console.write_str(e.reply()),
            }
        }
    }
}
