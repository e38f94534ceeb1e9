//! Duties of the main loop, in poll order

use crate::scheduler::Flag;

/// Number of duties in one pass
pub const DUTY_COUNT: usize = 8;

/// Work the main loop can perform in a pass
///
/// Declaration order is poll order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Duty {
    /// Take a distance sample
    Ranging,
    /// Start a temperature conversion and redraw the screen
    Refresh,
    /// Switch the alarm off
    SilenceAlarm,
    /// Close an automatically opened lid
    AutoClose,
    /// Open the lid for a detected object
    OpenLid,
    /// Switch the alarm on
    SoundAlarm,
    /// Toggle the lid by hand
    ToggleLid,
    /// Run a console command
    RunCommand,
}

impl Duty {
    /// All duties, in poll order
    pub const ORDER: [Duty; DUTY_COUNT] = [
        Duty::Ranging,
        Duty::Refresh,
        Duty::SilenceAlarm,
        Duty::AutoClose,
        Duty::OpenLid,
        Duty::SoundAlarm,
        Duty::ToggleLid,
        Duty::RunCommand,
    ];

    /// Registry flag that triggers this duty
    ///
    /// `None` for a duty raised by the loop itself.
    pub const fn flag(self) -> Option<Flag> {
        match self {
            Duty::Ranging => Some(Flag::Ranging),
            Duty::Refresh => Some(Flag::Refresh),
            Duty::SilenceAlarm => Some(Flag::Silence),
            Duty::AutoClose => Some(Flag::AutoClose),
            Duty::OpenLid => None,
            Duty::SoundAlarm => Some(Flag::AlarmFired),
            Duty::ToggleLid => Some(Flag::ButtonPressed),
            Duty::RunCommand => Some(Flag::CommandReady),
        }
    }
}
