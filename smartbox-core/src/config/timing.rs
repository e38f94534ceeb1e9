//! Timing and calibration configuration
//!
//! All cadences are expressed as overflow counts of one of the two tick
//! sources, so changing a tick period only requires updating the moduli.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Microseconds of echo round trip per centimeter of distance
pub const US_PER_CM: u32 = 58;

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// A tick or timer period is zero
    ZeroPeriod,
    /// A cadence modulus is zero
    ZeroModulus,
    /// Echo timer too slow to resolve one centimeter
    TimerTooSlow,
    /// Echo timeout shorter than one timer period
    TimeoutTooShort,
}

/// Tick sources and the cadences derived from them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimingConfig {
    /// Fast tick period (µs)
    pub fast_tick_us: u32,
    /// Slow tick period (ms)
    pub slow_tick_ms: u32,
    /// Fast ticks per ranging request
    pub ranging_ticks: u16,
    /// Fast ticks per screen refresh
    pub refresh_ticks: u16,
    /// Slow ticks before a sounding alarm is silenced
    pub silence_ticks: u16,
    /// Slow ticks before an automatically opened lid closes
    pub auto_close_ticks: u16,
}

impl TimingConfig {
    /// 10 ms fast tick, 1 s slow tick
    pub const DEFAULT: Self = Self {
        fast_tick_us: 10_000,
        slow_tick_ms: 1_000,
        ranging_ticks: 50,
        refresh_ticks: 100,
        silence_ticks: 3,
        auto_close_ticks: 10,
    };

    /// Number of fast ticks in `period_ms`
    pub const fn fast_ticks_per(&self, period_ms: u32) -> u32 {
        if self.fast_tick_us == 0 {
            return 0;
        }
        ((period_ms as u64 * 1_000) / self.fast_tick_us as u64) as u32
    }

    /// Number of slow ticks in `period_ms`
    pub const fn slow_ticks_per(&self, period_ms: u32) -> u32 {
        if self.slow_tick_ms == 0 {
            return 0;
        }
        period_ms / self.slow_tick_ms
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fast_tick_us == 0 || self.slow_tick_ms == 0 {
            return Err(ConfigError::ZeroPeriod);
        }
        let moduli = [
            self.ranging_ticks,
            self.refresh_ticks,
            self.silence_ticks,
            self.auto_close_ticks,
        ];
        if moduli.contains(&0) {
            return Err(ConfigError::ZeroModulus);
        }
        Ok(())
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Echo ranging calibration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RangingConfig {
    /// Echo timer tick rate (Hz)
    pub timer_hz: u32,
    /// Echo timer ticks per overflow
    pub timer_period: u32,
    /// Trigger pulse width (µs)
    pub trigger_pulse_us: u32,
    /// Pause after a completed cycle before the sensor is retriggered (ms)
    pub settle_ms: u32,
    /// Longest echo the sensor produces (µs)
    pub timeout_us: u32,
    /// Proximity threshold (cm)
    pub proximity_cm: u32,
}

impl RangingConfig {
    /// 1 MHz timer wrapping every 256 ticks
    pub const DEFAULT: Self = Self {
        timer_hz: 1_000_000,
        timer_period: 256,
        trigger_pulse_us: 15,
        settle_ms: 40,
        timeout_us: 38_000,
        proximity_cm: 20,
    };

    /// Echo timer ticks per centimeter of distance
    pub const fn ticks_per_cm(&self) -> u32 {
        ((US_PER_CM as u64 * self.timer_hz as u64) / 1_000_000) as u32
    }

    /// Overflow count after which a cycle is abandoned
    pub const fn timeout_overflows(&self) -> u32 {
        if self.timer_period == 0 {
            return 0;
        }
        let ticks = (self.timeout_us as u64 * self.timer_hz as u64) / 1_000_000;
        (ticks / self.timer_period as u64) as u32
    }

    /// Check the proximity condition `0 < cm <= threshold`
    pub const fn is_proximate(&self, cm: u32) -> bool {
        cm > 0 && cm <= self.proximity_cm
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timer_hz == 0 || self.timer_period == 0 {
            return Err(ConfigError::ZeroPeriod);
        }
        if self.ticks_per_cm() == 0 {
            return Err(ConfigError::TimerTooSlow);
        }
        if self.timeout_overflows() == 0 {
            return Err(ConfigError::TimeoutTooShort);
        }
        Ok(())
    }
}

impl Default for RangingConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Lid drive settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LidConfig {
    /// Motor revolutions between closed and open
    pub turns: u16,
    /// Dwell per coil phase (ms)
    pub phase_ms: u32,
}

impl LidConfig {
    pub const DEFAULT: Self = Self {
        turns: 4,
        phase_ms: 50,
    };

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.phase_ms == 0 {
            return Err(ConfigError::ZeroPeriod);
        }
        Ok(())
    }
}

impl Default for LidConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
