//! On-chip real-time clock
//!
//! The RP2040 RTC keeps calendar time while the core runs and raises
//! `RTC_IRQ` when its alarm matches. The alarm is set for midnight every day.

use embassy_rp::peripherals::RTC;
use embassy_rp::rtc::{DateTime as RtcDateTime, DateTimeFilter, DayOfWeek, Rtc};
use smartbox_core::traits::{Calendar, ClockError};
use smartbox_protocol::{DateTime, Weekday};

/// Calendar clock backed by the RP2040 RTC
pub struct RtcClock<'d> {
    rtc: Rtc<'d, RTC>,
}

impl<'d> RtcClock<'d> {
    pub fn new(rtc: Rtc<'d, RTC>) -> Self {
        Self { rtc }
    }

    /// Fire the alarm every day at 00:00:00
    pub fn schedule_midnight_alarm(&mut self) {
        let filter = DateTimeFilter::default().hour(0).minute(0).second(0);
        self.rtc.schedule_alarm(filter);
    }
}

impl Calendar for RtcClock<'_> {
    fn now(&mut self) -> Result<DateTime, ClockError> {
        let t = self.rtc.now().map_err(|_| ClockError::NotRunning)?;
        Ok(DateTime {
            year: t.year,
            month: t.month,
            date: t.day,
            weekday: weekday_from_rtc(t.day_of_week),
            hour: t.hour,
            minute: t.minute,
            second: t.second,
        })
    }

    fn set(&mut self, time: DateTime) -> Result<(), ClockError> {
        if !time.is_valid() {
            return Err(ClockError::InvalidTime);
        }
        let t = RtcDateTime {
            year: time.year,
            month: time.month,
            day: time.date,
            day_of_week: weekday_to_rtc(time.weekday),
            hour: time.hour,
            minute: time.minute,
            second: time.second,
        };
        self.rtc
            .set_datetime(t)
            .map_err(|_| ClockError::InvalidTime)
    }

    fn acknowledge_alarm(&mut self) -> Result<(), ClockError> {
        // Re-enables the match that the interrupt handler masked
        self.rtc.clear_interrupt();
        Ok(())
    }
}

fn weekday_from_rtc(day: DayOfWeek) -> Weekday {
    match day {
        DayOfWeek::Sunday => Weekday::Sunday,
        DayOfWeek::Monday => Weekday::Monday,
        DayOfWeek::Tuesday => Weekday::Tuesday,
        DayOfWeek::Wednesday => Weekday::Wednesday,
        DayOfWeek::Thursday => Weekday::Thursday,
        DayOfWeek::Friday => Weekday::Friday,
        DayOfWeek::Saturday => Weekday::Saturday,
    }
}

fn weekday_to_rtc(day: Weekday) -> DayOfWeek {
    match day {
        Weekday::Sunday => DayOfWeek::Sunday,
        Weekday::Monday => DayOfWeek::Monday,
        Weekday::Tuesday => DayOfWeek::Tuesday,
        Weekday::Wednesday => DayOfWeek::Wednesday,
        Weekday::Thursday => DayOfWeek::Thursday,
        Weekday::Friday => DayOfWeek::Friday,
        Weekday::Saturday => DayOfWeek::Saturday,
    }
}
