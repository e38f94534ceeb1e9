//! Calendar types exchanged with the real-time clock

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Day of the week, numbered the way RTC chips count them (Sunday = 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Weekday {
    Sunday = 1,
    Monday = 2,
    Tuesday = 3,
    Wednesday = 4,
    Thursday = 5,
    Friday = 6,
    Saturday = 7,
}

impl Weekday {
    /// Parse a weekday from its RTC register value (1-7)
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Weekday::Sunday),
            2 => Some(Weekday::Monday),
            3 => Some(Weekday::Tuesday),
            4 => Some(Weekday::Wednesday),
            5 => Some(Weekday::Thursday),
            6 => Some(Weekday::Friday),
            7 => Some(Weekday::Saturday),
            _ => None,
        }
    }

    /// RTC register value (1-7)
    pub fn number(self) -> u8 {
        self as u8
    }
}

/// Wall-clock date and time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DateTime {
    /// Full year (2000-2099)
    pub year: u16,
    /// Month (1-12)
    pub month: u8,
    /// Day of month (1-31)
    pub date: u8,
    /// Day of week
    pub weekday: Weekday,
    /// Hour (0-23)
    pub hour: u8,
    /// Minute (0-59)
    pub minute: u8,
    /// Second (0-59)
    pub second: u8,
}

/// First year representable by a two-digit RTC year register
pub const CENTURY: u16 = 2000;

impl DateTime {
    /// Time loaded into the clock at power-on: 23:59:55 on 2024/12/31
    ///
    /// Five seconds before midnight, so the midnight alarm can be observed
    /// right after boot.
    pub const POWER_ON: DateTime = DateTime {
        year: 2024,
        month: 12,
        date: 31,
        weekday: Weekday::Sunday,
        hour: 23,
        minute: 59,
        second: 55,
    };

    /// Check that every field is within its calendar range
    pub fn is_valid(&self) -> bool {
        (CENTURY..CENTURY + 100).contains(&self.year)
            && (1..=12).contains(&self.month)
            && self.date >= 1
            && self.date <= days_in_month(self.month, self.year)
            && self.hour < 24
            && self.minute < 60
            && self.second < 60
    }
}

/// Check for a Gregorian leap year
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a month (0 for an invalid month)
pub fn days_in_month(month: u8, year: u16) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_on_time_is_valid() {
        assert!(DateTime::POWER_ON.is_valid());
    }

    #[test]
    fn test_weekday_round_trip() {
        for n in 1..=7 {
            let day = Weekday::from_number(n).unwrap();
            assert_eq!(day.number(), n);
        }
        assert_eq!(Weekday::from_number(0), None);
        assert_eq!(Weekday::from_number(8), None);
    }

    #[test]
    fn test_leap_years() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(2025));
        assert!(!is_leap_year(2100));
    }

    #[test]
    fn test_february_length() {
        assert_eq!(days_in_month(2, 2024), 29);
        assert_eq!(days_in_month(2, 2025), 28);
        assert_eq!(days_in_month(13, 2025), 0);
    }

    #[test]
    fn test_invalid_fields_rejected() {
        let mut t = DateTime::POWER_ON;
        t.hour = 24;
        assert!(!t.is_valid());

        let mut t = DateTime::POWER_ON;
        t.month = 4;
        t.date = 31;
        assert!(!t.is_valid());

        let mut t = DateTime::POWER_ON;
        t.year = 1999;
        assert!(!t.is_valid());
    }
}
