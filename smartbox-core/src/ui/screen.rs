//! Screen layout
//!
//! ```text
//!   col 0         11 12
//!   ┌────────────────────┐
//!   │HH:MM:SS     ddd cm │ row 0
//!   │YYYY/MM/DD    tt°C  │ row 1
//!   └────────────────────┘
//! ```
//!
//! Only the cells that change are written; the rest of the panel is left
//! as it is.

use core::fmt::Write;

use heapless::{String, Vec};
use smartbox_protocol::DateTime;

use crate::ranging::Distance;
use crate::traits::{DisplayDriver, DisplayError};

/// Panel columns
pub const DISPLAY_COLS: u8 = 16;

/// Panel rows
pub const DISPLAY_ROWS: u8 = 2;

/// Degree sign in the HD44780 character ROM (0xDF)
pub const DEGREE_GLYPH: char = '\u{DF}';

/// Longest field text in bytes
const FIELD_LEN: usize = 16;

/// Text placed at a cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub row: u8,
    pub col: u8,
    pub text: String<FIELD_LEN>,
}

/// Fields making up one refresh
#[derive(Debug, Clone, Default)]
pub struct Screen {
    fields: Vec<Field, 4>,
}

impl Screen {
    /// Lay out a refresh
    ///
    /// The clock rows are skipped when `now` is `None` (clock read failed).
    pub fn compose(now: Option<&DateTime>, distance: Distance, celsius: u8) -> Self {
        let mut screen = Self::default();

        if let Some(t) = now {
            screen.put(
                0,
                0,
                format_args!("{:02}:{:02}:{:02}", t.hour, t.minute, t.second),
            );
        }
        screen.put(0, 11, format_args!("{:>3}cm", distance.cm()));
        if let Some(t) = now {
            screen.put(
                1,
                0,
                format_args!("{:04}/{:02}/{:02}", t.year, t.month, t.date),
            );
        }
        screen.put(1, 12, format_args!("{:>2}{}C", celsius, DEGREE_GLYPH));

        screen
    }

    fn put(&mut self, row: u8, col: u8, args: core::fmt::Arguments<'_>) {
        let mut text = String::new();
        // Overlong text is cut at the field capacity
        let _ = text.write_fmt(args);
        let _ = self.fields.push(Field { row, col, text });
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Find the field starting at a cell
    pub fn field_at(&self, row: u8, col: u8) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.row == row && f.col == col)
            .map(|f| f.text.as_str())
    }

    /// Write every field to the display
    ///
    /// Stops at the first error.
    pub fn draw<D: DisplayDriver>(&self, display: &mut D) -> Result<(), DisplayError> {
        for field in &self.fields {
            display.text(field.row, field.col, &field.text)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smartbox_protocol::Weekday;
    use std::string::String as StdString;
    use std::vec::Vec as StdVec;

    fn noon() -> DateTime {
        DateTime {
            year: 2025,
            month: 3,
            date: 7,
            weekday: Weekday::Friday,
            hour: 12,
            minute: 5,
            second: 9,
        }
    }

    #[derive(Default)]
    struct MockDisplay {
        writes: StdVec<(u8, u8, StdString)>,
        fail: bool,
    }

    impl DisplayDriver for MockDisplay {
        fn text(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError> {
            if self.fail {
                return Err(DisplayError::Bus);
            }
            self.writes.push((row, col, text.into()));
            Ok(())
        }

        fn clear(&mut self) -> Result<(), DisplayError> {
            self.writes.clear();
            Ok(())
        }
    }

    #[test]
    fn test_full_layout() {
        let screen = Screen::compose(Some(&noon()), Distance::from_cm(7), 23);
        assert_eq!(screen.field_at(0, 0), Some("12:05:09"));
        assert_eq!(screen.field_at(0, 11), Some("  7cm"));
        assert_eq!(screen.field_at(1, 0), Some("2025/03/07"));
        assert_eq!(screen.field_at(1, 12), Some("23\u{DF}C"));
    }

    #[test]
    fn test_clock_rows_skipped_without_time() {
        let screen = Screen::compose(None, Distance::from_cm(150), 5);
        assert_eq!(screen.fields().len(), 2);
        assert_eq!(screen.field_at(0, 0), None);
        assert_eq!(screen.field_at(0, 11), Some("150cm"));
        assert_eq!(screen.field_at(1, 12), Some(" 5\u{DF}C"));
    }

    #[test]
    fn test_fields_fit_the_panel() {
        let screen = Screen::compose(Some(&noon()), Distance::from_cm(999), 99);
        for f in screen.fields() {
            assert!(f.row < DISPLAY_ROWS);
            assert!(f.col as usize + f.text.chars().count() <= DISPLAY_COLS as usize);
        }
    }

    #[test]
    fn test_draw_writes_in_order() {
        let screen = Screen::compose(Some(&noon()), Distance::NONE, 0);
        let mut display = MockDisplay::default();
        screen.draw(&mut display).unwrap();

        let cells: StdVec<(u8, u8)> = display.writes.iter().map(|w| (w.0, w.1)).collect();
        assert_eq!(cells, [(0, 0), (0, 11), (1, 0), (1, 12)]);
        assert_eq!(display.writes[1].2, "  0cm");
    }

    #[test]
    fn test_draw_reports_bus_error() {
        let screen = Screen::compose(None, Distance::NONE, 0);
        let mut display = MockDisplay {
            fail: true,
            ..Default::default()
        };
        assert_eq!(screen.draw(&mut display), Err(DisplayError::Bus));
    }
}
