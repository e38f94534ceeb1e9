//! Character display trait

/// Display errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Bus transfer failed
    Bus,
    /// Row or column past the edge of the panel
    OutOfBounds,
}

/// Character LCD
///
/// Characters up to U+00FF are written as their code point, so `'\u{DF}'`
/// selects the degree glyph of an HD44780 ROM.
pub trait DisplayDriver {
    /// Write text starting at a cell
    fn text(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError>;

    /// Blank the whole panel
    fn clear(&mut self) -> Result<(), DisplayError>;
}
