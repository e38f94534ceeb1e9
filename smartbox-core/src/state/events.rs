//! Lid events

/// Events that can move the lid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LidEvent {
    /// Something came within the proximity threshold
    ObjectDetected,
    /// Auto-close window elapsed
    AutoCloseElapsed,
    /// Lid button pressed
    ButtonPressed,
}
