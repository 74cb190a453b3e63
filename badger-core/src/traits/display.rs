//! Display backlight trait
//!
//! Pixel rendering lives in `badger-display`; the core only needs to set
//! brightness.

/// Errors from the display collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with display
    #[error("display communication error")]
    Communication,
    /// Panel has no adjustable backlight
    #[error("brightness not supported")]
    Unsupported,
}

/// Backlight control
pub trait Backlight {
    /// Set brightness in percent (0..=100), committed synchronously
    fn set_brightness(&mut self, percent: u8) -> Result<(), DisplayError>;

    /// Last brightness written, in percent
    fn brightness(&self) -> u8;
}
