//! Board identity
//!
//! Every supported platform exposes a fixed identification string (the
//! "machine" line reported by the firmware, e.g.
//! `"Adafruit PyGamer with samd51j19"`). Board detection matches against it.

/// Source of the platform identity line
pub trait BoardIdentity {
    /// The identity line, exactly as reported by the platform
    fn machine(&self) -> &str;
}

impl BoardIdentity for &str {
    fn machine(&self) -> &str {
        self
    }
}
