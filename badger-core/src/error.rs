//! Error taxonomy
//!
//! Construction-time errors ([`BoardError`]) are fatal and abort startup;
//! no partially wired handle is ever returned. [`CapabilityUnavailable`]
//! is the recoverable per-call signal for an absent peripheral.

use crate::board::Peripheral;

/// Why a flagged peripheral could not be constructed
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InitFailure {
    /// Pin is missing or already claimed
    #[error("pin unavailable")]
    PinUnavailable,
    /// Bus could not be opened
    #[error("bus unavailable")]
    BusUnavailable,
    /// Nothing answered at any of the expected addresses
    #[error("device not responding")]
    NotResponding,
    /// A device answered but identified as something else
    #[error("unexpected device identity")]
    WrongDevice,
}

/// Fatal startup errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BoardError {
    /// No descriptor matches the platform identity line
    #[error("unknown board")]
    UnknownBoard,
    /// A peripheral the descriptor claims could not be brought up
    #[error("failed to initialise {peripheral}: {cause}")]
    PeripheralInit {
        /// Which peripheral failed
        peripheral: Peripheral,
        /// Underlying failure reported by the board support package
        cause: InitFailure,
    },
}

/// The requested peripheral is not present on this board
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[error("{0} is not available on this board")]
pub struct CapabilityUnavailable(pub Peripheral);
