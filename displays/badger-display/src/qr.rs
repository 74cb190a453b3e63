//! QR matrix generator seam
//!
//! The generator itself is an external collaborator; boards plug in
//! whichever implementation fits their memory budget.

/// QR error-correction level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ErrorCorrection {
    /// ~7% recovery
    #[default]
    Low,
    /// ~15% recovery
    Medium,
    /// ~25% recovery
    Quartile,
    /// ~30% recovery
    High,
}

/// Payload longer than the generator can encode at the requested level
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[error("payload of {len} bytes exceeds QR capacity of {capacity}")]
pub struct PayloadTooLarge {
    pub len: usize,
    pub capacity: usize,
}

/// Square matrix of modules, `true` is dark
pub trait QrMatrix {
    /// Modules per side
    fn size(&self) -> u32;

    /// Module at column `x`, row `y`
    fn get(&self, x: u32, y: u32) -> bool;
}

/// QR matrix generator
pub trait QrEncoder {
    type Matrix: QrMatrix;

    /// Largest payload in bytes accepted at `ecc`
    fn capacity(&self, ecc: ErrorCorrection) -> usize;

    /// Encode `data`; payloads over [`QrEncoder::capacity`] fail
    fn encode(&mut self, data: &[u8], ecc: ErrorCorrection)
        -> Result<Self::Matrix, PayloadTooLarge>;
}
