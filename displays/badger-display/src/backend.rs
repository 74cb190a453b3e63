//! Frame buffer trait
//!
//! Defines the interface between the composer and a panel driver.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

/// Drawable frame that can be pushed to the panel
///
/// Drawing only touches the buffer; nothing is visible until
/// [`FrameBuffer::commit`]. Grayscale and e-ink panels convert from
/// `Rgb565` in their driver.
pub trait FrameBuffer: DrawTarget<Color = Rgb565> + OriginDimensions {
    /// Push the buffered frame to the panel, synchronously
    fn commit(&mut self) -> Result<(), Self::Error>;
}
