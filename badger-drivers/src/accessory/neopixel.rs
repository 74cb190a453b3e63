//! NeoPixel strip on any `smart-leds` sink
//!
//! Colours are buffered and written with the global brightness applied on
//! `show`, so brightness changes never lose the unscaled colours.

use badger_core::traits::{PixelError, PixelStrip};
use smart_leds::{brightness, SmartLedsWrite, RGB8};

/// Buffered strip of up to `N` pixels
pub struct NeoPixels<W, const N: usize> {
    writer: W,
    buffer: [RGB8; N],
    len: usize,
    brightness: u8,
}

impl<W, const N: usize> NeoPixels<W, N>
where
    W: SmartLedsWrite,
    W::Color: From<RGB8>,
{
    /// `count` is clamped to the buffer size
    pub fn new(writer: W, count: usize) -> Self {
        Self {
            writer,
            buffer: [RGB8::default(); N],
            len: count.min(N),
            brightness: u8::MAX,
        }
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Buffered (unscaled) colours
    pub fn pixels(&self) -> &[RGB8] {
        &self.buffer[..self.len]
    }
}

impl<W, const N: usize> PixelStrip for NeoPixels<W, N>
where
    W: SmartLedsWrite,
    W::Color: From<RGB8>,
{
    fn len(&self) -> usize {
        self.len
    }

    fn set_pixel(&mut self, index: usize, color: RGB8) -> Result<(), PixelError> {
        let pixel = self
            .buffer
            .get_mut(..self.len)
            .and_then(|pixels| pixels.get_mut(index))
            .ok_or(PixelError::OutOfRange)?;
        *pixel = color;
        Ok(())
    }

    fn fill(&mut self, color: RGB8) {
        self.buffer[..self.len].fill(color);
    }

    fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    fn show(&mut self) -> Result<(), PixelError> {
        let pixels = self.buffer[..self.len].iter().copied();
        self.writer
            .write(brightness(pixels, self.brightness))
            .map_err(|_| PixelError::Write)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smart_leds::colors::{BLUE, RED, WHITE};

    #[derive(Default)]
    struct Sink {
        frames: Vec<Vec<RGB8>>,
        fail: bool,
    }

    impl SmartLedsWrite for Sink {
        type Error = ();
        type Color = RGB8;

        fn write<T, I>(&mut self, iterator: T) -> Result<(), ()>
        where
            T: IntoIterator<Item = I>,
            I: Into<RGB8>,
        {
            if self.fail {
                return Err(());
            }
            self.frames.push(iterator.into_iter().map(Into::into).collect());
            Ok(())
        }
    }

    #[test]
    fn test_set_and_show() {
        let mut strip: NeoPixels<Sink, 10> = NeoPixels::new(Sink::default(), 5);
        assert_eq!(strip.len(), 5);

        strip.fill(BLUE);
        strip.set_pixel(4, RED).unwrap();
        strip.show().unwrap();

        let frame = &strip.writer.frames[0];
        assert_eq!(frame.len(), 5);
        assert_eq!(frame[0], BLUE);
        assert_eq!(frame[4], RED);
    }

    #[test]
    fn test_index_past_count_rejected() {
        let mut strip: NeoPixels<Sink, 10> = NeoPixels::new(Sink::default(), 5);
        assert_eq!(strip.set_pixel(5, RED), Err(PixelError::OutOfRange));
        assert_eq!(strip.set_pixel(10, RED), Err(PixelError::OutOfRange));
    }

    #[test]
    fn test_brightness_scales_output_not_buffer() {
        let mut strip: NeoPixels<Sink, 1> = NeoPixels::new(Sink::default(), 1);
        strip.fill(WHITE);
        strip.set_brightness(0);
        strip.show().unwrap();

        assert_eq!(strip.writer.frames[0][0], RGB8::new(0, 0, 0));
        assert_eq!(strip.pixels()[0], WHITE);
    }

    #[test]
    fn test_write_failure() {
        let mut strip: NeoPixels<Sink, 4> = NeoPixels::new(
            Sink {
                fail: true,
                ..Default::default()
            },
            4,
        );
        assert_eq!(strip.show(), Err(PixelError::Write));
    }
}
