//! Integer pixel-replication draw target
//!
//! Every pixel drawn through [`Scaled`] becomes a `scale × scale` block on
//! the parent, placed relative to an offset in parent pixels. This is how
//! the mono fonts render at 2×, 3× and so on.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

pub struct Scaled<'a, D> {
    parent: &'a mut D,
    scale: u32,
    offset: Point,
}

impl<'a, D: DrawTarget> Scaled<'a, D> {
    /// A zero scale is treated as 1
    pub fn new(parent: &'a mut D, scale: u32, offset: Point) -> Self {
        Self {
            parent,
            scale: scale.max(1),
            offset,
        }
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    fn to_parent(&self, area: &Rectangle) -> Rectangle {
        Rectangle::new(
            self.offset + area.top_left * self.scale as i32,
            area.size * self.scale,
        )
    }
}

impl<D: DrawTarget> Dimensions for Scaled<'_, D> {
    fn bounding_box(&self) -> Rectangle {
        let parent = self.parent.bounding_box();
        let s = self.scale as i32;
        // Round the top-left towards -inf so partial blocks are kept
        let top_left = parent.top_left - self.offset;
        let top_left = Point::new(top_left.x.div_euclid(s), top_left.y.div_euclid(s));
        Rectangle::new(top_left, parent.size / self.scale + Size::new(1, 1))
    }
}

impl<D: DrawTarget> DrawTarget for Scaled<'_, D> {
    type Color = D::Color;
    type Error = D::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            let block = self.to_parent(&Rectangle::new(point, Size::new(1, 1)));
            self.parent.fill_solid(&block, color)?;
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = self.to_parent(area);
        self.parent.fill_solid(&area, color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::tests::MockFrame;
    use embedded_graphics::pixelcolor::Rgb565;

    #[test]
    fn test_pixel_becomes_block() {
        let mut frame = MockFrame::new(16, 16);
        let mut scaled = Scaled::new(&mut frame, 3, Point::new(2, 1));
        Pixel(Point::new(1, 1), Rgb565::RED).draw(&mut scaled).unwrap();

        for y in 0..16 {
            for x in 0..16 {
                let inside = (5..8).contains(&x) && (4..7).contains(&y);
                assert_eq!(frame.pixel(x, y) == Rgb565::RED, inside, "({x}, {y})");
            }
        }
    }

    #[test]
    fn test_zero_scale_is_identity() {
        let mut frame = MockFrame::new(4, 4);
        let mut scaled = Scaled::new(&mut frame, 0, Point::zero());
        assert_eq!(scaled.scale(), 1);
        Pixel(Point::new(3, 3), Rgb565::BLUE).draw(&mut scaled).unwrap();
        assert_eq!(frame.pixel(3, 3), Rgb565::BLUE);
    }
}
