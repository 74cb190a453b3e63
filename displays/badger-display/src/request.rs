//! Screen request parameter bundles
//!
//! Built by the caller per call and borrowed by the composer; nothing here
//! is retained between screens.

use embedded_graphics::image::ImageRaw;
use embedded_graphics::pixelcolor::Rgb565;
use heapless::Vec;

use crate::palette;
use crate::qr::ErrorCorrection;

/// Raw RGB565 image, big-endian
pub type Bitmap<'a> = ImageRaw<'a, Rgb565>;

/// Maximum stacked lines on a custom badge
pub const MAX_BADGE_LINES: usize = 8;

/// One centred text label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Label<'a> {
    pub text: &'a str,
    /// Integer text scale, 1 or more
    pub scale: u32,
}

impl<'a> Label<'a> {
    pub const fn new(text: &'a str) -> Self {
        Self { text, scale: 1 }
    }

    pub const fn scale(mut self, scale: u32) -> Self {
        self.scale = scale;
        self
    }
}

/// "HELLO / MY NAME IS" badge
#[derive(Debug, Clone, Copy)]
pub struct BadgeRequest<'a> {
    pub background_color: Rgb565,
    pub foreground_color: Rgb565,
    pub background_text_color: Rgb565,
    pub foreground_text_color: Rgb565,
    pub hello: Label<'a>,
    pub my_name_is: Label<'a>,
    pub name: Label<'a>,
    /// Drawn over the colour blocks on boards that can show images
    pub image: Option<&'a Bitmap<'a>>,
}

impl Default for BadgeRequest<'_> {
    fn default() -> Self {
        Self {
            background_color: palette::RED,
            foreground_color: palette::WHITE,
            background_text_color: palette::WHITE,
            foreground_text_color: palette::BLACK,
            hello: Label::new("HELLO"),
            my_name_is: Label::new("MY NAME IS"),
            name: Label::new("Blinka"),
            image: None,
        }
    }
}

impl<'a> BadgeRequest<'a> {
    pub fn named(name: &'a str) -> Self {
        Self {
            name: Label::new(name),
            ..Default::default()
        }
    }
}

/// Image plus name and two contact lines
#[derive(Debug, Clone, Copy)]
pub struct BusinessCardRequest<'a> {
    pub image: Option<&'a Bitmap<'a>>,
    pub name: Option<Label<'a>>,
    pub contact_one: Option<Label<'a>>,
    pub contact_two: Option<Label<'a>>,
    pub font_color: Rgb565,
    pub text_background: Option<Rgb565>,
}

impl Default for BusinessCardRequest<'_> {
    fn default() -> Self {
        Self {
            image: None,
            name: None,
            contact_one: None,
            contact_two: None,
            font_color: palette::WHITE,
            text_background: None,
        }
    }
}

/// QR code screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QrRequest<'a> {
    pub data: &'a [u8],
    pub ecc: ErrorCorrection,
}

impl<'a> QrRequest<'a> {
    pub const fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            ecc: ErrorCorrection::Low,
        }
    }
}

/// Colour fill with a horizontal colour block
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BadgeBackground {
    pub background_color: Rgb565,
    pub rectangle_color: Rgb565,
    /// Block top as a fraction of the display height
    pub rectangle_drop: f32,
    /// Block height as a fraction of the display height
    pub rectangle_height: f32,
}

impl Default for BadgeBackground {
    fn default() -> Self {
        Self {
            background_color: palette::RED,
            rectangle_color: palette::WHITE,
            rectangle_drop: 0.4,
            rectangle_height: 0.5,
        }
    }
}

/// One line of a custom badge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BadgeLine<'a> {
    pub text: &'a str,
    pub color: Rgb565,
    pub scale: u32,
    pub left_justify: bool,
    /// Blank space above the line, in unscaled line heights
    pub padding_above: f32,
}

impl<'a> BadgeLine<'a> {
    pub const fn new(text: &'a str) -> Self {
        Self {
            text,
            color: palette::BLACK,
            scale: 1,
            left_justify: false,
            padding_above: 0.0,
        }
    }

    pub const fn color(mut self, color: Rgb565) -> Self {
        self.color = color;
        self
    }

    pub const fn scale(mut self, scale: u32) -> Self {
        self.scale = scale;
        self
    }

    pub const fn left_justify(mut self) -> Self {
        self.left_justify = true;
        self
    }

    pub const fn padding_above(mut self, lines: f32) -> Self {
        self.padding_above = lines;
        self
    }
}

/// Custom badge already holds [`MAX_BADGE_LINES`] lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[error("custom badge holds at most {0} lines")]
pub struct LineLimit(pub usize);

/// Background plus stacked text lines, drawn top to bottom
#[derive(Debug, Clone, Default)]
pub struct CustomBadge<'a> {
    pub background: BadgeBackground,
    pub image: Option<&'a Bitmap<'a>>,
    lines: Vec<BadgeLine<'a>, MAX_BADGE_LINES>,
}

impl<'a> CustomBadge<'a> {
    pub fn new(background: BadgeBackground) -> Self {
        Self {
            background,
            image: None,
            lines: Vec::new(),
        }
    }

    pub fn with_image(mut self, image: &'a Bitmap<'a>) -> Self {
        self.image = Some(image);
        self
    }

    pub fn push_line(&mut self, line: BadgeLine<'a>) -> Result<(), LineLimit> {
        self.lines
            .push(line)
            .map_err(|_| LineLimit(MAX_BADGE_LINES))
    }

    pub fn lines(&self) -> &[BadgeLine<'a>] {
        &self.lines
    }

    pub fn clear_lines(&mut self) {
        self.lines.clear();
    }
}
