//! Screen composer
//!
//! Each `show_*` call clears the frame, draws the complete screen and
//! commits once. Images are only drawn on boards whose display supports
//! them; everything else renders identically across boards, scaled to the
//! panel size.

use badger_core::board::DisplaySpec;
use embedded_graphics::image::Image;
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::{MonoFont, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};

use crate::backend::FrameBuffer;
use crate::palette;
use crate::qr::{PayloadTooLarge, QrEncoder, QrMatrix};
use crate::request::{
    BadgeBackground, BadgeRequest, Bitmap, BusinessCardRequest, CustomBadge, Label, QrRequest,
};
use crate::scaled::Scaled;

/// Font for every label
const FONT: &MonoFont<'static> = &FONT_6X10;

/// Quiet zone around the QR matrix, in modules
pub const QR_BORDER: u32 = 2;

// Label centres as fractions of the display height
const BADGE_HELLO_Y: f32 = 0.117;
const BADGE_MY_NAME_IS_Y: f32 = 0.28;
const BADGE_NAME_Y: f32 = 0.65;
const CARD_NAME_Y: f32 = 0.73;
const CARD_CONTACT_ONE_Y: f32 = 0.84;
const CARD_CONTACT_TWO_Y: f32 = 0.91;

/// Errors from composing a screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ScreenError<E> {
    /// Frame buffer draw or commit failed
    #[error("display draw failed")]
    Draw(E),
    /// QR payload over the generator's capacity; nothing was drawn
    #[error("QR payload of {len} bytes exceeds capacity of {capacity}")]
    PayloadTooLarge { len: usize, capacity: usize },
    /// QR matrix plus quiet zone does not fit even at scale 1
    #[error("QR matrix of {modules} modules does not fit in {max} pixels")]
    MatrixTooLarge { modules: u32, max: u32 },
}

impl<E> From<PayloadTooLarge> for ScreenError<E> {
    fn from(e: PayloadTooLarge) -> Self {
        ScreenError::PayloadTooLarge {
            len: e.len,
            capacity: e.capacity,
        }
    }
}

/// Placement of a QR matrix on the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QrLayout {
    /// Pixels per module
    pub scale: u32,
    /// Top-left of the quiet zone
    pub origin: Point,
    /// Modules per side including the quiet zone
    pub modules: u32,
}

impl QrLayout {
    /// Largest integer scale that fits, centred; `None` if scale 1 does not fit
    pub fn fit(matrix_size: u32, display: Size) -> Option<Self> {
        let modules = matrix_size + 2 * QR_BORDER;
        let scale = (display.width / modules).min(display.height / modules);
        if scale == 0 {
            return None;
        }
        let side = modules * scale;
        Some(Self {
            scale,
            origin: Point::new(
                ((display.width - side) / 2) as i32,
                ((display.height - side) / 2) as i32,
            ),
            modules,
        })
    }
}

/// Draws canned screens onto a frame buffer
pub struct ScreenComposer<D> {
    target: D,
    spec: DisplaySpec,
}

impl<D: FrameBuffer> ScreenComposer<D> {
    pub fn new(target: D, spec: DisplaySpec) -> Self {
        Self { target, spec }
    }

    pub fn target(&self) -> &D {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut D {
        &mut self.target
    }

    pub fn release(self) -> D {
        self.target
    }

    /// "HELLO / MY NAME IS" badge
    pub fn show_badge(&mut self, request: &BadgeRequest<'_>) -> Result<(), ScreenError<D::Error>> {
        self.draw_background(&BadgeBackground {
            background_color: request.background_color,
            rectangle_color: request.foreground_color,
            ..Default::default()
        })?;
        if let Some(image) = request.image {
            self.draw_image(image)?;
        }

        self.draw_label(
            &request.hello,
            BADGE_HELLO_Y,
            request.background_text_color,
            None,
        )?;
        self.draw_label(
            &request.my_name_is,
            BADGE_MY_NAME_IS_Y,
            request.background_text_color,
            None,
        )?;
        self.draw_label(
            &request.name,
            BADGE_NAME_Y,
            request.foreground_text_color,
            None,
        )?;

        self.commit()
    }

    /// Business card: optional image with name and two contact lines below
    pub fn show_business_card(
        &mut self,
        request: &BusinessCardRequest<'_>,
    ) -> Result<(), ScreenError<D::Error>> {
        self.target.clear(palette::BLACK).map_err(ScreenError::Draw)?;
        if let Some(image) = request.image {
            self.draw_image(image)?;
        }

        let lines = [
            (request.name, CARD_NAME_Y),
            (request.contact_one, CARD_CONTACT_ONE_Y),
            (request.contact_two, CARD_CONTACT_TWO_Y),
        ];
        for (label, y) in lines {
            if let Some(label) = label {
                self.draw_label(&label, y, request.font_color, request.text_background)?;
            }
        }

        self.commit()
    }

    /// Custom badge: background, optional image, stacked lines
    ///
    /// Lines stack from the top; each starts `padding_above` line heights
    /// below the previous one and advances by its scaled height.
    pub fn show_custom_badge(
        &mut self,
        badge: &CustomBadge<'_>,
    ) -> Result<(), ScreenError<D::Error>> {
        self.draw_background(&badge.background)?;
        if let Some(image) = badge.image {
            self.draw_image(image)?;
        }

        let width = self.target.size().width as i32;
        let line_height = FONT.character_size.height as f32;
        let mut y = 0i32;
        for line in badge.lines() {
            let scale = line.scale.max(1);
            y += (line_height * line.padding_above + 0.5) as i32;

            let text_width = (text_width(line.text) * scale) as i32;
            let x = if line.left_justify {
                0
            } else {
                (width - text_width) / 2
            };

            let style = MonoTextStyleBuilder::new()
                .font(FONT)
                .text_color(line.color)
                .build();
            let mut scaled = Scaled::new(&mut self.target, scale, Point::new(x, y));
            Text::with_baseline(line.text, Point::zero(), style, Baseline::Top)
                .draw(&mut scaled)
                .map_err(ScreenError::Draw)?;

            y += (FONT.character_size.height * scale) as i32;
        }

        self.commit()
    }

    /// QR code, black on white, scaled to fit and centred
    ///
    /// Payloads over the encoder's capacity are rejected before anything is
    /// drawn; data is never truncated.
    pub fn show_qr_code<Q: QrEncoder>(
        &mut self,
        encoder: &mut Q,
        request: &QrRequest<'_>,
    ) -> Result<(), ScreenError<D::Error>> {
        let capacity = encoder.capacity(request.ecc);
        if request.data.len() > capacity {
            return Err(ScreenError::PayloadTooLarge {
                len: request.data.len(),
                capacity,
            });
        }
        let matrix = encoder.encode(request.data, request.ecc)?;

        let size = self.target.size();
        let layout = QrLayout::fit(matrix.size(), size).ok_or(ScreenError::MatrixTooLarge {
            modules: matrix.size() + 2 * QR_BORDER,
            max: size.width.min(size.height),
        })?;

        self.target.clear(palette::WHITE).map_err(ScreenError::Draw)?;
        let module = Size::new_equal(layout.scale);
        for y in 0..matrix.size() {
            for x in 0..matrix.size() {
                if !matrix.get(x, y) {
                    continue;
                }
                let top_left = layout.origin
                    + Point::new((x + QR_BORDER) as i32, (y + QR_BORDER) as i32)
                        * layout.scale as i32;
                self.target
                    .fill_solid(&Rectangle::new(top_left, module), palette::BLACK)
                    .map_err(ScreenError::Draw)?;
            }
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("QR {} modules at scale {}", layout.modules, layout.scale);
        self.commit()
    }

    fn draw_background(
        &mut self,
        background: &BadgeBackground,
    ) -> Result<(), ScreenError<D::Error>> {
        let size = self.target.size();
        self.target
            .clear(background.background_color)
            .map_err(ScreenError::Draw)?;

        let top = (size.height as f32 * background.rectangle_drop) as i32;
        let height = (size.height as f32 * background.rectangle_height) as u32;
        let block = Rectangle::new(Point::new(0, top), Size::new(size.width, height));
        self.target
            .fill_solid(&block, background.rectangle_color)
            .map_err(ScreenError::Draw)
    }

    fn draw_image(&mut self, image: &Bitmap<'_>) -> Result<(), ScreenError<D::Error>> {
        if !self.spec.supports_images {
            return Ok(());
        }
        Image::new(image, Point::zero())
            .draw(&mut self.target)
            .map_err(ScreenError::Draw)
    }

    /// Label centred horizontally, vertically centred at `y_fraction` of the height
    fn draw_label(
        &mut self,
        label: &Label<'_>,
        y_fraction: f32,
        color: Rgb565,
        background: Option<Rgb565>,
    ) -> Result<(), ScreenError<D::Error>> {
        let size = self.target.size();
        let center = Point::new(
            (size.width / 2) as i32,
            (size.height as f32 * y_fraction) as i32,
        );

        let mut style = MonoTextStyleBuilder::new().font(FONT).text_color(color);
        if let Some(background) = background {
            style = style.background_color(background);
        }
        let layout = TextStyleBuilder::new()
            .alignment(Alignment::Center)
            .baseline(Baseline::Middle)
            .build();

        let mut scaled = Scaled::new(&mut self.target, label.scale, center);
        Text::with_text_style(label.text, Point::zero(), style.build(), layout)
            .draw(&mut scaled)
            .map_err(ScreenError::Draw)?;
        Ok(())
    }

    fn commit(&mut self) -> Result<(), ScreenError<D::Error>> {
        self.target.commit().map_err(ScreenError::Draw)
    }
}

fn text_width(text: &str) -> u32 {
    let advance = FONT.character_size.width + FONT.character_spacing;
    text.chars().count() as u32 * advance
}
