//! Named badge colours

use embedded_graphics::pixelcolor::Rgb565;

/// 8-bit-per-channel colour, truncated to RGB565
pub const fn rgb(r: u8, g: u8, b: u8) -> Rgb565 {
    Rgb565::new(r >> 3, g >> 2, b >> 3)
}

pub const RED: Rgb565 = rgb(255, 0, 0);
pub const YELLOW: Rgb565 = rgb(255, 255, 0);
pub const ORANGE: Rgb565 = rgb(255, 150, 0);
pub const GREEN: Rgb565 = rgb(0, 255, 0);
pub const TEAL: Rgb565 = rgb(0, 255, 120);
pub const CYAN: Rgb565 = rgb(0, 255, 255);
pub const BLUE: Rgb565 = rgb(0, 0, 255);
pub const PURPLE: Rgb565 = rgb(180, 0, 255);
pub const MAGENTA: Rgb565 = rgb(255, 0, 150);
pub const WHITE: Rgb565 = rgb(255, 255, 255);
pub const BLACK: Rgb565 = rgb(0, 0, 0);

pub const GOLD: Rgb565 = rgb(255, 222, 30);
pub const PINK: Rgb565 = rgb(242, 90, 255);
pub const AQUA: Rgb565 = rgb(50, 255, 255);
pub const JADE: Rgb565 = rgb(0, 255, 40);
pub const AMBER: Rgb565 = rgb(255, 100, 0);
pub const VIOLET: Rgb565 = rgb(255, 0, 255);
pub const SKY: Rgb565 = rgb(0, 180, 255);
pub const DEEP_PURPLE: Rgb565 = rgb(100, 0, 150);
pub const PYTHON_YELLOW: Rgb565 = rgb(255, 213, 69);
pub const PYTHON_BLUE: Rgb565 = rgb(55, 112, 159);
pub const BLINKA_PURPLE: Rgb565 = rgb(102, 45, 145);
pub const BLINKA_PINK: Rgb565 = rgb(231, 33, 138);
