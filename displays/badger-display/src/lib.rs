//! Screen composition for badge boards
//!
//! This crate provides:
//! - `FrameBuffer` trait, the seam to a board's pixel driver
//! - `ScreenComposer` drawing the canned screens (badge, business card,
//!   custom badge, QR code)
//! - `QrEncoder` trait, the seam to a QR matrix generator
//! - A colour palette and an integer-scaling draw target for text
//!
//! # Architecture
//!
//! The composer only orchestrates `embedded-graphics` primitives. Panel
//! drivers implement [`FrameBuffer`]; QR generation is supplied by the
//! caller through [`QrEncoder`]. Every `show_*` call draws a whole frame
//! and commits it once, so repeating a call with the same request
//! reproduces the same frame.

#![cfg_attr(not(test), no_std)]

pub mod backend;
pub mod compose;
pub mod palette;
pub mod qr;
pub mod request;
pub mod scaled;

// Re-export key types
pub use backend::FrameBuffer;
pub use compose::{ScreenComposer, ScreenError};
pub use qr::{ErrorCorrection, PayloadTooLarge, QrEncoder, QrMatrix};
pub use request::{
    BadgeBackground, BadgeLine, BadgeRequest, Bitmap, BusinessCardRequest, CustomBadge, Label,
    LineLimit, QrRequest, MAX_BADGE_LINES,
};
pub use scaled::Scaled;
