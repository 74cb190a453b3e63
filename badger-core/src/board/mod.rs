//! Board descriptors
//!
//! One immutable descriptor per physical model, selected once at startup
//! from the platform identity line.

pub mod catalog;
pub mod descriptor;

pub use catalog::{resolve_board, resolve_board_from, BOARDS};
pub use descriptor::*;
