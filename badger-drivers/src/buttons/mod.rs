//! Button readers

pub mod direct;
pub mod shift;

pub use direct::DirectButtons;
pub use shift::ShiftRegisterButtons;
