//! Auto-dim controllers
//!
//! Both controllers are driven by the caller's loop with a monotonic
//! millisecond timestamp; neither blocks or spawns anything.

pub mod controller;
pub mod idle;

pub use controller::{AutoDim, DimOutcome, DimState};
pub use idle::IdleDimmer;
