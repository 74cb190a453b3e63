//! Configuration types
//!
//! Tuning values for the controllers. Defaults are the documented firmware
//! values; with the `serde` feature they can be loaded from a config file.

pub mod dim;

pub use dim::*;
