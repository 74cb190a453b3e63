//! Per-tick input snapshots

mod snapshot;

pub use snapshot::{read_inputs, ButtonSet, InputSnapshot};
