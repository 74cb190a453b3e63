//! Capability abstraction
//!
//! Built once at startup from a [`BoardDescriptor`](crate::board::BoardDescriptor);
//! exposes only the peripherals the board actually has.

pub mod factory;
pub mod handle;

pub use factory::PeripheralFactory;
pub use handle::CapabilityHandle;
