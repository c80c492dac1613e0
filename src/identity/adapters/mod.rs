//! Adapter implementations of the identity provider port.

pub mod memory;
