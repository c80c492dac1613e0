//! Task records and their remote store.
//!
//! The module follows hexagonal architecture:
//!
//! - Domain types, including the status cycle, in [`domain`]
//! - The store contract in [`ports`]
//! - In-memory and `PostgreSQL` stores in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;
