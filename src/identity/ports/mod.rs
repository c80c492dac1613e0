//! Port contracts for identity.

pub mod provider;

pub use provider::{IdentityError, IdentityProvider, IdentityResult};
