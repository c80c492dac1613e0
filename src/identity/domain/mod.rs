//! Domain model for user identity.

mod credentials;
mod error;
mod user;

pub use credentials::{CredentialPolicy, Credentials};
pub use error::CredentialError;
pub use user::{User, UserId};
