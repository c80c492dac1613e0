//! Identity provider port.

use crate::identity::domain::{Credentials, User};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for identity provider operations.
pub type IdentityResult<T> = Result<T, IdentityError>;

/// External identity provider contract.
///
/// The provider owns the session. `is_loading` is `true` until
/// [`IdentityProvider::restore_session`] has resolved once.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Resolves any persisted session and returns its user.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::Unavailable`] when the provider cannot be
    /// reached.
    async fn restore_session(&self) -> IdentityResult<Option<User>>;

    /// Returns the signed-in user, if any.
    fn current_user(&self) -> Option<User>;

    /// Returns `true` while the initial session is being resolved.
    fn is_loading(&self) -> bool;

    /// Registers a new account.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::Rejected`] with a user-facing message when
    /// the provider refuses the registration.
    async fn sign_up(&self, credentials: &Credentials) -> IdentityResult<User>;

    /// Signs in an existing account.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::Rejected`] with a user-facing message when
    /// the credentials are not accepted.
    async fn sign_in(&self, credentials: &Credentials) -> IdentityResult<User>;

    /// Ends the current session.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::Unavailable`] when the provider cannot be
    /// reached.
    async fn sign_out(&self) -> IdentityResult<()>;
}

/// Errors returned by identity providers.
#[derive(Debug, Clone, Error)]
pub enum IdentityError {
    /// The provider refused the request.
    #[error("{0}")]
    Rejected(String),

    /// Transport or provider failure.
    #[error("identity provider unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl IdentityError {
    /// Creates a rejection with a user-facing message.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected(message.into())
    }

    /// Wraps a transport or provider error.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }

    /// Returns the message to show the user.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }
}
