//! Sign-in, sign-up and sign-out orchestration.

use super::SessionHandle;
use crate::identity::{
    domain::{CredentialError, CredentialPolicy, Credentials, User},
    ports::{IdentityError, IdentityProvider},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Which form the user submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AuthMode {
    /// Existing account.
    #[default]
    SignIn,
    /// New account.
    SignUp,
}

impl AuthMode {
    /// Returns the other mode, as toggled on the auth form.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::SignIn => Self::SignUp,
            Self::SignUp => Self::SignIn,
        }
    }
}

/// Service-level errors for authentication.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Input was rejected before contacting the provider.
    #[error(transparent)]
    Credentials(#[from] CredentialError),
    /// The provider refused or failed the request.
    #[error(transparent)]
    Provider(#[from] IdentityError),
}

impl AuthError {
    /// Returns the message to show inline on the auth form.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Result type for authentication operations.
pub type AuthResult<T> = Result<T, AuthError>;

/// Authentication orchestration service.
///
/// Keeps a [`SessionHandle`] in step with the provider so that consumers
/// never consult ambient global state.
#[derive(Clone)]
pub struct AuthService<P>
where
    P: IdentityProvider,
{
    provider: Arc<P>,
    session: SessionHandle,
    policy: CredentialPolicy,
}

impl<P> AuthService<P>
where
    P: IdentityProvider,
{
    /// Creates a service with the default credential policy.
    #[must_use]
    pub fn new(provider: Arc<P>) -> Self {
        Self::with_policy(provider, CredentialPolicy::default())
    }

    /// Creates a service with an explicit credential policy.
    #[must_use]
    pub fn with_policy(provider: Arc<P>, policy: CredentialPolicy) -> Self {
        let session = match provider.current_user() {
            Some(user) if !provider.is_loading() => SessionHandle::signed_in(user),
            None if !provider.is_loading() => SessionHandle::signed_out(),
            _ => SessionHandle::loading(),
        };
        Self {
            provider,
            session,
            policy,
        }
    }

    /// Returns the session handle to pass to consumers.
    #[must_use]
    pub fn session(&self) -> SessionHandle {
        self.session.clone()
    }

    /// Resolves the initial session.
    ///
    /// A provider failure resolves the session as signed out.
    pub async fn restore(&self) -> Option<User> {
        let user = match self.provider.restore_session().await {
            Ok(user) => user,
            Err(err) => {
                warn!(error = %err, "session restore failed");
                None
            }
        };
        self.session.resolve(user.clone());
        user
    }

    /// Validates input and signs in or signs up.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Credentials`] without contacting the provider
    /// when validation fails, or [`AuthError::Provider`] when the provider
    /// refuses.
    pub async fn submit(&self, mode: AuthMode, email: &str, password: &str) -> AuthResult<User> {
        let credentials = Credentials::new(email, password, self.policy)?;
        let outcome = match mode {
            AuthMode::SignIn => self.provider.sign_in(&credentials).await,
            AuthMode::SignUp => self.provider.sign_up(&credentials).await,
        };
        match outcome {
            Ok(user) => {
                info!(user_id = %user.id(), ?mode, "authenticated");
                self.session.resolve(Some(user.clone()));
                Ok(user)
            }
            Err(err) => {
                warn!(error = %err, ?mode, "authentication failed");
                Err(err.into())
            }
        }
    }

    /// Signs in an existing account.
    ///
    /// # Errors
    ///
    /// See [`AuthService::submit`].
    pub async fn sign_in(&self, email: &str, password: &str) -> AuthResult<User> {
        self.submit(AuthMode::SignIn, email, password).await
    }

    /// Registers a new account.
    ///
    /// # Errors
    ///
    /// See [`AuthService::submit`].
    pub async fn sign_up(&self, email: &str, password: &str) -> AuthResult<User> {
        self.submit(AuthMode::SignUp, email, password).await
    }

    /// Ends the session.
    ///
    /// The local session is cleared even if the provider call fails.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Provider`] when the provider fails.
    pub async fn sign_out(&self) -> AuthResult<()> {
        let outcome = self.provider.sign_out().await;
        self.session.clear();
        outcome.map_err(AuthError::from)
    }
}
