//! Sign-in and sign-up credentials.

use super::CredentialError;

/// Rules applied to credentials before they reach the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CredentialPolicy {
    /// Minimum password length in characters.
    pub min_password_length: usize,
}

impl CredentialPolicy {
    /// Default minimum password length.
    pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 6;

    /// Sets the minimum password length.
    #[must_use]
    pub const fn with_min_password_length(mut self, min: usize) -> Self {
        self.min_password_length = min;
        self
    }
}

impl Default for CredentialPolicy {
    fn default() -> Self {
        Self {
            min_password_length: Self::DEFAULT_MIN_PASSWORD_LENGTH,
        }
    }
}

/// Validated email and password pair.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    /// Validates raw input against `policy`.
    ///
    /// The email is trimmed; the password is kept as typed.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError::Missing`] when either field is blank or
    /// [`CredentialError::PasswordTooShort`] when the password is shorter
    /// than the policy allows.
    pub fn new(
        email: &str,
        password: &str,
        policy: CredentialPolicy,
    ) -> Result<Self, CredentialError> {
        let trimmed_email = email.trim();
        if trimmed_email.is_empty() || password.trim().is_empty() {
            return Err(CredentialError::Missing);
        }
        if password.chars().count() < policy.min_password_length {
            return Err(CredentialError::PasswordTooShort {
                min: policy.min_password_length,
            });
        }
        Ok(Self {
            email: trimmed_email.to_owned(),
            password: password.to_owned(),
        })
    }

    /// Returns the trimmed email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the password.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
