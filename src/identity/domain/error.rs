//! Validation errors for identity values.

use thiserror::Error;

/// Errors returned while validating sign-in or sign-up input.
///
/// Display strings are shown to the user verbatim.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CredentialError {
    /// Email or password is blank.
    #[error("Email and password are required.")]
    Missing,

    /// Password is shorter than the policy minimum.
    #[error("Password must be at least {min} characters.")]
    PasswordTooShort {
        /// Minimum permitted length in characters.
        min: usize,
    },
}
