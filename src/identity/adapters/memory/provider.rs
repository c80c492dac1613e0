//! In-memory identity provider for tests and local embedding.

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::identity::{
    domain::{Credentials, User, UserId},
    ports::{IdentityError, IdentityProvider, IdentityResult},
};

const ALREADY_REGISTERED: &str = "User already registered";
const INVALID_CREDENTIALS: &str = "Invalid login credentials";

/// Thread-safe in-memory identity provider.
///
/// Accounts are keyed by lowercased email. Passwords are kept as salted
/// SHA-256 digests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryIdentityProvider {
    state: Arc<RwLock<IdentityState>>,
}

#[derive(Debug, Default)]
struct IdentityState {
    accounts: HashMap<String, Account>,
    current: Option<User>,
    restored: bool,
}

#[derive(Debug, Clone)]
struct Account {
    user: User,
    salt: [u8; 16],
    digest: [u8; 32],
}

impl InMemoryIdentityProvider {
    /// Creates a provider with no accounts and no session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a provider whose session is already resolved to `user`.
    ///
    /// Useful for exercising the task board without an auth round trip.
    #[must_use]
    pub fn signed_in_as(user: User) -> Self {
        let state = IdentityState {
            accounts: HashMap::new(),
            current: Some(user),
            restored: true,
        };
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn digest_password(salt: &[u8; 16], password: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    hasher.finalize().into()
}

fn poisoned<E: std::fmt::Display>(err: E) -> IdentityError {
    IdentityError::unavailable(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl IdentityProvider for InMemoryIdentityProvider {
    async fn restore_session(&self) -> IdentityResult<Option<User>> {
        let mut state = self.state.write().map_err(poisoned)?;
        state.restored = true;
        Ok(state.current.clone())
    }

    fn current_user(&self) -> Option<User> {
        self.state
            .read()
            .ok()
            .and_then(|state| state.current.clone())
    }

    fn is_loading(&self) -> bool {
        self.state.read().is_ok_and(|state| !state.restored)
    }

    async fn sign_up(&self, credentials: &Credentials) -> IdentityResult<User> {
        let mut state = self.state.write().map_err(poisoned)?;
        let key = normalize_email(credentials.email());
        if state.accounts.contains_key(&key) {
            return Err(IdentityError::rejected(ALREADY_REGISTERED));
        }

        let salt = *uuid::Uuid::new_v4().as_bytes();
        let user = User::new(UserId::new(), credentials.email());
        let account = Account {
            user: user.clone(),
            salt,
            digest: digest_password(&salt, credentials.password()),
        };
        state.accounts.insert(key, account);
        state.current = Some(user.clone());
        state.restored = true;
        Ok(user)
    }

    async fn sign_in(&self, credentials: &Credentials) -> IdentityResult<User> {
        let mut state = self.state.write().map_err(poisoned)?;
        let key = normalize_email(credentials.email());
        let user = state
            .accounts
            .get(&key)
            .filter(|account| {
                digest_password(&account.salt, credentials.password()) == account.digest
            })
            .map(|account| account.user.clone())
            .ok_or_else(|| IdentityError::rejected(INVALID_CREDENTIALS))?;
        state.current = Some(user.clone());
        state.restored = true;
        Ok(user)
    }

    async fn sign_out(&self) -> IdentityResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        state.current = None;
        Ok(())
    }
}
