//! Explicit session context shared with the task board.

use crate::identity::domain::User;
use crate::task::domain::OwnerId;
use std::sync::{Arc, PoisonError, RwLock};

#[derive(Debug, Clone)]
struct SessionState {
    user: Option<User>,
    loading: bool,
}

/// Cloneable handle to the current session.
///
/// The auth service writes it; the task board reads the owner from it.
/// Clones observe the same session.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    state: Arc<RwLock<SessionState>>,
}

impl SessionHandle {
    /// Creates a handle that is still resolving its session.
    #[must_use]
    pub fn loading() -> Self {
        Self::from_state(None, true)
    }

    /// Creates a resolved handle for `user`.
    #[must_use]
    pub fn signed_in(user: User) -> Self {
        Self::from_state(Some(user), false)
    }

    /// Creates a resolved handle with no user.
    #[must_use]
    pub fn signed_out() -> Self {
        Self::from_state(None, false)
    }

    fn from_state(user: Option<User>, loading: bool) -> Self {
        Self {
            state: Arc::new(RwLock::new(SessionState { user, loading })),
        }
    }

    /// Returns the signed-in user, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        self.read(|state| state.user.clone())
    }

    /// Returns the owner tasks are scoped to, if signed in.
    #[must_use]
    pub fn owner(&self) -> Option<OwnerId> {
        self.read(|state| state.user.as_ref().map(User::owner_id))
    }

    /// Returns `true` while the session is being resolved.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.read(|state| state.loading)
    }

    /// Records a resolved session.
    pub fn resolve(&self, user: Option<User>) {
        self.write(|state| {
            state.user = user;
            state.loading = false;
        });
    }

    /// Clears the user; the session stays resolved.
    pub fn clear(&self) {
        self.resolve(None);
    }

    fn read<T>(&self, f: impl FnOnce(&SessionState) -> T) -> T {
        let guard = self.state.read().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    fn write(&self, f: impl FnOnce(&mut SessionState)) {
        let mut guard = self.state.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard);
    }
}
