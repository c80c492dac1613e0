//! Application services for authentication and session state.

mod auth;
mod session;

pub use auth::{AuthError, AuthMode, AuthResult, AuthService};
pub use session::SessionHandle;
