//! User identity and session lifecycle.
//!
//! Authentication is delegated to an [`ports::IdentityProvider`]. The
//! [`services::AuthService`] validates form input, calls the provider and
//! mirrors the outcome into a [`services::SessionHandle`] that is passed
//! explicitly to the task board.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
