//! Session lifecycle: auth backend contract, mock implementation and the
//! singleton session store.
//!
//! # Responsibility
//! - Model the linear phase machine `Anonymous -> Authenticating ->
//!   Authenticated -> Anonymous`.
//! - Keep the backend behind a trait so a real identity provider can be
//!   substituted without touching callers.
//!
//! # Invariants
//! - Session existence is the sole authorization signal; tokens are never
//!   validated and never expire.
//! - A failed attempt leaves persisted state untouched.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::store::StoreError;

pub mod backend;
pub mod store;

pub type AuthResult<T> = Result<T, AuthError>;

/// Validation failure surfaced by auth operations.
///
/// The mock backend can only fail one way; a real backend would extend
/// this taxonomy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Email or password was empty or missing.
    MissingCredentials,
}

impl Display for AuthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingCredentials => write!(f, "email and password are required"),
        }
    }
}

impl Error for AuthError {}

/// Where the session store currently sits in its linear state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthPhase {
    /// No session; the initial and post-sign-out state.
    Anonymous,
    /// A mutating operation is in flight against the backend.
    Authenticating,
    /// A session is present.
    Authenticated,
}

/// Error surface of session store operations.
#[derive(Debug)]
pub enum SessionError {
    /// Backend rejected the attempt (validation).
    Auth(AuthError),
    /// Persistence or serialization failed.
    Store(StoreError),
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auth(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Auth(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<AuthError> for SessionError {
    fn from(value: AuthError) -> Self {
        Self::Auth(value)
    }
}

impl From<StoreError> for SessionError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}
