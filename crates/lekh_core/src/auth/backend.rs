//! Auth backend contract and the latency-simulating mock.
//!
//! # Responsibility
//! - Define the operation surface a real identity provider would offer.
//! - Provide a mock that approximates remote round trips with a blocking
//!   delay and synthesizes deterministic identities.
//!
//! # Invariants
//! - The mock never rejects a non-empty credential pair; there is no
//!   credential store to check against.
//! - The simulated delay is fixed per construction, not per call.

use crate::auth::{AuthError, AuthResult};
use crate::model::now_epoch_ms;
use crate::model::session::{Session, User, AUDIENCE_AUTHENTICATED};
use std::collections::BTreeMap;
use std::thread;
use std::time::Duration;
use uuid::Uuid;

/// Simulated round-trip latency for credential operations.
pub const CREDENTIAL_ROUND_TRIP: Duration = Duration::from_millis(500);
/// Simulated round-trip latency for the OAuth redirect dance.
pub const OAUTH_ROUND_TRIP: Duration = Duration::from_millis(800);

/// Operation surface of an identity provider.
///
/// The session store is generic over this trait, so swapping the mock for
/// a real remote backend does not touch any caller.
pub trait AuthBackend {
    fn sign_up(&self, email: &str, password: &str, name: Option<&str>) -> AuthResult<Session>;
    fn sign_in(&self, email: &str, password: &str) -> AuthResult<Session>;
    fn sign_in_with_google(&self) -> AuthResult<Session>;
    fn reset_password(&self, email: &str) -> AuthResult<()>;
}

/// Backend that simulates a remote identity provider in-process.
///
/// Every mutating call blocks for the configured delay before resolving,
/// approximating a network round trip. Tests construct it with zero
/// delays.
pub struct MockAuthBackend {
    credential_delay: Duration,
    oauth_delay: Duration,
}

impl MockAuthBackend {
    pub fn new() -> Self {
        Self {
            credential_delay: CREDENTIAL_ROUND_TRIP,
            oauth_delay: OAUTH_ROUND_TRIP,
        }
    }

    /// Overrides the simulated latency; pass `Duration::ZERO` in tests.
    pub fn with_delays(credential_delay: Duration, oauth_delay: Duration) -> Self {
        Self {
            credential_delay,
            oauth_delay,
        }
    }

    fn pause(&self, delay: Duration) {
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }
}

impl Default for MockAuthBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthBackend for MockAuthBackend {
    fn sign_up(&self, email: &str, password: &str, name: Option<&str>) -> AuthResult<Session> {
        self.pause(self.credential_delay);
        require_credentials(email, password)?;

        let mut user_metadata = BTreeMap::new();
        if let Some(name) = name {
            user_metadata.insert("name".to_string(), name.to_string());
        }

        // No uniqueness check: any email is accepted as a new account.
        let user = User {
            id: Uuid::new_v4().to_string(),
            email: Some(email.to_string()),
            user_metadata,
            aud: AUDIENCE_AUTHENTICATED.to_string(),
            created_at: now_epoch_ms(),
        };

        Ok(Session {
            user,
            access_token: format!("mock-jwt-token-{}", Uuid::new_v4()),
        })
    }

    fn sign_in(&self, email: &str, password: &str) -> AuthResult<Session> {
        self.pause(self.credential_delay);
        require_credentials(email, password)?;

        // Identity is synthesized from the email; there is no credential
        // store, so a "wrong password" outcome cannot exist.
        let display_name = email.split('@').next().unwrap_or(email);
        let mut user_metadata = BTreeMap::new();
        user_metadata.insert("name".to_string(), display_name.to_string());

        let user = User {
            id: "mock-user-id".to_string(),
            email: Some(email.to_string()),
            user_metadata,
            aud: AUDIENCE_AUTHENTICATED.to_string(),
            created_at: now_epoch_ms(),
        };

        Ok(Session {
            user,
            access_token: "mock-jwt-token".to_string(),
        })
    }

    fn sign_in_with_google(&self) -> AuthResult<Session> {
        self.pause(self.oauth_delay);

        let mut user_metadata = BTreeMap::new();
        user_metadata.insert("name".to_string(), "Google User".to_string());

        let user = User {
            id: "google-user-id".to_string(),
            email: Some("user@gmail.com".to_string()),
            user_metadata,
            aud: AUDIENCE_AUTHENTICATED.to_string(),
            created_at: now_epoch_ms(),
        };

        Ok(Session {
            user,
            access_token: "google-token".to_string(),
        })
    }

    fn reset_password(&self, _email: &str) -> AuthResult<()> {
        self.pause(self.credential_delay);
        Ok(())
    }
}

fn require_credentials(email: &str, password: &str) -> AuthResult<()> {
    if email.is_empty() || password.is_empty() {
        return Err(AuthError::MissingCredentials);
    }
    Ok(())
}
