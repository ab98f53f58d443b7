//! Singleton session store with write-through persistence.
//!
//! # Responsibility
//! - Hold the single active session and its phase.
//! - Mirror the session to the bridge on every transition.
//!
//! # Invariants
//! - Phase moves only along `Anonymous -> Authenticating -> Authenticated
//!   -> Anonymous`; a failed attempt reverts to the prior settled phase.
//! - A validation failure never creates or alters persisted state.
//! - `sign_out` cannot fail: bridge errors are logged, memory is cleared
//!   regardless.

use crate::auth::backend::AuthBackend;
use crate::auth::{AuthPhase, AuthResult, SessionError};
use crate::bridge::KvBridge;
use crate::model::session::{Session, User};
use crate::store::watch::{WatcherId, Watchers};
use crate::store::{decode_payload, encode_payload, StoreError, StoreResult};
use log::{info, warn};

/// Bridge key owned by this store.
pub const SESSION_KEY: &str = "mock_session";

/// The single active session for the process, plus its phase machine.
pub struct SessionStore<B: KvBridge, A: AuthBackend> {
    bridge: B,
    backend: A,
    session: Option<Session>,
    phase: AuthPhase,
    watchers: Watchers,
}

impl<B: KvBridge, A: AuthBackend> SessionStore<B, A> {
    /// Restores a persisted session if one exists.
    ///
    /// A payload that fails to decode is removed from storage and the
    /// store starts `Anonymous`.
    pub fn load(bridge: B, backend: A) -> StoreResult<Self> {
        let session = match bridge.load(SESSION_KEY)? {
            Some(raw) => match decode_payload::<Session>(&raw) {
                Ok(session) => Some(session),
                Err(err) => {
                    warn!("event=store_load module=auth status=fallback error={err}");
                    bridge.remove(SESSION_KEY)?;
                    None
                }
            },
            None => None,
        };

        let phase = if session.is_some() {
            AuthPhase::Authenticated
        } else {
            AuthPhase::Anonymous
        };
        info!("event=store_load module=auth status=ok phase={phase:?}");

        Ok(Self {
            bridge,
            backend,
            session,
            phase,
            watchers: Watchers::new(),
        })
    }

    pub fn phase(&self) -> AuthPhase {
        self.phase
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|session| &session.user)
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Registers a new account and signs it in.
    pub fn sign_up(
        &mut self,
        email: &str,
        password: &str,
        name: Option<&str>,
    ) -> Result<(), SessionError> {
        self.begin_attempt();
        let attempt = self.backend.sign_up(email, password, name);
        self.settle_attempt(attempt)
    }

    /// Signs in with an email/password pair.
    pub fn sign_in(&mut self, email: &str, password: &str) -> Result<(), SessionError> {
        self.begin_attempt();
        let attempt = self.backend.sign_in(email, password);
        self.settle_attempt(attempt)
    }

    /// Signs in through the mocked OAuth flow.
    pub fn sign_in_with_google(&mut self) -> Result<(), SessionError> {
        self.begin_attempt();
        let attempt = self.backend.sign_in_with_google();
        self.settle_attempt(attempt)
    }

    /// Requests a password reset. No session state changes.
    pub fn reset_password(&self, email: &str) -> Result<(), SessionError> {
        self.backend.reset_password(email).map_err(SessionError::Auth)
    }

    /// Clears the persisted session and in-memory state unconditionally.
    pub fn sign_out(&mut self) {
        if let Err(err) = self.bridge.remove(SESSION_KEY) {
            warn!("event=session_clear module=auth status=error error={err}");
        }
        self.session = None;
        self.phase = AuthPhase::Anonymous;
        info!("event=session_clear module=auth status=ok");
        self.watchers.notify();
    }

    /// Registers a change callback invoked after every phase transition.
    pub fn subscribe(&mut self, callback: impl FnMut() + 'static) -> WatcherId {
        self.watchers.subscribe(callback)
    }

    /// Removes a previously registered change callback.
    pub fn unsubscribe(&mut self, id: WatcherId) -> bool {
        self.watchers.unsubscribe(id)
    }

    fn begin_attempt(&mut self) {
        self.phase = AuthPhase::Authenticating;
        self.watchers.notify();
    }

    fn settle_attempt(&mut self, attempt: AuthResult<Session>) -> Result<(), SessionError> {
        match attempt {
            Ok(session) => match self.persist(&session) {
                Ok(()) => {
                    self.session = Some(session);
                    self.phase = AuthPhase::Authenticated;
                    info!("event=session_open module=auth status=ok");
                    self.watchers.notify();
                    Ok(())
                }
                Err(err) => {
                    self.revert_phase();
                    Err(err.into())
                }
            },
            Err(err) => {
                self.revert_phase();
                Err(err.into())
            }
        }
    }

    fn revert_phase(&mut self) {
        self.phase = if self.session.is_some() {
            AuthPhase::Authenticated
        } else {
            AuthPhase::Anonymous
        };
        self.watchers.notify();
    }

    fn persist(&self, session: &Session) -> StoreResult<()> {
        let raw = encode_payload(session).map_err(StoreError::Codec)?;
        self.bridge.save(SESSION_KEY, &raw)?;
        Ok(())
    }
}
