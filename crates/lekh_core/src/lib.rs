//! Core state management for the Lekh workspace app.
//! This crate is the single source of truth for store semantics.

pub mod auth;
pub mod bridge;
pub mod db;
pub mod logging;
pub mod model;
pub mod notify;
pub mod store;

pub use auth::backend::{AuthBackend, MockAuthBackend, CREDENTIAL_ROUND_TRIP, OAUTH_ROUND_TRIP};
pub use auth::store::{SessionStore, SESSION_KEY};
pub use auth::{AuthError, AuthPhase, AuthResult, SessionError};
pub use bridge::{BridgeError, BridgeResult, KvBridge, SqliteKvBridge};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{Note, NoteId};
pub use model::now_epoch_ms;
pub use model::session::{Session, User, AUDIENCE_AUTHENTICATED};
pub use model::todo::{Todo, TodoId};
pub use notify::{Broadcast, ModalKind, Toast, ToastId, ToastLevel, TOAST_TTL};
pub use store::notes::{NotesStore, NOTES_KEY};
pub use store::todos::{TodoStore, TODOS_KEY};
pub use store::watch::{WatcherId, Watchers};
pub use store::{StoreError, StoreResult, PAYLOAD_VERSION};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
