//! Session and user domain model.
//!
//! # Invariants
//! - A `Session` always owns its `User` by value; a session without a user
//!   cannot be represented.
//! - At most one session exists per process; the session store enforces the
//!   singleton, not this module.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Audience tag stamped on every user the mock backend produces.
pub const AUDIENCE_AUTHENTICATED: &str = "authenticated";

/// Authenticated principal attached to a session.
///
/// `id` stays an opaque string rather than a UUID: the mock backend issues
/// fixed well-known IDs for some flows, and a real backend may issue IDs in
/// whatever shape it likes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Free-form profile attributes, e.g. `name`.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub user_metadata: BTreeMap<String, String>,
    pub aud: String,
    /// Unix epoch milliseconds at account synthesis.
    pub created_at: i64,
}

/// The single active authenticated-user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: User,
    /// Opaque bearer token. Never validated; presence of the session itself
    /// is the sole authorization signal.
    pub access_token: String,
}

impl User {
    /// Returns the display name from profile metadata, if present.
    pub fn display_name(&self) -> Option<&str> {
        self.user_metadata.get("name").map(String::as_str)
    }
}
