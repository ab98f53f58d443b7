//! Note domain model.
//!
//! # Invariants
//! - `id` is unique within a collection and never reassigned.
//! - `created_at` is fixed at first save; only `updated_at` moves afterwards.

use crate::model::now_epoch_ms;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a note entity.
pub type NoteId = Uuid;

/// A free-form note document.
///
/// `title` may be empty; display layers substitute a placeholder at render
/// time. Insertion order in a collection carries no meaning; recency views
/// sort on `updated_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    /// Unix epoch milliseconds, assigned at first save.
    pub created_at: i64,
    /// Unix epoch milliseconds, rewritten on every save.
    pub updated_at: i64,
}

impl Note {
    /// Creates a note draft with a generated stable ID and fresh timestamps.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        let now = now_epoch_ms();
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            content: content.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Creates a note with a caller-provided stable ID.
    ///
    /// Used by callers that already hold an identity, such as an editor
    /// re-saving an existing document.
    pub fn with_id(id: NoteId, title: impl Into<String>, content: impl Into<String>) -> Self {
        let now = now_epoch_ms();
        Self {
            id,
            title: title.into(),
            content: content.into(),
            created_at: now,
            updated_at: now,
        }
    }
}
