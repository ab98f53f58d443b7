//! Todo domain model.

use crate::model::now_epoch_ms;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a todo entity.
pub type TodoId = Uuid;

/// A single todo entry.
///
/// `created_at` is fixed at creation and never rewritten; toggling or
/// editing the text leaves it untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: TodoId,
    pub text: String,
    pub completed: bool,
    /// Unix epoch milliseconds, fixed at creation.
    pub created_at: i64,
}

impl Todo {
    /// Creates an open todo with a generated stable ID.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            completed: false,
            created_at: now_epoch_ms(),
        }
    }
}
