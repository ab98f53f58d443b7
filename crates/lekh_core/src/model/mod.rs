//! Canonical domain records for the workspace stores.
//!
//! # Responsibility
//! - Define the persisted shapes for notes, todos and auth sessions.
//! - Keep serialized field names identical to the app's historical JSON
//!   payloads (`createdAt`, `user_metadata`, ...).
//!
//! # Invariants
//! - Every entity carries a stable identifier assigned at creation.
//! - Timestamps are unix epoch milliseconds.

pub mod note;
pub mod session;
pub mod todo;

use std::time::{SystemTime, UNIX_EPOCH};

/// Current wall-clock time in unix epoch milliseconds.
///
/// Returns 0 when the system clock reports a pre-epoch time.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis() as i64)
}
