//! Ephemeral UI broadcast: modal visibility and toast notices.
//!
//! # Responsibility
//! - Track which modal (if any) is currently active.
//! - Hold transient toast notices with a fixed auto-expiry.
//!
//! # Invariants
//! - At most one modal is active at a time; opening replaces the current
//!   one.
//! - Nothing here is persisted; process exit drops all of it.

use std::time::{Duration, Instant};
use uuid::Uuid;

/// How long a toast stays visible unless dismissed earlier.
pub const TOAST_TTL: Duration = Duration::from_secs(3);

/// The closed set of modals the dashboard shell can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    Search,
    Settings,
    Assistant,
    Help,
}

/// Visual register of a toast notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
    Info,
}

/// Handle for dismissing a specific toast.
pub type ToastId = Uuid;

/// A transient notice shown in the toast stack.
#[derive(Debug, Clone)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub level: ToastLevel,
    posted_at: Instant,
}

impl Toast {
    /// Whether this toast has outlived its TTL at `now`.
    pub fn expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.posted_at) >= TOAST_TTL
    }
}

/// Transient UI signaling state. Observes nothing and persists nothing.
#[derive(Debug, Default)]
pub struct Broadcast {
    active_modal: Option<ModalKind>,
    toasts: Vec<Toast>,
}

impl Broadcast {
    pub fn new() -> Self {
        Self::default()
    }

    /// Activates `kind`, replacing any currently active modal.
    pub fn open_modal(&mut self, kind: ModalKind) {
        self.active_modal = Some(kind);
    }

    pub fn close_modal(&mut self) {
        self.active_modal = None;
    }

    pub fn active_modal(&self) -> Option<ModalKind> {
        self.active_modal
    }

    /// Posts a toast and returns its dismissal handle.
    pub fn push_toast(&mut self, message: impl Into<String>, level: ToastLevel) -> ToastId {
        let toast = Toast {
            id: Uuid::new_v4(),
            message: message.into(),
            level,
            posted_at: Instant::now(),
        };
        let id = toast.id;
        self.toasts.push(toast);
        id
    }

    /// Removes a toast before its TTL. Returns whether it was present.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }

    /// Prunes expired toasts as of `now` and returns the survivors in
    /// posting order.
    pub fn active_toasts(&mut self, now: Instant) -> &[Toast] {
        self.toasts.retain(|toast| !toast.expired_at(now));
        &self.toasts
    }
}

#[cfg(test)]
mod tests {
    use super::{Broadcast, ModalKind, ToastLevel, TOAST_TTL};
    use std::time::{Duration, Instant};

    #[test]
    fn opening_a_modal_replaces_the_active_one() {
        let mut broadcast = Broadcast::new();
        assert_eq!(broadcast.active_modal(), None);

        broadcast.open_modal(ModalKind::Search);
        broadcast.open_modal(ModalKind::Settings);
        assert_eq!(broadcast.active_modal(), Some(ModalKind::Settings));

        broadcast.close_modal();
        assert_eq!(broadcast.active_modal(), None);
    }

    #[test]
    fn toast_survives_until_ttl_and_expires_after() {
        let mut broadcast = Broadcast::new();
        let posted = Instant::now();
        broadcast.push_toast("Saved", ToastLevel::Success);

        assert_eq!(broadcast.active_toasts(posted).len(), 1);

        let later = posted + TOAST_TTL + Duration::from_secs(1);
        assert!(broadcast.active_toasts(later).is_empty());
    }

    #[test]
    fn dismiss_removes_a_toast_early() {
        let mut broadcast = Broadcast::new();
        let keep = broadcast.push_toast("kept", ToastLevel::Info);
        let drop = broadcast.push_toast("dropped", ToastLevel::Error);

        assert!(broadcast.dismiss(drop));
        assert!(!broadcast.dismiss(drop));

        let now = Instant::now();
        let remaining = broadcast.active_toasts(now);
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, keep);
        assert_eq!(remaining[0].message, "kept");
    }
}
