//! Subscriber registry for store change notification.
//!
//! Stand-in for the reactive re-render machinery of the original host
//! platform: stores invoke every registered callback after a mutation has
//! been persisted, and subscribers re-read whatever state they care about.
//!
//! # Invariants
//! - Callbacks run in subscription order.
//! - Notification happens after persistence, so a subscriber reading at
//!   callback time sees state consistent with storage.

/// Handle returned by [`Watchers::subscribe`], used to unsubscribe later.
pub type WatcherId = u64;

/// Ordered registry of change callbacks.
#[derive(Default)]
pub struct Watchers {
    next_id: WatcherId,
    entries: Vec<(WatcherId, Box<dyn FnMut()>)>,
}

impl Watchers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a callback and returns its handle.
    pub fn subscribe(&mut self, callback: impl FnMut() + 'static) -> WatcherId {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push((id, Box::new(callback)));
        id
    }

    /// Removes a callback. Returns whether the handle was known.
    pub fn unsubscribe(&mut self, id: WatcherId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Invokes every registered callback in subscription order.
    pub fn notify(&mut self) {
        for (_, callback) in &mut self.entries {
            callback();
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for Watchers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Watchers")
            .field("count", &self.entries.len())
            .finish()
    }
}
