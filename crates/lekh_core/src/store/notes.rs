//! Notes store: ordered in-memory collection mirrored to the bridge.
//!
//! # Responsibility
//! - Provide list/get/save/delete over the note collection.
//! - Persist the full collection synchronously after every mutation.
//!
//! # Invariants
//! - `id` is unique across the collection; `save` replaces in place rather
//!   than appending a duplicate.
//! - Replacing an existing note preserves its original `created_at`; the
//!   store stamps `updated_at` on every save.
//! - Mutation order is: mutate in memory, persist, notify.

use crate::bridge::KvBridge;
use crate::model::note::{Note, NoteId};
use crate::model::now_epoch_ms;
use crate::store::watch::{WatcherId, Watchers};
use crate::store::{decode_payload, encode_payload, StoreResult};
use log::{info, warn};

/// Bridge key owned by this store.
pub const NOTES_KEY: &str = "notes";

/// In-memory note collection with write-through persistence.
pub struct NotesStore<B: KvBridge> {
    bridge: B,
    notes: Vec<Note>,
    watchers: Watchers,
}

impl<B: KvBridge> NotesStore<B> {
    /// Loads the persisted collection, falling back to empty when nothing
    /// is stored or the stored payload cannot be decoded.
    pub fn load(bridge: B) -> StoreResult<Self> {
        let notes = match bridge.load(NOTES_KEY)? {
            Some(raw) => match decode_payload::<Vec<Note>>(&raw) {
                Ok(notes) => notes,
                Err(err) => {
                    warn!("event=store_load module=notes status=fallback error={err}");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        info!(
            "event=store_load module=notes status=ok count={}",
            notes.len()
        );

        Ok(Self {
            bridge,
            notes,
            watchers: Watchers::new(),
        })
    }

    /// Returns the collection in insertion order.
    pub fn list(&self) -> &[Note] {
        &self.notes
    }

    /// Returns a copy of the collection sorted most recently updated first.
    ///
    /// Ties break on `id` so the order is deterministic.
    pub fn list_recent(&self) -> Vec<Note> {
        let mut recent = self.notes.clone();
        recent.sort_by(|a, b| b.updated_at.cmp(&a.updated_at).then(a.id.cmp(&b.id)));
        recent
    }

    /// Returns the note with the given id, if present.
    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    /// Upserts a note: a known `id` is replaced in place, keeping its
    /// position and original `created_at`; an unknown `id` is appended.
    pub fn save(&mut self, mut note: Note) -> StoreResult<()> {
        note.updated_at = now_epoch_ms();

        match self.notes.iter().position(|existing| existing.id == note.id) {
            Some(index) => {
                note.created_at = self.notes[index].created_at;
                self.notes[index] = note;
            }
            None => self.notes.push(note),
        }

        self.persist()?;
        self.watchers.notify();
        Ok(())
    }

    /// Removes the note with the given id. Unknown ids are a no-op, but the
    /// collection is still persisted.
    pub fn delete(&mut self, id: NoteId) -> StoreResult<()> {
        self.notes.retain(|note| note.id != id);
        self.persist()?;
        self.watchers.notify();
        Ok(())
    }

    /// Registers a change callback invoked after every persisted mutation.
    pub fn subscribe(&mut self, callback: impl FnMut() + 'static) -> WatcherId {
        self.watchers.subscribe(callback)
    }

    /// Removes a previously registered change callback.
    pub fn unsubscribe(&mut self, id: WatcherId) -> bool {
        self.watchers.unsubscribe(id)
    }

    fn persist(&self) -> StoreResult<()> {
        let raw = encode_payload(&self.notes)?;
        self.bridge.save(NOTES_KEY, &raw)?;
        Ok(())
    }
}
