//! Todo store: newest-first in-memory collection mirrored to the bridge.
//!
//! # Responsibility
//! - Provide add/toggle/update/delete over the todo collection.
//! - Persist the full collection synchronously after every mutation.
//!
//! # Invariants
//! - New todos are prepended; newest-first ordering is a store contract,
//!   not a display-level sort.
//! - `toggle` and `update` silently skip unknown ids, but still persist.
//! - Text is not validated; rejecting empty input is the caller's job.

use crate::bridge::KvBridge;
use crate::model::todo::{Todo, TodoId};
use crate::store::watch::{WatcherId, Watchers};
use crate::store::{decode_payload, encode_payload, StoreResult};
use log::{info, warn};

/// Bridge key owned by this store.
pub const TODOS_KEY: &str = "todos";

/// In-memory todo collection with write-through persistence.
pub struct TodoStore<B: KvBridge> {
    bridge: B,
    todos: Vec<Todo>,
    watchers: Watchers,
}

impl<B: KvBridge> TodoStore<B> {
    /// Loads the persisted collection, falling back to empty when nothing
    /// is stored or the stored payload cannot be decoded.
    pub fn load(bridge: B) -> StoreResult<Self> {
        let todos = match bridge.load(TODOS_KEY)? {
            Some(raw) => match decode_payload::<Vec<Todo>>(&raw) {
                Ok(todos) => todos,
                Err(err) => {
                    warn!("event=store_load module=todos status=fallback error={err}");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        info!(
            "event=store_load module=todos status=ok count={}",
            todos.len()
        );

        Ok(Self {
            bridge,
            todos,
            watchers: Watchers::new(),
        })
    }

    /// Returns the collection, newest first.
    pub fn list(&self) -> &[Todo] {
        &self.todos
    }

    /// Returns the todo with the given id, if present.
    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    /// Creates an open todo from `text` and prepends it.
    pub fn add(&mut self, text: impl Into<String>) -> StoreResult<TodoId> {
        let todo = Todo::new(text);
        let id = todo.id;
        self.todos.insert(0, todo);

        self.persist()?;
        self.watchers.notify();
        Ok(id)
    }

    /// Flips `completed` on the matching todo. Unknown ids are skipped.
    pub fn toggle(&mut self, id: TodoId) -> StoreResult<()> {
        if let Some(todo) = self.todos.iter_mut().find(|todo| todo.id == id) {
            todo.completed = !todo.completed;
        }

        self.persist()?;
        self.watchers.notify();
        Ok(())
    }

    /// Replaces `text` on the matching todo, leaving `completed` and
    /// `created_at` untouched. Unknown ids are skipped.
    pub fn update(&mut self, id: TodoId, text: impl Into<String>) -> StoreResult<()> {
        if let Some(todo) = self.todos.iter_mut().find(|todo| todo.id == id) {
            todo.text = text.into();
        }

        self.persist()?;
        self.watchers.notify();
        Ok(())
    }

    /// Removes the matching todo. Unknown ids are a no-op.
    pub fn delete(&mut self, id: TodoId) -> StoreResult<()> {
        self.todos.retain(|todo| todo.id != id);
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
        let raw = encode_payload(&self.todos)?;
        self.bridge.save(TODOS_KEY, &raw)?;
        Ok(())
    }
}
