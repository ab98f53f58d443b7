use lekh_core::db::{open_db, open_db_in_memory};
use lekh_core::{Note, NotesStore, SqliteKvBridge, TodoStore, NOTES_KEY, TODOS_KEY};
use rusqlite::Connection;

#[test]
fn collections_survive_a_process_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lekh.db");

    let note = Note::new("persisted", "survives restarts");
    let note_id = note.id;
    let todo_id;

    {
        let conn = open_db(&path).unwrap();
        let mut notes = NotesStore::load(SqliteKvBridge::new(&conn)).unwrap();
        let mut todos = TodoStore::load(SqliteKvBridge::new(&conn)).unwrap();

        notes.save(note).unwrap();
        todo_id = todos.add("reload me").unwrap();
    }

    let conn = open_db(&path).unwrap();
    let notes = NotesStore::load(SqliteKvBridge::new(&conn)).unwrap();
    let todos = TodoStore::load(SqliteKvBridge::new(&conn)).unwrap();

    let loaded_note = notes.get(note_id).unwrap();
    assert_eq!(loaded_note.title, "persisted");
    assert_eq!(loaded_note.content, "survives restarts");

    let loaded_todo = todos.get(todo_id).unwrap();
    assert_eq!(loaded_todo.text, "reload me");
    assert!(!loaded_todo.completed);
}

#[test]
fn reloading_from_the_same_bridge_deep_equals_the_saved_state() {
    let conn = open_db_in_memory().unwrap();

    let saved = {
        let mut store = NotesStore::load(SqliteKvBridge::new(&conn)).unwrap();
        store.save(Note::new("one", "1")).unwrap();
        store.save(Note::new("two", "2")).unwrap();
        store.list().to_vec()
    };

    let reloaded = NotesStore::load(SqliteKvBridge::new(&conn)).unwrap();
    assert_eq!(reloaded.list(), saved.as_slice());
}

#[test]
fn corrupt_notes_payload_falls_back_to_empty() {
    let conn = open_db_in_memory().unwrap();
    seed_raw_value(&conn, NOTES_KEY, "definitely not json");

    let store = NotesStore::load(SqliteKvBridge::new(&conn)).unwrap();
    assert!(store.list().is_empty());
}

#[test]
fn corrupt_todos_payload_falls_back_to_empty() {
    let conn = open_db_in_memory().unwrap();
    seed_raw_value(&conn, TODOS_KEY, "[1, 2, oops");

    let store = TodoStore::load(SqliteKvBridge::new(&conn)).unwrap();
    assert!(store.list().is_empty());
}

#[test]
fn payload_from_a_newer_binary_falls_back_to_empty() {
    let conn = open_db_in_memory().unwrap();
    seed_raw_value(&conn, NOTES_KEY, r#"{"version": 99, "data": []}"#);

    let store = NotesStore::load(SqliteKvBridge::new(&conn)).unwrap();
    assert!(store.list().is_empty());
}

#[test]
fn a_fresh_fallback_does_not_clobber_storage_until_the_next_mutation() {
    let conn = open_db_in_memory().unwrap();
    seed_raw_value(&conn, NOTES_KEY, "garbage");

    let mut store = NotesStore::load(SqliteKvBridge::new(&conn)).unwrap();
    // Loading alone leaves the stored value untouched...
    let raw: String = conn
        .query_row("SELECT value FROM kv WHERE key = ?1;", [NOTES_KEY], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(raw, "garbage");

    // ...but the first mutation overwrites it with a valid payload.
    store.save(Note::new("fresh start", "")).unwrap();
    let reloaded = NotesStore::load(SqliteKvBridge::new(&conn)).unwrap();
    assert_eq!(reloaded.list().len(), 1);
}

fn seed_raw_value(conn: &Connection, key: &str, value: &str) {
    conn.execute(
        "INSERT INTO kv (key, value) VALUES (?1, ?2);",
        rusqlite::params![key, value],
    )
    .unwrap();
}
