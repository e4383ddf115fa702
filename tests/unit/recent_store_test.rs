//! Unit tests for the SQLite-backed recent-list store.
//!
//! These tests exercise load/save round-trips, the treat-corrupt-as-absent
//! policy, and per-profile key isolation, using in-memory databases.

use std::sync::Arc;

use taqyeem::database::Database;
use taqyeem::managers::recent_store::{RecentStore, SqliteRecentStore};
use taqyeem::types::company::CompanyDescriptor;

fn company(id: &str, rating: f64) -> CompanyDescriptor {
    CompanyDescriptor {
        id: id.to_string(),
        name: format!("{} Inc", id),
        logo: format!("https://cdn.example.com/{}.png", id),
        rating,
        domain: "banking".to_string(),
    }
}

fn setup() -> (Arc<Database>, SqliteRecentStore) {
    let db = Arc::new(Database::open_in_memory().expect("open_in_memory failed"));
    let store = SqliteRecentStore::new(db.clone());
    (db, store)
}

/// With no prior state, load returns the empty list.
#[test]
fn test_load_without_prior_state_is_empty() {
    let (_db, store) = setup();
    assert!(store.load().is_empty());
}

/// save followed by load yields the same entries in the same order.
#[test]
fn test_save_then_load_round_trip() {
    let (_db, store) = setup();

    let list = vec![company("a", 4.5), company("b", 3.0), company("c", 0.0)];
    store.save(&list).expect("save should succeed");

    let loaded = store.load();
    assert_eq!(loaded, list);
}

/// A second save replaces the stored document rather than appending.
#[test]
fn test_save_overwrites_previous_state() {
    let (_db, store) = setup();

    store.save(&[company("a", 4.0)]).unwrap();
    store.save(&[company("b", 2.0)]).unwrap();

    let loaded = store.load();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].id, "b");
}

/// Saving the empty list persists the empty state.
#[test]
fn test_save_empty_list() {
    let (_db, store) = setup();

    store.save(&[company("a", 4.0)]).unwrap();
    store.save(&[]).unwrap();

    assert!(store.load().is_empty());
}

/// Corrupt stored data is treated as absent: load returns the empty list
/// instead of surfacing an error.
#[test]
fn test_corrupt_data_loads_as_empty() {
    let (db, store) = setup();

    db.connection()
        .execute(
            "INSERT OR REPLACE INTO kv_store (key, value, updated_at) VALUES (?1, ?2, 0)",
            rusqlite::params![store.key(), "{not valid json"],
        )
        .unwrap();

    assert!(store.load().is_empty());
}

/// A stored document of the wrong shape also loads as empty.
#[test]
fn test_wrong_shape_loads_as_empty() {
    let (db, store) = setup();

    db.connection()
        .execute(
            "INSERT OR REPLACE INTO kv_store (key, value, updated_at) VALUES (?1, ?2, 0)",
            rusqlite::params![store.key(), r#"{"id": "not-a-list"}"#],
        )
        .unwrap();

    assert!(store.load().is_empty());
}

/// Profile-scoped stores read and write disjoint keys on the same database.
#[test]
fn test_profile_keys_are_isolated() {
    let db = Arc::new(Database::open_in_memory().unwrap());

    let alice = SqliteRecentStore::for_profile(db.clone(), "alice");
    let bassem = SqliteRecentStore::for_profile(db.clone(), "bassem");
    assert_ne!(alice.key(), bassem.key());

    alice.save(&[company("a", 4.0)]).unwrap();

    assert_eq!(alice.load().len(), 1);
    assert!(bassem.load().is_empty());

    // The default-key store is distinct from both profiles.
    let shared = SqliteRecentStore::new(db);
    assert!(shared.load().is_empty());
}
