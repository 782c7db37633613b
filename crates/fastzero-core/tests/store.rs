//! In-memory record store behaviour.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use fastzero_core::{InMemoryUserStore, StoreError, UniqueField, UserSchema, UserStore};

fn schema(username: &str, email: &str) -> UserSchema {
    UserSchema::new(username, email, "secret")
}

#[test]
fn insert_assigns_sequential_ids() {
    let store = InMemoryUserStore::new();
    let a = store.insert(&schema("alice", "alice@example.com")).unwrap();
    let b = store.insert(&schema("bob", "bob@example.com")).unwrap();
    assert_eq!(a.id, 1);
    assert_eq!(b.id, 2);
    assert_eq!(store.count().unwrap(), 2);
}

#[test]
fn ids_are_not_reused_after_delete() {
    let store = InMemoryUserStore::new();
    store.insert(&schema("alice", "alice@example.com")).unwrap();
    let b = store.insert(&schema("bob", "bob@example.com")).unwrap();
    store.delete(b.id).unwrap();

    let c = store.insert(&schema("carol", "carol@example.com")).unwrap();
    assert_eq!(c.id, 3);
}

#[test]
fn insert_reports_username_before_email() {
    let store = InMemoryUserStore::new();
    store.insert(&schema("alice", "alice@example.com")).unwrap();

    let both = store.insert(&schema("alice", "alice@example.com")).unwrap_err();
    assert_eq!(both, StoreError::Conflict(UniqueField::Username));

    let email = store.insert(&schema("alicia", "alice@example.com")).unwrap_err();
    assert_eq!(email, StoreError::Conflict(UniqueField::Email));

    // rejected writes do not consume ids
    let ok = store.insert(&schema("bob", "bob@example.com")).unwrap();
    assert_eq!(ok.id, 2);
}

#[test]
fn list_is_creation_ordered() {
    let store = InMemoryUserStore::new();
    assert!(store.list().unwrap().is_empty());

    for name in ["zed", "amy", "mia"] {
        store.insert(&schema(name, &format!("{name}@example.com"))).unwrap();
    }
    let names: Vec<_> = store.list().unwrap().into_iter().map(|u| u.username).collect();
    assert_eq!(names, ["zed", "amy", "mia"]);
}

#[test]
fn update_allows_keeping_own_fields() {
    let store = InMemoryUserStore::new();
    let a = store.insert(&schema("alice", "alice@example.com")).unwrap();

    let updated = store
        .update(a.id, &UserSchema::new("alice", "alice@example.com", "rotated"))
        .unwrap();
    assert_eq!(updated.id, a.id);
    assert_eq!(updated.password, "rotated");
}

#[test]
fn update_rejects_other_users_fields() {
    let store = InMemoryUserStore::new();
    let a = store.insert(&schema("alice", "alice@example.com")).unwrap();
    store.insert(&schema("bob", "bob@example.com")).unwrap();

    let err = store.update(a.id, &schema("bob", "new@example.com")).unwrap_err();
    assert_eq!(err, StoreError::Conflict(UniqueField::Username));
    let err = store.update(a.id, &schema("alice", "bob@example.com")).unwrap_err();
    assert_eq!(err, StoreError::Conflict(UniqueField::Email));

    // failed update left the record untouched
    assert_eq!(store.get(a.id).unwrap().username, "alice");
}

#[test]
fn update_releases_old_values() {
    let store = InMemoryUserStore::new();
    let a = store.insert(&schema("alice", "alice@example.com")).unwrap();
    store.update(a.id, &schema("alicia", "alicia@example.com")).unwrap();

    let reused = store.insert(&schema("alice", "alice@example.com")).unwrap();
    assert_eq!(reused.id, 2);
}

#[test]
fn missing_ids_are_not_found() {
    let store = InMemoryUserStore::new();
    assert_eq!(store.get(7).unwrap_err(), StoreError::NotFound(7));
    assert_eq!(
        store.update(7, &schema("x", "x@example.com")).unwrap_err(),
        StoreError::NotFound(7)
    );
    assert_eq!(store.delete(7).unwrap_err(), StoreError::NotFound(7));
}

#[test]
fn delete_frees_unique_values() {
    let store = InMemoryUserStore::new();
    let a = store.insert(&schema("alice", "alice@example.com")).unwrap();
    store.delete(a.id).unwrap();

    assert_eq!(store.get(a.id).unwrap_err(), StoreError::NotFound(a.id));
    store.insert(&schema("alice", "alice@example.com")).unwrap();
}

#[test]
fn concurrent_inserts_keep_username_unique() {
    use std::sync::Arc;
    use std::thread;

    let store = Arc::new(InMemoryUserStore::new());
    let handles: Vec<_> = (0..16)
        .map(|i| {
            let store = Arc::clone(&store);
            thread::spawn(move || store.insert(&schema("same", &format!("x{i}@a.io"))))
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let winners = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(winners, 1);
    assert!(results
        .iter()
        .filter_map(|r| r.as_ref().err())
        .all(|e| *e == StoreError::Conflict(UniqueField::Username)));

    let rows = store.list().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, 1);
}

#[test]
fn concurrent_inserts_get_distinct_ids() {
    use std::sync::Arc;
    use std::thread;

    let store = Arc::new(InMemoryUserStore::new());
    let handles: Vec<_> = (0..16)
        .map(|i| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                store
                    .insert(&schema(&format!("u{i}"), &format!("u{i}@a.io")))
                    .unwrap()
                    .id
            })
        })
        .collect();

    let mut ids: Vec<u64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    ids.sort_unstable();
    assert_eq!(ids, (1..=16).collect::<Vec<u64>>());
}
