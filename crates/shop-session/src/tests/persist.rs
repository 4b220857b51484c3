use crate::tests::fake_api::FakeApi;
use crate::{
    FileSessionStorage, MemorySessionStorage, PersistOnChange, SessionStorage, SessionStore,
};

use std::sync::Arc;

use tempfile::TempDir;

#[tokio::test]
async fn given_persisting_store_when_login_then_record_saved() {
    let storage = Arc::new(MemorySessionStorage::new());
    let mut store = SessionStore::new(FakeApi::alice());
    store.subscribe(PersistOnChange::new(Arc::clone(&storage)));

    store.login("alice", "pw1").await.unwrap();

    let loaded = storage.load().unwrap().session.unwrap();
    assert_eq!(&loaded, store.session());
}

#[tokio::test]
async fn given_persisted_login_when_logout_then_storage_cleared() {
    let storage = Arc::new(MemorySessionStorage::new());
    let mut store = SessionStore::new(FakeApi::alice());
    store.subscribe(PersistOnChange::new(Arc::clone(&storage)));
    store.login("alice", "pw1").await.unwrap();

    store.logout();

    assert!(storage.raw().is_none());
}

#[tokio::test]
async fn given_persisted_login_when_set_access_token_then_new_token_saved() {
    let storage = Arc::new(MemorySessionStorage::new());
    let mut store = SessionStore::new(FakeApi::alice());
    store.subscribe(PersistOnChange::new(Arc::clone(&storage)));
    store.login("alice", "pw1").await.unwrap();

    store.set_access_token("A2");

    let loaded = storage.load().unwrap().session.unwrap();
    assert_eq!(loaded.access.as_deref(), Some("A2"));
    assert_eq!(loaded.refresh.as_deref(), Some("R1"));
}

#[tokio::test]
async fn given_register_when_persisting_then_nothing_saved() {
    let storage = Arc::new(MemorySessionStorage::new());
    let mut store = SessionStore::new(FakeApi::alice());
    store.subscribe(PersistOnChange::new(Arc::clone(&storage)));

    store
        .register(&crate::tests::fake_api::registration("alice"))
        .await
        .unwrap();

    assert!(storage.raw().is_none());
}

#[tokio::test]
async fn given_file_storage_when_restarted_then_session_rehydrated() {
    let temp = TempDir::new().unwrap();
    let storage = FileSessionStorage::new(temp.path().join("session"), "user");

    {
        let mut store = SessionStore::new(FakeApi::alice());
        store.subscribe(PersistOnChange::new(storage.clone()));
        store.login("alice", "pw1").await.unwrap();
    }

    let restored = SessionStore::restore(FakeApi::failing(), &storage, |_| {}).unwrap();

    assert_eq!(restored.session().username(), Some("alice"));
    assert_eq!(restored.session().access.as_deref(), Some("A1"));
}

#[test]
fn given_unwritable_dir_when_persisting_then_store_still_changes() {
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("blocker");
    std::fs::write(&blocker, "not a directory").unwrap();
    let storage = FileSessionStorage::new(blocker.join("session"), "user");

    let mut store = SessionStore::new(FakeApi::alice());
    store.subscribe(PersistOnChange::new(storage));

    store.set_access_token("A1");

    assert_eq!(store.session().access.as_deref(), Some("A1"));
}
