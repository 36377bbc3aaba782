#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! Integration tests for `JsonFileStore`.

use appconsole_app::adapters::{JsonFileStore, STORE_FILE};
use appconsole_core::traits::{load_json, save_json, KeyValueStore};

#[tokio::test]
async fn values_survive_a_new_instance() {
    let tmp = tempfile::tempdir().expect("failed to create temp dir");
    {
        let store = JsonFileStore::in_dir(tmp.path());
        store.set("adminSessionKey", "sk-1").await.unwrap();
        store.set("sidebarOpen", "false").await.unwrap();
    }

    let store = JsonFileStore::in_dir(tmp.path());
    assert_eq!(store.get("adminSessionKey").await.unwrap().as_deref(), Some("sk-1"));
    assert_eq!(store.get("sidebarOpen").await.unwrap().as_deref(), Some("false"));
    assert_eq!(store.get("missing").await.unwrap(), None);
}

#[tokio::test]
async fn remove_is_persisted_and_idempotent() {
    let tmp = tempfile::tempdir().unwrap();
    let store = JsonFileStore::in_dir(tmp.path());
    store.set("k", "v").await.unwrap();
    store.remove("k").await.unwrap();
    store.remove("k").await.unwrap();

    let reopened = JsonFileStore::in_dir(tmp.path());
    assert_eq!(reopened.get("k").await.unwrap(), None);
}

#[tokio::test]
async fn missing_directories_are_created() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("nested").join("appconsole");
    let store = JsonFileStore::in_dir(&dir);
    store.set("k", "v").await.unwrap();
    assert!(dir.join(STORE_FILE).exists());
}

#[tokio::test]
async fn corrupt_file_starts_empty() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join(STORE_FILE), "{not json").unwrap();

    let store = JsonFileStore::in_dir(tmp.path());
    assert_eq!(store.get("k").await.unwrap(), None);
    store.set("k", "v").await.unwrap();
    assert_eq!(store.get("k").await.unwrap().as_deref(), Some("v"));
}

#[tokio::test]
async fn json_helpers_round_trip_through_the_file() {
    let tmp = tempfile::tempdir().unwrap();
    let store = JsonFileStore::in_dir(tmp.path());
    save_json(&store, "loginAttempts:admin", &vec![1_i64, 2, 3])
        .await
        .unwrap();

    let reopened = JsonFileStore::in_dir(tmp.path());
    let attempts: Option<Vec<i64>> = load_json(&reopened, "loginAttempts:admin").await.unwrap();
    assert_eq!(attempts, Some(vec![1, 2, 3]));
}

#[tokio::test]
async fn failed_write_leaves_the_old_value() {
    let tmp = tempfile::tempdir().unwrap();
    let store = JsonFileStore::in_dir(tmp.path());
    store.set("adminSessionKey", "old").await.unwrap();

    let path = tmp.path().join(STORE_FILE);
    std::fs::remove_file(&path).unwrap();
    std::fs::create_dir(&path).unwrap();

    assert!(store.set("adminSessionKey", "abc").await.is_err());
    assert_eq!(store.get("adminSessionKey").await.unwrap().as_deref(), Some("old"));
    assert!(store.remove("adminSessionKey").await.is_err());
    assert_eq!(store.get("adminSessionKey").await.unwrap().as_deref(), Some("old"));
}

#[tokio::test]
async fn writes_leave_no_temp_file_behind() {
    let tmp = tempfile::tempdir().unwrap();
    let store = JsonFileStore::in_dir(tmp.path());
    store.set("k", "v").await.unwrap();
    store.set("k", "w").await.unwrap();

    let names: Vec<String> = std::fs::read_dir(tmp.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec![STORE_FILE.to_string()]);
    let content = std::fs::read_to_string(tmp.path().join(STORE_FILE)).unwrap();
    assert!(content.contains("\"w\""));
}
