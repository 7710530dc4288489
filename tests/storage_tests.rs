//! LinkStore tests against temporary SQLite files

use sea_orm::ConnectionTrait;
use serde_json::json;
use tempfile::TempDir;

use sluglink::errors::SluglinkError;
use sluglink::storage::{Link, LinkKind, LinkStore, LinkTarget};

async fn create_store(temp_dir: &TempDir) -> LinkStore {
    let db_path = temp_dir.path().join("storage_test.db");
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());

    let store = LinkStore::connect(&db_url, 1, 8)
        .await
        .expect("Failed to connect");
    store.ensure_schema().await.expect("Failed to apply schema");
    store
}

#[tokio::test]
async fn test_connect_rejects_empty_url() {
    let err = LinkStore::connect("", 1, 8).await.err().unwrap();
    assert!(matches!(err, SluglinkError::DatabaseConfig(_)));
}

#[tokio::test]
async fn test_connect_rejects_unknown_scheme() {
    let err = LinkStore::connect("redis://localhost", 1, 8)
        .await
        .err()
        .unwrap();
    assert!(matches!(err, SluglinkError::DatabaseConfig(_)));
}

#[tokio::test]
async fn test_connect_bare_path_creates_file() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("bare.db");

    let store = LinkStore::connect(db_path.to_str().unwrap(), 1, 8)
        .await
        .unwrap();
    store.ensure_schema().await.unwrap();

    assert!(db_path.exists());
    assert_eq!(store.backend_name(), "sqlite");
}

#[tokio::test]
async fn test_ensure_schema_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let store = create_store(&temp_dir).await;

    store.upsert(&Link::url("keep", "https://example.com")).await.unwrap();
    store.ensure_schema().await.unwrap();
    store.ensure_schema().await.unwrap();

    assert!(store.lookup("keep").await.unwrap().is_some());
}

#[tokio::test]
async fn test_lookup_before_schema_fails() {
    let temp_dir = TempDir::new().unwrap();
    let db_url = format!(
        "sqlite://{}?mode=rwc",
        temp_dir.path().join("empty.db").display()
    );
    let store = LinkStore::connect(&db_url, 1, 8).await.unwrap();

    let err = store.lookup("x").await.unwrap_err();
    assert!(matches!(err, SluglinkError::DatabaseOperation(_)));
}

#[tokio::test]
async fn test_upsert_and_lookup() {
    let temp_dir = TempDir::new().unwrap();
    let store = create_store(&temp_dir).await;

    store.upsert(&Link::url("ex", "https://example.com")).await.unwrap();
    store
        .upsert(&Link::profile("me", json!({"name": "A"})))
        .await
        .unwrap();

    let url = store.lookup("ex").await.unwrap().unwrap();
    assert_eq!(url.kind(), LinkKind::Url);
    assert_eq!(url.target, LinkTarget::Url("https://example.com".to_string()));

    let profile = store.lookup("me").await.unwrap().unwrap();
    assert_eq!(profile.kind(), LinkKind::Profile);
    assert_eq!(profile.target, LinkTarget::Profile(json!({"name": "A"})));

    assert!(store.lookup("missing").await.unwrap().is_none());
    assert_eq!(store.count().await.unwrap(), 2);
}

#[tokio::test]
async fn test_upsert_overwrites_kind_and_target() {
    let temp_dir = TempDir::new().unwrap();
    let store = create_store(&temp_dir).await;

    store
        .upsert(&Link::profile("flip", json!({"v": 1})))
        .await
        .unwrap();
    store.upsert(&Link::url("flip", "https://a.example")).await.unwrap();
    store.upsert(&Link::url("flip", "https://b.example")).await.unwrap();

    let link = store.lookup("flip").await.unwrap().unwrap();
    assert_eq!(link, Link::url("flip", "https://b.example"));
    assert_eq!(store.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_concurrent_upserts_leave_one_row() {
    let temp_dir = TempDir::new().unwrap();
    let store = create_store(&temp_dir).await;

    let mut handles = Vec::new();
    for i in 0..8 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            store
                .upsert(&Link::url("race", format!("https://example.com/{}", i)))
                .await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(store.count().await.unwrap(), 1);
    let link = store.lookup("race").await.unwrap().unwrap();
    assert!(matches!(link.target, LinkTarget::Url(ref u) if u.starts_with("https://example.com/")));
}

#[tokio::test]
async fn test_unknown_kind_row_is_corrupt() {
    let temp_dir = TempDir::new().unwrap();
    let store = create_store(&temp_dir).await;

    store
        .get_db()
        .execute_unprepared("INSERT INTO links (slug, kind, target) VALUES ('bad', 'blob', 'x')")
        .await
        .unwrap();

    let err = store.lookup("bad").await.unwrap_err();
    assert!(matches!(err, SluglinkError::CorruptRecord(_)));
}

#[tokio::test]
async fn test_kind_defaults_to_url() {
    let temp_dir = TempDir::new().unwrap();
    let store = create_store(&temp_dir).await;

    store
        .get_db()
        .execute_unprepared(r#"INSERT INTO links (slug, target) VALUES ('legacy', '{"a":1}')"#)
        .await
        .unwrap();

    let link = store.lookup("legacy").await.unwrap().unwrap();
    assert_eq!(link.target, LinkTarget::Url(r#"{"a":1}"#.to_string()));
}

#[tokio::test]
async fn test_ping_and_close() {
    let temp_dir = TempDir::new().unwrap();
    let store = create_store(&temp_dir).await;

    store.ping().await.unwrap();
    store.close().await;
    assert!(store.ping().await.is_err());
}

#[tokio::test]
async fn test_in_memory_store_keeps_rows() {
    let store = LinkStore::connect(":memory:", 1, 8).await.unwrap();
    store.ensure_schema().await.unwrap();

    store.upsert(&Link::url("mem", "https://example.com")).await.unwrap();

    // 多次取连接后数据仍在
    for _ in 0..5 {
        let link = store.lookup("mem").await.unwrap().unwrap();
        assert_eq!(link, Link::url("mem", "https://example.com"));
    }
    assert_eq!(store.count().await.unwrap(), 1);
}
