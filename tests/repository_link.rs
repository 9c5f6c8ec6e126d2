mod common;

use sqlx::SqlitePool;
use std::sync::Arc;
use url_shortener::domain::entities::NewLink;
use url_shortener::domain::repositories::{LinkRepository, StoreError};
use url_shortener::infrastructure::persistence::SqliteLinkRepository;

fn new_link(code: &str, url: &str) -> NewLink {
    NewLink {
        short_code: code.to_string(),
        long_url: url.to_string(),
    }
}

#[sqlx::test]
async fn test_create_link(pool: SqlitePool) {
    let repo = SqliteLinkRepository::new(Arc::new(pool));

    let link = repo
        .create(new_link("test123", "https://example.com"))
        .await
        .unwrap();

    assert!(link.id > 0);
    assert_eq!(link.short_code, "test123");
    assert_eq!(link.long_url, "https://example.com");
    assert_eq!(link.times_accessed, 0);
}

#[sqlx::test]
async fn test_create_duplicate_code(pool: SqlitePool) {
    let repo = SqliteLinkRepository::new(Arc::new(pool));

    repo.create(new_link("dup", "https://one.example.com"))
        .await
        .unwrap();

    let result = repo.create(new_link("dup", "https://two.example.com")).await;

    match result {
        Err(StoreError::DuplicateCode(code)) => assert_eq!(code, "dup"),
        other => panic!("expected DuplicateCode, got {:?}", other),
    }
}

#[sqlx::test]
async fn test_codes_are_case_sensitive(pool: SqlitePool) {
    let repo = SqliteLinkRepository::new(Arc::new(pool));

    repo.create(new_link("Abc", "https://upper.example.com"))
        .await
        .unwrap();
    repo.create(new_link("abc", "https://lower.example.com"))
        .await
        .unwrap();

    let upper = repo.find_by_code("Abc").await.unwrap().unwrap();
    assert_eq!(upper.long_url, "https://upper.example.com");
}

#[sqlx::test]
async fn test_find_by_code(pool: SqlitePool) {
    common::create_test_link(&pool, "abc123", "https://example.com").await;
    let repo = SqliteLinkRepository::new(Arc::new(pool));

    let link = repo.find_by_code("abc123").await.unwrap();

    assert_eq!(link.unwrap().long_url, "https://example.com");
    assert!(repo.find_by_code("notfound").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_find_by_id(pool: SqlitePool) {
    let id = common::create_test_link(&pool, "byid", "https://example.com").await;
    let repo = SqliteLinkRepository::new(Arc::new(pool));

    let link = repo.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(link.short_code, "byid");

    assert!(repo.find_by_id(id + 1000).await.unwrap().is_none());
}

#[sqlx::test]
async fn test_record_visit_increments(pool: SqlitePool) {
    common::create_test_link(&pool, "visit", "https://example.com").await;
    let repo = SqliteLinkRepository::new(Arc::new(pool.clone()));

    let first = repo.record_visit("visit").await.unwrap().unwrap();
    let second = repo.record_visit("visit").await.unwrap().unwrap();

    assert_eq!(first.times_accessed, 1);
    assert_eq!(second.times_accessed, 2);
    assert_eq!(common::times_accessed(&pool, "visit").await, 2);
}

#[sqlx::test]
async fn test_record_visit_unknown_code(pool: SqlitePool) {
    let repo = SqliteLinkRepository::new(Arc::new(pool));

    assert!(repo.record_visit("missing").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_concurrent_visits_are_not_lost(pool: SqlitePool) {
    common::create_test_link(&pool, "busy", "https://example.com").await;
    let repo = Arc::new(SqliteLinkRepository::new(Arc::new(pool.clone())));

    let mut handles = Vec::new();
    for _ in 0..20 {
        let repo = repo.clone();
        handles.push(tokio::spawn(async move {
            repo.record_visit("busy").await.unwrap();
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(common::times_accessed(&pool, "busy").await, 20);
}

#[sqlx::test]
async fn test_list_in_insertion_order(pool: SqlitePool) {
    let repo = SqliteLinkRepository::new(Arc::new(pool));
    assert!(repo.list().await.unwrap().is_empty());

    repo.create(new_link("first", "https://one.example.com"))
        .await
        .unwrap();
    repo.create(new_link("second", "https://two.example.com"))
        .await
        .unwrap();

    let codes: Vec<String> = repo
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|l| l.short_code)
        .collect();

    assert_eq!(codes, vec!["first", "second"]);
}

#[sqlx::test]
async fn test_delete_by_code(pool: SqlitePool) {
    common::create_test_link(&pool, "gone", "https://example.com").await;
    let repo = SqliteLinkRepository::new(Arc::new(pool.clone()));

    assert!(repo.delete_by_code("gone").await.unwrap());
    assert!(!repo.delete_by_code("gone").await.unwrap());
    assert_eq!(common::link_count(&pool).await, 0);
}

#[sqlx::test]
async fn test_set_times_accessed(pool: SqlitePool) {
    let id = common::create_test_link(&pool, "reset", "https://example.com").await;
    let repo = SqliteLinkRepository::new(Arc::new(pool.clone()));

    assert!(repo.set_times_accessed(id, 42).await.unwrap());
    assert_eq!(common::times_accessed(&pool, "reset").await, 42);

    assert!(!repo.set_times_accessed(id + 1000, 1).await.unwrap());
}

#[sqlx::test]
async fn test_ping(pool: SqlitePool) {
    let repo = SqliteLinkRepository::new(Arc::new(pool));

    assert!(repo.ping().await.is_ok());
}
