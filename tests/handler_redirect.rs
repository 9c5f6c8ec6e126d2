mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use sqlx::SqlitePool;
use url_shortener::api::handlers::redirect_handler;
use url_shortener::routes::build_router;

fn redirect_app(pool: SqlitePool) -> Router {
    let state = common::create_test_state(pool);
    Router::new()
        .route("/{code}", get(redirect_handler))
        .with_state(state)
}

#[sqlx::test]
async fn test_redirect_success(pool: SqlitePool) {
    common::create_test_link(&pool, "redirect1", "https://example.com/target").await;
    let server = TestServer::new(redirect_app(pool.clone())).unwrap();

    let response = server.get("/redirect1").await;

    assert_eq!(response.status_code(), 307);
    let location = response.header("location");
    assert_eq!(location, "https://example.com/target");
}

#[sqlx::test]
async fn test_redirect_counts_visits(pool: SqlitePool) {
    common::create_test_link(&pool, "counted", "https://example.com").await;
    let server = TestServer::new(redirect_app(pool.clone())).unwrap();

    for _ in 0..3 {
        server.get("/counted").await;
    }

    assert_eq!(common::times_accessed(&pool, "counted").await, 3);
}

#[sqlx::test]
async fn test_redirect_not_found(pool: SqlitePool) {
    let server = TestServer::new(redirect_app(pool)).unwrap();

    let response = server.get("/nonexistent").await;

    response.assert_status_not_found();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "not_found");
}

#[sqlx::test]
async fn test_redirect_is_case_sensitive(pool: SqlitePool) {
    common::create_test_link(&pool, "CaSe", "https://example.com").await;
    let server = TestServer::new(redirect_app(pool)).unwrap();

    server.get("/case").await.assert_status_not_found();
    assert_eq!(server.get("/CaSe").await.status_code(), 307);
}

#[sqlx::test]
async fn test_favicon_is_not_a_short_code(pool: SqlitePool) {
    common::create_test_link(&pool, "favicon", "https://example.com").await;
    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(build_router(state)).unwrap();

    server.get("/favicon.ico").await.assert_status_not_found();
    assert_eq!(common::times_accessed(&pool, "favicon").await, 0);
}
