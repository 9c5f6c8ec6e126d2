mod common;

use axum::ServiceExt;
use axum::extract::Request;
use axum::http::StatusCode;
use axum_test::TestServer;
use sqlx::SqlitePool;
use url_shortener::AppState;
use url_shortener::routes::app_router;

/// Serves the same service the binary serves, path normalization included.
fn app_server(pool: SqlitePool) -> (TestServer, AppState) {
    let state = common::create_test_state(pool);
    let app = ServiceExt::<Request>::into_make_service(app_router(state.clone()));
    (TestServer::new(app).unwrap(), state)
}

#[sqlx::test]
async fn test_static_stylesheet_is_served(pool: SqlitePool) {
    let (server, _) = app_server(pool);

    let response = server.get("/static/style.css").await;

    response.assert_status_ok();
    let content_type = response.header("content-type");
    assert!(content_type.to_str().unwrap().starts_with("text/css"));
    assert!(response.text().contains(":root"));
}

#[sqlx::test]
async fn test_missing_static_file_is_not_found(pool: SqlitePool) {
    let (server, _) = app_server(pool);

    server
        .get("/static/missing.css")
        .await
        .assert_status_not_found();
}

#[sqlx::test]
async fn test_trailing_slash_still_requires_session(pool: SqlitePool) {
    let (server, _) = app_server(pool);

    let response = server.get("/shortlinks/").await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/login");
}

#[sqlx::test]
async fn test_trailing_slash_reaches_shortlinks(pool: SqlitePool) {
    common::create_test_link(&pool, "slash", "https://example.com/slash").await;
    let (server, state) = app_server(pool);

    let response = server
        .get("/shortlinks/")
        .add_header("Cookie", common::session_cookie(&state))
        .await;

    response.assert_status_ok();
    assert!(response.text().contains("https://example.com/slash"));
}

#[sqlx::test]
async fn test_trailing_slash_on_short_code_redirects(pool: SqlitePool) {
    common::create_test_link(&pool, "docs", "https://example.com/docs").await;
    let (server, _) = app_server(pool.clone());

    let response = server.get("/docs/").await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "https://example.com/docs");
    assert_eq!(common::times_accessed(&pool, "docs").await, 1);
}
