#![allow(dead_code)]

use sqlx::SqlitePool;
use std::sync::Arc;
use url_shortener::application::services::{AuthService, AuthSettings, LinkService};
use url_shortener::infrastructure::persistence::SqliteLinkRepository;
use url_shortener::infrastructure::session::HmacSessionCodec;
use url_shortener::state::AppState;

pub const ADMIN_USERNAME: &str = "testadmin";
pub const ADMIN_PASSWORD: &str = "testpassword";
pub const API_KEY: &str = "test-api-key";
pub const SITE_URL: &str = "http://sho.rt";

pub async fn create_test_link(pool: &SqlitePool, code: &str, url: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO links (short_code, long_url) VALUES (?1, ?2) RETURNING id")
        .bind(code)
        .bind(url)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn times_accessed(pool: &SqlitePool, code: &str) -> i64 {
    sqlx::query_scalar("SELECT times_accessed FROM links WHERE short_code = ?1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn link_count(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM links")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    let pool = Arc::new(pool);

    let link_repo = Arc::new(SqliteLinkRepository::new(pool));
    let link_service = Arc::new(LinkService::new(link_repo, 6));
    let auth_service = Arc::new(AuthService::new(
        Arc::new(HmacSessionCodec::from_secret("test-session-secret")),
        AuthSettings {
            admin_username: ADMIN_USERNAME.to_string(),
            admin_password: ADMIN_PASSWORD.to_string(),
            api_key: API_KEY.to_string(),
            session_ttl_seconds: 3600,
        },
    ));

    AppState::new(link_service, auth_service, SITE_URL, true)
}

/// `Cookie` header value carrying a valid admin session.
pub fn session_cookie(state: &AppState) -> String {
    let token = state
        .auth_service
        .login(ADMIN_USERNAME, ADMIN_PASSWORD)
        .unwrap();
    format!("session_token={}", token)
}
