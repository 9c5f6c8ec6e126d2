//! HTTP server initialization and runtime setup.
//!
//! Handles the database pool, service wiring, and Axum server lifecycle.

use crate::application::services::{AuthService, LinkService};
use crate::config::Config;
use crate::domain::session::SessionCodec;
use crate::infrastructure::persistence::{self, SqliteLinkRepository};
use crate::infrastructure::session::HmacSessionCodec;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite connection pool (creating the database file if needed)
/// - Schema migrations
/// - Session codec, link and auth services
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Session key cannot be generated
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = persistence::connect(&config.database_url, config.db_max_connections).await?;
    tracing::info!("Connected to database");

    let codec: Arc<dyn SessionCodec> = match &config.session_secret {
        Some(secret) => Arc::new(HmacSessionCodec::from_secret(secret)),
        None => {
            tracing::info!("SESSION_SECRET not set; sessions end on restart");
            Arc::new(HmacSessionCodec::generate().context("Failed to generate session key")?)
        }
    };

    let link_repository = Arc::new(SqliteLinkRepository::new(Arc::new(pool.clone())));
    let link_service = Arc::new(LinkService::new(link_repository, config.code_length));
    let auth_service = Arc::new(AuthService::new(codec, config.auth_settings()));

    let state = AppState::new(
        link_service,
        auth_service,
        config.site_url(),
        config.secure_cookies(),
    );

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr()
        .parse()
        .with_context(|| format!("Invalid listen address {}", config.listen_addr()))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("Server stopped");

    Ok(())
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
