//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//! A `.env` file in the working directory is honored (loaded by `main.rs`).
//!
//! ## Variables
//!
//! - `BASE_URL` - Public base URL of the service (default: `http://localhost`)
//! - `PORT` - Listen port (default: `3001`)
//! - `LISTEN_HOST` - Listen interface (default: `0.0.0.0`)
//! - `IS_DEV` - Development mode: `true` disables the `Secure` cookie flag and
//!   appends the port to the displayed site URL (default: `false`)
//! - `ADMIN_USERNAME` / `ADMIN_PASSWORD` - Admin UI credentials (default: `admin` / `password`)
//! - `API_KEY` - Shared key expected in the `X-API-KEY` header (default: `123456`)
//! - `DATABASE_URL` - SQLite URL (default: `sqlite://data/local.sqlite`)
//! - `DB_MAX_CONNECTIONS` - Pool size (default: 5)
//! - `SESSION_TTL_SECONDS` - Admin session lifetime (default: 3600)
//! - `SESSION_SECRET` - Session signing secret; a random key is used when unset,
//!   so sessions end on restart
//! - `CODE_LENGTH` - Length of generated short codes, 4-32 (default: 6)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;

use crate::application::services::AuthSettings;

const DEFAULT_ADMIN_USERNAME: &str = "admin";
const DEFAULT_ADMIN_PASSWORD: &str = "password";
const DEFAULT_API_KEY: &str = "123456";

/// Upper bound for `SESSION_TTL_SECONDS`: one year.
pub const MAX_SESSION_TTL_SECONDS: i64 = 365 * 24 * 60 * 60;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub port: u16,
    pub listen_host: String,
    pub is_development: bool,
    pub admin_username: String,
    pub admin_password: String,
    pub api_key: String,
    pub database_url: String,
    pub db_max_connections: u32,
    pub session_ttl_seconds: i64,
    pub session_secret: Option<String>,
    pub code_length: usize,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let port = env_or("PORT", "3001")
            .parse()
            .context("PORT must be a valid port number")?;

        let is_development = env::var("IS_DEV")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        let db_max_connections = env_or("DB_MAX_CONNECTIONS", "5")
            .parse()
            .context("DB_MAX_CONNECTIONS must be a number")?;

        let session_ttl_seconds = env_or("SESSION_TTL_SECONDS", "3600")
            .parse()
            .context("SESSION_TTL_SECONDS must be a number")?;

        let code_length = env_or("CODE_LENGTH", "6")
            .parse()
            .context("CODE_LENGTH must be a number")?;

        let session_secret = env::var("SESSION_SECRET").ok().filter(|s| !s.is_empty());

        Ok(Self {
            base_url: env_or("BASE_URL", "http://localhost"),
            port,
            listen_host: env_or("LISTEN_HOST", "0.0.0.0"),
            is_development,
            admin_username: env_or("ADMIN_USERNAME", DEFAULT_ADMIN_USERNAME),
            admin_password: env_or("ADMIN_PASSWORD", DEFAULT_ADMIN_PASSWORD),
            api_key: env_or("API_KEY", DEFAULT_API_KEY),
            database_url: env_or("DATABASE_URL", "sqlite://data/local.sqlite"),
            db_max_connections,
            session_ttl_seconds,
            session_secret,
            code_length,
            log_level: env_or("RUST_LOG", "info"),
            log_format: env_or("LOG_FORMAT", "text"),
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - admin credentials or the API key are empty
    /// - `database_url` is not a SQLite URL
    /// - pool size is zero
    /// - session TTL is outside 1 second to 1 year
    /// - `code_length` is outside 4-32
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if self.admin_username.is_empty() || self.admin_password.is_empty() {
            anyhow::bail!("ADMIN_USERNAME and ADMIN_PASSWORD must not be empty");
        }

        if self.api_key.is_empty() {
            anyhow::bail!("API_KEY must not be empty");
        }

        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }

        if self.session_ttl_seconds <= 0 || self.session_ttl_seconds > MAX_SESSION_TTL_SECONDS {
            anyhow::bail!(
                "SESSION_TTL_SECONDS must be between 1 and {}, got {}",
                MAX_SESSION_TTL_SECONDS,
                self.session_ttl_seconds
            );
        }

        if !(4..=32).contains(&self.code_length) {
            anyhow::bail!(
                "CODE_LENGTH must be between 4 and 32, got {}",
                self.code_length
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Socket address to bind, e.g. `0.0.0.0:3001`.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.listen_host, self.port)
    }

    /// Public site URL used to build short links in the admin UI.
    ///
    /// In development mode the port is appended to `BASE_URL`.
    pub fn site_url(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        if self.is_development {
            format!("{}:{}", base, self.port)
        } else {
            base.to_string()
        }
    }

    /// Whether session cookies carry the `Secure` attribute.
    pub fn secure_cookies(&self) -> bool {
        !self.is_development
    }

    /// Returns true if any credential still has its built-in default value.
    pub fn uses_default_credentials(&self) -> bool {
        self.admin_password == DEFAULT_ADMIN_PASSWORD || self.api_key == DEFAULT_API_KEY
    }

    /// Credentials and session policy for the authentication service.
    pub fn auth_settings(&self) -> AuthSettings {
        AuthSettings {
            admin_username: self.admin_username.clone(),
            admin_password: self.admin_password.clone(),
            api_key: self.api_key.clone(),
            session_ttl_seconds: self.session_ttl_seconds,
        }
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr());
        tracing::info!("  Site URL: {}", self.site_url());
        tracing::info!("  Development mode: {}", self.is_development);
        tracing::info!("  Database: {}", self.database_url);
        tracing::info!("  Admin user: {}", self.admin_username);
        tracing::info!("  API key: {}", mask_secret(&self.api_key));
        tracing::info!(
            "  Session: {}s, {}",
            self.session_ttl_seconds,
            if self.session_secret.is_some() {
                "configured secret"
            } else {
                "random key"
            }
        );
        tracing::info!("  Code length: {}", self.code_length);
        tracing::info!("  Log format: {}", self.log_format);

        if !self.is_development && self.uses_default_credentials() {
            tracing::warn!("Default admin password or API key in use; set ADMIN_PASSWORD and API_KEY");
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Masks a secret for logging, keeping only its first two characters.
fn mask_secret(secret: &str) -> String {
    let visible: String = secret.chars().take(2).collect();
    format!("{}***", visible)
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if variables are malformed or validation fails.
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
