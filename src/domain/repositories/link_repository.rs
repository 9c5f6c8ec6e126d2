//! Repository trait for short link data access.

use async_trait::async_trait;

use crate::domain::entities::{Link, NewLink};

/// Errors surfaced by link storage.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The unique constraint on `short_code` rejected the insert.
    #[error("short code '{0}' already exists")]
    DuplicateCode(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Repository interface for managing short links.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteLinkRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new link with a zero visit counter.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateCode`] if the short code is already taken.
    async fn create(&self, new_link: NewLink) -> Result<Link, StoreError>;

    /// Finds a link by its database ID.
    async fn find_by_id(&self, id: i64) -> Result<Option<Link>, StoreError>;

    /// Finds a link by its short code without touching the visit counter.
    async fn find_by_code(&self, short_code: &str) -> Result<Option<Link>, StoreError>;

    /// Increments the visit counter of a link and returns the updated row.
    ///
    /// The increment happens in a single statement, so concurrent visits
    /// are never lost.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if the code exists
    /// - `Ok(None)` if not found
    async fn record_visit(&self, short_code: &str) -> Result<Option<Link>, StoreError>;

    /// Lists all links ordered by ID.
    async fn list(&self) -> Result<Vec<Link>, StoreError>;

    /// Deletes a link by its short code.
    ///
    /// Returns `Ok(true)` if a row was removed, `Ok(false)` if nothing matched.
    async fn delete_by_code(&self, short_code: &str) -> Result<bool, StoreError>;

    /// Overwrites the visit counter of a link.
    ///
    /// Returns `Ok(false)` if no link has the given ID.
    async fn set_times_accessed(&self, id: i64, times_accessed: i64) -> Result<bool, StoreError>;

    /// Checks that the underlying database answers queries.
    async fn ping(&self) -> Result<(), StoreError>;
}
