//! Link creation, resolution and management service.

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::json;
use std::sync::{Arc, Mutex, PoisonError};

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::{LinkRepository, StoreError};
use crate::error::AppError;
use crate::utils::code_generator::{ALPHANUMERIC, generate_code, validate_custom_code};
use crate::utils::url_validator::validate_url;

/// Attempts at inserting a generated code before giving up.
const MAX_GENERATION_ATTEMPTS: usize = 5;

/// Service for creating, resolving and managing shortened links.
///
/// Uniqueness of short codes is enforced by the repository; this service
/// regenerates random codes when an insert reports a duplicate.
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
    code_length: usize,
    rng: Mutex<StdRng>,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service generating codes of `code_length` characters.
    pub fn new(link_repository: Arc<L>, code_length: usize) -> Self {
        Self::with_rng(link_repository, code_length, StdRng::from_os_rng())
    }

    /// Creates a link service drawing codes from the given RNG.
    pub fn with_rng(link_repository: Arc<L>, code_length: usize, rng: StdRng) -> Self {
        Self {
            link_repository,
            code_length,
            rng: Mutex::new(rng),
        }
    }

    /// Creates a short link for `long_url`.
    ///
    /// An absent or empty `custom_code` means a code is generated.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if:
    /// - URL is not an absolute http(s) URL
    /// - Custom code is invalid
    ///
    /// Returns [`AppError::Conflict`] if the custom code already exists.
    ///
    /// Returns [`AppError::Internal`] if every generated code collided.
    pub async fn create_link(
        &self,
        long_url: &str,
        custom_code: Option<String>,
    ) -> Result<Link, AppError> {
        validate_url(long_url).map_err(|e| {
            AppError::bad_request("Invalid URL", json!({ "reason": e.to_string() }))
        })?;

        if let Some(code) = custom_code.filter(|c| !c.is_empty()) {
            validate_custom_code(&code)?;

            let link = self
                .link_repository
                .create(NewLink {
                    short_code: code,
                    long_url: long_url.to_string(),
                })
                .await?;

            metrics::counter!("links_created_total").increment(1);
            return Ok(link);
        }

        for attempt in 1..=MAX_GENERATION_ATTEMPTS {
            let new_link = NewLink {
                short_code: self.next_code(),
                long_url: long_url.to_string(),
            };

            match self.link_repository.create(new_link).await {
                Ok(link) => {
                    metrics::counter!("links_created_total").increment(1);
                    return Ok(link);
                }
                Err(StoreError::DuplicateCode(code)) => {
                    tracing::warn!(code = %code, attempt, "Generated short code collided, retrying");
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(AppError::internal(
            "Failed to generate unique code",
            json!({ "reason": "Too many collisions" }),
        ))
    }

    /// Resolves a short code to its long URL and counts the visit.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has the code.
    pub async fn resolve(&self, short_code: &str) -> Result<String, AppError> {
        let link = self
            .link_repository
            .record_visit(short_code)
            .await?
            .ok_or_else(|| not_found(short_code))?;

        metrics::counter!("redirects_total").increment(1);
        Ok(link.long_url)
    }

    /// Retrieves a link by its ID.
    pub async fn get_link(&self, id: i64) -> Result<Link, AppError> {
        self.link_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "id": id })))
    }

    /// Retrieves a link by its short code without counting a visit.
    pub async fn get_link_by_code(&self, short_code: &str) -> Result<Link, AppError> {
        self.link_repository
            .find_by_code(short_code)
            .await?
            .ok_or_else(|| not_found(short_code))
    }

    /// Lists every stored link.
    pub async fn list_links(&self) -> Result<Vec<Link>, AppError> {
        Ok(self.link_repository.list().await?)
    }

    /// Deletes a link. Returns `false` if the code did not exist.
    pub async fn delete_link(&self, short_code: &str) -> Result<bool, AppError> {
        Ok(self.link_repository.delete_by_code(short_code).await?)
    }

    /// Overwrites the visit counter of the link with `short_code`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has the code.
    pub async fn set_visit_count(&self, short_code: &str, count: i64) -> Result<Link, AppError> {
        let link = self.get_link_by_code(short_code).await?;

        if !self
            .link_repository
            .set_times_accessed(link.id, count)
            .await?
        {
            return Err(not_found(short_code));
        }

        Ok(Link {
            times_accessed: count,
            ..link
        })
    }

    /// Checks database connectivity.
    pub async fn ping(&self) -> Result<(), AppError> {
        Ok(self.link_repository.ping().await?)
    }

    fn next_code(&self) -> String {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        generate_code(self.code_length, ALPHANUMERIC, &mut *rng)
    }
}

fn not_found(short_code: &str) -> AppError {
    AppError::not_found(
        "Short link not found",
        json!({ "short_code": short_code }),
    )
}
