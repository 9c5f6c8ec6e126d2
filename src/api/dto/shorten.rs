//! DTOs for the link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Link;

/// Request body for `POST /api/shorten`.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenApiRequest {
    /// The URL to shorten (absolute http/https, checked by the link service).
    #[validate(length(min = 1, max = 2048, message = "URL must be 1-2048 characters"))]
    pub url: String,

    /// Optional custom short code; empty means generate one.
    #[serde(default)]
    pub short_code: Option<String>,
}

/// A stored link as returned by the API.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub id: i64,
    pub short_code: String,
    pub long_link: String,
    pub times_accessed: i64,
    pub short_url: String,
}

impl LinkResponse {
    pub fn from_link(link: Link, site_url: &str) -> Self {
        Self {
            short_url: link.short_url(site_url),
            id: link.id,
            short_code: link.short_code,
            long_link: link.long_url,
            times_accessed: link.times_accessed,
        }
    }
}
