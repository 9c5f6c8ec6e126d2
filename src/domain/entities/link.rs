//! Link entity representing a shortened URL mapping.

/// A stored mapping from a short code to a long URL.
///
/// `times_accessed` is the raw visit counter maintained by the redirect path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub id: i64,
    pub short_code: String,
    pub long_url: String,
    pub times_accessed: i64,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(id: i64, short_code: String, long_url: String, times_accessed: i64) -> Self {
        Self {
            id,
            short_code,
            long_url,
            times_accessed,
        }
    }

    /// Returns the public short URL for this link under `site_url`.
    pub fn short_url(&self, site_url: &str) -> String {
        format!("{}/{}", site_url.trim_end_matches('/'), self.short_code)
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub short_code: String,
    pub long_url: String,
}
