//! Resource validator configuration.
//!
//! A validator is the opaque fingerprint a server hands out as `ETag` and
//! later compares against `If-None-Match` to decide whether a client's
//! cached copy is still current. Here the validator is process-wide
//! configuration, immutable for the life of the process; a real system
//! would compute one per resource.

use crate::core::protocol;
use serde::{Deserialize, Serialize};

/// Immutable validator pair injected into the negotiator at construction.
///
/// Replaces a hardcoded global constant so tests and deployments can vary
/// the token without touching the negotiation logic.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheValidator {
    /// Current version fingerprint, served as `ETag`.
    #[serde(default = "default_etag")]
    pub etag: String,
    /// Fixed `Last-Modified` marker.
    #[serde(default = "default_last_modified")]
    pub last_modified: String,
    /// `max-age` hint carried in `Cache-Control` alongside `no-cache`.
    #[serde(default = "default_max_age")]
    pub max_age: u64,
}

fn default_etag() -> String {
    protocol::defaults::ETAG.to_string()
}

fn default_last_modified() -> String {
    protocol::defaults::LAST_MODIFIED.to_string()
}

fn default_max_age() -> u64 {
    protocol::defaults::MAX_AGE
}

impl Default for CacheValidator {
    fn default() -> Self {
        CacheValidator {
            etag: default_etag(),
            last_modified: default_last_modified(),
            max_age: default_max_age(),
        }
    }
}

impl CacheValidator {
    #[must_use]
    pub fn new(
        etag: impl Into<String>,
        last_modified: impl Into<String>,
        max_age: u64,
    ) -> Self {
        CacheValidator {
            etag: etag.into(),
            last_modified: last_modified.into(),
            max_age,
        }
    }

    /// Check a client-supplied entity-tag against the current token.
    ///
    /// Quoting and the weak `W/` prefix are ignored, so `777`, `"777"`,
    /// and `W/"777"` all revalidate.
    #[inline]
    #[must_use]
    pub fn matches(&self, tag: &str) -> bool {
        protocol::tags_match(&self.etag, tag)
    }

    /// Render the `Cache-Control` value for this validator.
    #[inline]
    #[must_use]
    pub fn cache_control(&self) -> String {
        protocol::format_cache_control(self.max_age)
    }
}
