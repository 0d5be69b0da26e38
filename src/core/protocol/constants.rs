//! Protocol constants for conditional-cache negotiation.

/// Header names consumed and produced by the negotiator.
///
/// Names are lower-case because request snapshots store header names
/// lower-cased for case-insensitive lookup.
pub mod headers {
    /// Validator list the client already holds.
    pub const IF_NONE_MATCH: &str = "if-none-match";
    /// Current validator token for the resource.
    pub const ETAG: &str = "etag";
    /// Fixed last-modification marker, paired with `no-cache`.
    pub const LAST_MODIFIED: &str = "last-modified";
    /// Freshness directive: max-age hint plus mandatory revalidation.
    pub const CACHE_CONTROL: &str = "cache-control";
    /// Declared body length on fresh responses.
    pub const CONTENT_LENGTH: &str = "content-length";
}

/// Status codes produced by the negotiator.
pub mod status {
    /// Fresh content delivered.
    pub const OK: u16 = 200;
    /// Client cache authorized, no body follows.
    pub const NOT_MODIFIED: u16 = 304;
}

/// Defaults reproducing the reference deployment.
pub mod defaults {
    /// Validator token served as `ETag` and matched against `If-None-Match`.
    pub const ETAG: &str = "777";
    /// Fixed `Last-Modified` marker.
    pub const LAST_MODIFIED: &str = "123";
    /// `max-age` hint carried alongside `no-cache`.
    pub const MAX_AGE: u64 = 200_000_000;
    /// TCP port the listener binds.
    pub const PORT: u16 = 8899;
    /// Route served by the negotiator.
    pub const ROUTE: &str = "/test";
}
