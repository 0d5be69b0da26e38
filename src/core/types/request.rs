//! A fully-read snapshot of one inbound request.

use crate::core::error::Result;
use bytes::Bytes;
use std::collections::BTreeMap;

/// Everything the negotiator needs from a request, captured after the
/// body stream has been consumed in full.
///
/// Header names are stored lower-cased, so lookups are case-insensitive
/// regardless of what casing the client (or the HTTP stack) delivered.
/// Repeated headers are joined with `", "` per HTTP list semantics.
#[derive(Clone, Debug, Default)]
pub struct RequestSnapshot {
    pub method: String,
    pub uri: String,
    pub headers: BTreeMap<String, String>,
    pub body: Bytes,
}

impl RequestSnapshot {
    #[must_use]
    pub fn new(method: impl Into<String>, uri: impl Into<String>) -> Self {
        RequestSnapshot {
            method: method.into(),
            uri: uri.into(),
            headers: BTreeMap::new(),
            body: Bytes::new(),
        }
    }

    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into().to_lowercase();
        let value = value.into();
        self.headers
            .entry(name)
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(&value);
            })
            .or_insert(value);
        self
    }

    #[must_use]
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    /// Case-insensitive header lookup.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_lowercase()).map(String::as_str)
    }

    /// Query component of the URI, if any.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.uri.split_once('?').map(|(_, q)| q)
    }

    /// Extract request parameters.
    ///
    /// GET-like methods read the URI's query component; every other
    /// method reads the whole body as UTF-8 text. The body was consumed
    /// in full before this snapshot was built, so there is no partial
    /// read to race against.
    ///
    /// # Errors
    ///
    /// Returns `InvalidUtf8` when a non-GET body does not decode.
    pub fn params(&self) -> Result<String> {
        if self.is_get_like() {
            return Ok(self.query().unwrap_or_default().to_string());
        }
        Ok(String::from_utf8(self.body.to_vec())?)
    }

    /// GET and HEAD carry parameters in the query string, not the body.
    #[inline]
    #[must_use]
    pub fn is_get_like(&self) -> bool {
        self.method.eq_ignore_ascii_case("GET") || self.method.eq_ignore_ascii_case("HEAD")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========== Header Tests ==========

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let snapshot = RequestSnapshot::new("GET", "/test").with_header("If-None-Match", "777");
        assert_eq!(snapshot.header("if-none-match"), Some("777"));
        assert_eq!(snapshot.header("IF-NONE-MATCH"), Some("777"));
        assert_eq!(snapshot.header("If-None-Match"), Some("777"));
    }

    #[test]
    fn test_header_absent() {
        let snapshot = RequestSnapshot::new("GET", "/test");
        assert_eq!(snapshot.header("if-none-match"), None);
    }

    #[test]
    fn test_repeated_headers_join_as_list() {
        let snapshot = RequestSnapshot::new("GET", "/test")
            .with_header("If-None-Match", "\"123\"")
            .with_header("if-none-match", "\"777\"");
        assert_eq!(snapshot.header("if-none-match"), Some("\"123\", \"777\""));
    }

    // ========== Query Tests ==========

    #[test]
    fn test_query_present() {
        let snapshot = RequestSnapshot::new("GET", "/test?a=1&b=2");
        assert_eq!(snapshot.query(), Some("a=1&b=2"));
    }

    #[test]
    fn test_query_absent() {
        let snapshot = RequestSnapshot::new("GET", "/test");
        assert_eq!(snapshot.query(), None);
    }

    #[test]
    fn test_query_empty() {
        let snapshot = RequestSnapshot::new("GET", "/test?");
        assert_eq!(snapshot.query(), Some(""));
    }

    // ========== Parameter Extraction Tests ==========

    #[test]
    fn test_params_get_reads_query() {
        let snapshot = RequestSnapshot::new("GET", "/test?a=1&b=2").with_body("ignored");
        assert_eq!(snapshot.params().unwrap(), "a=1&b=2");
    }

    #[test]
    fn test_params_get_without_query_is_empty() {
        let snapshot = RequestSnapshot::new("GET", "/test");
        assert_eq!(snapshot.params().unwrap(), "");
    }

    #[test]
    fn test_params_head_reads_query() {
        let snapshot = RequestSnapshot::new("HEAD", "/test?x=9");
        assert_eq!(snapshot.params().unwrap(), "x=9");
    }

    #[test]
    fn test_params_post_reads_body() {
        let snapshot = RequestSnapshot::new("POST", "/test").with_body("a=1&b=2");
        assert_eq!(snapshot.params().unwrap(), "a=1&b=2");
    }

    #[test]
    fn test_params_post_empty_body() {
        let snapshot = RequestSnapshot::new("POST", "/test");
        assert_eq!(snapshot.params().unwrap(), "");
    }

    #[test]
    fn test_params_post_invalid_utf8() {
        let snapshot =
            RequestSnapshot::new("POST", "/test").with_body(Bytes::from_static(&[0xff, 0xfe]));
        assert!(snapshot.params().is_err());
    }

    #[test]
    fn test_is_get_like() {
        assert!(RequestSnapshot::new("GET", "/").is_get_like());
        assert!(RequestSnapshot::new("get", "/").is_get_like());
        assert!(RequestSnapshot::new("HEAD", "/").is_get_like());
        assert!(!RequestSnapshot::new("POST", "/").is_get_like());
        assert!(!RequestSnapshot::new("PUT", "/").is_get_like());
    }
}
