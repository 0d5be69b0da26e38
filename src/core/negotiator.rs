//! The conditional cache negotiator.
//!
//! For each request the negotiator answers one question: is the client's
//! cached copy still valid? It inspects the `If-None-Match` entity-tag
//! list (case-insensitive lookup) and compares it against the configured
//! validator token.
//!
//! | `If-None-Match` | Result |
//! |-----------------|--------|
//! | absent | `Fresh`, body rendered from the request |
//! | contains the current token | `NotModified` |
//! | present, token not contained | `Fresh`, same as absent |
//!
//! The negotiator is stateless: its only configuration is the immutable
//! [`CacheValidator`], so it is safe to share across worker tasks without
//! locking.
//!
//! ```
//! use revalid_rs::{CacheNegotiator, CacheValidator, RequestSnapshot};
//!
//! let negotiator = CacheNegotiator::new(CacheValidator::default());
//! let request = RequestSnapshot::new("GET", "/test").with_header("If-None-Match", "777");
//! assert!(negotiator.negotiate(&request).unwrap().is_not_modified());
//! ```

use crate::core::error::Result;
use crate::core::protocol::{self, constants::headers};
use crate::core::render;
use crate::core::types::{CacheValidator, NegotiationResult, RequestSnapshot, ResponseEnvelope};

/// Decides between fresh content and a not-modified signal.
#[derive(Clone, Debug)]
pub struct CacheNegotiator {
    validator: CacheValidator,
}

impl CacheNegotiator {
    #[must_use]
    pub fn new(validator: CacheValidator) -> Self {
        CacheNegotiator { validator }
    }

    #[inline]
    #[must_use]
    pub fn validator(&self) -> &CacheValidator {
        &self.validator
    }

    /// Decide whether the client's cached copy is still valid.
    ///
    /// # Errors
    ///
    /// `HeaderParse` for a malformed entity-tag list; `InvalidUtf8` when
    /// fresh-body rendering reads an undecodable request body.
    pub fn negotiate(&self, request: &RequestSnapshot) -> Result<NegotiationResult> {
        let Some(raw) = request.header(headers::IF_NONE_MATCH) else {
            return Ok(NegotiationResult::Fresh(render::render_echo(request)?));
        };

        let tags = protocol::parse_entity_tags(raw)?;
        if tags.iter().any(|tag| self.validator.matches(tag)) {
            return Ok(NegotiationResult::NotModified);
        }
        Ok(NegotiationResult::Fresh(render::render_echo(request)?))
    }

    /// Full pipeline: decide, build the envelope, stamp the validator
    /// headers, and enforce the exchange contract.
    ///
    /// Every envelope, 200 or 304, carries `Cache-Control`,
    /// `Last-Modified`, and `ETag`; the headers are in place before the
    /// listener finalizes any status or length.
    pub fn respond(&self, request: &RequestSnapshot) -> Result<ResponseEnvelope> {
        let envelope = ResponseEnvelope::from_negotiation(self.negotiate(request)?)
            .with_header(headers::CACHE_CONTROL, self.validator.cache_control())
            .with_header(headers::LAST_MODIFIED, self.validator.last_modified.clone())
            .with_header(headers::ETAG, self.validator.etag.clone());
        envelope.validate()?;
        Ok(envelope)
    }
}
