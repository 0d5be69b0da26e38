//! Listener-agnostic response envelope.

use crate::core::error::{Result, RevalidError};
use crate::core::protocol::status;
use crate::core::types::NegotiationResult;
use bytes::Bytes;
use std::collections::BTreeMap;

/// The response the negotiator hands to the HTTP listener.
///
/// Plain status/headers/body so the envelope carries no assumption about
/// which HTTP stack writes it. On the wire, headers are serialized before
/// the status line is finalized and the body follows; [`validate`] must
/// pass before any of that happens.
///
/// [`validate`]: ResponseEnvelope::validate
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResponseEnvelope {
    pub status: u16,
    pub headers: BTreeMap<String, String>,
    pub body: Bytes,
}

impl ResponseEnvelope {
    /// A 304 envelope: client cache authorized, explicitly empty body.
    #[must_use]
    pub fn not_modified() -> Self {
        ResponseEnvelope {
            status: status::NOT_MODIFIED,
            headers: BTreeMap::new(),
            body: Bytes::new(),
        }
    }

    /// A 200 envelope delivering fresh content.
    #[must_use]
    pub fn fresh(body: impl Into<Bytes>) -> Self {
        ResponseEnvelope {
            status: status::OK,
            headers: BTreeMap::new(),
            body: body.into(),
        }
    }

    #[must_use]
    pub fn from_negotiation(result: NegotiationResult) -> Self {
        match result {
            NegotiationResult::NotModified => Self::not_modified(),
            NegotiationResult::Fresh(body) => Self::fresh(body),
        }
    }

    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into().to_lowercase(), value.into());
        self
    }

    /// Case-insensitive header lookup.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Declared body length: `None` is the "unknown/absent" sentinel a
    /// 304 must carry; fresh responses declare the exact byte count.
    #[must_use]
    pub fn content_length(&self) -> Option<u64> {
        if self.status == status::NOT_MODIFIED {
            return None;
        }
        Some(self.body.len() as u64)
    }

    /// Enforce the exchange contract before anything is written.
    ///
    /// A 304 with body bytes is a protocol violation; failing here is
    /// fatal for the request, there is no second response attempt.
    pub fn validate(&self) -> Result<()> {
        if self.status == status::NOT_MODIFIED && !self.body.is_empty() {
            return Err(RevalidError::Protocol(format!(
                "304 response must not carry a body ({} bytes)",
                self.body.len()
            )));
        }
        Ok(())
    }

    #[must_use]
    pub fn body_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }

    #[inline]
    #[must_use]
    pub fn is_not_modified(&self) -> bool {
        self.status == status::NOT_MODIFIED
    }
}
