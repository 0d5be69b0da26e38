//! Outcome of revalidating one request.

use bytes::Bytes;

/// What the negotiator decided for a single request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NegotiationResult {
    /// The client's cached copy is current: respond 304 with no body.
    NotModified,
    /// The client holds nothing usable: respond 200 with a freshly
    /// rendered body.
    Fresh(Bytes),
}

impl NegotiationResult {
    #[inline]
    #[must_use]
    pub fn is_not_modified(&self) -> bool {
        matches!(self, NegotiationResult::NotModified)
    }

    /// Body bytes for a fresh result, `None` for not-modified.
    #[must_use]
    pub fn body(&self) -> Option<&Bytes> {
        match self {
            NegotiationResult::NotModified => None,
            NegotiationResult::Fresh(body) => Some(body),
        }
    }
}
