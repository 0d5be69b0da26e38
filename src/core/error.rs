//! Error types for conditional-cache negotiation.
//!
//! # Error Categories
//!
//! | Category | Variants | Retryable |
//! |----------|----------|-----------|
//! | Body | `InvalidUtf8` | No |
//! | Network | `Io` | Yes |
//! | Protocol | `HeaderParse`, `Protocol` | No |
//! | Configuration | `Config` | No |
//!
//! All failures are handled uniformly at the request boundary: logged and
//! dropped, with no second response attempt. [`RevalidError::is_retryable()`]
//! records which failures a client could safely retry.

use std::io;
use thiserror::Error;

/// Result type for negotiation operations.
pub type Result<T> = std::result::Result<T, RevalidError>;

/// Errors that can occur while negotiating a conditional request.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RevalidError {
    /// Network I/O error (connection failed, read/write error, etc.).
    ///
    /// These errors are typically retryable.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Failed to parse a conditional header.
    ///
    /// Indicates a malformed `If-None-Match` entity-tag list.
    #[error("Header parse error: {0}")]
    HeaderParse(String),

    /// Request body is not valid UTF-8.
    ///
    /// Non-GET parameter extraction reads the whole body as text; bytes
    /// that do not decode end up here.
    #[error("Invalid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// Protocol contract violation.
    ///
    /// A response envelope that breaks the HTTP exchange rules, e.g. a
    /// 304 carrying body bytes or a declared length. Fatal for the
    /// request, never retried.
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// Configuration error in server setup.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl RevalidError {
    /// Check if this error is retryable.
    ///
    /// Returns `true` for transient I/O failures. Protocol violations,
    /// undecodable bodies, and configuration errors are permanent.
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, RevalidError::Io(_))
    }
}
