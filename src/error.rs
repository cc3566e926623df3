//! Error types for the aggregation service
//!
//! Errors fall into two tiers at this level: caller input errors, which are
//! raised before any network call, and upstream/transport errors, which the
//! aggregation layer downgrades to "skip this source". Decode-level problems
//! never reach this enum; they are handled next to the renderer decoding.

use thiserror::Error;

/// Result type alias using the service error type
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The caller supplied an unusable parameter (empty query, missing region)
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Upstream API answered with a non-success HTTP status
    #[error("upstream API returned status {status}")]
    UpstreamStatus { status: u16 },

    /// Transport-level failure from the HTTP client
    #[error("upstream request failed: {0}")]
    Http(#[from] reqwest::Error),
}

impl Error {
    /// Create an InvalidRequest error with a message
    pub fn invalid_request<S: Into<String>>(message: S) -> Self {
        Error::InvalidRequest(message.into())
    }

    /// Whether the error originated upstream rather than from caller input.
    ///
    /// The aggregator uses this to decide between skipping a source and
    /// propagating the error to the caller.
    pub fn is_upstream(&self) -> bool {
        matches!(self, Error::UpstreamStatus { .. } | Error::Http(_))
    }
}
