//! Rate feed error types.
//!
//! These errors never cross the [`crate::RateService`] boundary; they only
//! drive the fallback from one source tier to the next.

use thiserror::Error;

/// Errors that can occur while acquiring rates from one source tier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedError {
    /// The request could not be completed (DNS, connect, timeout, body
    /// read).
    #[error("Transport error: {0}")]
    Transport(String),

    /// The endpoint answered with a non-success status.
    #[error("Unexpected HTTP status: {0}")]
    Status(u16),

    /// The body was not the expected `{ "rates": { ... } }` shape.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The USD-quoting secondary payload carries no usable MAD entry, so
    /// MAD-based rates cannot be derived from it.
    #[error("Secondary payload has no MAD anchor")]
    MissingAnchor,
}
