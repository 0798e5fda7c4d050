//! Transport-level error types for the Constant Contact API SDK.
//!
//! This module contains the errors the transport itself can produce:
//!
//! - [`TransportError`]: a network/connection failure from the underlying
//!   HTTP client. Non-2xx responses are *not* transport errors; they are
//!   classified by the error mapper in [`crate::api`].
//! - [`InvalidHttpRequestError`]: a request that fails validation before
//!   anything is sent.

use thiserror::Error;

/// A network or connection failure raised by the transport client.
///
/// Covers connection refused, DNS failure, TLS problems, timeouts, and
/// malformed responses — anything where no usable HTTP response was
/// obtained. The error mapper never reclassifies these.
#[derive(Debug, Error)]
#[error("network error: {source}")]
pub struct TransportError {
    /// The underlying client error.
    #[from]
    source: reqwest::Error,
}

impl TransportError {
    /// Returns `true` if the failure was a timeout.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        self.source.is_timeout()
    }

    /// Returns `true` if the failure occurred while connecting.
    #[must_use]
    pub fn is_connect(&self) -> bool {
        self.source.is_connect()
    }
}

/// Error returned when an HTTP request fails validation before sending.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The request path is empty.
    #[error("Cannot send a request with an empty path.")]
    EmptyPath,

    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_request_error_missing_body() {
        let error = InvalidHttpRequestError::MissingBody {
            method: "post".to_string(),
        };
        assert_eq!(error.to_string(), "Cannot use post without specifying data.");
    }

    #[test]
    fn test_invalid_request_error_empty_path() {
        let error = InvalidHttpRequestError::EmptyPath;
        assert!(error.to_string().contains("empty path"));
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let invalid_error: &dyn std::error::Error = &InvalidHttpRequestError::EmptyPath;
        let _ = invalid_error;
    }
}
