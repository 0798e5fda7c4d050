//! Error mapping and the unified service error type.
//!
//! The SDK's error taxonomy:
//!
//! - [`InvalidArgumentError`]: client-side precondition violations. These
//!   fail fast in the service layer and never reach the network.
//! - [`UrlError`](crate::api::UrlError): a template placeholder without a
//!   value, raised by the request builder.
//! - [`TransportError`](crate::clients::TransportError): network failures
//!   from the transport client, never reclassified here.
//! - [`ApiError`]: a non-2xx HTTP response, with the structured error
//!   detail the server included if it could be parsed.
//! - [`ServiceError`]: the single error type surfaced by every service
//!   method, wrapping one of the above together with the request URL.
//!
//! Nothing is retried automatically and nothing is silently swallowed:
//! every failure either produces a documented empty/absent result (e.g. a
//! tracking summary the server has not generated yet) or raises.

use serde::Deserialize;
use thiserror::Error;

use crate::api::url::UrlError;
use crate::clients::{HttpClientError, HttpResponse, InvalidHttpRequestError, TransportError};

/// Lower bound for the `limit` query parameter.
pub const LIMIT_MIN: u16 = 1;
/// Upper bound for the `limit` query parameter.
pub const LIMIT_MAX: u16 = 500;

/// A client-side precondition violation.
///
/// Raised by service methods before any network activity.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidArgumentError {
    /// A required identifier was empty.
    #[error("{name} must not be empty")]
    EmptyArgument {
        /// The argument name (e.g. `contact_id`).
        name: &'static str,
    },

    /// The page size was outside the documented range.
    #[error("limit must be between {LIMIT_MIN} and {LIMIT_MAX}, got {limit}")]
    LimitOutOfRange {
        /// The rejected value.
        limit: u16,
    },
}

/// One entry of a structured Constant Contact error body.
///
/// The server reports errors as a JSON array of these objects (occasionally
/// a single bare object):
///
/// ```json
/// [{"error_key": "http.status.not_found", "error_message": "no such contact"}]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error key.
    #[serde(default)]
    pub error_key: Option<String>,
    /// Human-readable message.
    #[serde(default)]
    pub error_message: Option<String>,
}

/// A non-2xx response from the Constant Contact API.
///
/// Constructed only by [`ApiError::classify`] and immediately wrapped into
/// a [`ServiceError`]; never mutated after construction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("API request to {url} failed with status {status}: {message}")]
pub struct ApiError {
    /// The HTTP status code.
    pub status: u16,
    /// Machine-readable error key from the response body, if present.
    pub error_key: Option<String>,
    /// Human-readable message (server-provided, or derived from the status).
    pub message: String,
    /// The request path that produced the error.
    pub url: String,
}

impl ApiError {
    /// Classifies a raw response: `Ok(())` for 2xx, an `ApiError` otherwise.
    ///
    /// A structured error body is parsed when possible; an absent or
    /// unparseable body falls back to a message derived from the status
    /// code.
    ///
    /// # Errors
    ///
    /// Returns the constructed `ApiError` when the status is not 2xx.
    pub fn classify(response: &HttpResponse, url: &str) -> Result<(), Self> {
        if response.is_ok() {
            return Ok(());
        }

        let detail = parse_error_body(&response.body);
        let (error_key, message) = detail.map_or_else(
            || (None, status_message(response.status)),
            |ErrorDetail {
                 error_key,
                 error_message,
             }| {
                (
                    error_key,
                    error_message.unwrap_or_else(|| status_message(response.status)),
                )
            },
        );

        Err(Self {
            status: response.status,
            error_key,
            message,
            url: url.to_string(),
        })
    }
}

/// Parses the first entry of a structured error body, if there is one.
fn parse_error_body(body: &str) -> Option<ErrorDetail> {
    if body.trim().is_empty() {
        return None;
    }

    if let Ok(mut details) = serde_json::from_str::<Vec<ErrorDetail>>(body) {
        if details.is_empty() {
            return None;
        }
        return Some(details.swap_remove(0));
    }

    serde_json::from_str::<ErrorDetail>(body)
        .ok()
        .filter(|d| d.error_key.is_some() || d.error_message.is_some())
}

/// A generic message for a status code when the body carried no detail.
fn status_message(status: u16) -> String {
    let reason = match status {
        400 => "bad request",
        401 => "unauthorized",
        403 => "forbidden",
        404 => "not found",
        406 => "not acceptable",
        409 => "conflict",
        415 => "unsupported media type",
        429 => "too many requests",
        500 => "internal server error",
        503 => "service unavailable",
        _ => "request failed",
    };
    format!("HTTP {status} ({reason})")
}

/// The unified error type surfaced by every service method.
///
/// Callers need only handle this one type; the variant identifies the
/// failure origin and every network-side variant carries the request URL.
///
/// # Example
///
/// ```rust,ignore
/// match tracking.bounces("1100394165290", None, Some(50)).await {
///     Ok(page) => println!("{} bounces", page.results.len()),
///     Err(ServiceError::Api(e)) if e.status == 404 => println!("unknown campaign"),
///     Err(e) => eprintln!("request failed: {e}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A client-side precondition violation; the network was never reached.
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgumentError),

    /// The request URL could not be built.
    #[error(transparent)]
    Url(#[from] UrlError),

    /// The request failed transport-level validation.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// The network call failed.
    #[error("request to {url} failed: {source}")]
    Transport {
        /// The request path that was being fetched.
        url: String,
        /// The underlying transport failure.
        #[source]
        source: TransportError,
    },

    /// The server returned a non-2xx response.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A 2xx body did not match the expected schema.
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        /// The request path that was being fetched.
        url: String,
        /// The underlying decode failure.
        #[source]
        source: serde_json::Error,
    },
}

impl ServiceError {
    /// Wraps a transport-layer failure with its request URL.
    pub(crate) fn from_http_client(error: HttpClientError, url: &str) -> Self {
        match error {
            HttpClientError::InvalidRequest(e) => Self::InvalidRequest(e),
            HttpClientError::Transport(source) => Self::Transport {
                url: url.to_string(),
                source,
            },
        }
    }

    /// Returns the structured API error, if that is what this error wraps.
    #[must_use]
    pub const fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }
}

// Verify ServiceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ServiceError>();
};

/// Validates that an identifier argument is non-empty.
pub(crate) fn require_non_empty(
    value: &str,
    name: &'static str,
) -> Result<(), InvalidArgumentError> {
    if value.trim().is_empty() {
        return Err(InvalidArgumentError::EmptyArgument { name });
    }
    Ok(())
}

/// Validates an optional page size against the documented 1..=500 range.
pub(crate) fn validate_limit(limit: Option<u16>) -> Result<(), InvalidArgumentError> {
    if let Some(limit) = limit {
        if !(LIMIT_MIN..=LIMIT_MAX).contains(&limit) {
            return Err(InvalidArgumentError::LimitOutOfRange { limit });
        }
    }
    Ok(())
}
