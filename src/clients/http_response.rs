//! HTTP response types for the Constant Contact API SDK.
//!
//! This module provides the [`HttpResponse`] type, a raw view of what the
//! server returned. The transport does not interpret the body; decoding and
//! error classification happen in [`crate::api`].

use std::collections::HashMap;

/// A raw HTTP response from the Constant Contact API.
///
/// Carries the status code, headers, and the body as text. Whether the body
/// is an error payload, a resource, or empty is decided by the error mapper
/// and the JSON codec downstream.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub status: u16,
    /// Response headers (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body text. Empty for bodyless responses (e.g. 204).
    pub body: String,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(status: u16, headers: HashMap<String, Vec<String>>, body: String) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.status >= 200 && self.status <= 299
    }

    /// Returns `true` if the body is empty or whitespace only.
    ///
    /// Some endpoints legitimately return an empty 2xx body, e.g. a tracking
    /// summary that the server has not produced yet, or a DELETE acknowledged
    /// with 204.
    #[must_use]
    pub fn is_body_empty(&self) -> bool {
        self.body.trim().is_empty()
    }

    /// Returns the first value of the given header (lowercase name), if present.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}
