//! HTTP transport layer for Constant Contact API communication.
//!
//! This module provides the foundational HTTP layer for making
//! authenticated requests to the Constant Contact API.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async transport client
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A raw response (status, headers, body text)
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`TransportError`]: Network-level failures
//!
//! The transport performs exactly one network call per request and never
//! interprets response bodies. Non-2xx classification and JSON decoding
//! happen in [`crate::api`], and there is no retry logic anywhere in the
//! SDK; callers wanting retries or timeouts configure them around this
//! boundary.

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{InvalidHttpRequestError, TransportError};
pub use http_client::{HttpClient, HttpClientError, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
