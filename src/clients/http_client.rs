//! HTTP client for Constant Contact API communication.
//!
//! This module provides the [`HttpClient`] type, the transport layer of the
//! SDK. It performs one network call per request, attaches the credential
//! pair, and returns the raw response. It does not interpret response
//! bodies and it does not retry; retry policy, if any, belongs to the
//! caller.

use std::collections::HashMap;

use crate::clients::errors::{InvalidHttpRequestError, TransportError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::CcConfig;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Errors the transport can surface for a single send.
#[derive(Debug, thiserror::Error)]
pub enum HttpClientError {
    /// The request failed validation before anything was sent.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// The network call itself failed.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// HTTP transport client for the Constant Contact API.
///
/// The client handles:
/// - Full URL construction from the configured base URL and request path
/// - Default headers including User-Agent, Accept, and the Bearer token
/// - Attaching the `api_key` query parameter to every request
///
/// It deliberately does *not* parse bodies or classify non-2xx responses;
/// both are the job of [`crate::api`].
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync` and cheap to clone, making it safe to
/// share across async tasks.
#[derive(Clone, Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL (e.g., `https://api.constantcontact.com`).
    base_url: String,
    /// The `api_key` query parameter value attached to every request.
    api_key: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS
    /// initialization failure).
    ///
    /// # Example
    ///
    /// ```rust
    /// use constant_contact_api::{CcConfig, ApiKey, AccessToken};
    /// use constant_contact_api::clients::HttpClient;
    ///
    /// let config = CcConfig::builder()
    ///     .api_key(ApiKey::new("key").unwrap())
    ///     .access_token(AccessToken::new("token").unwrap())
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = HttpClient::new(&config);
    /// ```
    #[must_use]
    pub fn new(config: &CcConfig) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}Constant Contact API Library v{SDK_VERSION} | Rust {rust_version}"
        );

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", config.access_token().as_ref()),
        );

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.base_url().as_ref().to_string(),
            api_key: config.api_key().as_ref().to_string(),
            default_headers,
        }
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends an HTTP request and returns the raw response.
    ///
    /// Performs exactly one network call. The response is returned whatever
    /// its status code; classifying non-2xx responses is the error mapper's
    /// job.
    ///
    /// # Errors
    ///
    /// Returns [`HttpClientError::InvalidRequest`] if the request fails
    /// validation, or [`HttpClientError::Transport`] if the network call
    /// itself fails.
    pub async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpClientError> {
        request.verify()?;

        let path = request.path.trim_start_matches('/');
        let url = format!("{}/{}", self.base_url, path);

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        // Credential query parameter; reqwest appends with ? or & as needed,
        // so next-link paths that already carry a query string stay intact.
        req_builder = req_builder.query(&[("api_key", self.api_key.as_str())]);

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                req_builder = req_builder.header(key, value);
            }
        }

        if let Some(body) = &request.body {
            req_builder = req_builder
                .header("Content-Type", "application/json")
                .body(body.to_string());
        }

        let res = req_builder.send().await.map_err(TransportError::from)?;

        let status = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body = res.text().await.unwrap_or_default();

        if status >= 400 {
            tracing::warn!(
                "Constant Contact API returned status {} for {} {}",
                status,
                request.http_method,
                request.path
            );
        }

        Ok(HttpResponse::new(status, headers, body))
    }

    /// Parses response headers into a `HashMap` keyed by lowercase name.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AccessToken, ApiKey, BaseUrl};

    fn create_test_config() -> CcConfig {
        CcConfig::builder()
            .api_key(ApiKey::new("test-api-key").unwrap())
            .access_token(AccessToken::new("test-access-token").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_client_construction_with_config() {
        let client = HttpClient::new(&create_test_config());

        assert_eq!(client.base_url(), BaseUrl::PRODUCTION);
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new(&create_test_config());

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.contains("Constant Contact API Library v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_bearer_token_header_injection() {
        let client = HttpClient::new(&create_test_config());

        assert_eq!(
            client.default_headers().get("Authorization"),
            Some(&"Bearer test-access-token".to_string())
        );
    }

    #[test]
    fn test_accept_header_is_json() {
        let client = HttpClient::new(&create_test_config());

        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = CcConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .access_token(AccessToken::new("token").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();

        let client = HttpClient::new(&config);

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | "));
        assert!(user_agent.contains("Constant Contact API Library"));
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
