//! The generic request/decode core shared by all services.
//!
//! Every endpoint method in the SDK reduces to the same sequence: build a
//! request path, perform one HTTP call, classify the response, decode the
//! body into the declared result type. [`ApiClient`] implements that
//! sequence once; the service types in [`crate::services`] only contribute
//! argument validation and the endpoint templates.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::errors::{require_non_empty, ApiError, ServiceError};
use crate::api::paging::{Paged, ResultSet};
use crate::api::url::next_link_path;
use crate::clients::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
use crate::config::CcConfig;

/// The low-level API client composing transport, error mapping, and JSON
/// decoding.
///
/// Cheap to clone; each service holds its own handle. All state is the
/// immutable credential configuration, so a single client (and the services
/// built on it) can be shared freely across concurrent tasks.
///
/// # Example
///
/// ```rust
/// use constant_contact_api::{ApiClient, CcConfig, ApiKey, AccessToken};
/// use constant_contact_api::services::CampaignTrackingService;
///
/// let config = CcConfig::builder()
///     .api_key(ApiKey::new("key").unwrap())
///     .access_token(AccessToken::new("token").unwrap())
///     .build()
///     .unwrap();
///
/// let client = ApiClient::new(&config);
/// let tracking = CampaignTrackingService::new(client.clone());
/// ```
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: HttpClient,
}

// Verify ApiClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiClient>();
};

impl ApiClient {
    /// Creates a new API client from the given configuration.
    #[must_use]
    pub fn new(config: &CcConfig) -> Self {
        Self {
            http: HttpClient::new(config),
        }
    }

    /// Sends a GET request and decodes the body into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] on transport failure, non-2xx response, or
    /// a body that does not match `T`.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: String) -> Result<T, ServiceError> {
        let response = self.execute(HttpMethod::Get, &path, None).await?;
        decode_body(&response, &path)
    }

    /// Sends a GET request, treating an empty 2xx body as `None`.
    ///
    /// Used by operations where the API documents an absent result as
    /// valid, e.g. a tracking summary the server has not generated yet.
    pub(crate) async fn get_optional<T: DeserializeOwned>(
        &self,
        path: String,
    ) -> Result<Option<T>, ServiceError> {
        let response = self.execute(HttpMethod::Get, &path, None).await?;
        if response.is_body_empty() {
            return Ok(None);
        }
        decode_body(&response, &path).map(Some)
    }

    /// Sends a POST request with a JSON body and decodes the response.
    pub(crate) async fn post<T: DeserializeOwned>(
        &self,
        path: String,
        body: &impl Serialize,
    ) -> Result<T, ServiceError> {
        let body = encode_body(body, &path)?;
        let response = self.execute(HttpMethod::Post, &path, Some(body)).await?;
        decode_body(&response, &path)
    }

    /// Sends a PUT request with a JSON body and decodes the response.
    pub(crate) async fn put<T: DeserializeOwned>(
        &self,
        path: String,
        body: &impl Serialize,
    ) -> Result<T, ServiceError> {
        let body = encode_body(body, &path)?;
        let response = self.execute(HttpMethod::Put, &path, Some(body)).await?;
        decode_body(&response, &path)
    }

    /// Sends a DELETE request. A 2xx response (usually 204) is success.
    pub(crate) async fn delete(&self, path: String) -> Result<(), ServiceError> {
        self.execute(HttpMethod::Delete, &path, None).await?;
        Ok(())
    }

    /// Fetches the next page of a `Paged` endpoint family from its opaque
    /// next link.
    pub(crate) async fn follow_paged<T: DeserializeOwned>(
        &self,
        next_link: &str,
    ) -> Result<Paged<T>, ServiceError> {
        require_non_empty(next_link, "next_link")?;
        self.get(next_link_path(next_link)).await
    }

    /// Fetches the next page of a `ResultSet` endpoint family from its
    /// opaque next link.
    pub(crate) async fn follow_result_set<T: DeserializeOwned>(
        &self,
        next_link: &str,
    ) -> Result<ResultSet<T>, ServiceError> {
        require_non_empty(next_link, "next_link")?;
        self.get(next_link_path(next_link)).await
    }

    /// Performs one HTTP call and classifies the response.
    async fn execute(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<HttpResponse, ServiceError> {
        tracing::debug!("Constant Contact API request: {} {}", method, path);

        let mut builder = HttpRequest::builder(method, path);
        if let Some(body) = body {
            builder = builder.body(body);
        }
        let request = builder.build()?;

        let response = self
            .http
            .send(request)
            .await
            .map_err(|e| ServiceError::from_http_client(e, path))?;

        ApiError::classify(&response, path)?;
        Ok(response)
    }
}

/// Serializes a request body, attributing failures to the request URL.
fn encode_body(body: &impl Serialize, url: &str) -> Result<serde_json::Value, ServiceError> {
    serde_json::to_value(body).map_err(|source| ServiceError::Decode {
        url: url.to_string(),
        source,
    })
}

/// Decodes a 2xx response body into the declared result type.
fn decode_body<T: DeserializeOwned>(
    response: &HttpResponse,
    url: &str,
) -> Result<T, ServiceError> {
    serde_json::from_str(&response.body).map_err(|source| ServiceError::Decode {
        url: url.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AccessToken, ApiKey};

    fn create_test_client() -> ApiClient {
        let config = CcConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .access_token(AccessToken::new("token").unwrap())
            .build()
            .unwrap();
        ApiClient::new(&config)
    }

    #[tokio::test]
    async fn test_follow_paged_rejects_empty_next_link() {
        let client = create_test_client();

        let result: Result<Paged<serde_json::Value>, _> = client.follow_paged("").await;
        assert!(matches!(
            result,
            Err(ServiceError::InvalidArgument(
                crate::api::InvalidArgumentError::EmptyArgument { name: "next_link" }
            ))
        ));
    }

    #[tokio::test]
    async fn test_follow_result_set_rejects_empty_next_link() {
        let client = create_test_client();

        let result: Result<ResultSet<serde_json::Value>, _> = client.follow_result_set("  ").await;
        assert!(matches!(result, Err(ServiceError::InvalidArgument(_))));
    }

    #[test]
    fn test_decode_body_reports_url_on_mismatch() {
        let response = HttpResponse::new(200, std::collections::HashMap::new(), "[]".to_string());

        let result: Result<std::collections::HashMap<String, String>, _> =
            decode_body(&response, "v2/account/info");

        match result {
            Err(ServiceError::Decode { url, .. }) => assert_eq!(url, "v2/account/info"),
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[test]
    fn test_client_is_send_sync_and_clone() {
        fn assert_send_sync<T: Send + Sync + Clone>() {}
        assert_send_sync::<ApiClient>();
    }
}
