//! Configuration types for the Constant Contact API SDK.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`CcConfig`]: The main configuration struct holding all SDK settings
//! - [`CcConfigBuilder`]: A builder for constructing [`CcConfig`] instances
//! - [`ApiKey`]: A validated API key newtype
//! - [`AccessToken`]: A validated access token newtype with masked debug output
//! - [`BaseUrl`]: A validated API host URL
//!
//! # Example
//!
//! ```rust
//! use constant_contact_api::{CcConfig, ApiKey, AccessToken};
//!
//! let config = CcConfig::builder()
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .access_token(AccessToken::new("my-token").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{AccessToken, ApiKey, BaseUrl};

use crate::error::ConfigError;

/// Configuration for the Constant Contact API SDK.
///
/// Holds the credential pair attached to every request (API key as the
/// `api_key` query parameter, access token as a Bearer header) and the API
/// host. Credentials are opaque to the SDK: they are never validated
/// against the server, refreshed, or interpreted.
///
/// # Thread Safety
///
/// `CcConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use constant_contact_api::{CcConfig, ApiKey, AccessToken};
///
/// let config = CcConfig::builder()
///     .api_key(ApiKey::new("key").unwrap())
///     .access_token(AccessToken::new("token").unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(config.api_key().as_ref(), "key");
/// ```
#[derive(Clone, Debug)]
pub struct CcConfig {
    api_key: ApiKey,
    access_token: AccessToken,
    base_url: BaseUrl,
    user_agent_prefix: Option<String>,
}

impl CcConfig {
    /// Creates a new builder for constructing a `CcConfig`.
    #[must_use]
    pub fn builder() -> CcConfigBuilder {
        CcConfigBuilder::new()
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the access token.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify CcConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CcConfig>();
};

/// Builder for constructing [`CcConfig`] instances.
///
/// Required fields are `api_key` and `access_token`. The base URL defaults
/// to the production API host.
///
/// # Example
///
/// ```rust
/// use constant_contact_api::{CcConfig, ApiKey, AccessToken, BaseUrl};
///
/// let config = CcConfig::builder()
///     .api_key(ApiKey::new("key").unwrap())
///     .access_token(AccessToken::new("token").unwrap())
///     .base_url(BaseUrl::new("https://api.constantcontact.com").unwrap())
///     .user_agent_prefix("MyApp/1.0")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct CcConfigBuilder {
    api_key: Option<ApiKey>,
    access_token: Option<AccessToken>,
    base_url: Option<BaseUrl>,
    user_agent_prefix: Option<String>,
}

impl CcConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the access token (required).
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the API base URL.
    ///
    /// Defaults to the production host. Point this at a local stub server
    /// in tests.
    #[must_use]
    pub fn base_url(mut self, base_url: BaseUrl) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`CcConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_key` or
    /// `access_token` are not set.
    pub fn build(self) -> Result<CcConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;
        let access_token = self
            .access_token
            .ok_or(ConfigError::MissingRequiredField {
                field: "access_token",
            })?;

        Ok(CcConfig {
            api_key,
            access_token,
            base_url: self.base_url.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_api_key() {
        let result = CcConfigBuilder::new()
            .access_token(AccessToken::new("token").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "api_key" })
        ));
    }

    #[test]
    fn test_builder_requires_access_token() {
        let result = CcConfigBuilder::new()
            .api_key(ApiKey::new("key").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "access_token"
            })
        ));
    }

    #[test]
    fn test_builder_defaults_to_production_base_url() {
        let config = CcConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .access_token(AccessToken::new("token").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.base_url().as_ref(), BaseUrl::PRODUCTION);
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let base_url = BaseUrl::new("http://localhost:9090").unwrap();

        let config = CcConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .access_token(AccessToken::new("token").unwrap())
            .base_url(base_url.clone())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();

        assert_eq!(config.base_url(), &base_url);
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
    }

    #[test]
    fn test_config_is_clone_and_debug_without_leaking_token() {
        let config = CcConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .access_token(AccessToken::new("hunter2").unwrap())
            .build()
            .unwrap();

        let cloned = config.clone();
        assert_eq!(cloned.api_key(), config.api_key());

        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("CcConfig"));
        assert!(!debug_str.contains("hunter2"));
    }
}
