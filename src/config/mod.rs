//! Configuration types for the Strapi API SDK.
//!
//! This module provides the core configuration types used to initialize
//! and configure the SDK for API communication with a Strapi instance.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`StrapiConfig`]: The main configuration struct holding all SDK settings
//! - [`StrapiConfigBuilder`]: A builder for constructing [`StrapiConfig`] instances
//! - [`BaseUrl`]: A validated, slash-normalized base URL
//! - [`ApiToken`]: A validated token with masked debug output
//!
//! # Example
//!
//! ```rust
//! use strapi_api::{StrapiConfig, BaseUrl, ApiToken};
//!
//! let config = StrapiConfig::builder()
//!     .base_url(BaseUrl::new("http://localhost:1337").unwrap())
//!     .api_token(ApiToken::new("my-api-token").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{ApiToken, BaseUrl};

use crate::error::ConfigError;

/// Default number of entries fetched per page when collecting all entries.
pub const DEFAULT_BATCH_SIZE: u32 = 100;

/// Configuration for the Strapi API SDK.
///
/// # Thread Safety
///
/// `StrapiConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use strapi_api::{StrapiConfig, BaseUrl};
///
/// let config = StrapiConfig::builder()
///     .base_url(BaseUrl::new("https://cms.example.com").unwrap())
///     .user_agent_prefix("MyApp/1.0")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.base_url().as_ref(), "https://cms.example.com/");
/// assert!(config.api_token().is_none());
/// ```
#[derive(Clone, Debug)]
pub struct StrapiConfig {
    base_url: BaseUrl,
    api_token: Option<ApiToken>,
    user_agent_prefix: Option<String>,
    batch_size: u32,
}

impl StrapiConfig {
    /// Creates a new builder for constructing a `StrapiConfig`.
    #[must_use]
    pub fn builder() -> StrapiConfigBuilder {
        StrapiConfigBuilder::new()
    }

    /// Returns the base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the initial API token, if configured.
    ///
    /// An [`Authenticator`](crate::auth::Authenticator) created from this
    /// config starts with this token as its default.
    #[must_use]
    pub const fn api_token(&self) -> Option<&ApiToken> {
        self.api_token.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the page size used when collecting all entries.
    #[must_use]
    pub const fn batch_size(&self) -> u32 {
        self.batch_size
    }
}

// Verify StrapiConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StrapiConfig>();
};

/// Builder for constructing [`StrapiConfig`] instances.
///
/// `base_url` is required. All other fields have sensible defaults.
///
/// # Defaults
///
/// - `api_token`: `None`
/// - `user_agent_prefix`: `None`
/// - `batch_size`: [`DEFAULT_BATCH_SIZE`]
#[derive(Debug, Default)]
pub struct StrapiConfigBuilder {
    base_url: Option<BaseUrl>,
    api_token: Option<ApiToken>,
    user_agent_prefix: Option<String>,
    batch_size: Option<u32>,
}

impl StrapiConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base URL (required).
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the initial API token.
    #[must_use]
    pub fn api_token(mut self, token: ApiToken) -> Self {
        self.api_token = Some(token);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the page size used when collecting all entries.
    #[must_use]
    pub const fn batch_size(mut self, size: u32) -> Self {
        self.batch_size = Some(size);
        self
    }

    /// Builds the [`StrapiConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `base_url` is not set,
    /// and [`ConfigError::InvalidBatchSize`] for a batch size of zero.
    pub fn build(self) -> Result<StrapiConfig, ConfigError> {
        let base_url = self
            .base_url
            .ok_or(ConfigError::MissingRequiredField { field: "base_url" })?;

        let batch_size = self.batch_size.unwrap_or(DEFAULT_BATCH_SIZE);
        if batch_size == 0 {
            return Err(ConfigError::InvalidBatchSize { size: batch_size });
        }

        Ok(StrapiConfig {
            base_url,
            api_token: self.api_token,
            user_agent_prefix: self.user_agent_prefix,
            batch_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_url() -> BaseUrl {
        BaseUrl::new("http://localhost:1337").unwrap()
    }

    #[test]
    fn test_builder_requires_base_url() {
        let result = StrapiConfigBuilder::new().build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "base_url" })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = StrapiConfig::builder().base_url(base_url()).build().unwrap();

        assert!(config.api_token().is_none());
        assert!(config.user_agent_prefix().is_none());
        assert_eq!(config.batch_size(), DEFAULT_BATCH_SIZE);
    }

    #[test]
    fn test_builder_rejects_zero_batch_size() {
        let result = StrapiConfig::builder()
            .base_url(base_url())
            .batch_size(0)
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::InvalidBatchSize { size: 0 })
        ));
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let config = StrapiConfig::builder()
            .base_url(base_url())
            .api_token(ApiToken::new("token").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .batch_size(25)
            .build()
            .unwrap();

        assert_eq!(config.api_token().unwrap().as_ref(), "token");
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
        assert_eq!(config.batch_size(), 25);
    }

    #[test]
    fn test_config_debug_masks_token() {
        let config = StrapiConfig::builder()
            .base_url(base_url())
            .api_token(ApiToken::new("very-secret").unwrap())
            .build()
            .unwrap();

        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("StrapiConfig"));
        assert!(!debug_str.contains("very-secret"));
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StrapiConfig>();
    }
}
