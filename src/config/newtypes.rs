//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated Strapi base URL.
///
/// The URL must use the `http` or `https` scheme and name a host. It is
/// normalized to end with exactly one `/`, so endpoint paths such as
/// `api/articles` can be appended directly.
///
/// # Serialization
///
/// `BaseUrl` serializes to and deserializes from its normalized string.
///
/// # Example
///
/// ```rust
/// use strapi_api::BaseUrl;
///
/// let url = BaseUrl::new("http://localhost:1337").unwrap();
/// assert_eq!(url.as_ref(), "http://localhost:1337/");
/// assert_eq!(url.scheme(), "http");
/// assert_eq!(url.host_name(), "localhost");
/// assert_eq!(url.join("api/articles"), "http://localhost:1337/api/articles");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL is invalid.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let trimmed = url.trim();
        let invalid = || ConfigError::InvalidBaseUrl {
            url: trimmed.to_string(),
        };

        // Find scheme
        let scheme_end = trimmed.find("://").ok_or_else(invalid)?;
        let scheme = &trimmed[..scheme_end];
        if !scheme.eq_ignore_ascii_case("http") && !scheme.eq_ignore_ascii_case("https") {
            return Err(invalid());
        }

        // Host ends at port, path, query, or end of string
        let host_start = scheme_end + 3;
        let remainder = &trimmed[host_start..];
        if remainder.contains(['?', '#']) {
            return Err(invalid());
        }
        let host_end = remainder
            .find([':', '/'])
            .map_or(trimmed.len(), |i| host_start + i);
        if host_end == host_start {
            return Err(invalid());
        }

        let url = format!("{}/", trimmed.trim_end_matches('/'));

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }

    /// Appends a relative path, stripping any leading `/` from it.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        format!("{}{}", self.url, path.trim_start_matches('/'))
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

impl Serialize for BaseUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.url)
    }
}

impl<'de> Deserialize<'de> for BaseUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A validated Strapi API token or user JWT.
///
/// This newtype ensures the token is non-empty and masks its value in debug
/// output to prevent accidental exposure in logs.
///
/// # Example
///
/// ```rust
/// use strapi_api::ApiToken;
///
/// let token = ApiToken::new("my-token").unwrap();
/// assert_eq!(token.as_ref(), "my-token");
/// assert_eq!(format!("{:?}", token), "ApiToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    /// Creates a new validated token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ConfigError::EmptyApiToken);
        }
        Ok(Self(token))
    }

    /// Returns the `Authorization` header value for this token.
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl AsRef<str> for ApiToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(*****)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_token_rejects_empty_string() {
        assert!(matches!(ApiToken::new(""), Err(ConfigError::EmptyApiToken)));
        assert!(matches!(ApiToken::new("  "), Err(ConfigError::EmptyApiToken)));
    }

    #[test]
    fn test_api_token_masks_value_in_debug() {
        let token = ApiToken::new("super-secret-token").unwrap();
        let debug_output = format!("{:?}", token);
        assert_eq!(debug_output, "ApiToken(*****)");
        assert!(!debug_output.contains("super-secret-token"));
    }

    #[test]
    fn test_api_token_bearer_value() {
        let token = ApiToken::new("abc").unwrap();
        assert_eq!(token.bearer(), "Bearer abc");
    }

    #[test]
    fn test_base_url_appends_trailing_slash() {
        let url = BaseUrl::new("https://cms.example.com").unwrap();
        assert_eq!(url.as_ref(), "https://cms.example.com/");
        assert_eq!(url.host_name(), "cms.example.com");
    }

    #[test]
    fn test_base_url_collapses_trailing_slashes() {
        let url = BaseUrl::new("http://localhost:1337//").unwrap();
        assert_eq!(url.as_ref(), "http://localhost:1337/");
        assert_eq!(url.host_name(), "localhost");
    }

    #[test]
    fn test_base_url_keeps_path_prefix() {
        let url = BaseUrl::new("https://example.com/cms").unwrap();
        assert_eq!(url.as_ref(), "https://example.com/cms/");
        assert_eq!(url.join("/api/articles"), "https://example.com/cms/api/articles");
    }

    #[test]
    fn test_base_url_rejects_invalid() {
        // No scheme
        assert!(BaseUrl::new("localhost:1337").is_err());

        // Unsupported scheme
        assert!(BaseUrl::new("ftp://example.com").is_err());

        // Empty host
        assert!(BaseUrl::new("https://").is_err());
        assert!(BaseUrl::new("https://:1337").is_err());

        // Query strings do not belong in a base URL
        assert!(BaseUrl::new("https://example.com/?a=b").is_err());
    }

    #[test]
    fn test_base_url_serde_round_trip() {
        let url = BaseUrl::new("http://localhost:1337").unwrap();
        let json = serde_json::to_string(&url).unwrap();
        assert_eq!(json, r#""http://localhost:1337/""#);

        let restored: BaseUrl = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, url);
    }

    #[test]
    fn test_base_url_deserialize_rejects_invalid() {
        let result: Result<BaseUrl, _> = serde_json::from_str(r#""not a url""#);
        assert!(result.is_err());
    }
}
