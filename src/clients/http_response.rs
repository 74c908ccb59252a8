//! HTTP response types for the Strapi API SDK.
//!
//! This module provides the [`HttpResponse`] type for accessing the status,
//! headers and parsed JSON body of an API response.

use std::collections::HashMap;

use serde::de::DeserializeOwned;

/// A parsed HTTP response from the Strapi API.
///
/// Header names are stored lowercase; each name maps to every value the
/// server sent for it.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use strapi_api::clients::HttpResponse;
/// use serde_json::json;
///
/// let response = HttpResponse::new(
///     200,
///     "OK",
///     HashMap::new(),
///     json!({"data": [], "meta": {}}),
/// );
///
/// assert!(response.is_ok());
/// assert_eq!(response.reason, "OK");
/// ```
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// The canonical reason phrase for the status code.
    pub reason: String,
    /// Response headers, keyed by lowercase name.
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed JSON body.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new response.
    #[must_use]
    pub fn new(
        code: u16,
        reason: impl Into<String>,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            code,
            reason: reason.into(),
            headers,
            body,
        }
    }

    /// Returns `true` if the status code is in `[200, 300)`.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code < 300
    }

    /// Decodes the body into a typed value.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] if the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        T::deserialize(&self.body)
    }

    /// Returns the first value of the given header, if present.
    ///
    /// The lookup is case-insensitive.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }

    /// Returns the Strapi error message from an error body.
    ///
    /// Strapi reports errors as `{"error": {"status", "name", "message"}}`.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.body
            .get("error")
            .and_then(|error| error.get("message"))
            .and_then(serde_json::Value::as_str)
    }
}
