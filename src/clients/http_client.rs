//! HTTP client for Strapi API communication.
//!
//! This module provides the [`HttpClient`] type for sending requests to a
//! Strapi instance and mapping its responses.

use std::collections::HashMap;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::{BaseUrl, StrapiConfig};

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Strapi API.
///
/// The client handles:
/// - URL construction from the configured base URL
/// - Default headers including User-Agent
/// - Percent-encoding of deep-object query parameters
/// - Mapping non-2xx responses to [`HttpResponseError`]
///
/// Authentication headers are supplied per request, so one client can serve
/// both anonymous and authenticated calls.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use std::collections::HashMap;
/// use strapi_api::{StrapiConfig, BaseUrl};
/// use strapi_api::clients::{HttpClient, HttpRequest, HttpMethod};
///
/// let config = StrapiConfig::builder()
///     .base_url(BaseUrl::new("http://localhost:1337").unwrap())
///     .build()
///     .unwrap();
/// let client = HttpClient::new(&config);
///
/// let request = HttpRequest::builder(HttpMethod::Get, "api/articles")
///     .build()
///     .unwrap();
///
/// let response = client.request(request, &HashMap::new()).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL (e.g., `http://localhost:1337/`).
    base_url: BaseUrl,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the configured Strapi instance.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    ///
    /// # Example
    ///
    /// ```rust
    /// use strapi_api::{StrapiConfig, BaseUrl};
    /// use strapi_api::clients::HttpClient;
    ///
    /// let config = StrapiConfig::builder()
    ///     .base_url(BaseUrl::new("http://localhost:1337").unwrap())
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = HttpClient::new(&config);
    /// assert_eq!(client.base_url().as_ref(), "http://localhost:1337/");
    /// ```
    #[must_use]
    pub fn new(config: &StrapiConfig) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Strapi API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.base_url().clone(),
            default_headers,
        }
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the full URL a request would be sent to.
    #[must_use]
    pub fn url_for(&self, request: &HttpRequest) -> String {
        let url = self.base_url.join(&request.path);
        let query = request.encoded_query();
        if query.is_empty() {
            url
        } else {
            format!("{url}?{query}")
        }
    }

    /// Sends an HTTP request to the Strapi API.
    ///
    /// The request is attempted exactly once. `auth_headers` are merged over
    /// the default headers, and the request's own extra headers are merged
    /// last.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    /// - Non-2xx response received (`Response`)
    pub async fn request(
        &self,
        request: HttpRequest,
        auth_headers: &HashMap<String, String>,
    ) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.url_for(&request);

        let mut headers = self.default_headers.clone();
        headers.extend(auth_headers.iter().map(|(k, v)| (k.clone(), v.clone())));
        if let Some(body_type) = &request.body_type {
            headers.insert(
                "Content-Type".to_string(),
                body_type.as_content_type().to_string(),
            );
        }
        if let Some(extra) = &request.extra_headers {
            headers.extend(extra.iter().map(|(k, v)| (k.clone(), v.clone())));
        }

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };
        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }
        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        tracing::debug!(method = %request.http_method, path = %request.path, "Sending Strapi request");

        let res = req_builder.send().await?;

        let status = res.status();
        let code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or_default().to_string();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await.unwrap_or_default();

        let body = if body_text.is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(&body_text).unwrap_or_else(|_| {
                if code >= 500 {
                    serde_json::json!({ "raw_body": body_text })
                } else {
                    serde_json::json!({})
                }
            })
        };

        let response = HttpResponse::new(code, reason, res_headers, body);

        if response.is_ok() {
            return Ok(response);
        }

        tracing::warn!(
            code,
            reason = %response.reason,
            path = %request.path,
            "Strapi request failed"
        );

        let message = response
            .error_message()
            .map_or_else(|| response.body.to_string(), String::from);

        Err(HttpError::Response(HttpResponseError {
            code,
            reason: response.reason.clone(),
            message,
            error_reference: response.request_id().map(String::from),
        }))
    }

    /// Parses response headers into a `HashMap`.
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
