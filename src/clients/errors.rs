//! HTTP-specific error types for the Strapi API SDK.
//!
//! This module contains error types for HTTP operations, including response
//! errors and request validation failures.
//!
//! # Error Handling
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from the API
//! - [`InvalidHttpRequestError`]: When a request fails validation before sending
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! Requests are attempted exactly once. A non-2xx response is returned as an
//! error immediately; there is no retry or backoff.
//!
//! # Example
//!
//! ```rust,ignore
//! use strapi_api::clients::{HttpClient, HttpRequest, HttpMethod, HttpError};
//!
//! match client.request(request, &headers).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Response(e)) => {
//!         println!("API error {} {}: {}", e.code, e.reason, e.message);
//!     }
//!     Err(HttpError::InvalidRequest(e)) => {
//!         println!("Invalid request: {}", e);
//!     }
//!     Err(HttpError::Network(e)) => {
//!         println!("Network error: {}", e);
//!     }
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request receives a non-successful response.
///
/// # Example
///
/// ```rust
/// use strapi_api::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     reason: "Not Found".to_string(),
///     message: "Not Found".to_string(),
///     error_reference: None,
/// };
///
/// assert_eq!(error.to_string(), "ERROR: 404: Not Found");
/// ```
#[derive(Debug, Error)]
#[error("ERROR: {code}: {reason}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The canonical reason phrase for the status code.
    pub reason: String,
    /// The error message reported by Strapi (`error.message`), or the raw body.
    pub message: String,
    /// Reference ID for error reporting (from the `X-Request-Id` header).
    pub error_reference: Option<String>,
}

/// Error returned when an HTTP request fails validation.
///
/// This error is raised before a request is sent if it fails validation
/// checks, such as:
/// - Missing body for POST/PUT requests
/// - Body provided without `body_type`
///
/// # Example
///
/// ```rust
/// use strapi_api::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::MissingBody {
///     method: "post".to_string(),
/// };
///
/// println!("{}", error); // "Cannot use post without specifying data."
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A request body was provided without specifying the body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_response_error_includes_status_and_reason() {
        let error = HttpResponseError {
            code: 403,
            reason: "Forbidden".to_string(),
            message: "Forbidden".to_string(),
            error_reference: None,
        };
        assert_eq!(error.to_string(), "ERROR: 403: Forbidden");
    }

    #[test]
    fn test_http_response_error_keeps_request_id() {
        let error = HttpResponseError {
            code: 500,
            reason: "Internal Server Error".to_string(),
            message: "Internal Server Error".to_string(),
            error_reference: Some("abc-123".to_string()),
        };
        assert_eq!(error.error_reference, Some("abc-123".to_string()));
    }

    #[test]
    fn test_invalid_request_error_missing_body() {
        let error = InvalidHttpRequestError::MissingBody {
            method: "put".to_string(),
        };
        assert_eq!(error.to_string(), "Cannot use put without specifying data.");
    }

    #[test]
    fn test_invalid_request_error_missing_body_type() {
        let error = InvalidHttpRequestError::MissingBodyType;
        assert_eq!(
            error.to_string(),
            "Cannot set a body without also setting body_type."
        );
    }

    #[test]
    fn test_http_error_is_transparent_over_response() {
        let error: HttpError = HttpResponseError {
            code: 400,
            reason: "Bad Request".to_string(),
            message: "Invalid key".to_string(),
            error_reference: None,
        }
        .into();
        assert_eq!(error.to_string(), "ERROR: 400: Bad Request");
    }
}
