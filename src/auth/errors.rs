//! Authentication error types for the Strapi API SDK.
//!
//! This module contains the error type returned by the
//! [`Authenticator`](crate::auth::Authenticator) for token issuance and
//! user registration failures.
//!
//! # Example
//!
//! ```rust
//! use strapi_api::auth::AuthenticationError;
//!
//! let error = AuthenticationError::Status {
//!     code: 400,
//!     reason: "Bad Request".to_string(),
//! };
//! assert_eq!(error.to_string(), "ERROR: 400: Bad Request");
//! ```

use crate::clients::HttpError;
use thiserror::Error;

/// Errors that can occur when talking to the Strapi users-permissions endpoints.
#[derive(Debug, Error)]
pub enum AuthenticationError {
    /// The server answered with a status outside `[200, 300)`.
    #[error("ERROR: {code}: {reason}")]
    Status {
        /// The HTTP status code.
        code: u16,
        /// The canonical reason phrase.
        reason: String,
    },

    /// No role with the requested type exists.
    #[error("The role type '{role_type}' does not exist, so the user cannot be created.")]
    RoleNotFound {
        /// The role type that was looked up (lowercased).
        role_type: String,
    },

    /// The server answered successfully but the body was not the expected shape.
    #[error("Unexpected authentication response: {message}")]
    UnexpectedResponse {
        /// What was missing or malformed.
        message: String,
    },

    /// Request validation or network failure.
    #[error(transparent)]
    Http(HttpError),
}

impl From<HttpError> for AuthenticationError {
    fn from(error: HttpError) -> Self {
        match error {
            HttpError::Response(e) => Self::Status {
                code: e.code,
                reason: e.reason,
            },
            other => Self::Http(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{HttpResponseError, InvalidHttpRequestError};

    #[test]
    fn test_status_error_message_format() {
        let error = AuthenticationError::Status {
            code: 401,
            reason: "Unauthorized".to_string(),
        };
        assert_eq!(error.to_string(), "ERROR: 401: Unauthorized");
    }

    #[test]
    fn test_role_not_found_names_role() {
        let error = AuthenticationError::RoleNotFound {
            role_type: "editor".to_string(),
        };
        assert!(error.to_string().contains("'editor'"));
    }

    #[test]
    fn test_http_response_error_becomes_status() {
        let error: AuthenticationError = HttpError::Response(HttpResponseError {
            code: 403,
            reason: "Forbidden".to_string(),
            message: "Forbidden".to_string(),
            error_reference: None,
        })
        .into();

        assert!(matches!(
            error,
            AuthenticationError::Status { code: 403, ref reason } if reason == "Forbidden"
        ));
    }

    #[test]
    fn test_invalid_request_stays_http() {
        let error: AuthenticationError =
            HttpError::InvalidRequest(InvalidHttpRequestError::MissingBodyType).into();
        assert!(matches!(error, AuthenticationError::Http(_)));
    }
}
