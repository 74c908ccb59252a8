//! Authentication types for the Strapi API SDK.
//!
//! This module provides the [`Authenticator`] for the users-permissions
//! plugin endpoints, and the [`AuthHeaderProvider`] seam through which the
//! entries client obtains its `Authorization` header.
//!
//! # Overview
//!
//! - [`Authenticator`]: Issues JWTs, registers users, and holds the default token
//! - [`AuthHeaderProvider`]: Anything that can produce request auth headers
//! - [`AuthenticationError`]: Failures from the authentication endpoints
//! - [`generate_password`]: URL-safe random password used for registration
//!
//! A static [`ApiToken`] is itself an [`AuthHeaderProvider`], which suits
//! server-side API tokens that never change.
//!
//! # Example
//!
//! ```rust
//! use strapi_api::ApiToken;
//! use strapi_api::auth::AuthHeaderProvider;
//!
//! let token = ApiToken::new("api-token").unwrap();
//! assert_eq!(
//!     token.auth_header().get("Authorization").map(String::as_str),
//!     Some("Bearer api-token")
//! );
//! ```

mod authenticator;
mod errors;
mod password;

use std::collections::HashMap;

use crate::config::ApiToken;

pub use authenticator::Authenticator;
pub use errors::AuthenticationError;
pub use password::{generate_password, PASSWORD_BYTES};

/// Source of authentication headers for outgoing requests.
///
/// Implementations return an empty map for anonymous requests.
pub trait AuthHeaderProvider: Send + Sync {
    /// Returns the headers to attach to a request.
    fn auth_header(&self) -> HashMap<String, String>;
}

impl AuthHeaderProvider for ApiToken {
    fn auth_header(&self) -> HashMap<String, String> {
        HashMap::from([("Authorization".to_string(), self.bearer())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_token_provides_bearer_header() {
        let token = ApiToken::new("xyz").unwrap();
        let headers = token.auth_header();

        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get("Authorization"), Some(&"Bearer xyz".to_string()));
    }

    #[test]
    fn test_provider_is_object_safe() {
        let provider: Box<dyn AuthHeaderProvider> = Box::new(ApiToken::new("t").unwrap());
        assert!(!provider.auth_header().is_empty());
    }
}
