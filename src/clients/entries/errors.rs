//! Entry-level error types for the Strapi API SDK.
//!
//! # Error Handling
//!
//! - [`ClientError::Status`]: Strapi answered with a non-2xx status
//! - [`ClientError::InvalidPath`]: An API id or document id cannot form a path
//! - [`ClientError::AmbiguousKeys`]: An upsert matched more than one entry
//! - [`ClientError::MissingKey`]: An upsert key is absent from the entry data
//! - [`ClientError::UnexpectedResponse`]: A successful body had the wrong shape
//! - [`ClientError::Http`]: Request validation or network failure
//!
//! # Example
//!
//! ```rust,ignore
//! use strapi_api::clients::ClientError;
//!
//! match client.upsert_entry("articles", data, &["slug"], true).await {
//!     Ok(entry) => println!("Saved: {}", entry),
//!     Err(ClientError::AmbiguousKeys { count }) => {
//!         println!("{} entries share that slug", count);
//!     }
//!     Err(e) => println!("Upsert failed: {}", e),
//! }
//! ```

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for entry operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server answered with a status outside `[200, 300)`.
    #[error("ERROR: {code}: {reason}")]
    Status {
        /// The HTTP status code.
        code: u16,
        /// The canonical reason phrase.
        reason: String,
    },

    /// The entry path is invalid.
    #[error("Invalid entry path: {path}")]
    InvalidPath {
        /// The path that was rejected.
        path: String,
    },

    /// The upsert keys matched more than one entry.
    #[error("Keys are ambiguous, found {count} records")]
    AmbiguousKeys {
        /// How many entries matched.
        count: u64,
    },

    /// An upsert key has no value in the entry data.
    #[error("Upsert key '{key}' is missing from the entry data")]
    MissingKey {
        /// The missing key.
        key: String,
    },

    /// A successful response did not have the expected shape.
    #[error("Unexpected response from Strapi: {message}")]
    UnexpectedResponse {
        /// What was missing or malformed.
        message: String,
    },

    /// Request validation or network failure.
    #[error(transparent)]
    Http(HttpError),
}

impl From<HttpError> for ClientError {
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
