//! Query construction error types for the Strapi API SDK.
//!
//! The query builder validates its input at the call that introduces a
//! problem. Serialization itself never fails.
//!
//! # Example
//!
//! ```rust
//! use strapi_api::query::{QueryBuilder, QueryError};
//!
//! let mut query = QueryBuilder::new();
//! let result = query.sort_by("name", "sideways");
//! assert!(matches!(result, Err(QueryError::InvalidSortDirection { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur while building a filter query.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// A field name was empty or whitespace only.
    #[error("Field name cannot be empty. Call field() with the name of the attribute to filter or sort on.")]
    EmptyField,

    /// A sort direction other than `asc` or `desc` was supplied.
    #[error("Invalid sort direction '{direction}'. Expected 'asc' or 'desc'.")]
    InvalidSortDirection {
        /// The rejected direction.
        direction: String,
    },

    /// An operator code that the CMS does not understand.
    #[error("Unknown filter operator '{code}'.")]
    UnknownOperator {
        /// The rejected operator code.
        code: String,
    },
}
