//! Filter and sort query construction for the Strapi REST API.
//!
//! Strapi reads filters, sorting and pagination from deep-object encoded
//! query parameters:
//!
//! ```text
//! filters[title][$containsi]=rust
//! filters[id][$in][0]=3&filters[id][$in][1]=5
//! sort[0]=publishedAt:desc
//! ```
//!
//! This module provides:
//!
//! - [`QueryBuilder`]: accumulates filter fragments and sort directives
//! - [`FieldClause`]: the handle returned by [`QueryBuilder::field`] that
//!   binds operator calls to a field
//! - [`FilterOperator`]: every operator code the CMS accepts
//! - [`QueryValue`]: scalar values rendered into clauses
//! - [`Condition`]: structured clauses for the `$and`/`$or`/`$not` combinators
//! - [`SortDirection`]: `asc` or `desc`
//! - [`stringify_parameters`]: deep-object flattening of JSON values
//! - [`QueryError`]: validation errors raised while building
//!
//! # Example
//!
//! ```rust
//! use strapi_api::query::{Condition, FilterOperator, QueryBuilder, SortDirection};
//!
//! let mut query = QueryBuilder::new();
//! query
//!     .field("title")?
//!     .contains_case_insensitive("rust")
//!     .field("rating")?
//!     .between(3, 5)
//!     .field("status")?
//!     .or([
//!         Condition::new(FilterOperator::Equal, "published"),
//!         Condition::new(FilterOperator::Equal, "scheduled"),
//!     ])
//!     .sort("publishedAt", SortDirection::Desc)?;
//!
//! let query_string = query.to_string();
//! assert!(query_string.starts_with("&filters[title][$containsi]=rust"));
//! assert!(query_string.ends_with("&sort[0]=publishedAt:desc"));
//! # Ok::<(), strapi_api::query::QueryError>(())
//! ```

mod builder;
mod condition;
mod errors;
mod operator;
mod params;
mod sort;
mod value;

pub use builder::{FieldClause, QueryBuilder};
pub use condition::Condition;
pub use errors::QueryError;
pub use operator::FilterOperator;
pub use params::stringify_parameters;
pub use sort::SortDirection;
pub use value::QueryValue;
