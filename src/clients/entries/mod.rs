//! Entry client for Strapi content types.
//!
//! This module provides the [`StrapiClient`] for the `api/{pluralApiId}`
//! endpoints, along with the request parameter types it accepts.
//!
//! # Overview
//!
//! - [`StrapiClient`]: get, list, create, update, delete and upsert entries
//! - [`EntryQuery`]: `populate` and `fields` for single-entry reads
//! - [`EntriesQuery`]: sort, filters, pagination and more for list reads
//! - [`Pagination`]: page-based or offset-based pagination
//! - [`PublicationState`]: draft/publish selection
//! - [`ClientError`]: entry operation failures
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use strapi_api::query::QueryBuilder;
//! use strapi_api::clients::{StrapiClient, EntriesQuery};
//!
//! let mut filters = QueryBuilder::new();
//! filters.field("views")?.greater_than(100);
//!
//! let popular = client
//!     .get_entries("articles", &EntriesQuery::new().query(filters).get_all(true))
//!     .await?;
//! ```

mod client;
mod errors;
mod query;

pub use client::StrapiClient;
pub use errors::ClientError;
pub use query::{EntriesQuery, EntryQuery, Pagination, PublicationState};
