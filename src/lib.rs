//! # Strapi API Rust SDK
//!
//! A Rust SDK for the Strapi headless CMS REST API, providing a fluent
//! query-string builder, type-safe configuration, authentication against the
//! users-permissions plugin, and an async client for content-type entries.
//!
//! ## Overview
//!
//! This SDK provides:
//! - A filter and sort query builder via [`query::QueryBuilder`]
//! - Type-safe configuration via [`StrapiConfig`] and [`StrapiConfigBuilder`]
//! - Validated newtypes for the base URL and tokens
//! - JWT issuance and user registration via [`auth::Authenticator`]
//! - Entry reads, writes, pagination and upserts via [`clients::StrapiClient`]
//! - An async HTTP client with Strapi error mapping
//!
//! ## Building Queries
//!
//! ```rust
//! use strapi_api::query::{QueryBuilder, SortDirection};
//!
//! let mut query = QueryBuilder::new();
//! query.field("age")?.greater_than(18).sort("name", SortDirection::Asc)?;
//!
//! assert_eq!(query.to_string(), "&filters[age][$gt]=18&sort[0]=name:asc");
//! # Ok::<(), strapi_api::query::QueryError>(())
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use strapi_api::{StrapiConfig, BaseUrl, ApiToken};
//!
//! let config = StrapiConfig::builder()
//!     .base_url(BaseUrl::new("http://localhost:1337").unwrap())
//!     .api_token(ApiToken::new("your-api-token").unwrap())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Authentication
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use strapi_api::auth::Authenticator;
//!
//! let auth = Arc::new(Authenticator::new(&config));
//!
//! // Log in and use the JWT for subsequent requests
//! auth.create_token("editor@example.com", "password", true).await?;
//!
//! // Register a user under the "authenticated" role with a generated password
//! let user = auth
//!     .register_user("jane", "jane@example.com", None, "authenticated")
//!     .await?;
//! println!("Password: {}", user["password"]);
//! ```
//!
//! ## Working With Entries
//!
//! ```rust,ignore
//! use serde_json::json;
//! use strapi_api::clients::{StrapiClient, EntriesQuery, PublicationState};
//! use strapi_api::query::QueryBuilder;
//!
//! let client = StrapiClient::new(&config, auth.clone());
//!
//! let mut filters = QueryBuilder::new();
//! filters.field("title")?.contains_case_insensitive("rust").end();
//!
//! let all = client
//!     .get_entries(
//!         "articles",
//!         &EntriesQuery::new()
//!             .query(filters)
//!             .publication_state(PublicationState::Live)
//!             .get_all(true),
//!     )
//!     .await?;
//!
//! client
//!     .upsert_entry("articles", json!({"slug": "hello", "title": "Hello"}), &["slug"], true)
//!     .await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Newtypes and builder calls validate on construction
//! - **Thread-safe**: Clients and the authenticator are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **Single attempt**: Non-2xx responses are returned as errors, never retried

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod query;

// Re-export public types at crate root for convenience
pub use config::{ApiToken, BaseUrl, StrapiConfig, StrapiConfigBuilder, DEFAULT_BATCH_SIZE};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError,
};

// Re-export entry and auth types
pub use auth::{AuthHeaderProvider, AuthenticationError, Authenticator};
pub use clients::{ClientError, EntriesQuery, EntryQuery, Pagination, PublicationState, StrapiClient};

// Re-export query builder types
pub use query::{
    Condition, FieldClause, FilterOperator, QueryBuilder, QueryError, QueryValue, SortDirection,
};
