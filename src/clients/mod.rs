//! HTTP client types for Strapi API communication.
//!
//! This module provides the HTTP layer for making requests to the Strapi
//! REST API, and the [`StrapiClient`] built on top of it for working with
//! content-type entries.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`DataType`]: Content types for request bodies
//! - [`entries::StrapiClient`]: Entry-level client (get, create, update, delete, upsert)
//! - [`entries::ClientError`]: Entry-level error types
//!
//! # Example
//!
//! ```rust,ignore
//! use std::collections::HashMap;
//! use strapi_api::{StrapiConfig, BaseUrl};
//! use strapi_api::clients::{HttpClient, HttpRequest, HttpMethod};
//!
//! let config = StrapiConfig::builder()
//!     .base_url(BaseUrl::new("http://localhost:1337").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = HttpClient::new(&config);
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "api/articles")
//!     .query_param("pagination[pageSize]", "10")
//!     .build()
//!     .unwrap();
//!
//! let response = client.request(request, &HashMap::new()).await?;
//! ```
//!
//! # Failure Behavior
//!
//! Every request is attempted once. Any status outside `[200, 300)` is
//! returned as [`HttpError::Response`] carrying the status code and reason.

pub mod entries;
mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;

// Re-export entry client types at the clients module level
pub use entries::{ClientError, EntriesQuery, EntryQuery, Pagination, PublicationState, StrapiClient};
