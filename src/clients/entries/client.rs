//! Entry client implementation for the Strapi REST API.
//!
//! This module provides the [`StrapiClient`] type for reading and writing
//! content-type entries under `api/{pluralApiId}`.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::{json, Map, Value};

use crate::auth::AuthHeaderProvider;
use crate::clients::entries::{ClientError, EntriesQuery, EntryQuery, Pagination};
use crate::clients::{DataType, HttpClient, HttpMethod, HttpRequest, HttpResponse};
use crate::config::StrapiConfig;

/// Client for Strapi content-type entries.
///
/// Every request carries the headers returned by the configured
/// [`AuthHeaderProvider`] at the time it is sent, so a shared
/// [`Authenticator`](crate::auth::Authenticator) can log in or switch tokens
/// while the client is in use.
///
/// All methods return Strapi's JSON body as a [`serde_json::Value`]
/// (`{"data": ..., "meta": ...}`).
///
/// # Thread Safety
///
/// `StrapiClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use serde_json::json;
/// use strapi_api::{StrapiConfig, BaseUrl, ApiToken};
/// use strapi_api::clients::{StrapiClient, EntriesQuery};
///
/// let config = StrapiConfig::builder()
///     .base_url(BaseUrl::new("http://localhost:1337").unwrap())
///     .build()
///     .unwrap();
/// let client = StrapiClient::new(&config, Arc::new(ApiToken::new("api-token").unwrap()));
///
/// let articles = client
///     .get_entries("articles", &EntriesQuery::new().get_all(true))
///     .await?;
///
/// client
///     .create_entry("articles", json!({"title": "Hello"}))
///     .await?;
/// ```
pub struct StrapiClient {
    http_client: HttpClient,
    auth: Arc<dyn AuthHeaderProvider>,
    batch_size: u32,
}

// Verify StrapiClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StrapiClient>();
};

impl std::fmt::Debug for StrapiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StrapiClient")
            .field("http_client", &self.http_client)
            .field("batch_size", &self.batch_size)
            .finish_non_exhaustive()
    }
}

impl StrapiClient {
    /// Creates a new entry client.
    #[must_use]
    pub fn new(config: &StrapiConfig, auth: Arc<dyn AuthHeaderProvider>) -> Self {
        Self {
            http_client: HttpClient::new(config),
            auth,
            batch_size: config.batch_size(),
        }
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Fetches one entry by document id.
    ///
    /// # Errors
    ///
    /// - [`ClientError::InvalidPath`] if either id is empty
    /// - [`ClientError::Status`] for a non-2xx response
    /// - [`ClientError::Http`] on network failure
    pub async fn get_entry(
        &self,
        plural_api_id: &str,
        document_id: &str,
        query: &EntryQuery,
    ) -> Result<Value, ClientError> {
        let path = entry_path(plural_api_id, document_id)?;
        let response = self
            .make_request(HttpMethod::Get, &path, None, query.to_pairs())
            .await?;
        Ok(response.body)
    }

    /// Lists entries.
    ///
    /// With [`EntriesQuery::get_all`], pages of the batch size are fetched in
    /// turn until `meta.pagination.pageCount` is passed. The `data` arrays are
    /// concatenated and the `meta` of the last page is kept.
    ///
    /// # Errors
    ///
    /// - [`ClientError::InvalidPath`] if the API id is empty
    /// - [`ClientError::Status`] for a non-2xx response on any page
    /// - [`ClientError::UnexpectedResponse`] if a page lacks `data` or `meta.pagination.pageCount`
    /// - [`ClientError::Http`] on network failure
    pub async fn get_entries(
        &self,
        plural_api_id: &str,
        query: &EntriesQuery,
    ) -> Result<Value, ClientError> {
        let path = collection_path(plural_api_id)?;

        if !query.collects_all() {
            let response = self
                .make_request(HttpMethod::Get, &path, None, query.to_pairs())
                .await?;
            return Ok(response.body);
        }

        let batch_size = query
            .explicit_batch_size()
            .filter(|size| *size > 0)
            .unwrap_or(self.batch_size);

        let mut collected: Option<Value> = None;
        let mut page: u32 = 1;
        loop {
            let pairs = query.pairs_with_pagination(Some(Pagination::page(page, batch_size)));
            let body = self
                .make_request(HttpMethod::Get, &path, None, pairs)
                .await?
                .body;

            let page_count = page_count(&body)?;
            tracing::debug!(page, page_count, path = %path, "Fetched Strapi entries page");

            collected = Some(match collected {
                None => body,
                Some(mut all) => {
                    merge_page(&mut all, body)?;
                    all
                }
            });

            page += 1;
            if u64::from(page) > page_count {
                break;
            }
        }

        collected.ok_or_else(|| ClientError::UnexpectedResponse {
            message: "no pages were fetched".to_string(),
        })
    }

    /// Creates an entry. The body sent is `{"data": data}`.
    ///
    /// # Errors
    ///
    /// - [`ClientError::InvalidPath`] if the API id is empty
    /// - [`ClientError::Status`] for a non-2xx response
    /// - [`ClientError::Http`] on network failure
    pub async fn create_entry(&self, plural_api_id: &str, data: Value) -> Result<Value, ClientError> {
        let path = collection_path(plural_api_id)?;
        let response = self
            .make_request(
                HttpMethod::Post,
                &path,
                Some(json!({ "data": data })),
                Vec::new(),
            )
            .await?;
        Ok(response.body)
    }

    /// Updates an entry. The body sent is `{"data": data}`.
    ///
    /// # Errors
    ///
    /// - [`ClientError::InvalidPath`] if either id is empty
    /// - [`ClientError::Status`] for a non-2xx response
    /// - [`ClientError::Http`] on network failure
    pub async fn update_entry(
        &self,
        plural_api_id: &str,
        document_id: &str,
        data: Value,
    ) -> Result<Value, ClientError> {
        let path = entry_path(plural_api_id, document_id)?;
        let response = self
            .make_request(
                HttpMethod::Put,
                &path,
                Some(json!({ "data": data })),
                Vec::new(),
            )
            .await?;
        Ok(response.body)
    }

    /// Deletes an entry.
    ///
    /// # Errors
    ///
    /// - [`ClientError::InvalidPath`] if either id is empty
    /// - [`ClientError::Status`] for a non-2xx response
    /// - [`ClientError::Http`] on network failure
    pub async fn delete_entry(
        &self,
        plural_api_id: &str,
        document_id: &str,
    ) -> Result<Value, ClientError> {
        let path = entry_path(plural_api_id, document_id)?;
        let response = self
            .make_request(HttpMethod::Delete, &path, None, Vec::new())
            .await?;
        Ok(response.body)
    }

    /// Updates the entry matching `keys`, or creates one if none matches.
    ///
    /// Each key filters with `$eq` on its value in `data`, or `$null` when
    /// that value is `null`. The newest match (by `id`) is updated, addressed
    /// by its `documentId` when present and its `id` otherwise. With
    /// `unique`, more than one match is an error.
    ///
    /// # Errors
    ///
    /// - [`ClientError::MissingKey`] if a key is absent from `data`
    /// - [`ClientError::AmbiguousKeys`] if `unique` and several entries match
    /// - [`ClientError::UnexpectedResponse`] if the lookup lacks `meta.pagination.total` or an id
    /// - any error from [`get_entries`](Self::get_entries), [`create_entry`](Self::create_entry)
    ///   or [`update_entry`](Self::update_entry)
    pub async fn upsert_entry(
        &self,
        plural_api_id: &str,
        data: Value,
        keys: &[&str],
        unique: bool,
    ) -> Result<Value, ClientError> {
        let filters = upsert_filters(&data, keys)?;

        let lookup = EntriesQuery::new()
            .fields(["id"])
            .sort(["id:desc"])
            .filters(filters)
            .pagination(Pagination::page(1, 1));
        let current = self.get_entries(plural_api_id, &lookup).await?;

        let total = current
            .pointer("/meta/pagination/total")
            .and_then(Value::as_u64)
            .ok_or_else(|| ClientError::UnexpectedResponse {
                message: "missing meta.pagination.total".to_string(),
            })?;

        if unique && total > 1 {
            return Err(ClientError::AmbiguousKeys { count: total });
        }

        if total >= 1 {
            let document_id = current
                .pointer("/data/0")
                .and_then(entry_id)
                .ok_or_else(|| ClientError::UnexpectedResponse {
                    message: "matched entry has no documentId or id".to_string(),
                })?;
            tracing::debug!(plural_api_id, document_id = %document_id, "Upsert updating existing entry");
            return self.update_entry(plural_api_id, &document_id, data).await;
        }

        tracing::debug!(plural_api_id, "Upsert creating new entry");
        self.create_entry(plural_api_id, data).await
    }

    async fn make_request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<Value>,
        query: Vec<(String, String)>,
    ) -> Result<HttpResponse, ClientError> {
        let mut builder = HttpRequest::builder(method, path).query_pairs(query);

        if let Some(body_value) = body {
            builder = builder.body(body_value).body_type(DataType::Json);
        }

        let request = builder.build().map_err(|e| ClientError::Http(e.into()))?;
        let headers: HashMap<String, String> = self.auth.auth_header();

        self.http_client
            .request(request, &headers)
            .await
            .map_err(Into::into)
    }
}

fn collection_path(plural_api_id: &str) -> Result<String, ClientError> {
    let plural = plural_api_id.trim_matches('/');
    if plural.is_empty() {
        return Err(ClientError::InvalidPath {
            path: format!("api/{plural_api_id}"),
        });
    }
    Ok(format!("api/{plural}"))
}

fn entry_path(plural_api_id: &str, document_id: &str) -> Result<String, ClientError> {
    let collection = collection_path(plural_api_id)?;
    let id = document_id.trim_matches('/');
    if id.is_empty() {
        return Err(ClientError::InvalidPath {
            path: format!("{collection}/{document_id}"),
        });
    }
    Ok(format!("{collection}/{id}"))
}

fn page_count(body: &Value) -> Result<u64, ClientError> {
    body.pointer("/meta/pagination/pageCount")
        .and_then(Value::as_u64)
        .ok_or_else(|| ClientError::UnexpectedResponse {
            message: "missing meta.pagination.pageCount".to_string(),
        })
}

fn merge_page(all: &mut Value, page: Value) -> Result<(), ClientError> {
    let Value::Object(mut page) = page else {
        return Err(ClientError::UnexpectedResponse {
            message: "page body is not an object".to_string(),
        });
    };

    let Some(Value::Array(new_data)) = page.remove("data") else {
        return Err(ClientError::UnexpectedResponse {
            message: "page has no data array".to_string(),
        });
    };
    match all.get_mut("data") {
        Some(Value::Array(data)) => data.extend(new_data),
        _ => {
            return Err(ClientError::UnexpectedResponse {
                message: "first page has no data array".to_string(),
            })
        }
    }

    if let (Some(meta), Value::Object(all)) = (page.remove("meta"), all) {
        all.insert("meta".to_string(), meta);
    }
    Ok(())
}

fn upsert_filters(data: &Value, keys: &[&str]) -> Result<Value, ClientError> {
    let mut filters = Map::new();
    for key in keys {
        let value = data.get(*key).ok_or_else(|| ClientError::MissingKey {
            key: (*key).to_string(),
        })?;
        let condition = if value.is_null() {
            json!({"$null": "true"})
        } else {
            json!({"$eq": value})
        };
        filters.insert((*key).to_string(), condition);
    }
    Ok(Value::Object(filters))
}

fn entry_id(entry: &Value) -> Option<String> {
    entry
        .get("documentId")
        .or_else(|| entry.get("id"))
        .and_then(|id| match id {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
}
