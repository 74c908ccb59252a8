//! Request parameters for entry reads.

use std::fmt;

use serde_json::{json, Value};

use crate::query::{stringify_parameters, QueryBuilder};

/// Which entries to return with respect to the draft/publish workflow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PublicationState {
    /// Only published entries.
    Live,
    /// Published entries and drafts.
    Preview,
}

impl PublicationState {
    /// Returns the wire value (`live` or `preview`).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Preview => "preview",
        }
    }
}

impl fmt::Display for PublicationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pagination parameters, by page or by offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pagination {
    /// `pagination[page]` and `pagination[pageSize]`.
    Page {
        /// 1-based page number.
        page: u32,
        /// Entries per page.
        page_size: u32,
    },
    /// `pagination[start]` and `pagination[limit]`.
    Offset {
        /// 0-based index of the first entry.
        start: u32,
        /// Maximum number of entries.
        limit: u32,
    },
}

impl Pagination {
    /// Page-based pagination.
    #[must_use]
    pub const fn page(page: u32, page_size: u32) -> Self {
        Self::Page { page, page_size }
    }

    /// Offset-based pagination.
    #[must_use]
    pub const fn offset(start: u32, limit: u32) -> Self {
        Self::Offset { start, limit }
    }

    fn to_value(self) -> Value {
        match self {
            Self::Page { page, page_size } => json!({"page": page, "pageSize": page_size}),
            Self::Offset { start, limit } => json!({"start": start, "limit": limit}),
        }
    }
}

/// Parameters for reading a single entry.
///
/// # Example
///
/// ```rust
/// use strapi_api::clients::EntryQuery;
///
/// let query = EntryQuery::new().populate(["author"]).fields(["title"]);
/// assert_eq!(
///     query.to_pairs(),
///     vec![
///         ("populate[0]".to_string(), "author".to_string()),
///         ("fields[0]".to_string(), "title".to_string()),
///     ]
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EntryQuery {
    populate: Vec<String>,
    fields: Vec<String>,
}

impl EntryQuery {
    /// Creates an empty query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Relations and components to populate.
    #[must_use]
    pub fn populate<I, S>(mut self, populate: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.populate = populate.into_iter().map(Into::into).collect();
        self
    }

    /// Attributes to select.
    #[must_use]
    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Renders the parameters as ordered, unencoded query pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = list_pairs("populate", &self.populate);
        pairs.extend(list_pairs("fields", &self.fields));
        pairs
    }
}

/// Parameters for listing entries.
///
/// Filters can be given as a JSON object (`filters`), as a [`QueryBuilder`]
/// (`query`), or both; both are sent. Sort directives from [`sort`](Self::sort)
/// come first, followed by those recorded on the builder.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use strapi_api::clients::{EntriesQuery, Pagination};
///
/// let query = EntriesQuery::new()
///     .sort(["title:asc"])
///     .filters(json!({"views": {"$gt": 100}}))
///     .pagination(Pagination::page(2, 10));
///
/// let pairs = query.to_pairs();
/// assert_eq!(pairs[0], ("sort[0]".to_string(), "title:asc".to_string()));
/// assert_eq!(pairs[1], ("filters[views][$gt]".to_string(), "100".to_string()));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EntriesQuery {
    sort: Vec<String>,
    filters: Option<Value>,
    query: Option<QueryBuilder>,
    pagination: Option<Pagination>,
    populate: Vec<String>,
    fields: Vec<String>,
    publication_state: Option<PublicationState>,
    get_all: bool,
    batch_size: Option<u32>,
}

impl EntriesQuery {
    /// Creates an empty query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sort directives such as `title:asc`.
    #[must_use]
    pub fn sort<I, S>(mut self, sort: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sort = sort.into_iter().map(Into::into).collect();
        self
    }

    /// Filters as a JSON object, e.g. `{"title": {"$eq": "Hello"}}`.
    #[must_use]
    pub fn filters(mut self, filters: Value) -> Self {
        self.filters = Some(filters);
        self
    }

    /// Filters and sorts recorded on a [`QueryBuilder`].
    #[must_use]
    pub fn query(mut self, query: QueryBuilder) -> Self {
        self.query = Some(query);
        self
    }

    /// Explicit pagination. Ignored when collecting all pages.
    #[must_use]
    pub const fn pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = Some(pagination);
        self
    }

    /// Relations and components to populate.
    #[must_use]
    pub fn populate<I, S>(mut self, populate: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.populate = populate.into_iter().map(Into::into).collect();
        self
    }

    /// Attributes to select.
    #[must_use]
    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Draft/publish filter.
    #[must_use]
    pub const fn publication_state(mut self, state: PublicationState) -> Self {
        self.publication_state = Some(state);
        self
    }

    /// Fetch every page and concatenate the results.
    #[must_use]
    pub const fn get_all(mut self, get_all: bool) -> Self {
        self.get_all = get_all;
        self
    }

    /// Page size used when collecting all pages. Defaults to the config's batch size.
    #[must_use]
    pub const fn batch_size(mut self, size: u32) -> Self {
        self.batch_size = Some(size);
        self
    }

    /// Returns `true` if all pages will be collected.
    #[must_use]
    pub const fn collects_all(&self) -> bool {
        self.get_all
    }

    /// Returns the explicit batch size, if set.
    #[must_use]
    pub const fn explicit_batch_size(&self) -> Option<u32> {
        self.batch_size
    }

    /// Renders the parameters as ordered, unencoded query pairs.
    ///
    /// Order: sort, filters, pagination, populate, fields, publication state.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        self.pairs_with_pagination(self.pagination)
    }

    pub(crate) fn pairs_with_pagination(
        &self,
        pagination: Option<Pagination>,
    ) -> Vec<(String, String)> {
        let builder_sorts = self
            .query
            .as_ref()
            .map_or(&[][..], QueryBuilder::sort_fields);
        let sort: Vec<&str> = self
            .sort
            .iter()
            .map(String::as_str)
            .chain(builder_sorts.iter().map(String::as_str))
            .collect();

        let mut pairs = list_pairs("sort", &sort);
        if let Some(filters) = &self.filters {
            pairs.extend(stringify_parameters("filters", filters));
        }
        if let Some(query) = &self.query {
            // bare field fragments have no pair, so Strapi never sees `filters[title]=`
            pairs.extend_from_slice(query.filter_pairs());
        }
        if let Some(pagination) = pagination {
            pairs.extend(stringify_parameters("pagination", &pagination.to_value()));
        }
        pairs.extend(list_pairs("populate", &self.populate));
        pairs.extend(list_pairs("fields", &self.fields));
        if let Some(state) = self.publication_state {
            pairs.push(("publicationState".to_string(), state.to_string()));
        }
        pairs
    }
}

fn list_pairs<S: AsRef<str>>(name: &str, values: &[S]) -> Vec<(String, String)> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| (format!("{name}[{index}]"), value.as_ref().to_string()))
        .collect()
}
