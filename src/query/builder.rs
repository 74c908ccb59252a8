//! The filter query builder.
//!
//! [`QueryBuilder`] accumulates fragments of a deep-object encoded query
//! string. Each call to [`QueryBuilder::field`] opens a fragment
//! `filters[<field>]` and hands back a [`FieldClause`] bound to that field;
//! operator methods on the clause append to the open fragment and record the
//! same clause as a `(key, value)` pair for transports that encode their own
//! query strings.

use std::fmt;

use crate::query::{Condition, FilterOperator, QueryError, QueryValue, SortDirection};

/// Builder for Strapi filter and sort query strings.
///
/// The serialized output keeps the layout existing consumers depend on:
/// fragments are joined with `&` behind an empty leading fragment, so a query
/// with filters begins with `&`, followed by `sort[<i>]=<field>:<dir>` pairs.
///
/// # Falsy values
///
/// By default a single-value operator called with `""`, `0`, `0.0` or
/// `false` emits no clause. This is long-standing behaviour that makes a
/// legitimate zero indistinguishable from "no value"; enable
/// [`keep_falsy_values`](Self::keep_falsy_values) to emit those clauses.
///
/// # Example
///
/// ```rust
/// use strapi_api::query::{QueryBuilder, SortDirection};
///
/// let mut query = QueryBuilder::new();
/// query
///     .field("age")?
///     .greater_than(18)
///     .sort("name", SortDirection::Asc)?;
///
/// assert_eq!(query.to_string(), "&filters[age][$gt]=18&sort[0]=name:asc");
/// # Ok::<(), strapi_api::query::QueryError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryBuilder {
    /// Fragment 0 is always the empty placeholder.
    fragments: Vec<String>,
    /// Decoded `(key, value)` pairs, one per emitted clause.
    clauses: Vec<(String, String)>,
    sort_fields: Vec<String>,
    keep_falsy_values: bool,
}

impl Default for QueryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryBuilder {
    /// Creates an empty builder with the legacy falsy-value policy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            fragments: vec![String::new()],
            clauses: Vec::new(),
            sort_fields: Vec::new(),
            keep_falsy_values: false,
        }
    }

    /// Controls whether falsy values (`""`, `0`, `0.0`, `false`) produce clauses.
    ///
    /// Defaults to `false`, which silently drops such conditions.
    ///
    /// ```rust
    /// use strapi_api::query::QueryBuilder;
    ///
    /// let mut query = QueryBuilder::new().keep_falsy_values(true);
    /// query.field("stock")?.equal(0).end();
    /// assert_eq!(query.to_string(), "&filters[stock][$eq]=0");
    /// # Ok::<(), strapi_api::query::QueryError>(())
    /// ```
    #[must_use]
    pub const fn keep_falsy_values(mut self, keep: bool) -> Self {
        self.keep_falsy_values = keep;
        self
    }

    /// Returns `true` if falsy values produce clauses.
    #[must_use]
    pub const fn keeps_falsy_values(&self) -> bool {
        self.keep_falsy_values
    }

    /// Opens a new `filters[<name>]` fragment and returns a clause bound to it.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::EmptyField`] if `name` is empty or whitespace.
    pub fn field(&mut self, name: impl Into<String>) -> Result<FieldClause<'_>, QueryError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(QueryError::EmptyField);
        }

        self.fragments.push(format!("filters[{name}]"));
        Ok(FieldClause {
            builder: self,
            field: name,
        })
    }

    /// Appends a `field:direction` sort directive.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::EmptyField`] if `field` is empty or whitespace.
    pub fn sort(
        &mut self,
        field: impl Into<String>,
        direction: SortDirection,
    ) -> Result<&mut Self, QueryError> {
        let field = field.into();
        if field.trim().is_empty() {
            return Err(QueryError::EmptyField);
        }

        self.sort_fields.push(format!("{field}:{direction}"));
        Ok(self)
    }

    /// Appends a sort directive from a textual direction (`asc` or `desc`).
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidSortDirection`] for any other direction
    /// and [`QueryError::EmptyField`] for an empty field.
    pub fn sort_by(
        &mut self,
        field: impl Into<String>,
        direction: &str,
    ) -> Result<&mut Self, QueryError> {
        let direction = direction.parse::<SortDirection>()?;
        self.sort(field, direction)
    }

    /// Returns `true` if no field has been opened and no sort added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fragments.len() == 1 && self.sort_fields.is_empty()
    }

    /// Returns the sort directives in insertion order.
    #[must_use]
    pub fn sort_fields(&self) -> &[String] {
        &self.sort_fields
    }

    /// Serializes the builder. Equivalent to `to_string()`.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut query = self.fragments.join("&");

        if !self.sort_fields.is_empty() {
            let sort = self
                .sort_fields
                .iter()
                .enumerate()
                .map(|(index, field)| format!("sort[{index}]={field}"))
                .collect::<Vec<_>>()
                .join("&");
            query.push('&');
            query.push_str(&sort);
        }

        query
    }

    /// Returns the filter clauses as ordered, unencoded `(key, value)` pairs.
    ///
    /// Pairs are recorded as clauses are added, so several conditions on one
    /// field and values containing `&` or `=` come back intact. Bare
    /// `filters[<field>]` fragments carry no condition and have no pair.
    #[must_use]
    pub fn filter_pairs(&self) -> &[(String, String)] {
        &self.clauses
    }

    /// Returns the filter pairs followed by `sort[<i>]` pairs.
    ///
    /// ```rust
    /// use strapi_api::query::QueryBuilder;
    ///
    /// let mut query = QueryBuilder::new();
    /// query.field("price")?.greater_than_or_equal(10).less_than(100).end();
    ///
    /// assert_eq!(query.to_string(), "&filters[price][$gte]=10[$lt]=100");
    /// assert_eq!(
    ///     query.to_pairs(),
    ///     vec![
    ///         ("filters[price][$gte]".to_string(), "10".to_string()),
    ///         ("filters[price][$lt]".to_string(), "100".to_string()),
    ///     ]
    /// );
    /// # Ok::<(), strapi_api::query::QueryError>(())
    /// ```
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let sorts = self
            .sort_fields
            .iter()
            .enumerate()
            .map(|(index, field)| (format!("sort[{index}]"), field.clone()));

        self.clauses.iter().cloned().chain(sorts).collect()
    }

    fn append(&mut self, clause: &str) {
        // field() always runs before a clause exists, so there is a fragment past the placeholder
        if let Some(fragment) = self.fragments.last_mut() {
            fragment.push_str(clause);
        }
    }

    fn record(&mut self, key: String, value: impl Into<String>) {
        self.clauses.push((key, value.into()));
    }
}

impl fmt::Display for QueryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_string())
    }
}

/// A handle binding conditions to one field of a [`QueryBuilder`].
///
/// Returned by [`QueryBuilder::field`]. Operator methods consume and return
/// the handle so that several conditions on the same field chain naturally;
/// [`end`](Self::end) hands the builder back.
///
/// # Example
///
/// ```rust
/// use strapi_api::query::QueryBuilder;
///
/// let mut query = QueryBuilder::new();
/// query
///     .field("price")?
///     .greater_than_or_equal(10)
///     .less_than(100)
///     .field("category")?
///     .in_array(["books", "music"])
///     .end();
///
/// assert_eq!(
///     query.to_string(),
///     "&filters[price][$gte]=10[$lt]=100\
///      &filters[category]&filters[category][$in][0]=books&filters[category][$in][1]=music"
/// );
/// # Ok::<(), strapi_api::query::QueryError>(())
/// ```
#[derive(Debug)]
pub struct FieldClause<'a> {
    builder: &'a mut QueryBuilder,
    field: String,
}

impl<'a> FieldClause<'a> {
    /// Returns the field this clause is bound to.
    #[must_use]
    pub fn field_name(&self) -> &str {
        &self.field
    }

    /// Applies any single-value operator. Falsy values follow the builder policy.
    #[must_use]
    pub fn condition(self, operator: FilterOperator, value: impl Into<QueryValue>) -> Self {
        let value = value.into();
        if value.is_falsy() && !self.builder.keep_falsy_values {
            tracing::trace!(
                "Skipping {} condition on field '{}': falsy value '{}'",
                operator,
                self.field,
                value
            );
            return self;
        }

        let value = value.to_string();
        self.builder.append(&format!("[{operator}]={value}"));
        self.builder
            .record(format!("filters[{}][{operator}]", self.field), value);
        self
    }

    /// `$eq`
    #[must_use]
    pub fn equal(self, value: impl Into<QueryValue>) -> Self {
        self.condition(FilterOperator::Equal, value)
    }

    /// `$eqi`
    #[must_use]
    pub fn equal_case_insensitive(self, value: impl Into<QueryValue>) -> Self {
        self.condition(FilterOperator::EqualCaseInsensitive, value)
    }

    /// `$ne`
    #[must_use]
    pub fn not_equal(self, value: impl Into<QueryValue>) -> Self {
        self.condition(FilterOperator::NotEqual, value)
    }

    /// `$nei`
    #[must_use]
    pub fn not_equal_case_insensitive(self, value: impl Into<QueryValue>) -> Self {
        self.condition(FilterOperator::NotEqualCaseInsensitive, value)
    }

    /// `$lt`
    #[must_use]
    pub fn less_than(self, value: impl Into<QueryValue>) -> Self {
        self.condition(FilterOperator::LessThan, value)
    }

    /// `$lte`
    #[must_use]
    pub fn less_than_or_equal(self, value: impl Into<QueryValue>) -> Self {
        self.condition(FilterOperator::LessThanOrEqual, value)
    }

    /// `$gt`
    #[must_use]
    pub fn greater_than(self, value: impl Into<QueryValue>) -> Self {
        self.condition(FilterOperator::GreaterThan, value)
    }

    /// `$gte`
    #[must_use]
    pub fn greater_than_or_equal(self, value: impl Into<QueryValue>) -> Self {
        self.condition(FilterOperator::GreaterThanOrEqual, value)
    }

    /// `$contains`
    #[must_use]
    pub fn contains(self, value: impl Into<QueryValue>) -> Self {
        self.condition(FilterOperator::Contains, value)
    }

    /// `$notContains`
    #[must_use]
    pub fn not_contains(self, value: impl Into<QueryValue>) -> Self {
        self.condition(FilterOperator::NotContains, value)
    }

    /// `$containsi`
    #[must_use]
    pub fn contains_case_insensitive(self, value: impl Into<QueryValue>) -> Self {
        self.condition(FilterOperator::ContainsCaseInsensitive, value)
    }

    /// `$notContainsi`
    #[must_use]
    pub fn not_contains_case_insensitive(self, value: impl Into<QueryValue>) -> Self {
        self.condition(FilterOperator::NotContainsCaseInsensitive, value)
    }

    /// `$startsWith`
    #[must_use]
    pub fn starts_with(self, value: impl Into<QueryValue>) -> Self {
        self.condition(FilterOperator::StartsWith, value)
    }

    /// `$startsWithi`
    #[must_use]
    pub fn starts_with_case_insensitive(self, value: impl Into<QueryValue>) -> Self {
        self.condition(FilterOperator::StartsWithCaseInsensitive, value)
    }

    /// `$endsWith`
    #[must_use]
    pub fn ends_with(self, value: impl Into<QueryValue>) -> Self {
        self.condition(FilterOperator::EndsWith, value)
    }

    /// `$endsWithi`
    #[must_use]
    pub fn ends_with_case_insensitive(self, value: impl Into<QueryValue>) -> Self {
        self.condition(FilterOperator::EndsWithCaseInsensitive, value)
    }

    /// Appends `[$null]=` with an empty value.
    #[must_use]
    pub fn null(self) -> Self {
        self.builder.append("[$null]=");
        self.builder.record(
            format!("filters[{}][{}]", self.field, FilterOperator::Null),
            "",
        );
        self
    }

    /// Appends `[$notNull]=` with an empty value.
    #[must_use]
    pub fn not_null(self) -> Self {
        self.builder.append("[$notNull]=");
        self.builder.record(
            format!("filters[{}][{}]", self.field, FilterOperator::NotNull),
            "",
        );
        self
    }

    /// Appends `[$between]=<start>,<end>`.
    #[must_use]
    pub fn between(self, start: impl fmt::Display, end: impl fmt::Display) -> Self {
        self.condition(FilterOperator::Between, format!("{start},{end}"))
    }

    /// Appends `&filters[<field>][$in][<i>]=<value>` for every value.
    #[must_use]
    pub fn in_array<I>(self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<QueryValue>,
    {
        self.list_condition(FilterOperator::In, values)
    }

    /// Appends `&filters[<field>][$notIn][<i>]=<value>` for every value.
    #[must_use]
    pub fn not_in_array<I>(self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<QueryValue>,
    {
        self.list_condition(FilterOperator::NotIn, values)
    }

    fn list_condition<I>(self, operator: FilterOperator, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<QueryValue>,
    {
        for (index, value) in values.into_iter().enumerate() {
            let value: QueryValue = value.into();
            let key = format!("filters[{}][{operator}][{index}]", self.field);
            self.builder.append(&format!("&{key}={value}"));
            self.builder.record(key, value.to_string());
        }
        self
    }

    /// Appends `[$and]=[<c1>,<c2>,...]` from pre-built clause strings.
    ///
    /// Accepts anything displayable, including [`Condition`].
    #[must_use]
    pub fn and<I>(self, conditions: I) -> Self
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        let joined = conditions
            .into_iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(",");
        let value = format!("[{joined}]");
        self.builder
            .append(&format!("[{}]={value}", FilterOperator::And));
        self.builder
            .record(format!("filters[{}][{}]", self.field, FilterOperator::And), value);
        self
    }

    /// Appends `[$not]=[<condition>]`.
    #[must_use]
    pub fn not(self, condition: impl fmt::Display) -> Self {
        let value = format!("[{condition}]");
        self.builder
            .append(&format!("[{}]={value}", FilterOperator::Not));
        self.builder
            .record(format!("filters[{}][{}]", self.field, FilterOperator::Not), value);
        self
    }

    /// Appends an `$or` group from structured conditions.
    ///
    /// Each condition becomes `&filters[$or][<i>][<field>][<op>]=<value>`,
    /// where `<field>` is the condition's own field or this clause's field.
    /// Falsy values are always emitted here.
    ///
    /// ```rust
    /// use strapi_api::query::{Condition, FilterOperator, QueryBuilder};
    ///
    /// let mut query = QueryBuilder::new();
    /// query.field("title")?.or([
    ///     Condition::new(FilterOperator::Equal, "rust"),
    ///     Condition::new(FilterOperator::ContainsCaseInsensitive, "cargo").on("body"),
    /// ]).end();
    ///
    /// assert_eq!(
    ///     query.to_string(),
    ///     "&filters[title]&filters[$or][0][title][$eq]=rust&filters[$or][1][body][$containsi]=cargo"
    /// );
    /// # Ok::<(), strapi_api::query::QueryError>(())
    /// ```
    #[must_use]
    pub fn or<I>(self, conditions: I) -> Self
    where
        I: IntoIterator<Item = Condition>,
    {
        for (index, condition) in conditions.into_iter().enumerate() {
            let field = condition.field().unwrap_or(self.field.as_str());
            let key = format!(
                "filters[{}][{index}][{field}][{}]",
                FilterOperator::Or,
                condition.operator()
            );
            let value = condition.value().map(ToString::to_string).unwrap_or_default();
            self.builder.append(&format!("&{key}={value}"));
            self.builder.record(key, value);
        }
        self
    }

    /// Appends an `$or` group from a bracket-delimited expression string.
    ///
    /// The string is split on `[` and every piece, including a leading empty
    /// one, becomes `&filters[$or][<i>][<field>]<piece>`. Kept for
    /// compatibility with callers that pass previously serialized
    /// expressions; prefer [`or`](Self::or). A piece is recorded as a pair
    /// split at its first `=`; pieces without `=` only reach the string.
    #[must_use]
    pub fn or_raw(self, conditions: &str) -> Self {
        for (index, piece) in conditions.split('[').enumerate() {
            let prefix = format!("filters[{}][{index}][{}]", FilterOperator::Or, self.field);
            self.builder.append(&format!("&{prefix}{piece}"));
            if let Some((suffix, value)) = piece.split_once('=') {
                self.builder.record(format!("{prefix}{suffix}"), value);
            }
        }
        self
    }

    /// Opens the next field on the same builder.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::EmptyField`] if `name` is empty or whitespace.
    pub fn field(self, name: impl Into<String>) -> Result<FieldClause<'a>, QueryError> {
        let builder = self.builder;
        builder.field(name)
    }

    /// Appends a sort directive and returns the builder.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::EmptyField`] if `field` is empty or whitespace.
    pub fn sort(
        self,
        field: impl Into<String>,
        direction: SortDirection,
    ) -> Result<&'a mut QueryBuilder, QueryError> {
        let builder = self.builder;
        builder.sort(field, direction)
    }

    /// Finishes this field and returns the builder.
    pub fn end(self) -> &'a mut QueryBuilder {
        self.builder
    }
}
