//! Structured filter conditions for the combinator overloads.

use std::fmt;

use crate::query::{FilterOperator, QueryValue};

/// A single operator application, optionally bound to its own field.
///
/// Conditions feed [`FieldClause::or`](crate::query::FieldClause::or), and
/// their `Display` output is the pre-built clause string accepted by
/// [`FieldClause::and`](crate::query::FieldClause::and) and
/// [`FieldClause::not`](crate::query::FieldClause::not).
///
/// # Example
///
/// ```rust
/// use strapi_api::query::{Condition, FilterOperator};
///
/// let cond = Condition::new(FilterOperator::Equal, "draft");
/// assert_eq!(cond.to_string(), "[$eq]=draft");
///
/// let cond = Condition::new(FilterOperator::GreaterThan, 3).on("rating");
/// assert_eq!(cond.to_string(), "[rating][$gt]=3");
///
/// assert_eq!(Condition::null().to_string(), "[$null]=");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Condition {
    field: Option<String>,
    operator: FilterOperator,
    value: Option<QueryValue>,
}

impl Condition {
    /// Creates a condition applying `operator` to `value`.
    #[must_use]
    pub fn new(operator: FilterOperator, value: impl Into<QueryValue>) -> Self {
        Self {
            field: None,
            operator,
            value: Some(value.into()),
        }
    }

    /// A `$null` condition.
    #[must_use]
    pub const fn null() -> Self {
        Self {
            field: None,
            operator: FilterOperator::Null,
            value: None,
        }
    }

    /// A `$notNull` condition.
    #[must_use]
    pub const fn not_null() -> Self {
        Self {
            field: None,
            operator: FilterOperator::NotNull,
            value: None,
        }
    }

    /// A `$between` condition over `start,end`.
    #[must_use]
    pub fn between(start: impl fmt::Display, end: impl fmt::Display) -> Self {
        Self::new(FilterOperator::Between, format!("{start},{end}"))
    }

    /// Binds this condition to `field` instead of the enclosing field.
    #[must_use]
    pub fn on(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Returns the field override, if any.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// Returns the operator.
    #[must_use]
    pub const fn operator(&self) -> FilterOperator {
        self.operator
    }

    /// Returns the value, `None` for `$null`/`$notNull`.
    #[must_use]
    pub const fn value(&self) -> Option<&QueryValue> {
        self.value.as_ref()
    }

    /// Renders `[<op>]=<value>` without any field segment.
    pub(crate) fn operator_clause(&self) -> String {
        match &self.value {
            Some(value) => format!("[{}]={value}", self.operator),
            None => format!("[{}]=", self.operator),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{field}]")?;
        }
        f.write_str(&self.operator_clause())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_between_joins_with_comma() {
        let cond = Condition::between(1, 10);
        assert_eq!(cond.operator(), FilterOperator::Between);
        assert_eq!(cond.to_string(), "[$between]=1,10");
    }

    #[test]
    fn test_not_null_has_no_value() {
        let cond = Condition::not_null().on("publishedAt");
        assert!(cond.value().is_none());
        assert_eq!(cond.field(), Some("publishedAt"));
        assert_eq!(cond.to_string(), "[publishedAt][$notNull]=");
    }

    #[test]
    fn test_operator_clause_ignores_field_override() {
        let cond = Condition::new(FilterOperator::ContainsCaseInsensitive, "rust").on("title");
        assert_eq!(cond.operator_clause(), "[$containsi]=rust");
    }
}
