//! Filter operator codes understood by the Strapi REST API.

use std::fmt;
use std::str::FromStr;

use crate::query::QueryError;

/// A Strapi filter operator.
///
/// Each variant maps to the `$`-prefixed code used inside the bracket
/// encoding, e.g. `filters[title][$containsi]=rust`.
///
/// # Example
///
/// ```rust
/// use strapi_api::query::FilterOperator;
///
/// assert_eq!(FilterOperator::GreaterThan.code(), "$gt");
/// assert_eq!("$notIn".parse::<FilterOperator>().unwrap(), FilterOperator::NotIn);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FilterOperator {
    /// `$eq`
    Equal,
    /// `$eqi`
    EqualCaseInsensitive,
    /// `$ne`
    NotEqual,
    /// `$nei`
    NotEqualCaseInsensitive,
    /// `$lt`
    LessThan,
    /// `$lte`
    LessThanOrEqual,
    /// `$gt`
    GreaterThan,
    /// `$gte`
    GreaterThanOrEqual,
    /// `$in`
    In,
    /// `$notIn`
    NotIn,
    /// `$contains`
    Contains,
    /// `$notContains`
    NotContains,
    /// `$containsi`
    ContainsCaseInsensitive,
    /// `$notContainsi`
    NotContainsCaseInsensitive,
    /// `$null`
    Null,
    /// `$notNull`
    NotNull,
    /// `$between`
    Between,
    /// `$startsWith`
    StartsWith,
    /// `$startsWithi`
    StartsWithCaseInsensitive,
    /// `$endsWith`
    EndsWith,
    /// `$endsWithi`
    EndsWithCaseInsensitive,
    /// `$and`
    And,
    /// `$or`
    Or,
    /// `$not`
    Not,
}

impl FilterOperator {
    /// Every operator, in declaration order.
    pub const ALL: [Self; 24] = [
        Self::Equal,
        Self::EqualCaseInsensitive,
        Self::NotEqual,
        Self::NotEqualCaseInsensitive,
        Self::LessThan,
        Self::LessThanOrEqual,
        Self::GreaterThan,
        Self::GreaterThanOrEqual,
        Self::In,
        Self::NotIn,
        Self::Contains,
        Self::NotContains,
        Self::ContainsCaseInsensitive,
        Self::NotContainsCaseInsensitive,
        Self::Null,
        Self::NotNull,
        Self::Between,
        Self::StartsWith,
        Self::StartsWithCaseInsensitive,
        Self::EndsWith,
        Self::EndsWithCaseInsensitive,
        Self::And,
        Self::Or,
        Self::Not,
    ];

    /// Returns the operator code as it appears in the query string.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Equal => "$eq",
            Self::EqualCaseInsensitive => "$eqi",
            Self::NotEqual => "$ne",
            Self::NotEqualCaseInsensitive => "$nei",
            Self::LessThan => "$lt",
            Self::LessThanOrEqual => "$lte",
            Self::GreaterThan => "$gt",
            Self::GreaterThanOrEqual => "$gte",
            Self::In => "$in",
            Self::NotIn => "$notIn",
            Self::Contains => "$contains",
            Self::NotContains => "$notContains",
            Self::ContainsCaseInsensitive => "$containsi",
            Self::NotContainsCaseInsensitive => "$notContainsi",
            Self::Null => "$null",
            Self::NotNull => "$notNull",
            Self::Between => "$between",
            Self::StartsWith => "$startsWith",
            Self::StartsWithCaseInsensitive => "$startsWithi",
            Self::EndsWith => "$endsWith",
            Self::EndsWithCaseInsensitive => "$endsWithi",
            Self::And => "$and",
            Self::Or => "$or",
            Self::Not => "$not",
        }
    }

    /// Returns `true` for operators that take an ordered list of values.
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Self::In | Self::NotIn)
    }

    /// Returns `true` for the `$and`/`$or`/`$not` combinators.
    #[must_use]
    pub const fn is_combinator(&self) -> bool {
        matches!(self, Self::And | Self::Or | Self::Not)
    }
}

impl fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for FilterOperator {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|op| op.code() == s)
            .copied()
            .ok_or_else(|| QueryError::UnknownOperator {
                code: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip_through_from_str() {
        for op in FilterOperator::ALL {
            assert_eq!(op.code().parse::<FilterOperator>().unwrap(), op);
        }
    }

    #[test]
    fn test_codes_are_case_sensitive() {
        assert_eq!(
            "$startswith".parse::<FilterOperator>(),
            Err(QueryError::UnknownOperator {
                code: "$startswith".to_string()
            })
        );
    }

    #[test]
    fn test_display_matches_code() {
        assert_eq!(FilterOperator::NotContainsCaseInsensitive.to_string(), "$notContainsi");
        assert_eq!(FilterOperator::Between.to_string(), "$between");
    }

    #[test]
    fn test_list_and_combinator_classification() {
        assert!(FilterOperator::In.is_list());
        assert!(FilterOperator::NotIn.is_list());
        assert!(!FilterOperator::Equal.is_list());

        assert!(FilterOperator::Or.is_combinator());
        assert!(!FilterOperator::Null.is_combinator());
    }
}
