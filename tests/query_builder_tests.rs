//! Integration tests for the query builder.
//!
//! These tests exercise the public query API end to end and check that
//! builder output and JSON-encoded filters decode to the same parameters.

use serde_json::json;
use strapi_api::query::{
    stringify_parameters, Condition, FilterOperator, QueryBuilder, QueryError, SortDirection,
};

fn condition_pairs(query: &QueryBuilder) -> Vec<(String, String)> {
    query.filter_pairs().to_vec()
}

// ============================================================================
// End-to-End Serialization
// ============================================================================

#[test]
fn test_filter_and_sort_end_to_end() -> Result<(), QueryError> {
    let mut query = QueryBuilder::new();
    query
        .field("age")?
        .greater_than(18)
        .sort("name", SortDirection::Asc)?;

    assert_eq!(query.to_string(), "&filters[age][$gt]=18&sort[0]=name:asc");
    Ok(())
}

#[test]
fn test_in_array_and_sorts() -> Result<(), QueryError> {
    let mut query = QueryBuilder::new();
    query.field("f")?.in_array(["a", "b"]).end();
    query.sort("name", SortDirection::Desc)?;
    query.sort("age", SortDirection::default())?;

    let serialized = query.to_string();
    assert!(serialized.contains("&filters[f][$in][0]=a"));
    assert!(serialized.contains("&filters[f][$in][1]=b"));
    assert!(serialized.ends_with("sort[0]=name:desc&sort[1]=age:asc"));
    Ok(())
}

#[test]
fn test_between_value_portion() -> Result<(), QueryError> {
    let mut query = QueryBuilder::new();
    query.field("price")?.between(1, 10).end();

    assert_eq!(query.to_string(), "&filters[price][$between]=1,10");
    Ok(())
}

#[test]
fn test_every_operator_code_round_trips_through_parse() {
    for operator in FilterOperator::ALL {
        let parsed: FilterOperator = operator.code().parse().unwrap();
        assert_eq!(parsed, operator);
    }
    assert!(matches!(
        "$like".parse::<FilterOperator>(),
        Err(QueryError::UnknownOperator { .. })
    ));
}

#[test]
fn test_validation_errors_are_raised_immediately() {
    let mut query = QueryBuilder::new();

    assert!(matches!(query.field("  "), Err(QueryError::EmptyField)));
    assert!(matches!(
        query.sort_by("name", "up"),
        Err(QueryError::InvalidSortDirection { .. })
    ));
    assert!(query.is_empty());
}

// ============================================================================
// Falsy Values
// ============================================================================

#[test]
fn test_falsy_values_skipped_by_default() -> Result<(), QueryError> {
    // Zero and empty string are dropped silently under the default policy
    let mut query = QueryBuilder::new();
    query.field("views")?.equal(0).field("title")?.equal("").end();

    assert!(condition_pairs(&query).is_empty());
    Ok(())
}

#[test]
fn test_keep_falsy_values_emits_them() -> Result<(), QueryError> {
    let mut query = QueryBuilder::new().keep_falsy_values(true);
    query.field("views")?.equal(0).field("draft")?.equal(false).end();

    assert_eq!(
        query.to_string(),
        "&filters[views][$eq]=0&filters[draft][$eq]=false"
    );
    Ok(())
}

// ============================================================================
// Structured vs Manual Construction
// ============================================================================

#[test]
fn test_builder_and_json_filters_decode_identically() -> Result<(), QueryError> {
    let mut query = QueryBuilder::new();
    query
        .field("age")?
        .greater_than(18)
        .field("name")?
        .equal("bob")
        .field("tags")?
        .in_array(["rust", "cms"])
        .end();

    let from_json = stringify_parameters(
        "filters",
        &json!({
            "age": {"$gt": 18},
            "name": {"$eq": "bob"},
            "tags": {"$in": ["rust", "cms"]}
        }),
    );

    assert_eq!(condition_pairs(&query), from_json);
    Ok(())
}

#[test]
fn test_structured_or_matches_json_or() -> Result<(), QueryError> {
    let mut query = QueryBuilder::new();
    query
        .field("title")?
        .or([
            Condition::new(FilterOperator::Equal, "a"),
            Condition::new(FilterOperator::ContainsCaseInsensitive, "b").on("summary"),
        ])
        .end();

    let from_json = stringify_parameters(
        "filters",
        &json!({"$or": [{"title": {"$eq": "a"}}, {"summary": {"$containsi": "b"}}]}),
    );

    assert_eq!(condition_pairs(&query), from_json);
    Ok(())
}

#[test]
fn test_chained_conditions_and_reserved_characters_match_json() -> Result<(), QueryError> {
    let mut query = QueryBuilder::new();
    query
        .field("price")?
        .greater_than_or_equal(10)
        .less_than(100)
        .field("slug")?
        .starts_with("a=b")
        .field("title")?
        .equal("Tom & Jerry")
        .end();

    let from_json = stringify_parameters(
        "filters",
        &json!({
            "price": {"$gte": 10, "$lt": 100},
            "title": {"$eq": "Tom & Jerry"},
            "slug": {"$startsWith": "a=b"}
        }),
    );

    assert_eq!(condition_pairs(&query), from_json);
    Ok(())
}

#[test]
fn test_builder_is_reusable_after_serialization() -> Result<(), QueryError> {
    let mut query = QueryBuilder::new();
    query.field("a")?.equal(1).end();
    let first = query.to_string();

    query.field("b")?.equal(2).end();
    let second = query.to_string();

    assert!(second.starts_with(&first));
    assert_eq!(second, "&filters[a][$eq]=1&filters[b][$eq]=2");
    Ok(())
}
