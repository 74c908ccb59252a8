//! Deep-object encoding of JSON parameter values.
//!
//! Strapi parses nested query keys such as `pagination[page]=2` or
//! `filters[title][$eq]=Hello` into objects. [`stringify_parameters`]
//! flattens an arbitrary [`serde_json::Value`] into that form.

use serde_json::Value;

/// Flattens `value` into deep-object `(key, value)` pairs rooted at `name`.
///
/// - objects recurse as `name[key]`
/// - arrays recurse as `name[index]`
/// - strings are used verbatim
/// - numbers and booleans use their JSON text
/// - `null` produces no pair
///
/// Pairs are returned in document order. Keys and values are unencoded.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use strapi_api::query::stringify_parameters;
///
/// let pairs = stringify_parameters("pagination", &json!({"page": 1, "pageSize": 25}));
/// assert_eq!(
///     pairs,
///     vec![
///         ("pagination[page]".to_string(), "1".to_string()),
///         ("pagination[pageSize]".to_string(), "25".to_string()),
///     ]
/// );
///
/// let pairs = stringify_parameters("sort", &json!(["title:asc", "id:desc"]));
/// assert_eq!(pairs[1], ("sort[1]".to_string(), "id:desc".to_string()));
/// ```
#[must_use]
pub fn stringify_parameters(name: &str, value: &Value) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    flatten_into(name, value, &mut pairs);
    pairs
}

fn flatten_into(name: &str, value: &Value, pairs: &mut Vec<(String, String)>) {
    match value {
        Value::Null => {}
        Value::String(s) => pairs.push((name.to_string(), s.clone())),
        Value::Number(n) => pairs.push((name.to_string(), n.to_string())),
        Value::Bool(b) => pairs.push((name.to_string(), b.to_string())),
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                flatten_into(&format!("{name}[{index}]"), item, pairs);
            }
        }
        Value::Object(map) => {
            for (key, item) in map {
                flatten_into(&format!("{name}[{key}]"), item, pairs);
            }
        }
    }
}
