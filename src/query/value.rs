//! Scalar values accepted by filter operators.

use std::fmt;

/// A scalar value rendered literally into a filter clause.
///
/// `QueryValue` implements `From` for the common string, integer, float and
/// boolean types, so operator methods accept `18`, `"rust"` or `true`
/// directly.
///
/// # Falsy values
///
/// `""`, `0`, `0.0` and `false` are *falsy*. Under the default builder
/// policy a single-value operator called with a falsy value emits nothing;
/// see [`QueryBuilder::keep_falsy_values`](crate::query::QueryBuilder::keep_falsy_values).
///
/// # Example
///
/// ```rust
/// use strapi_api::query::QueryValue;
///
/// assert_eq!(QueryValue::from(18).to_string(), "18");
/// assert_eq!(QueryValue::from(true).to_string(), "true");
/// assert!(QueryValue::from("").is_falsy());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum QueryValue {
    /// A text value.
    Text(String),
    /// A signed integer.
    Integer(i64),
    /// An unsigned integer.
    Unsigned(u64),
    /// A floating point number.
    Float(f64),
    /// A boolean, rendered as `true`/`false`.
    Boolean(bool),
}

impl QueryValue {
    /// Returns `true` if this value is empty, zero or `false`.
    #[must_use]
    pub fn is_falsy(&self) -> bool {
        match self {
            Self::Text(s) => s.is_empty(),
            Self::Integer(n) => *n == 0,
            Self::Unsigned(n) => *n == 0,
            Self::Float(n) => *n == 0.0,
            Self::Boolean(b) => !b,
        }
    }
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Unsigned(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for QueryValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<f32> for QueryValue {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for QueryValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for QueryValue {
            fn from(value: $t) -> Self {
                Self::Integer(i64::from(value))
            }
        })*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for QueryValue {
            fn from(value: $t) -> Self {
                Self::Unsigned(u64::from(value))
            }
        })*
    };
}

impl_from_signed!(i8, i16, i32, i64);
impl_from_unsigned!(u8, u16, u32, u64);

impl From<usize> for QueryValue {
    fn from(value: usize) -> Self {
        Self::Unsigned(value as u64)
    }
}
