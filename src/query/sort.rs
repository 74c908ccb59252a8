//! Sort directives.

use std::fmt;
use std::str::FromStr;

use crate::query::QueryError;

/// Direction of a sort directive.
///
/// Defaults to [`SortDirection::Asc`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortDirection {
    /// Ascending order (`asc`).
    #[default]
    Asc,
    /// Descending order (`desc`).
    Desc,
}

impl SortDirection {
    /// Returns the direction as it appears in `field:direction`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = QueryError;

    /// Parses `asc` or `desc`. Matching is exact; `ASC` is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(QueryError::InvalidSortDirection {
                direction: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_ascending() {
        assert_eq!(SortDirection::default(), SortDirection::Asc);
    }

    #[test]
    fn test_parse_accepts_asc_and_desc() {
        assert_eq!("asc".parse::<SortDirection>().unwrap(), SortDirection::Asc);
        assert_eq!("desc".parse::<SortDirection>().unwrap(), SortDirection::Desc);
    }

    #[test]
    fn test_parse_rejects_anything_else() {
        for bad in ["", "ASC", "descending", "up"] {
            assert_eq!(
                bad.parse::<SortDirection>(),
                Err(QueryError::InvalidSortDirection {
                    direction: bad.to_string()
                })
            );
        }
    }
}
