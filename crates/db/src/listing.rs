//! Shared vocabulary for list endpoints: sort direction, pagination,
//! and safe quoting of caller-supplied sort columns.

use newswire_core::error::DomainError;

/// Default page size for list endpoints.
pub const DEFAULT_LIMIT: i64 = 10;

/// Sort direction for list queries.
///
/// Parsing is strict: anything other than `asc`/`desc` is rejected before
/// a query is built, with the exact client-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Asc,
    Desc,
}

impl Order {
    /// Parse an optional `order` query value. `None` defaults to descending.
    pub fn parse(raw: Option<&str>) -> Result<Self, DomainError> {
        match raw {
            None => Ok(Order::Desc),
            Some("asc") => Ok(Order::Asc),
            Some("desc") => Ok(Order::Desc),
            Some(_) => Err(DomainError::validation(
                "order must be either 'asc' or 'desc'",
            )),
        }
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            Order::Asc => "ASC",
            Order::Desc => "DESC",
        }
    }
}

/// Sorting and pagination for a list query, validated before any SQL runs.
#[derive(Debug, Clone)]
pub struct ListOptions {
    /// Column to sort by. Not allow-listed: an unknown column fails at
    /// Postgres with 42703 and is translated to "column does not exist".
    pub sort_by: String,
    pub order: Order,
    pub limit: i64,
    pub offset: i64,
}

/// Quote a possibly table-qualified identifier for interpolation into
/// `ORDER BY`.
///
/// Each dot-separated segment is double-quoted with embedded quotes
/// doubled, so a hostile `sort_by` value can at worst name a column that
/// does not exist -- it can never break out of the identifier position.
pub fn quote_ident(path: &str) -> String {
    path.split('.')
        .map(|segment| format!("\"{}\"", segment.replace('"', "\"\"")))
        .collect::<Vec<_>>()
        .join(".")
}
