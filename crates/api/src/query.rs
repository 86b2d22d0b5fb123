//! Query-string and body parameter parsing for list and vote endpoints.
//!
//! Numeric parameters are deserialized as raw strings and parsed here so a
//! malformed value is rejected with the contracted message before any query
//! executes, instead of axum's generic deserialization rejection.

use newswire_core::error::DomainError;
use newswire_core::types::DbId;
use newswire_db::listing::{ListOptions, Order, DEFAULT_LIMIT};
use serde::Deserialize;

/// Raw query parameters for `GET /api/articles`.
#[derive(Debug, Default, Deserialize)]
pub struct ArticleListParams {
    pub sort_by: Option<String>,
    pub order: Option<String>,
    pub author: Option<String>,
    pub topic: Option<String>,
    pub limit: Option<String>,
    pub p: Option<String>,
}

/// Raw query parameters for `GET /api/articles/{id}/comments`.
#[derive(Debug, Default, Deserialize)]
pub struct CommentListParams {
    pub sort_by: Option<String>,
    pub order: Option<String>,
    pub limit: Option<String>,
    pub p: Option<String>,
}

/// Validate and assemble sorting/pagination options.
///
/// `order` and `limit` are checked before any storage access; `sort_by` is
/// passed through unchecked and left to fail at the database. `p` is a
/// 1-based page number translated to an offset.
pub fn parse_list_options(
    sort_by: Option<String>,
    default_sort: &str,
    order: Option<&str>,
    limit: Option<&str>,
    p: Option<&str>,
) -> Result<ListOptions, DomainError> {
    let order = Order::parse(order)?;
    let limit = parse_positive(limit, DEFAULT_LIMIT, "limit must be a number")?;
    let page = parse_positive(p, 1, "p must be a number")?;

    // Both factors are caller-controlled, so the offset can overflow i64.
    let offset = (page - 1)
        .checked_mul(limit)
        .ok_or_else(|| DomainError::validation("p must be a number"))?;

    Ok(ListOptions {
        sort_by: sort_by.unwrap_or_else(|| default_sort.to_string()),
        order,
        limit,
        offset,
    })
}

/// Parse an optional positive integer, with a fixed message on failure.
fn parse_positive(
    raw: Option<&str>,
    default: i64,
    message: &'static str,
) -> Result<i64, DomainError> {
    match raw {
        None => Ok(default),
        Some(s) => match s.parse::<i64>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(DomainError::validation(message)),
        },
    }
}

/// Parse a path id, producing the same message a Postgres integer-syntax
/// violation would so the client contract is uniform.
pub fn parse_id(raw: &str) -> Result<DbId, DomainError> {
    raw.parse::<DbId>()
        .map_err(|_| DomainError::validation("invalid input syntax for integer"))
}

/// Validate a vote-update body under the strict contract: a JSON object
/// whose only property is `inc_votes` with an integer value.
pub fn parse_inc_votes(body: &serde_json::Value) -> Result<i32, DomainError> {
    let inc_votes = match body.get("inc_votes") {
        Some(value) => value,
        None => {
            return Err(DomainError::validation(
                "request body must have 'inc_votes' property",
            ))
        }
    };

    let delta = inc_votes
        .as_i64()
        .and_then(|n| i32::try_from(n).ok())
        .ok_or_else(|| {
            DomainError::validation("value of 'inc_votes' property must be a number")
        })?;

    let property_count = body.as_object().map(|obj| obj.len()).unwrap_or(0);
    if property_count > 1 {
        return Err(DomainError::validation(
            "request body must have only one property",
        ));
    }

    Ok(delta)
}
