//! SoQL query types
//!
//! See <https://dev.socrata.com/docs/queries/> for the clause semantics.

use super::params::{keys, QueryParams};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sort direction of an order clause
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Ascending order (default)
    #[default]
    Ascending,
    /// Descending order
    Descending,
}

impl Direction {
    /// SoQL keyword for this direction
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "ASC",
            Self::Descending => "DESC",
        }
    }
}

/// A single `$order` sort key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBy {
    /// Column name
    pub column: String,
    /// Sort direction
    pub direction: Direction,
}

impl OrderBy {
    /// Create a new sort key
    pub fn new(column: impl Into<String>, direction: Direction) -> Self {
        Self {
            column: column.into(),
            direction,
        }
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.column, self.direction.as_str())
    }
}

/// SoQL query clauses
///
/// Empty strings, empty lists and zero limit/offset mean "not set" and are
/// left out of the serialized parameters. Offsets require at least one sort
/// key; the request executor rejects an offset without one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoqlQuery {
    /// Columns to return. Empty means all columns.
    pub select: Vec<String>,
    /// Filter predicate, sent verbatim as `$where`
    pub where_clause: String,
    /// Sort keys. The first key is the primary sort key.
    pub order: Vec<OrderBy>,
    /// Column to group results on
    pub group: String,
    /// Maximum number of results. Zero leaves the server default.
    pub limit: u64,
    /// Number of results to skip
    pub offset: u64,
    /// Full text search, sent as `$q`
    pub search: String,
}

impl SoqlQuery {
    /// Create an empty query
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the selected columns
    #[must_use]
    pub fn select<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.select = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Set the `$where` predicate
    #[must_use]
    pub fn where_clause(mut self, predicate: impl Into<String>) -> Self {
        self.where_clause = predicate.into();
        self
    }

    /// Append a sort key
    #[must_use]
    pub fn order_by(mut self, column: impl Into<String>, direction: Direction) -> Self {
        self.add_order(column, direction);
        self
    }

    /// Set the group-by column
    #[must_use]
    pub fn group(mut self, column: impl Into<String>) -> Self {
        self.group = column.into();
        self
    }

    /// Set the limit
    #[must_use]
    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = limit;
        self
    }

    /// Set the offset
    #[must_use]
    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = offset;
        self
    }

    /// Set the full text search
    #[must_use]
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = text.into();
        self
    }

    /// Append a sort key. Call order is significant: the first call is the
    /// primary sort key.
    pub fn add_order(&mut self, column: impl Into<String>, direction: Direction) {
        self.order.push(OrderBy::new(column, direction));
    }

    /// Remove all sort keys
    pub fn clear_order(&mut self) {
        self.order.clear();
    }

    /// Check if at least one sort key is set
    pub fn has_order(&self) -> bool {
        !self.order.is_empty()
    }

    /// Serialize the non-default clauses into query parameters
    pub fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        if !self.select.is_empty() {
            params.insert(keys::SELECT, self.select.join(","));
        }
        if !self.where_clause.is_empty() {
            params.insert(keys::WHERE, self.where_clause.clone());
        }
        if !self.order.is_empty() {
            let order: Vec<String> = self.order.iter().map(ToString::to_string).collect();
            params.insert(keys::ORDER, order.join(","));
        }
        if !self.search.is_empty() {
            params.insert(keys::SEARCH, self.search.clone());
        }
        if !self.group.is_empty() {
            params.insert(keys::GROUP, self.group.clone());
        }
        if self.limit > 0 {
            params.insert(keys::LIMIT, self.limit.to_string());
        }
        if self.offset > 0 {
            params.insert(keys::OFFSET, self.offset.to_string());
        }
        params
    }
}
