//! Simple equality filters
//!
//! See <https://dev.socrata.com/docs/filtering.html>

use super::params::QueryParams;
use crate::types::StringMap;
use serde::{Deserialize, Serialize};

/// Exact-match filters keyed by column name
///
/// Multiple filters are combined by the server with a boolean AND. Key order
/// carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SimpleFilters(StringMap);

impl SimpleFilters {
    /// Create an empty filter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter `column` on `value`, replacing any previous value
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.0.insert(column.into(), value.into());
    }

    /// Remove the filter on `column`
    pub fn remove(&mut self, column: &str) -> Option<String> {
        self.0.remove(column)
    }

    /// Get the filter value for `column`
    pub fn get(&self, column: &str) -> Option<&str> {
        self.0.get(column).map(String::as_str)
    }

    /// Remove all filters
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Number of filters
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if no filter is set
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(column, value)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Serialize the filters into query parameters
    pub fn to_params(&self) -> QueryParams {
        self.0.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}

impl<K, V> FromIterator<(K, V)> for SimpleFilters
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
