//! Wire parameters
//!
//! Parameters are kept sorted by key so that encoding is deterministic.

use super::filters::SimpleFilters;
use super::types::SoqlQuery;
use std::collections::BTreeMap;
use url::form_urlencoded;

/// Reserved SoQL parameter names
pub mod keys {
    /// Selected columns
    pub const SELECT: &str = "$select";
    /// Filter predicate
    pub const WHERE: &str = "$where";
    /// Sort keys
    pub const ORDER: &str = "$order";
    /// Group-by column
    pub const GROUP: &str = "$group";
    /// Full text search
    pub const SEARCH: &str = "$q";
    /// Result limit
    pub const LIMIT: &str = "$limit";
    /// Result offset
    pub const OFFSET: &str = "$offset";
}

/// Key-sorted query parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(BTreeMap<String, String>);

impl QueryParams {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge filters and query clauses into one parameter set.
    ///
    /// Filters go in first; a query clause with the same key wins.
    pub fn merged(filters: &SimpleFilters, query: &SoqlQuery) -> Self {
        let mut params = filters.to_params();
        params.extend(query.to_params());
        params
    }

    /// Insert a parameter, replacing any previous value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Get a parameter value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Check if a parameter is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over parameters in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Encode as `application/x-www-form-urlencoded`, keys in sorted order
    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.iter())
            .finish()
    }
}

impl Extend<(String, String)> for QueryParams {
    fn extend<I: IntoIterator<Item = (String, String)>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl FromIterator<(String, String)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for QueryParams {
    type Item = (String, String);
    type IntoIter = std::collections::btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
