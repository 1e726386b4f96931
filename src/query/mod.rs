//! Query model module
//!
//! Structured representation of SoQL (Socrata Query Language) clauses and
//! simple equality filters, serialized deterministically into URL query
//! parameters.
//!
//! # Overview
//!
//! - [`SoqlQuery`] holds `$select`, `$where`, `$order`, `$group`, `$q`,
//!   `$limit` and `$offset`. Only non-default clauses are serialized.
//! - [`SimpleFilters`] maps column names to exact-match values; the server
//!   combines them with a boolean AND.
//! - [`QueryParams`] is the merged, key-sorted parameter set sent on the wire.
//!   Filters are merged first and query clauses second, so a query clause
//!   overwrites a filter with the same key.

mod filters;
mod params;
mod types;

pub use filters::SimpleFilters;
pub use params::{keys, QueryParams};
pub use types::{Direction, OrderBy, SoqlQuery};
