//! Request module
//!
//! [`GetRequest`] bundles an endpoint, an application token, a response
//! format, filters and a SoQL query. It issues single GET requests and
//! answers a few questions about the dataset by temporarily reshaping its
//! own query:
//!
//! - [`GetRequest::count`] - number of records matching the filters
//! - [`GetRequest::fields`] - column names of the dataset
//! - [`GetRequest::modified`] - last modification time
//!
//! The reshaped clauses are restored on every exit path, including errors
//! and dropped futures.
//!
//! A `GetRequest` is not meant to be shared between concurrent tasks while
//! its query changes; use [`crate::pagination::OffsetFetcher`] for that.

mod executor;
mod get;
mod probes;
mod scoped;

pub use get::{GetRequest, PreparedRequest};
pub use probes::{COUNT_COLUMN, TRUTH_LAST_MODIFIED_HEADER};
pub(crate) use executor::execute;
pub(crate) use get::OFFSET_WITHOUT_ORDER;
