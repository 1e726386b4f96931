//! Dataset metadata module
//!
//! Metadata lives at `<scheme>://<host>/views/<resource id>`, next to the
//! resource endpoint. The locator is derived from the endpoint once; a
//! malformed resource identifier fails before any request is made.

mod locator;
mod types;

pub use locator::MetadataLocator;
pub use types::{Column, ColumnFormat, Grant, License, Metadata, User};
