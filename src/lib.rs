// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # SODA Client
//!
//! Read-only client for the Socrata Open Data API (SODA).
//!
//! ## Features
//!
//! - **Query Model**: SoQL clauses and equality filters with deterministic
//!   query strings
//! - **Single Requests**: GET with app token header and status classification
//! - **Dataset Probes**: record count, field names, last modification, metadata
//! - **Concurrent Pagination**: gapless, non-overlapping offset windows shared
//!   between any number of tasks
//! - **Pluggable Transport**: reqwest by default, any [`http::Transport`] works
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use soda_client::{Direction, GetRequest, OffsetFetcher, Result};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let mut request = GetRequest::new("https://data.ct.gov/resource/y6p2-px98", "")?;
//!     request.query.where_clause = "item = 'Radishes'".to_string();
//!     request.query.add_order("farm_name", Direction::Ascending);
//!
//!     let fetcher = Arc::new(OffsetFetcher::new(request).await?);
//!     let pages = fetcher
//!         .fetch_concurrently(4, 500, |window, response| async move {
//!             let body = response.text().await?;
//!             println!("{}..{}: {} bytes", window.offset, window.end(), body.len());
//!             Ok(())
//!         })
//!         .await?;
//!     println!("{pages} pages");
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                 Pagination (OffsetFetcher)               │
//! │   count once → claim window under lock → GET outside it  │
//! └──────────────────────────────────────────────────────────┘
//!                              │
//! ┌──────────────┬─────────────┴────────┬────────────────────┐
//! │    Query     │       Request        │      Metadata      │
//! ├──────────────┼──────────────────────┼────────────────────┤
//! │ SoqlQuery    │ GetRequest           │ MetadataLocator    │
//! │ SimpleFilters│ count/fields/modified│ Metadata, Column   │
//! │ QueryParams  │ status → Error       │                    │
//! └──────────────┴──────────────────────┴────────────────────┘
//!                              │
//! ┌──────────────────────────────────────────────────────────┐
//! │        HTTP Transport (reqwest, rate limit, stream)      │
//! └──────────────────────────────────────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// SoQL query model and filters
pub mod query;

/// HTTP transport capability
pub mod http;

/// Single GET requests and dataset probes
pub mod request;

/// Dataset metadata
pub mod metadata;

/// Concurrent offset pagination
pub mod pagination;

/// Response decoders (JSON, CSV)
pub mod decode;

#[cfg(test)]
pub(crate) mod testing;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

pub use metadata::{Column, Metadata};
pub use pagination::{Batch, OffsetFetcher, Window};
pub use query::{Direction, OrderBy, QueryParams, SimpleFilters, SoqlQuery};
pub use request::{GetRequest, PreparedRequest};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
