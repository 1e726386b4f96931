//! Pagination module
//!
//! Concurrent offset pagination over a whole query result.
//!
//! # Overview
//!
//! [`OffsetFetcher`] counts the matching records once, then hands out
//! disjoint `[offset, offset + len)` windows to any number of concurrent
//! callers until the count is covered. Window assignment happens under a
//! lock; the network request for a window runs outside it, so workers
//! overlap their I/O.
//!
//! Windows are assigned in increasing, gapless order, but responses may
//! complete in any order. A failed request still consumes its window: the
//! fetch is not resumable, start a new fetcher instead.

mod fetcher;
mod types;

pub use fetcher::OffsetFetcher;
pub use types::{Batch, Window};

#[cfg(test)]
mod tests;
