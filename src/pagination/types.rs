//! Pagination types

use crate::http::HttpResponse;
use std::ops::Range;

/// A contiguous slice `[offset, offset + len)` of the result set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Window {
    /// First record of the window
    pub offset: u64,
    /// Number of records in the window
    pub len: u64,
}

impl Window {
    /// Create a window
    pub fn new(offset: u64, len: u64) -> Self {
        Self { offset, len }
    }

    /// One past the last record
    pub fn end(&self) -> u64 {
        self.offset + self.len
    }

    /// Record positions covered by the window
    pub fn range(&self) -> Range<u64> {
        self.offset..self.end()
    }
}

/// Outcome of [`OffsetFetcher::next`](super::OffsetFetcher::next)
#[derive(Debug)]
pub enum Batch {
    /// A window was claimed and fetched
    Page {
        /// The claimed window
        window: Window,
        /// Live response for the window
        response: HttpResponse,
    },
    /// All records have been handed out
    Done,
}

impl Batch {
    /// Check if this is the terminal outcome
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }

    /// Take the window and response of a page
    pub fn into_page(self) -> Option<(Window, HttpResponse)> {
        match self {
            Self::Page { window, response } => Some((window, response)),
            Self::Done => None,
        }
    }
}
