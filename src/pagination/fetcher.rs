//! Offset fetcher implementation

use super::types::{Batch, Window};
use crate::error::{Error, Result};
use crate::http::{HttpResponse, Transport};
use crate::request::GetRequest;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinSet;
use tracing::{debug, trace};

/// Fetches every record of a query in windows, safe to share between tasks
///
/// ```rust,ignore
/// let fetcher = Arc::new(OffsetFetcher::new(request).await?);
/// while let Some((window, response)) = fetcher.next(1000).await?.into_page() {
///     // decode response
/// }
/// ```
pub struct OffsetFetcher {
    /// Shared query, rewritten per window under the lock
    request: Mutex<GetRequest>,
    transport: Arc<dyn Transport>,
    /// Next unclaimed record. Only written while `request` is locked.
    offset: AtomicU64,
    total: u64,
}

impl OffsetFetcher {
    /// Count the records matching `request` and prepare to fetch them all.
    ///
    /// The request needs at least one sort key for windows to be stable.
    pub async fn new(mut request: GetRequest) -> Result<Self> {
        let total = request.count().await?;
        debug!("Offset fetcher for {} ready, {} records", request.endpoint(), total);

        let transport = Arc::clone(request.transport());
        Ok(Self {
            request: Mutex::new(request),
            transport,
            offset: AtomicU64::new(0),
            total,
        })
    }

    /// Claim the next window of up to `batch_size` records and fetch it.
    ///
    /// Returns [`Batch::Done`] once every record has been claimed, on every
    /// call after that too. The last window is shortened to the remaining
    /// records. A claimed window is consumed even if its request fails.
    pub async fn next(&self, batch_size: u64) -> Result<Batch> {
        let (window, prepared) = {
            let mut request = self.request.lock().await;
            let offset = self.offset.load(Ordering::Acquire);

            if offset >= self.total {
                trace!("Offset fetcher exhausted at {}", offset);
                return Ok(Batch::Done);
            }
            if !request.query.has_order() {
                return Err(Error::config(crate::request::OFFSET_WITHOUT_ORDER));
            }
            if batch_size == 0 {
                return Err(Error::config("batch size must be greater than zero"));
            }

            let window = Window::new(offset, batch_size.min(self.total - offset));
            request.query.offset = window.offset;
            request.query.limit = window.len;
            let prepared = request.prepare()?;

            self.offset.store(window.end(), Ordering::Release);
            (window, prepared)
        };

        debug!("Claimed window {}..{} of {}", window.offset, window.end(), self.total);
        let response = prepared.send(self.transport.as_ref()).await?;
        Ok(Batch::Page { window, response })
    }

    /// Run `workers` tasks that each call [`next`](Self::next) until the
    /// records are exhausted, passing every page to `handler`.
    ///
    /// Returns the number of pages handled. The first error stops the other
    /// workers and is returned.
    pub async fn fetch_concurrently<F, Fut>(
        self: &Arc<Self>,
        workers: usize,
        batch_size: u64,
        handler: F,
    ) -> Result<u64>
    where
        F: Fn(Window, HttpResponse) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<()>> + Send + 'static,
    {
        let handler = Arc::new(handler);
        let mut tasks = JoinSet::new();

        for _ in 0..workers.max(1) {
            let fetcher = Arc::clone(self);
            let handler = Arc::clone(&handler);
            tasks.spawn(async move {
                let mut pages = 0u64;
                while let Batch::Page { window, response } = fetcher.next(batch_size).await? {
                    handler(window, response).await?;
                    pages += 1;
                }
                Ok::<u64, Error>(pages)
            });
        }

        let mut pages = 0;
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(Ok(count)) => pages += count,
                Ok(Err(e)) => {
                    tasks.abort_all();
                    return Err(e);
                }
                Err(e) if e.is_panic() => std::panic::resume_unwind(e.into_panic()),
                Err(e) => {
                    tasks.abort_all();
                    return Err(Error::transport(e));
                }
            }
        }
        Ok(pages)
    }

    /// Total number of records, counted once at construction
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Next unclaimed record. Approximate while other tasks are claiming.
    pub fn offset(&self) -> u64 {
        self.offset.load(Ordering::Relaxed)
    }

    /// Records not yet claimed. Approximate while other tasks are claiming;
    /// informational only.
    pub fn remaining(&self) -> u64 {
        self.total.saturating_sub(self.offset())
    }

    /// Check if every record has been claimed. Same caveat as
    /// [`remaining`](Self::remaining).
    pub fn is_exhausted(&self) -> bool {
        self.offset() >= self.total
    }

    /// Take back the underlying request
    pub fn into_inner(self) -> GetRequest {
        self.request.into_inner()
    }
}

impl std::fmt::Debug for OffsetFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OffsetFetcher")
            .field("offset", &self.offset())
            .field("total", &self.total)
            .finish_non_exhaustive()
    }
}
