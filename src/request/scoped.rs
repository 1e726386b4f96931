//! Temporary query override with guaranteed restore

use super::get::GetRequest;
use crate::query::OrderBy;
use crate::types::ResponseFormat;
use std::ops::{Deref, DerefMut};

/// Mutable access to a [`GetRequest`] whose format, select, order, limit
/// and offset are put back when the guard is dropped.
pub(crate) struct ScopedOverride<'a> {
    request: &'a mut GetRequest,
    format: ResponseFormat,
    select: Vec<String>,
    order: Vec<OrderBy>,
    limit: u64,
    offset: u64,
}

impl<'a> ScopedOverride<'a> {
    pub(crate) fn new(request: &'a mut GetRequest) -> Self {
        let format = request.format;
        let select = request.query.select.clone();
        let order = request.query.order.clone();
        let limit = request.query.limit;
        let offset = request.query.offset;

        Self {
            request,
            format,
            select,
            order,
            limit,
            offset,
        }
    }
}

impl Deref for ScopedOverride<'_> {
    type Target = GetRequest;

    fn deref(&self) -> &GetRequest {
        &*self.request
    }
}

impl DerefMut for ScopedOverride<'_> {
    fn deref_mut(&mut self) -> &mut GetRequest {
        &mut *self.request
    }
}

impl Drop for ScopedOverride<'_> {
    fn drop(&mut self) {
        self.request.format = self.format;
        self.request.query.select = std::mem::take(&mut self.select);
        self.request.query.order = std::mem::take(&mut self.order);
        self.request.query.limit = self.limit;
        self.request.query.offset = self.offset;
    }
}
