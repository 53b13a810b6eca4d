//! Page/offset paginator
//!
//! Holds the requested page and page size, lazily caches the source's
//! record count, and derives every navigation answer from those three.

use super::types::{PageInfo, Source, DEFAULT_PAGE_SIZE};
use crate::error::{Error, Result};
use std::cell::Cell;

/// Paginator over any [`Source`]
///
/// The requested page is stored as given (after coercing non-positive
/// values to 1) and only clamped to the last page when read. The record
/// count is queried on first use and reused for the paginator's lifetime.
///
/// The count cache lives in a [`Cell`], so a paginator is not `Sync`.
/// Wrap it in a lock if it has to be shared between threads.
///
/// # Example
///
/// ```rust
/// use solidafy_paginator::pagination::Paginator;
/// use solidafy_paginator::source::SliceSource;
///
/// let records: Vec<u32> = (1..=100).collect();
/// let mut paginator = Paginator::new(SliceSource::new(&records), 10);
/// paginator.set_page(6);
///
/// assert_eq!(paginator.page().unwrap(), 6);
/// assert_eq!(paginator.results().unwrap(), (51..=60).collect::<Vec<_>>());
/// ```
#[derive(Debug)]
pub struct Paginator<S> {
    /// Record source
    source: S,
    /// Records per page, never 0
    page_size: usize,
    /// Requested page, never 0
    page: u64,
    /// Cached record count (`None` until the source answered once)
    nums: Cell<Option<u64>>,
}

impl<S: Source> Paginator<S> {
    /// Create a new paginator on page 1
    ///
    /// A `page_size` of 0 falls back to [`DEFAULT_PAGE_SIZE`].
    pub fn new(source: S, page_size: usize) -> Self {
        let page_size = if page_size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            page_size
        };

        Self {
            source,
            page_size,
            page: 1,
            nums: Cell::new(None),
        }
    }

    /// Set the requested page
    ///
    /// Values below 1 are stored as 1. Pages past the end are kept as-is
    /// and clamped by [`Paginator::page`].
    pub fn set_page(&mut self, page: i64) {
        self.page = u64::try_from(page).ok().filter(|p| *p > 0).unwrap_or(1);
    }

    /// Records per page
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Requested page before clamping
    pub fn requested_page(&self) -> u64 {
        self.page
    }

    /// Borrow the underlying source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Consume the paginator and return its source
    pub fn into_source(self) -> S {
        self.source
    }

    /// Total number of records
    ///
    /// The source is asked once; later calls return the cached value.
    /// A failed count is not cached, so the next call asks again.
    pub fn nums(&self) -> Result<u64> {
        if let Some(nums) = self.nums.get() {
            return Ok(nums);
        }

        let nums = self.source.count().map_err(|e| {
            tracing::warn!("Record count failed: {}", e);
            e
        })?;
        tracing::debug!("Source reported {} records", nums);
        self.nums.set(Some(nums));

        Ok(nums)
    }

    /// Total number of pages
    ///
    /// An empty source still has one (empty) page.
    pub fn page_nums(&self) -> Result<u64> {
        let nums = self.nums()?;
        Ok(nums.div_ceil(self.page_size as u64).max(1))
    }

    /// Effective page: the requested page clamped to the last page
    pub fn page(&self) -> Result<u64> {
        let page_nums = self.page_nums()?;
        Ok(self.page.min(page_nums))
    }

    /// Check if the effective page has a predecessor
    pub fn has_prev(&self) -> Result<bool> {
        Ok(self.page()? > 1)
    }

    /// Check if the effective page has a successor
    pub fn has_next(&self) -> Result<bool> {
        let page_nums = self.page_nums()?;
        Ok(self.page()? < page_nums)
    }

    /// Previous page number, or [`Error::NoPrevPage`] on the first page
    pub fn prev_page(&self) -> Result<u64> {
        if !self.has_prev()? {
            return Err(Error::NoPrevPage);
        }

        Ok(self.page()? - 1)
    }

    /// Next page marker, or [`Error::NoNextPage`] on the last page
    ///
    /// Note that this returns the *current* effective page, not the one
    /// after it. Existing callers use it as the page index the following
    /// fetch continues from, so the asymmetry with [`Paginator::prev_page`]
    /// is kept as-is.
    pub fn next_page(&self) -> Result<u64> {
        if !self.has_next()? {
            return Err(Error::NoNextPage);
        }

        self.page()
    }

    /// Check if the records span more than one page
    pub fn has_pages(&self) -> Result<bool> {
        Ok(self.nums()? > self.page_size as u64)
    }

    /// Offset of the first record on the effective page
    pub fn offset(&self) -> Result<u64> {
        let page = self.page()?;
        Ok((page - 1) * self.page_size as u64)
    }

    /// Records on the effective page
    ///
    /// Errors from the source are returned unchanged.
    pub fn results(&self) -> Result<Vec<S::Item>> {
        let page = self.page()?;
        let offset = (page - 1) * self.page_size as u64;
        tracing::debug!(
            "Fetching page {} (offset {}, limit {})",
            page,
            offset,
            self.page_size
        );
        self.source.fetch_range(offset, self.page_size)
    }

    /// Snapshot of every navigation answer for the effective page
    pub fn info(&self) -> Result<PageInfo> {
        let nums = self.nums()?;
        let page_nums = self.page_nums()?;
        let page = self.page()?;
        let has_prev = page > 1;
        let has_next = page < page_nums;

        Ok(PageInfo {
            page,
            page_size: self.page_size,
            page_nums,
            nums,
            offset: (page - 1) * self.page_size as u64,
            has_prev,
            has_next,
            has_pages: nums > self.page_size as u64,
            prev_page: has_prev.then(|| page - 1),
            next_page: has_next.then_some(page),
        })
    }
}
