//! Pagination types and traits
//!
//! Defines the source abstraction consumed by the paginator and the
//! snapshot type it reports.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Records per page used when the caller asks for an empty page size
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Core trait for record sources
///
/// A source knows how many records it holds and can hand out a bounded,
/// ordered range of them. Implementations must return an empty vector,
/// not an error, when `offset` is past the end of the collection.
pub trait Source {
    /// Record type produced by this source
    type Item;

    /// Total number of records, evaluated at call time
    fn count(&self) -> Result<u64>;

    /// Up to `limit` records starting at the 0-based `offset`, in natural order
    fn fetch_range(&self, offset: u64, limit: usize) -> Result<Vec<Self::Item>>;
}

impl<S: Source + ?Sized> Source for &S {
    type Item = S::Item;

    fn count(&self) -> Result<u64> {
        (**self).count()
    }

    fn fetch_range(&self, offset: u64, limit: usize) -> Result<Vec<Self::Item>> {
        (**self).fetch_range(offset, limit)
    }
}

impl<S: Source + ?Sized> Source for Box<S> {
    type Item = S::Item;

    fn count(&self) -> Result<u64> {
        (**self).count()
    }

    fn fetch_range(&self, offset: u64, limit: usize) -> Result<Vec<Self::Item>> {
        (**self).fetch_range(offset, limit)
    }
}

/// Point-in-time view of a paginator's navigation state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    /// Effective (clamped) page number, 1-based
    pub page: u64,
    /// Records per page
    pub page_size: usize,
    /// Total number of pages (at least 1)
    pub page_nums: u64,
    /// Total number of records
    pub nums: u64,
    /// Offset of the first record on this page
    pub offset: u64,
    /// Is there a page before this one?
    pub has_prev: bool,
    /// Is there a page after this one?
    pub has_next: bool,
    /// Does the collection span more than one page?
    pub has_pages: bool,
    /// Result of `prev_page`, if there is one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev_page: Option<u64>,
    /// Result of `next_page`, if there is one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page: Option<u64>,
}

impl PageInfo {
    /// Check if this is the first page
    pub fn is_first(&self) -> bool {
        !self.has_prev
    }

    /// Check if this is the last page
    pub fn is_last(&self) -> bool {
        !self.has_next
    }
}
