//! Pagination module
//!
//! # Overview
//!
//! The pagination module computes page views over any countable record
//! collection. A [`Source`] reports how many records exist and hands out
//! bounded ranges; the [`Paginator`] turns a requested page number into a
//! clamped page, an offset, and prev/next answers.

mod paginator;
mod types;

pub use paginator::Paginator;
pub use types::{PageInfo, Source, DEFAULT_PAGE_SIZE};
