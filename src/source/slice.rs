//! In-memory sources
//!
//! [`SliceSource`] borrows records, [`VecSource`] owns them. Both clamp
//! the requested range to the collection, so reading past the end yields
//! an empty page.

use crate::error::Result;
use crate::pagination::Source;
use std::ops::Range;

/// Source over a borrowed slice
#[derive(Debug, Clone, Copy)]
pub struct SliceSource<'a, T> {
    records: &'a [T],
}

impl<'a, T> SliceSource<'a, T> {
    /// Create a new slice source
    pub fn new(records: &'a [T]) -> Self {
        Self { records }
    }
}

impl<T: Clone> Source for SliceSource<'_, T> {
    type Item = T;

    fn count(&self) -> Result<u64> {
        Ok(self.records.len() as u64)
    }

    fn fetch_range(&self, offset: u64, limit: usize) -> Result<Vec<T>> {
        let range = clamp_range(self.records.len(), offset, limit);
        Ok(self.records[range].to_vec())
    }
}

/// Source over an owned vector
#[derive(Debug, Clone, Default)]
pub struct VecSource<T> {
    records: Vec<T>,
}

impl<T> VecSource<T> {
    /// Create a new vector source
    pub fn new(records: Vec<T>) -> Self {
        Self { records }
    }

    /// Number of records held
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the source holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Consume the source and return its records
    pub fn into_inner(self) -> Vec<T> {
        self.records
    }
}

impl<T> From<Vec<T>> for VecSource<T> {
    fn from(records: Vec<T>) -> Self {
        Self::new(records)
    }
}

impl<T> FromIterator<T> for VecSource<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T: Clone> Source for VecSource<T> {
    type Item = T;

    fn count(&self) -> Result<u64> {
        Ok(self.records.len() as u64)
    }

    fn fetch_range(&self, offset: u64, limit: usize) -> Result<Vec<T>> {
        let range = clamp_range(self.records.len(), offset, limit);
        Ok(self.records[range].to_vec())
    }
}

/// Clamp `offset..offset + limit` to `0..len`
fn clamp_range(len: usize, offset: u64, limit: usize) -> Range<usize> {
    let start = usize::try_from(offset).map_or(len, |o| o.min(len));
    let end = start.saturating_add(limit).min(len);
    start..end
}
