// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_pass_by_value)]

//! # Solidafy Paginator
//!
//! Page/offset pagination over any countable, ordered record collection,
//! without loading the collection into memory.
//!
//! ## Features
//!
//! - **Source-agnostic**: anything that can count its records and hand out
//!   a bounded range implements [`Source`](pagination::Source)
//! - **Lazy counting**: the record count is queried once, on first use
//! - **Clamped navigation**: out-of-range pages resolve to the last page
//! - **Ready-made sources**: slices, vectors, and SQL queries via DuckDB
//!
//! ## Quick Start
//!
//! ```rust
//! use solidafy_paginator::pagination::Paginator;
//! use solidafy_paginator::source::SliceSource;
//!
//! # fn main() -> solidafy_paginator::Result<()> {
//! let posts: Vec<u32> = (1..=100).collect();
//! let mut paginator = Paginator::new(SliceSource::new(&posts), 10);
//!
//! paginator.set_page(11);
//! assert_eq!(paginator.page()?, 10);
//! assert!(!paginator.has_next()?);
//! assert_eq!(paginator.results()?, (91..=100).collect::<Vec<_>>());
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                       Paginator                         │
//! │  set_page()  page()  page_nums()  has_prev/has_next()   │
//! │  prev_page() next_page()  results() → Vec<Item>         │
//! └────────────────────────────┬────────────────────────────┘
//!                              │ count() / fetch_range(offset, limit)
//! ┌──────────────┬─────────────┴──┬─────────────────────────┐
//! │ SliceSource  │   VecSource    │     DatabaseSource      │
//! │ &[T]         │   Vec<T>       │ DuckDB → Postgres/MySQL │
//! │              │                │          SQLite/DuckDB  │
//! └──────────────┴────────────────┴─────────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Common types and type aliases
pub mod types;

/// Paginator and the source trait
pub mod pagination;

/// Built-in record sources
pub mod source;

/// Configuration for paginators and database sources
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use pagination::{PageInfo, Paginator, Source, DEFAULT_PAGE_SIZE};
pub use source::{DatabaseSource, SliceSource, VecSource};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
