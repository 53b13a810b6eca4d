//! Record sources
//!
//! Ready-made [`Source`](crate::pagination::Source) implementations:
//!
//! - `SliceSource` / `VecSource` - in-memory sequences
//! - `DatabaseSource` - SQL query results via DuckDB

mod database;
mod slice;

pub use database::DatabaseSource;
pub use slice::{SliceSource, VecSource};
