//! CLI module
//!
//! Command-line interface for paging through record collections.
//!
//! # Commands
//!
//! - `page` - Print one page of records with its navigation info
//! - `info` - Print navigation info only
//! - `validate` - Check a database source definition

mod commands;
mod runner;

pub use commands::{Cli, Commands, InputArgs, OutputFormat};
pub use runner::{load_json_records, Runner};
