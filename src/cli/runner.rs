//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, InputArgs, OutputFormat};
use crate::config::load_source_config;
use crate::error::{Error, Result, ResultExt};
use crate::pagination::{Paginator, Source, DEFAULT_PAGE_SIZE};
use crate::source::{DatabaseSource, VecSource};
use crate::types::JsonValue;
use serde::Serialize;
use serde_json::json;
use std::fs;
use std::path::Path;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Page { input, page } => self.page(input, *page, true),
            Commands::Info { input, page } => self.page(input, *page, false),
            Commands::Validate { source } => self.validate(source),
        }
    }

    /// Open the requested source and print the page
    fn page(&self, input: &InputArgs, page: i64, with_records: bool) -> Result<()> {
        if let Some(path) = &input.input {
            let source = VecSource::new(load_json_records(path)?);
            let page_size = self.cli.page_size.unwrap_or(DEFAULT_PAGE_SIZE);
            return self.emit_page(Paginator::new(source, page_size), page, with_records);
        }

        if let Some(path) = &input.source {
            let config = load_source_config(path)?;
            let source = DatabaseSource::open(&config)?;
            let page_size = self
                .cli
                .page_size
                .unwrap_or(config.pagination.effective_page_size());
            return self.emit_page(Paginator::new(source, page_size), page, with_records);
        }

        Err(Error::config("Either --input or --source is required"))
    }

    /// Print navigation info, and optionally the records, for one page
    fn emit_page<S>(&self, mut paginator: Paginator<S>, page: i64, with_records: bool) -> Result<()>
    where
        S: Source,
        S::Item: Serialize,
    {
        paginator.set_page(page);
        let info = paginator.info()?;

        if page > 0 && page as u64 != info.page {
            tracing::info!(
                "Requested page {} is past the end, showing page {} of {}",
                page,
                info.page,
                info.page_nums
            );
        }

        let mut msg = json!({
            "type": "PAGE",
            "page": info,
        });
        if with_records {
            msg["records"] = serde_json::to_value(paginator.results()?)?;
        }

        self.output_message(&msg);
        Ok(())
    }

    /// Validate a database source definition
    fn validate(&self, path: &Path) -> Result<()> {
        let config = load_source_config(path)?;

        self.output_message(&json!({
            "type": "LOG",
            "log": {
                "level": "INFO",
                "message": format!(
                    "Source '{}' ({}) is valid with page size {}",
                    path.display(),
                    config.engine,
                    config.pagination.effective_page_size()
                )
            }
        }));

        Ok(())
    }

    /// Output a message
    fn output_message(&self, msg: &JsonValue) {
        match self.cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(msg).unwrap_or_default());
            }
            OutputFormat::Pretty => {
                println!("{}", serde_json::to_string_pretty(msg).unwrap_or_default());
            }
        }
    }
}

/// Load a JSON array of records from a file
pub fn load_json_records(path: impl AsRef<Path>) -> Result<Vec<JsonValue>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read records from '{}'", path.display()))?;
    let value: JsonValue = serde_json::from_str(&content)
        .with_context(|| format!("Invalid JSON in '{}'", path.display()))?;
    match value {
        JsonValue::Array(records) => Ok(records),
        _ => Err(Error::config(format!(
            "Expected a JSON array of records in '{}'",
            path.display()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    fn records_file(body: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(body.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_json_records() {
        let file = records_file(r#"[{"id": 1}, {"id": 2}, 3]"#);
        let records = load_json_records(file.path()).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0]["id"], 1);
    }

    #[test]
    fn test_load_json_records_rejects_object() {
        let file = records_file(r#"{"id": 1}"#);
        let err = load_json_records(file.path()).unwrap_err();
        assert!(err.to_string().contains("Expected a JSON array"));
    }

    #[test]
    fn test_load_json_records_invalid_json_names_file() {
        let file = records_file("[1, 2,");
        let err = load_json_records(file.path()).unwrap_err();
        assert!(matches!(err, Error::Other(_)));
        assert!(err.to_string().contains("Invalid JSON in"));
        assert!(err.to_string().contains("Failed to parse JSON"));
    }

    #[test]
    fn test_load_json_records_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_json_records(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }

    #[test]
    fn test_run_page_from_json_input() {
        let file = records_file("[1, 2, 3, 4, 5]");
        let path = file.path().to_str().unwrap().to_string();
        let cli = Cli::try_parse_from([
            "solidafy-paginator",
            "page",
            "--input",
            path.as_str(),
            "--page",
            "9",
            "-n",
            "2",
        ])
        .unwrap();

        assert!(Runner::new(cli).run().is_ok());
    }

    #[test]
    fn test_run_validate_reports_bad_source() {
        let file = records_file("engine: sqlite\n");
        let path = file.path().to_str().unwrap().to_string();
        let cli = Cli::try_parse_from(["solidafy-paginator", "validate", "-s", path.as_str()])
            .unwrap();

        let err = Runner::new(cli).run().unwrap_err();
        assert!(matches!(err, Error::MissingConfigField { .. }));
    }

    #[test]
    fn test_zero_page_size_falls_back_to_default() {
        let file =
            records_file("engine: duckdb\nquery: SELECT 1 AS n\npagination:\n  page_size: 0\n");
        let path = file.path().to_str().unwrap().to_string();
        let cli = Cli::try_parse_from(["solidafy-paginator", "validate", "-s", path.as_str()])
            .unwrap();
        assert!(Runner::new(cli).run().is_ok());

        let records = records_file("[1, 2, 3]");
        let path = records.path().to_str().unwrap().to_string();
        let cli = Cli::try_parse_from([
            "solidafy-paginator",
            "info",
            "--input",
            path.as_str(),
            "-n",
            "0",
        ])
        .unwrap();
        assert_eq!(cli.page_size, Some(0));
        assert!(Runner::new(cli).run().is_ok());
    }
}
