//! DuckDB-backed relational source
//!
//! Pages over the rows of an arbitrary SQL query. DuckDB either runs the
//! query itself or reaches PostgreSQL, MySQL and SQLite through its
//! scanner extensions, with the external database attached read-only as
//! `source_db`.

use crate::config::{DatabaseEngine, DatabaseSourceConfig};
use crate::error::{Error, Result};
use crate::pagination::Source;
use crate::types::JsonObject;
use duckdb::types::{TimeUnit, Value as DuckValue};
use duckdb::Connection;
use serde_json::Value;

/// Source over the rows of a SQL query
///
/// Each row is returned as a JSON object keyed by column name. The query
/// is used verbatim: ordering is whatever its own `ORDER BY` says.
pub struct DatabaseSource {
    /// DuckDB connection
    conn: Connection,
    /// Database type
    engine: DatabaseEngine,
    /// Query to page over
    query: String,
    /// Connection string used (for logging)
    connection_string: String,
}

impl std::fmt::Debug for DatabaseSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseSource")
            .field("engine", &self.engine)
            .field("query", &self.query)
            .field("connection", &self.connection_info())
            .finish_non_exhaustive()
    }
}

impl DatabaseSource {
    /// Page over `query` on an already open DuckDB connection
    pub fn from_connection(conn: Connection, query: impl Into<String>) -> Result<Self> {
        let query = query.into().trim().trim_end_matches(';').to_string();
        if query.is_empty() {
            return Err(Error::config("Source query cannot be empty"));
        }

        Ok(Self {
            conn,
            engine: DatabaseEngine::Duckdb,
            query,
            connection_string: ":memory:".to_string(),
        })
    }

    /// Open an in-memory DuckDB, attach the configured database and page
    /// over the configured table or query
    pub fn open(config: &DatabaseSourceConfig) -> Result<Self> {
        config.validate()?;

        let conn = Connection::open_in_memory()
            .map_err(|e| Error::config(format!("Failed to create DuckDB connection: {e}")))?;

        let source = Self {
            conn,
            engine: config.engine,
            query: config.base_query()?,
            connection_string: config.connection.connection_string(config.engine),
        };

        source.attach_database()?;
        tracing::debug!(
            "Opened {} source at {}",
            source.engine,
            source.connection_info()
        );

        Ok(source)
    }

    /// Attach external database to DuckDB
    fn attach_database(&self) -> Result<()> {
        let connection_string = &self.connection_string;
        let (extension, attach_sql) = match self.engine {
            DatabaseEngine::Postgres => (
                Some("postgres"),
                format!("ATTACH '{connection_string}' AS source_db (TYPE POSTGRES, READ_ONLY);"),
            ),
            DatabaseEngine::Mysql => (
                Some("mysql"),
                format!("ATTACH '{connection_string}' AS source_db (TYPE MYSQL, READ_ONLY);"),
            ),
            DatabaseEngine::Sqlite => (
                Some("sqlite"),
                format!("ATTACH '{connection_string}' AS source_db (TYPE SQLITE, READ_ONLY);"),
            ),
            DatabaseEngine::Duckdb => {
                // Nothing to attach for a fresh in-memory database
                if connection_string == ":memory:" {
                    return Ok(());
                }
                (
                    None,
                    format!("ATTACH '{connection_string}' AS source_db (READ_ONLY);"),
                )
            }
        };

        if let Some(extension) = extension {
            self.conn
                .execute_batch(&format!("INSTALL {extension}; LOAD {extension};"))
                .map_err(|e| {
                    Error::config(format!("Failed to load {extension} extension: {e}"))
                })?;
        }

        self.conn
            .execute_batch(&attach_sql)
            .map_err(|e| Error::config(format!("Failed to attach {}: {e}", self.engine)))?;

        Ok(())
    }

    /// Query this source pages over
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Database type
    pub fn engine(&self) -> DatabaseEngine {
        self.engine
    }

    /// Get connection string (for logging - password masked)
    pub fn connection_info(&self) -> String {
        let userinfo_start = self.connection_string.find("://").map_or(0, |i| i + 3);
        if let Some(at_pos) = self.connection_string.find('@') {
            if let Some(colon_pos) = self.connection_string[userinfo_start..at_pos].rfind(':') {
                let colon_pos = userinfo_start + colon_pos;
                let before_pass = &self.connection_string[..=colon_pos];
                let after_at = &self.connection_string[at_pos..];
                return format!("{before_pass}****{after_at}");
            }
        }
        self.connection_string.clone()
    }
}

impl Source for DatabaseSource {
    type Item = JsonObject;

    fn count(&self) -> Result<u64> {
        let count_sql = format!("SELECT COUNT(*) FROM (\n{}\n) AS q", self.query);
        tracing::debug!("Executing count query: {}", count_sql);

        let count: i64 = self
            .conn
            .query_row(&count_sql, [], |row| row.get(0))
            .map_err(|e| Error::query(format!("Failed to count rows: {e}")))?;

        u64::try_from(count).map_err(|_| Error::query(format!("Negative row count: {count}")))
    }

    fn fetch_range(&self, offset: u64, limit: usize) -> Result<Vec<JsonObject>> {
        // DuckDB takes LIMIT/OFFSET as BIGINT
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let offset = i64::try_from(offset).unwrap_or(i64::MAX);
        // The query may carry its own LIMIT or a trailing line comment
        let page_sql = format!(
            "SELECT * FROM (\n{}\n) AS q LIMIT {limit} OFFSET {offset}",
            self.query
        );
        tracing::debug!("Executing page query: {}", page_sql);

        let mut stmt = self
            .conn
            .prepare(&page_sql)
            .map_err(|e| Error::query(format!("Failed to prepare page query: {e}")))?;

        let mut rows = stmt
            .query([])
            .map_err(|e| Error::query(format!("Failed to fetch page: {e}")))?;

        // Column names are only known once the statement has run
        let columns = rows
            .as_ref()
            .map(|stmt| stmt.column_names())
            .unwrap_or_default();

        let mut records = Vec::new();
        while let Some(row) = rows
            .next()
            .map_err(|e| Error::query(format!("Failed to fetch page: {e}")))?
        {
            let mut record = JsonObject::new();
            for (idx, name) in columns.iter().enumerate() {
                let value: DuckValue = row.get(idx)?;
                record.insert(name.clone(), duckdb_value_to_json(value));
            }
            records.push(record);
        }

        Ok(records)
    }
}

/// Microseconds since the epoch for a timestamp in `unit`
fn timestamp_micros(unit: TimeUnit, value: i64) -> i64 {
    match unit {
        TimeUnit::Second => value.saturating_mul(1_000_000),
        TimeUnit::Millisecond => value.saturating_mul(1_000),
        TimeUnit::Microsecond => value,
        TimeUnit::Nanosecond => value / 1_000,
    }
}

/// Convert DuckDB Value to JSON Value
fn duckdb_value_to_json(value: DuckValue) -> Value {
    match value {
        DuckValue::Null => Value::Null,
        DuckValue::Boolean(b) => Value::Bool(b),
        DuckValue::TinyInt(i) => Value::Number(i.into()),
        DuckValue::SmallInt(i) => Value::Number(i.into()),
        DuckValue::Int(i) => Value::Number(i.into()),
        DuckValue::BigInt(i) => Value::Number(i.into()),
        DuckValue::HugeInt(i) => Value::String(i.to_string()),
        DuckValue::UTinyInt(i) => Value::Number(i.into()),
        DuckValue::USmallInt(i) => Value::Number(i.into()),
        DuckValue::UInt(i) => Value::Number(i.into()),
        DuckValue::UBigInt(i) => Value::Number(i.into()),
        DuckValue::Float(f) => {
            serde_json::Number::from_f64(f64::from(f)).map_or(Value::Null, Value::Number)
        }
        DuckValue::Double(f) => serde_json::Number::from_f64(f).map_or(Value::Null, Value::Number),
        DuckValue::Text(s) => Value::String(s),
        DuckValue::Blob(b) => Value::String(base64::Engine::encode(
            &base64::engine::general_purpose::STANDARD,
            b,
        )),
        DuckValue::Timestamp(unit, i) => {
            let micros = timestamp_micros(unit, i);
            let secs = micros.div_euclid(1_000_000);
            let nsecs = (micros.rem_euclid(1_000_000) * 1000) as u32;
            chrono::DateTime::from_timestamp(secs, nsecs)
                .map(|dt| Value::String(dt.format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string()))
                .unwrap_or(Value::Number(i.into()))
        }
        DuckValue::Date32(d) => {
            // Days since epoch (719163 is the number of days from 1 CE to 1970-01-01)
            chrono::NaiveDate::from_num_days_from_ce_opt(d + 719_163)
                .map(|date| Value::String(date.format("%Y-%m-%d").to_string()))
                .unwrap_or(Value::Number(d.into()))
        }
        DuckValue::Time64(unit, t) => {
            let micros = timestamp_micros(unit, t);
            let secs = micros / 1_000_000;
            let micros = micros % 1_000_000;
            Value::String(format!(
                "{:02}:{:02}:{:02}.{:06}",
                secs / 3600,
                (secs % 3600) / 60,
                secs % 60,
                micros
            ))
        }
        other => Value::String(format!("{other:?}")),
    }
}
