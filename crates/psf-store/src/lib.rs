//! SQLite persistence for the PSF loader.
//!
//! Three tables: `provider_specific_file` holds every loaded row (issues
//! notwithstanding), `dq_issues` holds the audit trail, and `etl_log` tracks
//! one row per run with a terminal status. Bulk inserts run inside a single
//! transaction per batch; there is no retry logic here — a failed load is
//! the caller's cue to mark the run failed.

mod error;

use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::{Connection, params};

use psf_model::{Dataset, DqIssue, Field};

pub use error::{Result, StoreError};

/// Terminal (or in-flight) status of an ETL run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Running,
    Success,
    Failed,
}

impl RunStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            RunStatus::Running => "RUNNING",
            RunStatus::Success => "SUCCESS",
            RunStatus::Failed => "FAILED",
        }
    }

    fn parse(value: &str) -> Option<RunStatus> {
        match value {
            "RUNNING" => Some(RunStatus::Running),
            "SUCCESS" => Some(RunStatus::Success),
            "FAILED" => Some(RunStatus::Failed),
            _ => None,
        }
    }
}

/// One row of the run log.
#[derive(Debug, Clone)]
pub struct RunRecord {
    pub run_id: i64,
    pub file_name: String,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub rows_loaded: Option<u64>,
    pub rows_failed: Option<u64>,
    pub status: RunStatus,
    pub message: Option<String>,
}

pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open (creating if needed) the database at `path` and ensure the
    /// schema exists.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;
        Self::with_connection(conn)
    }

    /// In-memory store, used by tests and dry runs.
    pub fn open_in_memory() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch(&schema_sql())?;
        Ok(Self { conn })
    }

    /// Insert an `etl_log` row with status RUNNING and return its run id.
    pub fn begin_run(&self, file_name: &str) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO etl_log (file_name, started_at, status) VALUES (?1, ?2, ?3)",
            params![
                file_name,
                Utc::now().to_rfc3339(),
                RunStatus::Running.as_str()
            ],
        )?;
        let run_id = self.conn.last_insert_rowid();
        tracing::info!(run_id, file_name, "run started");
        Ok(run_id)
    }

    /// Record the outcome of a run: completion time, row counts, terminal
    /// status, and an optional failure message.
    pub fn finish_run(
        &self,
        run_id: i64,
        rows_loaded: u64,
        rows_failed: u64,
        status: RunStatus,
        message: Option<&str>,
    ) -> Result<()> {
        let updated = self.conn.execute(
            "UPDATE etl_log
             SET completed_at = ?1,
                 rows_loaded = ?2,
                 rows_failed = ?3,
                 status = ?4,
                 message = ?5
             WHERE run_id = ?6",
            params![
                Utc::now().to_rfc3339(),
                rows_loaded,
                rows_failed,
                status.as_str(),
                message,
                run_id
            ],
        )?;
        if updated == 0 {
            return Err(StoreError::RunNotFound(run_id));
        }
        tracing::info!(run_id, status = status.as_str(), "run finished");
        Ok(())
    }

    /// Bulk-load every record of the dataset, in one transaction.
    ///
    /// All rows are loaded regardless of DQ findings. Only known PSF
    /// columns are persisted; extras exist in the issue row snapshots.
    pub fn insert_records(&mut self, dataset: &Dataset) -> Result<usize> {
        let tx = self.conn.transaction()?;
        {
            let mut statement = tx.prepare(&insert_record_sql())?;
            for (_, record) in dataset.iter() {
                let values: Vec<Option<&str>> =
                    Field::ALL.iter().map(|&field| record.raw(field)).collect();
                statement.execute(rusqlite::params_from_iter(values))?;
            }
        }
        tx.commit()?;
        tracing::debug!(rows = dataset.len(), "records loaded");
        Ok(dataset.len())
    }

    /// Bulk-append the issue list for a run, in one transaction.
    ///
    /// `row_index` is run-scoped and deliberately not persisted.
    pub fn insert_issues(&mut self, run_id: i64, issues: &[DqIssue]) -> Result<usize> {
        if issues.is_empty() {
            return Ok(0);
        }
        let tx = self.conn.transaction()?;
        {
            let mut statement = tx.prepare(
                "INSERT INTO dq_issues
                 (run_id, provider_id, issue_type, issue_details, row_data, detected_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;
            for issue in issues {
                statement.execute(params![
                    run_id,
                    issue.provider_id,
                    issue.issue_type.as_str(),
                    issue.issue_details,
                    issue.row_data,
                    issue.detected_at.to_rfc3339(),
                ])?;
            }
        }
        tx.commit()?;
        tracing::debug!(run_id, issues = issues.len(), "issues recorded");
        Ok(issues.len())
    }

    /// Fetch a run-log row.
    pub fn run_log(&self, run_id: i64) -> Result<RunRecord> {
        let mut statement = self.conn.prepare(
            "SELECT file_name, started_at, completed_at, rows_loaded, rows_failed,
                    status, message
             FROM etl_log WHERE run_id = ?1",
        )?;
        let mut rows = statement.query(params![run_id])?;
        let Some(row) = rows.next()? else {
            return Err(StoreError::RunNotFound(run_id));
        };

        let status_text: String = row.get(5)?;
        let status = RunStatus::parse(&status_text).ok_or_else(|| StoreError::UnknownStatus {
            run_id,
            status: status_text,
        })?;
        let started_at = parse_timestamp(run_id, &row.get::<_, String>(1)?)?;
        let completed_at = row
            .get::<_, Option<String>>(2)?
            .map(|value| parse_timestamp(run_id, &value))
            .transpose()?;

        Ok(RunRecord {
            run_id,
            file_name: row.get(0)?,
            started_at,
            completed_at,
            rows_loaded: row.get(3)?,
            rows_failed: row.get(4)?,
            status,
            message: row.get(6)?,
        })
    }

    /// Total loaded provider rows.
    pub fn record_count(&self) -> Result<u64> {
        let count =
            self.conn
                .query_row("SELECT COUNT(*) FROM provider_specific_file", [], |row| {
                    row.get(0)
                })?;
        Ok(count)
    }

    /// Issues recorded for one run.
    pub fn issue_count(&self, run_id: i64) -> Result<u64> {
        let count = self.conn.query_row(
            "SELECT COUNT(*) FROM dq_issues WHERE run_id = ?1",
            params![run_id],
            |row| row.get(0),
        )?;
        Ok(count)
    }
}

fn parse_timestamp(run_id: i64, value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|datetime| datetime.with_timezone(&Utc))
        .map_err(|_| StoreError::MalformedTimestamp {
            run_id,
            value: value.to_string(),
        })
}

/// Schema DDL. Provider columns are generated from the known field set so
/// the table tracks the model.
fn schema_sql() -> String {
    let provider_columns: Vec<String> = Field::ALL
        .iter()
        .map(|field| format!("    {} TEXT", field.as_str()))
        .collect();
    format!(
        "CREATE TABLE IF NOT EXISTS etl_log (
    run_id INTEGER PRIMARY KEY AUTOINCREMENT,
    file_name TEXT NOT NULL,
    started_at TEXT NOT NULL,
    completed_at TEXT,
    rows_loaded INTEGER,
    rows_failed INTEGER,
    status TEXT NOT NULL,
    message TEXT
);
CREATE TABLE IF NOT EXISTS provider_specific_file (
{}
);
CREATE TABLE IF NOT EXISTS dq_issues (
    issue_id INTEGER PRIMARY KEY AUTOINCREMENT,
    run_id INTEGER NOT NULL REFERENCES etl_log(run_id),
    provider_id TEXT,
    issue_type TEXT NOT NULL,
    issue_details TEXT NOT NULL,
    row_data TEXT NOT NULL,
    detected_at TEXT NOT NULL
);",
        provider_columns.join(",\n")
    )
}

fn insert_record_sql() -> String {
    let columns: Vec<&str> = Field::ALL.iter().map(|field| field.as_str()).collect();
    let placeholders: Vec<String> = (1..=columns.len()).map(|i| format!("?{i}")).collect();
    format!(
        "INSERT INTO provider_specific_file ({}) VALUES ({})",
        columns.join(", "),
        placeholders.join(", ")
    )
}
