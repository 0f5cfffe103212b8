use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("run {0} not found in etl_log")]
    RunNotFound(i64),
    #[error("etl_log row {run_id} has unrecognized status {status:?}")]
    UnknownStatus { run_id: i64, status: String },
    #[error("etl_log row {run_id} has malformed timestamp {value:?}")]
    MalformedTimestamp { run_id: i64, value: String },
}

pub type Result<T> = std::result::Result<T, StoreError>;
