//! End-to-end ETL runs against temp files and databases.

use std::io::Write;
use std::path::PathBuf;

use psf_cli::cli::{CheckArgs, RunArgs};
use psf_cli::commands::{run_check, run_etl};
use psf_store::{RunStatus, Store};

fn write_csv(dir: &std::path::Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).expect("create csv");
    file.write_all(contents.as_bytes()).expect("write csv");
    path
}

const HEADER: &str = "providerCcn,effectiveDate,stateCode,providerType,fiscalYearBeginDate,\
fiscalYearEndDate,exportDate,lastUpdated,nationalProviderIdentifier";

#[test]
fn run_loads_all_rows_and_records_issues() {
    let dir = tempfile::tempdir().expect("temp dir");
    // Row 1 clean; row 2 missing stateCode and with a 1-digit providerType.
    let csv = write_csv(
        dir.path(),
        "psf.csv",
        &format!(
            "{HEADER}\n\
             123456,2024-01-01,36,01,2024-01-01,2024-12-31,2024-06-01,2024-06-01,1234567890\n\
             654321,2024-01-01,,1,2024-01-01,2024-12-31,2024-06-01,2024-06-01,9876543210\n"
        ),
    );
    let database = dir.path().join("psf.db");

    let summary = run_etl(&RunArgs {
        csv,
        database: database.clone(),
    })
    .expect("etl run");

    assert_eq!(summary.rows_loaded, 2);
    assert_eq!(summary.issue_count, 2);

    let store = Store::open(&database).expect("reopen store");
    let run = store.run_log(summary.run_id).expect("run log");
    assert_eq!(run.status, RunStatus::Success);
    assert_eq!(run.file_name, "psf.csv");
    assert_eq!(run.rows_loaded, Some(2));
    assert_eq!(run.rows_failed, Some(2));
    assert_eq!(store.record_count().expect("record count"), 2);
    assert_eq!(store.issue_count(summary.run_id).expect("issue count"), 2);
}

#[test]
fn unreadable_source_marks_the_run_failed() {
    let dir = tempfile::tempdir().expect("temp dir");
    let database = dir.path().join("psf.db");

    let result = run_etl(&RunArgs {
        csv: dir.path().join("does-not-exist.csv"),
        database: database.clone(),
    });
    assert!(result.is_err());

    // The run was logged before the failure, as run 1 of a fresh database.
    let store = Store::open(&database).expect("reopen store");
    let run = store.run_log(1).expect("run log");
    assert_eq!(run.status, RunStatus::Failed);
    assert!(run.message.is_some());
    assert_eq!(store.record_count().expect("record count"), 0);
}

#[test]
fn repeated_runs_append() {
    let dir = tempfile::tempdir().expect("temp dir");
    let csv = write_csv(
        dir.path(),
        "psf.csv",
        &format!(
            "{HEADER}\n\
             123456,2024-01-01,36,01,2024-01-01,2024-12-31,2024-06-01,2024-06-01,1234567890\n"
        ),
    );
    let database = dir.path().join("psf.db");

    let first = run_etl(&RunArgs {
        csv: csv.clone(),
        database: database.clone(),
    })
    .expect("first run");
    let second = run_etl(&RunArgs {
        csv,
        database: database.clone(),
    })
    .expect("second run");
    assert_ne!(first.run_id, second.run_id);

    let store = Store::open(&database).expect("reopen store");
    assert_eq!(store.record_count().expect("record count"), 2);
}

#[test]
fn check_reports_without_a_database() {
    let dir = tempfile::tempdir().expect("temp dir");
    let csv = write_csv(
        dir.path(),
        "psf.csv",
        &format!(
            "{HEADER}\n\
             12,2024-01-01,36,01,2024-01-01,2024-12-31,2024-06-01,2024-06-01,1234567890\n"
        ),
    );
    let report = dir.path().join("out").join("report.json");

    let summary = run_check(&CheckArgs {
        csv,
        report: Some(report.clone()),
    })
    .expect("check");

    assert_eq!(summary.rows, 1);
    assert_eq!(summary.issues.len(), 1);
    assert_eq!(summary.issues[0].issue_type.as_str(), "Invalid CCN");
    assert!(report.exists());
}
