//! Command implementations: the ETL run and the validate-only check.

use std::path::Path;

use anyhow::{Context, Result};

use psf_model::{Dataset, DqIssue};
use psf_store::{RunStatus, Store};

use crate::cli::{CheckArgs, RunArgs};
use crate::report;

/// Outcome of a completed ETL run.
#[derive(Debug)]
pub struct EtlSummary {
    pub run_id: i64,
    pub rows_loaded: usize,
    pub issue_count: usize,
}

/// Outcome of a validate-only check.
#[derive(Debug)]
pub struct CheckSummary {
    pub rows: usize,
    pub issues: Vec<DqIssue>,
    pub report_path: Option<std::path::PathBuf>,
}

/// Full ETL: open the store, log the run, validate, load every row, record
/// issues, and mark the run finished.
///
/// Any failure after the run starts marks it FAILED with the error message
/// before propagating; the failure to write that log line itself is only
/// warned about, so the original error always surfaces.
pub fn run_etl(args: &RunArgs) -> Result<EtlSummary> {
    let file_name = source_file_name(&args.csv);
    let mut store = Store::open(&args.database)
        .with_context(|| format!("open database {}", args.database.display()))?;
    let run_id = store.begin_run(&file_name).context("start run log")?;

    match load_and_check(&args.csv, &mut store, run_id) {
        Ok(summary) => {
            store
                .finish_run(
                    run_id,
                    summary.rows_loaded as u64,
                    summary.issue_count as u64,
                    RunStatus::Success,
                    None,
                )
                .context("finish run log")?;
            tracing::info!(
                run_id,
                rows = summary.rows_loaded,
                issues = summary.issue_count,
                "etl completed"
            );
            Ok(summary)
        }
        Err(error) => {
            let message = format!("{error:#}");
            if let Err(log_error) =
                store.finish_run(run_id, 0, 0, RunStatus::Failed, Some(&message))
            {
                tracing::warn!(run_id, %log_error, "could not record run failure");
            }
            Err(error)
        }
    }
}

fn load_and_check(csv: &Path, store: &mut Store, run_id: i64) -> Result<EtlSummary> {
    let dataset = psf_ingest::read_csv(csv)
        .with_context(|| format!("read source file {}", csv.display()))?;
    let issues = psf_validate::run_all_checks(&dataset);

    store.insert_records(&dataset).context("load provider rows")?;
    store
        .insert_issues(run_id, &issues)
        .context("record dq issues")?;

    Ok(EtlSummary {
        run_id,
        rows_loaded: dataset.len(),
        issue_count: issues.len(),
    })
}

/// Validate a source file without a database.
pub fn run_check(args: &CheckArgs) -> Result<CheckSummary> {
    let dataset: Dataset = psf_ingest::read_csv(&args.csv)
        .with_context(|| format!("read source file {}", args.csv.display()))?;
    let issues = psf_validate::run_all_checks(&dataset);

    let report_path = match &args.report {
        Some(path) => {
            report::write_issue_report(path, &source_file_name(&args.csv), dataset.len(), &issues)
                .with_context(|| format!("write report {}", path.display()))?;
            Some(path.clone())
        }
        None => None,
    };

    Ok(CheckSummary {
        rows: dataset.len(),
        issues,
        report_path,
    })
}

fn source_file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
