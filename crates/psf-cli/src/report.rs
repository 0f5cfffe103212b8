//! JSON issue-report output for the `check` command.

use std::path::Path;

use anyhow::Result;
use chrono::Utc;
use serde::Serialize;

use psf_model::DqIssue;

const REPORT_SCHEMA: &str = "psf-loader.dq-issue-report";
const REPORT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
pub struct IssueReportPayload<'a> {
    pub schema: &'static str,
    pub schema_version: u32,
    pub generated_at: String,
    pub source_file: &'a str,
    pub row_count: usize,
    pub issue_count: usize,
    pub issues: &'a [DqIssue],
}

/// Write the issue list as a schema-versioned JSON document.
pub fn write_issue_report(
    path: &Path,
    source_file: &str,
    row_count: usize,
    issues: &[DqIssue],
) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    let payload = IssueReportPayload {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        source_file,
        row_count,
        issue_count: issues.len(),
        issues,
    };
    let json = serde_json::to_string_pretty(&payload)?;
    std::fs::write(path, format!("{json}\n"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::write_issue_report;
    use psf_model::{Dataset, Field, ProviderRecord};
    use psf_validate::run_all_checks;

    #[test]
    fn report_round_trips_as_json() {
        let mut record = ProviderRecord::new();
        record.set(Field::ProviderCcn, Some("12".to_string()));
        let dataset = Dataset::from_records(vec![record]);
        let issues = run_all_checks(&dataset);

        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("report.json");
        write_issue_report(&path, "psf.csv", 1, &issues).expect("write report");

        let text = std::fs::read_to_string(&path).expect("read report");
        let value: serde_json::Value = serde_json::from_str(&text).expect("parse report");
        assert_eq!(value["schema"], "psf-loader.dq-issue-report");
        assert_eq!(value["source_file"], "psf.csv");
        assert_eq!(value["issues"][0]["issue_type"], "Invalid CCN");
    }
}
