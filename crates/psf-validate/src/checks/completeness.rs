//! Completeness check: every required field must be present and non-blank.

use psf_model::{Dataset, DqIssue, IssueType, rules::REQUIRED_FIELDS};

use crate::report::build_issue;

/// Emit one "Missing Value" issue per missing required field per row.
pub fn check(dataset: &Dataset) -> Vec<DqIssue> {
    let mut issues = Vec::new();
    for (row_index, record) in dataset.iter() {
        for field in REQUIRED_FIELDS {
            if record.is_missing(field) {
                issues.push(build_issue(
                    record,
                    row_index,
                    IssueType::MissingValue,
                    format!("{field} is required"),
                ));
            }
        }
    }
    issues
}
