//! Issue construction.
//!
//! Every rule family reports through [`build_issue`] so provider
//! identification and row snapshotting stay consistent across checks.

use chrono::Utc;

use psf_model::{DqIssue, Field, IssueType, ProviderRecord};

/// The identifier attributed to issues for a row: providerCcn when present,
/// the NPI as a fallback, else none.
pub fn provider_id(record: &ProviderRecord) -> Option<String> {
    record
        .value(Field::ProviderCcn)
        .or_else(|| record.value(Field::NationalProviderIdentifier))
        .map(str::to_string)
}

/// Build one issue record for a row, stamping the current UTC time.
pub fn build_issue(
    record: &ProviderRecord,
    row_index: usize,
    issue_type: IssueType,
    details: impl Into<String>,
) -> DqIssue {
    DqIssue {
        provider_id: provider_id(record),
        issue_type,
        issue_details: details.into(),
        row_data: row_snapshot(record),
        detected_at: Utc::now(),
        row_index,
    }
}

/// Serialize the full row for audit/replay. Serialization of a
/// string-keyed record cannot fail in practice.
fn row_snapshot(record: &ProviderRecord) -> String {
    serde_json::to_string(record).unwrap_or_else(|_| String::from("{}"))
}
