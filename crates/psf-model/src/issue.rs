//! Data-quality issue records.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// The closed set of issue categories the rule engine can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum IssueType {
    #[serde(rename = "Missing Value")]
    MissingValue,
    #[serde(rename = "Invalid CCN")]
    InvalidCcn,
    #[serde(rename = "Invalid State Code")]
    InvalidStateCode,
    #[serde(rename = "Invalid Waiver Indicator")]
    InvalidWaiverIndicator,
    #[serde(rename = "Invalid Intermediary Number")]
    InvalidIntermediaryNumber,
    #[serde(rename = "Invalid Provider Type")]
    InvalidProviderType,
    #[serde(rename = "Invalid MSA Geographic Location")]
    InvalidMsaGeographicLocation,
    #[serde(rename = "Invalid NPI")]
    InvalidNpi,
    #[serde(rename = "Invalid Date")]
    InvalidDate,
    #[serde(rename = "Invalid Numeric")]
    InvalidNumeric,
    #[serde(rename = "Duplicate Row")]
    DuplicateRow,
}

impl IssueType {
    /// The audit-trail label for this category.
    pub fn as_str(self) -> &'static str {
        match self {
            IssueType::MissingValue => "Missing Value",
            IssueType::InvalidCcn => "Invalid CCN",
            IssueType::InvalidStateCode => "Invalid State Code",
            IssueType::InvalidWaiverIndicator => "Invalid Waiver Indicator",
            IssueType::InvalidIntermediaryNumber => "Invalid Intermediary Number",
            IssueType::InvalidProviderType => "Invalid Provider Type",
            IssueType::InvalidMsaGeographicLocation => "Invalid MSA Geographic Location",
            IssueType::InvalidNpi => "Invalid NPI",
            IssueType::InvalidDate => "Invalid Date",
            IssueType::InvalidNumeric => "Invalid Numeric",
            IssueType::DuplicateRow => "Duplicate Row",
        }
    }
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One detected data-quality problem in one row.
///
/// Immutable once created. Several issues may reference the same row (one
/// per violated rule); issues are never deduplicated or merged.
#[derive(Debug, Clone, Serialize)]
pub struct DqIssue {
    /// providerCcn when present, else nationalProviderIdentifier, else None.
    /// Not unique across issues.
    pub provider_id: Option<String>,
    pub issue_type: IssueType,
    /// Free-text explanation; names the offending field where applicable.
    pub issue_details: String,
    /// JSON snapshot of the entire offending row at detection time.
    pub row_data: String,
    pub detected_at: DateTime<Utc>,
    /// Dataset-scoped positional index. Used to cross-reference findings
    /// within a run; not persisted downstream.
    pub row_index: usize,
}

#[cfg(test)]
mod tests {
    use super::IssueType;

    #[test]
    fn labels_match_audit_trail_names() {
        assert_eq!(IssueType::MissingValue.as_str(), "Missing Value");
        assert_eq!(IssueType::InvalidCcn.as_str(), "Invalid CCN");
        assert_eq!(
            IssueType::InvalidMsaGeographicLocation.as_str(),
            "Invalid MSA Geographic Location"
        );
        assert_eq!(IssueType::DuplicateRow.to_string(), "Duplicate Row");
    }

    #[test]
    fn issue_type_serializes_as_label() {
        let json = serde_json::to_value(IssueType::InvalidNpi).expect("serialize issue type");
        assert_eq!(json, "Invalid NPI");
    }
}
