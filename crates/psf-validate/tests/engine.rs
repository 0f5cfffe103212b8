//! End-to-end rule engine behavior over whole datasets.

use psf_model::{Dataset, Field, IssueType, ProviderRecord};
use psf_validate::{check_completeness, run_all_checks};

/// A row that passes every rule on its own.
fn valid_record() -> ProviderRecord {
    let mut record = ProviderRecord::new();
    record.set(Field::ProviderCcn, Some("123456".to_string()));
    record.set(Field::EffectiveDate, Some("2024-01-01".to_string()));
    record.set(Field::StateCode, Some("36".to_string()));
    record.set(Field::ProviderType, Some("01".to_string()));
    record.set(Field::FiscalYearBeginDate, Some("2024-01-01".to_string()));
    record.set(Field::FiscalYearEndDate, Some("2024-12-31".to_string()));
    record.set(Field::ExportDate, Some("2024-06-01".to_string()));
    record.set(Field::LastUpdated, Some("2024-06-01".to_string()));
    record.set(
        Field::NationalProviderIdentifier,
        Some("1234567890".to_string()),
    );
    record
}

#[test]
fn clean_dataset_produces_no_issues() {
    let mut other = valid_record();
    other.set(Field::EffectiveDate, Some("2025-01-01".to_string()));
    let dataset = Dataset::from_records(vec![valid_record(), other]);
    assert!(run_all_checks(&dataset).is_empty());
}

#[test]
fn completeness_reports_only_missing_required_fields() {
    let mut record = valid_record();
    record.set(Field::ProviderType, None);
    record.set(Field::LastUpdated, Some(" ".to_string()));
    // terminationDate is optional: leaving it out is not a finding.
    let dataset = Dataset::from_records(vec![record]);

    let issues = check_completeness(&dataset);
    let details: Vec<&str> = issues
        .iter()
        .map(|issue| issue.issue_details.as_str())
        .collect();
    assert_eq!(
        details,
        vec!["providerType is required", "lastUpdated is required"]
    );
}

#[test]
fn mixed_dataset_reports_per_family_in_order() {
    // Row 0 valid and unique; row 1 missing stateCode with a 1-digit
    // providerType.
    let mut bad = valid_record();
    bad.set(Field::EffectiveDate, Some("2025-06-01".to_string()));
    bad.set(Field::StateCode, None);
    bad.set(Field::ProviderType, Some("1".to_string()));
    let dataset = Dataset::from_records(vec![valid_record(), bad]);

    let issues = run_all_checks(&dataset);
    assert_eq!(issues.len(), 2);

    assert_eq!(issues[0].issue_type, IssueType::MissingValue);
    assert_eq!(issues[0].issue_details, "stateCode is required");
    assert_eq!(issues[0].row_index, 1);

    assert_eq!(issues[1].issue_type, IssueType::InvalidProviderType);
    assert_eq!(issues[1].row_index, 1);
}

#[test]
fn duplicate_rows_each_get_an_issue() {
    let mut dup = valid_record();
    dup.set(Field::ProviderCcn, Some("123456789012".to_string()));
    let dataset = Dataset::from_records(vec![dup.clone(), dup.clone(), dup]);

    let issues = run_all_checks(&dataset);
    let duplicates: Vec<&psf_model::DqIssue> = issues
        .iter()
        .filter(|issue| issue.issue_type == IssueType::DuplicateRow)
        .collect();
    assert_eq!(duplicates.len(), 3);
    assert!(duplicates.iter().all(|issue| issue.provider_id
        == Some("123456789012".to_string())));
}

#[test]
fn engine_is_idempotent_modulo_timestamps() {
    let mut bad = valid_record();
    bad.set(Field::StateCode, Some("ABC".to_string()));
    bad.set(Field::MedicaidRatio, Some("lots".to_string()));
    let dataset = Dataset::from_records(vec![valid_record(), bad.clone(), bad]);

    let first = run_all_checks(&dataset);
    let second = run_all_checks(&dataset);

    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.issue_type, b.issue_type);
        assert_eq!(a.issue_details, b.issue_details);
        assert_eq!(a.row_index, b.row_index);
        assert_eq!(a.provider_id, b.provider_id);
        assert_eq!(a.row_data, b.row_data);
    }
}

#[test]
fn issues_attribute_provider_id_consistently() {
    // No CCN anywhere: every family falls back to the NPI.
    let mut record = ProviderRecord::new();
    record.set(
        Field::NationalProviderIdentifier,
        Some("9876543210".to_string()),
    );
    record.set(Field::WaiverIndicator, Some("maybe".to_string()));
    let dataset = Dataset::from_records(vec![record.clone(), record]);

    let issues = run_all_checks(&dataset);
    assert!(!issues.is_empty());
    assert!(
        issues
            .iter()
            .all(|issue| issue.provider_id == Some("9876543210".to_string()))
    );
}
