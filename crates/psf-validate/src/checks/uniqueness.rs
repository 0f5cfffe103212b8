//! Uniqueness check over the (providerCcn, effectiveDate, NPI) composite key.

use std::collections::HashMap;

use psf_model::{Dataset, DqIssue, IssueType, ProviderRecord, rules::DUPLICATE_KEY_FIELDS};

use crate::report::build_issue;

const DUPLICATE_DETAILS: &str = "Duplicate providerCcn + effectiveDate + NPI";

/// Emit one "Duplicate Row" issue for every row whose composite key is
/// shared with at least one other row.
///
/// Key values are literal (untrimmed, case-sensitive); a missing component
/// matches a missing component, so rows with an entirely missing key form a
/// duplicate group of their own.
pub fn check(dataset: &Dataset) -> Vec<DqIssue> {
    let mut occurrences: HashMap<Vec<Option<&str>>, usize> = HashMap::new();
    for (_, record) in dataset.iter() {
        *occurrences.entry(composite_key(record)).or_insert(0) += 1;
    }

    let mut issues = Vec::new();
    for (row_index, record) in dataset.iter() {
        let count = occurrences
            .get(&composite_key(record))
            .copied()
            .unwrap_or(0);
        if count > 1 {
            issues.push(build_issue(
                record,
                row_index,
                IssueType::DuplicateRow,
                DUPLICATE_DETAILS,
            ));
        }
    }
    issues
}

/// The literal key components, with blank values collapsed to missing.
fn composite_key(record: &ProviderRecord) -> Vec<Option<&str>> {
    DUPLICATE_KEY_FIELDS
        .iter()
        .map(|&field| {
            record
                .raw(field)
                .filter(|value| !value.trim().is_empty())
        })
        .collect()
}
