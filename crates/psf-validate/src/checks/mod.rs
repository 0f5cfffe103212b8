//! Validation check modules.
//!
//! Each module implements one rule family. Families are independent: the
//! engine concatenates their output in a fixed order.

pub mod completeness;
pub mod uniqueness;
pub mod validity;

use psf_model::{Dataset, DqIssue};

/// Run every rule family over a dataset.
///
/// Order: completeness issues for all rows, then validity issues for all
/// rows, then uniqueness issues. Within each family rows are visited in
/// dataset order.
pub fn run_all(dataset: &Dataset) -> Vec<DqIssue> {
    let mut issues = Vec::new();

    // 1. Completeness: required fields must be populated.
    issues.extend(completeness::check(dataset));

    // 2. Validity: present values must match their field's format rule.
    issues.extend(validity::check(dataset));

    // 3. Uniqueness: composite key must not repeat.
    issues.extend(uniqueness::check(dataset));

    tracing::debug!(rows = dataset.len(), issues = issues.len(), "dq checks complete");
    issues
}
