//! Data-quality rule engine for Provider Specific File datasets.
//!
//! A pure function from dataset to issue list: no I/O, no side effects, no
//! shared state across invocations. Three independent rule families
//! (completeness, validity, uniqueness) each produce zero or more
//! [`DqIssue`]s; the engine returns their concatenation. Rows are never
//! corrected or dropped — callers load every row regardless of findings
//! and persist the issue list separately.
//!
//! Running the engine twice over an unmodified dataset yields issue lists
//! equal in everything but `detected_at`.

pub mod checks;
pub mod parse;
pub mod report;

use psf_model::{Dataset, DqIssue};

pub use parse::{ParseError, parse_date, parse_number};
pub use report::{build_issue, provider_id};

/// Run the full rule set over a dataset.
pub fn run_all_checks(dataset: &Dataset) -> Vec<DqIssue> {
    checks::run_all(dataset)
}

/// Completeness family only: required fields must be present and non-blank.
pub fn check_completeness(dataset: &Dataset) -> Vec<DqIssue> {
    checks::completeness::check(dataset)
}

/// Validity family only: present values must conform to the field rule table.
pub fn check_validity(dataset: &Dataset) -> Vec<DqIssue> {
    checks::validity::check(dataset)
}

/// Uniqueness family only: the composite key must not repeat.
pub fn check_uniqueness(dataset: &Dataset) -> Vec<DqIssue> {
    checks::uniqueness::check(dataset)
}
