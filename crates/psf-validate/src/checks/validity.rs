//! Validity check: present values must conform to their field's format rule.
//!
//! The rule set is the static table in `psf_model::rules`; this module only
//! walks it. Missing fields are exempt from every rule.

use psf_model::{Dataset, DqIssue, ValueRule, rules::VALIDITY_RULES};

use crate::parse::{is_all_digits, parse_date, parse_number};
use crate::report::build_issue;

/// Evaluate every validity rule against every row, in table order.
pub fn check(dataset: &Dataset) -> Vec<DqIssue> {
    let mut issues = Vec::new();
    for (row_index, record) in dataset.iter() {
        for rule in &VALIDITY_RULES {
            let Some(value) = record.value(rule.field) else {
                continue;
            };
            if !conforms(&rule.rule, value) {
                issues.push(build_issue(record, row_index, rule.issue_type, rule.details));
            }
        }
    }
    issues
}

/// Whether a trimmed, non-empty value satisfies a format rule.
fn conforms(rule: &ValueRule, value: &str) -> bool {
    match rule {
        ValueRule::DigitsBetween { min, max } => {
            is_all_digits(value) && (*min..=*max).contains(&value.len())
        }
        ValueRule::DigitsExact(lengths) => is_all_digits(value) && lengths.contains(&value.len()),
        ValueRule::OneOf(allowed) => allowed.contains(&value),
        ValueRule::Date => parse_date(value).is_ok(),
        ValueRule::Numeric => parse_number(value).is_ok(),
    }
}
