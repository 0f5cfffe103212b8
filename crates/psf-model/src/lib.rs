//! Data model for the Provider Specific File DQ loader.
//!
//! Pure data definitions: the typed provider record, the dataset wrapper,
//! the DQ issue record, and the static rule-configuration tables consumed
//! by `psf-validate`. No I/O lives here.

pub mod fields;
pub mod issue;
pub mod record;
pub mod rules;

pub use fields::Field;
pub use issue::{DqIssue, IssueType};
pub use record::{Dataset, ProviderRecord};
pub use rules::{DUPLICATE_KEY_FIELDS, FieldRule, REQUIRED_FIELDS, VALIDITY_RULES, ValueRule};
