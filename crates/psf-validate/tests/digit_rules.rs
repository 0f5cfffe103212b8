//! Property tests for the digit-string format rules.

use proptest::prelude::*;

use psf_model::{Dataset, Field, IssueType, ProviderRecord};
use psf_validate::check_validity;

fn single(field: Field, value: String) -> Dataset {
    let mut record = ProviderRecord::new();
    record.set(field, Some(value));
    Dataset::from_records(vec![record])
}

proptest! {
    #[test]
    fn ccn_of_valid_length_never_flags(value in "[0-9]{6,13}") {
        let issues = check_validity(&single(Field::ProviderCcn, value));
        prop_assert!(issues.is_empty());
    }

    #[test]
    fn ccn_with_non_digit_always_flags(
        prefix in "[0-9]{0,5}",
        junk in "[^0-9\\s]",
        suffix in "[0-9]{0,5}",
    ) {
        let value = format!("{prefix}{junk}{suffix}");
        let issues = check_validity(&single(Field::ProviderCcn, value));
        prop_assert_eq!(issues.len(), 1);
        prop_assert_eq!(issues[0].issue_type, IssueType::InvalidCcn);
    }

    #[test]
    fn npi_requires_exactly_ten_digits(value in "[0-9]{1,15}") {
        let expected = usize::from(value.len() != 10);
        let issues = check_validity(&single(Field::NationalProviderIdentifier, value));
        prop_assert_eq!(issues.len(), expected);
    }

    #[test]
    fn numeric_fields_accept_any_float(value in any::<f64>()) {
        // NaN formats as "NaN", which still parses as f64.
        let issues = check_validity(&single(Field::MedicaidRatio, value.to_string()));
        prop_assert!(issues.is_empty());
    }
}
