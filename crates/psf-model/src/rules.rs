//! Static rule configuration for the DQ checks.
//!
//! The rule set is data, not control flow: adding a field rule means adding
//! a table entry here, never touching the engine loop.

use crate::fields::Field;
use crate::issue::IssueType;

/// Fields that must be present and non-blank in every row.
pub const REQUIRED_FIELDS: [Field; 8] = [
    Field::ProviderCcn,
    Field::EffectiveDate,
    Field::StateCode,
    Field::ProviderType,
    Field::FiscalYearBeginDate,
    Field::FiscalYearEndDate,
    Field::ExportDate,
    Field::LastUpdated,
];

/// Composite key whose values must be unique across a dataset.
pub const DUPLICATE_KEY_FIELDS: [Field; 3] = [
    Field::ProviderCcn,
    Field::EffectiveDate,
    Field::NationalProviderIdentifier,
];

/// A format constraint on a single (present) field value.
///
/// Values are evaluated as trimmed strings. Missing fields are exempt from
/// every rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueRule {
    /// All-ASCII-digit string with length in an inclusive range.
    DigitsBetween { min: usize, max: usize },
    /// All-ASCII-digit string with one of the listed lengths.
    DigitsExact(&'static [usize]),
    /// Exact match against one of the listed values (case-sensitive).
    OneOf(&'static [&'static str]),
    /// Must parse as a calendar date in a conventional format.
    Date,
    /// Must parse as a double-precision float.
    Numeric,
}

/// One entry of the per-field validity rule table.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: Field,
    pub rule: ValueRule,
    pub issue_type: IssueType,
    pub details: &'static str,
}

/// The full validity rule table, in reporting order: identifier and code
/// formats first, then the date fields, then the numeric ratios.
pub const VALIDITY_RULES: [FieldRule; 19] = [
    FieldRule {
        field: Field::ProviderCcn,
        rule: ValueRule::DigitsBetween { min: 6, max: 13 },
        issue_type: IssueType::InvalidCcn,
        details: "providerCcn must be 6-13 digit numeric",
    },
    FieldRule {
        field: Field::StateCode,
        rule: ValueRule::DigitsExact(&[2]),
        issue_type: IssueType::InvalidStateCode,
        details: "stateCode must be a 2-digit numeric value",
    },
    FieldRule {
        field: Field::WaiverIndicator,
        rule: ValueRule::OneOf(&["Y", "N"]),
        issue_type: IssueType::InvalidWaiverIndicator,
        details: "waiverIndicator must be one of: Y, N",
    },
    FieldRule {
        field: Field::IntermediaryNumber,
        rule: ValueRule::DigitsExact(&[5]),
        issue_type: IssueType::InvalidIntermediaryNumber,
        details: "intermediaryNumber must be 5-digit numeric",
    },
    FieldRule {
        field: Field::ProviderType,
        rule: ValueRule::DigitsExact(&[2]),
        issue_type: IssueType::InvalidProviderType,
        details: "providerType must be 2-digit numeric",
    },
    FieldRule {
        field: Field::MsaActualGeographicLocation,
        rule: ValueRule::DigitsExact(&[2, 4]),
        issue_type: IssueType::InvalidMsaGeographicLocation,
        details: "msaActualGeographicLocation must be 2 or 4 digit numeric",
    },
    FieldRule {
        field: Field::NationalProviderIdentifier,
        rule: ValueRule::DigitsExact(&[10]),
        issue_type: IssueType::InvalidNpi,
        details: "nationalProviderIdentifier must be 10-digit numeric",
    },
    FieldRule {
        field: Field::EffectiveDate,
        rule: ValueRule::Date,
        issue_type: IssueType::InvalidDate,
        details: "effectiveDate has invalid date format",
    },
    FieldRule {
        field: Field::FiscalYearBeginDate,
        rule: ValueRule::Date,
        issue_type: IssueType::InvalidDate,
        details: "fiscalYearBeginDate has invalid date format",
    },
    FieldRule {
        field: Field::FiscalYearEndDate,
        rule: ValueRule::Date,
        issue_type: IssueType::InvalidDate,
        details: "fiscalYearEndDate has invalid date format",
    },
    FieldRule {
        field: Field::ExportDate,
        rule: ValueRule::Date,
        issue_type: IssueType::InvalidDate,
        details: "exportDate has invalid date format",
    },
    FieldRule {
        field: Field::TerminationDate,
        rule: ValueRule::Date,
        issue_type: IssueType::InvalidDate,
        details: "terminationDate has invalid date format",
    },
    FieldRule {
        field: Field::LastUpdated,
        rule: ValueRule::Date,
        issue_type: IssueType::InvalidDate,
        details: "lastUpdated has invalid date format",
    },
    FieldRule {
        field: Field::OperatingCostToChargeRatio,
        rule: ValueRule::Numeric,
        issue_type: IssueType::InvalidNumeric,
        details: "operatingCostToChargeRatio must be numeric",
    },
    FieldRule {
        field: Field::CapitalCostToChargeRatio,
        rule: ValueRule::Numeric,
        issue_type: IssueType::InvalidNumeric,
        details: "capitalCostToChargeRatio must be numeric",
    },
    FieldRule {
        field: Field::SpecialProviderUpdateFactor,
        rule: ValueRule::Numeric,
        issue_type: IssueType::InvalidNumeric,
        details: "specialProviderUpdateFactor must be numeric",
    },
    FieldRule {
        field: Field::SupplementalSecurityIncomeRatio,
        rule: ValueRule::Numeric,
        issue_type: IssueType::InvalidNumeric,
        details: "supplementalSecurityIncomeRatio must be numeric",
    },
    FieldRule {
        field: Field::MedicaidRatio,
        rule: ValueRule::Numeric,
        issue_type: IssueType::InvalidNumeric,
        details: "medicaidRatio must be numeric",
    },
    FieldRule {
        field: Field::UncompensatedCareAmount,
        rule: ValueRule::Numeric,
        issue_type: IssueType::InvalidNumeric,
        details: "uncompensatedCareAmount must be numeric",
    },
];
