//! The closed set of known Provider Specific File columns.

use std::fmt;

/// A known PSF column.
///
/// Wire names (as they appear in source files and in serialized row
/// snapshots) use the upstream camelCase convention; see [`Field::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    ProviderCcn,
    EffectiveDate,
    StateCode,
    ProviderType,
    FiscalYearBeginDate,
    FiscalYearEndDate,
    ExportDate,
    LastUpdated,
    TerminationDate,
    WaiverIndicator,
    IntermediaryNumber,
    MsaActualGeographicLocation,
    NationalProviderIdentifier,
    OperatingCostToChargeRatio,
    CapitalCostToChargeRatio,
    SpecialProviderUpdateFactor,
    SupplementalSecurityIncomeRatio,
    MedicaidRatio,
    UncompensatedCareAmount,
}

impl Field {
    /// Every known field, in declaration order.
    pub const ALL: [Field; 19] = [
        Field::ProviderCcn,
        Field::EffectiveDate,
        Field::StateCode,
        Field::ProviderType,
        Field::FiscalYearBeginDate,
        Field::FiscalYearEndDate,
        Field::ExportDate,
        Field::LastUpdated,
        Field::TerminationDate,
        Field::WaiverIndicator,
        Field::IntermediaryNumber,
        Field::MsaActualGeographicLocation,
        Field::NationalProviderIdentifier,
        Field::OperatingCostToChargeRatio,
        Field::CapitalCostToChargeRatio,
        Field::SpecialProviderUpdateFactor,
        Field::SupplementalSecurityIncomeRatio,
        Field::MedicaidRatio,
        Field::UncompensatedCareAmount,
    ];

    /// The camelCase wire name of this field.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::ProviderCcn => "providerCcn",
            Field::EffectiveDate => "effectiveDate",
            Field::StateCode => "stateCode",
            Field::ProviderType => "providerType",
            Field::FiscalYearBeginDate => "fiscalYearBeginDate",
            Field::FiscalYearEndDate => "fiscalYearEndDate",
            Field::ExportDate => "exportDate",
            Field::LastUpdated => "lastUpdated",
            Field::TerminationDate => "terminationDate",
            Field::WaiverIndicator => "waiverIndicator",
            Field::IntermediaryNumber => "intermediaryNumber",
            Field::MsaActualGeographicLocation => "msaActualGeographicLocation",
            Field::NationalProviderIdentifier => "nationalProviderIdentifier",
            Field::OperatingCostToChargeRatio => "operatingCostToChargeRatio",
            Field::CapitalCostToChargeRatio => "capitalCostToChargeRatio",
            Field::SpecialProviderUpdateFactor => "specialProviderUpdateFactor",
            Field::SupplementalSecurityIncomeRatio => "supplementalSecurityIncomeRatio",
            Field::MedicaidRatio => "medicaidRatio",
            Field::UncompensatedCareAmount => "uncompensatedCareAmount",
        }
    }

    /// Resolve a source-file header to a known field (case-insensitive).
    ///
    /// Returns `None` for unrecognized columns so callers can preserve them
    /// as extras instead of failing ingestion.
    pub fn from_header(header: &str) -> Option<Field> {
        let trimmed = header.trim().trim_matches('\u{feff}');
        Field::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(trimmed))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
