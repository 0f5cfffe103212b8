//! Typed provider-period record and the dataset that holds them.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::fields::Field;

/// One provider-period record with every known PSF column modeled as an
/// optional value.
///
/// A field that is `None`, or whose value is blank after trimming, is
/// *missing*; the two are treated identically everywhere. Columns not in the
/// known field set are preserved in `extras` so a serialized row snapshot
/// reflects the full source row.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProviderRecord {
    #[serde(rename = "providerCcn")]
    pub provider_ccn: Option<String>,
    #[serde(rename = "effectiveDate")]
    pub effective_date: Option<String>,
    #[serde(rename = "stateCode")]
    pub state_code: Option<String>,
    #[serde(rename = "providerType")]
    pub provider_type: Option<String>,
    #[serde(rename = "fiscalYearBeginDate")]
    pub fiscal_year_begin_date: Option<String>,
    #[serde(rename = "fiscalYearEndDate")]
    pub fiscal_year_end_date: Option<String>,
    #[serde(rename = "exportDate")]
    pub export_date: Option<String>,
    #[serde(rename = "lastUpdated")]
    pub last_updated: Option<String>,
    #[serde(rename = "terminationDate")]
    pub termination_date: Option<String>,
    #[serde(rename = "waiverIndicator")]
    pub waiver_indicator: Option<String>,
    #[serde(rename = "intermediaryNumber")]
    pub intermediary_number: Option<String>,
    #[serde(rename = "msaActualGeographicLocation")]
    pub msa_actual_geographic_location: Option<String>,
    #[serde(rename = "nationalProviderIdentifier")]
    pub national_provider_identifier: Option<String>,
    #[serde(rename = "operatingCostToChargeRatio")]
    pub operating_cost_to_charge_ratio: Option<String>,
    #[serde(rename = "capitalCostToChargeRatio")]
    pub capital_cost_to_charge_ratio: Option<String>,
    #[serde(rename = "specialProviderUpdateFactor")]
    pub special_provider_update_factor: Option<String>,
    #[serde(rename = "supplementalSecurityIncomeRatio")]
    pub supplemental_security_income_ratio: Option<String>,
    #[serde(rename = "medicaidRatio")]
    pub medicaid_ratio: Option<String>,
    #[serde(rename = "uncompensatedCareAmount")]
    pub uncompensated_care_amount: Option<String>,
    /// Unrecognized source columns, keyed by their original header.
    #[serde(flatten)]
    pub extras: BTreeMap<String, String>,
}

impl ProviderRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// The literal stored value of a field, untrimmed.
    pub fn raw(&self, field: Field) -> Option<&str> {
        self.slot(field).as_deref()
    }

    /// The trimmed value of a field, or `None` when the field is missing
    /// (absent or blank).
    pub fn value(&self, field: Field) -> Option<&str> {
        self.raw(field)
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }

    /// Whether a field is missing (absent or blank after trimming).
    pub fn is_missing(&self, field: Field) -> bool {
        self.value(field).is_none()
    }

    /// Store a value for a known field. Blank strings are kept as stored,
    /// not collapsed to `None`; missing-ness is decided at read time.
    pub fn set(&mut self, field: Field, value: Option<String>) {
        *self.slot_mut(field) = value;
    }

    fn slot(&self, field: Field) -> &Option<String> {
        match field {
            Field::ProviderCcn => &self.provider_ccn,
            Field::EffectiveDate => &self.effective_date,
            Field::StateCode => &self.state_code,
            Field::ProviderType => &self.provider_type,
            Field::FiscalYearBeginDate => &self.fiscal_year_begin_date,
            Field::FiscalYearEndDate => &self.fiscal_year_end_date,
            Field::ExportDate => &self.export_date,
            Field::LastUpdated => &self.last_updated,
            Field::TerminationDate => &self.termination_date,
            Field::WaiverIndicator => &self.waiver_indicator,
            Field::IntermediaryNumber => &self.intermediary_number,
            Field::MsaActualGeographicLocation => &self.msa_actual_geographic_location,
            Field::NationalProviderIdentifier => &self.national_provider_identifier,
            Field::OperatingCostToChargeRatio => &self.operating_cost_to_charge_ratio,
            Field::CapitalCostToChargeRatio => &self.capital_cost_to_charge_ratio,
            Field::SpecialProviderUpdateFactor => &self.special_provider_update_factor,
            Field::SupplementalSecurityIncomeRatio => &self.supplemental_security_income_ratio,
            Field::MedicaidRatio => &self.medicaid_ratio,
            Field::UncompensatedCareAmount => &self.uncompensated_care_amount,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::ProviderCcn => &mut self.provider_ccn,
            Field::EffectiveDate => &mut self.effective_date,
            Field::StateCode => &mut self.state_code,
            Field::ProviderType => &mut self.provider_type,
            Field::FiscalYearBeginDate => &mut self.fiscal_year_begin_date,
            Field::FiscalYearEndDate => &mut self.fiscal_year_end_date,
            Field::ExportDate => &mut self.export_date,
            Field::LastUpdated => &mut self.last_updated,
            Field::TerminationDate => &mut self.termination_date,
            Field::WaiverIndicator => &mut self.waiver_indicator,
            Field::IntermediaryNumber => &mut self.intermediary_number,
            Field::MsaActualGeographicLocation => &mut self.msa_actual_geographic_location,
            Field::NationalProviderIdentifier => &mut self.national_provider_identifier,
            Field::OperatingCostToChargeRatio => &mut self.operating_cost_to_charge_ratio,
            Field::CapitalCostToChargeRatio => &mut self.capital_cost_to_charge_ratio,
            Field::SpecialProviderUpdateFactor => &mut self.special_provider_update_factor,
            Field::SupplementalSecurityIncomeRatio => &mut self.supplemental_security_income_ratio,
            Field::MedicaidRatio => &mut self.medicaid_ratio,
            Field::UncompensatedCareAmount => &mut self.uncompensated_care_amount,
        }
    }
}

/// An ordered collection of provider records.
///
/// The positional index of a record (its enumeration index) is assigned at
/// load time and used only to attribute issues within a single run; it is
/// never a business key.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<ProviderRecord>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<ProviderRecord>) -> Self {
        Self { records }
    }

    pub fn push(&mut self, record: ProviderRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate records with their positional index.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &ProviderRecord)> {
        self.records.iter().enumerate()
    }

    pub fn records(&self) -> &[ProviderRecord] {
        &self.records
    }
}
