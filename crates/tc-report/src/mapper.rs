//! Flattening of inputs and results into report template fields.

use crate::field_map::report_field;
use crate::format::format_value;
use crate::{ReportError, ReportResult};
use chrono::{Local, NaiveDate};
use serde_json::Value;
use std::collections::BTreeMap;
use std::str::FromStr;
use tc_calc::TransformerResults;
use tc_project::{MagneticCircuit, PhaseConfiguration, TransformerInputs, TransformerType};
use tracing::debug;

/// Report field name → formatted value.
pub type FieldMapping = BTreeMap<String, String>;

pub const DATE_FIELD: &str = "Date";
pub const INSTALLATION_FIELD: &str = "installation";
pub const COUPLING_FIELD: &str = "Couplage";
pub const SHEET_FIELD: &str = "ToleMagnetique";

/// Result sections that carry report fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultSection {
    Electrical,
    Winding,
    Geometry,
    Thermal,
}

impl ResultSection {
    /// Generic pass order; a later section wins on a shared report field.
    pub const MAPPED: [ResultSection; 4] = [
        ResultSection::Electrical,
        ResultSection::Winding,
        ResultSection::Geometry,
        ResultSection::Thermal,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Electrical => "electrical",
            Self::Winding => "winding",
            Self::Geometry => "geometry",
            Self::Thermal => "thermal",
        }
    }

    fn to_value(self, results: &TransformerResults) -> ReportResult<Value> {
        let value = match self {
            Self::Electrical => serde_json::to_value(&results.electrical)?,
            Self::Winding => serde_json::to_value(&results.winding)?,
            Self::Geometry => serde_json::to_value(&results.geometry)?,
            Self::Thermal => serde_json::to_value(&results.thermal)?,
        };
        Ok(value)
    }
}

impl FromStr for ResultSection {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::MAPPED
            .into_iter()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| ReportError::UnknownSection {
                name: s.to_string(),
            })
    }
}

/// Builds the flat field dictionary handed to the report generator.
///
/// Stateless; every call reads only its arguments and the static field table.
#[derive(Debug, Default, Clone, Copy)]
pub struct FieldMapper;

impl FieldMapper {
    pub fn new() -> Self {
        Self
    }

    /// Map with today's local date in the `Date` field.
    pub fn map_to_fields(
        &self,
        inputs: &TransformerInputs,
        results: &TransformerResults,
    ) -> ReportResult<FieldMapping> {
        self.map_to_fields_on(inputs, results, Local::now().date_naive())
    }

    pub fn map_to_fields_on(
        &self,
        inputs: &TransformerInputs,
        results: &TransformerResults,
        date: NaiveDate,
    ) -> ReportResult<FieldMapping> {
        let mut fields = FieldMapping::new();

        emit_mapped(&mut fields, &serde_json::to_value(inputs)?);
        for section in ResultSection::MAPPED {
            emit_mapped(&mut fields, &section.to_value(results)?);
        }

        fields.insert(
            INSTALLATION_FIELD.to_string(),
            installation_description(inputs),
        );
        if let Some(code) = coupling_code(inputs) {
            fields.insert(COUPLING_FIELD.to_string(), code);
        }
        if let Some(sheet) = inputs.sheet_type {
            fields.insert(SHEET_FIELD.to_string(), sheet.as_str().to_string());
        }
        fields.insert(DATE_FIELD.to_string(), format_date(date));

        debug!(fields = fields.len(), "mapped report fields");
        Ok(fields)
    }

    /// Fields of a single result section, without composed fields or date.
    pub fn map_section(
        &self,
        results: &TransformerResults,
        section: ResultSection,
    ) -> ReportResult<FieldMapping> {
        let mut fields = FieldMapping::new();
        emit_mapped(&mut fields, &section.to_value(results)?);
        Ok(fields)
    }

    /// Input fields present in `inputs` that have no report field.
    pub fn unmapped_input_fields(&self, inputs: &TransformerInputs) -> ReportResult<Vec<String>> {
        let unmapped = unmapped_keys(&serde_json::to_value(inputs)?);
        if !unmapped.is_empty() {
            debug!(count = unmapped.len(), fields = ?unmapped, "input fields without report field");
        }
        Ok(unmapped)
    }

    /// Result fields of the mapped sections that have no report field, as
    /// `section.field`.
    pub fn unmapped_result_fields(&self, results: &TransformerResults) -> ReportResult<Vec<String>> {
        let mut unmapped = Vec::new();
        for section in ResultSection::MAPPED {
            for key in unmapped_keys(&section.to_value(results)?) {
                unmapped.push(format!("{}.{}", section.as_str(), key));
            }
        }
        Ok(unmapped)
    }

    /// Plain-text listing of a mapping and of the fields it left out.
    pub fn mapping_report(
        &self,
        fields: &FieldMapping,
        inputs: &TransformerInputs,
        results: &TransformerResults,
    ) -> ReportResult<String> {
        let mut lines = vec!["=== PDF FIELD MAPPING REPORT ===".to_string(), String::new()];
        for (field, value) in fields {
            lines.push(format!("PDF Field: \"{field}\" = \"{value}\""));
        }

        lines.push(String::new());
        lines.push("=== UNMAPPED INPUT FIELDS ===".to_string());
        for key in self.unmapped_input_fields(inputs)? {
            lines.push(format!("Input field \"{key}\" has no PDF mapping"));
        }

        lines.push(String::new());
        lines.push("=== UNMAPPED RESULT FIELDS ===".to_string());
        for key in self.unmapped_result_fields(results)? {
            lines.push(format!("Result field \"{key}\" has no PDF mapping"));
        }

        Ok(lines.join("\n"))
    }
}

fn emit_mapped(fields: &mut FieldMapping, record: &Value) {
    let Value::Object(map) = record else {
        return;
    };
    for (key, value) in map {
        let Some(field) = report_field(key) else {
            continue;
        };
        if let Some(text) = format_value(value) {
            fields.insert(field.to_string(), text);
        }
    }
}

fn unmapped_keys(record: &Value) -> Vec<String> {
    match record {
        Value::Object(map) => map
            .keys()
            .filter(|key| report_field(key).is_none())
            .cloned()
            .collect(),
        _ => Vec::new(),
    }
}

/// "Transformateur {configuration} {kVA} kVA à {circuit} {type}", with the
/// power printed as entered (100, 250.5).
pub fn installation_description(inputs: &TransformerInputs) -> String {
    let configuration = inputs
        .configuration
        .unwrap_or(PhaseConfiguration::Triphase)
        .label();
    let circuit = inputs
        .magnetic_circuit_type
        .unwrap_or(MagneticCircuit::ThreeLimb)
        .label();
    let kind = inputs
        .transformer_type
        .unwrap_or(TransformerType::Hermetique)
        .label();

    format!(
        "Transformateur {configuration} {} kVA à {circuit} {kind}",
        inputs.power_kva
    )
}

/// Primary code, secondary code and hourly index run together, e.g. "DYN11".
/// `None` when none of the three is set.
pub fn coupling_code(inputs: &TransformerInputs) -> Option<String> {
    if inputs.primary_coupling.is_none()
        && inputs.secondary_coupling.is_none()
        && inputs.hourly_index.is_none()
    {
        return None;
    }

    let primary = inputs.primary_coupling.map_or("", |c| c.as_str());
    let secondary = inputs.secondary_coupling.map_or("", |c| c.as_str());
    let index = inputs
        .hourly_index
        .map(|i| i.to_string())
        .unwrap_or_default();
    Some(format!("{primary}{secondary}{index}"))
}

/// dd/mm/yyyy.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tc_project::{Coupling, SheetGrade};

    fn scenario() -> (TransformerInputs, TransformerResults) {
        let inputs = TransformerInputs::rated(100.0, 20_000.0, 400.0);
        let results = tc_calc::compute_all(&inputs);
        (inputs, results)
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
    }

    #[test]
    fn installation_uses_defaults() {
        let (inputs, _) = scenario();
        assert_eq!(
            installation_description(&inputs),
            "Transformateur Triphasé 100 kVA à 3 colonnes Hermétique"
        );
    }

    #[test]
    fn installation_uses_labels_when_set() {
        let mut inputs = TransformerInputs::rated(250.5, 20_000.0, 400.0);
        inputs.configuration = Some(PhaseConfiguration::Monophase);
        inputs.magnetic_circuit_type = Some(MagneticCircuit::FourLimb);
        inputs.transformer_type = Some(TransformerType::H61);
        assert_eq!(
            installation_description(&inputs),
            "Transformateur Monophasé 250.5 kVA à 4 colonnes H61"
        );
    }

    #[test]
    fn installation_prints_power_as_entered() {
        let inputs = TransformerInputs::rated(1.125, 20_000.0, 400.0);
        assert_eq!(
            installation_description(&inputs),
            "Transformateur Triphasé 1.125 kVA à 3 colonnes Hermétique"
        );
    }

    #[test]
    fn coupling_code_concatenates_parts() {
        let mut inputs = TransformerInputs::rated(100.0, 20_000.0, 400.0);
        assert_eq!(coupling_code(&inputs), None);

        inputs.primary_coupling = Some(Coupling::D);
        inputs.secondary_coupling = Some(Coupling::YN);
        inputs.hourly_index = Some(11);
        assert_eq!(coupling_code(&inputs).as_deref(), Some("DYN11"));

        inputs.hourly_index = Some(0);
        assert_eq!(coupling_code(&inputs).as_deref(), Some("DYN0"));
    }

    #[test]
    fn date_is_day_month_year() {
        assert_eq!(format_date(date()), "05/03/2024");
    }

    #[test]
    fn date_overrides_and_composed_fields_win() {
        let (mut inputs, _) = scenario();
        inputs.installation_type = Some(tc_project::InstallationType::Poteau);
        inputs.primary_coupling = Some(Coupling::D);
        inputs.sheet_type = Some(SheetGrade::M120_27);
        let results = tc_calc::compute_all(&inputs);

        let fields = FieldMapper::new()
            .map_to_fields_on(&inputs, &results, date())
            .unwrap();
        assert_eq!(fields["Date"], "05/03/2024");
        assert!(fields["installation"].starts_with("Transformateur "));
        assert_eq!(fields["Couplage"], "D");
        assert_eq!(fields["ToleMagnetique"], "M120-27");
    }

    #[test]
    fn section_names_parse() {
        assert_eq!(
            "geometry".parse::<ResultSection>().unwrap(),
            ResultSection::Geometry
        );
        assert!(matches!(
            "bom".parse::<ResultSection>(),
            Err(ReportError::UnknownSection { .. })
        ));
    }

    #[test]
    fn single_section_mapping() {
        let (_, results) = scenario();
        let fields = FieldMapper::new()
            .map_section(&results, ResultSection::Thermal)
            .unwrap();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields["echauffement"], "38");
        assert_eq!(fields["PertesTot"], "6334.17");
    }
}
