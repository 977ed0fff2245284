use chrono::NaiveDate;
use tc_calc::compute_all;
use tc_project::*;
use tc_report::*;

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 11, 30).unwrap()
}

fn map(inputs: &TransformerInputs) -> FieldMapping {
    let results = compute_all(inputs);
    FieldMapper::new()
        .map_to_fields_on(inputs, &results, date())
        .unwrap()
}

#[test]
fn scenario_fields() {
    let fields = map(&TransformerInputs::rated(100.0, 20_000.0, 400.0));

    assert_eq!(fields["kVA"], "100");
    assert_eq!(fields["frequence"], "50");
    assert_eq!(fields["U1n(V)"], "20000");
    assert_eq!(fields["U20 (V)"], "400");
    assert_eq!(fields["Induction"], "1.50");
    assert_eq!(fields["NatureBob"], "cuivre");

    assert_eq!(fields["CourantLignePrim"], "2.89");
    assert_eq!(fields["CourantLigneSec"], "144.34");
    assert_eq!(fields["CourantPhaseSec"], "144.34");
    assert_eq!(fields["tensionPhaseSec"], "230.94");
    assert_eq!(fields["ClasseTensionPrim"], "MT");
    assert_eq!(fields["ClasseTensionSec"], "BT");
    assert_eq!(fields["classeTensionlast"], "MT");
    assert_eq!(fields["Pcc"], "6254.17");
    assert_eq!(fields["PerteVide"], "80");

    assert_eq!(fields["N1"], "0");
    assert_eq!(fields["BobSectionduConducteurprim1"], "0.82");
    assert_eq!(fields["BobSectionduConducteurSec"], "41.24");

    assert_eq!(fields["ColonnesSnette"], "1500");
    assert_eq!(fields["EPCM"], "0.35");
    assert_eq!(fields["CulasseBT"], "1.35");

    assert_eq!(fields["PertesTot"], "6334.17");
    assert_eq!(fields["echauffement"], "38");

    assert_eq!(
        fields["installation"],
        "Transformateur Triphasé 100 kVA à 3 colonnes Hermétique"
    );
    assert_eq!(fields["Date"], "30/11/2025");
    assert!(!fields.contains_key("Couplage"));
    assert!(!fields.contains_key("client"));
}

#[test]
fn every_mapped_field_is_a_template_field_with_text() {
    let mut inputs = TransformerInputs::rated(630.0, 30_000.0, 410.0);
    inputs.client_name = Some("ACME".to_string());
    inputs.project_name = Some("P-17".to_string());
    inputs.cooling_type = Some(CoolingClass::Onan);
    inputs.max_temperature_rise = Some(70.0);
    inputs.core_material = Some(CoreMaterial::AcierHib);
    let fields = map(&inputs);

    let template: std::collections::HashSet<&str> =
        FIELD_TABLE.iter().map(|(_, field)| *field).collect();
    for (field, value) in &fields {
        assert!(template.contains(field.as_str()), "{field} is not a template field");
        assert!(!value.is_empty(), "{field} is empty");
    }

    assert_eq!(fields["client"], "ACME");
    assert_eq!(fields["reference"], "P-17");
    assert_eq!(fields["DureeCC"], "ONAN");
    assert_eq!(fields["Variation"], "70");
    assert_eq!(fields["ClU(KV)"], "acier_hib");
}

#[test]
fn empty_text_inputs_are_skipped() {
    let mut inputs = TransformerInputs::rated(100.0, 20_000.0, 400.0);
    inputs.client_name = Some(String::new());
    let fields = map(&inputs);
    assert!(!fields.contains_key("client"));
}

#[test]
fn coupling_field_is_composed() {
    let mut inputs = TransformerInputs::rated(100.0, 20_000.0, 400.0);
    inputs.primary_coupling = Some(Coupling::D);
    inputs.secondary_coupling = Some(Coupling::YN);
    inputs.hourly_index = Some(11);
    assert_eq!(map(&inputs)["Couplage"], "DYN11");
}

#[test]
fn report_lists_fields_and_unmapped_names() {
    let mut inputs = TransformerInputs::rated(100.0, 20_000.0, 400.0);
    inputs.hourly_index = Some(5);
    let results = compute_all(&inputs);
    let mapper = FieldMapper::new();
    let fields = mapper.map_to_fields_on(&inputs, &results, date()).unwrap();

    let unmapped = mapper.unmapped_input_fields(&inputs).unwrap();
    assert!(unmapped.contains(&"hourly_index".to_string()));
    assert!(unmapped.contains(&"stages".to_string()));
    assert!(!unmapped.contains(&"power_kva".to_string()));

    let report = mapper.mapping_report(&fields, &inputs, &results).unwrap();
    assert!(report.starts_with("=== PDF FIELD MAPPING REPORT ==="));
    assert!(report.contains("PDF Field: \"kVA\" = \"100\""));
    assert!(report.contains("=== UNMAPPED INPUT FIELDS ==="));
    assert!(report.contains("Input field \"hourly_index\" has no PDF mapping"));
    assert!(report.contains("Result field \"thermal.max_temperature\" has no PDF mapping"));
    assert!(report.contains("Result field \"geometry.core_weight_kg\" has no PDF mapping"));
}

#[test]
fn half_hundredths_round_up_in_fields() {
    let mut inputs = TransformerInputs::rated(100.0, 20_000.0, 400.0);
    inputs.b_max = 1.125;
    let fields = map(&inputs);
    assert_eq!(fields["Induction"], "1.13");
    assert_eq!(fields["ColonnesBT"], "1.13");
}

#[test]
fn every_table_key_present_in_a_record_yields_text() {
    let mut inputs = TransformerInputs::rated(400.0, 30_000.0, 410.0);
    inputs.client_name = Some("ACME".to_string());
    inputs.project_name = Some("P-17".to_string());
    inputs.transformer_type = Some(TransformerType::Respirant);
    inputs.installation_type = Some(InstallationType::Interieur);
    inputs.primary_coupling = Some(Coupling::D);
    inputs.core_material = Some(CoreMaterial::AcierElectrique);
    inputs.sheet_type = Some(SheetGrade::H85_23);
    inputs.cooling_type = Some(CoolingClass::Onaf);
    inputs.max_temperature_rise = Some(90.0);
    let results = compute_all(&inputs);
    let fields = FieldMapper::new()
        .map_to_fields_on(&inputs, &results, date())
        .unwrap();

    let records = [
        serde_json::to_value(&inputs).unwrap(),
        serde_json::to_value(&results.electrical).unwrap(),
        serde_json::to_value(&results.winding).unwrap(),
        serde_json::to_value(&results.geometry).unwrap(),
        serde_json::to_value(&results.thermal).unwrap(),
    ];

    let mut checked = 0;
    for (internal, report_name) in FIELD_TABLE {
        let present = records
            .iter()
            .any(|record| record.get(*internal).is_some());
        if !present {
            continue;
        }
        checked += 1;
        let value = fields
            .get(*report_name)
            .unwrap_or_else(|| panic!("{internal} -> {report_name} missing"));
        assert!(!value.is_empty(), "{internal} -> {report_name} is empty");
    }
    assert!(checked > 40, "only {checked} table keys were present");
}
