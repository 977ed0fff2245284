//! Calculation execution service.

use serde::Serialize;
use std::path::Path;
use std::time::Instant;
use tc_calc::{TransformerCalculator, TransformerResults};
use tc_project::TransformerInputs;
use tc_report::{FieldMapper, FieldMapping};
use tc_results::{CalculationRecord, compute_calculation_id};
use tracing::{debug, info, warn};

use crate::error::AppResult;
use crate::{history_service, input_service};

/// Version tag hashed into calculation ids.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Options for running a calculation.
#[derive(Debug, Clone)]
pub struct CalculationOptions {
    pub save_to_history: bool,
    pub engine_version: String,
}

impl Default for CalculationOptions {
    fn default() -> Self {
        Self {
            save_to_history: false,
            engine_version: ENGINE_VERSION.to_string(),
        }
    }
}

/// Request to run one calculation.
pub struct CalculationRequest<'a> {
    pub inputs: TransformerInputs,
    /// File the inputs came from; locates the default history directory.
    pub input_path: Option<&'a Path>,
    pub history_dir: Option<&'a Path>,
    pub options: CalculationOptions,
}

impl CalculationRequest<'_> {
    pub fn new(inputs: TransformerInputs) -> Self {
        Self {
            inputs,
            input_path: None,
            history_dir: None,
            options: CalculationOptions::default(),
        }
    }
}

/// Results and report fields of one calculation.
#[derive(Debug, Clone)]
pub struct CalculationResponse {
    pub calculation_id: String,
    pub results: TransformerResults,
    pub fields: FieldMapping,
    pub saved_to_history: bool,
    pub elapsed_s: f64,
}

/// Validate, compute every result section, map report fields and optionally
/// store the record in history.
pub fn run_calculation(request: CalculationRequest<'_>) -> AppResult<CalculationResponse> {
    let started = Instant::now();
    let CalculationRequest {
        inputs,
        input_path,
        history_dir,
        options,
    } = request;

    info!(
        power_kva = inputs.power_kva,
        primary_voltage = inputs.primary_voltage,
        secondary_voltage = inputs.secondary_voltage,
        "starting calculation"
    );

    let calculator = TransformerCalculator::new(inputs).map_err(|e| {
        warn!(error = %e, "rejected calculation inputs");
        e
    })?;
    let results = calculator.compute_all();

    let mapper = FieldMapper::new();
    let fields = mapper.map_to_fields(calculator.inputs(), &results)?;
    let unmapped = mapper.unmapped_input_fields(calculator.inputs())?;
    debug!(
        fields = fields.len(),
        unmapped = unmapped.len(),
        "mapped report fields"
    );

    let calculation_id = compute_calculation_id(calculator.inputs(), &options.engine_version);

    if options.save_to_history {
        let store = history_service::history_store(input_path, history_dir)?;
        let record = CalculationRecord::new(
            calculation_id.clone(),
            &options.engine_version,
            calculator.inputs().clone(),
            results.clone(),
        );
        store.save(&record)?;
        info!(id = %calculation_id, dir = %store.root_dir().display(), "saved calculation");
    }

    let elapsed_s = started.elapsed().as_secs_f64();
    info!(
        id = %calculation_id,
        efficiency_pct = results.efficiency_pct,
        bom_cost = results.bom_cost,
        elapsed_s,
        "calculation finished"
    );

    Ok(CalculationResponse {
        calculation_id,
        results,
        fields,
        saved_to_history: options.save_to_history,
        elapsed_s,
    })
}

/// Load inputs from a file and run them.
pub fn calculate_from_file(
    path: &Path,
    options: CalculationOptions,
) -> AppResult<CalculationResponse> {
    let inputs = input_service::load_inputs(path)?;
    run_calculation(CalculationRequest {
        inputs,
        input_path: Some(path),
        history_dir: None,
        options,
    })
}

/// Diagnostic listing of a mapping and of the fields it left out.
pub fn mapping_report(
    inputs: &TransformerInputs,
    results: &TransformerResults,
    fields: &FieldMapping,
) -> AppResult<String> {
    Ok(FieldMapper::new().mapping_report(fields, inputs, results)?)
}

/// Pretty JSON for results, mappings or history records.
pub fn to_json<T: Serialize>(value: &T) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
