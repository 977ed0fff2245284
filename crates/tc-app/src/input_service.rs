//! Input file loading, saving and validation.

use std::path::Path;
use tc_project::TransformerInputs;

use crate::error::{AppError, AppResult};

/// Headline ratings of an input snapshot, for listings and logs.
#[derive(Debug, Clone, PartialEq)]
pub struct InputSummary {
    pub client_name: Option<String>,
    pub project_name: Option<String>,
    pub power_kva: f64,
    pub primary_voltage: f64,
    pub secondary_voltage: f64,
}

/// Load and validate inputs from a YAML or JSON file.
pub fn load_inputs(path: &Path) -> AppResult<TransformerInputs> {
    if !path.exists() {
        return Err(AppError::InputFileNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(tc_project::load_inputs(path)?)
}

/// Validate and write inputs; the format follows the file extension.
pub fn save_inputs(path: &Path, inputs: &TransformerInputs) -> AppResult<()> {
    tc_project::save_inputs(path, inputs)?;
    Ok(())
}

pub fn validate_inputs(inputs: &TransformerInputs) -> AppResult<()> {
    tc_project::validate_inputs(inputs)?;
    Ok(())
}

pub fn summarize(inputs: &TransformerInputs) -> InputSummary {
    InputSummary {
        client_name: inputs.client_name.clone(),
        project_name: inputs.project_name.clone(),
        power_kva: inputs.power_kva,
        primary_voltage: inputs.primary_voltage,
        secondary_voltage: inputs.secondary_voltage,
    }
}
