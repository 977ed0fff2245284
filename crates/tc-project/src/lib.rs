//! tc-project: transformer input file format and validation.

pub mod schema;
pub mod validate;

pub use schema::*;
pub use validate::{REQUIRED_RATINGS, ValidationError, check_rating_types, validate_inputs};

use std::path::Path;

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unsupported input format: {extension}")]
    UnsupportedFormat { extension: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Serialization format of an input file, chosen from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Yaml,
    Json,
}

impl InputFormat {
    pub fn from_path(path: &Path) -> ProjectResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        match ext.as_str() {
            "yaml" | "yml" => Ok(InputFormat::Yaml),
            "json" => Ok(InputFormat::Json),
            _ => Err(ProjectError::UnsupportedFormat { extension: ext }),
        }
    }
}

pub fn load_yaml(path: &Path) -> ProjectResult<TransformerInputs> {
    let content = std::fs::read_to_string(path)?;
    let document: serde_json::Value = serde_yaml::from_str(&content)?;
    check_rating_types(&document)?;
    let inputs: TransformerInputs = serde_yaml::from_str(&content)?;
    validate_inputs(&inputs)?;
    Ok(inputs)
}

pub fn save_yaml(path: &Path, inputs: &TransformerInputs) -> ProjectResult<()> {
    validate_inputs(inputs)?;
    let content = serde_yaml::to_string(inputs)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> ProjectResult<TransformerInputs> {
    let content = std::fs::read_to_string(path)?;
    let document: serde_json::Value = serde_json::from_str(&content)?;
    check_rating_types(&document)?;
    let inputs: TransformerInputs = serde_json::from_value(document)?;
    validate_inputs(&inputs)?;
    Ok(inputs)
}

pub fn save_json(path: &Path, inputs: &TransformerInputs) -> ProjectResult<()> {
    validate_inputs(inputs)?;
    let content = serde_json::to_string_pretty(inputs)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load and validate an input file, YAML or JSON by extension.
pub fn load_inputs(path: &Path) -> ProjectResult<TransformerInputs> {
    match InputFormat::from_path(path)? {
        InputFormat::Yaml => load_yaml(path),
        InputFormat::Json => load_json(path),
    }
}

/// Validate and write an input file, YAML or JSON by extension.
pub fn save_inputs(path: &Path, inputs: &TransformerInputs) -> ProjectResult<()> {
    match InputFormat::from_path(path)? {
        InputFormat::Yaml => save_yaml(path, inputs),
        InputFormat::Json => save_json(path, inputs),
    }
}
