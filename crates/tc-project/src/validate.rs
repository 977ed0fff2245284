//! Input validation logic.
//!
//! Runs before any calculation: the engine is only ever built from inputs
//! that passed here, so it never sees a zero divisor.

use crate::schema::{MAX_HOURLY_INDEX, TEMPERATURE_RISE_CHOICES, TransformerInputs};
use tc_core::{ensure_finite, ensure_positive};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Missing required parameters: {}", fields.join(", "))]
    MissingFields { fields: Vec<String> },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl ValidationError {
    pub(crate) fn invalid(field: &str, value: impl ToString, reason: &str) -> Self {
        ValidationError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Required electrical ratings, in the order they are reported.
pub const REQUIRED_RATINGS: [&str; 3] = ["power_kva", "primary_voltage", "secondary_voltage"];

/// Check the raw document before typed decoding: a required rating that is
/// present but not a number is a validation failure, not a parse failure.
/// Null ratings count as missing.
pub fn check_rating_types(document: &serde_json::Value) -> Result<(), ValidationError> {
    let mut missing = Vec::new();
    for name in REQUIRED_RATINGS {
        match document.get(name) {
            None | Some(serde_json::Value::Number(_)) => {}
            Some(serde_json::Value::Null) => missing.push(name.to_string()),
            Some(other) => return Err(ValidationError::invalid(name, other, "must be a number")),
        }
    }
    if !missing.is_empty() {
        return Err(ValidationError::MissingFields { fields: missing });
    }
    Ok(())
}

pub fn validate_inputs(inputs: &TransformerInputs) -> Result<(), ValidationError> {
    let required = [
        ("power_kva", inputs.power_kva),
        ("primary_voltage", inputs.primary_voltage),
        ("secondary_voltage", inputs.secondary_voltage),
    ];

    let missing: Vec<String> = required
        .iter()
        .filter(|(_, v)| *v == 0.0)
        .map(|(name, _)| name.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(ValidationError::MissingFields { fields: missing });
    }

    for (name, value) in required {
        check_positive(name, value)?;
    }
    check_positive("frequency_hz", inputs.frequency_hz)?;
    check_positive("b_max", inputs.b_max)?;

    let geometry = [
        ("insulation_thickness_mm", inputs.insulation_thickness_mm),
        ("winding_height_mm", inputs.winding_height_mm),
        ("paper_thickness_mm", inputs.paper_thickness_mm),
        ("lv_insulation_mm", inputs.lv_insulation_mm),
        ("lv_channel_width_mm", inputs.lv_channel_width_mm),
        ("lv_circuit_distance_mm", inputs.lv_circuit_distance_mm),
    ];
    for (name, value) in geometry {
        check_non_negative(name, value)?;
    }

    if let Some(index) = inputs.hourly_index {
        if index > MAX_HOURLY_INDEX {
            return Err(ValidationError::invalid(
                "hourly_index",
                index,
                "clock-hour index must be between 0 and 11",
            ));
        }
    }

    if let Some(rise) = inputs.max_temperature_rise {
        if !TEMPERATURE_RISE_CHOICES.contains(&rise) {
            return Err(ValidationError::invalid(
                "max_temperature_rise",
                rise,
                "must be one of 100, 90, 70, 50",
            ));
        }
    }

    Ok(())
}

fn check_positive(name: &'static str, value: f64) -> Result<(), ValidationError> {
    ensure_positive(value, name)
        .map(|_| ())
        .map_err(|_| ValidationError::invalid(name, value, "must be a finite number greater than zero"))
}

fn check_non_negative(name: &'static str, value: f64) -> Result<(), ValidationError> {
    match ensure_finite(value, name) {
        Ok(v) if v >= 0.0 => Ok(()),
        _ => Err(ValidationError::invalid(
            name,
            value,
            "must be a non-negative number",
        )),
    }
}
