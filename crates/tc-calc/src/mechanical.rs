//! Overall weight and envelope.

use crate::constants::{TOTAL_WEIGHT_BASE_KG, TOTAL_WEIGHT_KG_PER_KVA};
use crate::results::MechanicalResults;
use tc_project::TransformerInputs;

/// Unrounded total weight, kg.
pub fn total_weight(inputs: &TransformerInputs) -> f64 {
    inputs.power_kva * TOTAL_WEIGHT_KG_PER_KVA + TOTAL_WEIGHT_BASE_KG
}

/// Bounding box as "{length}x{width}x{height}", mm.
pub fn dimensions(power_kva: f64) -> String {
    let length = (300.0 + power_kva * 0.8).round();
    let width = (250.0 + power_kva * 0.6).round();
    let height = (400.0 + power_kva * 0.5).round();
    format!("{length}x{width}x{height}")
}

pub fn compute(inputs: &TransformerInputs) -> MechanicalResults {
    MechanicalResults {
        total_weight_kg: total_weight(inputs).round(),
        dimensions_mm: dimensions(inputs.power_kva),
    }
}
