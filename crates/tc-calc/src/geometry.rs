//! Magnetic core breakdown: limb and yoke sections, inductions and masses.

use crate::constants::*;
use crate::results::GeometryResults;
use tc_core::round1;
use tc_project::TransformerInputs;

/// Unrounded core (iron) weight, kg.
pub fn core_weight(inputs: &TransformerInputs) -> f64 {
    inputs.power_kva * CORE_WEIGHT_KG_PER_KVA
}

/// Net limb section proxy.
pub fn core_section(inputs: &TransformerInputs) -> f64 {
    inputs.power_kva * CORE_SECTION_PER_KVA
}

pub fn compute(inputs: &TransformerInputs) -> GeometryResults {
    let weight = core_weight(inputs);
    let section = core_section(inputs);

    GeometryResults {
        core_weight_kg: round1(weight),
        limb_section: section,
        limb_induction: inputs.b_max,
        limb_mass: weight * LIMB_MASS_SHARE,
        fourth_limb_section: section * FOURTH_LIMB_SECTION_SHARE,
        fourth_limb_mass: weight * FOURTH_LIMB_MASS_SHARE,
        yoke_section: section * YOKE_SECTION_SHARE,
        yoke_induction: inputs.b_max * YOKE_INDUCTION_SHARE,
        yoke_mass: weight * YOKE_MASS_SHARE,
        sheet_thickness_mm: SHEET_THICKNESS_MM,
        yoke_and_limb_mass: weight,
        total_mass: weight,
    }
}
