//! Carbon footprint, efficiency and innovation rating.

use crate::constants::{CO2_KG_PER_KVA, RATED_LOSS_W_PER_KVA, RECYCLABILITY_PCT};
use crate::results::{Co2Results, EfficiencyClass, InnovationResults};
use tc_core::{round1, round2};
use tc_project::TransformerInputs;

/// Efficiency, %, rounded to 2 decimals.
///
/// Losses are a fixed fraction of rated power, so the figure does not depend
/// on the rating.
pub fn efficiency(inputs: &TransformerInputs) -> f64 {
    let losses = inputs.power_kva * RATED_LOSS_W_PER_KVA;
    round2((1.0 - losses / (inputs.power_kva * 1000.0)) * 100.0)
}

pub fn efficiency_class(efficiency_pct: f64) -> EfficiencyClass {
    if efficiency_pct > 97.0 {
        EfficiencyClass::APlus
    } else if efficiency_pct > 95.0 {
        EfficiencyClass::A
    } else {
        EfficiencyClass::B
    }
}

/// Points above a 90 % baseline, 1 decimal.
pub fn innovation_score(efficiency_pct: f64) -> f64 {
    round1(efficiency_pct - 90.0)
}

pub fn carbon_footprint(inputs: &TransformerInputs) -> f64 {
    round1(inputs.power_kva * CO2_KG_PER_KVA)
}

pub fn co2(inputs: &TransformerInputs) -> Co2Results {
    Co2Results {
        carbon_footprint_kg: carbon_footprint(inputs),
        recyclability_pct: RECYCLABILITY_PCT,
    }
}

pub fn innovation(inputs: &TransformerInputs) -> InnovationResults {
    let eff = efficiency(inputs);
    InnovationResults {
        efficiency_class: efficiency_class(eff),
        innovation_score: innovation_score(eff),
    }
}
