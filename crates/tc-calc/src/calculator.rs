//! Calculation entry point over one input snapshot.

use crate::error::CalcResult;
use crate::results::*;
use crate::{bom, cooling, electrical, environment, geometry, mechanical, thermal, winding};
use tc_core::round1;
use tc_project::{CoolingClass, TransformerInputs, validate_inputs};

use crate::constants::COPPER_MASS_KG_PER_KVA;

/// Holds one validated input snapshot and computes every result section
/// from it.
///
/// Each accessor is a pure function of the snapshot; `compute_all` is the
/// only entry point callers need, the others exist for inspection and tests.
#[derive(Debug, Clone)]
pub struct TransformerCalculator {
    inputs: TransformerInputs,
}

impl TransformerCalculator {
    /// Validate `inputs` and take ownership of the snapshot.
    pub fn new(inputs: TransformerInputs) -> CalcResult<Self> {
        validate_inputs(&inputs)?;
        Ok(Self { inputs })
    }

    pub fn inputs(&self) -> &TransformerInputs {
        &self.inputs
    }

    pub fn compute_all(&self) -> TransformerResults {
        compute_all(&self.inputs)
    }

    pub fn electrical(&self) -> ElectricalResults {
        electrical::compute(&self.inputs)
    }

    pub fn winding(&self) -> WindingResults {
        winding::compute(&self.inputs)
    }

    pub fn thermal(&self) -> ThermalResults {
        thermal::compute(&self.inputs)
    }

    pub fn mechanical(&self) -> MechanicalResults {
        mechanical::compute(&self.inputs)
    }

    pub fn geometry(&self) -> GeometryResults {
        geometry::compute(&self.inputs)
    }

    pub fn co2(&self) -> Co2Results {
        environment::co2(&self.inputs)
    }

    pub fn innovation(&self) -> InnovationResults {
        environment::innovation(&self.inputs)
    }

    pub fn bill_of_materials(&self) -> Vec<BomLine> {
        bom::bill_of_materials(&self.inputs)
    }

    pub fn line_current_primary(&self) -> f64 {
        electrical::line_current_primary(&self.inputs)
    }

    pub fn line_current_secondary(&self) -> f64 {
        electrical::line_current_secondary(&self.inputs)
    }

    pub fn copper_losses(&self) -> f64 {
        electrical::copper_losses(&self.inputs)
    }

    pub fn core_losses(&self) -> f64 {
        electrical::core_losses(&self.inputs)
    }

    pub fn total_losses(&self) -> f64 {
        thermal::total_losses(&self.inputs)
    }

    pub fn volts_per_turn(&self) -> f64 {
        winding::volts_per_turn(&self.inputs)
    }

    pub fn copper_mass(&self) -> f64 {
        copper_mass(&self.inputs)
    }

    pub fn efficiency(&self) -> f64 {
        environment::efficiency(&self.inputs)
    }

    pub fn suggested_cooling_class(&self) -> CoolingClass {
        cooling::suggest_cooling_class(&self.inputs)
    }
}

/// Conductor mass, kg, 1 decimal.
pub fn copper_mass(inputs: &TransformerInputs) -> f64 {
    round1(inputs.power_kva * COPPER_MASS_KG_PER_KVA)
}

/// Compute every section from `inputs`.
///
/// Assumes `inputs` passed [`validate_inputs`]; use
/// [`TransformerCalculator::new`] when that is not already guaranteed.
pub fn compute_all(inputs: &TransformerInputs) -> TransformerResults {
    let bom = bom::bill_of_materials(inputs);
    let bom_cost = bom::bom_cost(&bom);

    TransformerResults {
        copper_mass_kg: copper_mass(inputs),
        efficiency_pct: environment::efficiency(inputs),
        lifetime_cost_eur: bom::lifetime_cost(inputs, bom_cost),
        electrical: electrical::compute(inputs),
        winding: winding::compute(inputs),
        thermal: thermal::compute(inputs),
        mechanical: mechanical::compute(inputs),
        geometry: geometry::compute(inputs),
        co2: environment::co2(inputs),
        innovation: environment::innovation(inputs),
        bom,
        bom_cost,
        suggested_cooling_class: cooling::suggest_cooling_class(inputs),
    }
}
