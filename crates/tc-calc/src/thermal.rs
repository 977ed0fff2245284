//! Losses balance and temperature estimate.

use crate::constants::{AMBIENT_TEMPERATURE_C, BASE_TEMPERATURE_C, LOSS_TEMPERATURE_COEFF};
use crate::electrical::{copper_losses, core_losses};
use crate::results::{ThermalClass, ThermalResults};
use tc_project::TransformerInputs;

pub fn total_losses(inputs: &TransformerInputs) -> f64 {
    copper_losses(inputs) + core_losses(inputs)
}

/// Unrounded hot-spot estimate, °C.
pub fn max_temperature(inputs: &TransformerInputs) -> f64 {
    BASE_TEMPERATURE_C + (total_losses(inputs) / inputs.power_kva) * LOSS_TEMPERATURE_COEFF
}

pub fn temperature_rise(inputs: &TransformerInputs) -> i32 {
    (max_temperature(inputs) - AMBIENT_TEMPERATURE_C).round() as i32
}

pub fn thermal_class(temperature_c: f64) -> ThermalClass {
    if temperature_c <= 105.0 {
        ThermalClass::A
    } else if temperature_c <= 120.0 {
        ThermalClass::E
    } else if temperature_c <= 130.0 {
        ThermalClass::B
    } else if temperature_c <= 155.0 {
        ThermalClass::F
    } else {
        ThermalClass::H
    }
}

pub fn compute(inputs: &TransformerInputs) -> ThermalResults {
    let temperature = max_temperature(inputs);
    ThermalResults {
        total_losses_w: total_losses(inputs),
        max_temperature_c: temperature.round() as i32,
        // classified on the unrounded value
        thermal_class: thermal_class(temperature),
        temperature_rise: temperature_rise(inputs),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thermal_class_boundaries() {
        assert_eq!(thermal_class(105.0), ThermalClass::A);
        assert_eq!(thermal_class(105.1), ThermalClass::E);
        assert_eq!(thermal_class(120.0), ThermalClass::E);
        assert_eq!(thermal_class(130.0), ThermalClass::B);
        assert_eq!(thermal_class(155.0), ThermalClass::F);
        assert_eq!(thermal_class(155.5), ThermalClass::H);
    }

    #[test]
    fn rise_is_over_forty_degree_ambient() {
        let inputs = TransformerInputs::rated(100.0, 20_000.0, 400.0);
        let t = compute(&inputs);
        assert_eq!(t.temperature_rise, t.max_temperature_c - 40);
    }

    #[test]
    fn heavily_loaded_low_voltage_unit_runs_hot() {
        // 2 MVA on a 230 V secondary: ~5 kA, copper proxy dominates
        let inputs = TransformerInputs::rated(2000.0, 20_000.0, 230.0);
        let t = compute(&inputs);
        assert!(t.max_temperature_c > 155);
        assert_eq!(t.thermal_class, ThermalClass::H);
    }
}
