//! Line/phase quantities, voltage classes and losses.

use crate::constants::{CORE_LOSS_W_PER_KVA, PRIMARY_RESISTANCE_PROXY, SECONDARY_RESISTANCE_PROXY};
use crate::results::{ElectricalResults, VoltageClass};
use tc_core::units::{Current, Voltage, as_amperes, as_volts, kva, volts};
use tc_core::SQRT_3;
use tc_project::TransformerInputs;

/// Upper bound of the low-voltage band, V.
pub const LV_LIMIT_V: f64 = 1_000.0;
/// Upper bound of the medium-voltage band, V.
pub const MV_LIMIT_V: f64 = 35_000.0;

/// Three-phase line current, A: S / (U·√3).
pub fn line_current(power_kva: f64, line_voltage_v: f64) -> f64 {
    let current: Current = kva(power_kva) / (volts(line_voltage_v) * SQRT_3);
    as_amperes(current)
}

/// Star phase voltage, V.
pub fn phase_voltage(line_voltage_v: f64) -> f64 {
    let phase: Voltage = volts(line_voltage_v) / SQRT_3;
    as_volts(phase)
}

pub fn voltage_class(voltage_v: f64) -> VoltageClass {
    if voltage_v <= LV_LIMIT_V {
        VoltageClass::Bt
    } else if voltage_v <= MV_LIMIT_V {
        VoltageClass::Mt
    } else {
        VoltageClass::Ht
    }
}

pub fn line_current_primary(inputs: &TransformerInputs) -> f64 {
    line_current(inputs.power_kva, inputs.primary_voltage)
}

pub fn line_current_secondary(inputs: &TransformerInputs) -> f64 {
    line_current(inputs.power_kva, inputs.secondary_voltage)
}

/// Load losses, W, from a fixed-resistance I²R proxy.
pub fn copper_losses(inputs: &TransformerInputs) -> f64 {
    let i1 = line_current_primary(inputs);
    let i2 = line_current_secondary(inputs);
    i1.powi(2) * PRIMARY_RESISTANCE_PROXY + i2.powi(2) * SECONDARY_RESISTANCE_PROXY
}

/// No-load losses, W.
pub fn core_losses(inputs: &TransformerInputs) -> f64 {
    inputs.power_kva * CORE_LOSS_W_PER_KVA
}

pub fn compute(inputs: &TransformerInputs) -> ElectricalResults {
    let i1 = line_current_primary(inputs);
    let i2 = line_current_secondary(inputs);
    let highest = inputs.primary_voltage.max(inputs.secondary_voltage);

    ElectricalResults {
        line_voltage_primary: inputs.primary_voltage,
        line_voltage_secondary: inputs.secondary_voltage,
        phase_voltage_primary: phase_voltage(inputs.primary_voltage),
        phase_voltage_secondary: phase_voltage(inputs.secondary_voltage),
        line_current_primary: i1,
        line_current_secondary: i2,
        phase_current_primary: i1,
        phase_current_secondary: i2,
        voltage_class_primary: voltage_class(inputs.primary_voltage),
        voltage_class_secondary: voltage_class(inputs.secondary_voltage),
        voltage_class_highest: voltage_class(highest),
        copper_losses_w: copper_losses(inputs),
        core_losses_w: core_losses(inputs),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_current_matches_closed_form() {
        let i = line_current(100.0, 20_000.0);
        assert!((i - 100_000.0 / (20_000.0 * 3f64.sqrt())).abs() < 1e-9);
        assert!((i - 2.887).abs() < 1e-3);
    }

    #[test]
    fn phase_voltage_of_400v_line() {
        assert!((phase_voltage(400.0) - 230.94).abs() < 1e-2);
    }

    #[test]
    fn voltage_class_boundaries() {
        assert_eq!(voltage_class(1000.0), VoltageClass::Bt);
        assert_eq!(voltage_class(1000.01), VoltageClass::Mt);
        assert_eq!(voltage_class(35000.0), VoltageClass::Mt);
        assert_eq!(voltage_class(35000.01), VoltageClass::Ht);
    }

    #[test]
    fn highest_class_uses_larger_voltage() {
        let inputs = TransformerInputs::rated(630.0, 400.0, 63_000.0);
        let e = compute(&inputs);
        assert_eq!(e.voltage_class_primary, VoltageClass::Bt);
        assert_eq!(e.voltage_class_secondary, VoltageClass::Ht);
        assert_eq!(e.voltage_class_highest, VoltageClass::Ht);
    }

    #[test]
    fn phase_currents_equal_line_currents() {
        let e = compute(&TransformerInputs::rated(250.0, 15_000.0, 410.0));
        assert_eq!(e.phase_current_primary, e.line_current_primary);
        assert_eq!(e.phase_current_secondary, e.line_current_secondary);
    }
}
