//! Turn counts, conductor sections and current densities.

use crate::constants::{CORE_SECTION_SCALE, CURRENT_DENSITY_AL, CURRENT_DENSITY_CU, EMF_FACTOR};
use crate::electrical::{line_current, line_current_primary, line_current_secondary};
use crate::results::WindingResults;
use tc_core::units::{Voltage, as_volts, hz, square_meters, tesla};
use tc_core::{SQRT_3, round_count, round2};
use tc_project::{TransformerInputs, WindingMaterial};

/// Design current density for the winding material, A/mm².
pub fn design_current_density(material: WindingMaterial) -> f64 {
    match material {
        WindingMaterial::Cuivre => CURRENT_DENSITY_CU,
        WindingMaterial::Aluminium => CURRENT_DENSITY_AL,
    }
}

/// Primary voltage over the per-turn EMF 4.44·f·B·A·√3.
pub fn volts_per_turn(inputs: &TransformerInputs) -> f64 {
    let emf: Voltage = hz(inputs.frequency_hz)
        * tesla(inputs.b_max)
        * square_meters(CORE_SECTION_SCALE)
        * (EMF_FACTOR * SQRT_3);
    inputs.primary_voltage / as_volts(emf)
}

pub fn primary_turns(inputs: &TransformerInputs) -> u32 {
    round_count(inputs.primary_voltage / volts_per_turn(inputs))
}

/// Secondary turns from the rounded primary count and the voltage ratio.
pub fn secondary_turns(inputs: &TransformerInputs) -> u32 {
    round_count(f64::from(primary_turns(inputs)) / inputs.voltage_ratio())
}

/// Conductor cross-section, mm², rounded to 2 decimals.
pub fn conductor_section(power_kva: f64, line_voltage_v: f64, material: WindingMaterial) -> f64 {
    round2(line_current(power_kva, line_voltage_v) / design_current_density(material))
}

pub fn primary_section(inputs: &TransformerInputs) -> f64 {
    conductor_section(
        inputs.power_kva,
        inputs.primary_voltage,
        inputs.winding_material,
    )
}

pub fn secondary_section(inputs: &TransformerInputs) -> f64 {
    conductor_section(
        inputs.power_kva,
        inputs.secondary_voltage,
        inputs.winding_material,
    )
}

/// Actual density in the rounded section. A section that rounds to zero
/// reports the design density instead of dividing by zero.
fn actual_density(current: f64, section: f64, material: WindingMaterial) -> f64 {
    if section > 0.0 {
        current / section
    } else {
        design_current_density(material)
    }
}

pub fn primary_current_density(inputs: &TransformerInputs) -> f64 {
    actual_density(
        line_current_primary(inputs),
        primary_section(inputs),
        inputs.winding_material,
    )
}

pub fn secondary_current_density(inputs: &TransformerInputs) -> f64 {
    actual_density(
        line_current_secondary(inputs),
        secondary_section(inputs),
        inputs.winding_material,
    )
}

pub fn compute(inputs: &TransformerInputs) -> WindingResults {
    WindingResults {
        volts_per_turn: volts_per_turn(inputs),
        primary_turns: primary_turns(inputs),
        secondary_turns: secondary_turns(inputs),
        primary_section_mm2: primary_section(inputs),
        secondary_section_mm2: secondary_section(inputs),
        primary_current_density: primary_current_density(inputs),
        secondary_current_density: secondary_current_density(inputs),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copper_section_uses_3_5_a_per_mm2() {
        // 400 V side of a 100 kVA unit: 144.34 A / 3.5
        let s = conductor_section(100.0, 400.0, WindingMaterial::Cuivre);
        assert_eq!(s, 41.24);
    }

    #[test]
    fn aluminium_section_uses_2_5_a_per_mm2() {
        let s = conductor_section(100.0, 400.0, WindingMaterial::Aluminium);
        assert_eq!(s, 57.74);
    }

    #[test]
    fn density_is_close_to_design_value() {
        let inputs = TransformerInputs::rated(400.0, 20_000.0, 400.0);
        let d = secondary_current_density(&inputs);
        assert!((d - CURRENT_DENSITY_CU).abs() < 0.01);
    }

    #[test]
    fn zero_section_falls_back_to_design_density() {
        // 1 VA at 35 kV rounds to a 0.00 mm² section
        let inputs = TransformerInputs::rated(0.001, 35_000.0, 400.0);
        assert_eq!(primary_section(&inputs), 0.0);
        assert_eq!(primary_current_density(&inputs), CURRENT_DENSITY_CU);
    }

    #[test]
    fn volts_per_turn_closed_form() {
        let inputs = TransformerInputs::rated(100.0, 20_000.0, 400.0);
        let expected = 20_000.0 / (4.44 * 50.0 * 1.5 * 1e-4 * 3f64.sqrt());
        assert!((volts_per_turn(&inputs) - expected).abs() < 1e-6);
    }

    #[test]
    fn turn_counts_follow_voltage_ratio() {
        // N1 = round(4.44 f B 1e-4 √3) is independent of the voltage
        let mut inputs = TransformerInputs::rated(100.0, 20_000.0, 400.0);
        inputs.frequency_hz = 60.0;
        inputs.b_max = 100.0;
        let n1 = primary_turns(&inputs);
        assert_eq!(n1, (4.44f64 * 60.0 * 100.0 * 1e-4 * 3f64.sqrt()).round() as u32);
        assert_eq!(
            secondary_turns(&inputs),
            (f64::from(n1) / 50.0).round() as u32
        );
    }
}
