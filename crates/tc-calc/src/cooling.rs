//! Cooling class suggestion.

use tc_project::{CoolingClass, TransformerInputs};

/// Class by rated power alone.
pub fn cooling_class_for_power(power_kva: f64) -> CoolingClass {
    if power_kva <= 100.0 {
        CoolingClass::An
    } else if power_kva <= 500.0 {
        CoolingClass::Onan
    } else if power_kva <= 1000.0 {
        CoolingClass::OnanPlus
    } else {
        CoolingClass::Onaf
    }
}

/// An explicit cooling type on the inputs always wins.
pub fn suggest_cooling_class(inputs: &TransformerInputs) -> CoolingClass {
    inputs
        .cooling_type
        .unwrap_or_else(|| cooling_class_for_power(inputs.power_kva))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_thresholds() {
        let cases = [
            (100.0, CoolingClass::An),
            (100.01, CoolingClass::Onan),
            (500.0, CoolingClass::Onan),
            (500.01, CoolingClass::OnanPlus),
            (1000.0, CoolingClass::OnanPlus),
            (1000.01, CoolingClass::Onaf),
        ];
        for (kva, expected) in cases {
            assert_eq!(cooling_class_for_power(kva), expected, "power {kva}");
        }
    }

    #[test]
    fn explicit_cooling_type_overrides() {
        let mut inputs = TransformerInputs::rated(2500.0, 20_000.0, 400.0);
        inputs.cooling_type = Some(CoolingClass::An);
        assert_eq!(suggest_cooling_class(&inputs), CoolingClass::An);
    }
}
