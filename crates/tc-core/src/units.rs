// tc-core/src/units.rs

use uom::si::f64::{
    Area as UomArea, ElectricCurrent as UomElectricCurrent,
    ElectricPotential as UomElectricPotential, Frequency as UomFrequency,
    MagneticFluxDensity as UomMagneticFluxDensity, Power as UomPower,
};

// Public canonical unit types (SI, f64)
pub type Current = UomElectricCurrent;
pub type Voltage = UomElectricPotential;
pub type Frequency = UomFrequency;
pub type FluxDensity = UomMagneticFluxDensity;
pub type Area = UomArea;
/// Apparent power. uom has no volt-ampere dimension of its own, so kVA is
/// carried on the kilowatt scale.
pub type Power = UomPower;

#[inline]
pub fn kva(v: f64) -> Power {
    use uom::si::power::kilowatt;
    Power::new::<kilowatt>(v)
}

#[inline]
pub fn volts(v: f64) -> Voltage {
    use uom::si::electric_potential::volt;
    Voltage::new::<volt>(v)
}

#[inline]
pub fn hz(v: f64) -> Frequency {
    use uom::si::frequency::hertz;
    Frequency::new::<hertz>(v)
}

#[inline]
pub fn tesla(v: f64) -> FluxDensity {
    use uom::si::magnetic_flux_density::tesla;
    FluxDensity::new::<tesla>(v)
}

#[inline]
pub fn square_meters(v: f64) -> Area {
    use uom::si::area::square_meter;
    Area::new::<square_meter>(v)
}

#[inline]
pub fn as_amperes(i: Current) -> f64 {
    use uom::si::electric_current::ampere;
    i.get::<ampere>()
}

#[inline]
pub fn as_volts(u: Voltage) -> f64 {
    use uom::si::electric_potential::volt;
    u.get::<volt>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let _s = kva(100.0);
        let _u = volts(20_000.0);
        let _f = hz(50.0);
        let _b = tesla(1.5);
        let _a = square_meters(1e-4);
    }

    #[test]
    fn power_over_voltage_is_current() {
        let i: Current = kva(100.0) / volts(400.0);
        assert!((as_amperes(i) - 250.0).abs() < 1e-9);
    }

    #[test]
    fn flux_times_area_times_frequency_is_voltage() {
        let u: Voltage = hz(50.0) * tesla(1.5) * square_meters(0.01);
        assert!((as_volts(u) - 0.75).abs() < 1e-12);
    }
}
