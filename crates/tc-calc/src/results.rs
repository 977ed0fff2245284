//! Result data types.
//!
//! The serialized field names are the internal names the report field table
//! is keyed by, so they are part of the mapping contract.

use serde::{Deserialize, Serialize};
use std::fmt;
use tc_project::CoolingClass;

/// Voltage band of a winding or of the whole unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VoltageClass {
    /// Low voltage, up to 1 kV.
    #[serde(rename = "BT")]
    Bt,
    /// Medium voltage, up to 35 kV.
    #[serde(rename = "MT")]
    Mt,
    /// High voltage.
    #[serde(rename = "HT")]
    Ht,
}

impl VoltageClass {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bt => "BT",
            Self::Mt => "MT",
            Self::Ht => "HT",
        }
    }
}

/// Insulation thermal class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThermalClass {
    A,
    E,
    B,
    F,
    H,
}

impl ThermalClass {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::E => "E",
            Self::B => "B",
            Self::F => "F",
            Self::H => "H",
        }
    }
}

/// Energy efficiency band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EfficiencyClass {
    #[serde(rename = "A+")]
    APlus,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "B")]
    B,
}

impl EfficiencyClass {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::B => "B",
        }
    }

    /// Label as printed on datasheets.
    pub fn label(self) -> &'static str {
        match self {
            Self::APlus => "Classe A+",
            Self::A => "Classe A",
            Self::B => "Classe B",
        }
    }
}

impl fmt::Display for VoltageClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ThermalClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for EfficiencyClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElectricalResults {
    #[serde(rename = "tensionLignePrim")]
    pub line_voltage_primary: f64,
    #[serde(rename = "tensionLigneSec")]
    pub line_voltage_secondary: f64,
    #[serde(rename = "tensionPhasePrim")]
    pub phase_voltage_primary: f64,
    #[serde(rename = "tensionPhaseSec")]
    pub phase_voltage_secondary: f64,
    #[serde(rename = "CourantLignePrim")]
    pub line_current_primary: f64,
    #[serde(rename = "CourantLigneSec")]
    pub line_current_secondary: f64,
    #[serde(rename = "CourantPhasePrim")]
    pub phase_current_primary: f64,
    #[serde(rename = "CourantPhaseSec")]
    pub phase_current_secondary: f64,
    #[serde(rename = "ClasseTensionPrim")]
    pub voltage_class_primary: VoltageClass,
    #[serde(rename = "ClasseTensionSec")]
    pub voltage_class_secondary: VoltageClass,
    /// Class of the higher of the two rated voltages.
    #[serde(rename = "ClasseTensionlast")]
    pub voltage_class_highest: VoltageClass,
    #[serde(rename = "copper_losses")]
    pub copper_losses_w: f64,
    #[serde(rename = "core_losses")]
    pub core_losses_w: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindingResults {
    #[serde(rename = "spiresVsp")]
    pub volts_per_turn: f64,
    #[serde(rename = "N1")]
    pub primary_turns: u32,
    #[serde(rename = "N2")]
    pub secondary_turns: u32,
    #[serde(rename = "BobSectionduConducteurprim1")]
    pub primary_section_mm2: f64,
    #[serde(rename = "BobSectionduConducteurSec")]
    pub secondary_section_mm2: f64,
    #[serde(rename = "DensiteCourantPrim")]
    pub primary_current_density: f64,
    #[serde(rename = "DensiteCourantSec")]
    pub secondary_current_density: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThermalResults {
    #[serde(rename = "total_losses")]
    pub total_losses_w: f64,
    /// Hot-spot estimate, °C, rounded.
    #[serde(rename = "max_temperature")]
    pub max_temperature_c: i32,
    pub thermal_class: ThermalClass,
    /// Rise over a 40 °C ambient, K, rounded.
    pub temperature_rise: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MechanicalResults {
    pub total_weight_kg: f64,
    /// "{length}x{width}x{height}" in mm.
    pub dimensions_mm: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryResults {
    pub core_weight_kg: f64,
    #[serde(rename = "ColonnesSnette")]
    pub limb_section: f64,
    #[serde(rename = "ColonnesBT")]
    pub limb_induction: f64,
    #[serde(rename = "ColonnesMasse")]
    pub limb_mass: f64,
    #[serde(rename = "4emeColonneSnette")]
    pub fourth_limb_section: f64,
    #[serde(rename = "4emeColonneMasse")]
    pub fourth_limb_mass: f64,
    #[serde(rename = "CulasseSnette")]
    pub yoke_section: f64,
    #[serde(rename = "CulasseBT")]
    pub yoke_induction: f64,
    #[serde(rename = "CulasseMasse")]
    pub yoke_mass: f64,
    #[serde(rename = "EPCM")]
    pub sheet_thickness_mm: f64,
    #[serde(rename = "MasseCulplusCol")]
    pub yoke_and_limb_mass: f64,
    #[serde(rename = "MasseTotale")]
    pub total_mass: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Co2Results {
    pub carbon_footprint_kg: f64,
    pub recyclability_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InnovationResults {
    pub efficiency_class: EfficiencyClass,
    pub innovation_score: f64,
}

/// One bill-of-materials row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BomLine {
    pub component: String,
    pub quantity: u32,
    pub unit_cost: f64,
    pub total_cost: f64,
}

/// Every section computed from one input snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformerResults {
    pub copper_mass_kg: f64,
    pub efficiency_pct: f64,
    pub lifetime_cost_eur: f64,
    pub electrical: ElectricalResults,
    pub winding: WindingResults,
    pub thermal: ThermalResults,
    pub mechanical: MechanicalResults,
    pub geometry: GeometryResults,
    pub co2: Co2Results,
    pub innovation: InnovationResults,
    pub bom: Vec<BomLine>,
    pub bom_cost: f64,
    pub suggested_cooling_class: CoolingClass,
}
