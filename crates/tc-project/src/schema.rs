//! Input schema definitions.
//!
//! Field names are the wire names used by the input form and by input files;
//! the report field table in `tc-report` is keyed by the same names.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Defines a closed vocabulary of select-box values.
///
/// Each variant carries its wire code (what the form submits and what input
/// files contain) and a display label used in composed report text.
macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => $code:literal, $label:literal;)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $code)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Wire code as submitted by the form.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $code,)+
                }
            }

            /// Human-readable label.
            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownCode;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($code => Ok($name::$variant),)+
                    _ => Err(UnknownCode {
                        vocabulary: stringify!($name),
                        code: s.to_string(),
                    }),
                }
            }
        }
    };
}

/// A string that is not part of a vocabulary.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("unknown {vocabulary} code '{code}'")]
pub struct UnknownCode {
    pub vocabulary: &'static str,
    pub code: String,
}

vocabulary! {
    /// Tank construction.
    TransformerType {
        Hermetique => "hermetique", "Hermétique";
        Respirant => "respirant", "Respirant";
        H59 => "H59", "H59";
        H61 => "H61", "H61";
    }
}

vocabulary! {
    InstallationType {
        Exterieur => "exterieur", "Extérieur";
        Poteau => "poteau", "Poteau";
        Interieur => "interieur", "Intérieur";
    }
}

vocabulary! {
    /// Conductor shape of the LV winding.
    ConductorKind {
        Bande => "bande", "Bande";
        Meplat => "meplat", "Méplat";
    }
}

vocabulary! {
    PhaseConfiguration {
        Triphase => "triphase", "Triphasé";
        Monophase => "monophase", "Monophasé";
    }
}

vocabulary! {
    WindingMaterial {
        Cuivre => "cuivre", "Cuivre";
        Aluminium => "aluminium", "Aluminium";
    }
}

vocabulary! {
    /// Winding connection symbol.
    Coupling {
        D => "D", "D";
        YN => "YN", "YN";
        Y => "Y", "Y";
        ZN => "ZN", "ZN";
        Z => "Z", "Z";
    }
}

vocabulary! {
    CoreMaterial {
        AcierElectrique => "acier_electrique", "Acier électrique";
        AcierHib => "acier_hib", "Acier HiB";
    }
}

vocabulary! {
    /// Grain-oriented electrical steel grade.
    SheetGrade {
        M110_23 => "M110-23", "M110-23";
        M120_27 => "M120-27", "M120-27";
        M130_30 => "M130-30", "M130-30";
        H75_23 => "H75-23", "H75-23";
        H85_23 => "H85-23", "H85-23";
        H80_23 => "H80-23", "H80-23";
        H95_27 => "H95-27", "H95-27";
        H105_30 => "H105-30", "H105-30";
    }
}

vocabulary! {
    MagneticCircuit {
        ThreeLimb => "3colonnes", "3 colonnes";
        FourLimb => "4colonnes", "4 colonnes";
    }
}

vocabulary! {
    CoolingClass {
        An => "AN", "AN";
        Onan => "ONAN", "ONAN";
        OnanPlus => "ONAN+", "ONAN+";
        Onaf => "ONAF", "ONAF";
    }
}

impl Default for WindingMaterial {
    fn default() -> Self {
        WindingMaterial::Cuivre
    }
}

/// Admissible temperature rise choices offered by the form (K).
pub const TEMPERATURE_RISE_CHOICES: [f64; 4] = [100.0, 90.0, 70.0, 50.0];

/// Largest clock-hour index of a vector group.
pub const MAX_HOURLY_INDEX: u8 = 11;

fn default_frequency_hz() -> f64 {
    50.0
}

fn default_b_max() -> f64 {
    1.5
}

/// One calculation request's worth of user-supplied parameters.
///
/// `power_kva`, `primary_voltage` and `secondary_voltage` default to 0 when
/// absent; validation reports a zero value as a missing field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransformerInputs {
    // General information
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transformer_type: Option<TransformerType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installation_type: Option<InstallationType>,

    // Winding geometry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conductor_kind: Option<ConductorKind>,
    #[serde(default)]
    pub insulation_thickness_mm: f64,
    #[serde(default)]
    pub winding_height_mm: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conductor: Option<String>,
    #[serde(default)]
    pub stages: u32,
    #[serde(default)]
    pub lv_layers: u32,
    #[serde(default)]
    pub lv_turns_per_layer: u32,
    #[serde(default)]
    pub paper_thickness_mm: f64,
    #[serde(default)]
    pub paper_count: u32,
    #[serde(default)]
    pub lv_insulation_mm: f64,
    #[serde(default)]
    pub lv_channel_count: u32,
    #[serde(default)]
    pub lv_channel_width_mm: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lead_exit: Option<String>,
    #[serde(default)]
    pub lv_circuit_distance_mm: f64,

    // Electrical ratings
    #[serde(default)]
    pub power_kva: f64,
    #[serde(default)]
    pub primary_voltage: f64,
    #[serde(default)]
    pub secondary_voltage: f64,
    #[serde(default = "default_frequency_hz")]
    pub frequency_hz: f64,
    #[serde(default = "default_b_max")]
    pub b_max: f64,

    // Windings & circuit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration: Option<PhaseConfiguration>,
    #[serde(default)]
    pub winding_material: WindingMaterial,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_coupling: Option<Coupling>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_coupling: Option<Coupling>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hourly_index: Option<u8>,

    // Magnetic core
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub core_material: Option<CoreMaterial>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sheet_type: Option<SheetGrade>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub magnetic_circuit_type: Option<MagneticCircuit>,

    // Cooling & temperature
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooling_type: Option<CoolingClass>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_temperature_rise: Option<f64>,
}

impl Default for TransformerInputs {
    fn default() -> Self {
        Self {
            client_name: None,
            project_name: None,
            transformer_type: None,
            installation_type: None,
            conductor_kind: None,
            insulation_thickness_mm: 0.0,
            winding_height_mm: 0.0,
            conductor: None,
            stages: 0,
            lv_layers: 0,
            lv_turns_per_layer: 0,
            paper_thickness_mm: 0.0,
            paper_count: 0,
            lv_insulation_mm: 0.0,
            lv_channel_count: 0,
            lv_channel_width_mm: 0.0,
            lead_exit: None,
            lv_circuit_distance_mm: 0.0,
            power_kva: 0.0,
            primary_voltage: 0.0,
            secondary_voltage: 0.0,
            frequency_hz: default_frequency_hz(),
            b_max: default_b_max(),
            configuration: None,
            winding_material: WindingMaterial::default(),
            primary_coupling: None,
            secondary_coupling: None,
            hourly_index: None,
            core_material: None,
            sheet_type: None,
            magnetic_circuit_type: None,
            cooling_type: None,
            max_temperature_rise: None,
        }
    }
}

impl TransformerInputs {
    /// Inputs with the three required ratings set and everything else at its
    /// form default.
    pub fn rated(power_kva: f64, primary_voltage: f64, secondary_voltage: f64) -> Self {
        Self {
            power_kva,
            primary_voltage,
            secondary_voltage,
            ..Self::default()
        }
    }

    /// Primary-to-secondary voltage ratio.
    pub fn voltage_ratio(&self) -> f64 {
        self.primary_voltage / self.secondary_voltage
    }
}
