//! Empirical coefficients of the sizing model.
//!
//! Mass and cost figures are per kVA of rated power unless stated otherwise.

/// EMF equation factor (4.44 = 2π/√2).
pub const EMF_FACTOR: f64 = 4.44;
/// Core section scale applied to B_max in the volts-per-turn relation.
pub const CORE_SECTION_SCALE: f64 = 1e-4;

/// Design current density, A/mm².
pub const CURRENT_DENSITY_CU: f64 = 3.5;
pub const CURRENT_DENSITY_AL: f64 = 2.5;

/// I²R proxy coefficients, Ω.
pub const PRIMARY_RESISTANCE_PROXY: f64 = 0.5;
pub const SECONDARY_RESISTANCE_PROXY: f64 = 0.3;

/// No-load loss, W/kVA.
pub const CORE_LOSS_W_PER_KVA: f64 = 0.8;

pub const BASE_TEMPERATURE_C: f64 = 75.0;
pub const LOSS_TEMPERATURE_COEFF: f64 = 0.05;
pub const AMBIENT_TEMPERATURE_C: f64 = 40.0;

pub const TOTAL_WEIGHT_KG_PER_KVA: f64 = 1.8;
pub const TOTAL_WEIGHT_BASE_KG: f64 = 50.0;
pub const COPPER_MASS_KG_PER_KVA: f64 = 0.45;

pub const CORE_WEIGHT_KG_PER_KVA: f64 = 0.95;
pub const CORE_SECTION_PER_KVA: f64 = 15.0;
pub const LIMB_MASS_SHARE: f64 = 0.6;
pub const FOURTH_LIMB_SECTION_SHARE: f64 = 0.8;
pub const FOURTH_LIMB_MASS_SHARE: f64 = 0.2;
pub const YOKE_SECTION_SHARE: f64 = 1.2;
pub const YOKE_INDUCTION_SHARE: f64 = 0.9;
pub const YOKE_MASS_SHARE: f64 = 0.4;
/// Magnetic sheet thickness, mm.
pub const SHEET_THICKNESS_MM: f64 = 0.35;

/// Fixed-fraction loss model behind the efficiency figure, W/kVA.
pub const RATED_LOSS_W_PER_KVA: f64 = 12.0;

pub const CO2_KG_PER_KVA: f64 = 1.25;
pub const RECYCLABILITY_PCT: f64 = 85.0;

pub const CORE_COST_EUR_PER_KVA: f64 = 4.5;
pub const INSULATION_COST_EUR_PER_KVA: f64 = 0.85;
pub const PRIMARY_CONDUCTOR_KG_PER_KVA: f64 = 0.25;
pub const SECONDARY_CONDUCTOR_KG_PER_KVA: f64 = 0.20;
pub const COPPER_PRICE_EUR_PER_KG: f64 = 8.5;
pub const ALUMINIUM_PRICE_EUR_PER_KG: f64 = 6.2;

/// Flat operating cost, €/kVA/year, over the service life.
pub const OPERATING_COST_EUR_PER_KVA_YEAR: f64 = 15.0;
pub const SERVICE_LIFE_YEARS: f64 = 20.0;
