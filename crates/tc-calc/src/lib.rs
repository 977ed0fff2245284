//! tc-calc: closed-form transformer sizing model.
//!
//! Provides:
//! - electrical quantities (line/phase voltages and currents, voltage classes, losses)
//! - winding sizing (turns, conductor sections, current densities)
//! - thermal estimate and insulation class
//! - mechanical envelope and core breakdown
//! - CO2, efficiency rating, bill of materials and lifetime cost
//!
//! Every calculation is a free function of a `&TransformerInputs`;
//! [`TransformerCalculator`] bundles them over one validated snapshot.
//!
//! # Example
//!
//! ```
//! use tc_calc::TransformerCalculator;
//! use tc_project::TransformerInputs;
//!
//! let calc = TransformerCalculator::new(TransformerInputs::rated(100.0, 20_000.0, 400.0)).unwrap();
//! let results = calc.compute_all();
//! assert_eq!(results.efficiency_pct, 98.8);
//! ```

pub mod bom;
pub mod calculator;
pub mod constants;
pub mod cooling;
pub mod electrical;
pub mod environment;
pub mod error;
pub mod geometry;
pub mod mechanical;
pub mod results;
pub mod thermal;
pub mod winding;

pub use calculator::{TransformerCalculator, compute_all, copper_mass};
pub use error::{CalcError, CalcResult};
pub use results::*;
