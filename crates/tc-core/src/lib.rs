//! tc-core: stable foundation for transfocalc.
//!
//! Contains:
//! - units (uom SI electrical types + constructors)
//! - numeric (Real + tolerances + rounding helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{TcError, TcResult};
pub use numeric::*;
pub use units::*;
