//! Calculation errors.

use tc_project::ValidationError;
use thiserror::Error;

/// Result type for calculation entry points.
pub type CalcResult<T> = Result<T, CalcError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    /// Inputs were rejected before any formula ran.
    #[error("Invalid inputs: {0}")]
    Validation(#[from] ValidationError),
}
